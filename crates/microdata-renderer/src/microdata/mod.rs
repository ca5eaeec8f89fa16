//! Microdata directives and role for reStructuredText-style documents.
//!
//! [`MicrodataExtension`] installs three handlers on a [`DocumentParser`]:
//!
//! - `.. itemscope:: Type` declares an entity (`itemscope` + `itemtype`)
//! - `.. itempropblock:: name` wraps block content in an `itemprop` element
//! - `` :itemprop:`value <name|info|tag>` `` marks an inline property
//!
//! # Example
//!
//! ```
//! use microdata_renderer::RenderOptions;
//! use microdata_renderer::microdata::MicrodataExtension;
//!
//! let source = "\
//! .. itemscope:: Person
//!
//!    My name is :itemprop:`John Doe <name>`
//! ";
//!
//! let result = MicrodataExtension::new(RenderOptions::default())
//!     .render_rst(source)
//!     .unwrap();
//!
//! assert_eq!(
//!     result.html,
//!     r#"<div itemscope itemtype="http://data-vocabulary.org/Person">My name is <span itemprop="name">John Doe</span></div>"#
//! );
//! ```

mod itemprop;
mod itempropblock;
mod itemscope;

pub use itemprop::ItemPropRole;
pub use itempropblock::ItemPropBlockDirective;
pub use itemscope::ItemScopeDirective;

use crate::directive::DocumentParser;
use crate::{HtmlRenderer, MicrodataError, RenderOptions, RenderResult};

/// Registers the microdata handlers and renders their output.
#[derive(Clone, Debug, Default)]
pub struct MicrodataExtension {
    options: RenderOptions,
}

impl MicrodataExtension {
    /// Create the extension with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options shared by the handlers and the renderer.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Install `itemscope`, `itempropblock` and `itemprop` on a parser.
    #[must_use]
    pub fn register(&self, parser: DocumentParser) -> DocumentParser {
        parser
            .with_directive(ItemScopeDirective::new(
                self.options.vocabulary_base.as_str(),
            ))
            .with_directive(ItemPropBlockDirective)
            .with_role(ItemPropRole::new(self.options.empty_value))
    }

    /// Create a renderer using these options.
    #[must_use]
    pub fn renderer(&self) -> HtmlRenderer {
        HtmlRenderer::new(self.options.clone())
    }

    /// Parse and render a document in one step.
    ///
    /// Parser warnings (unknown directives and roles) come before renderer
    /// warnings in the result.
    pub fn render_rst(&self, input: &str) -> Result<RenderResult, MicrodataError> {
        let mut parser = self.register(DocumentParser::new());
        let document = parser.parse(input)?;

        let mut result = self.renderer().render(&document);
        let mut warnings = parser.take_warnings();
        warnings.append(&mut result.warnings);
        result.warnings = warnings;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeOrder, EmptyValuePolicy, ImageGate};
    use pretty_assertions::assert_eq;

    fn render(input: &str) -> String {
        MicrodataExtension::default()
            .render_rst(input)
            .unwrap()
            .html
    }

    fn render_sorted(input: &str) -> String {
        let options = RenderOptions::new().with_attribute_order(AttributeOrder::Sorted);
        MicrodataExtension::new(options)
            .render_rst(input)
            .unwrap()
            .html
    }

    #[test]
    fn test_register_installs_handlers() {
        let parser = MicrodataExtension::default().register(DocumentParser::new());
        assert_eq!(
            parser.directive_names().collect::<Vec<_>>(),
            vec!["itemscope", "itempropblock"]
        );
        assert_eq!(parser.role_names().collect::<Vec<_>>(), vec!["itemprop"]);
    }

    #[test]
    fn test_itemprop_simple() {
        assert_eq!(
            render(":itemprop:`Test <name>`"),
            r#"<p><span itemprop="name">Test</span></p>"#
        );
    }

    #[test]
    fn test_itemprop_url() {
        assert_eq!(
            render(":itemprop:`Test <url:http://somewhere/>`"),
            r#"<p><a itemprop="url" href="http://somewhere/">Test</a></p>"#
        );
        assert_eq!(
            render_sorted(":itemprop:`Test <url:http://somewhere/>`"),
            r#"<p><a href="http://somewhere/" itemprop="url">Test</a></p>"#
        );
    }

    #[test]
    fn test_itemprop_pipe_forms() {
        assert_eq!(
            render(":itemprop:`Logo <logo|/logo.png|img>`"),
            r#"<p><img itemprop="logo" src="/logo.png"></p>"#
        );
        assert_eq!(
            render(":itemprop:`Today <startDate|2024-05-05|time>`"),
            r#"<p><time itemprop="startDate" datetime="2024-05-05">Today</time></p>"#
        );
        assert_eq!(
            render(":itemprop:`<ratingValue|4.5|meta>`"),
            r#"<p><meta itemprop="ratingValue" content="4.5"></p>"#
        );
        assert_eq!(
            render(":itemprop:`Chef <jobTitle||em>`"),
            r#"<p><em itemprop="jobTitle">Chef</em></p>"#
        );
    }

    #[test]
    fn test_itemscope() {
        let source = "\
.. itemscope:: Person

    My name is :itemprop:`John Doe <name>`
";
        assert_eq!(
            render_sorted(source),
            r#"<div itemscope itemtype="http://data-vocabulary.org/Person">My name is <span itemprop="name">John Doe</span></div>"#
        );
    }

    #[test]
    fn test_itemscope_with_tag_and_class() {
        let source = "\
.. itemscope:: Person
    :tag: section
    :class: vcard h-card

    My name is :itemprop:`John Doe <name>`
";
        assert_eq!(
            render(source),
            r#"<section itemscope itemtype="http://data-vocabulary.org/Person" class="vcard h-card">My name is <span itemprop="name">John Doe</span></section>"#
        );
    }

    #[test]
    fn test_itemscope_nested() {
        let source = "\
.. itemscope:: Person

    My name is :itemprop:`John Doe <name>`

    .. itemscope:: Address
        :tag: p
        :itemprop: address

        My name is :itemprop:`John Doe <name>`
";
        assert_eq!(
            render_sorted(source),
            concat!(
                r#"<div itemscope itemtype="http://data-vocabulary.org/Person">"#,
                r#"<p>My name is <span itemprop="name">John Doe</span></p>"#,
                r#"<p itemprop="address" itemscope itemtype="http://data-vocabulary.org/Address">"#,
                r#"My name is <span itemprop="name">John Doe</span></p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_itemscope_nested_compact() {
        let source = "\
.. itemscope:: Person
    :tag: p
    :compact:

    My name is :itemprop:`John Doe <name>`

    .. itemscope:: Address
        :tag: span
        :itemprop: address

        My name is :itemprop:`John Doe <name>`
";
        assert_eq!(
            render_sorted(source),
            concat!(
                r#"<p itemscope itemtype="http://data-vocabulary.org/Person">"#,
                r#"My name is <span itemprop="name">John Doe</span>"#,
                r#"<span itemprop="address" itemscope itemtype="http://data-vocabulary.org/Address">"#,
                r#"My name is <span itemprop="name">John Doe</span></span>"#,
                "</p>"
            )
        );
    }

    #[test]
    fn test_itempropblock() {
        let source = "\
.. itemscope:: Recipe

    .. itempropblock:: instructions
        :tag: ol
        :class: steps

        Mix the flour.

        Bake for an hour.
";
        assert_eq!(
            render(source),
            concat!(
                r#"<div itemscope itemtype="http://data-vocabulary.org/Recipe">"#,
                r#"<ol itemprop="instructions" class="steps"><p>Mix the flour.</p><p>Bake for an hour.</p></ol>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_vocabulary_base() {
        let options = RenderOptions::new().with_vocabulary_base("https://schema.org/");
        let result = MicrodataExtension::new(options)
            .render_rst(".. itemscope:: Person\n\n   :itemprop:`Ann <name>`")
            .unwrap();
        assert_eq!(
            result.html,
            r#"<div itemscope itemtype="https://schema.org/Person"><span itemprop="name">Ann</span></div>"#
        );
    }

    #[test]
    fn test_photo_only_gate() {
        let options = RenderOptions::new().with_image_gate(ImageGate::PhotoOnly);
        let result = MicrodataExtension::new(options)
            .render_rst(":itemprop:`Logo <logo|/logo.png|img>` :itemprop:`Me <photo|/me.png|img>`")
            .unwrap();
        assert_eq!(
            result.html,
            r#"<p><img itemprop="logo"> <img itemprop="photo" src="/me.png"></p>"#
        );
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_reject_empty_value() {
        let options = RenderOptions::new().with_empty_value(EmptyValuePolicy::Reject);
        let err = MicrodataExtension::new(options)
            .render_rst("Rating :itemprop:`<ratingValue|4|meta>`")
            .unwrap_err();
        assert!(matches!(err, MicrodataError::EmptyValue { .. }));
    }

    #[test]
    fn test_malformed_reference_aborts() {
        let err = MicrodataExtension::default()
            .render_rst("Fine.\n\nBroken :itemprop:`no name here`")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"no name here\" does not match expected itemprop format: :itemprop:`value <name>`"
        );
    }

    #[test]
    fn test_itemscope_without_content() {
        let err = MicrodataExtension::default()
            .render_rst(".. itemscope:: Person\n")
            .unwrap_err();
        assert_eq!(
            err,
            MicrodataError::ContentRequired {
                directive: "itemscope".to_owned(),
                line: 1
            }
        );
    }

    #[test]
    fn test_itemscope_unknown_option() {
        let err = MicrodataExtension::default()
            .render_rst(".. itemscope:: Person\n   :color: red\n\n   Text")
            .unwrap_err();
        assert!(matches!(err, MicrodataError::UnknownOption { .. }));
    }

    #[test]
    fn test_itempropblock_rejects_itemprop_option() {
        let err = MicrodataExtension::default()
            .render_rst(".. itempropblock:: description\n   :itemprop: x\n\n   Text")
            .unwrap_err();
        assert!(matches!(err, MicrodataError::UnknownOption { .. }));
    }

    #[test]
    fn test_warnings_merged_in_order() {
        let source = "\
.. note:: Heads up

   :itemprop:`Home <url>` and :unknown:`x`
";
        let result = MicrodataExtension::default().render_rst(source).unwrap();
        assert_eq!(
            result.html,
            r#"<p>.. note:: Heads up</p><p><a itemprop="url" href="">Home</a> and :unknown:`x`</p>"#
        );
        assert_eq!(
            result.warnings,
            vec![
                "line 1: unknown directive \"note\" passed through".to_owned(),
                "line 3: unknown role \"unknown\" passed through".to_owned(),
                "property \"url\" renders an empty href attribute".to_owned(),
            ]
        );
    }
}
