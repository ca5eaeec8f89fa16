//! Tag emission rules.
//!
//! Decides which element a microdata node opens and which attributes it carries.

use crate::property::DEFAULT_TAG;
use crate::{Element, PropertyBlock, PropertyReference, ScopeDeclaration};

/// Which properties the `img` rule applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ImageGate {
    /// Any property targeting `img` emits `<img src>`.
    #[default]
    AnyProperty,
    /// Only the `photo` property targeting `img` emits `<img src>`.
    PhotoOnly,
}

/// Attribute that carries a reference's extra info, if its row has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// `href` on `<a>`.
    Href,
    /// `src` on `<img>`.
    Src,
    /// `datetime` on `<time>`.
    Datetime,
    /// `content` on `<meta>`.
    Content,
}

impl Payload {
    /// Attribute name.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Href => "href",
            Self::Src => "src",
            Self::Datetime => "datetime",
            Self::Content => "content",
        }
    }

    /// Element the row emits.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Href => "a",
            Self::Src => "img",
            Self::Datetime => "time",
            Self::Content => "meta",
        }
    }
}

/// Pick the payload attribute for a reference (first matching row wins).
///
/// | condition                 | element | payload    |
/// |---------------------------|---------|------------|
/// | name is `url`             | `a`     | `href`     |
/// | tag is `img` (gated)      | `img`   | `src`      |
/// | tag is `time`             | `time`  | `datetime` |
/// | tag is `meta`             | `meta`  | `content`  |
/// | otherwise                 | tag     | none       |
pub fn payload(reference: &PropertyReference, gate: ImageGate) -> Option<Payload> {
    let tag = target_tag(reference);
    if reference.property_name == "url" {
        Some(Payload::Href)
    } else if tag == "img" && (gate == ImageGate::AnyProperty || reference.property_name == "photo")
    {
        Some(Payload::Src)
    } else if tag == "time" {
        Some(Payload::Datetime)
    } else if tag == "meta" {
        Some(Payload::Content)
    } else {
        None
    }
}

/// Element for an inline `itemprop` reference.
///
/// # Example
///
/// ```
/// use microdata_renderer::{ImageGate, PropertyReference, property_element};
///
/// let reference = PropertyReference::parse("Home <url|http://x>").unwrap();
/// let element = property_element(&reference, ImageGate::AnyProperty);
/// assert_eq!(element.tag, "a");
/// assert_eq!(element.get("href"), Some("http://x"));
/// ```
pub fn property_element(reference: &PropertyReference, gate: ImageGate) -> Element {
    let name = reference.property_name.as_str();
    match payload(reference, gate) {
        Some(payload) => Element::new(payload.tag())
            .attr("itemprop", name)
            .attr(payload.attribute(), &reference.extra_info),
        None => Element::new(target_tag(reference)).attr("itemprop", name),
    }
}

/// Element for an `itemscope` block.
pub fn scope_element(scope: &ScopeDeclaration) -> Element {
    let mut element = Element::new(scope.tag_name.as_str())
        .flag("itemscope")
        .attr("itemtype", &scope.type_uri);
    if let Some(parent) = &scope.parent_property {
        element = element.attr("itemprop", parent);
    }
    with_classes(element, &scope.css_classes)
}

/// Element for an `itempropblock` block.
pub fn block_element(block: &PropertyBlock) -> Element {
    let element = Element::new(block.tag_name.as_str()).attr("itemprop", &block.property_name);
    with_classes(element, &block.css_classes)
}

fn with_classes(element: Element, classes: &[String]) -> Element {
    if classes.is_empty() {
        element
    } else {
        element.attr("class", classes.join(" "))
    }
}

fn target_tag(reference: &PropertyReference) -> &str {
    if reference.target_tag.is_empty() {
        DEFAULT_TAG
    } else {
        &reference.target_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeOrder;
    use pretty_assertions::assert_eq;

    fn render(reference: &PropertyReference, gate: ImageGate) -> String {
        let element = property_element(reference, gate);
        let mut out = String::new();
        element.write_open(AttributeOrder::Declared, &mut out);
        if !element.void {
            out.push_str(&reference.display_value);
        }
        element.write_close(&mut out);
        out
    }

    #[test]
    fn test_default_span() {
        let reference = PropertyReference::parse("Bob Smith <name>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<span itemprop="name">Bob Smith</span>"#
        );
    }

    #[test]
    fn test_url_legacy_and_pipe_agree() {
        let legacy = PropertyReference::parse("value <url:http://x>").unwrap();
        let pipe = PropertyReference::parse("value <url|http://x>").unwrap();
        let expected = r#"<a itemprop="url" href="http://x">value</a>"#;
        assert_eq!(render(&legacy, ImageGate::AnyProperty), expected);
        assert_eq!(render(&pipe, ImageGate::AnyProperty), expected);
    }

    #[test]
    fn test_url_wins_over_target_tag() {
        let reference = PropertyReference::parse("value <url|http://x|time>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<a itemprop="url" href="http://x">value</a>"#
        );
    }

    #[test]
    fn test_img_is_void_and_drops_value() {
        let reference = PropertyReference::parse("Logo <logo|/logo.png|img>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<img itemprop="logo" src="/logo.png">"#
        );
    }

    #[test]
    fn test_time() {
        let reference = PropertyReference::parse("Jan 1 <published|2024-01-01|time>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<time itemprop="published" datetime="2024-01-01">Jan 1</time>"#
        );
    }

    #[test]
    fn test_meta_is_void_and_drops_value() {
        let reference = PropertyReference::parse("4.5 stars <rating|4.5|meta>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<meta itemprop="rating" content="4.5">"#
        );
    }

    #[test]
    fn test_custom_tag() {
        let reference = PropertyReference::parse("Title <name||strong>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<strong itemprop="name">Title</strong>"#
        );
    }

    #[test]
    fn test_empty_target_tag_falls_back_to_span() {
        let reference = PropertyReference::new("v", "name").with_target_tag("");
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<span itemprop="name">v</span>"#
        );
    }

    // `AnyProperty` and `PhotoOnly` disagree on non-`photo` img targets.

    #[test]
    fn test_image_gate_any_property_applies_to_logo() {
        let reference = PropertyReference::parse("x <logo|/l.png|img>").unwrap();
        assert_eq!(
            payload(&reference, ImageGate::AnyProperty),
            Some(Payload::Src)
        );
    }

    #[test]
    fn test_image_gate_photo_only_skips_logo() {
        let reference = PropertyReference::parse("x <logo|/l.png|img>").unwrap();
        assert_eq!(payload(&reference, ImageGate::PhotoOnly), None);
        // Falls through to the generic row, still void since `img` is void.
        assert_eq!(
            render(&reference, ImageGate::PhotoOnly),
            r#"<img itemprop="logo">"#
        );
    }

    #[test]
    fn test_image_gate_photo_only_applies_to_photo() {
        let reference = PropertyReference::parse("x <photo|/me.jpg|img>").unwrap();
        assert_eq!(
            render(&reference, ImageGate::PhotoOnly),
            r#"<img itemprop="photo" src="/me.jpg">"#
        );
        assert_eq!(
            render(&reference, ImageGate::AnyProperty),
            r#"<img itemprop="photo" src="/me.jpg">"#
        );
    }

    #[test]
    fn test_scope_element_attributes() {
        let scope = ScopeDeclaration::new("http://data-vocabulary.org/Address")
            .with_tag("p")
            .with_parent_property("address")
            .with_classes(vec!["vcard".to_owned(), "adr".to_owned()]);
        let mut out = String::new();
        scope_element(&scope).write_open(AttributeOrder::Declared, &mut out);
        assert_eq!(
            out,
            r#"<p itemscope itemtype="http://data-vocabulary.org/Address" itemprop="address" class="vcard adr">"#
        );
    }

    #[test]
    fn test_scope_element_without_optional_attributes() {
        let scope = ScopeDeclaration::new("http://data-vocabulary.org/Person");
        let element = scope_element(&scope);
        assert_eq!(element.get("itemprop"), None);
        assert_eq!(element.get("class"), None);
        assert_eq!(element.attributes.len(), 2);
    }

    #[test]
    fn test_block_element() {
        let block = PropertyBlock::new("description").with_tag("section");
        let mut out = String::new();
        let element = block_element(&block);
        element.write_open(AttributeOrder::Declared, &mut out);
        element.write_close(&mut out);
        assert_eq!(out, r#"<section itemprop="description"></section>"#);
    }
}
