//! HTML renderer for microdata documents.

use crate::rules::{block_element, payload, property_element, scope_element};
use crate::{Document, Element, Inline, Node, PropertyReference, RenderOptions, escape_html};

/// Result of rendering a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Warnings generated during rendering (e.g., missing `href` payloads).
    pub warnings: Vec<String>,
}

/// Renders a [`Document`] to HTML.
///
/// Each scope pushes its compact flag before its children are rendered and
/// pops it afterwards; property blocks push `false`. The stack belongs to
/// the renderer instance, so renders never share state.
///
/// # Example
///
/// ```
/// use microdata_renderer::{
///     Document, HtmlRenderer, Inline, Node, PropertyReference, RenderOptions, ScopeDeclaration,
/// };
///
/// let scope = ScopeDeclaration::new("http://data-vocabulary.org/Person")
///     .with_tag("p")
///     .with_children(vec![Node::Paragraph(vec![
///         Inline::Text("I am ".to_owned()),
///         Inline::ItemProp(PropertyReference::new("Bob", "name")),
///     ])]);
/// let document = Document { children: vec![Node::ItemScope(scope)] };
///
/// let result = HtmlRenderer::new(RenderOptions::default()).render(&document);
/// assert_eq!(
///     result.html,
///     r#"<p itemscope itemtype="http://data-vocabulary.org/Person">I am <span itemprop="name">Bob</span></p>"#
/// );
/// ```
pub struct HtmlRenderer {
    options: RenderOptions,
    output: String,
    compact_stack: Vec<bool>,
    warnings: Vec<String>,
}

impl HtmlRenderer {
    /// Create a renderer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            output: String::new(),
            compact_stack: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Options this renderer was created with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a document.
    pub fn render(&mut self, document: &Document) -> RenderResult {
        self.output.clear();
        self.compact_stack.clear();

        self.render_children(&document.children, false);

        RenderResult {
            html: std::mem::take(&mut self.output),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn render_children(&mut self, children: &[Node], in_container: bool) {
        for (idx, child) in children.iter().enumerate() {
            match child {
                Node::Paragraph(inlines) => {
                    if in_container && idx == 0 && self.unwraps_first_paragraph(children.len()) {
                        self.render_inlines(inlines);
                    } else {
                        self.output.push_str("<p>");
                        self.render_inlines(inlines);
                        self.output.push_str("</p>");
                    }
                }
                Node::ItemScope(scope) => {
                    self.render_container(&scope_element(scope), scope.is_compact(), &scope.children);
                }
                Node::ItemPropBlock(block) => {
                    self.render_container(&block_element(block), false, &block.children);
                }
            }
        }
    }

    fn render_container(&mut self, element: &Element, compact: bool, children: &[Node]) {
        element.write_open(self.options.attribute_order, &mut self.output);
        self.compact_stack.push(compact);
        self.render_children(children, true);
        self.compact_stack.pop();
        element.write_close(&mut self.output);
    }

    /// Whether the first paragraph of the current container loses its `<p>` wrapper.
    fn unwraps_first_paragraph(&self, sibling_count: usize) -> bool {
        let compact = self.compact_stack.last().copied().unwrap_or(false);
        compact || (self.options.compact_sole_paragraph && sibling_count == 1)
    }

    fn render_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            match inline {
                Inline::Text(text) => self.output.push_str(&escape_html(text)),
                Inline::ItemProp(reference) => self.render_property(reference),
            }
        }
    }

    fn render_property(&mut self, reference: &PropertyReference) {
        self.check_payload(reference);

        let element = property_element(reference, self.options.image_gate);
        element.write_open(self.options.attribute_order, &mut self.output);
        if !element.void {
            self.output.push_str(&escape_html(&reference.display_value));
        }
        element.write_close(&mut self.output);
    }

    fn check_payload(&mut self, reference: &PropertyReference) {
        let name = &reference.property_name;
        match payload(reference, self.options.image_gate) {
            Some(payload) if reference.extra_info.is_empty() => {
                tracing::warn!(property = %name, attribute = payload.attribute(), "Empty payload");
                self.warnings.push(format!(
                    "property \"{name}\" renders an empty {} attribute",
                    payload.attribute()
                ));
            }
            None if !reference.extra_info.is_empty() => {
                tracing::warn!(property = %name, info = %reference.extra_info, "Unused extra info");
                self.warnings.push(format!(
                    "property \"{name}\" ignores extra info \"{}\"",
                    reference.extra_info
                ));
            }
            _ => {}
        }
    }
}
