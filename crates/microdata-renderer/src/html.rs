//! HTML element emission.
//!
//! Builds start/end tags with attributes in a configurable order.

/// Order in which element attributes are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AttributeOrder {
    /// Attributes appear in the order they were added.
    #[default]
    Declared,
    /// Attributes are sorted by name (`<a href="..." itemprop="url">`).
    Sorted,
}

/// A single HTML attribute.
///
/// Attributes without a value are written bare (`itemscope`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: &'static str,
    /// Attribute value, unescaped.
    pub value: Option<String>,
}

/// An HTML element ready to be opened and closed.
///
/// # Example
///
/// ```
/// use microdata_renderer::{AttributeOrder, Element};
///
/// let element = Element::new("a").attr("itemprop", "url").attr("href", "http://x");
///
/// let mut out = String::new();
/// element.write_open(AttributeOrder::Declared, &mut out);
/// out.push_str("x");
/// element.write_close(&mut out);
///
/// assert_eq!(out, r#"<a itemprop="url" href="http://x">x</a>"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Whether the element is void (no content, no end tag).
    pub void: bool,
}

impl Element {
    /// Create an element; voidness follows the HTML element name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let void = is_void_element(&tag);
        Self {
            tag,
            attributes: Vec::new(),
            void,
        }
    }

    /// Add an attribute with a value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// Add a valueless attribute.
    #[must_use]
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attributes.push(Attribute { name, value: None });
        self
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// Write the start tag.
    pub fn write_open(&self, order: AttributeOrder, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        let mut attributes: Vec<&Attribute> = self.attributes.iter().collect();
        if order == AttributeOrder::Sorted {
            attributes.sort_by_key(|a| a.name);
        }

        for attribute in attributes {
            out.push(' ');
            out.push_str(attribute.name);
            if let Some(value) = &attribute.value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }

        out.push('>');
    }

    /// Write the end tag. Void elements write nothing.
    pub fn write_close(&self, out: &mut String) {
        if self.void {
            return;
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Whether `tag` is an HTML void element.
pub(crate) fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Whether `tag` is usable as an element name.
///
/// Accepts an ASCII letter followed by letters, digits, or hyphens.
pub(crate) fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: &Element, order: AttributeOrder, content: &str) -> String {
        let mut out = String::new();
        element.write_open(order, &mut out);
        if !element.void {
            out.push_str(content);
        }
        element.write_close(&mut out);
        out
    }

    #[test]
    fn test_declared_order() {
        let element = Element::new("a").attr("itemprop", "url").attr("href", "http://x");
        assert_eq!(
            render(&element, AttributeOrder::Declared, "x"),
            r#"<a itemprop="url" href="http://x">x</a>"#
        );
    }

    #[test]
    fn test_sorted_order() {
        let element = Element::new("a").attr("itemprop", "url").attr("href", "http://x");
        assert_eq!(
            render(&element, AttributeOrder::Sorted, "x"),
            r#"<a href="http://x" itemprop="url">x</a>"#
        );
    }

    #[test]
    fn test_flag_attribute_written_bare() {
        let element = Element::new("div")
            .flag("itemscope")
            .attr("itemtype", "http://data-vocabulary.org/Person");
        assert_eq!(
            render(&element, AttributeOrder::Declared, ""),
            r#"<div itemscope itemtype="http://data-vocabulary.org/Person"></div>"#
        );
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let element = Element::new("img").attr("src", "a.png");
        assert!(element.void);
        assert_eq!(
            render(&element, AttributeOrder::Declared, "ignored"),
            r#"<img src="a.png">"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let element = Element::new("span").attr("title", r#"a "b" & <c>"#);
        assert_eq!(
            render(&element, AttributeOrder::Declared, ""),
            r#"<span title="a &quot;b&quot; &amp; &lt;c&gt;"></span>"#
        );
    }

    #[test]
    fn test_get() {
        let element = Element::new("time").attr("datetime", "2024-01-01");
        assert_eq!(element.get("datetime"), Some("2024-01-01"));
        assert_eq!(element.get("href"), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry's <show>"), "Tom &amp; Jerry&#x27;s &lt;show&gt;");
    }

    #[test]
    fn test_is_valid_tag_name() {
        assert!(is_valid_tag_name("span"));
        assert!(is_valid_tag_name("h2"));
        assert!(is_valid_tag_name("my-element"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("2col"));
        assert!(!is_valid_tag_name("span onclick"));
        assert!(!is_valid_tag_name("a\"b"));
    }
}
