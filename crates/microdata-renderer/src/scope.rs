//! Block-level microdata declarations.

use crate::Node;

/// Tag used by block declarations when none is given.
pub const DEFAULT_BLOCK_TAG: &str = "div";

/// Build an `itemtype` URI from a vocabulary base and a type name.
///
/// # Example
///
/// ```
/// use microdata_renderer::type_uri;
///
/// assert_eq!(type_uri("http://data-vocabulary.org", "Person"), "http://data-vocabulary.org/Person");
/// assert_eq!(type_uri("https://schema.org/", "Person"), "https://schema.org/Person");
/// ```
pub fn type_uri(base: &str, type_name: &str) -> String {
    format!("{}/{type_name}", base.trim_end_matches('/'))
}

/// An `itemscope` block: a microdata entity of a given type.
///
/// # Example
///
/// ```
/// use microdata_renderer::ScopeDeclaration;
///
/// let scope = ScopeDeclaration::new("http://data-vocabulary.org/Address")
///     .with_tag("p")
///     .with_parent_property("address");
///
/// assert!(scope.is_compact());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeDeclaration {
    /// Element to emit.
    pub tag_name: String,
    /// Full `itemtype` URI.
    pub type_uri: String,
    /// Property this scope fills on its parent scope (`itemprop`).
    pub parent_property: Option<String>,
    /// Explicit compact flag. See [`is_compact`](Self::is_compact).
    pub compact: bool,
    /// CSS classes.
    pub css_classes: Vec<String>,
    /// Nested content.
    pub children: Vec<Node>,
}

impl ScopeDeclaration {
    /// Create a `div` scope of the given type URI.
    #[must_use]
    pub fn new(type_uri: impl Into<String>) -> Self {
        Self {
            tag_name: DEFAULT_BLOCK_TAG.to_owned(),
            type_uri: type_uri.into(),
            parent_property: None,
            compact: false,
            css_classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the element tag.
    #[must_use]
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Set the parent property name.
    #[must_use]
    pub fn with_parent_property(mut self, name: impl Into<String>) -> Self {
        self.parent_property = Some(name.into());
        self
    }

    /// Set the explicit compact flag.
    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set CSS classes.
    #[must_use]
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.css_classes = classes;
        self
    }

    /// Set nested content.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Whether the scope's own first paragraph merges into the scope element.
    ///
    /// True for `p` scopes and for scopes with the explicit flag.
    pub fn is_compact(&self) -> bool {
        self.compact || self.tag_name == "p"
    }
}

/// An `itempropblock` block: a property whose value is block content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyBlock {
    /// Element to emit.
    pub tag_name: String,
    /// The `itemprop` name.
    pub property_name: String,
    /// CSS classes.
    pub css_classes: Vec<String>,
    /// Nested content.
    pub children: Vec<Node>,
}

impl PropertyBlock {
    /// Create a `div` property block.
    #[must_use]
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            tag_name: DEFAULT_BLOCK_TAG.to_owned(),
            property_name: property_name.into(),
            css_classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the element tag.
    #[must_use]
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Set CSS classes.
    #[must_use]
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.css_classes = classes;
        self
    }

    /// Set nested content.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}
