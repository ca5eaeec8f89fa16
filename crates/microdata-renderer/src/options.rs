//! Rendering options.

use crate::{AttributeOrder, EmptyValuePolicy, ImageGate};

/// Default vocabulary base for `itemtype` URIs.
pub const DEFAULT_VOCABULARY_BASE: &str = "http://data-vocabulary.org";

/// Options shared by the microdata directives, role, and renderer.
///
/// # Example
///
/// ```
/// use microdata_renderer::{AttributeOrder, ImageGate, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_vocabulary_base("https://schema.org")
///     .with_image_gate(ImageGate::PhotoOnly)
///     .with_attribute_order(AttributeOrder::Sorted);
///
/// assert_eq!(options.vocabulary_base, "https://schema.org");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base URI that scope type names are appended to.
    pub vocabulary_base: String,
    /// Which properties the `img` rule applies to.
    pub image_gate: ImageGate,
    /// Whether `<name>` without a display value is accepted.
    pub empty_value: EmptyValuePolicy,
    /// Attribute order in start tags.
    pub attribute_order: AttributeOrder,
    /// Unwrap a paragraph that is the only child of a scope or property block.
    pub compact_sole_paragraph: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary_base: DEFAULT_VOCABULARY_BASE.to_owned(),
            image_gate: ImageGate::default(),
            empty_value: EmptyValuePolicy::default(),
            attribute_order: AttributeOrder::default(),
            compact_sole_paragraph: true,
        }
    }

    /// Set the vocabulary base.
    #[must_use]
    pub fn with_vocabulary_base(mut self, base: impl Into<String>) -> Self {
        self.vocabulary_base = base.into();
        self
    }

    /// Set the image gate.
    #[must_use]
    pub fn with_image_gate(mut self, gate: ImageGate) -> Self {
        self.image_gate = gate;
        self
    }

    /// Set the empty-value policy.
    #[must_use]
    pub fn with_empty_value(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_value = policy;
        self
    }

    /// Set the attribute order.
    #[must_use]
    pub fn with_attribute_order(mut self, order: AttributeOrder) -> Self {
        self.attribute_order = order;
        self
    }

    /// Enable or disable sole-paragraph compaction.
    #[must_use]
    pub fn with_compact_sole_paragraph(mut self, enabled: bool) -> Self {
        self.compact_sole_paragraph = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.vocabulary_base, "http://data-vocabulary.org");
        assert_eq!(options.image_gate, ImageGate::AnyProperty);
        assert_eq!(options.empty_value, EmptyValuePolicy::Allow);
        assert_eq!(options.attribute_order, AttributeOrder::Declared);
        assert!(options.compact_sole_paragraph);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_empty_value(EmptyValuePolicy::Reject)
            .with_compact_sole_paragraph(false);
        assert_eq!(options.empty_value, EmptyValuePolicy::Reject);
        assert!(!options.compact_sole_paragraph);
    }
}
