//! Document tree produced by [`DocumentParser`](crate::directive::DocumentParser).

use crate::{PropertyBlock, PropertyReference, ScopeDeclaration};

/// A parsed document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks in source order.
    pub children: Vec<Node>,
}

/// Block-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// `itemscope` block.
    ItemScope(ScopeDeclaration),
    /// `itempropblock` block.
    ItemPropBlock(PropertyBlock),
}

/// Inline node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Plain text, unescaped.
    Text(String),
    /// `itemprop` role.
    ItemProp(PropertyReference),
}

impl Node {
    /// Convenience constructor for a paragraph holding a single text run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::Text(text.into())])
    }
}
