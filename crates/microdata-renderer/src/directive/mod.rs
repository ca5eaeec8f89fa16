//! Pluggable directives API for reStructuredText-style markup.
//!
//! This module provides a trait-based extensibility system for the two
//! explicit-markup forms the microdata extension needs: block directives
//! (`.. name:: arguments`) and inline roles (`` :name:`text` ``).
//!
//! # Architecture
//!
//! [`DocumentParser`] splits input into paragraphs and directive blocks.
//! Directive bodies are parsed recursively before the handler runs, so a
//! [`BlockDirective`] receives finished child nodes and returns a single
//! [`Node`](crate::Node). Roles are resolved while a paragraph's text is
//! split into inline runs.
//!
//! Handlers are registered per parser instance. Unknown directives and roles
//! are passed through as text and reported in [`DocumentParser::warnings`].
//!
//! # Example
//!
//! ```
//! use microdata_renderer::directive::{
//!     BlockDirective, DirectiveArgs, DirectiveContext, DocumentParser, require_content,
//! };
//! use microdata_renderer::{MicrodataError, Node, PropertyBlock};
//!
//! struct AbstractDirective;
//!
//! impl BlockDirective for AbstractDirective {
//!     fn name(&self) -> &str { "abstract" }
//!
//!     fn run(
//!         &mut self,
//!         _args: DirectiveArgs,
//!         children: Vec<Node>,
//!         ctx: &DirectiveContext,
//!     ) -> Result<Node, MicrodataError> {
//!         require_content(&children, "abstract", ctx)?;
//!         Ok(Node::ItemPropBlock(PropertyBlock::new("abstract").with_children(children)))
//!     }
//! }
//!
//! let mut parser = DocumentParser::new().with_directive(AbstractDirective);
//! let document = parser.parse(".. abstract::\n\n   Short summary.").unwrap();
//!
//! assert_eq!(document.children.len(), 1);
//! ```

mod args;
mod block;
mod context;
pub(crate) mod parser;
mod processor;
mod role;

pub use args::DirectiveArgs;
pub use block::{BlockDirective, require_content};
pub use context::DirectiveContext;
pub use processor::DocumentParser;
pub use role::InlineRole;
