//! Block directive trait.
//!
//! Block directives use the explicit markup syntax:
//!
//! ```text
//! .. name:: arguments
//!    :option: value
//!
//!    Indented body, parsed recursively.
//! ```

use super::{DirectiveArgs, DirectiveContext};
use crate::{MicrodataError, Node};

/// Handler for block directives: `.. name:: arguments`
///
/// The body is parsed before [`run`](Self::run) is called, so handlers receive
/// finished child nodes. Options outside [`options`](Self::options) and
/// argument counts other than [`arguments`](Self::arguments) are rejected by
/// [`DocumentParser`](super::DocumentParser) before the handler runs.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its own
/// parser instance.
///
/// # Example
///
/// ```
/// use microdata_renderer::directive::{BlockDirective, DirectiveArgs, DirectiveContext};
/// use microdata_renderer::{MicrodataError, Node, PropertyBlock};
///
/// struct AbstractDirective;
///
/// impl BlockDirective for AbstractDirective {
///     fn name(&self) -> &str { "abstract" }
///
///     fn run(
///         &mut self,
///         _args: DirectiveArgs,
///         children: Vec<Node>,
///         _ctx: &DirectiveContext,
///     ) -> Result<Node, MicrodataError> {
///         Ok(Node::ItemPropBlock(PropertyBlock::new("abstract").with_children(children)))
///     }
/// }
/// ```
pub trait BlockDirective: Send {
    /// Directive name (e.g., "itemscope").
    ///
    /// This is matched against the directive syntax: `.. name::`
    fn name(&self) -> &str;

    /// Number of positional arguments the directive takes.
    fn arguments(&self) -> usize {
        0
    }

    /// Recognized option names.
    fn options(&self) -> &[&str] {
        &[]
    }

    /// Build the node for this directive from its arguments and parsed body.
    fn run(
        &mut self,
        args: DirectiveArgs,
        children: Vec<Node>,
        ctx: &DirectiveContext,
    ) -> Result<Node, MicrodataError>;
}

/// Fail with [`MicrodataError::ContentRequired`] when a directive body is empty.
pub fn require_content(
    children: &[Node],
    directive: &str,
    ctx: &DirectiveContext,
) -> Result<(), MicrodataError> {
    if children.is_empty() {
        return Err(MicrodataError::ContentRequired {
            directive: directive.to_owned(),
            line: ctx.line,
        });
    }
    Ok(())
}
