//! Inline role trait.
//!
//! Roles use the interpreted-text syntax: `` :name:`text` ``

use super::DirectiveContext;
use crate::{Inline, MicrodataError};

/// Handler for inline roles: `` :name:`text` ``
///
/// # Example
///
/// ```
/// use microdata_renderer::directive::{DirectiveContext, InlineRole};
/// use microdata_renderer::{Inline, MicrodataError};
///
/// struct ShoutRole;
///
/// impl InlineRole for ShoutRole {
///     fn name(&self) -> &str { "shout" }
///
///     fn run(&mut self, text: &str, _ctx: &DirectiveContext) -> Result<Inline, MicrodataError> {
///         Ok(Inline::Text(text.to_uppercase()))
///     }
/// }
/// ```
pub trait InlineRole: Send {
    /// Role name (e.g., "itemprop").
    ///
    /// This is matched against the role syntax: `` :name:`...` ``
    fn name(&self) -> &str;

    /// Build the inline node for the role text (backquotes stripped).
    fn run(&mut self, text: &str, ctx: &DirectiveContext) -> Result<Inline, MicrodataError>;
}
