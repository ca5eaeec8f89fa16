//! Directive processing context.
//!
//! Provides source location information to directive and role handlers.

use std::path::Path;

/// Context provided to handlers for error and warning messages.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use microdata_renderer::directive::DirectiveContext;
///
/// let ctx = DirectiveContext {
///     source_path: Some(Path::new("pages/about.rst")),
///     line: 12,
/// };
///
/// assert_eq!(ctx.location(), "pages/about.rst:12");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DirectiveContext<'a> {
    /// Path to the source file being parsed (if known).
    pub source_path: Option<&'a Path>,
    /// Line number where the directive or role appears (1-indexed).
    pub line: usize,
}

impl DirectiveContext<'_> {
    /// Human-readable source location.
    #[must_use]
    pub fn location(&self) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}", path.display(), self.line),
            None => format!("line {}", self.line),
        }
    }
}
