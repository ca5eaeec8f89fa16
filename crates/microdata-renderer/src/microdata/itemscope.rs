//! `itemscope` block directive.
//!
//! ```text
//! .. itemscope:: Person
//!    :tag: p
//!    :itemprop: author
//!    :compact:
//!    :class: vcard
//!
//!    My name is :itemprop:`John Doe <name>`
//! ```

use crate::directive::{BlockDirective, DirectiveArgs, DirectiveContext, require_content};
use crate::html::is_valid_tag_name;
use crate::{MicrodataError, Node, ScopeDeclaration, type_uri};

/// Declares a microdata entity whose type is the directive argument.
pub struct ItemScopeDirective {
    vocabulary_base: String,
}

impl ItemScopeDirective {
    /// Create the directive; type names are appended to `vocabulary_base`.
    #[must_use]
    pub fn new(vocabulary_base: impl Into<String>) -> Self {
        Self {
            vocabulary_base: vocabulary_base.into(),
        }
    }
}

impl BlockDirective for ItemScopeDirective {
    fn name(&self) -> &str {
        "itemscope"
    }

    fn arguments(&self) -> usize {
        1
    }

    fn options(&self) -> &[&str] {
        &["tag", "itemprop", "compact", "class"]
    }

    fn run(
        &mut self,
        args: DirectiveArgs,
        children: Vec<Node>,
        ctx: &DirectiveContext,
    ) -> Result<Node, MicrodataError> {
        require_content(&children, self.name(), ctx)?;

        let type_name = args
            .argument(0)
            .ok_or_else(|| MicrodataError::MissingArgument {
                directive: self.name().to_owned(),
                line: ctx.line,
            })?;

        let mut scope = ScopeDeclaration::new(type_uri(&self.vocabulary_base, type_name))
            .with_compact(args.has("compact"))
            .with_classes(args.classes())
            .with_children(children);

        if let Some(tag) = args.get("tag") {
            if !is_valid_tag_name(tag) {
                return Err(MicrodataError::InvalidTag {
                    tag: tag.to_owned(),
                });
            }
            scope = scope.with_tag(tag);
        }
        if let Some(itemprop) = args.get("itemprop") {
            scope = scope.with_parent_property(itemprop);
        }

        tracing::debug!(
            itemtype = %scope.type_uri,
            tag = %scope.tag_name,
            compact = scope.is_compact(),
            "Declared scope"
        );

        Ok(Node::ItemScope(scope))
    }
}
