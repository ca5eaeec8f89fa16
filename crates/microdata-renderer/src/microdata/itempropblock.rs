//! `itempropblock` block directive.
//!
//! ```text
//! .. itempropblock:: description
//!    :tag: section
//!
//!    A longer description spanning paragraphs.
//! ```

use crate::directive::{BlockDirective, DirectiveArgs, DirectiveContext, require_content};
use crate::html::is_valid_tag_name;
use crate::{MicrodataError, Node, PropertyBlock};

/// Wraps block content in an element carrying an `itemprop`.
pub struct ItemPropBlockDirective;

impl BlockDirective for ItemPropBlockDirective {
    fn name(&self) -> &str {
        "itempropblock"
    }

    fn arguments(&self) -> usize {
        1
    }

    fn options(&self) -> &[&str] {
        &["tag", "class"]
    }

    fn run(
        &mut self,
        args: DirectiveArgs,
        children: Vec<Node>,
        ctx: &DirectiveContext,
    ) -> Result<Node, MicrodataError> {
        require_content(&children, self.name(), ctx)?;

        let property = args
            .argument(0)
            .ok_or_else(|| MicrodataError::MissingArgument {
                directive: self.name().to_owned(),
                line: ctx.line,
            })?;

        let mut block = PropertyBlock::new(property)
            .with_classes(args.classes())
            .with_children(children);
        if let Some(tag) = args.get("tag") {
            if !is_valid_tag_name(tag) {
                return Err(MicrodataError::InvalidTag {
                    tag: tag.to_owned(),
                });
            }
            block = block.with_tag(tag);
        }

        Ok(Node::ItemPropBlock(block))
    }
}
