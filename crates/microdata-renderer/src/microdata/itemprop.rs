//! `itemprop` inline role.

use crate::directive::{DirectiveContext, InlineRole};
use crate::{EmptyValuePolicy, Inline, MicrodataError, PropertyReference};

/// Parses `` :itemprop:`value <name|info|tag>` `` into a property reference.
pub struct ItemPropRole {
    empty_value: EmptyValuePolicy,
}

impl ItemPropRole {
    /// Create the role with the given empty-value policy.
    #[must_use]
    pub fn new(empty_value: EmptyValuePolicy) -> Self {
        Self { empty_value }
    }
}

impl InlineRole for ItemPropRole {
    fn name(&self) -> &str {
        "itemprop"
    }

    fn run(&mut self, text: &str, ctx: &DirectiveContext) -> Result<Inline, MicrodataError> {
        let reference = PropertyReference::parse_with(text, self.empty_value).inspect_err(|e| {
            tracing::debug!(location = %ctx.location(), error = %e, "Rejected itemprop");
        })?;
        Ok(Inline::ItemProp(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DirectiveContext<'static> {
        DirectiveContext {
            source_path: None,
            line: 1,
        }
    }

    #[test]
    fn test_parses_reference() {
        let mut role = ItemPropRole::new(EmptyValuePolicy::Allow);
        let inline = role.run("Home <url|http://x>", &ctx()).unwrap();
        assert_eq!(
            inline,
            Inline::ItemProp(PropertyReference::new("Home", "url").with_extra_info("http://x"))
        );
    }

    #[test]
    fn test_empty_value_policy() {
        let mut allow = ItemPropRole::new(EmptyValuePolicy::Allow);
        assert!(allow.run("<name>", &ctx()).is_ok());

        let mut reject = ItemPropRole::new(EmptyValuePolicy::Reject);
        assert_eq!(
            reject.run("<name>", &ctx()).unwrap_err(),
            MicrodataError::EmptyValue {
                raw: "<name>".to_owned()
            }
        );
    }

    #[test]
    fn test_malformed() {
        let mut role = ItemPropRole::new(EmptyValuePolicy::Allow);
        assert!(matches!(
            role.run("no brackets", &ctx()),
            Err(MicrodataError::MalformedReference { .. })
        ));
    }
}
