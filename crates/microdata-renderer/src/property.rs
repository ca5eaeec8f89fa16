//! Inline property references.
//!
//! Parses the compact role syntax into a [`PropertyReference`]:
//!
//! - `value <name>`
//! - `value <name:info>` (legacy two-field form)
//! - `value <name|info|tag>`

use std::sync::LazyLock;

use regex::Regex;

use crate::MicrodataError;
use crate::html::is_valid_tag_name;

/// Tag used when a reference names none.
pub const DEFAULT_TAG: &str = "span";

/// Value before the first unescaped `<`, name segment up to the last `>`.
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<value>(?:[^<\\]|\\.)*?)\s*<(?P<name>.+)>\s*$")
        .expect("reference pattern is valid")
});

/// Whether an empty display value is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EmptyValuePolicy {
    /// `<name>` alone parses with an empty display value.
    #[default]
    Allow,
    /// `<name>` alone is an authoring error.
    Reject,
}

/// A parsed `value <name|info|tag>` occurrence.
///
/// # Example
///
/// ```
/// use microdata_renderer::PropertyReference;
///
/// let reference = PropertyReference::parse("Bob Smith <name>").unwrap();
/// assert_eq!(reference.display_value, "Bob Smith");
/// assert_eq!(reference.property_name, "name");
/// assert_eq!(reference.extra_info, "");
/// assert_eq!(reference.target_tag, "span");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyReference {
    /// Text shown to the reader.
    pub display_value: String,
    /// The `itemprop` name.
    pub property_name: String,
    /// Attribute payload (`href`, `src`, `datetime`, `content`), may be empty.
    pub extra_info: String,
    /// Element to emit.
    pub target_tag: String,
}

impl PropertyReference {
    /// Create a reference with no extra info and the default tag.
    #[must_use]
    pub fn new(display_value: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            display_value: display_value.into(),
            property_name: property_name.into(),
            extra_info: String::new(),
            target_tag: DEFAULT_TAG.to_owned(),
        }
    }

    /// Set the extra info.
    #[must_use]
    pub fn with_extra_info(mut self, extra_info: impl Into<String>) -> Self {
        self.extra_info = extra_info.into();
        self
    }

    /// Set the target tag.
    #[must_use]
    pub fn with_target_tag(mut self, target_tag: impl Into<String>) -> Self {
        self.target_tag = target_tag.into();
        self
    }

    /// Parse role text, allowing an empty display value.
    pub fn parse(text: &str) -> Result<Self, MicrodataError> {
        Self::parse_with(text, EmptyValuePolicy::Allow)
    }

    /// Parse role text under the given empty-value policy.
    ///
    /// The name segment is split by the first grammar that applies:
    /// a `:` ahead of any `|` selects the legacy `name:info` form, otherwise
    /// `|` selects `name|info|tag`, otherwise the whole segment is the name.
    pub fn parse_with(text: &str, policy: EmptyValuePolicy) -> Result<Self, MicrodataError> {
        let malformed = || MicrodataError::MalformedReference {
            raw: text.to_owned(),
        };

        let caps = REFERENCE_PATTERN.captures(text).ok_or_else(malformed)?;
        let value = unescape(caps["value"].trim());
        let segment = caps["name"].trim();

        let colon = segment.find(':');
        let pipe = segment.find('|');

        let (name, info, tag) = if let Some(colon) = colon
            && pipe.is_none_or(|pipe| colon < pipe)
        {
            (&segment[..colon], &segment[colon + 1..], DEFAULT_TAG)
        } else if pipe.is_some() {
            let mut fields = segment.splitn(3, '|');
            let name = fields.next().unwrap_or_default();
            let info = fields.next().unwrap_or_default();
            let tag = fields
                .next()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TAG);
            (name, info, tag)
        } else {
            (segment, "", DEFAULT_TAG)
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        if !is_valid_tag_name(tag) {
            return Err(MicrodataError::InvalidTag {
                tag: tag.to_owned(),
            });
        }
        if value.is_empty() && policy == EmptyValuePolicy::Reject {
            return Err(MicrodataError::EmptyValue {
                raw: text.to_owned(),
            });
        }

        Ok(Self {
            display_value: value,
            property_name: name.to_owned(),
            extra_info: info.trim().to_owned(),
            target_tag: tag.to_owned(),
        })
    }
}

/// Drop the backslash from `\x` escapes.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    result
}
