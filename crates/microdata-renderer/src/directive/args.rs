//! Directive argument parsing.
//!
//! Parses the `.. name:: arguments` marker line and its `:key: value` option lines.

use std::collections::HashMap;

/// Parsed arguments from a directive block.
///
/// # Example
///
/// ```
/// use microdata_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("Person", &[("tag", "p"), ("compact", ""), ("class", "vcard  h-card")]);
/// assert_eq!(args.argument(0), Some("Person"));
/// assert_eq!(args.get("tag"), Some("p"));
/// assert!(args.has("compact"));
/// assert_eq!(args.classes(), vec!["vcard", "h-card"]);
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Whitespace-separated arguments after `::`.
    pub arguments: Vec<String>,
    /// Options from `:key: value` lines, in source order.
    pub options: Vec<(String, String)>,
}

impl DirectiveArgs {
    /// Build arguments from the marker's argument text and option pairs.
    #[must_use]
    pub fn parse(arguments: &str, options: &[(&str, &str)]) -> Self {
        Self {
            arguments: arguments.split_whitespace().map(str::to_owned).collect(),
            options: options
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.trim().to_owned()))
                .collect(),
        }
    }

    /// Positional argument by index.
    #[must_use]
    pub fn argument(&self, idx: usize) -> Option<&str> {
        self.arguments.get(idx).map(String::as_str)
    }

    /// Option value, `None` when absent or empty.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Whether an option is present, with or without a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.options.iter().any(|(k, _)| k == key)
    }

    /// CSS classes from the `class` option.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.get("class")
            .map(|v| v.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Options as a map (last occurrence wins).
    #[must_use]
    pub fn option_map(&self) -> HashMap<&str, &str> {
        self.options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Reconstruct the source syntax `.. name:: args` plus option lines.
    ///
    /// Used for pass-through when a directive is not handled.
    #[must_use]
    pub fn to_syntax(&self, name: &str) -> String {
        let mut result = format!(".. {name}::");
        if !self.arguments.is_empty() {
            result.push(' ');
            result.push_str(&self.arguments.join(" "));
        }
        for (key, value) in &self.options {
            result.push_str(" :");
            result.push_str(key);
            result.push(':');
            if !value.is_empty() {
                result.push(' ');
                result.push_str(value);
            }
        }
        result
    }
}
