//! Error types for microdata parsing.

/// Authoring error found while parsing a document.
///
/// Every variant describes a static mistake in the source text; the document
/// is rejected as a whole when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MicrodataError {
    /// Role text without a non-empty `<name>` segment.
    #[error("{raw:?} does not match expected itemprop format: :itemprop:`value <name>`")]
    MalformedReference {
        /// The offending role text.
        raw: String,
    },

    /// Role text with an empty display value while empty values are rejected.
    #[error("{raw:?} has an empty value: :itemprop:`value <name>`")]
    EmptyValue {
        /// The offending role text.
        raw: String,
    },

    /// Block directive without a body.
    #[error("line {line}: content block expected for the \"{directive}\" directive; none found")]
    ContentRequired {
        /// Directive name.
        directive: String,
        /// Line of the directive marker (1-indexed).
        line: usize,
    },

    /// Block directive with fewer arguments than it requires.
    #[error("line {line}: \"{directive}\" directive requires an argument")]
    MissingArgument {
        /// Directive name.
        directive: String,
        /// Line of the directive marker (1-indexed).
        line: usize,
    },

    /// Block directive with more arguments than it accepts.
    #[error("line {line}: \"{directive}\" directive accepts {expected} argument(s), found {found}")]
    ArgumentCount {
        /// Directive name.
        directive: String,
        /// Number of arguments the directive accepts.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
        /// Line of the directive marker (1-indexed).
        line: usize,
    },

    /// Option not recognized by the directive.
    #[error("line {line}: unknown option \"{option}\" for the \"{directive}\" directive")]
    UnknownOption {
        /// Directive name.
        directive: String,
        /// Option name as written.
        option: String,
        /// Line of the directive marker (1-indexed).
        line: usize,
    },

    /// Indented text that no directive owns.
    #[error("line {line}: unexpected indentation")]
    UnexpectedIndent {
        /// Line of the indented text (1-indexed).
        line: usize,
    },

    /// Tag name that is not a plain HTML element name.
    #[error("invalid tag name {tag:?}")]
    InvalidTag {
        /// The rejected tag name.
        tag: String,
    },
}
