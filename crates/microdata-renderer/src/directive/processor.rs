//! Document parser for directive and role syntax.
//!
//! Splits source text into paragraphs and directive blocks, parses directive
//! bodies recursively, and dispatches to registered handlers.

use std::path::PathBuf;

use super::parser::{
    DirectiveMarker, find_role, indentation, is_blank, is_explicit_markup, parse_directive_marker,
    parse_option_line,
};
use super::{BlockDirective, DirectiveArgs, DirectiveContext, InlineRole};
use crate::{Document, Inline, MicrodataError, Node};

/// A source line with its 1-indexed line number.
#[derive(Clone, Copy)]
struct SourceLine<'a> {
    number: usize,
    text: &'a str,
}

/// Parser that turns source text into a [`Document`].
///
/// Handlers are injected with [`with_directive`](Self::with_directive) and
/// [`with_role`](Self::with_role); nothing is registered globally.
///
/// # Example
///
/// ```
/// use microdata_renderer::directive::{DirectiveContext, DocumentParser, InlineRole};
/// use microdata_renderer::{Inline, MicrodataError, Node};
///
/// struct ShoutRole;
///
/// impl InlineRole for ShoutRole {
///     fn name(&self) -> &str { "shout" }
///     fn run(&mut self, text: &str, _ctx: &DirectiveContext) -> Result<Inline, MicrodataError> {
///         Ok(Inline::Text(text.to_uppercase()))
///     }
/// }
///
/// let mut parser = DocumentParser::new().with_role(ShoutRole);
/// let document = parser.parse("Say :shout:`hello`.").unwrap();
///
/// assert_eq!(document.children, vec![Node::text("Say HELLO.")]);
/// ```
pub struct DocumentParser {
    source_path: Option<PathBuf>,
    directives: Vec<Box<dyn BlockDirective>>,
    roles: Vec<Box<dyn InlineRole>>,
    warnings: Vec<String>,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    /// Create a parser with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_path: None,
            directives: Vec::new(),
            roles: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the source file path used in warnings.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Register a block directive handler.
    #[must_use]
    pub fn with_directive<D: BlockDirective + 'static>(mut self, handler: D) -> Self {
        self.directives.push(Box::new(handler));
        self
    }

    /// Register an inline role handler.
    #[must_use]
    pub fn with_role<R: InlineRole + 'static>(mut self, handler: R) -> Self {
        self.roles.push(Box::new(handler));
        self
    }

    /// Names of registered directives, in registration order.
    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(|d| d.name())
    }

    /// Names of registered roles, in registration order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.name())
    }

    /// Parse a document.
    ///
    /// The first authoring error aborts the whole document.
    pub fn parse(&mut self, input: &str) -> Result<Document, MicrodataError> {
        let lines: Vec<SourceLine<'_>> = input
            .lines()
            .enumerate()
            .map(|(idx, text)| SourceLine {
                number: idx + 1,
                text,
            })
            .collect();

        let children = self.parse_blocks(&lines)?;
        Ok(Document { children })
    }

    /// Warnings generated so far (unknown directives and roles).
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Take the collected warnings, leaving the parser ready for another document.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    fn parse_blocks(&mut self, lines: &[SourceLine<'_>]) -> Result<Vec<Node>, MicrodataError> {
        let mut nodes = Vec::new();
        let mut idx = 0;

        while let Some(line) = lines.get(idx) {
            if is_blank(line.text) {
                idx += 1;
                continue;
            }
            if indentation(line.text) > 0 {
                return Err(MicrodataError::UnexpectedIndent { line: line.number });
            }

            if is_explicit_markup(line.text) {
                let block_end = indented_block_end(lines, idx + 1);
                if let Some(marker) = parse_directive_marker(line.text) {
                    let options_end = options_end(lines, idx + 1, block_end);
                    let expanded = self.expand_directive(
                        marker,
                        line.number,
                        &lines[idx + 1..options_end],
                        &lines[options_end..block_end],
                    )?;
                    nodes.extend(expanded);
                } else {
                    tracing::debug!(line = line.number, "Skipping comment");
                }
                idx = block_end;
                continue;
            }

            let end = paragraph_end(lines, idx);
            let text = lines[idx..end]
                .iter()
                .map(|l| l.text.trim())
                .collect::<Vec<_>>()
                .join(" ");
            nodes.push(Node::Paragraph(self.parse_inlines(&text, line.number)?));
            idx = end;
        }

        Ok(nodes)
    }

    fn expand_directive(
        &mut self,
        marker: DirectiveMarker<'_>,
        line: usize,
        option_lines: &[SourceLine<'_>],
        body: &[SourceLine<'_>],
    ) -> Result<Vec<Node>, MicrodataError> {
        let options: Vec<(&str, &str)> = option_lines
            .iter()
            .filter_map(|l| parse_option_line(l.text.trim()))
            .collect();
        let args = DirectiveArgs::parse(marker.arguments, &options);
        let body = dedent(body);

        let Some(idx) = self
            .directives
            .iter()
            .position(|h| h.name() == marker.name)
        else {
            // No handler, pass through as written
            let location = self.location(line);
            tracing::warn!(directive = marker.name, line, "Unknown directive passed through");
            self.warnings.push(format!(
                "{location}: unknown directive \"{}\" passed through",
                marker.name
            ));
            let mut nodes = vec![Node::text(args.to_syntax(marker.name))];
            nodes.extend(self.parse_blocks(&body)?);
            return Ok(nodes);
        };

        validate(self.directives[idx].as_ref(), &args, line)?;

        let children = self.parse_blocks(&body)?;
        tracing::debug!(
            directive = marker.name,
            line,
            children = children.len(),
            "Expanding directive"
        );

        let ctx = DirectiveContext {
            source_path: self.source_path.as_deref(),
            line,
        };
        self.directives[idx].run(args, children, &ctx).map(|node| vec![node])
    }

    fn parse_inlines(&mut self, text: &str, line: usize) -> Result<Vec<Inline>, MicrodataError> {
        let mut inlines = Vec::new();
        let mut remaining = text;

        while !remaining.is_empty() {
            let Some(role) = find_role(remaining) else {
                push_text(&mut inlines, remaining);
                break;
            };

            push_text(&mut inlines, &remaining[..role.start]);

            if let Some(idx) = self.roles.iter().position(|h| h.name() == role.name) {
                let ctx = DirectiveContext {
                    source_path: self.source_path.as_deref(),
                    line,
                };
                match self.roles[idx].run(role.text, &ctx)? {
                    Inline::Text(text) => push_text(&mut inlines, &text),
                    inline => inlines.push(inline),
                }
            } else {
                let location = self.location(line);
                tracing::warn!(role = role.name, line, "Unknown role passed through");
                self.warnings.push(format!(
                    "{location}: unknown role \"{}\" passed through",
                    role.name
                ));
                push_text(&mut inlines, &remaining[role.start..role.end]);
            }

            remaining = &remaining[role.end..];
        }

        Ok(inlines)
    }

    fn location(&self, line: usize) -> String {
        DirectiveContext {
            source_path: self.source_path.as_deref(),
            line,
        }
        .location()
    }
}

/// Check argument count and option names before running a handler.
fn validate(
    handler: &dyn BlockDirective,
    args: &DirectiveArgs,
    line: usize,
) -> Result<(), MicrodataError> {
    let expected = handler.arguments();
    let found = args.arguments.len();
    if found < expected {
        return Err(MicrodataError::MissingArgument {
            directive: handler.name().to_owned(),
            line,
        });
    }
    if found > expected {
        return Err(MicrodataError::ArgumentCount {
            directive: handler.name().to_owned(),
            expected,
            found,
            line,
        });
    }

    let known = handler.options();
    if let Some((option, _)) = args
        .options
        .iter()
        .find(|(key, _)| !known.contains(&key.as_str()))
    {
        return Err(MicrodataError::UnknownOption {
            directive: handler.name().to_owned(),
            option: option.clone(),
            line,
        });
    }

    Ok(())
}

/// End of the indented block starting at `from`, excluding trailing blank lines.
fn indented_block_end(lines: &[SourceLine<'_>], from: usize) -> usize {
    let mut end = from;
    while lines
        .get(end)
        .is_some_and(|l| is_blank(l.text) || indentation(l.text) > 0)
    {
        end += 1;
    }
    while end > from && is_blank(lines[end - 1].text) {
        end -= 1;
    }
    end
}

/// End of the option lines directly after a directive marker.
fn options_end(lines: &[SourceLine<'_>], from: usize, limit: usize) -> usize {
    let mut end = from;
    while end < limit
        && !is_blank(lines[end].text)
        && parse_option_line(lines[end].text.trim()).is_some()
    {
        end += 1;
    }
    end
}

/// End of the paragraph starting at `from` (next blank line or end of input).
fn paragraph_end(lines: &[SourceLine<'_>], from: usize) -> usize {
    let mut end = from;
    while lines.get(end).is_some_and(|l| !is_blank(l.text)) {
        end += 1;
    }
    end
}

/// Strip the common indentation of non-blank lines.
fn dedent<'a>(lines: &[SourceLine<'a>]) -> Vec<SourceLine<'a>> {
    let common = lines
        .iter()
        .filter(|l| !is_blank(l.text))
        .map(|l| indentation(l.text))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| SourceLine {
            number: l.number,
            text: if is_blank(l.text) {
                ""
            } else {
                l.text.get(common..).unwrap_or_default()
            },
        })
        .collect()
}

/// Append text, merging with a preceding text run.
fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_owned()));
    }
}
