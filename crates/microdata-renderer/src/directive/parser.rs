//! Directive and role syntax parsing.
//!
//! Recognizes `.. name:: arguments` markers, `:key: value` option lines, and
//! `` :name:`text` `` roles.

/// A parsed `.. name:: arguments` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DirectiveMarker<'a> {
    pub name: &'a str,
    pub arguments: &'a str,
}

/// A role found within a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoleMatch<'a> {
    pub name: &'a str,
    /// Text between the backquotes.
    pub text: &'a str,
    /// Byte offset of the leading colon.
    pub start: usize,
    /// Byte offset just past the closing backquote.
    pub end: usize,
}

/// Whether the line opens an explicit markup block (`..` followed by whitespace).
pub(crate) fn is_explicit_markup(line: &str) -> bool {
    line.strip_prefix("..")
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Parse a directive marker line.
///
/// Returns `None` for other explicit markup (comments, targets).
pub(crate) fn parse_directive_marker(line: &str) -> Option<DirectiveMarker<'_>> {
    if !is_explicit_markup(line) {
        return None;
    }
    let rest = line[2..].trim_start();
    let sep = rest.find("::")?;
    let name = &rest[..sep];
    if !is_valid_name(name) {
        return None;
    }

    let after = &rest[sep + 2..];
    if !after.is_empty() && !after.starts_with(char::is_whitespace) {
        return None;
    }

    Some(DirectiveMarker {
        name,
        arguments: after.trim(),
    })
}

/// Parse an option line: `:key: value` or `:key:`.
///
/// The closing colon must be followed by whitespace or end of line, which
/// keeps roles such as `` :itemprop:`x <name>` `` from reading as options.
pub(crate) fn parse_option_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(':')?;
    let end = rest.find(':')?;
    let key = &rest[..end];
    if !is_valid_name(key) {
        return None;
    }

    let after = &rest[end + 1..];
    if !after.is_empty() && !after.starts_with(char::is_whitespace) {
        return None;
    }

    Some((key, after.trim()))
}

/// Find the first role in `text`.
pub(crate) fn find_role(text: &str) -> Option<RoleMatch<'_>> {
    let mut search = 0;
    while let Some(offset) = text[search..].find(':') {
        let start = search + offset;
        if let Some(role) = role_at(text, start) {
            return Some(role);
        }
        search = start + 1;
    }
    None
}

fn role_at(text: &str, start: usize) -> Option<RoleMatch<'_>> {
    // Roles start at a word boundary
    if let Some(prev) = text[..start].chars().next_back()
        && !(prev.is_whitespace() || "([{<'\"-/".contains(prev))
    {
        return None;
    }

    let after_colon = &text[start + 1..];
    let name_len = after_colon.find(|c: char| !is_name_char(c))?;
    let name = &after_colon[..name_len];
    if name.is_empty() {
        return None;
    }

    let body = after_colon[name_len..].strip_prefix(":`")?;
    let body_start = start + 1 + name_len + 2;

    let mut escaped = false;
    let mut close = None;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '`' => {
                close = Some(i);
                break;
            }
            _ => {}
        }
    }

    let close = close?;
    let role_text = &body[..close];
    if role_text.is_empty() {
        return None;
    }

    Some(RoleMatch {
        name,
        text: role_text,
        start,
        end: body_start + close + 1,
    })
}

/// Number of leading spaces and tabs.
pub(crate) fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Whether the line contains only whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Valid names contain alphanumeric characters, hyphens, underscores, and dots.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.'
}
