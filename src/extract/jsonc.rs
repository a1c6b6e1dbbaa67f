//! Comment- and trailing-comma-tolerant JSON parsing
//!
//! Container descriptors are written as JSONC: `//` line comments, `/* */`
//! block comments and trailing commas are all legal. serde_json accepts none
//! of those, so the content is sanitized first and then parsed normally.
//! Anything that still fails to parse yields `None`; no partial recovery is
//! attempted beyond this tolerance.

use serde_json::Value;

/// Parse JSONC content into a JSON value.
///
/// Returns `None` for empty content, syntax errors, or anything else
/// serde_json rejects after sanitization.
pub fn parse(content: &str) -> Option<Value> {
    if content.trim().is_empty() {
        return None;
    }
    let sanitized = strip_trailing_commas(&strip_comments(content));
    serde_json::from_str(&sanitized).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InString,
    StringEscape,
    LineComment,
    BlockComment,
}

/// Remove `//` and `/* */` comments, string-aware.
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut state = State::Normal;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                '"' => {
                    state = State::InString;
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some('*') => {
                        chars.next();
                        state = State::BlockComment;
                    }
                    // A stray slash is passed through; serde_json rejects it
                    _ => out.push(c),
                },
                _ => out.push(c),
            },
            State::InString => {
                out.push(c);
                match c {
                    '\\' => state = State::StringEscape,
                    '"' => state = State::Normal,
                    _ => {}
                }
            }
            State::StringEscape => {
                out.push(c);
                state = State::InString;
            }
            State::LineComment => {
                if c == '\n' {
                    out.push(c);
                    state = State::Normal;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Normal;
                }
            }
        }
    }

    out
}

/// Remove commas whose next non-whitespace character closes an object or
/// array, string-aware. Runs on comment-free input.
fn strip_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut state = State::Normal;

    for (i, &c) in chars.iter().enumerate() {
        match state {
            State::Normal => {
                if c == '"' {
                    state = State::InString;
                } else if c == ',' {
                    let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace()).copied();
                    if matches!(next, Some('}') | Some(']')) {
                        continue;
                    }
                }
                out.push(c);
            }
            State::InString => {
                out.push(c);
                match c {
                    '\\' => state = State::StringEscape,
                    '"' => state = State::Normal,
                    _ => {}
                }
            }
            State::StringEscape => {
                out.push(c);
                state = State::InString;
            }
            State::LineComment | State::BlockComment => unreachable!(),
        }
    }

    out
}
