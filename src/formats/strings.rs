//! Line-oriented reader for Apple `.strings` files.
//!
//! Parsing is split into two stages that can be used on their own:
//! [`LineClassifier`] decides whether a line is commentary, blank or a
//! candidate entry, and [`parse_entry`] turns a candidate into a
//! [`StringEntry`] ready for Android.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::EntryError, types::StringEntry};

lazy_static! {
    /// `"key" = "value";` separator, with optional whitespace around `=`.
    static ref ENTRY_SEPARATOR: Regex = Regex::new(r"\s*=\s*").unwrap();
    static ref RESOURCE_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    /// Explicit-index placeholder such as `$1%s`.
    static ref POSITIONAL_PLACEHOLDER: Regex = Regex::new(r"\$\d+%s").unwrap();
}

const COMMENT_START: &str = "/*";
const COMMENT_END: &str = "*/";

/// What a single source line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Blank,
    Entry,
}

/// Tracks block comments across lines.
///
/// A line starting with `/*` opens a comment and a line ending with `*/`
/// closes it. The closing line is always commentary, so `/* note */` on one
/// line is skipped and leaves the classifier outside a comment.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    in_comment: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.starts_with(COMMENT_START) {
            self.in_comment = true;
        }
        if line.ends_with(COMMENT_END) {
            self.in_comment = false;
            return LineKind::Comment;
        }
        if self.in_comment {
            LineKind::Comment
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Entry
        }
    }
}

/// Parses one `"key" = "value";` line and converts it for Android.
pub fn parse_entry(line: &str) -> Result<StringEntry, EntryError> {
    let mut parts: Vec<&str> = ENTRY_SEPARATOR.split(line.trim()).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    let [key_part, value_part] = parts[..] else {
        return Err(EntryError::Parse);
    };

    let raw_key = strip_chars(key_part, 1, 1).ok_or(EntryError::Parse)?;
    let converted_key = convert_key(raw_key);
    if !is_valid_key(&converted_key) {
        return Err(EntryError::InvalidKey { key: converted_key });
    }

    // Leading quote, then the closing quote and semicolon.
    let raw_value = strip_chars(value_part, 1, 2).ok_or(EntryError::Parse)?;
    let converted_value = convert_value(raw_value);
    let formatted = !has_positional_placeholder(&converted_value);

    Ok(StringEntry {
        raw_key: raw_key.to_string(),
        raw_value: raw_value.to_string(),
        converted_key,
        converted_value,
        formatted,
    })
}

/// Replaces `.` and spaces with `_`.
pub fn convert_key(key: &str) -> String {
    key.replace('.', "_").replace(' ', "_")
}

/// Escapes single quotes and rewrites iOS placeholders.
///
/// `%@` becomes `$1%s` and the multiple-substitution marker `$@` becomes `%s`.
pub fn convert_value(value: &str) -> String {
    value
        .replace('\'', "\\'")
        .replace("%@", "$1%s")
        .replace("$@", "%s")
}

/// Whether `key` is usable as an Android resource name.
pub fn is_valid_key(key: &str) -> bool {
    RESOURCE_NAME.is_match(key)
}

pub fn has_positional_placeholder(value: &str) -> bool {
    POSITIONAL_PLACEHOLDER.is_match(value)
}

/// Drops `head` leading and `tail` trailing characters, or `None` if the
/// string is too short.
fn strip_chars(s: &str, head: usize, tail: usize) -> Option<&str> {
    let count = s.chars().count();
    if count < head + tail {
        return None;
    }
    let start = s.char_indices().nth(head).map_or(s.len(), |(i, _)| i);
    let end = s
        .char_indices()
        .nth(count - tail)
        .map_or(s.len(), |(i, _)| i);
    Some(&s[start..end])
}
