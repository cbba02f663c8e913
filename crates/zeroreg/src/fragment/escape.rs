//! Escaping and wrapping policy.
//!
//! Pure string functions that decide how plain text becomes pattern syntax
//! and whether a fragment must be grouped before a quantifier is appended.
//! Nothing here allocates unless the output differs from the input.

use std::borrow::Cow;

/// Characters with special meaning outside a character class.
pub const LITERAL_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Characters with special meaning inside a character class.
///
/// `]`, `\`, `^` and `-` are special in every engine. The Rust engines also
/// open a nested class on `[` and read `&&` / `~~` as set operations.
pub const CLASS_METACHARACTERS: &[char] = &[']', '\\', '^', '-', '[', '&', '~'];

/// Escape `text` so that it matches itself exactly.
#[must_use]
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    escape_with(text, LITERAL_METACHARACTERS)
}

/// Escape `chars` for use between the brackets of a character class.
#[must_use]
pub fn escape_class(chars: &str) -> Cow<'_, str> {
    escape_with(chars, CLASS_METACHARACTERS)
}

fn escape_with<'a>(text: &'a str, special: &[char]) -> Cow<'a, str> {
    if !text.contains(special) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Returns `true` if a quantifier appended to `source` would bind to less
/// than the whole fragment.
///
/// A source is atomic when it is a single character, a single escape
/// sequence, one group spanning the whole source, or one character class
/// spanning the whole source. Everything else needs a non-capturing group.
#[must_use]
pub fn needs_wrap(source: &str) -> bool {
    !(is_single_char(source) || is_single_escape(source) || is_enclosed(source))
}

/// Wrap `source` in a non-capturing group if [`needs_wrap`] says so.
#[must_use]
pub fn wrap(source: &str) -> Cow<'_, str> {
    if needs_wrap(source) {
        Cow::Owned(format!("(?:{source})"))
    } else {
        Cow::Borrowed(source)
    }
}

fn is_single_char(source: &str) -> bool {
    let mut chars = source.chars();
    chars.next().is_some() && chars.next().is_none()
}

fn is_single_escape(source: &str) -> bool {
    let mut chars = source.chars();
    chars.next() == Some('\\') && chars.next().is_some() && chars.next().is_none()
}

fn is_enclosed(source: &str) -> bool {
    let bytes = source.as_bytes();
    let last = bytes.len().saturating_sub(1);
    match bytes.first() {
        Some(b'(') => group_end(bytes) == Some(last),
        Some(b'[') => class_end(bytes, 0) == Some(last),
        _ => false,
    }
}

// Every metacharacter is ASCII, and UTF-8 continuation bytes never collide
// with ASCII, so scanning bytes is sound for multi-byte sources.

/// Index of the `)` closing the group opened at index 0.
fn group_end(bytes: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'[' => i = class_end(bytes, i)?,
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index of the `]` closing the class opened at `start`.
fn class_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if bytes.get(i) == Some(&b'^') {
        i += 1;
    }
    // A leading `]` is a literal member of the class.
    if bytes.get(i) == Some(&b']') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'[' => i = class_end(bytes, i)?,
            b']' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}
