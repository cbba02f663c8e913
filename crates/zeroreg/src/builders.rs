//! Free-function builders.
//!
//! Leaf constructors for character classes, anchors and special characters,
//! plus a free-function form of every combinator. Combinators accept any
//! [`Operand`]: a [`Fragment`] is used as-is, plain text is escaped first.
//!
//! ```
//! use zeroreg::builders::*;
//!
//! let date = capture_named(digits(4), "year")
//!     .then("-")
//!     .then(capture_named(digits(2), "month"));
//! let m = date.find("due 2024-03").unwrap().unwrap();
//! assert_eq!(m.name("year"), Some("2024"));
//! assert_eq!(m.name("month"), Some("03"));
//! ```

use crate::fragment::{Fragment, Operand, escape_class};

fn fragment(operand: impl Into<Operand>) -> Fragment {
    operand.into().into_fragment()
}

// Character classes

/// Match any digit (`\d`).
///
/// Unicode-aware: `\d` also matches non-ASCII decimal digits such as `٣`.
/// Use `range('0', '9')` for ASCII digits only.
#[must_use]
pub const fn digit() -> Fragment {
    Fragment::from_static(r"\d")
}

/// Match exactly `count` digits (`\d{count}`).
#[must_use]
pub fn digits(count: usize) -> Fragment {
    digit().times(count)
}

/// Match any non-digit (`\D`).
#[must_use]
pub const fn non_digit() -> Fragment {
    Fragment::from_static(r"\D")
}

/// Match any word character (`\w`).
///
/// Unicode-aware: letters such as `é` are word characters.
#[must_use]
pub const fn word() -> Fragment {
    Fragment::from_static(r"\w")
}

/// Match any non-word character (`\W`).
#[must_use]
pub const fn non_word() -> Fragment {
    Fragment::from_static(r"\W")
}

/// Match any whitespace character (`\s`).
///
/// Unicode-aware: includes non-ASCII spaces such as U+00A0.
#[must_use]
pub const fn whitespace() -> Fragment {
    Fragment::from_static(r"\s")
}

/// Match any non-whitespace character (`\S`).
#[must_use]
pub const fn non_whitespace() -> Fragment {
    Fragment::from_static(r"\S")
}

/// Match an ASCII letter.
#[must_use]
pub const fn letter() -> Fragment {
    Fragment::from_static("[a-zA-Z]")
}

/// Match an ASCII lowercase letter.
#[must_use]
pub const fn lowercase() -> Fragment {
    Fragment::from_static("[a-z]")
}

/// Match an ASCII uppercase letter.
#[must_use]
pub const fn uppercase() -> Fragment {
    Fragment::from_static("[A-Z]")
}

/// Match an ASCII letter or digit.
#[must_use]
pub const fn alphanumeric() -> Fragment {
    Fragment::from_static("[a-zA-Z0-9]")
}

/// Match any character except a newline (`.`).
#[must_use]
pub const fn any_char() -> Fragment {
    Fragment::from_static(".")
}

/// Match `text` exactly.
#[must_use]
pub fn literal(text: &str) -> Fragment {
    Fragment::literal(text)
}

/// Use `source` as pattern syntax, unchecked.
#[must_use]
pub fn raw(source: impl Into<String>) -> Fragment {
    Fragment::raw(source)
}

/// Match any one of `chars`.
#[must_use]
pub fn char_in(chars: &str) -> Fragment {
    Fragment::raw(format!("[{}]", escape_class(chars)))
}

/// Match any character not in `chars`.
#[must_use]
pub fn char_not_in(chars: &str) -> Fragment {
    Fragment::raw(format!("[^{}]", escape_class(chars)))
}

/// Match any character from `from` to `to`, inclusive.
#[must_use]
pub fn range(from: char, to: char) -> Fragment {
    let mut from_buf = [0; 4];
    let mut to_buf = [0; 4];
    Fragment::raw(format!(
        "[{}-{}]",
        escape_class(from.encode_utf8(&mut from_buf)),
        escape_class(to.encode_utf8(&mut to_buf))
    ))
}

// Combinators

/// Match `first` followed by `second`.
#[must_use]
pub fn sequence(first: impl Into<Operand>, second: impl Into<Operand>) -> Fragment {
    fragment(first).then(second)
}

/// Match `operand` one or more times.
#[must_use]
pub fn one_or_more(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).one_or_more()
}

/// Match `operand` zero or more times.
#[must_use]
pub fn zero_or_more(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).zero_or_more()
}

/// Match `operand` zero or one time.
#[must_use]
pub fn optional(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).optional()
}

/// Match `operand` exactly `n` times.
#[must_use]
pub fn exactly(operand: impl Into<Operand>, n: usize) -> Fragment {
    fragment(operand).times(n)
}

/// Match `operand` between `min` and `max` times, inclusive.
#[must_use]
pub fn between(operand: impl Into<Operand>, min: usize, max: usize) -> Fragment {
    fragment(operand).between(min, max)
}

/// Match `operand` at least `n` times.
#[must_use]
pub fn at_least(operand: impl Into<Operand>, n: usize) -> Fragment {
    fragment(operand).at_least(n)
}

/// Match `operand` at most `n` times.
#[must_use]
pub fn at_most(operand: impl Into<Operand>, n: usize) -> Fragment {
    fragment(operand).at_most(n)
}

/// Match either `first` or `second`.
#[must_use]
pub fn alternate(first: impl Into<Operand>, second: impl Into<Operand>) -> Fragment {
    fragment(first).or(second)
}

/// Match any of `alternatives`, in order of preference.
#[must_use]
pub fn one_of<I>(alternatives: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Fragment::one_of(alternatives)
}

// Groups

/// Wrap `operand` in a numbered capturing group.
#[must_use]
pub fn capture(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).capture()
}

/// Wrap `operand` in a capturing group called `name`.
#[must_use]
pub fn capture_named(operand: impl Into<Operand>, name: &str) -> Fragment {
    fragment(operand).capture_as(name)
}

/// Wrap `operand` in a non-capturing group.
#[must_use]
pub fn group(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).group()
}

// Anchors

/// Match the start of the input (or line, with the `m` flag).
#[must_use]
pub const fn start_of_line() -> Fragment {
    Fragment::from_static("^")
}

/// Match the end of the input (or line, with the `m` flag).
#[must_use]
pub const fn end_of_line() -> Fragment {
    Fragment::from_static("$")
}

/// Match a word boundary.
///
/// Boundaries follow the Unicode-aware [`word`] class.
#[must_use]
pub const fn word_boundary() -> Fragment {
    Fragment::from_static(r"\b")
}

/// Match a position that is not a word boundary.
#[must_use]
pub const fn non_word_boundary() -> Fragment {
    Fragment::from_static(r"\B")
}

// Lookaround

/// Assert that `operand` follows, without consuming it.
#[must_use]
pub fn lookahead(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).lookahead()
}

/// Assert that `operand` does not follow.
#[must_use]
pub fn negative_lookahead(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).negative_lookahead()
}

/// Assert that `operand` precedes the current position.
///
/// The backtracking engine only supports lookbehind of constant width:
/// `lookbehind(one_or_more("a"))` compiles to a [`Compile`] error.
///
/// [`Compile`]: crate::ZeroRegError::Compile
#[must_use]
pub fn lookbehind(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).lookbehind()
}

/// Assert that `operand` does not precede the current position.
///
/// Like [`lookbehind`], `operand` must have constant width.
#[must_use]
pub fn negative_lookbehind(operand: impl Into<Operand>) -> Fragment {
    fragment(operand).negative_lookbehind()
}

// Special characters

/// Match a newline.
#[must_use]
pub const fn newline() -> Fragment {
    Fragment::from_static(r"\n")
}

/// Match a tab.
#[must_use]
pub const fn tab() -> Fragment {
    Fragment::from_static(r"\t")
}

/// Match a carriage return.
#[must_use]
pub const fn carriage_return() -> Fragment {
    Fragment::from_static(r"\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_class_sources() {
        assert_eq!(digit().as_str(), r"\d");
        assert_eq!(digits(3).as_str(), r"\d{3}");
        assert_eq!(letter().as_str(), "[a-zA-Z]");
        assert_eq!(any_char().as_str(), ".");
    }

    #[test]
    fn custom_sets_escape_class_syntax() {
        assert_eq!(char_in("aeiou").as_str(), "[aeiou]");
        assert_eq!(char_in("[]^-").as_str(), r"[\[\]\^\-]");
        assert_eq!(char_not_in("ab").as_str(), "[^ab]");
        assert_eq!(range('0', '9').as_str(), "[0-9]");
        assert_eq!(range('^', '~').as_str(), r"[\^-\~]");
    }

    #[test]
    fn text_operands_are_escaped_then_wrapped_by_policy() {
        assert_eq!(optional("+").as_str(), r"\+?");
        assert_eq!(one_or_more("ab").as_str(), "(?:ab)+");
        assert_eq!(zero_or_more('x').as_str(), "x*");
        assert_eq!(exactly("a.", 2).as_str(), r"(?:a\.){2}");
    }

    #[test]
    fn group_like_combinators_always_wrap() {
        assert_eq!(alternate("a", "b").as_str(), "(?:a|b)");
        assert_eq!(group("a").as_str(), "(?:a)");
        assert_eq!(capture("a").as_str(), "(a)");
        assert_eq!(capture_named("a", "x").as_str(), "(?<x>a)");
        assert_eq!(one_of(["cat", "dog", "bird"]).as_str(), "(?:cat|dog|bird)");
        assert_eq!(lookahead("px").as_str(), "(?=px)");
        assert_eq!(negative_lookbehind("$").as_str(), r"(?<!\$)");
    }

    #[test]
    fn lookaround_is_repeated_without_rewrapping() {
        assert_eq!(lookahead("a").optional().as_str(), "(?=a)?");
    }

    #[test]
    fn sequence_matches_then() {
        assert_eq!(sequence(digit(), "-").as_str(), digit().then("-").as_str());
    }
}
