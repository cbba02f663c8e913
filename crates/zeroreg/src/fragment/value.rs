//! The immutable fragment value and its chaining methods.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::Operand;
use super::escape;
use crate::engine::{Matcher, PatternMatch, get_matcher};
use crate::error::Result;

/// An immutable piece of pattern syntax.
///
/// Every combinator returns a new `Fragment`; the receiver is never changed,
/// so a fragment can be reused in any number of compositions and shared
/// freely between threads.
///
/// # Example
///
/// ```
/// use zeroreg::{digits, optional};
///
/// let phone = optional("+").then(digits(3)).then("-").then(digits(4));
/// assert_eq!(phone.as_str(), r"\+?\d{3}-\d{4}");
/// assert!(phone.is_match("+123-4567").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment {
    source: Cow<'static, str>,
}

impl Fragment {
    /// Create a fragment from static pattern syntax without any checks.
    ///
    /// Usable in `const` and `static` items.
    #[must_use]
    pub const fn from_static(source: &'static str) -> Self {
        Self {
            source: Cow::Borrowed(source),
        }
    }

    /// Create a fragment from raw pattern syntax without any checks.
    ///
    /// Invalid syntax is accepted here and only reported when the fragment
    /// is compiled.
    #[must_use]
    pub fn raw(source: impl Into<String>) -> Self {
        Self {
            source: Cow::Owned(source.into()),
        }
    }

    /// Create a fragment matching `text` exactly.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::raw(escape::escape_literal(text))
    }

    /// Match any of `alternatives`, in order of preference.
    #[must_use]
    pub fn one_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let joined = alternatives
            .into_iter()
            .map(|alternative| alternative.into().into_fragment().into_string())
            .collect::<Vec<_>>()
            .join("|");
        Self::raw(format!("(?:{joined})"))
    }

    /// The pattern syntax of this fragment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Consume the fragment, returning its pattern syntax.
    #[must_use]
    pub fn into_string(self) -> String {
        self.source.into_owned()
    }

    /// Length of the pattern syntax in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if the pattern syntax is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Append `next` to this fragment.
    #[must_use]
    pub fn then(&self, next: impl Into<Operand>) -> Self {
        let next = next.into().into_fragment();
        Self::raw(format!("{}{}", self.source, next.source))
    }

    fn quantified(&self, quantifier: &str) -> Self {
        Self::raw(format!("{}{quantifier}", escape::wrap(&self.source)))
    }

    /// Match one or more times (`+`).
    #[must_use]
    pub fn one_or_more(&self) -> Self {
        self.quantified("+")
    }

    /// Match zero or more times (`*`).
    #[must_use]
    pub fn zero_or_more(&self) -> Self {
        self.quantified("*")
    }

    /// Match zero or one time (`?`).
    #[must_use]
    pub fn optional(&self) -> Self {
        self.quantified("?")
    }

    /// Match exactly `n` times.
    #[must_use]
    pub fn times(&self, n: usize) -> Self {
        self.quantified(&format!("{{{n}}}"))
    }

    /// Match between `min` and `max` times, inclusive.
    ///
    /// `min > max` produces a fragment the engine rejects at compile time.
    #[must_use]
    pub fn between(&self, min: usize, max: usize) -> Self {
        self.quantified(&format!("{{{min},{max}}}"))
    }

    /// Match at least `n` times.
    #[must_use]
    pub fn at_least(&self, n: usize) -> Self {
        self.quantified(&format!("{{{n},}}"))
    }

    /// Match at most `n` times.
    #[must_use]
    pub fn at_most(&self, n: usize) -> Self {
        self.quantified(&format!("{{0,{n}}}"))
    }

    /// Match either this fragment or `other`.
    #[must_use]
    pub fn or(&self, other: impl Into<Operand>) -> Self {
        let other = other.into().into_fragment();
        Self::raw(format!("(?:{}|{})", self.source, other.source))
    }

    fn enclosed(&self, opening: &str) -> Self {
        Self::raw(format!("{opening}{})", self.source))
    }

    /// Wrap in a numbered capturing group.
    #[must_use]
    pub fn capture(&self) -> Self {
        self.enclosed("(")
    }

    /// Wrap in a named capturing group. An empty name gives a numbered group.
    #[must_use]
    pub fn capture_as(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.capture();
        }
        self.enclosed(&format!("(?<{name}>"))
    }

    /// Wrap in a non-capturing group.
    #[must_use]
    pub fn group(&self) -> Self {
        self.enclosed("(?:")
    }

    /// Assert that this fragment matches next, without consuming it.
    #[must_use]
    pub fn lookahead(&self) -> Self {
        self.enclosed("(?=")
    }

    /// Assert that this fragment does not match next.
    #[must_use]
    pub fn negative_lookahead(&self) -> Self {
        self.enclosed("(?!")
    }

    /// Assert that this fragment matches just before the current position.
    ///
    /// The fragment must have constant width, or compilation fails.
    #[must_use]
    pub fn lookbehind(&self) -> Self {
        self.enclosed("(?<=")
    }

    /// Assert that this fragment does not match just before the current position.
    #[must_use]
    pub fn negative_lookbehind(&self) -> Self {
        self.enclosed("(?<!")
    }

    /// Compile this fragment through the global matcher cache.
    pub fn to_regex(&self) -> Result<Arc<Matcher>> {
        get_matcher(&self.source, "")
    }

    /// Compile this fragment with inline `flags` (for example `"i"` or `"ms"`).
    ///
    /// The flags are handed to the engine unmodified. With `x`, unescaped
    /// whitespace and `#` comments are ignored by the engine, so literal
    /// text containing spaces or `#` no longer matches itself.
    pub fn to_regex_with_flags(&self, flags: &str) -> Result<Arc<Matcher>> {
        get_matcher(&self.source, flags)
    }

    /// Check if `input` contains a match.
    pub fn is_match(&self, input: &str) -> Result<bool> {
        self.to_regex()?.is_match(input)
    }

    /// Find the first match in `input`, with its capture groups.
    pub fn find(&self, input: &str) -> Result<Option<PatternMatch>> {
        self.to_regex()?.find(input)
    }

    /// Find every non-overlapping match in `input`.
    pub fn find_all(&self, input: &str) -> Result<Vec<PatternMatch>> {
        self.to_regex()?.find_all(input)
    }

    /// Replace every match in `input` with `replacement`.
    ///
    /// `replacement` may refer to groups as `$1` or `${name}`.
    pub fn replace_all(&self, input: &str, replacement: &str) -> Result<String> {
        self.to_regex()?.replace_all(input, replacement)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({:?})", self.source)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.into_string()
    }
}
