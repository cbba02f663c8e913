//! Compiled matchers.
//!
//! A [`Matcher`] is an assembled source compiled by one of two engines:
//! the finite-automata `regex` engine, or the backtracking `fancy_regex`
//! engine for sources that need lookaround.

use std::borrow::Cow;
use std::fmt;

use super::PatternMatch;
use crate::config::{EngineConfig, EngineKind};
use crate::error::{Result, ZeroRegError};

#[derive(Clone)]
enum Compiled {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

/// A compiled pattern with its source and flags.
#[derive(Clone)]
pub struct Matcher {
    source: String,
    flags: String,
    compiled: Compiled,
}

impl Matcher {
    /// Compile `source` with the default configuration.
    pub fn compile(source: &str) -> Result<Self> {
        Self::compile_with(source, "", &EngineConfig::default())
    }

    /// Compile `source` with inline `flags` and the given configuration.
    ///
    /// Non-empty flags are prepended unmodified as `(?flags)`; the engine
    /// decides whether they are valid.
    pub fn compile_with(source: &str, flags: &str, config: &EngineConfig) -> Result<Self> {
        let pattern = apply_flags(source, flags);

        let compiled = match config.engine {
            EngineKind::Basic => Compiled::Basic(
                build_basic(&pattern, config).map_err(|err| ZeroRegError::compile(&*pattern, err))?,
            ),
            EngineKind::Fancy => Compiled::Fancy(
                build_fancy(&pattern, config).map_err(|err| ZeroRegError::compile(&*pattern, err))?,
            ),
            EngineKind::Adaptive => match build_basic(&pattern, config) {
                Ok(regex) => Compiled::Basic(regex),
                Err(regex::Error::Syntax(reason)) => {
                    tracing::debug!(
                        pattern = %pattern,
                        reason = %reason.lines().last().unwrap_or_default(),
                        "falling up to backtracking engine"
                    );
                    Compiled::Fancy(
                        build_fancy(&pattern, config)
                            .map_err(|err| ZeroRegError::compile(&*pattern, err))?,
                    )
                }
                Err(err) => return Err(ZeroRegError::compile(&*pattern, err)),
            },
        };

        let matcher = Self {
            source: source.to_string(),
            flags: flags.to_string(),
            compiled,
        };
        tracing::trace!(
            pattern = %pattern,
            engine = matcher.engine_name(),
            "compiled matcher"
        );
        Ok(matcher)
    }

    /// Get the source this matcher was compiled from, without flags.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the flags this matcher was compiled with.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Check if the backtracking engine compiled this matcher.
    #[must_use]
    pub const fn is_fancy(&self) -> bool {
        matches!(self.compiled, Compiled::Fancy(_))
    }

    const fn engine_name(&self) -> &'static str {
        match self.compiled {
            Compiled::Basic(_) => "basic",
            Compiled::Fancy(_) => "fancy",
        }
    }

    /// Names of the named capture groups, in group order.
    #[must_use]
    pub fn capture_names(&self) -> Vec<&str> {
        match &self.compiled {
            Compiled::Basic(regex) => regex.capture_names().flatten().collect(),
            Compiled::Fancy(regex) => regex.capture_names().flatten().collect(),
        }
    }

    /// Check if `haystack` contains a match.
    pub fn is_match(&self, haystack: &str) -> Result<bool> {
        match &self.compiled {
            Compiled::Basic(regex) => Ok(regex.is_match(haystack)),
            Compiled::Fancy(regex) => regex
                .is_match(haystack)
                .map_err(|err| self.match_error(err)),
        }
    }

    /// Find the first match in `haystack`.
    pub fn find(&self, haystack: &str) -> Result<Option<PatternMatch>> {
        match &self.compiled {
            Compiled::Basic(regex) => Ok(regex
                .captures(haystack)
                .map(|caps| basic_match(regex, &caps))),
            Compiled::Fancy(regex) => Ok(regex
                .captures(haystack)
                .map_err(|err| self.match_error(err))?
                .map(|caps| fancy_match(regex, &caps))),
        }
    }

    /// Find every non-overlapping match in `haystack`.
    pub fn find_all(&self, haystack: &str) -> Result<Vec<PatternMatch>> {
        match &self.compiled {
            Compiled::Basic(regex) => Ok(regex
                .captures_iter(haystack)
                .map(|caps| basic_match(regex, &caps))
                .collect()),
            Compiled::Fancy(regex) => regex
                .captures_iter(haystack)
                .map(|caps| {
                    caps.map(|caps| fancy_match(regex, &caps))
                        .map_err(|err| self.match_error(err))
                })
                .collect(),
        }
    }

    /// Replace every match in `haystack` with `replacement`.
    pub fn replace_all(&self, haystack: &str, replacement: &str) -> Result<String> {
        match &self.compiled {
            Compiled::Basic(regex) => Ok(regex.replace_all(haystack, replacement).into_owned()),
            Compiled::Fancy(regex) => regex
                .try_replacen(haystack, 0, replacement)
                .map(Cow::into_owned)
                .map_err(|err| self.match_error(err)),
        }
    }

    fn match_error(&self, err: fancy_regex::Error) -> ZeroRegError {
        ZeroRegError::Match {
            pattern: apply_flags(&self.source, &self.flags).into_owned(),
            source: Box::new(err),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .field("engine", &self.engine_name())
            .finish()
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn apply_flags<'a>(source: &'a str, flags: &str) -> Cow<'a, str> {
    if flags.is_empty() {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(format!("(?{flags}){source}"))
    }
}

fn build_basic(pattern: &str, config: &EngineConfig) -> std::result::Result<regex::Regex, regex::Error> {
    regex::RegexBuilder::new(pattern)
        .size_limit(config.size_limit)
        .build()
}

fn build_fancy(
    pattern: &str,
    config: &EngineConfig,
) -> std::result::Result<fancy_regex::Regex, fancy_regex::Error> {
    fancy_regex::RegexBuilder::new(pattern)
        .backtrack_limit(config.backtrack_limit)
        .delegate_size_limit(config.size_limit)
        .build()
}

fn basic_match(regex: &regex::Regex, caps: &regex::Captures<'_>) -> PatternMatch {
    PatternMatch::from_groups(
        caps.iter()
            .map(|group| group.map(|m| (m.start(), m.end(), m.as_str()))),
        regex.capture_names(),
    )
}

fn fancy_match(regex: &fancy_regex::Regex, caps: &fancy_regex::Captures<'_>) -> PatternMatch {
    PatternMatch::from_groups(
        caps.iter()
            .map(|group| group.map(|m| (m.start(), m.end(), m.as_str()))),
        regex.capture_names(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sources_use_basic_engine() {
        let matcher = Matcher::compile(r"\d+").unwrap();
        assert!(!matcher.is_fancy());
        assert!(matcher.is_match("abc 123").unwrap());
        assert_eq!(matcher.as_str(), r"\d+");
    }

    #[test]
    fn lookaround_falls_up_to_backtracking() {
        let matcher = Matcher::compile(r"\d+(?=px)").unwrap();
        assert!(matcher.is_fancy());
        assert!(matcher.is_match("100px").unwrap());
        assert!(!matcher.is_match("100em").unwrap());
    }

    #[test]
    fn forced_basic_rejects_lookaround() {
        let config = EngineConfig::new().engine(EngineKind::Basic);
        let err = Matcher::compile_with(r"(?=a)a", "", &config).unwrap_err();
        assert!(matches!(
            err.engine_error(),
            Some(crate::error::EngineError::Basic(_))
        ));
    }

    #[test]
    fn forced_fancy_handles_plain_sources() {
        let config = EngineConfig::new().engine(EngineKind::Fancy);
        let matcher = Matcher::compile_with("a+", "", &config).unwrap();
        assert!(matcher.is_fancy());
        assert!(matcher.is_match("caab").unwrap());
    }

    #[test]
    fn flags_are_prepended() {
        let config = EngineConfig::default();
        let matcher = Matcher::compile_with("hello", "i", &config).unwrap();
        assert_eq!(matcher.flags(), "i");
        assert!(matcher.is_match("HeLLo").unwrap());
    }

    #[test]
    fn unbalanced_source_is_a_compile_error() {
        let err = Matcher::compile("(ab").unwrap_err();
        assert!(err.is_compile());
        assert_eq!(err.pattern(), Some("(ab"));
    }

    #[test]
    fn find_reports_named_groups_from_both_engines() {
        for source in [r"(?<d>\d+)", r"(?<=\$)(?<d>\d+)"] {
            let matcher = Matcher::compile(source).unwrap();
            let m = matcher.find("cost $42").unwrap().unwrap();
            assert_eq!(m.as_str(), "42");
            assert_eq!(m.name("d"), Some("42"));
            assert_eq!(matcher.capture_names(), vec!["d"]);
        }
    }

    #[test]
    fn replace_all_on_both_engines() {
        let basic = Matcher::compile(r"\d+").unwrap();
        assert_eq!(basic.replace_all("a1b22", "#").unwrap(), "a#b#");

        let fancy = Matcher::compile(r"\d+(?!\d)(?=b)").unwrap();
        assert_eq!(fancy.replace_all("a1b22", "#").unwrap(), "a#b22");
    }
}
