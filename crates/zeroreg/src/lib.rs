//! zeroreg: fluent, composable regular expressions
//!
//! This crate builds regular expressions out of named, reusable fragments
//! (character classes, quantifiers, groups, anchors and lookaround) instead
//! of hand-written pattern syntax. Plain text is escaped automatically, and
//! quantifiers group their operand only when they would otherwise bind to
//! part of it.
//!
//! # Features
//!
//! - **Immutable fragments**: every combinator returns a new [`Fragment`]
//! - **Safe literals**: plain text operands always match themselves
//! - **Full engine power**: lookaround compiles through a backtracking engine
//!   automatically
//! - **Ready-made patterns** for common validation targets in [`patterns`]
//!
//! # Example
//!
//! ```
//! use zeroreg::prelude::*;
//!
//! # fn main() -> zeroreg::Result<()> {
//! let price = lookbehind("$").then(digit().one_or_more());
//! assert_eq!(price.as_str(), r"(?<=\$)\d+");
//!
//! let m = price.find("total: $42")?.expect("a price");
//! assert_eq!(m.as_str(), "42");
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod config;
pub mod engine;
pub mod error;
pub mod fragment;
pub mod patterns;
pub mod prelude;

pub use builders::{
    alphanumeric, alternate, any_char, at_least, at_most, between, capture, capture_named,
    carriage_return, char_in, char_not_in, digit, digits, end_of_line, exactly, group, letter,
    literal, lookahead, lookbehind, lowercase, negative_lookahead, negative_lookbehind, newline,
    non_digit, non_whitespace, non_word, non_word_boundary, one_of, one_or_more, optional, range,
    raw, sequence, start_of_line, tab, uppercase, whitespace, word, word_boundary, zero_or_more,
};
pub use config::{EngineConfig, EngineKind};
pub use engine::{CacheStats, GLOBAL_CACHE, Matcher, MatcherCache, PatternMatch, get_matcher};
pub use error::{EngineError, Result, ZeroRegError};
pub use fragment::{Fragment, Operand, escape_class, escape_literal};
