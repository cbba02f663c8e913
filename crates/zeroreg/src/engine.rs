//! Engine boundary module.
//!
//! This module hands assembled sources to the regex engines: compilation
//! with adaptive engine selection, a cache of compiled matchers, and the
//! match results returned to callers.

mod cache;
mod matcher;
mod matches;

pub use cache::{CacheStats, GLOBAL_CACHE, MatcherCache, get_matcher};
pub use matcher::Matcher;
pub use matches::PatternMatch;
