//! Configuration types for zeroreg.
//!
//! Fragment construction has nothing to configure. These settings govern
//! how assembled sources are compiled and how many compiled matchers the
//! global cache keeps.

pub mod env;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ZeroRegError};
use env::{EnvConfig, vars};

/// Default number of compiled matchers kept by a cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Default compiled program size limit (10 MiB).
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Default backtracking step limit.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Which engine compiles assembled sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Try the finite-automata engine, fall up to backtracking on syntax it
    /// does not support (lookaround).
    #[default]
    Adaptive,
    /// Finite-automata engine only. Lookaround is rejected.
    Basic,
    /// Backtracking engine only.
    Fancy,
}

impl EngineKind {
    /// The configuration name of this engine kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adaptive => "adaptive",
            Self::Basic => "basic",
            Self::Fancy => "fancy",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = ZeroRegError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "adaptive" | "auto" => Ok(Self::Adaptive),
            "basic" | "regex" => Ok(Self::Basic),
            "fancy" | "backtracking" => Ok(Self::Fancy),
            other => Err(ZeroRegError::config(format!("unknown engine `{other}`"))),
        }
    }
}

/// Configuration for compiling fragments into matchers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Engine selection.
    pub engine: EngineKind,

    /// Maximum number of compiled matchers kept by a cache. Zero disables
    /// caching.
    pub cache_capacity: usize,

    /// Compiled program size limit in bytes.
    pub size_limit: usize,

    /// Backtracking step limit for the backtracking engine.
    pub backtrack_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            size_limit: DEFAULT_SIZE_LIMIT,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine selection.
    #[must_use]
    pub const fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Set the cache capacity.
    #[must_use]
    pub const fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the compiled program size limit.
    #[must_use]
    pub const fn size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    /// Set the backtracking step limit.
    #[must_use]
    pub const fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Load from the process environment (`ZEROREG_*` variables).
    ///
    /// Unparsable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(&EnvConfig::default())
    }

    /// Load from the given environment reader, starting from defaults.
    #[must_use]
    pub fn from_env_with(env: &EnvConfig) -> Self {
        let mut config = Self::default();

        if let Some(raw) = env.get(vars::ENGINE) {
            match raw.parse() {
                Ok(engine) => config.engine = engine,
                Err(err) => tracing::warn!(error = %err, "ignoring {}", vars::ENGINE),
            }
        }
        if let Some(value) = usize_var(env, vars::CACHE_CAPACITY) {
            config.cache_capacity = value;
        }
        if let Some(value) = usize_var(env, vars::SIZE_LIMIT) {
            config.size_limit = value;
        }
        if let Some(value) = usize_var(env, vars::BACKTRACK_LIMIT) {
            config.backtrack_limit = value;
        }

        config
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| ZeroRegError::config(err.to_string()))
    }
}

fn usize_var(env: &EnvConfig, name: &str) -> Option<usize> {
    match env.parse::<usize>(name)? {
        Ok(value) => Some(value),
        Err(raw) => {
            tracing::warn!(value = %raw, "ignoring non-numeric {name}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.engine, EngineKind::Adaptive);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
        assert_eq!(config.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);
    }

    #[test]
    fn builder_setters() {
        let config = EngineConfig::new()
            .engine(EngineKind::Fancy)
            .cache_capacity(4)
            .size_limit(1024)
            .backtrack_limit(10);
        assert_eq!(config.engine, EngineKind::Fancy);
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.size_limit, 1024);
        assert_eq!(config.backtrack_limit, 10);
    }

    #[test]
    fn engine_kind_parsing() {
        assert_eq!("Basic".parse::<EngineKind>().unwrap(), EngineKind::Basic);
        assert_eq!(" fancy ".parse::<EngineKind>().unwrap(), EngineKind::Fancy);
        assert_eq!("auto".parse::<EngineKind>().unwrap(), EngineKind::Adaptive);
        assert!("pcre".parse::<EngineKind>().is_err());
        assert_eq!(EngineKind::Basic.to_string(), "basic");
    }

    #[test]
    fn from_env_reads_overrides() {
        let env = EnvConfig::new("ZEROREG_TEST_CONFIG")
            .with_var(vars::ENGINE, "basic")
            .with_var(vars::CACHE_CAPACITY, "7");
        let config = EngineConfig::from_env_with(&env);
        assert_eq!(config.engine, EngineKind::Basic);
        assert_eq!(config.cache_capacity, 7);
        assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
    }

    #[test]
    fn from_env_ignores_bad_values() {
        let env = EnvConfig::new("ZEROREG_TEST_BAD")
            .with_var(vars::ENGINE, "pcre")
            .with_var(vars::BACKTRACK_LIMIT, "-1");
        assert_eq!(EngineConfig::from_env_with(&env), EngineConfig::default());
    }

    #[test]
    fn from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            engine = "fancy"
            cache_capacity = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.engine, EngineKind::Fancy);
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);
    }

    #[test]
    fn from_toml_rejects_unknown_keys() {
        let err = EngineConfig::from_toml_str("flavour = \"pcre\"").unwrap_err();
        assert!(matches!(err, ZeroRegError::Config { .. }));
    }
}
