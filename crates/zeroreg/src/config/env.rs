//! Environment-based configuration.

use std::collections::HashMap;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "ZEROREG";

/// Environment variable reader.
///
/// Values set with [`EnvConfig::with_var`] take precedence over the process
/// environment, which keeps tests free of global state.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Values that shadow the process environment.
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Shadow the variable `name` with `value`.
    #[must_use]
    pub fn with_var(mut self, name: &str, value: impl Into<String>) -> Self {
        let var_name = self.var_name(name);
        self.overrides.insert(var_name, value.into());
        self
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
    }

    /// Get a parsed value.
    ///
    /// Returns `Some(Err(raw))` when the variable is set but does not parse.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<Result<T, String>> {
        self.get(name)
            .map(|raw| raw.trim().parse().map_err(|_| raw))
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Recognized environment variables.
pub mod vars {
    /// Engine selection: `adaptive`, `basic` or `fancy`.
    pub const ENGINE: &str = "ENGINE";
    /// Maximum number of compiled matchers kept in the global cache.
    pub const CACHE_CAPACITY: &str = "CACHE_CAPACITY";
    /// Compiled program size limit in bytes.
    pub const SIZE_LIMIT: &str = "SIZE_LIMIT";
    /// Backtracking step limit.
    pub const BACKTRACK_LIMIT: &str = "BACKTRACK_LIMIT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_name_is_prefixed_and_uppercased() {
        let env = EnvConfig::new("ZR");
        assert_eq!(env.var_name("cache_capacity"), "ZR_CACHE_CAPACITY");
        assert_eq!(EnvConfig::new("").var_name("engine"), "ENGINE");
    }

    #[test]
    fn overrides_shadow_process_env() {
        let env = EnvConfig::new("ZEROREG_TEST_OVERRIDE").with_var(vars::ENGINE, "fancy");
        assert!(env.is_set(vars::ENGINE));
        assert_eq!(env.get(vars::ENGINE).as_deref(), Some("fancy"));
    }

    #[test]
    fn parse_reports_unparsable_values() {
        let env = EnvConfig::new("ZEROREG_TEST_PARSE")
            .with_var(vars::CACHE_CAPACITY, " 12 ")
            .with_var(vars::SIZE_LIMIT, "lots");
        assert_eq!(env.parse::<usize>(vars::CACHE_CAPACITY), Some(Ok(12)));
        assert_eq!(
            env.parse::<usize>(vars::SIZE_LIMIT),
            Some(Err("lots".to_string()))
        );
        assert_eq!(env.parse::<usize>(vars::BACKTRACK_LIMIT), None);
    }
}
