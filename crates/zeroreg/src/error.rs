//! Error types for zeroreg.
//!
//! Building fragments never fails. Errors only appear at the engine
//! boundary, when an assembled source is compiled or executed, and when
//! configuration is loaded.

use thiserror::Error;

/// The main error type for zeroreg operations.
#[derive(Debug, Error)]
pub enum ZeroRegError {
    /// The engine rejected an assembled pattern.
    #[error("invalid pattern `{pattern}`: {source}")]
    Compile {
        /// The pattern handed to the engine, flags included.
        pattern: String,
        /// The engine's own error.
        #[source]
        source: EngineError,
    },

    /// The backtracking engine gave up while matching.
    #[error("matching `{pattern}` failed: {source}")]
    Match {
        /// The pattern being executed.
        pattern: String,
        /// The engine's own error.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// An error produced by one of the underlying regex engines.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Error from the finite-automata engine.
    #[error(transparent)]
    Basic(#[from] regex::Error),

    /// Error from the backtracking engine.
    #[error(transparent)]
    Fancy(#[from] Box<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for EngineError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(Box::new(err))
    }
}

impl ZeroRegError {
    /// Build a compile error for `pattern`.
    pub fn compile(pattern: impl Into<String>, source: impl Into<EngineError>) -> Self {
        Self::Compile {
            pattern: pattern.into(),
            source: source.into(),
        }
    }

    /// Build a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a compile error.
    #[must_use]
    pub const fn is_compile(&self) -> bool {
        matches!(self, Self::Compile { .. })
    }

    /// The pattern involved, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Compile { pattern, .. } | Self::Match { pattern, .. } => Some(pattern),
            Self::Config { .. } => None,
        }
    }

    /// The engine's error, if the engine rejected the pattern.
    #[must_use]
    pub const fn engine_error(&self) -> Option<&EngineError> {
        match self {
            Self::Compile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for zeroreg operations.
pub type Result<T> = std::result::Result<T, ZeroRegError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_keeps_engine_error() {
        let engine = regex::Regex::new("(").unwrap_err();
        let err = ZeroRegError::compile("(", engine);
        assert!(err.is_compile());
        assert_eq!(err.pattern(), Some("("));
        assert!(matches!(err.engine_error(), Some(EngineError::Basic(_))));
        assert!(err.to_string().starts_with("invalid pattern `(`"));
    }

    #[test]
    fn config_error_display() {
        let err = ZeroRegError::config("bad engine");
        assert_eq!(err.to_string(), "configuration error: bad engine");
        assert_eq!(err.pattern(), None);
    }
}
