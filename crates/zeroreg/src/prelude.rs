//! Convenient re-exports for common zeroreg usage.
//!
//! This module provides a single import for the fragment type, every
//! builder function, and the error types.
//!
//! # Example
//!
//! ```
//! use zeroreg::prelude::*;
//!
//! let hex_byte = char_in("0123456789abcdef").times(2);
//! assert!(hex_byte.is_match("ff").unwrap());
//! ```

// Core types
pub use crate::fragment::{Fragment, Operand};

// Builders
pub use crate::builders::*;

// Engine boundary
pub use crate::engine::{Matcher, PatternMatch};

// Error handling
pub use crate::error::{Result, ZeroRegError};
