//! Fragment composition module.
//!
//! This module provides the immutable [`Fragment`] value, the [`Operand`]
//! type accepted by every combinator, and the escaping and wrapping policy
//! that keeps composed fragments correct when they are concatenated.

pub mod escape;
mod operand;
mod value;

pub use escape::{escape_class, escape_literal, needs_wrap, wrap};
pub use operand::Operand;
pub use value::Fragment;
