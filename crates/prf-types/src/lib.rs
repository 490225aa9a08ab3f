//! Shared types for the PRF evaluator.
//!
//! This crate defines the natural-number type, function arities and the
//! error taxonomy used by every other crate in the workspace.

mod arity;
mod error;

pub use arity::Arity;
pub use error::{ErrorKind, PrfError};

/// A natural number.
///
/// Values are bounded by `u64::MAX`; anything larger is reported as
/// [`PrfError::Overflow`] rather than wrapping.
pub type Nat = u64;

/// Result type used throughout the PRF crates.
pub type Result<T> = std::result::Result<T, PrfError>;
