//! Error types shared by the evaluator, the library and the REPL.

use crate::{Arity, Nat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad error class, derived from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Wrong argument count at a call, or incompatible sub-function
    /// arities at construction.
    Arity,
    /// A search predicate produced something other than 0 or 1.
    Domain,
    /// A result exceeded the natural-number ceiling.
    Overflow,
    /// The evaluation step limit ran out.
    Resource,
    /// A function name could not be resolved.
    Lookup,
}

/// Errors raised while building or evaluating primitive recursive functions.
///
/// Every error is a contract violation in how functions were composed or
/// invoked, so none of them is retried; they propagate to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum PrfError {
    /// A function was called with the wrong number of arguments.
    #[error("arity error: {function} expects {expected} argument(s), got {got}")]
    Arity {
        function: String,
        expected: Arity,
        got: usize,
    },

    /// Sub-function arities do not fit the combining rule.
    #[error("arity error: cannot build {combinator}: {reason}")]
    Composition { combinator: String, reason: String },

    /// A bounded search predicate returned a value outside {0, 1}.
    #[error("domain error: search predicate returned {value} at k = {k}, expected 0 or 1")]
    Domain { k: Nat, value: Nat },

    /// A result exceeded `Nat::MAX`.
    #[error("overflow in {function}: result exceeds the natural-number ceiling")]
    Overflow { function: String },

    /// The evaluator's step limit was reached.
    #[error("gas exhausted after {limit} steps")]
    GasExhausted { limit: u64 },

    /// No function is registered under this name.
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },
}

impl PrfError {
    pub fn arity(function: impl Into<String>, expected: Arity, got: usize) -> Self {
        Self::Arity {
            function: function.into(),
            expected,
            got,
        }
    }

    pub fn composition(combinator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Composition {
            combinator: combinator.into(),
            reason: reason.into(),
        }
    }

    /// Get the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Arity { .. } | Self::Composition { .. } => ErrorKind::Arity,
            Self::Domain { .. } => ErrorKind::Domain,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::GasExhausted { .. } => ErrorKind::Resource,
            Self::UnknownFunction { .. } => ErrorKind::Lookup,
        }
    }
}
