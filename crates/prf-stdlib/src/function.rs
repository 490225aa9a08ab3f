//! Library function values: PRF trees or host-defined derived functions.

use prf_eval::{Arity, Evaluator, Nat, NatFunction, Prf, PrfError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A function computed by host code that drives PRF sub-functions.
///
/// Implementations evaluate every PRF sub-function through the evaluator
/// they are given, so step counting and gas limits cover them too.
pub trait Derived: Send + Sync {
    fn name(&self) -> &str;

    fn arity(&self) -> Arity;

    /// Human-readable description of how the function is computed.
    fn definition(&self) -> String;

    /// Evaluate the function, failing with an arity error on a wrong
    /// argument count.
    fn eval(&self, ev: &mut Evaluator, args: &[Nat]) -> Result<Nat>;
}

/// A library function.
#[derive(Clone)]
pub enum Function {
    Prf(Prf),
    Derived(Arc<dyn Derived>),
}

impl Function {
    pub fn name(&self) -> String {
        match self {
            Self::Prf(f) => f.label(),
            Self::Derived(d) => d.name().to_string(),
        }
    }

    /// The combinator structure, or the derived function's description.
    pub fn definition(&self) -> String {
        match self {
            Self::Prf(f) => f.definition(),
            Self::Derived(d) => d.definition(),
        }
    }

    /// The underlying tree, if this function is one.
    pub fn as_prf(&self) -> Option<&Prf> {
        match self {
            Self::Prf(f) => Some(f),
            Self::Derived(_) => None,
        }
    }

    /// Evaluate with a caller-supplied evaluator.
    pub fn eval(&self, ev: &mut Evaluator, args: &[Nat]) -> Result<Nat> {
        match self {
            Self::Prf(f) => ev.eval(f, args),
            Self::Derived(d) => {
                let arity = d.arity();
                if !arity.accepts(args.len()) {
                    return Err(PrfError::arity(d.name(), arity, args.len()));
                }
                let start = ev.steps();
                let result = d.eval(ev, args);
                trace!(
                    function = d.name(),
                    ?args,
                    steps = ev.steps() - start,
                    ok = result.is_ok(),
                    "evaluated"
                );
                result
            }
        }
    }
}

impl NatFunction for Function {
    fn arity(&self) -> Arity {
        match self {
            Self::Prf(f) => f.arity(),
            Self::Derived(d) => d.arity(),
        }
    }

    fn apply(&self, args: &[Nat]) -> Result<Nat> {
        self.eval(&mut Evaluator::new(), args)
    }
}

impl From<Prf> for Function {
    fn from(f: Prf) -> Self {
        Self::Prf(f)
    }
}

impl<D: Derived + 'static> From<D> for Function {
    fn from(d: D) -> Self {
        Self::Derived(Arc::new(d))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prf(prf) => f.debug_tuple("Prf").field(&format_args!("{prf}")).finish(),
            Self::Derived(d) => f.debug_tuple("Derived").field(&d.name()).finish(),
        }
    }
}
