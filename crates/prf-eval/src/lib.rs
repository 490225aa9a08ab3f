//! PRF evaluator: primitive recursive functions as composable values.
//!
//! Functions are built by nesting the five primitive combinators
//! ([`zero`], [`succ`], [`proj`], [`compose`], [`prim_rec`]) plus the
//! bounded search combinator [`bounded_min`], then applied to natural
//! numbers:
//!
//! ```
//! use prf_eval::{compose, prim_rec, proj, succ, NatFunction};
//!
//! // add(x, 0) = x, add(x, k + 1) = succ(add(x, k))
//! let add = prim_rec(&proj(0), &compose(&succ(), &[proj(2)]).unwrap()).unwrap();
//! assert_eq!(add.apply(&[3, 4]).unwrap(), 7);
//! ```
//!
//! Arity mismatches between sub-functions are rejected when a combinator
//! is built; argument counts are checked again on every call.

pub mod eval;
pub mod function;
pub mod search;

pub use eval::Evaluator;
pub use function::{
    bounded_min, compose, prim_rec, proj, proj_n, succ, zero, zero_n, NatFunction, Prf, PrfKind,
};
pub use prf_types::{Arity, ErrorKind, Nat, PrfError, Result};
pub use search::bmin;
