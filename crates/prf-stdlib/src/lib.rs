//! Standard library of derived primitive recursive functions.
//!
//! Every function here is built from the core combinators in [`prf_eval`].
//! Recursion is always on the last argument, so `exp(b, n)` is `b^n` and
//! `monus(a, b)` is `a - b` truncated at zero.
//!
//! Most entries are plain [`Prf`](prf_eval::Prf) trees. Cantor unpairing
//! and Fibonacci are [`Derived`] functions: host code that drives PRF
//! sub-functions through bounded search and explicit iteration, since the
//! pure trees cost time cubic in the encoded value.

pub mod arithmetic;
pub mod division;
pub mod fibonacci;
pub mod function;
pub mod pairing;
pub mod predicates;
pub mod registry;

pub use function::{Derived, Function};
pub use registry::{Entry, Library};
