//! Division and remainder through bounded search.
//!
//! There is no direct way to divide with primitive recursion; instead the
//! quotient is searched for below a bound known to contain it.

use crate::arithmetic::{monus, mult};
use crate::predicates::{is_zero, lt, sg};
use prf_eval::{bounded_min, compose, proj_n, succ, Prf, Result};

/// `div(a, b) = floor(a / b)`, with `div(a, 0) = 0`.
///
/// For `b > 0` the quotient is the least `q <= a` with `b * (q + 1) > a`.
/// With `b = 0` the search runs out and the result is forced to zero by
/// multiplying with `sg(b)`.
pub fn div() -> Result<Prf> {
    let a = proj_n(0, 3)?;
    let b = proj_n(1, 3)?;
    let q_plus_one = compose(&succ(), &[proj_n(2, 3)?])?;
    let product = compose(&mult()?, &[b, q_plus_one])?;
    let exceeds = compose(&lt()?, &[a, product])?;

    let a = proj_n(0, 2)?;
    let b = proj_n(1, 2)?;
    let bound = compose(&succ(), &[a.clone()])?;
    let quotient = compose(&bounded_min(&exceeds)?, &[a, b.clone(), bound])?;
    let b_nonzero = compose(&sg()?, &[b])?;
    Ok(compose(&mult()?, &[quotient, b_nonzero])?.named("div"))
}

/// `rem(a, b) = a mod b`, with `rem(a, 0) = a`.
pub fn rem() -> Result<Prf> {
    let a = proj_n(0, 2)?;
    let b = proj_n(1, 2)?;
    let multiple = compose(&mult()?, &[b, div()?])?;
    Ok(compose(&monus()?, &[a, multiple])?.named("rem"))
}

/// `divides(d, n) = 1` iff `d` divides `n`. Zero divides only zero.
pub fn divides() -> Result<Prf> {
    let remainder = compose(&rem()?, &[proj_n(1, 2)?, proj_n(0, 2)?])?;
    Ok(compose(&is_zero()?, &[remainder])?.named("divides"))
}
