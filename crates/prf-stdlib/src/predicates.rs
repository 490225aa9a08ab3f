//! Predicates returning 0 or 1.

use crate::arithmetic::{add, const_one, monus};
use prf_eval::{compose, prim_rec, proj, proj_n, succ, zero_n, Prf, Result};

/// Sign: `sg(0) = 0`, `sg(n) = 1` otherwise.
pub fn sg() -> Result<Prf> {
    Ok(prim_rec(&zero_n(0), &const_one()?)?.named("sg"))
}

/// Complemented sign: `sg_bar(0) = 1`, `sg_bar(n) = 0` otherwise.
pub fn sg_bar() -> Result<Prf> {
    Ok(compose(&monus()?, &[const_one()?, sg()?])?.named("sg_bar"))
}

/// Same function as [`sg_bar`], read as a zero test.
pub fn is_zero() -> Result<Prf> {
    Ok(sg_bar()?.named("is_zero"))
}

/// `|a - b| = monus(a, b) + monus(b, a)`
fn abs_diff() -> Result<Prf> {
    let flipped = compose(&monus()?, &[proj(1), proj(0)])?;
    compose(&add()?, &[monus()?, flipped])
}

/// `eq(a, b) = 1` iff `a == b`.
pub fn eq() -> Result<Prf> {
    Ok(compose(&is_zero()?, &[abs_diff()?])?.named("eq"))
}

/// `leq(a, b) = 1` iff `a <= b`, i.e. `monus(a, b) == 0`.
pub fn leq() -> Result<Prf> {
    Ok(compose(&is_zero()?, &[monus()?])?.named("leq"))
}

/// `lt(a, b) = 1` iff `a < b`, i.e. `a + 1 <= b`.
pub fn lt() -> Result<Prf> {
    let a_plus_one = compose(&succ(), &[proj_n(0, 2)?])?;
    Ok(compose(&leq()?, &[a_plus_one, proj_n(1, 2)?])?.named("lt"))
}
