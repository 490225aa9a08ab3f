//! Arithmetic built directly from the primitives.

use prf_eval::{compose, prim_rec, proj, proj_n, succ, zero, zero_n, Prf, Result};

/// Identity on one argument.
pub fn id() -> Result<Prf> {
    proj_n(0, 1)
}

/// The nullary constant one.
pub fn one() -> Result<Prf> {
    Ok(compose(&succ(), &[zero_n(0)])?.named("one"))
}

/// The constant one, ignoring however many arguments it is given.
pub fn const_one() -> Result<Prf> {
    Ok(compose(&one()?, &[])?.named("const_one"))
}

/// `add(a, b) = a + b`
///
/// `add(a, 0) = a`, `add(a, k + 1) = succ(add(a, k))`.
pub fn add() -> Result<Prf> {
    let step = compose(&succ(), &[proj(2)])?;
    Ok(prim_rec(&id()?, &step)?.named("add"))
}

/// `mult(a, b) = a * b`
///
/// `mult(a, 0) = 0`, `mult(a, k + 1) = add(mult(a, k), a)`.
pub fn mult() -> Result<Prf> {
    let step = compose(&add()?, &[proj(2), proj(0)])?;
    Ok(prim_rec(&zero(), &step)?.named("mult"))
}

/// `pred(n) = max(n - 1, 0)`
///
/// The step returns the iteration counter rather than the accumulator, so
/// after `k + 1` iterations the result is `k`.
pub fn pred() -> Result<Prf> {
    Ok(prim_rec(&zero_n(0), &proj(0))?.named("pred"))
}

/// `monus(a, b) = max(a - b, 0)`
pub fn monus() -> Result<Prf> {
    let step = compose(&pred()?, &[proj(2)])?;
    Ok(prim_rec(&id()?, &step)?.named("monus"))
}

/// `factorial(n) = n!`
pub fn factorial() -> Result<Prf> {
    let k_plus_one = compose(&succ(), &[proj(0)])?;
    let step = compose(&mult()?, &[k_plus_one, proj(1)])?;
    Ok(prim_rec(&one()?, &step)?.named("factorial"))
}

/// `exp(b, n) = b^n`, with `exp(b, 0) = 1` for every `b`.
pub fn exp() -> Result<Prf> {
    let base = compose(&succ(), &[zero()])?;
    let step = compose(&mult()?, &[proj(2), proj(0)])?;
    Ok(prim_rec(&base, &step)?.named("exp"))
}

/// `double(n) = 2n`
pub fn double() -> Result<Prf> {
    Ok(compose(&add()?, &[id()?, id()?])?.named("double"))
}

/// `square(n) = n^2`
pub fn square() -> Result<Prf> {
    Ok(compose(&mult()?, &[id()?, id()?])?.named("square"))
}

/// Triangular numbers: `tri(n) = 0 + 1 + ... + n`.
pub fn tri() -> Result<Prf> {
    let k_plus_one = compose(&succ(), &[proj(0)])?;
    let step = compose(&add()?, &[proj(1), k_plus_one])?;
    Ok(prim_rec(&zero_n(0), &step)?.named("tri"))
}
