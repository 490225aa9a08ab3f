//! Cantor pairing.
//!
//! `pair(a, b) = tri(a + b) + b` encodes two naturals as one, bijectively.
//! To invert it, find the diagonal `w = a + b` as the least `w` with
//! `tri(w + 1) > p`; then `b = p - tri(w)` and `a = w - b`. The search
//! keeps a running `tri(w)`, so each probe costs one `add` and unpairing
//! takes time quadratic in the diagonal.

use crate::arithmetic::{add, tri};
use crate::function::Derived;
use prf_eval::{bmin, compose, proj_n, Arity, Evaluator, Nat, Prf, PrfError, Result};

/// `pair(a, b) = tri(a + b) + b`
pub fn pair() -> Result<Prf> {
    let diagonal = compose(&tri()?, &[add()?])?;
    Ok(compose(&add()?, &[diagonal, proj_n(1, 2)?])?.named("pair"))
}

/// Inverse of [`pair`], shared by [`Fst`], [`Snd`] and the Fibonacci
/// iteration.
#[derive(Debug, Clone)]
pub struct Unpair {
    add: Prf,
}

impl Unpair {
    pub fn new() -> Result<Self> {
        Ok(Self { add: add()? })
    }

    /// Recover `(a, b)` from `pair(a, b)`.
    pub fn eval(&self, ev: &mut Evaluator, p: Nat) -> Result<(Nat, Nat)> {
        let bound = p.checked_add(1).ok_or_else(|| PrfError::Overflow {
            function: "unpair".to_string(),
        })?;
        // tri(w + 1) > p first holds at w = a + b, which is at most p.
        // `reached` is tri(w) for the probe in progress.
        let mut reached: Nat = 0;
        let w = bmin(
            |w| {
                let next = ev.eval_step(&self.add, &[reached, w + 1])?;
                if next > p {
                    return Ok(1);
                }
                reached = next;
                Ok(0)
            },
            bound,
        )?;
        // tri(w) <= p and b <= w, so neither difference truncates.
        let b = p.saturating_sub(reached);
        let a = w.saturating_sub(b);
        Ok((a, b))
    }
}

fn single(d: &dyn Derived, args: &[Nat]) -> Result<Nat> {
    match args {
        [x] => Ok(*x),
        _ => Err(PrfError::arity(d.name(), d.arity(), args.len())),
    }
}

/// First component of a Cantor pair.
#[derive(Debug, Clone)]
pub struct Fst {
    unpair: Unpair,
}

impl Fst {
    pub fn new() -> Result<Self> {
        Ok(Self {
            unpair: Unpair::new()?,
        })
    }
}

impl Derived for Fst {
    fn name(&self) -> &str {
        "fst"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn definition(&self) -> String {
        "monus(w, snd(p)) where w = bmin(w -> tri(succ(w)) > p, succ(p))".to_string()
    }

    fn eval(&self, ev: &mut Evaluator, args: &[Nat]) -> Result<Nat> {
        let p = single(self, args)?;
        Ok(self.unpair.eval(ev, p)?.0)
    }
}

/// Second component of a Cantor pair.
#[derive(Debug, Clone)]
pub struct Snd {
    unpair: Unpair,
}

impl Snd {
    pub fn new() -> Result<Self> {
        Ok(Self {
            unpair: Unpair::new()?,
        })
    }
}

impl Derived for Snd {
    fn name(&self) -> &str {
        "snd"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn definition(&self) -> String {
        "monus(p, tri(w)) where w = bmin(w -> tri(succ(w)) > p, succ(p))".to_string()
    }

    fn eval(&self, ev: &mut Evaluator, args: &[Nat]) -> Result<Nat> {
        let p = single(self, args)?;
        Ok(self.unpair.eval(ev, p)?.1)
    }
}
