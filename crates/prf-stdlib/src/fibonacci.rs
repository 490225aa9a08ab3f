//! Fibonacci numbers through pair-encoded state.
//!
//! The recursion carries `pair(fib(k), fib(k + 1))` as a single natural:
//!
//! ```text
//! state(0)     = pair(0, 1)
//! state(k + 1) = pair(snd(state(k)), fst(state(k)) + snd(state(k)))
//! fib(n)       = fst(state(n))
//! ```
//!
//! The host loop runs the recursion; every `pair`, `add` and unpair inside
//! it is metered. Cost grows with the square of `fib(n + 2)`, so the
//! default REPL step limit covers `n` up to about 15.

use crate::arithmetic::add;
use crate::function::Derived;
use crate::pairing::{pair, Unpair};
use prf_eval::{Arity, Evaluator, Nat, Prf, PrfError, Result};

#[derive(Debug, Clone)]
pub struct Fib {
    pair: Prf,
    add: Prf,
    unpair: Unpair,
}

impl Fib {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pair: pair()?,
            add: add()?,
            unpair: Unpair::new()?,
        })
    }
}

impl Derived for Fib {
    fn name(&self) -> &str {
        "fib"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn definition(&self) -> String {
        "fst(s_n) where s_0 = pair(0, 1), s_(k+1) = pair(snd(s_k), add(fst(s_k), snd(s_k)))"
            .to_string()
    }

    fn eval(&self, ev: &mut Evaluator, args: &[Nat]) -> Result<Nat> {
        let &[n] = args else {
            return Err(PrfError::arity(self.name(), self.arity(), args.len()));
        };
        let mut state = ev.eval_step(&self.pair, &[0, 1])?;
        for _ in 0..n {
            let (a, b) = self.unpair.eval(ev, state)?;
            let next = ev.eval_step(&self.add, &[a, b])?;
            state = ev.eval_step(&self.pair, &[b, next])?;
        }
        Ok(self.unpair.eval(ev, state)?.0)
    }
}
