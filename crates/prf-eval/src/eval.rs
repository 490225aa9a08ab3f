//! Tree-walking evaluator for PRF values.
//!
//! Recursion and bounded search run as explicit loops, so stack depth is
//! bounded by the nesting depth of the function tree and never by the
//! values being computed.

use crate::function::{NatFunction, Prf, PrfKind};
use crate::search::bmin;
use prf_types::{Nat, PrfError, Result};
use tracing::trace;

/// Walks a [`Prf`] tree and produces a natural number.
///
/// One step is counted for every node applied and for every iteration of
/// a recursion or search loop. An optional gas limit caps the number of
/// steps.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    steps: u64,
    gas_limit: Option<u64>,
}

impl Evaluator {
    /// Create an evaluator without a step limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator that fails after `limit` steps.
    pub fn with_gas_limit(limit: u64) -> Self {
        Self {
            steps: 0,
            gas_limit: Some(limit),
        }
    }

    /// Steps consumed since creation or the last [`reset`](Self::reset).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.gas_limit
    }

    /// Clear the step counter, keeping the limit.
    pub fn reset(&mut self) {
        self.steps = 0;
    }

    /// Consume one unit of gas. Returns error if exhausted.
    fn tick(&mut self) -> Result<()> {
        self.steps += 1;
        match self.gas_limit {
            Some(limit) if self.steps > limit => Err(PrfError::GasExhausted { limit }),
            _ => Ok(()),
        }
    }

    /// Evaluate `function` on `args`.
    pub fn eval(&mut self, function: &Prf, args: &[Nat]) -> Result<Nat> {
        let start = self.steps;
        let result = self.eval_node(function, args);
        trace!(
            function = %function.label(),
            ?args,
            steps = self.steps - start,
            ok = result.is_ok(),
            "evaluated"
        );
        result
    }

    /// Evaluate `function` as one iteration of a host-driven loop.
    ///
    /// Metered like [`eval`](Self::eval) but emits no event; the caller
    /// reports the loop as a whole.
    pub fn eval_step(&mut self, function: &Prf, args: &[Nat]) -> Result<Nat> {
        self.eval_node(function, args)
    }

    fn eval_node(&mut self, function: &Prf, args: &[Nat]) -> Result<Nat> {
        self.tick()?;
        let arity = function.arity();
        if !arity.accepts(args.len()) {
            return Err(PrfError::arity(function.label(), arity, args.len()));
        }

        match function.kind() {
            PrfKind::Zero => Ok(0),
            PrfKind::Succ => args[0].checked_add(1).ok_or_else(|| PrfError::Overflow {
                function: function.label(),
            }),
            PrfKind::Proj { index } => args
                .get(*index)
                .copied()
                .ok_or_else(|| PrfError::arity(function.label(), arity, args.len())),
            PrfKind::Compose { outer, inners } => {
                let mut results = Vec::with_capacity(inners.len());
                for inner in inners {
                    results.push(self.eval_node(inner, args)?);
                }
                self.eval_node(outer, &results)
            }
            PrfKind::PrimRec { base, step } => self.eval_prim_rec(function, base, step, args),
            PrfKind::BoundedMin { predicate } => self.eval_bounded_min(function, predicate, args),
        }
    }

    /// `acc = base(xs)`, then `acc = step(xs, k, acc)` for `k` in `0..y`.
    fn eval_prim_rec(
        &mut self,
        function: &Prf,
        base: &Prf,
        step: &Prf,
        args: &[Nat],
    ) -> Result<Nat> {
        let Some((&y, params)) = args.split_last() else {
            return Err(PrfError::arity(function.label(), function.arity(), 0));
        };

        let mut acc = self.eval_node(base, params)?;
        let n = params.len();
        let mut frame = Vec::with_capacity(n + 2);
        frame.extend_from_slice(params);
        frame.extend_from_slice(&[0, 0]);
        for k in 0..y {
            self.tick()?;
            frame[n] = k;
            frame[n + 1] = acc;
            acc = self.eval_node(step, &frame)?;
        }
        Ok(acc)
    }

    fn eval_bounded_min(
        &mut self,
        function: &Prf,
        predicate: &Prf,
        args: &[Nat],
    ) -> Result<Nat> {
        let Some((&bound, params)) = args.split_last() else {
            return Err(PrfError::arity(function.label(), function.arity(), 0));
        };

        let n = params.len();
        let mut frame = Vec::with_capacity(n + 1);
        frame.extend_from_slice(params);
        frame.push(0);
        bmin(
            |k| {
                self.tick()?;
                frame[n] = k;
                self.eval_node(predicate, &frame)
            },
            bound,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{compose, prim_rec, proj, succ, zero_n};

    fn counter() -> Prf {
        // f(y) = y, by counting up from zero
        prim_rec(&zero_n(0), &compose(&succ(), &[proj(1)]).unwrap()).unwrap()
    }

    #[test]
    fn leaves_cost_one_step() {
        let mut ev = Evaluator::new();
        assert_eq!(ev.eval(&succ(), &[4]).unwrap(), 5);
        assert_eq!(ev.steps(), 1);
    }

    #[test]
    fn recursion_steps_grow_with_the_argument() {
        let f = counter();
        let mut ev = Evaluator::new();
        ev.eval(&f, &[10]).unwrap();
        let ten = ev.steps();
        ev.reset();
        ev.eval(&f, &[20]).unwrap();
        assert!(ev.steps() > ten);
    }

    #[test]
    fn gas_limit_stops_evaluation() {
        let mut ev = Evaluator::with_gas_limit(50);
        let err = ev.eval(&counter(), &[1_000]).unwrap_err();
        assert_eq!(err, PrfError::GasExhausted { limit: 50 });
    }

    #[test]
    fn generous_gas_matches_unmetered_result() {
        let mut ev = Evaluator::with_gas_limit(1_000_000);
        assert_eq!(ev.eval(&counter(), &[300]).unwrap(), 300);
        assert_eq!(ev.gas_limit(), Some(1_000_000));
    }

    #[test]
    fn eval_step_is_metered_like_eval() {
        let f = counter();
        let mut ev = Evaluator::new();
        let a = ev.eval(&f, &[15]).unwrap();
        let full = ev.steps();
        ev.reset();
        assert_eq!(ev.eval_step(&f, &[15]).unwrap(), a);
        assert_eq!(ev.steps(), full);

        let mut ev = Evaluator::with_gas_limit(5);
        assert!(matches!(
            ev.eval_step(&f, &[15]),
            Err(PrfError::GasExhausted { limit: 5 })
        ));
    }
}
