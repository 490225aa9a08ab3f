//! PRF values and the combinators that build them.
//!
//! A [`Prf`] is an immutable handle to a node in a function tree. Cloning
//! a handle shares the node; combinators never mutate their arguments, so
//! one function may appear in any number of trees.

use crate::eval::Evaluator;
use prf_types::{Arity, Nat, PrfError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

// ══════════════════════════════════════════════════════════════════════════════
// NatFunction
// ══════════════════════════════════════════════════════════════════════════════

/// A total function from a fixed number of naturals to one natural.
pub trait NatFunction {
    /// The argument counts this function accepts.
    fn arity(&self) -> Arity;

    /// Evaluate the function.
    ///
    /// Fails with an arity error when `args.len()` is not accepted.
    fn apply(&self, args: &[Nat]) -> Result<Nat>;
}

// ══════════════════════════════════════════════════════════════════════════════
// Prf
// ══════════════════════════════════════════════════════════════════════════════

/// The combinator a [`Prf`] node was built with.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PrfKind {
    /// Constant zero.
    Zero,
    /// Successor.
    Succ,
    /// Select the argument at `index`.
    Proj { index: usize },
    /// `outer(inners[0](xs), ..., inners[m-1](xs))`.
    Compose { outer: Prf, inners: Vec<Prf> },
    /// Recursion on the last argument.
    PrimRec { base: Prf, step: Prf },
    /// Least `k` below the last argument where `predicate(xs, k) == 1`.
    BoundedMin { predicate: Prf },
}

#[derive(Debug, Serialize)]
struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    arity: Arity,
    #[serde(flatten)]
    kind: PrfKind,
}

/// A primitive recursive function.
#[derive(Clone)]
pub struct Prf(Arc<Node>);

impl Prf {
    fn new(kind: PrfKind, arity: Arity) -> Self {
        Self(Arc::new(Node {
            name: None,
            arity,
            kind,
        }))
    }

    /// Return the same function under a display name.
    ///
    /// The original handle is left untouched; sub-functions are shared.
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self(Arc::new(Node {
            name: Some(name.into()),
            arity: self.0.arity,
            kind: self.0.kind.clone(),
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn kind(&self) -> &PrfKind {
        &self.0.kind
    }

    /// Short identifier used in error messages: the name if there is one,
    /// the leaf rendering for primitives, the combinator otherwise.
    pub fn label(&self) -> String {
        if let Some(name) = &self.0.name {
            return name.clone();
        }
        match &self.0.kind {
            PrfKind::Compose { .. } => "compose".to_string(),
            PrfKind::PrimRec { .. } => "prim_rec".to_string(),
            PrfKind::BoundedMin { .. } => "bounded_min".to_string(),
            _ => self.to_string(),
        }
    }

    /// Render this node's own combinator structure, even when it is named.
    /// Named sub-functions are rendered by name.
    pub fn definition(&self) -> String {
        Structure(self).to_string()
    }

    /// Whether two handles share the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn write_structure(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match &self.0.kind {
            PrfKind::Zero => match self.0.arity {
                Arity::Exact(1) => f.write_str("zero"),
                arity => write!(f, "zero_n({})", arity.min()),
            },
            PrfKind::Succ => f.write_str("succ"),
            PrfKind::Proj { index } => match self.0.arity {
                Arity::Exact(n) => write!(f, "proj_n({index}, {n})"),
                Arity::AtLeast(_) => write!(f, "proj({index})"),
            },
            PrfKind::Compose { outer, inners } => {
                write!(f, "compose({outer}")?;
                for inner in inners {
                    write!(f, ", {inner}")?;
                }
                f.write_str(")")
            }
            PrfKind::PrimRec { base, step } => write!(f, "prim_rec({base}, {step})"),
            PrfKind::BoundedMin { predicate } => write!(f, "bounded_min({predicate})"),
        }
    }
}

impl NatFunction for Prf {
    fn arity(&self) -> Arity {
        self.0.arity
    }

    fn apply(&self, args: &[Nat]) -> Result<Nat> {
        Evaluator::new().eval(self, args)
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.name {
            Some(name) => f.write_str(name),
            None => self.write_structure(f),
        }
    }
}

/// Displays a node's combinator structure regardless of its name.
struct Structure<'a>(&'a Prf);

impl fmt::Display for Structure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_structure(f)
    }
}

impl fmt::Debug for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Prf")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl Serialize for Prf {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (*self.0).serialize(serializer)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Primitive constructors
// ══════════════════════════════════════════════════════════════════════════════

/// The unary constant zero function.
pub fn zero() -> Prf {
    zero_n(1)
}

/// The constant zero function of exactly `arity` arguments.
///
/// `zero_n(0)` is the nullary zero used as the base of recursions without
/// parameters.
pub fn zero_n(arity: usize) -> Prf {
    Prf::new(PrfKind::Zero, Arity::Exact(arity))
}

/// The successor function.
pub fn succ() -> Prf {
    Prf::new(PrfKind::Succ, Arity::Exact(1))
}

/// Projection onto argument `index` (0-based) of any argument tuple
/// longer than `index`.
pub fn proj(index: usize) -> Prf {
    Prf::new(PrfKind::Proj { index }, Arity::AtLeast(index.saturating_add(1)))
}

/// Projection onto argument `index` of exactly `arity` arguments.
pub fn proj_n(index: usize, arity: usize) -> Result<Prf> {
    if index >= arity {
        return Err(PrfError::composition(
            "proj_n",
            format!("index {index} out of range for {arity} argument(s)"),
        ));
    }
    Ok(Prf::new(PrfKind::Proj { index }, Arity::Exact(arity)))
}

// ══════════════════════════════════════════════════════════════════════════════
// Combinators
// ══════════════════════════════════════════════════════════════════════════════

/// Compose `outer` with `inners`.
///
/// Every inner function must accept one common argument count, which
/// becomes the arity of the result, and `outer` must accept
/// `inners.len()` arguments. With no inners, `outer` is called with no
/// arguments and the result ignores whatever it is given.
pub fn compose(outer: &Prf, inners: &[Prf]) -> Result<Prf> {
    if !outer.arity().accepts(inners.len()) {
        return Err(PrfError::composition(
            "compose",
            format!(
                "outer function {} expects {} argument(s), given {} inner function(s)",
                outer.label(),
                outer.arity(),
                inners.len()
            ),
        ));
    }

    let mut arity = Arity::AtLeast(0);
    for (position, inner) in inners.iter().enumerate() {
        arity = arity.unify(inner.arity()).ok_or_else(|| {
            PrfError::composition(
                "compose",
                format!(
                    "inner function {position} ({}) takes {} argument(s), \
                     incompatible with {arity} taken by the ones before it",
                    inner.label(),
                    inner.arity()
                ),
            )
        })?;
    }

    Ok(Prf::new(
        PrfKind::Compose {
            outer: outer.clone(),
            inners: inners.to_vec(),
        },
        arity,
    ))
}

/// Primitive recursion on the last argument.
///
/// ```text
/// f(xs, 0)     = base(xs)
/// f(xs, k + 1) = step(xs, k, f(xs, k))
/// ```
///
/// `step` must take two more arguments than `base`.
pub fn prim_rec(base: &Prf, step: &Prf) -> Result<Prf> {
    let from_step = step.arity().minus(2).ok_or_else(|| {
        PrfError::composition(
            "prim_rec",
            format!(
                "step function {} takes {} argument(s), needs at least 2",
                step.label(),
                step.arity()
            ),
        )
    })?;
    let params = base.arity().unify(from_step).ok_or_else(|| {
        PrfError::composition(
            "prim_rec",
            format!(
                "base function {} takes {} argument(s) and step function {} takes {}; \
                 step must take exactly two more",
                base.label(),
                base.arity(),
                step.label(),
                step.arity()
            ),
        )
    })?;

    Ok(Prf::new(
        PrfKind::PrimRec {
            base: base.clone(),
            step: step.clone(),
        },
        params.plus(1),
    ))
}

/// Bounded minimization over the last argument of `predicate`.
///
/// The result takes the same arguments as `predicate`, with the last one
/// read as the bound: `f(xs, bound)` is the least `k < bound` with
/// `predicate(xs, k) == 1`, or `bound` if there is none.
pub fn bounded_min(predicate: &Prf) -> Result<Prf> {
    let arity = predicate.arity().unify(Arity::AtLeast(1)).ok_or_else(|| {
        PrfError::composition(
            "bounded_min",
            format!(
                "predicate {} takes no arguments, needs at least 1",
                predicate.label()
            ),
        )
    })?;

    Ok(Prf::new(
        PrfKind::BoundedMin {
            predicate: predicate.clone(),
        },
        arity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_arities() {
        assert_eq!(zero().arity(), Arity::Exact(1));
        assert_eq!(zero_n(0).arity(), Arity::Exact(0));
        assert_eq!(succ().arity(), Arity::Exact(1));
        assert_eq!(proj(2).arity(), Arity::AtLeast(3));
        assert_eq!(proj_n(1, 4).unwrap().arity(), Arity::Exact(4));
    }

    #[test]
    fn compose_takes_the_shared_inner_arity() {
        let f = compose(&succ(), &[proj(1)]).unwrap();
        assert_eq!(f.arity(), Arity::AtLeast(2));

        let g = compose(&proj(0), &[proj(0), zero_n(3)]).unwrap();
        assert_eq!(g.arity(), Arity::Exact(3));
    }

    #[test]
    fn compose_without_inners_ignores_arguments() {
        let one = compose(&succ(), &[zero_n(0)]).unwrap();
        assert_eq!(one.arity(), Arity::Exact(0));
        let lifted = compose(&one, &[]).unwrap();
        assert_eq!(lifted.arity(), Arity::AtLeast(0));
    }

    #[test]
    fn prim_rec_adds_the_recursion_argument() {
        let f = prim_rec(&zero_n(0), &proj(0)).unwrap();
        assert_eq!(f.arity(), Arity::Exact(1));

        let g = prim_rec(&proj(0), &proj(2)).unwrap();
        assert_eq!(g.arity(), Arity::AtLeast(2));

        let h = prim_rec(&zero(), &zero_n(3)).unwrap();
        assert_eq!(h.arity(), Arity::Exact(2));
    }

    #[test]
    fn named_shares_children_and_keeps_original() {
        let inner = succ();
        let f = compose(&inner, &[proj(0)]).unwrap();
        let g = f.named("inc");
        assert_eq!(g.to_string(), "inc");
        assert_eq!(f.to_string(), "compose(succ, proj(0))");
        assert_eq!(g.definition(), "compose(succ, proj(0))");
        match (f.kind(), g.kind()) {
            (PrfKind::Compose { outer: a, .. }, PrfKind::Compose { outer: b, .. }) => {
                assert!(a.ptr_eq(b));
                assert!(a.ptr_eq(&inner));
            }
            _ => panic!("expected compose nodes"),
        }
    }

    #[test]
    fn label_prefers_names_then_combinators() {
        assert_eq!(proj(3).label(), "proj(3)");
        let f = prim_rec(&zero_n(0), &proj(0)).unwrap();
        assert_eq!(f.label(), "prim_rec");
        assert_eq!(f.named("pred").label(), "pred");
    }
}
