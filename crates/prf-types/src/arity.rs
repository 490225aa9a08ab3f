//! Function arities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of arguments a function accepts.
///
/// Most functions take an exact count. Projections and argument-ignoring
/// constants accept any count from some minimum upward; such an arity is
/// pinned down once the function is combined with exactly-sized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// Any fixed number of arguments `>= n`.
    AtLeast(usize),
}

impl Arity {
    /// Whether a call with `count` arguments is allowed.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }

    /// The smallest argument count this arity allows.
    pub fn min(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) => n,
        }
    }

    /// The most specific arity accepted by both `self` and `other`.
    ///
    /// Returns `None` when no argument count satisfies both.
    pub fn unify(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => (a == b).then_some(Self::Exact(a)),
            (Self::Exact(a), Self::AtLeast(m)) | (Self::AtLeast(m), Self::Exact(a)) => {
                (a >= m).then_some(Self::Exact(a))
            }
            (Self::AtLeast(a), Self::AtLeast(b)) => Some(Self::AtLeast(a.max(b))),
        }
    }

    /// The arity seen after `k` trailing arguments are added.
    ///
    /// Saturates at `usize::MAX`, a count no argument slice can reach.
    pub fn plus(self, k: usize) -> Self {
        match self {
            Self::Exact(n) => Self::Exact(n.saturating_add(k)),
            Self::AtLeast(n) => Self::AtLeast(n.saturating_add(k)),
        }
    }

    /// The arity seen after `k` trailing arguments are removed.
    ///
    /// An exact arity smaller than `k` has no such counterpart.
    pub fn minus(self, k: usize) -> Option<Self> {
        match self {
            Self::Exact(n) => n.checked_sub(k).map(Self::Exact),
            Self::AtLeast(n) => Some(Self::AtLeast(n.saturating_sub(k))),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_accepts_only_its_count() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(1));
        assert!(!Arity::Exact(2).accepts(3));
    }

    #[test]
    fn at_least_accepts_upward() {
        assert!(!Arity::AtLeast(2).accepts(1));
        assert!(Arity::AtLeast(2).accepts(2));
        assert!(Arity::AtLeast(2).accepts(40));
    }

    #[test]
    fn unify_pins_open_arities() {
        assert_eq!(Arity::AtLeast(1).unify(Arity::Exact(3)), Some(Arity::Exact(3)));
        assert_eq!(Arity::Exact(3).unify(Arity::AtLeast(4)), None);
        assert_eq!(Arity::AtLeast(1).unify(Arity::AtLeast(3)), Some(Arity::AtLeast(3)));
        assert_eq!(Arity::Exact(2).unify(Arity::Exact(3)), None);
    }

    #[test]
    fn minus_below_zero() {
        assert_eq!(Arity::Exact(1).minus(2), None);
        assert_eq!(Arity::AtLeast(1).minus(2), Some(Arity::AtLeast(0)));
        assert_eq!(Arity::Exact(4).minus(2), Some(Arity::Exact(2)));
    }

    #[test]
    fn plus_saturates() {
        assert_eq!(Arity::Exact(1).plus(2), Arity::Exact(3));
        assert_eq!(Arity::AtLeast(usize::MAX).plus(1), Arity::AtLeast(usize::MAX));
        assert!(!Arity::AtLeast(usize::MAX).plus(1).accepts(1));
    }

    #[test]
    fn display() {
        assert_eq!(Arity::Exact(2).to_string(), "2");
        assert_eq!(Arity::AtLeast(1).to_string(), "1+");
    }
}
