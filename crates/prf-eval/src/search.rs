//! Bounded minimization.

use prf_types::{Nat, PrfError, Result};

/// Least `k < bound` with `predicate(k) == 1`, or `bound` if there is none.
///
/// The predicate is probed in increasing order of `k` and at most `bound`
/// times. A predicate result other than 0 or 1 is a domain error; a failing
/// predicate aborts the search with its own error.
pub fn bmin<F>(mut predicate: F, bound: Nat) -> Result<Nat>
where
    F: FnMut(Nat) -> Result<Nat>,
{
    for k in 0..bound {
        match predicate(k)? {
            0 => {}
            1 => return Ok(k),
            value => return Err(PrfError::Domain { k, value }),
        }
    }
    Ok(bound)
}
