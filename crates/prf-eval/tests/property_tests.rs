//! Property-based tests for the evaluator's arithmetic and search laws.

use proptest::prelude::*;

use prf_eval::{
    bmin, compose, prim_rec, proj, proj_n, succ, zero, zero_n, ErrorKind, Nat, NatFunction, Prf,
};

fn add() -> Prf {
    prim_rec(&proj_n(0, 1).unwrap(), &compose(&succ(), &[proj(2)]).unwrap()).unwrap()
}

fn mult() -> Prf {
    prim_rec(&zero(), &compose(&add(), &[proj(2), proj(0)]).unwrap()).unwrap()
}

fn monus() -> Prf {
    let pred = prim_rec(&zero_n(0), &proj(0)).unwrap();
    prim_rec(&proj_n(0, 1).unwrap(), &compose(&pred, &[proj(2)]).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_matches_host_addition(a in 0u64..10_000, b in 0u64..2_000) {
        prop_assert_eq!(add().apply(&[a, b]).unwrap(), a + b);
    }

    #[test]
    fn mult_matches_host_multiplication(a in 0u64..200, b in 0u64..200) {
        prop_assert_eq!(mult().apply(&[a, b]).unwrap(), a * b);
    }

    #[test]
    fn monus_is_truncated_subtraction(a in 0u64..400, b in 0u64..400) {
        prop_assert_eq!(monus().apply(&[a, b]).unwrap(), a.saturating_sub(b));
    }

    #[test]
    fn proj_returns_the_indexed_element(
        args in prop::collection::vec(any::<u64>(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let i = pick.index(args.len());
        prop_assert_eq!(proj(i).apply(&args).unwrap(), args[i]);
        prop_assert_eq!(proj_n(i, args.len()).unwrap().apply(&args).unwrap(), args[i]);
    }

    #[test]
    fn bmin_returns_the_least_witness_or_the_bound(
        bound in 1u64..200,
        modulus in 1u64..50,
        target in 0u64..50,
    ) {
        let predicate = |k: Nat| Nat::from(k % modulus == target % modulus && k >= target);
        let r = bmin(|k| Ok(predicate(k)), bound).unwrap();
        prop_assert!(r <= bound);
        for k in 0..r {
            prop_assert_eq!(predicate(k), 0);
        }
        if r < bound {
            prop_assert_eq!(predicate(r), 1);
        }
    }

    #[test]
    fn wrong_argument_counts_never_panic(count in 0usize..6) {
        let result = add().apply(&vec![1; count]);
        if count == 2 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Arity);
        }
    }
}
