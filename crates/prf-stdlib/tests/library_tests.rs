//! Tests for the standard library registry.

use prf_eval::{compose, proj, succ, Arity, ErrorKind, NatFunction, PrfError};
use prf_stdlib::Library;

const STANDARD_NAMES: &[&str] = &[
    "add", "div", "divides", "double", "eq", "exp", "factorial", "fib", "fst", "is_zero", "leq",
    "lt", "monus", "mult", "pair", "pred", "rem", "sg", "sg_bar", "snd", "square", "tri",
];

#[test]
fn standard_library_registers_every_function() {
    let lib = Library::standard().unwrap();
    assert_eq!(lib.len(), STANDARD_NAMES.len());
    for name in STANDARD_NAMES {
        assert!(lib.contains(name), "missing {name}");
    }
}

#[test]
fn entries_are_listed_in_name_order() {
    let lib = Library::standard().unwrap();
    let names: Vec<&str> = lib.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names, STANDARD_NAMES);
}

#[test]
fn registered_functions_report_exact_arities() {
    let lib = Library::standard().unwrap();
    for entry in lib.entries() {
        let arity = entry.function.arity();
        assert!(
            matches!(arity, Arity::Exact(1) | Arity::Exact(2)),
            "{} has arity {arity}",
            entry.name
        );
    }
}

#[test]
fn lookup_and_apply() {
    let lib = Library::standard().unwrap();
    let add = &lib.get("add").unwrap().function;
    assert_eq!(add.apply(&[2, 3]).unwrap(), 5);
    assert_eq!(lib.get("factorial").unwrap().function.apply(&[6]).unwrap(), 720);
    assert_eq!(lib.get("fib").unwrap().function.apply(&[7]).unwrap(), 13);
}

#[test]
fn unknown_names_are_lookup_errors() {
    let lib = Library::standard().unwrap();
    let err = lib.get("ackermann").unwrap_err();
    assert_eq!(
        err,
        PrfError::UnknownFunction {
            name: "ackermann".into()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

#[test]
fn definitions_render_one_level_of_structure() {
    let lib = Library::standard().unwrap();
    assert_eq!(
        lib.get("add").unwrap().function.definition(),
        "prim_rec(proj_n(0, 1), compose(succ, proj(2)))"
    );
    assert_eq!(
        lib.get("mult").unwrap().function.definition(),
        "prim_rec(zero, compose(add, proj(2), proj(0)))"
    );
    assert_eq!(
        lib.get("leq").unwrap().function.definition(),
        "compose(is_zero, monus)"
    );
    assert!(lib.get("fib").unwrap().function.as_prf().is_none());
}

#[test]
fn custom_registration_replaces_entries() {
    let mut lib = Library::new();
    assert!(lib.is_empty());
    let inc = compose(&succ(), &[proj(0)]).unwrap();
    lib.register("inc", "inc(n) = n + 1", inc.clone());
    lib.register("inc", "inc(n) = n + 1, again", inc);
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.get("inc").unwrap().description, "inc(n) = n + 1, again");
}
