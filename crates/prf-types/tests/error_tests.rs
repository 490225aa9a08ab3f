//! Tests for error classification, messages and serialization.

use prf_types::{Arity, ErrorKind, PrfError};

#[test]
fn call_and_construction_errors_share_the_arity_kind() {
    let call = PrfError::arity("succ", Arity::Exact(1), 2);
    let build = PrfError::composition("compose", "outer expects 1 argument(s), given 2 inner function(s)");
    assert_eq!(call.kind(), ErrorKind::Arity);
    assert_eq!(build.kind(), ErrorKind::Arity);
}

#[test]
fn kinds_of_remaining_variants() {
    assert_eq!(PrfError::Domain { k: 3, value: 2 }.kind(), ErrorKind::Domain);
    assert_eq!(
        PrfError::Overflow { function: "succ".into() }.kind(),
        ErrorKind::Overflow
    );
    assert_eq!(PrfError::GasExhausted { limit: 10 }.kind(), ErrorKind::Resource);
    assert_eq!(PrfError::UnknownFunction { name: "nope".into() }.kind(), ErrorKind::Lookup);
}

#[test]
fn arity_message_renders_open_arities() {
    let err = PrfError::arity("proj(2)", Arity::AtLeast(3), 1);
    assert_eq!(
        err.to_string(),
        "arity error: proj(2) expects 3+ argument(s), got 1"
    );
}

#[test]
fn domain_message_names_the_offending_step() {
    let err = PrfError::Domain { k: 4, value: 7 };
    assert_eq!(
        err.to_string(),
        "domain error: search predicate returned 7 at k = 4, expected 0 or 1"
    );
}

#[test]
fn errors_serialize_with_a_tag() {
    let err = PrfError::arity("add", Arity::Exact(2), 3);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["error"], "arity");
    assert_eq!(json["function"], "add");
    assert_eq!(json["expected"]["kind"], "exact");
    assert_eq!(json["expected"]["count"], 2);
    assert_eq!(json["got"], 3);

    let back: PrfError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
