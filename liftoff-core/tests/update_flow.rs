//! End-to-end composition scenarios for the partial-update flow: sparse form
//! input in, minimal patch (or local failure) out.

use liftoff_core::{report, Candidate, Error, UpdatePatch};
use serde_json::json;

fn product_form(name: &str, description: &str, price: f64, email: &str) -> Vec<(&'static str, Candidate)> {
    vec![
        ("name", Candidate::Text(name.to_string())),
        ("description", Candidate::Text(description.to_string())),
        ("price", Candidate::Number(price)),
        ("categoria", Candidate::Choice(None)),
        ("email_fornecedor", Candidate::Text(email.to_string())),
    ]
}

#[test]
fn single_supplied_field_produces_minimal_patch() {
    let patch = UpdatePatch::compose(product_form("Widget", "", 0.0, "")).unwrap();
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "Widget"}));
}

#[test]
fn untouched_form_fails_before_any_request() {
    let err = UpdatePatch::compose(product_form("", "", 0.0, "")).unwrap_err();
    assert!(matches!(err, Error::NoFieldsProvided));
    assert_eq!(report::describe(&err), "No information provided for update.");
}

#[test]
fn zero_price_is_indistinguishable_from_untouched() {
    // Documented quirk: a price of exactly zero can never be sent.
    let with_zero = UpdatePatch::compose(product_form("Widget", "", 0.0, "")).unwrap();
    let without = UpdatePatch::compose(product_form("Widget", "", -1.0, "")).unwrap();
    assert_eq!(
        serde_json::to_value(&with_zero).unwrap(),
        serde_json::to_value(&without).unwrap()
    );
}

#[test]
fn full_form_keeps_backend_field_order() {
    let patch = UpdatePatch::compose(product_form("Widget", "A widget", 19.9, "s@example.com"))
        .unwrap();
    let keys: Vec<_> = patch.fields().keys().cloned().collect();
    assert_eq!(keys, ["name", "description", "price", "email_fornecedor"]);
}
