//! Partial update composition.
//!
//! An edit form re-displays every field of a record; the user fills in only
//! what should change. Each field arrives here as a tagged [`Candidate`] so
//! that "left untouched" and "set to a value" are distinct states rather than
//! a truthiness convention. The composed [`UpdatePatch`] carries only the
//! fields the user actually supplied, in form order, and is the only body
//! shape the client will PUT.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One form field as captured on submit: untouched, or a replacement value.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Free text. Blank or whitespace-only counts as untouched; otherwise the
    /// trimmed string is taken verbatim.
    Text(String),
    /// Fractional amount (price, salary, sale value). Included only when
    /// strictly positive. A legitimate value of exactly zero can never be
    /// expressed as an explicit update; inherited domain policy, kept as-is.
    Number(f64),
    /// Whole-number amount (quantity, department id). Same strictly-positive
    /// rule as `Number`.
    Integer(i64),
    /// Calendar date, serialized as `YYYY-MM-DD` when chosen.
    Date(Option<NaiveDate>),
    /// Zone-less timestamp, serialized as ISO-8601 date-plus-time when chosen.
    DateTime(Option<NaiveDateTime>),
    /// Enumerated selection, already resolved to its wire spelling.
    Choice(Option<String>),
}

impl Candidate {
    /// The value to place in the patch, or `None` when the field counts as
    /// untouched.
    fn normalize(&self) -> Option<Value> {
        match self {
            Candidate::Text(raw) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| Value::from(trimmed))
            }
            Candidate::Number(n) => (*n > 0.0).then(|| Value::from(*n)),
            Candidate::Integer(n) => (*n > 0).then(|| Value::from(*n)),
            Candidate::Date(d) => d.map(|d| Value::from(d.format("%Y-%m-%d").to_string())),
            Candidate::DateTime(t) => {
                t.map(|t| Value::from(t.format("%Y-%m-%dT%H:%M:%S").to_string()))
            }
            Candidate::Choice(c) => c.as_deref().map(Value::from),
        }
    }
}

/// Minimal partial-update body: only the supplied fields, in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpdatePatch(Map<String, Value>);

impl UpdatePatch {
    /// Composes the patch from the form's candidates. Fails with
    /// [`Error::NoFieldsProvided`] when every candidate normalizes to
    /// untouched; the caller must not issue a request in that case.
    pub fn compose<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Candidate)>,
    {
        let mut body = Map::new();
        for (name, candidate) in fields {
            if let Some(value) = candidate.normalize() {
                body.insert(name.to_string(), value);
            }
        }
        if body.is_empty() {
            return Err(Error::NoFieldsProvided);
        }
        Ok(UpdatePatch(body))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_untouched_fields_fail_composition() {
        let result = UpdatePatch::compose([
            ("name", Candidate::Text("   ".into())),
            ("price", Candidate::Number(0.0)),
            ("quantity", Candidate::Integer(0)),
            ("start_date", Candidate::Date(None)),
            ("category", Candidate::Choice(None)),
        ]);
        assert!(matches!(result, Err(Error::NoFieldsProvided)));
    }

    #[test]
    fn text_is_trimmed_and_kept_verbatim() {
        let patch = UpdatePatch::compose([("name", Candidate::Text("  Widget  ".into()))]).unwrap();
        assert_eq!(patch.fields()["name"], json!("Widget"));
    }

    #[test]
    fn zero_numbers_are_always_excluded() {
        let patch = UpdatePatch::compose([
            ("price", Candidate::Number(0.0)),
            ("salary", Candidate::Number(-1.5)),
            ("quantity", Candidate::Integer(0)),
            ("name", Candidate::Text("keep".into())),
        ])
        .unwrap();
        assert_eq!(patch.len(), 1);
        assert!(patch.fields().get("price").is_none());
        assert!(patch.fields().get("salary").is_none());
        assert!(patch.fields().get("quantity").is_none());
    }

    #[test]
    fn positive_numbers_are_included() {
        let patch = UpdatePatch::compose([
            ("price", Candidate::Number(19.9)),
            ("quantity", Candidate::Integer(3)),
        ])
        .unwrap();
        assert_eq!(patch.fields()["price"], json!(19.9));
        assert_eq!(patch.fields()["quantity"], json!(3));
    }

    #[test]
    fn chosen_dates_serialize_iso() {
        let ts = date(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap();
        let patch = UpdatePatch::compose([
            ("start_date", Candidate::Date(Some(date(2024, 3, 1)))),
            ("data", Candidate::DateTime(Some(ts))),
        ])
        .unwrap();
        assert_eq!(patch.fields()["start_date"], json!("2024-03-01"));
        assert_eq!(patch.fields()["data"], json!("2024-03-01T09:00:00"));
    }

    #[test]
    fn unchosen_dates_are_excluded() {
        let patch = UpdatePatch::compose([
            ("start_date", Candidate::Date(None)),
            ("name", Candidate::Text("x".into())),
        ])
        .unwrap();
        assert!(patch.fields().get("start_date").is_none());
    }

    #[test]
    fn choices_carry_their_wire_spelling() {
        let patch =
            UpdatePatch::compose([("categoria", Candidate::Choice(Some("Móveis".into())))])
                .unwrap();
        assert_eq!(patch.fields()["categoria"], json!("Móveis"));
    }

    #[test]
    fn field_order_follows_form_order() {
        let patch = UpdatePatch::compose([
            ("b", Candidate::Text("2".into())),
            ("a", Candidate::Text("1".into())),
            ("c", Candidate::Text("3".into())),
        ])
        .unwrap();
        let keys: Vec<_> = patch.fields().keys().cloned().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn sparse_product_form_yields_minimal_patch() {
        let patch = UpdatePatch::compose([
            ("name", Candidate::Text("Widget".into())),
            ("description", Candidate::Text("".into())),
            ("price", Candidate::Number(0.0)),
            ("categoria", Candidate::Choice(None)),
            ("email_fornecedor", Candidate::Text("".into())),
        ])
        .unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "Widget"}));
    }
}
