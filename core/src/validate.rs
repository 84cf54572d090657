//! Creation-time checks on a candidate todo.

use serde_json::{Map, Value};

use crate::date::parse_date;
use crate::types::{DATE, IS_COMPLETED, TITLE};

pub const BAD_DATE_FORMAT: &str = "date format should be yyyy-mm-dd";

/// Outcome of `validate`. `Invalid` carries one reason per missing or
/// malformed field, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(Vec<String>),
}

impl Validation {
    /// Human-readable summary, `None` when valid.
    pub fn message(&self) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(reasons) => Some(format!("Missing fields: {}", reasons.join(","))),
        }
    }
}

/// Check `title`, `date` (presence, then format) and `is_completed`.
pub fn validate(candidate: &Map<String, Value>) -> Validation {
    let mut reasons = Vec::new();

    if !is_present(candidate.get(TITLE)) {
        reasons.push(TITLE.to_string());
    }
    if !is_present(candidate.get(DATE)) {
        reasons.push(DATE.to_string());
    }
    if candidate.get(DATE).and_then(parse_date).is_none() {
        reasons.push(BAD_DATE_FORMAT.to_string());
    }
    if !is_present(candidate.get(IS_COMPLETED)) {
        reasons.push(IS_COMPLETED.to_string());
    }

    if reasons.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(reasons)
    }
}

/// Truthiness of a JSON value: absent, `null`, `false`, zero and `""` are
/// falsy, everything else is truthy.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
