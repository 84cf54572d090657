//! Pagination and ordering for the list operation.
//!
//! # Design
//! `skip` and `limit` keep the loose numeric reading of the records file's
//! original HTTP front end: a present value is coerced to a number (the empty
//! string is `0`, decimals are allowed, garbage is `NaN`) and the page is the
//! slice `[skip, skip + limit)` with script slice rules. A `NaN` bound reads
//! as `0`, fractions truncate, and negative bounds count back from the end.
//! Defaults apply only when a parameter is absent.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::date::parse_date;
use crate::types::Todo;

pub const DEFAULT_SKIP: f64 = 0.0;
pub const DEFAULT_LIMIT: f64 = 10.0;

/// Options for listing records: the slice `[skip, skip + limit)` of the full
/// sequence, optionally sorted by date afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListQuery {
    pub skip: f64,
    pub limit: f64,
    pub sort: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
            sort: false,
        }
    }
}

impl ListQuery {
    /// An unsorted page of `limit` records starting at `skip`.
    pub fn page(skip: usize, limit: usize) -> Self {
        Self {
            skip: skip as f64,
            limit: limit as f64,
            sort: false,
        }
    }

    pub fn sorted(self) -> Self {
        Self { sort: true, ..self }
    }

    /// Build from raw query-string parameters. `sort` is enabled only by the
    /// literal `"true"`.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let number = |key: &str, default: f64| params.get(key).map_or(default, |raw| to_number(raw));

        Self {
            skip: number("skip", DEFAULT_SKIP),
            limit: number("limit", DEFAULT_LIMIT),
            sort: params.get("sort").is_some_and(|s| s == "true"),
        }
    }

    /// Cut the page out of `records` and sort it if requested. Only the page
    /// is sorted, never the full sequence.
    pub fn apply(&self, mut records: Vec<Todo>) -> Vec<Todo> {
        let len = records.len();
        let start = slice_index(self.skip, len);
        let end = slice_index(self.skip + self.limit, len);
        if end <= start {
            return Vec::new();
        }
        let mut page: Vec<Todo> = records.drain(start..end).collect();

        if self.sort {
            page.sort_by(compare_dates);
        }
        page
    }
}

/// Numeric reading of a query value. Whitespace is trimmed, the empty string
/// is zero, `0x`/`0o`/`0b` integers and `Infinity` are accepted, anything
/// else that is not a decimal number is `NaN`.
fn to_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings; restrict to decimal syntax.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Resolve a relative slice bound against `len`.
fn slice_index(bound: f64, len: usize) -> usize {
    let len_f = len as f64;
    let bound = if bound.is_nan() { 0.0 } else { bound.trunc() };
    let resolved = if bound < 0.0 {
        (len_f + bound).max(0.0)
    } else {
        bound.min(len_f)
    };
    resolved as usize
}

/// Ascending by parsed date; records without a parseable date go last.
fn compare_dates(a: &Todo, b: &Todo) -> Ordering {
    let key = |t: &Todo| t.date().and_then(parse_date);
    match (key(a), key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> Vec<Todo> {
        (0..n)
            .map(|i| serde_json::from_value(json!({"id": i.to_string()})).unwrap())
            .collect()
    }

    fn ids(page: &[Todo]) -> Vec<&str> {
        page.iter().filter_map(Todo::id).collect()
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn page_of(pairs: &[(&str, &str)], n: usize) -> Vec<Todo> {
        ListQuery::from_params(&params(pairs)).apply(records(n))
    }

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(ListQuery::from_params(&HashMap::new()), ListQuery::default());
        assert_eq!(page_of(&[], 12).len(), 10);
    }

    #[test]
    fn parses_numbers_and_sort_flag() {
        let q = ListQuery::from_params(&params(&[("skip", " 3 "), ("limit", "4"), ("sort", "true")]));
        assert_eq!(q, ListQuery::page(3, 4).sorted());
    }

    #[test]
    fn only_literal_true_enables_sort() {
        for raw in ["TRUE", "1", "yes", ""] {
            assert!(!ListQuery::from_params(&params(&[("sort", raw)])).sort);
        }
    }

    #[test]
    fn unparseable_limit_gives_empty_page() {
        assert!(page_of(&[("limit", "abc")], 12).is_empty());
    }

    #[test]
    fn empty_limit_is_zero() {
        assert_eq!(ListQuery::from_params(&params(&[("limit", "")])).limit, 0.0);
        assert!(page_of(&[("limit", "")], 12).is_empty());
    }

    #[test]
    fn unparseable_skip_gives_empty_page() {
        assert!(page_of(&[("skip", "abc")], 12).is_empty());
    }

    #[test]
    fn decimal_limit_truncates() {
        assert_eq!(ids(&page_of(&[("limit", "2.5")], 12)), ["0", "1"]);
        assert_eq!(ids(&page_of(&[("skip", "1.9"), ("limit", "2")], 12)), ["1", "2"]);
    }

    #[test]
    fn number_coercion() {
        assert_eq!(to_number(" 7 "), 7.0);
        assert_eq!(to_number("1e1"), 10.0);
        assert_eq!(to_number("0x10"), 16.0);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert!(to_number("inf").is_nan());
        assert!(to_number("NaN").is_nan());
        assert!(to_number("12px").is_nan());
    }

    #[test]
    fn negative_skip_counts_from_end() {
        // skip=-2, limit=10 is the slice [-2, 8) of 12 records: empty.
        assert!(page_of(&[("skip", "-2")], 12).is_empty());
        // skip=-2, limit=20 is [-2, 18): the last two.
        assert_eq!(ids(&page_of(&[("skip", "-2"), ("limit", "20")], 12)), ["10", "11"]);
    }

    #[test]
    fn infinite_limit_takes_the_rest() {
        assert_eq!(page_of(&[("skip", "1"), ("limit", "Infinity")], 3).len(), 2);
    }

    #[test]
    fn second_page_of_fifteen() {
        let q = ListQuery::page(10, 10);
        assert_eq!(ids(&q.apply(records(15))), ["10", "11", "12", "13", "14"]);
    }

    #[test]
    fn skip_past_end_is_empty() {
        assert!(ListQuery::page(50, 10).apply(records(3)).is_empty());
    }

    #[test]
    fn huge_limit_does_not_overflow() {
        assert_eq!(ListQuery::page(1, usize::MAX).apply(records(3)).len(), 2);
    }

    #[test]
    fn sort_applies_to_page_only() {
        let all: Vec<Todo> = ["2024-03-01", "2024-01-01", "2024-02-01", "2023-01-01"]
            .iter()
            .enumerate()
            .map(|(i, d)| serde_json::from_value(json!({"id": i.to_string(), "date": d})).unwrap())
            .collect();
        let q = ListQuery::page(0, 3).sorted();
        assert_eq!(ids(&q.apply(all)), ["1", "2", "0"]);
    }

    #[test]
    fn undated_records_sort_last_and_stay_stable() {
        let all: Vec<Todo> = [json!("x"), json!("2024-02-01"), json!(null), json!("2024-01-01")]
            .into_iter()
            .enumerate()
            .map(|(i, d)| serde_json::from_value(json!({"id": i.to_string(), "date": d})).unwrap())
            .collect();
        let q = ListQuery::page(0, 10).sorted();
        assert_eq!(ids(&q.apply(all)), ["3", "1", "0", "2"]);
    }
}
