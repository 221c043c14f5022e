//! Stable, predicate-based filtering over record collections

use crate::args::Record;
use serde_json::Value;

/// Keep records matching `predicate`, preserving relative order.
///
/// Collection entries that are not objects never match.
pub fn filter_records<F>(records: Vec<Value>, predicate: F) -> Vec<Value>
where
    F: Fn(&Record) -> bool,
{
    records
        .into_iter()
        .filter(|record| match record {
            Value::Object(map) => predicate(map),
            _ => false,
        })
        .collect()
}

/// Keep records whose `field` equals `expected`.
pub fn field_equals(records: Vec<Value>, field: &str, expected: &Value) -> Vec<Value> {
    filter_records(records, |record| record.get(field) == Some(expected))
}

/// Keep records whose string-array `field` contains `needle`.
///
/// An empty `needle` disables the filter and passes every record through.
pub fn field_array_contains(records: Vec<Value>, field: &str, needle: &str) -> Vec<Value> {
    if needle.is_empty() {
        return records;
    }
    filter_records(records, |record| {
        matches!(record.get(field), Some(Value::Array(items))
            if items.iter().any(|item| item.as_str() == Some(needle)))
    })
}
