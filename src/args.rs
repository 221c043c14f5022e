//! Typed access to untyped argument maps
//!
//! The host engine hands resolvers a JSON object of already-schema-validated
//! arguments. These accessors extract scalar, object, and array values from
//! that map, falling back to a caller-supplied default when a field is
//! absent, null, or carries the wrong underlying type. They never fail.

use serde_json::Value;

/// An untyped record: named fields, possibly nested.
pub type Record = serde_json::Map<String, Value>;

/// Get a string argument, or `default` if absent or not a string.
pub fn get_string_arg(args: &Record, field: &str, default: &str) -> String {
    match args.get(field) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// Get an integer argument, or `default` if absent or not numeric.
///
/// Floating-point inputs are truncated toward zero; GraphQL transports
/// commonly deliver all numbers as floats.
pub fn get_int_arg(args: &Record, field: &str, default: i64) -> i64 {
    match args.get(field) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        _ => default,
    }
}

/// Get a float argument, or `default` if absent or not numeric.
pub fn get_float_arg(args: &Record, field: &str, default: f64) -> f64 {
    match args.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        _ => default,
    }
}

/// Get a boolean argument, or `default` if absent or not a boolean.
pub fn get_bool_arg(args: &Record, field: &str, default: bool) -> bool {
    match args.get(field) {
        Some(Value::Bool(b)) => *b,
        _ => default,
    }
}

/// Get a nested object argument; absent or mistyped fields yield an
/// empty record.
pub fn get_object_arg(args: &Record, field: &str) -> Record {
    match args.get(field) {
        Some(Value::Object(map)) => map.clone(),
        _ => Record::new(),
    }
}

/// Get an array argument; absent or mistyped fields yield an empty vec.
pub fn get_array_arg(args: &Record, field: &str) -> Vec<Value> {
    match args.get(field) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Get an array-of-objects argument; non-object elements are skipped.
pub fn get_object_array_arg(args: &Record, field: &str) -> Vec<Record> {
    get_array_arg(args, field)
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

/// Get an array-of-strings argument; non-string elements are skipped.
pub fn get_string_array_arg(args: &Record, field: &str) -> Vec<String> {
    get_array_arg(args, field)
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Get an array-of-integers argument; non-numeric elements are skipped.
pub fn get_int_array_arg(args: &Record, field: &str) -> Vec<i64> {
    get_array_arg(args, field)
        .into_iter()
        .filter_map(|item| match item {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_args() -> Record {
        match json!({
            "name": "Ada",
            "limit": 25,
            "ratio": 0.5,
            "active": true,
            "object": {"name": "nested", "age": 7},
            "tags": ["a", "b", 3],
            "numbers": [1, 2.9, "x"],
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_string_arg_present_and_default() {
        let args = sample_args();
        assert_eq!(get_string_arg(&args, "name", "World"), "Ada");
        assert_eq!(get_string_arg(&args, "missing", "World"), "World");
    }

    #[test]
    fn test_wrong_type_falls_back_to_default() {
        let args = sample_args();
        // "limit" is a number, not a string
        assert_eq!(get_string_arg(&args, "limit", ""), "");
        // "name" is a string, not an int
        assert_eq!(get_int_arg(&args, "name", 42), 42);
        assert_eq!(get_bool_arg(&args, "name", false), false);
        assert_eq!(get_float_arg(&args, "active", 1.5), 1.5);
    }

    #[test]
    fn test_int_arg_truncates_floats() {
        let mut args = Record::new();
        args.insert("page".into(), json!(3.9));
        assert_eq!(get_int_arg(&args, "page", 0), 3);
    }

    #[test]
    fn test_null_yields_default() {
        let mut args = Record::new();
        args.insert("limit".into(), Value::Null);
        assert_eq!(get_int_arg(&args, "limit", 10), 10);
    }

    #[test]
    fn test_object_arg() {
        let args = sample_args();
        let obj = get_object_arg(&args, "object");
        assert_eq!(get_string_arg(&obj, "name", ""), "nested");
        assert_eq!(get_int_arg(&obj, "age", 0), 7);
        assert!(get_object_arg(&args, "name").is_empty());
    }

    #[test]
    fn test_typed_array_args_skip_mismatches() {
        let args = sample_args();
        assert_eq!(get_string_array_arg(&args, "tags"), vec!["a", "b"]);
        assert_eq!(get_int_array_arg(&args, "numbers"), vec![1, 2]);
        assert!(get_array_arg(&args, "missing").is_empty());
        assert!(get_object_array_arg(&args, "tags").is_empty());
    }
}
