//! Null and absence checks.

use serde_json::{Map, Value};

/// Returns true when the optional is populated.
///
/// Falsy-but-present values such as `0`, `false` and `""` count as values.
pub fn has_value<T>(input: Option<&T>) -> bool {
    input.is_some()
}

/// Returns true unless the JSON value is absent or literal `null`.
pub fn has_json_value(input: Option<&Value>) -> bool {
    !matches!(input, None | Some(Value::Null))
}

/// Returns true when no top-level value of the object is `null`.
///
/// Density is shallow: a nested object holding `null` still counts as a
/// present value at the top level.
///
/// # Example
///
/// ```
/// use norm_helpers::object::object_is_dense;
/// use serde_json::json;
///
/// let dense = json!({ "a": "foo", "b": { "c": null } });
/// assert!(object_is_dense(dense.as_object().unwrap()));
///
/// let sparse = json!({ "a": "foo", "b": null });
/// assert!(!object_is_dense(sparse.as_object().unwrap()));
/// ```
pub fn object_is_dense(object: &Map<String, Value>) -> bool {
    !object.values().any(Value::is_null)
}

/// Returns true when none of the values is `None`.
pub fn values_are_dense<'a, T, I>(values: I) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a Option<T>>,
{
    values.into_iter().all(Option::is_some)
}
