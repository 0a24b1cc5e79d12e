//! Object key rewriting.

/// Build a new mapping whose keys are `prefix + key`.
///
/// Entries keep the input's iteration order (collect into an ordered map
/// such as `serde_json::Map` to preserve it). Values are cloned handles:
/// use `Rc`/`Arc` values to share rather than copy them. The input is not
/// modified.
///
/// # Example
///
/// ```
/// use norm_helpers::object::prepend_to_object_keys;
/// use serde_json::{json, Map, Value};
///
/// let routes = json!({ "home": "/", "about": "/about" });
/// let prefixed: Map<String, Value> =
///     prepend_to_object_keys(routes.as_object().unwrap(), "nav_");
///
/// let keys: Vec<&String> = prefixed.keys().collect();
/// assert_eq!(keys, ["nav_home", "nav_about"]);
/// ```
pub fn prepend_to_object_keys<'a, K, V, I, C>(object: I, prefix: &str) -> C
where
    K: AsRef<str> + 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    C: FromIterator<(String, V)>,
{
    object
        .into_iter()
        .map(|(key, value)| (format!("{}{}", prefix, key.as_ref()), value.clone()))
        .collect()
}
