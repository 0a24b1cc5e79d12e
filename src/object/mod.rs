//! Structured-data helpers.
//!
//! Shallow checks and rewrites over key/value mappings. Nullability is
//! explicit: `Option<T>` in typed code, `Value::Null` in JSON.

pub mod keys;
pub mod presence;

pub use keys::prepend_to_object_keys;
pub use presence::{has_json_value, has_value, object_is_dense, values_are_dense};
