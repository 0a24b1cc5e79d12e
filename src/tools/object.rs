//! Structured-data tools.

use crate::error::{json_kind, HelperError, HelperResult};
use crate::object;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for checking object density.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ObjectIsDenseParams {
    /// Object whose top-level values are checked for null
    pub object: Value,
}

/// Result of checking object density.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectIsDenseResponse {
    pub dense: bool,
    /// Top-level keys holding null, in object order
    pub null_keys: Vec<String>,
}

/// Parameters for checking value presence.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HasValueParams {
    /// Any JSON value; absent and null both count as no value
    #[serde(default)]
    pub value: Option<Value>,
}

/// Result of checking value presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HasValueResponse {
    pub has_value: bool,
}

/// Parameters for prefixing object keys.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PrependKeysParams {
    /// Object whose keys are rewritten
    pub object: Value,

    /// Text added in front of every key
    pub prefix: String,
}

/// Result of prefixing object keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrependKeysResponse {
    pub object: Map<String, Value>,
}

fn require_object<'a>(
    function: &'static str,
    value: &'a Value,
) -> HelperResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| HelperError::NotAnObject {
        function,
        found: json_kind(value),
    })
}

/// Check that no top-level value of an object is null.
///
/// # Errors
///
/// Returns `HelperError::NotAnObject` if `object` is not a JSON object.
pub fn object_is_dense(params: &ObjectIsDenseParams) -> HelperResult<ObjectIsDenseResponse> {
    let map = require_object("object_is_dense", &params.object)?;
    let dense = object::object_is_dense(map);
    let null_keys = map
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key.clone())
        .collect();

    tracing::debug!(tool = "object_is_dense", dense, keys = map.len());

    Ok(ObjectIsDenseResponse { dense, null_keys })
}

/// Check that a value is neither absent nor null.
pub fn has_value(params: &HasValueParams) -> HasValueResponse {
    HasValueResponse {
        has_value: object::has_json_value(params.value.as_ref()),
    }
}

/// Prefix every top-level key of an object.
///
/// # Errors
///
/// Returns `HelperError::NotAnObject` if `object` is not a JSON object.
pub fn prepend_to_object_keys(params: &PrependKeysParams) -> HelperResult<PrependKeysResponse> {
    let map = require_object("prepend_to_object_keys", &params.object)?;
    let object: Map<String, Value> = object::prepend_to_object_keys(map, &params.prefix);

    tracing::debug!(tool = "prepend_to_object_keys", keys = object.len());

    Ok(PrependKeysResponse { object })
}
