//! Error types for the normalization helpers.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The typed helper API cannot fail; these errors describe callers that break a
//! helper's type contract at the dynamic (JSON) boundary, and bad configuration.

use serde_json::Value;
use thiserror::Error;

/// Errors raised when a helper is called with a value of the wrong kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// A text value was required
    #[error("{function}: expected text input, got {found}")]
    NotText {
        function: &'static str,
        found: &'static str,
    },

    /// A required input was not supplied at all
    #[error("{function}: input is required")]
    MissingInput { function: &'static str },

    /// A key/value object was required
    #[error("{function}: expected an object, got {found}")]
    NotAnObject {
        function: &'static str,
        found: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convenience type alias for Results with HelperError
pub type HelperResult<T> = Result<T, HelperError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = HelperError::NotText {
            function: "format_phone_number",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "format_phone_number: expected text input, got number"
        );

        let err = HelperError::MissingInput {
            function: "validate_website",
        };
        assert_eq!(err.to_string(), "validate_website: input is required");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: Cannot be empty");
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }

    #[test]
    fn test_not_an_object_names_the_kind() {
        let err = HelperError::NotAnObject {
            function: "object_is_dense",
            found: "array",
        };
        assert!(err.to_string().contains("object_is_dense"));
        assert!(err.to_string().contains("array"));
    }
}
