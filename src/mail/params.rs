//! Mail link parameters.

use crate::error::{json_kind, HelperError, HelperResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A mail parameter value: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Used verbatim
    Text(String),

    /// Joined with `,`
    List(Vec<String>),
}

impl ParamValue {
    /// The value as it appears in a URI, lists joined with `,`.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::List(items) => Cow::Owned(items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Everything needed to build a `mailto:` link.
///
/// `parameters` holds the extra query fields (subject, cc, bcc, ...) in the
/// order they were added. `param` and `from_json` route `to` and `body` to
/// their own fields; `make_mail_uri` skips them if they appear here anyway.
///
/// # Example
///
/// ```
/// use norm_helpers::mail::MailParams;
///
/// let params = MailParams::new(vec!["a@x.com", "b@x.com"])
///     .param("subject", "Hi")
///     .body("a,b?c");
/// assert_eq!(params.parameters.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailParams {
    /// Recipient address or addresses
    pub to: Option<ParamValue>,

    /// Message body, percent-encoded in the link
    pub body: String,

    /// Extra query parameters, in insertion order
    pub parameters: Vec<(String, ParamValue)>,
}

impl MailParams {
    /// Create parameters addressed to one or more recipients.
    pub fn new(to: impl Into<ParamValue>) -> Self {
        Self {
            to: Some(to.into()),
            ..Default::default()
        }
    }

    /// Set the message body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a query parameter.
    ///
    /// `to` and `body` are routed to their dedicated fields. A key that was
    /// already added keeps its position and takes the new value.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            "to" => self.to = Some(value),
            "body" => self.body = value.joined().into_owned(),
            _ => match self.parameters.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => *existing = value,
                None => self.parameters.push((key, value)),
            },
        }

        self
    }

    /// Build parameters from a JSON object.
    ///
    /// - `to`: a string or array of strings; any other kind means no recipients
    /// - `body`: a string; any other kind means no body
    /// - other fields: strings and arrays of strings become parameters,
    ///   other scalar kinds are skipped
    ///
    /// # Errors
    ///
    /// Returns `HelperError::NotText` when an array holds anything but strings.
    /// Items are not coerced: `["a@x.com", null]` is rejected rather than
    /// joined as `a@x.com,`.
    pub fn from_json(object: &Map<String, Value>) -> HelperResult<Self> {
        let mut params = Self::default();

        for (key, value) in object {
            match key.as_str() {
                "to" => params.to = param_value(value)?,
                "body" => {
                    if let Value::String(body) = value {
                        params.body = body.clone();
                    }
                }
                _ => {
                    if let Some(value) = param_value(value)? {
                        params.parameters.push((key.clone(), value));
                    }
                }
            }
        }

        Ok(params)
    }
}

/// Convert a JSON value into a parameter value, if it is text-like.
fn param_value(value: &Value) -> HelperResult<Option<ParamValue>> {
    match value {
        Value::String(text) => Ok(Some(ParamValue::Text(text.clone()))),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => Ok(text.clone()),
                other => Err(HelperError::NotText {
                    function: "make_mail_uri",
                    found: json_kind(other),
                }),
            })
            .collect::<HelperResult<Vec<String>>>()
            .map(|items| Some(ParamValue::List(items))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_joined() {
        assert_eq!(ParamValue::from("a@x.com").joined(), "a@x.com");
        assert_eq!(
            ParamValue::from(vec!["a@x.com", "b@x.com"]).joined(),
            "a@x.com,b@x.com"
        );
        assert_eq!(ParamValue::List(Vec::new()).joined(), "");
    }

    #[test]
    fn test_param_routes_reserved_keys() {
        let params = MailParams::default()
            .param("to", "a@x.com")
            .param("body", "hello")
            .param("subject", "Hi");

        assert_eq!(params.to, Some(ParamValue::from("a@x.com")));
        assert_eq!(params.body, "hello");
        assert_eq!(
            params.parameters,
            vec![("subject".to_string(), ParamValue::from("Hi"))]
        );
    }

    #[test]
    fn test_param_replaces_in_place() {
        let params = MailParams::new("a@x.com")
            .param("subject", "first")
            .param("cc", "c@x.com")
            .param("subject", "second");

        assert_eq!(params.parameters[0].0, "subject");
        assert_eq!(params.parameters[0].1, ParamValue::from("second"));
        assert_eq!(params.parameters[1].0, "cc");
    }

    #[test]
    fn test_from_json_keeps_field_order() {
        let params = MailParams::from_json(&as_map(json!({
            "to": ["bill@test.com", "jane@test.com"],
            "subject": "Lorem ipsum",
            "cc": "c@test.com",
            "body": "hello",
        })))
        .unwrap();

        assert_eq!(
            params.to,
            Some(ParamValue::from(vec!["bill@test.com", "jane@test.com"]))
        );
        assert_eq!(params.body, "hello");
        let keys: Vec<&str> = params.parameters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["subject", "cc"]);
    }

    #[test]
    fn test_from_json_skips_non_text_values() {
        let params = MailParams::from_json(&as_map(json!({
            "to": 42,
            "body": false,
            "priority": 1,
            "flag": null,
        })))
        .unwrap();

        assert_eq!(params.to, None);
        assert_eq!(params.body, "");
        assert!(params.parameters.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_text_list_items() {
        let err = MailParams::from_json(&as_map(json!({ "to": ["a@x.com", 7] }))).unwrap_err();
        assert_eq!(
            err,
            HelperError::NotText {
                function: "make_mail_uri",
                found: "number",
            }
        );
    }

    #[test]
    fn test_from_json_does_not_coerce_null_list_items() {
        let err = MailParams::from_json(&as_map(json!({ "cc": ["a@x.com", null] }))).unwrap_err();
        assert_eq!(
            err,
            HelperError::NotText {
                function: "make_mail_uri",
                found: "null",
            }
        );
    }

    #[test]
    fn test_param_value_deserializes_untagged() {
        let text: ParamValue = serde_json::from_str("\"a@x.com\"").unwrap();
        assert_eq!(text, ParamValue::from("a@x.com"));

        let list: ParamValue = serde_json::from_str("[\"a@x.com\",\"b@x.com\"]").unwrap();
        assert_eq!(list, ParamValue::from(vec!["a@x.com", "b@x.com"]));
    }
}
