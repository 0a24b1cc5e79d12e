//! Text normalization tools.

use crate::error::{json_kind, HelperError, HelperResult};
use crate::text;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for formatting a phone number.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormatPhoneParams {
    /// Phone number text, e.g. "123.456.7890"
    pub phone_number: Value,
}

/// Result of formatting a phone number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatPhoneResponse {
    pub input: String,
    pub formatted: String,
    /// False when the input was returned unchanged
    pub changed: bool,
}

/// Parameters for validating a website.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidateWebsiteParams {
    /// Website address, e.g. "www.example.com"
    #[serde(default)]
    pub website: Option<Value>,
}

/// Result of validating a website.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateWebsiteResponse {
    pub input: String,
    pub valid: bool,
    pub url: Option<String>,
}

/// Parameters for extracting the last URI segment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UriSegmentParams {
    /// URI or path, e.g. "https://example.com/posts/my-post/"
    pub uri: Value,
}

/// Result of extracting the last URI segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UriSegmentResponse {
    pub uri: String,
    pub segment: Option<String>,
}

fn require_text<'a>(function: &'static str, value: &'a Value) -> HelperResult<&'a str> {
    value.as_str().ok_or_else(|| HelperError::NotText {
        function,
        found: json_kind(value),
    })
}

/// Format a phone number.
///
/// # Errors
///
/// Returns `HelperError::NotText` if `phone_number` is not a string.
pub fn format_phone_number(params: &FormatPhoneParams) -> HelperResult<FormatPhoneResponse> {
    let input = require_text("format_phone_number", &params.phone_number)?;
    let formatted = text::format_phone_number(input);
    let changed = formatted != input;

    tracing::debug!(tool = "format_phone_number", changed);

    Ok(FormatPhoneResponse {
        input: input.to_string(),
        formatted,
        changed,
    })
}

/// Validate a website address.
///
/// An invalid address is a successful call with `valid: false`.
///
/// # Errors
///
/// Returns `HelperError::MissingInput` if `website` is absent or null, and
/// `HelperError::NotText` if it is not a string.
pub fn validate_website(params: &ValidateWebsiteParams) -> HelperResult<ValidateWebsiteResponse> {
    let value = match &params.website {
        None | Some(Value::Null) => {
            return Err(HelperError::MissingInput {
                function: "validate_website",
            })
        }
        Some(value) => value,
    };

    let input = require_text("validate_website", value)?;
    let url = text::validate_website(input);

    tracing::debug!(tool = "validate_website", valid = url.is_some());

    Ok(ValidateWebsiteResponse {
        input: input.to_string(),
        valid: url.is_some(),
        url,
    })
}

/// Extract the last meaningful segment of a URI.
///
/// # Errors
///
/// Returns `HelperError::NotText` if `uri` is not a string.
pub fn get_last_uri_segment(params: &UriSegmentParams) -> HelperResult<UriSegmentResponse> {
    let uri = require_text("get_last_uri_segment", &params.uri)?;
    let segment = text::get_last_uri_segment(uri).map(str::to_string);

    tracing::debug!(tool = "get_last_uri_segment", found = segment.is_some());

    Ok(UriSegmentResponse {
        uri: uri.to_string(),
        segment,
    })
}
