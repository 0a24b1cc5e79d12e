//! Mail link tools.

use crate::error::HelperResult;
use crate::mail::{self, MailParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for building a `mailto:` URI.
///
/// `to` (string or list of strings) and `body` are optional; every other
/// field becomes a query parameter in the order given.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MailUriParams {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Result of building a `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailUriResponse {
    pub uri: String,
}

/// Build a `mailto:` URI.
///
/// # Errors
///
/// Returns `HelperError::NotText` if a list field holds non-string items.
pub fn make_mail_uri(params: &MailUriParams) -> HelperResult<MailUriResponse> {
    let mail_params = MailParams::from_json(&params.fields)?;
    let uri = mail::make_mail_uri(&mail_params);

    tracing::debug!(
        tool = "make_mail_uri",
        parameters = mail_params.parameters.len(),
        body_len = mail_params.body.len()
    );

    Ok(MailUriResponse { uri })
}
