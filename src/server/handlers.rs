//! MCP tool handlers for the norm-helpers server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::HelperError;
use crate::tools::{
    self, FormatPhoneParams, HasValueParams, MailUriParams, ObjectIsDenseParams,
    PrependKeysParams, UriSegmentParams, ValidateWebsiteParams,
};
use crate::Config;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use std::borrow::Cow;

/// The MCP server that exposes the normalization helpers as tools.
#[derive(Clone)]
pub struct NormHelpersServer {
    pretty_json: bool,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for NormHelpersServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "norm-helpers".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Text and structured-data normalization helpers: phone formatting, website validation, URI segments, object density and key prefixing, and mailto: links.".into()),
        }
    }
}

// Type-contract violations are the caller's fault
fn to_invalid_params(e: HelperError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

impl NormHelpersServer {
    /// Render a tool response as a JSON text block.
    fn render<T: Serialize>(&self, response: &T) -> Result<CallToolResult, McpError> {
        let json = if self.pretty_json {
            serde_json::to_string_pretty(response)
        } else {
            serde_json::to_string(response)
        }
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// Tool router implementation
#[tool_router]
impl NormHelpersServer {
    /// Create a new server from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pretty_json: config.pretty_json,
            tool_router: Self::tool_router(),
        }
    }

    /// Format a 10-digit phone number.
    #[tool(
        description = "Format a 10-digit phone number as (AAA) BBB-CCCC. Spaces, dashes, parentheses and dots are ignored; any other input is returned unchanged."
    )]
    async fn format_phone_number(
        &self,
        params: Parameters<FormatPhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::format_phone_number(&params.0).map_err(|e| {
            tracing::warn!("format_phone_number rejected input: {}", e);
            to_invalid_params(e)
        })?;

        self.render(&response)
    }

    /// Validate a website address.
    #[tool(
        description = "Validate a website address such as www.example.com and return it with an explicit http:// or https:// scheme. Invalid addresses return valid: false."
    )]
    async fn validate_website(
        &self,
        params: Parameters<ValidateWebsiteParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::validate_website(&params.0).map_err(|e| {
            tracing::warn!("validate_website rejected input: {}", e);
            to_invalid_params(e)
        })?;

        self.render(&response)
    }

    /// Get the last path segment of a URI.
    #[tool(
        description = "Get the last path segment of a URI, ignoring a single trailing slash or trailing /#"
    )]
    async fn get_last_uri_segment(
        &self,
        params: Parameters<UriSegmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::get_last_uri_segment(&params.0).map_err(to_invalid_params)?;

        self.render(&response)
    }

    /// Check an object for top-level nulls.
    #[tool(
        description = "Check that no top-level value of an object is null. Nested objects are not inspected."
    )]
    async fn object_is_dense(
        &self,
        params: Parameters<ObjectIsDenseParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::object_is_dense(&params.0).map_err(to_invalid_params)?;

        self.render(&response)
    }

    /// Check that a value is present.
    #[tool(description = "Check that a value is neither absent nor null. 0, false and \"\" count as values.")]
    async fn has_value(
        &self,
        params: Parameters<HasValueParams>,
    ) -> Result<CallToolResult, McpError> {
        self.render(&tools::has_value(&params.0))
    }

    /// Prefix every key of an object.
    #[tool(
        description = "Return a copy of an object with a prefix added to every top-level key, keeping key order and values"
    )]
    async fn prepend_to_object_keys(
        &self,
        params: Parameters<PrependKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::prepend_to_object_keys(&params.0).map_err(to_invalid_params)?;

        self.render(&response)
    }

    /// Build a mailto: link.
    #[tool(
        description = "Build a mailto: URI. 'to' is an address or list of addresses, 'body' is percent-encoded, and every other field (subject, cc, ...) is appended verbatim as a query parameter."
    )]
    async fn make_mail_uri(
        &self,
        params: Parameters<MailUriParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = tools::make_mail_uri(&params.0).map_err(|e| {
            tracing::warn!("make_mail_uri rejected input: {}", e);
            to_invalid_params(e)
        })?;

        self.render(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn server() -> NormHelpersServer {
        NormHelpersServer::new(&Config {
            pretty_json: false,
            ..Config::default()
        })
    }

    // The JSON document carried in the first text block
    fn payload(result: &CallToolResult) -> Value {
        let wire = serde_json::to_value(result).unwrap();
        let text = wire["content"][0]["text"].as_str().unwrap().to_string();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_registers_every_tool() {
        let names: Vec<String> = server()
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        assert_eq!(names.len(), 7);
        for expected in [
            "format_phone_number",
            "validate_website",
            "get_last_uri_segment",
            "object_is_dense",
            "has_value",
            "prepend_to_object_keys",
            "make_mail_uri",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[tokio::test]
    async fn test_format_phone_number_tool() {
        let result = server()
            .format_phone_number(Parameters(FormatPhoneParams {
                phone_number: json!("123 456 7890"),
            }))
            .await
            .unwrap();

        assert_eq!(payload(&result)["formatted"], "(123) 456-7890");
    }

    #[tokio::test]
    async fn test_type_violation_is_invalid_params() {
        let err = server()
            .format_phone_number(Parameters(FormatPhoneParams {
                phone_number: json!(1234567890),
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(err.message.contains("expected text input"));
    }

    #[tokio::test]
    async fn test_invalid_website_is_not_an_error() {
        let result = server()
            .validate_website(Parameters(ValidateWebsiteParams {
                website: Some(json!(" ")),
            }))
            .await
            .unwrap();

        let body = payload(&result);
        assert_eq!(body["valid"], false);
        assert_eq!(body["url"], Value::Null);
    }

    #[tokio::test]
    async fn test_make_mail_uri_tool() {
        let params: MailUriParams = serde_json::from_value(json!({
            "to": "a@x.com",
            "subject": "",
            "body": "",
        }))
        .unwrap();

        let result = server().make_mail_uri(Parameters(params)).await.unwrap();
        assert_eq!(payload(&result)["uri"], "mailto:a@x.com");
    }

    #[tokio::test]
    async fn test_make_mail_uri_mixed_list_is_invalid_params() {
        let params: MailUriParams = serde_json::from_value(json!({
            "to": ["a@x.com", null],
        }))
        .unwrap();

        let err = server()
            .make_mail_uri(Parameters(params))
            .await
            .unwrap_err();

        assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(err.message.contains("expected text input"));
    }

    #[tokio::test]
    async fn test_prepend_keys_tool_keeps_order() {
        let result = server()
            .prepend_to_object_keys(Parameters(PrependKeysParams {
                object: json!({ "b": 1, "a": 2 }),
                prefix: "x_".to_string(),
            }))
            .await
            .unwrap();

        let body = payload(&result);
        let keys: Vec<&String> = body["object"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["x_b", "x_a"]);
    }
}
