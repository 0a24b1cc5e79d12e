//! norm-helpers - text and structured-data normalization helpers.
//!
//! A set of small, stateless functions for cleaning up user-entered data,
//! plus an MCP server that exposes each of them as a tool.
//!
//! # Architecture
//!
//! - **text**: Phone formatting, website validation, URI segment extraction
//! - **object**: Shallow null checks and key prefixing for key/value maps
//! - **mail**: `mailto:` URI construction
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **tools**: JSON entry points enforcing each helper's type contract
//! - **server**: MCP protocol server

pub mod config;
pub mod error;
pub mod mail;
pub mod object;
pub mod server;
pub mod text;
pub mod tools;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, HelperError, HelperResult};
pub use mail::{make_mail_uri, MailParams, ParamValue};
pub use object::{has_json_value, has_value, object_is_dense, prepend_to_object_keys};
pub use server::NormHelpersServer;
pub use text::{format_phone_number, get_last_uri_segment, validate_website};
