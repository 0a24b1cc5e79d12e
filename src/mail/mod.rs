//! Mail link helpers.
//!
//! Builds Outlook-friendly `mailto:` URIs from recipients, a body and
//! arbitrary extra query parameters.

pub mod params;
pub mod uri;

pub use params::{MailParams, ParamValue};
pub use uri::{encode_uri_component, make_mail_uri};
