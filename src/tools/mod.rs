//! Tool entry points over JSON input.
//!
//! Tool parameters arrive as untyped JSON. This module checks each value
//! against the helper's type contract, raising `HelperError` on violations,
//! and then calls the typed helper. Three categories:
//! - **Text**: phone formatting, website validation, URI segments
//! - **Object**: density, presence and key prefixing
//! - **Mail**: `mailto:` URI construction

pub mod mail;
pub mod object;
pub mod text;

pub use mail::{make_mail_uri, MailUriParams, MailUriResponse};
pub use object::{
    has_value, object_is_dense, prepend_to_object_keys, HasValueParams, HasValueResponse,
    ObjectIsDenseParams, ObjectIsDenseResponse, PrependKeysParams, PrependKeysResponse,
};
pub use text::{
    format_phone_number, get_last_uri_segment, validate_website, FormatPhoneParams,
    FormatPhoneResponse, UriSegmentParams, UriSegmentResponse, ValidateWebsiteParams,
    ValidateWebsiteResponse,
};
