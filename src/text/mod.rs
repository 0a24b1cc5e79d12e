//! Text normalization helpers.
//!
//! Pure functions over `&str`: phone number formatting, website address
//! validation and URI segment extraction.

pub mod phone;
pub mod uri;
pub mod website;

pub use phone::format_phone_number;
pub use uri::get_last_uri_segment;
pub use website::validate_website;
