//! Website address validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Host-like text with at least one dot and a two-plus character suffix.
static WEBSITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_:/.\-]+\.[A-Za-z0-9_]{2,}/?$")
        .expect("Failed to compile website regex")
});

/// Validate a website address and give it an explicit scheme.
///
/// The input is trimmed, then must consist of word characters, `:`, `/`,
/// `.` and `-`, ending in a dot followed by at least two word characters
/// and an optional single trailing slash. Valid addresses without an
/// `http://` or `https://` prefix get `http://` prepended.
///
/// Returns `None` for anything that does not look like a website. This is
/// a validation result, not an error: callers present their own message.
///
/// # Example
///
/// ```
/// use norm_helpers::text::validate_website;
///
/// assert_eq!(
///     validate_website("www.google.com").as_deref(),
///     Some("http://www.google.com")
/// );
/// assert_eq!(validate_website(".com"), None);
/// ```
pub fn validate_website(website: &str) -> Option<String> {
    let cleaned = website.trim();

    if !WEBSITE_REGEX.is_match(cleaned) {
        tracing::trace!(website = %cleaned, "Rejected website address");
        return None;
    }

    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        Some(cleaned.to_string())
    } else {
        Some(format!("http://{}", cleaned))
    }
}
