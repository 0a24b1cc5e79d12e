//! Phone number display formatting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator characters stripped before counting digits.
static PHONE_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]").expect("Failed to compile phone separator regex"));

/// Format a 10-digit phone number as `(AAA) BBB-CCCC`.
///
/// Whitespace, hyphens, parentheses and periods are removed first. When
/// exactly ten digits remain they are split into area code, exchange and
/// subscriber number. Any other input is returned unchanged, including
/// seven-digit local numbers and numbers with a country code.
///
/// # Example
///
/// ```
/// use norm_helpers::text::format_phone_number;
///
/// assert_eq!(format_phone_number("123.456.7890"), "(123) 456-7890");
/// assert_eq!(format_phone_number("456-7890"), "456-7890");
/// ```
pub fn format_phone_number(phone_number: &str) -> String {
    let digits = PHONE_SEPARATOR_REGEX.replace_all(phone_number, "");

    if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) {
        return format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
    }

    phone_number.to_string()
}
