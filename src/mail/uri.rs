//! `mailto:` URI construction.

use super::params::{MailParams, ParamValue};

/// Escapes `urlencoding` applies that URI component encoding leaves alone.
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Keys with dedicated fields; never emitted as extra parameters.
const RESERVED_KEYS: [&str; 2] = ["to", "body"];

/// Legacy mis-encoding of the right single quotation mark.
const LEGACY_APOSTROPHE: &str = "%u2019";

/// Percent-encode text as a URI component.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped as UTF-8
/// `%XX` sequences with uppercase hex digits.
pub fn encode_uri_component(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).into_owned();

    for (escape, mark) in UNRESERVED_MARKS {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, mark);
        }
    }

    encoded
}

/// Build a `mailto:` URI.
///
/// Recipients come first, lists joined with `,`. Each non-empty extra
/// parameter is appended as `key=value`, the first after `?` and the rest
/// after `&`. Extra `to` or `body` entries are ignored. Parameter values are
/// NOT percent-encoded, so callers must keep `&`, `?` and `%` out of them. A non-empty body is appended last as
/// `&body=` with its text percent-encoded. Finally every `%u2019` is
/// replaced with an apostrophe.
///
/// # Example
///
/// ```
/// use norm_helpers::mail::{make_mail_uri, MailParams};
///
/// let params = MailParams::new(vec!["a@x.com", "b@x.com"])
///     .param("subject", "Hi")
///     .body("a,b?c");
///
/// assert_eq!(
///     make_mail_uri(&params),
///     "mailto:a@x.com,b@x.com?subject=Hi&body=a%2Cb%3Fc"
/// );
/// ```
pub fn make_mail_uri(params: &MailParams) -> String {
    let recipients = params
        .to
        .as_ref()
        .map(ParamValue::joined)
        .unwrap_or_default();

    let mut uri = format!("mailto:{}", recipients);
    let mut operator = '?';

    for (key, value) in &params.parameters {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }

        let value = value.joined();

        if value.is_empty() {
            continue;
        }

        uri.push(operator);
        uri.push_str(key);
        uri.push('=');
        uri.push_str(&value);
        operator = '&';
    }

    if !params.body.is_empty() {
        uri.push_str("&body=");
        uri.push_str(&encode_uri_component(&params.body));
    }

    uri.replace(LEGACY_APOSTROPHE, "'")
}
