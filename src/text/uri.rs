//! URI path segment extraction.

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Get the last meaningful path segment of a URI.
///
/// The input is split on `/`. If the final segment contains a word
/// character (`[A-Za-z0-9_]`) it is returned; otherwise the segment before
/// it is returned. This makes a trailing `/` or `/#` equivalent to no
/// trailing slash. Only one non-word trailing segment is skipped.
///
/// Returns `None` when there is no segment to fall back to (for example an
/// empty string).
///
/// # Example
///
/// ```
/// use norm_helpers::text::get_last_uri_segment;
///
/// assert_eq!(get_last_uri_segment("http://foo.com/foo/boo/#"), Some("boo"));
/// ```
pub fn get_last_uri_segment(uri: &str) -> Option<&str> {
    let mut segments = uri.rsplit('/');
    let last = segments.next()?;

    if last.chars().any(is_word_char) {
        Some(last)
    } else {
        segments.next()
    }
}
