//! Response body decoding.
//!
//! Fetched bodies arrive as bytes. The charset is taken from the
//! `Content-Type` response header when it names one encoding_rs knows, then
//! from a `<meta>` declaration in the first 1024 bytes, and defaults to UTF-8.
//! Decoding is lossy: invalid sequences become U+FFFD.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes of markup examined for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// `charset=...` parameter of a Content-Type value.
#[allow(clippy::expect_used)]
static CHARSET_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("CHARSET_PARAM regex")
});

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = CHARSET_PARAM.captures(content_type)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Encoding declared by a `<meta charset>` or `http-equiv` tag near the top of the markup.
///
/// Both forms carry a `charset=` token inside the tag, so one pattern covers them.
#[must_use]
pub fn sniff_meta_charset(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let label = META_CHARSET.captures(&head)?.get(1)?.as_str().to_string();
    Encoding::for_label(label.as_bytes())
}

/// Pick the body encoding: header charset, then meta charset, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(charset_from_content_type)
        .or_else(|| sniff_meta_charset(html))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use rs_siteprofile::encoding::decode_body;
///
/// let body = decode_body(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(body, "<p>Caf\u{e9}</p>");
/// assert_eq!(decode_body(b"<p>plain</p>", None), "<p>plain</p>");
/// ```
#[must_use]
pub fn decode_body(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
