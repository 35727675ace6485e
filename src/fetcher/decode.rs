//! Charset detection and decoding. News sites still serve a long tail
//! of windows-1255/1256 and other legacy encodings; the extractor only
//! ever sees UTF-8.

use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// Only this much of the body is scanned for a `<meta charset>`.
const META_SCAN_BYTES: usize = 4096;

/// Decode a response body to UTF-8, returning the text and the name of
/// the encoding used. Detection order: Content-Type header charset,
/// `<meta charset>` in the head, chardetng heuristics.
pub fn decode_body(
    content_type: &str,
    body_bytes: &[u8],
) -> Result<(String, &'static str), FetchError> {
    let encoding = detect_encoding(content_type, body_bytes);

    let (decoded, used, had_errors) = encoding.decode(body_bytes);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            used.name()
        )));
    }

    Ok((decoded.into_owned(), used.name()))
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(enc) = label_from_capture(&HEADER_CHARSET, content_type) {
        return enc;
    }

    let head = &body_bytes[..body_bytes.len().min(META_SCAN_BYTES)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(enc) = label_from_capture(&META_CHARSET, &head_str) {
        return enc;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn label_from_capture(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = re.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.trim().as_bytes())
}
