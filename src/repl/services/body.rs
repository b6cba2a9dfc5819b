//! # Response Body Decoding
//!
//! Undoes `Content-Encoding` compression and converts body bytes to text
//! using the charset announced in `Content-Type`.

use crate::error::{CalcError, CalcResult};
use encoding_rs::{Encoding, UTF_8};
use flate2::read::{GzDecoder, ZlibDecoder};
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

/// Encodings we advertise in `Accept-Encoding`
pub const ACCEPTED_ENCODINGS: &str = "gzip, deflate, zstd";

fn charset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)charset\s*=\s*"?([^";\s]+)"?"#).expect("charset pattern is valid")
    })
}

/// Decompress a body according to its `Content-Encoding` header value
pub fn decompress(body: &[u8], content_encoding: Option<&str>) -> CalcResult<Vec<u8>> {
    let encoding = content_encoding
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    let mut decoded = Vec::new();
    match encoding.as_str() {
        "" | "identity" => return Ok(body.to_vec()),
        "gzip" | "x-gzip" => {
            GzDecoder::new(body)
                .read_to_end(&mut decoded)
                .map_err(|e| CalcError::Decode(format!("gzip: {e}")))?;
        }
        "deflate" => {
            ZlibDecoder::new(body)
                .read_to_end(&mut decoded)
                .map_err(|e| CalcError::Decode(format!("deflate: {e}")))?;
        }
        "zstd" => {
            decoded = zstd::stream::decode_all(body)
                .map_err(|e| CalcError::Decode(format!("zstd: {e}")))?;
        }
        other => {
            return Err(CalcError::Decode(format!(
                "unsupported content encoding '{other}'"
            )))
        }
    }

    tracing::debug!(
        "Decompressed {} body: {} -> {} bytes",
        encoding,
        body.len(),
        decoded.len()
    );
    Ok(decoded)
}

/// Decode body bytes to text using the charset from `Content-Type`
///
/// Unknown or missing charsets fall back to UTF-8.
pub fn decode_text(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(|value| charset_pattern().captures(value))
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::warn!("Response body contained invalid {} sequences", used.name());
    }
    text.into_owned()
}
