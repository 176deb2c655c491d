//! Payload codec for embedded assets.
//!
//! Each payload is stored as base64 text (standard alphabet, padded) wrapping a gzip
//! stream. The text may be broken across lines; all ASCII whitespace is ignored.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

/// Why an embedded payload could not be turned back into bytes.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The text is not valid base64.
    #[error("malformed base64 payload")]
    Base64(#[from] base64::DecodeError),

    /// The base64 decoded fine but the bytes are not a complete gzip stream.
    #[error("malformed gzip stream")]
    Gzip(#[from] std::io::Error),
}

/// Decode a base64-wrapped gzip payload into the original bytes.
pub fn decode_payload(text: &str) -> Result<Vec<u8>, DecodeError> {
    let packed: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = STANDARD.decode(packed)?;

    let mut out = Vec::new();
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

/// Encode bytes into the payload format understood by [`decode_payload`].
///
/// Output is a single line of base64 with no line breaks.
pub fn encode_payload(bytes: &[u8]) -> std::io::Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    #[test]
    fn test_decode_wrapped_payload() {
        // gzip of "hello\n", split over lines the way the embedded table stores it
        let text = "\nH4sIAAAAAAAA/8pIzcnJ5wIEAAD//yAwOjYGAAAA\n";
        assert_eq!(decode_payload(text).unwrap(), b"hello\n");
    }

    #[test]
    fn test_encode_then_decode_preserves_bytes() {
        let source = "package main\n\nfunc Solve(cases []string) []string {\n\treturn nil\n}\n";
        let text = encode_payload(source.as_bytes()).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(decode_payload(&text).unwrap(), source.as_bytes());
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_payload("!!not base64!!").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_not_a_gzip_stream() {
        // "hello world" in plain base64, no gzip header
        let err = decode_payload("aGVsbG8gd29ybGQ=").unwrap_err();
        assert!(matches!(err, DecodeError::Gzip(_)));
    }

    #[test]
    fn test_truncated_gzip_stream() {
        let text = encode_payload(&[b'x'; 4096]).unwrap();
        let raw = STANDARD.decode(&text).unwrap();
        let truncated = STANDARD.encode(&raw[..raw.len() / 2]);
        assert!(decode_payload(&truncated).is_err());
    }
}
