//! Text encoding detection for raw CSV bytes.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// CSV text after decoding, with the encoding that produced it.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// Decoded text without any byte order mark.
    pub text: String,
    /// Encoding used to decode the bytes.
    pub encoding: &'static Encoding,
    /// True when malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

impl DecodedText {
    /// WHATWG name of the encoding, e.g. `UTF-8` or `windows-1252`.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// True when the permissive single-byte fallback was used.
    pub fn used_fallback(&self) -> bool {
        self.encoding == WINDOWS_1252
    }
}

/// Decodes raw CSV bytes.
///
/// A UTF-8 or UTF-16 byte order mark selects that encoding. Without a BOM the
/// bytes must be valid UTF-8; otherwise they are decoded as Windows-1252,
/// which maps every byte and therefore never fails.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedText {
            text: text.into_owned(),
            encoding,
            had_errors,
        };
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: text.to_string(),
            encoding: UTF_8,
            had_errors: false,
        },
        Err(_) => {
            let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            DecodedText {
                text: text.into_owned(),
                encoding: WINDOWS_1252,
                had_errors,
            }
        }
    }
}
