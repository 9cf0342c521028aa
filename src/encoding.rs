//! Byte-stream decoding for parse sources

use encoding_rs::Encoding;

use crate::error::{DsvError, Result};

/// Resolve an encoding label like `utf-8`, `utf-16le` or `windows-1252`
///
/// Labels are matched per the WHATWG encoding standard, so the usual
/// aliases (`latin1`, `ascii`, ...) work.
///
/// # Errors
///
/// Returns [`DsvError::UnknownEncoding`] when the label does not name a
/// supported encoding.
///
/// # Examples
///
/// ```
/// use dsvtable::encoding::resolve;
///
/// assert_eq!(resolve("utf-8").unwrap().name(), "UTF-8");
/// assert!(resolve("no-such-encoding").is_err());
/// ```
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DsvError::UnknownEncoding(label.to_string()))
}

/// Decode raw bytes into the character stream the tokenizers consume
///
/// A byte-order mark matching the encoding is stripped; bytes that do not
/// form valid sequences decode to replacement characters rather than
/// failing, as the source is still structurally parseable.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DsvError;

    #[test]
    fn test_resolve_common_labels() {
        assert_eq!(resolve("utf-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("UTF-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("utf-16le").unwrap(), encoding_rs::UTF_16LE);
        assert_eq!(resolve("latin1").unwrap(), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_resolve_unknown_label() {
        let err = resolve("klingon").unwrap_err();
        assert!(matches!(err, DsvError::UnknownEncoding(label) if label == "klingon"));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode("a,ö".as_bytes(), encoding_rs::UTF_8), "a,ö");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes: Vec<u8> = "a,b".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode(&bytes, encoding_rs::UTF_16LE), "a,b");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"a,b");
        assert_eq!(decode(&bytes, encoding_rs::UTF_8), "a,b");
    }
}
