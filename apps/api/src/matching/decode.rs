//! Permissive byte-to-text decoding for uploaded files.

/// Decodes bytes as UTF-8, silently dropping undecodable sequences.
///
/// Deliberately NOT `String::from_utf8_lossy`: lossy decoding substitutes
/// U+FFFD for bad bytes, while the upload contract is that they disappear.
/// Extraction from real binary formats (PDF/DOCX) is the uploader's job;
/// this only guarantees that whatever arrives becomes a `String`.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    out.push_str(prefix);
                }
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // error_len() is None only for a truncated tail
                    None => break,
                }
            }
        }
    }
    out
}
