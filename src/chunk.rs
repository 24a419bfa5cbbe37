//! Response Chunker Module
//!
//! Splits an answer into size-bounded segments for transports with a
//! per-record byte limit, without ever splitting a multi-byte character
//! across segments.

/// Splits `text` into segments of at most `max_bytes` encoded bytes.
///
/// The input is scanned by character; a character whose UTF-8 bytes would
/// push the current segment over the limit closes that segment and starts
/// the next one. A character's bytes are always kept together, so a single
/// character larger than `max_bytes` yields one oversized segment rather
/// than a truncated character. Empty input yields no segments.
///
/// Concatenating the returned segments reproduces `text` exactly.
pub fn split(text: &str, max_bytes: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();

    for ch in text.chars() {
        if !buf.is_empty() && buf.len() + ch.len_utf8() > max_bytes {
            chunks.push(std::mem::take(&mut buf));
        }
        buf.push(ch);
    }

    if !buf.is_empty() {
        chunks.push(buf);
    }

    chunks
}
