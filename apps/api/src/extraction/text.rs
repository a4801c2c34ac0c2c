//! Plain-text extraction from an uploaded PDF byte stream.

use tracing::warn;

/// Extracts the text layer of a PDF held in memory.
///
/// Extraction failures (corrupt file, unsupported encoding) are logged and
/// collapsed into an empty string — the rest of the pipeline resolves empty
/// text to its documented sentinel values, so an unreadable upload still
/// produces a stored record instead of a hard error.
pub fn extract_text(pdf_bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(pdf_bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}
