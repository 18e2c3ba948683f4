//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::Result;
use crate::error::DocumentError;

/// Extract the text layer of a PDF.
///
/// PDFs encrypted with an empty user password are decrypted first.
pub(super) fn extract_text(data: &[u8]) -> Result<String> {
    let mut doc = Document::load_mem(data).map_err(|e| DocumentError::Pdf(e.to_string()))?;

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(DocumentError::NoPages);
    }

    let text = if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(DocumentError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        // pdf_extract needs the decrypted bytes
        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DocumentError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
        pdf_extract::extract_text_from_mem(&decrypted)
    } else {
        pdf_extract::extract_text_from_mem(data)
    }
    .map_err(|e| DocumentError::Pdf(e.to_string()))?;

    debug!("Extracted {} characters from {} PDF pages", text.len(), page_count);
    Ok(text)
}
