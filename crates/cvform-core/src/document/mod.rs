//! Loading document text from files.

#[cfg(feature = "pdf")]
mod pdf;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// How a document file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// UTF-8 text (any extension not listed below).
    Text,
    /// PDF with a text layer.
    Pdf,
}

impl DocumentKind {
    /// Determine the document kind from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "doc" | "docx" | "odt" | "rtf" | "png" | "jpg" | "jpeg" | "tiff" | "bmp" => {
                Err(DocumentError::UnsupportedFormat(extension))
            }
            _ => Ok(Self::Text),
        }
    }
}

/// Read a document from disk as text.
pub fn load_document(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path)?;
    let data = fs::read(path)?;

    debug!("Loading {:?} document {} ({} bytes)", kind, path.display(), data.len());

    decode_document(&data, kind)
}

/// Decode document bytes as text.
pub fn decode_document(data: &[u8], kind: DocumentKind) -> Result<String> {
    match kind {
        DocumentKind::Text => String::from_utf8(data.to_vec()).map_err(|_| DocumentError::NotText),
        #[cfg(feature = "pdf")]
        DocumentKind::Pdf => pdf::extract_text(data),
        #[cfg(not(feature = "pdf"))]
        DocumentKind::Pdf => Err(DocumentError::UnsupportedFormat("pdf".to_string())),
    }
}
