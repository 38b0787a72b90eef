//! JSON source-dump loading.
//!
//! A source dump is the serialized form of [`InMemoryDocument`]: pages
//! with point dimensions, text blocks (bounding box plus lines of
//! runs), and images (xref, placement rectangles, base64 payload). It
//! decouples the front end from any particular document loader: any
//! tool that can emit the shape can feed the converter.

use std::fs;
use std::path::Path;

use crate::source::{InMemoryDocument, SourceError};

/// Load a source dump from a JSON file.
///
/// # Errors
///
/// Returns [`SourceError::Io`] when the file cannot be read and
/// [`SourceError::Malformed`] when it does not parse as a dump. Both
/// are document-level failures.
pub fn load_dump(path: impl AsRef<Path>) -> Result<InMemoryDocument, SourceError> {
    let text = fs::read_to_string(path.as_ref()).map_err(|e| SourceError::Io(e.to_string()))?;
    parse_dump(&text)
}

/// Parse a source dump from a JSON string.
pub fn parse_dump(text: &str) -> Result<InMemoryDocument, SourceError> {
    serde_json::from_str(text).map_err(|e| SourceError::Malformed(e.to_string()))
}
