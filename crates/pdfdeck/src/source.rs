//! Source document interface.
//!
//! The document loader is an external collaborator: anything that can
//! expose per-page text blocks with bounding boxes and font metadata,
//! plus per-image byte payloads with placement rectangles, can drive
//! the pipeline. [`InMemoryDocument`] is the crate's own
//! implementation, used by tests and as the deserialization target of
//! the JSON source dump (see [`crate::json`]).

use pdfdeck_core::{ImagePlacements, PageSize, RawBlock, Rect};
use thiserror::Error;

/// Errors raised by a source-document backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// I/O failure reading source data.
    #[error("I/O error: {0}")]
    Io(String),

    /// The source data is structurally invalid.
    #[error("malformed source document: {0}")]
    Malformed(String),

    /// A page index outside the document.
    #[error("page index {index} out of range (0..{count})")]
    PageOutOfRange { index: usize, count: usize },

    /// No byte payload available for an image identifier.
    #[error("no image data for xref {xref}")]
    MissingImage { xref: u32 },

    /// Any other backend-specific failure.
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

/// One page of a source document.
pub trait SourcePage {
    /// Page dimensions in source points.
    fn size(&self) -> PageSize;

    /// The page's positioned text blocks, in source order.
    ///
    /// # Errors
    ///
    /// An error here is a page-level failure; the whole page is skipped.
    fn text_blocks(&self) -> Result<Vec<RawBlock>, SourceError>;

    /// Every embedded image descriptor with its placement rectangles,
    /// in source order.
    ///
    /// # Errors
    ///
    /// An error here is a page-level failure; the whole page is skipped.
    fn image_placements(&self) -> Result<Vec<ImagePlacements>, SourceError>;

    /// Fetch the raw encoded bytes for an image identifier.
    ///
    /// Called lazily, only for images that survive shadow filtering.
    ///
    /// # Errors
    ///
    /// An error here is an item-level failure; only that image is
    /// skipped.
    fn image_bytes(&self, xref: u32) -> Result<Vec<u8>, SourceError>;
}

/// A paginated source document.
pub trait SourceDocument {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page cannot
    /// be loaded.
    fn page(&self, index: usize) -> Result<&dyn SourcePage, SourceError>;
}

/// An embedded image in an [`InMemoryPage`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InMemoryImage {
    /// Opaque identifier for the image's byte payload.
    pub xref: u32,
    /// Placement rectangles on the page, in source order.
    #[serde(default)]
    pub rects: Vec<Rect>,
    /// Raw encoded bytes; base64 in JSON dumps. `None` models a payload
    /// the loader could not provide.
    #[serde(default, with = "b64")]
    pub data: Option<Vec<u8>>,
}

/// One page of an [`InMemoryDocument`].
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct InMemoryPage {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub images: Vec<InMemoryImage>,
}

/// A fully materialized source document.
///
/// Doubles as the data model of the JSON source dump, so any external
/// tool able to emit that shape can feed the pipeline.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct InMemoryDocument {
    pub pages: Vec<InMemoryPage>,
}

impl SourceDocument for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<&dyn SourcePage, SourceError> {
        self.pages
            .get(index)
            .map(|page| page as &dyn SourcePage)
            .ok_or(SourceError::PageOutOfRange {
                index,
                count: self.pages.len(),
            })
    }
}

impl SourcePage for InMemoryPage {
    fn size(&self) -> PageSize {
        PageSize::new(self.width, self.height)
    }

    fn text_blocks(&self) -> Result<Vec<RawBlock>, SourceError> {
        Ok(self.blocks.clone())
    }

    fn image_placements(&self) -> Result<Vec<ImagePlacements>, SourceError> {
        Ok(self
            .images
            .iter()
            .map(|image| ImagePlacements {
                xref: image.xref,
                rects: image.rects.clone(),
            })
            .collect())
    }

    fn image_bytes(&self, xref: u32) -> Result<Vec<u8>, SourceError> {
        self.images
            .iter()
            .find(|image| image.xref == xref)
            .and_then(|image| image.data.clone())
            .ok_or(SourceError::MissingImage { xref })
    }
}

/// Base64 (de)serialization for optional byte payloads in JSON dumps.
mod b64 {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        data: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match data {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(text) => STANDARD
                .decode(text.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfdeck_core::{RawLine, RawSpan};

    fn one_page_doc() -> InMemoryDocument {
        InMemoryDocument {
            pages: vec![InMemoryPage {
                width: 612.0,
                height: 792.0,
                blocks: vec![RawBlock {
                    bbox: Rect::new(0.0, 0.0, 100.0, 20.0),
                    lines: vec![RawLine {
                        spans: vec![RawSpan {
                            text: "Hello".to_string(),
                            size: Some(14.0),
                            font: Some("Times".to_string()),
                        }],
                    }],
                }],
                images: vec![InMemoryImage {
                    xref: 7,
                    rects: vec![Rect::new(10.0, 10.0, 110.0, 60.0)],
                    data: Some(vec![1, 2, 3]),
                }],
            }],
        }
    }

    #[test]
    fn test_page_count_and_access() {
        let doc = one_page_doc();
        assert_eq!(doc.page_count(), 1);
        let page = doc.page(0).unwrap();
        assert_eq!(page.size(), PageSize::new(612.0, 792.0));
    }

    #[test]
    fn test_page_out_of_range() {
        let doc = one_page_doc();
        assert_eq!(
            doc.page(3).err(),
            Some(SourceError::PageOutOfRange { index: 3, count: 1 })
        );
    }

    #[test]
    fn test_text_blocks_and_placements() {
        let doc = one_page_doc();
        let page = doc.page(0).unwrap();
        assert_eq!(page.text_blocks().unwrap().len(), 1);
        let placements = page.image_placements().unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].xref, 7);
    }

    #[test]
    fn test_image_bytes() {
        let doc = one_page_doc();
        let page = doc.page(0).unwrap();
        assert_eq!(page.image_bytes(7).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_image_bytes() {
        let doc = one_page_doc();
        let page = doc.page(0).unwrap();
        assert_eq!(
            page.image_bytes(99).err(),
            Some(SourceError::MissingImage { xref: 99 })
        );
    }

    #[test]
    fn test_image_without_payload_is_missing() {
        let doc = InMemoryDocument {
            pages: vec![InMemoryPage {
                width: 612.0,
                height: 792.0,
                blocks: vec![],
                images: vec![InMemoryImage {
                    xref: 4,
                    rects: vec![],
                    data: None,
                }],
            }],
        };
        let page = doc.page(0).unwrap();
        assert_eq!(
            page.image_bytes(4).err(),
            Some(SourceError::MissingImage { xref: 4 })
        );
    }

    #[test]
    fn test_source_error_display() {
        assert_eq!(
            SourceError::MissingImage { xref: 5 }.to_string(),
            "no image data for xref 5"
        );
        assert_eq!(
            SourceError::PageOutOfRange { index: 2, count: 1 }.to_string(),
            "page index 2 out of range (0..1)"
        );
    }
}
