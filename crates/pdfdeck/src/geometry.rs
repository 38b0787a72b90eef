//! Deck-wide page geometry.

use pdfdeck_core::units::{pt_to_emu, pt_to_inches};
use pdfdeck_core::PageSize;

use crate::convert::ConvertError;
use crate::source::{SourceDocument, SourceError};

/// The fixed slide geometry for a whole deck.
///
/// Derived once from the first source page, before any page is
/// processed, and applied uniformly; later pages with different
/// dimensions are placed on this canvas unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckGeometry {
    /// First page's size in source points.
    pub page: PageSize,
    /// Slide width in EMUs.
    pub width_emu: i64,
    /// Slide height in EMUs.
    pub height_emu: i64,
}

impl DeckGeometry {
    /// Resolve the deck geometry from a source document.
    ///
    /// # Errors
    ///
    /// A document with no pages, or whose first page reports
    /// non-positive dimensions, is a fatal precondition failure.
    pub fn resolve(source: &dyn SourceDocument) -> Result<Self, ConvertError> {
        if source.page_count() == 0 {
            return Err(ConvertError::EmptyDocument);
        }

        let page = source.page(0)?;
        let size = page.size();
        if !size.is_well_formed() {
            return Err(ConvertError::Source(SourceError::Malformed(format!(
                "page 1 has invalid dimensions {} x {} pt",
                size.width, size.height
            ))));
        }

        log::info!(
            "deck size fixed from page 1: {} x {} pt ({:.2} x {:.2} in)",
            size.width,
            size.height,
            pt_to_inches(size.width),
            pt_to_inches(size.height)
        );

        Ok(Self {
            page: size,
            width_emu: pt_to_emu(size.width),
            height_emu: pt_to_emu(size.height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{InMemoryDocument, InMemoryPage};

    fn doc_with_first_page(width: f64, height: f64) -> InMemoryDocument {
        InMemoryDocument {
            pages: vec![InMemoryPage {
                width,
                height,
                ..InMemoryPage::default()
            }],
        }
    }

    #[test]
    fn test_resolve_us_letter() {
        let doc = doc_with_first_page(612.0, 792.0);
        let geometry = DeckGeometry::resolve(&doc).unwrap();
        assert_eq!(geometry.page, PageSize::new(612.0, 792.0));
        assert_eq!(geometry.width_emu, 7_772_400);
        assert_eq!(geometry.height_emu, 10_058_400);
    }

    #[test]
    fn test_resolve_empty_document_is_fatal() {
        let doc = InMemoryDocument::default();
        assert!(matches!(
            DeckGeometry::resolve(&doc),
            Err(ConvertError::EmptyDocument)
        ));
    }

    #[test]
    fn test_resolve_zero_size_page_is_fatal() {
        let doc = doc_with_first_page(0.0, 792.0);
        assert!(matches!(
            DeckGeometry::resolve(&doc),
            Err(ConvertError::Source(SourceError::Malformed(_)))
        ));
    }

    #[test]
    fn test_geometry_uses_first_page_only() {
        let mut doc = doc_with_first_page(612.0, 792.0);
        doc.pages.push(InMemoryPage {
            width: 842.0,
            height: 595.0,
            ..InMemoryPage::default()
        });
        let geometry = DeckGeometry::resolve(&doc).unwrap();
        assert_eq!(geometry.page, PageSize::new(612.0, 792.0));
    }
}
