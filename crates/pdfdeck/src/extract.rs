//! Per-page content extraction with item-level failure isolation.
//!
//! Both extractors validate source records once, at this boundary; a
//! bad item becomes a diagnostic and is skipped, never aborting the
//! page. A failure to enumerate a page's content at all is a
//! page-level error and propagates to the driver.

use pdfdeck_core::shadow::{ImageDecision, ImagePlacements, ShadowOptions, plan_page_images};
use pdfdeck_core::{ConvertWarning, DiagnosticSink, Rect, TextBlock, WarningCode, consolidate_block};

use crate::source::{SourceError, SourcePage};

/// An image that survived shadow filtering, with its fetched payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub xref: u32,
    /// First placement rectangle, in source points.
    pub rect: Rect,
    /// Raw encoded bytes.
    pub data: Vec<u8>,
}

/// Extract and consolidate a page's text blocks.
///
/// Blocks with an invalid bounding box are reported to `sink` and
/// skipped; blocks whose trimmed text is empty are silently dropped.
///
/// # Errors
///
/// Propagates a page-level failure from the source.
pub fn extract_text_blocks(
    page: &dyn SourcePage,
    page_index: usize,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<TextBlock>, SourceError> {
    let raw = page.text_blocks()?;
    let mut blocks = Vec::with_capacity(raw.len());

    for (index, block) in raw.iter().enumerate() {
        if !block.bbox.is_well_formed() {
            sink.warn(ConvertWarning::with_element(
                WarningCode::MalformedBlock,
                format!(
                    "invalid bounding box ({}, {}, {}, {})",
                    block.bbox.x0, block.bbox.top, block.bbox.x1, block.bbox.bottom
                ),
                page_index,
                format!("block {index}"),
            ));
            continue;
        }
        if let Some(text_block) = consolidate_block(block) {
            log::debug!(
                "page {}: text block {:?} at ({:.2}, {:.2})",
                page_index + 1,
                text_block.text.chars().take(30).collect::<String>(),
                text_block.bbox.x0,
                text_block.bbox.top
            );
            blocks.push(text_block);
        }
    }

    Ok(blocks)
}

/// Extract a page's images, suppress shadow overlays, and fetch the
/// byte payloads of the survivors.
///
/// Payloads are fetched lazily: a shadow-classified image's bytes are
/// never requested. A fetch failure or an invalid first placement is an
/// item-level diagnostic; the rest of the page proceeds.
///
/// # Errors
///
/// Propagates a page-level failure from the source.
pub fn extract_images(
    page: &dyn SourcePage,
    page_index: usize,
    options: &ShadowOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<PlacedImage>, SourceError> {
    let placements = page.image_placements()?;

    // Validation happens before planning so malformed rectangles never
    // reach the classifier.
    let mut valid: Vec<ImagePlacements> = Vec::with_capacity(placements.len());
    for image in placements {
        match image.rects.first() {
            Some(first) if !first.is_well_formed() => {
                sink.warn(ConvertWarning::with_element(
                    WarningCode::ImageFailed,
                    "invalid placement rectangle",
                    page_index,
                    format!("image xref {}", image.xref),
                ));
            }
            _ => {
                let rects = image
                    .rects
                    .into_iter()
                    .filter(|rect| rect.is_well_formed())
                    .collect();
                valid.push(ImagePlacements {
                    xref: image.xref,
                    rects,
                });
            }
        }
    }

    let mut rendered = Vec::new();
    for decision in plan_page_images(&valid, options) {
        match decision {
            ImageDecision::Render { xref, rect } => match page.image_bytes(xref) {
                Ok(data) => rendered.push(PlacedImage { xref, rect, data }),
                Err(err) => sink.warn(ConvertWarning::with_element(
                    WarningCode::ImageFailed,
                    err.to_string(),
                    page_index,
                    format!("image xref {xref}"),
                )),
            },
            ImageDecision::Shadow { xref, rect } => {
                sink.warn(ConvertWarning::with_element(
                    WarningCode::ShadowSkipped,
                    format!(
                        "duplicate overlay at ({:.1}, {:.1}) suppressed",
                        rect.x0, rect.top
                    ),
                    page_index,
                    format!("image xref {xref}"),
                ));
            }
            ImageDecision::NoPlacement { .. } | ImageDecision::AlreadyRendered { .. } => {}
        }
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{InMemoryImage, InMemoryPage};
    use pdfdeck_core::{RawBlock, RawLine, RawSpan};

    fn span(text: &str) -> RawSpan {
        RawSpan {
            text: text.to_string(),
            size: None,
            font: None,
        }
    }

    fn block(bbox: Rect, text: &str) -> RawBlock {
        RawBlock {
            bbox,
            lines: vec![RawLine {
                spans: vec![span(text)],
            }],
        }
    }

    fn page_with_blocks(blocks: Vec<RawBlock>) -> InMemoryPage {
        InMemoryPage {
            width: 612.0,
            height: 792.0,
            blocks,
            images: vec![],
        }
    }

    fn page_with_images(images: Vec<InMemoryImage>) -> InMemoryPage {
        InMemoryPage {
            width: 612.0,
            height: 792.0,
            blocks: vec![],
            images,
        }
    }

    const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_extract_text_blocks() {
        let page = page_with_blocks(vec![
            block(Rect::new(0.0, 0.0, 100.0, 20.0), "Hello"),
            block(Rect::new(0.0, 30.0, 100.0, 50.0), "World"),
        ]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let blocks = extract_text_blocks(&page, 0, &mut sink).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Hello");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_malformed_block_skipped_others_survive() {
        let page = page_with_blocks(vec![
            block(Rect::new(0.0, 0.0, 100.0, 20.0), "one"),
            block(Rect::new(50.0, 0.0, 10.0, 20.0), "bad"),
            block(Rect::new(0.0, 60.0, 100.0, 80.0), "three"),
        ]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let blocks = extract_text_blocks(&page, 2, &mut sink).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "one");
        assert_eq!(blocks[1].text, "three");
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, WarningCode::MalformedBlock);
        assert_eq!(sink[0].page, Some(2));
        assert_eq!(sink[0].element.as_deref(), Some("block 1"));
    }

    #[test]
    fn test_whitespace_block_dropped_without_warning() {
        let page = page_with_blocks(vec![block(Rect::new(0.0, 0.0, 100.0, 20.0), "   ")]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let blocks = extract_text_blocks(&page, 0, &mut sink).unwrap();
        assert!(blocks.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_extract_images_fetches_surviving_payloads() {
        let page = page_with_images(vec![InMemoryImage {
            xref: 7,
            rects: vec![Rect::new(10.0, 10.0, 110.0, 60.0)],
            data: Some(PNG.to_vec()),
        }]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let images = extract_images(&page, 0, &ShadowOptions::default(), &mut sink).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].xref, 7);
        assert_eq!(images[0].data, PNG.to_vec());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_shadow_image_not_fetched_and_reported() {
        let page = page_with_images(vec![
            InMemoryImage {
                xref: 1,
                rects: vec![Rect::new(5.0, 5.0, 120.0, 70.0)],
                // No payload: a fetch attempt would produce an
                // ImageFailed diagnostic instead of ShadowSkipped
                data: None,
            },
            InMemoryImage {
                xref: 2,
                rects: vec![Rect::new(8.0, 8.0, 116.0, 66.0)],
                data: Some(PNG.to_vec()),
            },
        ]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let images = extract_images(&page, 0, &ShadowOptions::default(), &mut sink).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].xref, 2);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, WarningCode::ShadowSkipped);
    }

    #[test]
    fn test_missing_payload_is_item_level() {
        let page = page_with_images(vec![
            InMemoryImage {
                xref: 1,
                rects: vec![Rect::new(0.0, 0.0, 50.0, 50.0)],
                data: None,
            },
            InMemoryImage {
                xref: 2,
                rects: vec![Rect::new(200.0, 200.0, 250.0, 250.0)],
                data: Some(PNG.to_vec()),
            },
        ]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let images = extract_images(&page, 1, &ShadowOptions::default(), &mut sink).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].xref, 2);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, WarningCode::ImageFailed);
        assert_eq!(sink[0].page, Some(1));
    }

    #[test]
    fn test_invalid_first_placement_is_item_level() {
        let page = page_with_images(vec![InMemoryImage {
            xref: 3,
            rects: vec![Rect::new(100.0, 0.0, 0.0, 50.0)],
            data: Some(PNG.to_vec()),
        }]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let images = extract_images(&page, 0, &ShadowOptions::default(), &mut sink).unwrap();
        assert!(images.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, WarningCode::ImageFailed);
    }

    #[test]
    fn test_image_without_placement_is_not_an_error() {
        let page = page_with_images(vec![InMemoryImage {
            xref: 9,
            rects: vec![],
            data: Some(PNG.to_vec()),
        }]);
        let mut sink: Vec<ConvertWarning> = Vec::new();
        let images = extract_images(&page, 0, &ShadowOptions::default(), &mut sink).unwrap();
        assert!(images.is_empty());
        assert!(sink.is_empty());
    }
}
