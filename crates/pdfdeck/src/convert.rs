//! The page pipeline driver.
//!
//! Pages are visited one at a time in strictly ascending order; output
//! slide order is guaranteed identical to source page order. Item- and
//! page-level failures are collected as diagnostics; only document-level
//! failures (no pages, source open, deck save) abort the conversion.

use std::path::Path;

use pdfdeck_core::shadow::ShadowOptions;
use pdfdeck_core::{ConvertWarning, DiagnosticSink, TextBlock, WarningCode};
use pdfdeck_pptx::{PptxError, Presentation};
use thiserror::Error;

use crate::compose::compose_slide;
use crate::extract::{PlacedImage, extract_images, extract_text_blocks};
use crate::geometry::DeckGeometry;
use crate::source::{SourceDocument, SourceError};

/// Fatal, document-level conversion failures.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source document contains no pages.
    #[error("document has no pages")]
    EmptyDocument,

    /// The source document could not be opened or read.
    #[error("source document error: {0}")]
    Source(#[from] SourceError),

    /// The output deck could not be written.
    #[error("failed to write deck: {0}")]
    Deck(#[from] PptxError),
}

/// Conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Shadow classification thresholds.
    pub shadow: ShadowOptions,
}

/// Outcome of a successful conversion run.
///
/// "Successful" means the document opened and the deck was written;
/// individual pages or items may still have been skipped, in which case
/// they appear here as diagnostics.
#[derive(Debug)]
pub struct ConversionReport {
    /// Source page count.
    pub page_count: usize,
    /// Slides actually written. Less than `page_count` when whole pages
    /// failed; footers still cite `page_count` as the total.
    pub slides_emitted: usize,
    /// 0-based indices of pages that contributed no slide.
    pub skipped_pages: Vec<usize>,
    /// Accumulated non-fatal diagnostics.
    pub warnings: Vec<ConvertWarning>,
}

impl ConversionReport {
    /// Whether every source page produced a slide.
    pub fn is_complete(&self) -> bool {
        self.skipped_pages.is_empty()
    }
}

/// Sink that forwards diagnostics to the operator log while collecting
/// them for the report.
struct LoggedSink {
    warnings: Vec<ConvertWarning>,
}

impl DiagnosticSink for LoggedSink {
    fn warn(&mut self, warning: ConvertWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// The conversion pipeline.
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert `source` into a deck written at `output`.
    ///
    /// An existing file at `output` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] only for document-level failures; no
    /// partial output is guaranteed to exist in that case.
    pub fn convert(
        &self,
        source: &dyn SourceDocument,
        output: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        // Deck geometry is fixed before any page is processed
        let geometry = DeckGeometry::resolve(source)?;
        let page_count = source.page_count();

        let mut presentation = Presentation::new();
        presentation.set_slide_size(geometry.width_emu, geometry.height_emu);

        let mut sink = LoggedSink {
            warnings: Vec::new(),
        };
        let mut skipped_pages = Vec::new();

        for index in 0..page_count {
            log::info!("processing page {} of {page_count}", index + 1);
            match extract_page(source, index, &geometry, &self.options.shadow, &mut sink) {
                Ok((blocks, images)) => {
                    let slide = presentation.add_slide();
                    compose_slide(
                        slide,
                        &blocks,
                        &images,
                        &geometry,
                        index + 1,
                        page_count,
                        &mut sink,
                    );
                }
                Err(err) => {
                    sink.warn(ConvertWarning::on_page(
                        WarningCode::PageFailed,
                        err.to_string(),
                        index,
                    ));
                    skipped_pages.push(index);
                }
            }
        }

        presentation.save(output)?;

        let report = ConversionReport {
            page_count,
            slides_emitted: presentation.slide_count(),
            skipped_pages,
            warnings: sink.warnings,
        };
        log::info!(
            "conversion complete: {} page(s) -> {} slide(s), {} warning(s)",
            report.page_count,
            report.slides_emitted,
            report.warnings.len()
        );
        Ok(report)
    }
}

/// Convert with default options.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert_document(
    source: &dyn SourceDocument,
    output: impl AsRef<Path>,
) -> Result<ConversionReport, ConvertError> {
    Converter::new(ConvertOptions::default()).convert(source, output.as_ref())
}

/// Run the extraction stages for one page.
///
/// Any error here is a page-level failure: the caller records it and
/// emits no slide for the page.
fn extract_page(
    source: &dyn SourceDocument,
    index: usize,
    geometry: &DeckGeometry,
    shadow: &ShadowOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<(Vec<TextBlock>, Vec<PlacedImage>), SourceError> {
    let page = source.page(index)?;

    let size = page.size();
    if size != geometry.page {
        log::info!(
            "page {} is {} x {} pt; deck canvas stays {} x {} pt",
            index + 1,
            size.width,
            size.height,
            geometry.page.width,
            geometry.page.height
        );
    }

    let blocks = extract_text_blocks(page, index, sink)?;
    let images = extract_images(page, index, shadow, sink)?;
    Ok((blocks, images))
}
