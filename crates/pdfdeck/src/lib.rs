//! pdfdeck: Convert paginated documents into editable, layout-preserving
//! slide decks.
//!
//! One source page becomes one slide: text blocks become editable text
//! boxes at the same position, size, and font; raster images become
//! picture shapes at the same position and size; duplicate drop-shadow
//! overlays are detected and suppressed. Each slide ends with a
//! "page N of TOTAL" footer.
//!
//! # Architecture
//!
//! - **pdfdeck-core**: source- and writer-independent data types and the
//!   pure pipeline algorithms (units, text consolidation, shadow filter)
//! - **pdfdeck-pptx**: the PPTX slide canvas and package writer
//! - **pdfdeck** (this crate): the source-document interface, per-page
//!   extraction with failure isolation, slide composition, and the page
//!   pipeline driver
//!
//! # Example
//!
//! ```no_run
//! use pdfdeck::{convert_document, json};
//!
//! let source = json::load_dump("pages.json")?;
//! let report = convert_document(&source, "deck.pptx")?;
//! println!("{} slide(s) written", report.slides_emitted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compose;
pub mod convert;
pub mod extract;
pub mod geometry;
pub mod json;
pub mod source;
pub mod tables;
pub mod worker;

pub use pdfdeck_core::units;
pub use pdfdeck_core::{
    ConvertWarning, FontSpec, ImagePlacements, PageSize, RawBlock, RawLine, RawSpan, Rect,
    ShadowOptions, TextBlock, WarningCode,
};

pub use convert::{ConversionReport, ConvertError, ConvertOptions, Converter, convert_document};
pub use extract::PlacedImage;
pub use geometry::DeckGeometry;
pub use source::{
    InMemoryDocument, InMemoryImage, InMemoryPage, SourceDocument, SourceError, SourcePage,
};
pub use worker::{WorkerOutcome, spawn_conversion};
