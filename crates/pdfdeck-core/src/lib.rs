//! pdfdeck-core: Source- and writer-independent data types and algorithms.
//!
//! This crate provides the foundational types (Rect, PageSize, RawBlock,
//! TextBlock, FontSpec, ImagePlacements) and the pure algorithms of the
//! layout-reconstruction pipeline: unit conversion, text-block
//! consolidation, and duplicate-overlay ("shadow") image classification.
//! It knows nothing about concrete document loaders or deck writers.

pub mod diag;
pub mod geometry;
pub mod shadow;
pub mod text;
pub mod units;

pub use diag::{ConvertWarning, DiagnosticSink, NullSink, WarningCode};
pub use geometry::{PageSize, Rect};
pub use shadow::{ImageDecision, ImagePlacements, ShadowOptions, is_shadow, plan_page_images};
pub use text::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FontSpec, RawBlock, RawLine, RawSpan, TextBlock,
    consolidate_block,
};
pub use units::{pt_to_emu, pt_to_inches};
