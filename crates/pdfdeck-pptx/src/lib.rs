//! pdfdeck-pptx: Minimal PPTX writer for layout-preserving decks.
//!
//! Provides a slide canvas that accepts absolutely positioned text
//! boxes and pictures (offsets and extents in EMUs) and serializes the
//! result as a PPTX (OPC zip) package. Formatting beyond per-box font
//! name/size/color lives on a fixed blank master/layout/theme, so the
//! emitted deck is fully editable.
//!
//! ```no_run
//! use pdfdeck_pptx::{Presentation, TextBoxStyle};
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide();
//! slide.add_text_box(914400, 914400, 3657600, 457200,
//!     vec!["Hello".to_string()], TextBoxStyle::default());
//! pres.save("hello.pptx")?;
//! # Ok::<(), pdfdeck_pptx::PptxError>(())
//! ```

mod error;
mod media;
mod package;
mod shape;
mod slide;
mod template;

pub use error::PptxError;
pub use media::ImageKind;
pub use package::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, Presentation};
pub use shape::{TextAlign, TextBoxStyle};
pub use slide::Slide;
