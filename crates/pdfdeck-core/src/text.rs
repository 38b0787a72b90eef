//! Text block consolidation.
//!
//! Source pages expose text as blocks of lines of runs (a run is the
//! smallest styled unit: a contiguous span sharing one font and size).
//! Consolidation flattens a block into a single positioned string and
//! infers the block's dominant font from its first styled run.

use crate::geometry::Rect;

/// Font size applied when no run in a block specifies one.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Font family applied when no run in a block specifies one.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// The smallest styled unit of source text.
///
/// `size` and `font` are optional because source loaders do not always
/// report them; missing attributes fall back to block-level defaults.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSpan {
    /// Text content of this run.
    pub text: String,
    /// Font size in points, if the source reports one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Option<f64>,
    /// Font family name, if the source reports one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font: Option<String>,
}

/// An ordered sequence of runs forming one source line.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLine {
    pub spans: Vec<RawSpan>,
}

/// A positioned text block as reported by the source loader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBlock {
    /// Bounding rectangle in source points, taken verbatim.
    pub bbox: Rect,
    pub lines: Vec<RawLine>,
}

/// Inferred dominant font for a consolidated text block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Size in points.
    pub size: f64,
    /// Family name, passed through to the deck writer unmodified.
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// A consolidated, positioned text block ready for slide placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Bounding rectangle in source points.
    pub bbox: Rect,
    /// Lines joined with `\n`, trimmed of leading/trailing whitespace.
    pub text: String,
    pub font: FontSpec,
}

impl TextBlock {
    /// Lines of the consolidated text, in source order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Consolidate one raw block into a [`TextBlock`].
///
/// Text is built by appending every run of every line in order, with a
/// line break after each line, then trimming the result. The font size
/// comes from the first run that specifies one, the family from the
/// first run that specifies one (the two may come from different runs);
/// defaults apply when no run supplies an attribute.
///
/// Returns `None` when the trimmed text is empty: a block with only
/// whitespace runs yields nothing, the same as a block with no lines.
pub fn consolidate_block(block: &RawBlock) -> Option<TextBlock> {
    let mut text = String::new();
    let mut size: Option<f64> = None;
    let mut family: Option<String> = None;

    for line in &block.lines {
        for span in &line.spans {
            text.push_str(&span.text);
            if size.is_none() {
                size = span.size;
            }
            if family.is_none() {
                family = span.font.clone();
            }
        }
        text.push('\n');
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(TextBlock {
        bbox: block.bbox,
        text: trimmed.to_string(),
        font: FontSpec {
            size: size.unwrap_or(DEFAULT_FONT_SIZE),
            family: family.unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        },
    })
}
