//! Non-fatal diagnostics collected during conversion.
//!
//! Item- and page-level failures never abort a conversion; they are
//! reported as [`ConvertWarning`]s through an injected
//! [`DiagnosticSink`], so callers (and tests) capture them without any
//! global logger state. Fatal, document-level failures use the
//! pipeline's error type instead.

use std::fmt;

/// Machine-readable warning code categorizing a non-fatal issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum WarningCode {
    /// A source text block failed validation and was skipped.
    MalformedBlock,
    /// An image could not be extracted or placed and was skipped.
    ImageFailed,
    /// An image was classified as a duplicate drop-shadow overlay and
    /// deliberately not rendered.
    ShadowSkipped,
    /// A whole page failed and contributed no slide.
    PageFailed,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            WarningCode::MalformedBlock => "MALFORMED_BLOCK",
            WarningCode::ImageFailed => "IMAGE_FAILED",
            WarningCode::ShadowSkipped => "SHADOW_SKIPPED",
            WarningCode::PageFailed => "PAGE_FAILED",
            WarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while converting one item or page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description.
    pub description: String,
    /// Page number where the warning occurred (0-indexed), if known.
    pub page: Option<usize>,
    /// Element context (e.g., "block 2", "image xref 14").
    pub element: Option<String>,
}

impl ConvertWarning {
    /// Create a warning with a code and description, no location.
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            element: None,
        }
    }

    /// Create a warning with page context.
    pub fn on_page(code: WarningCode, description: impl Into<String>, page: usize) -> Self {
        Self {
            code,
            description: description.into(),
            page: Some(page),
            element: None,
        }
    }

    /// Create a warning with page and element context.
    pub fn with_element(
        code: WarningCode,
        description: impl Into<String>,
        page: usize,
        element: impl Into<String>,
    ) -> Self {
        Self {
            code,
            description: description.into(),
            page: Some(page),
            element: Some(element.into()),
        }
    }
}

impl fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref element) = self.element {
            write!(f, " [{element}]")?;
        }
        Ok(())
    }
}

/// Receiver for warnings emitted by the extraction and composition
/// stages.
///
/// Passed into each component instead of a process-wide logger, so the
/// driver decides where diagnostics go and tests can capture them.
pub trait DiagnosticSink {
    fn warn(&mut self, warning: ConvertWarning);
}

impl DiagnosticSink for Vec<ConvertWarning> {
    fn warn(&mut self, warning: ConvertWarning) {
        self.push(warning);
    }
}

/// A sink that discards every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&mut self, _warning: ConvertWarning) {}
}
