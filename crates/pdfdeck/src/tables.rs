//! Table reconstruction extension point.
//!
//! Tables are not reconstructed: their text still arrives on the slide
//! as ordinary positioned text blocks, without cell structure. The
//! analysis entry point is kept as a stable seam so a future detector
//! can slot in without changing callers.

use pdfdeck_core::Rect;

use crate::source::{SourceError, SourcePage};

/// A detected table region on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRegion {
    /// Bounding rectangle in source points.
    pub bbox: Rect,
}

/// Analyze a page for table structure.
///
/// Currently always returns an empty list.
pub fn analyze_tables(page: &dyn SourcePage) -> Result<Vec<TableRegion>, SourceError> {
    let _ = page;
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryPage;

    #[test]
    fn test_analyze_tables_is_a_no_op() {
        let page = InMemoryPage {
            width: 612.0,
            height: 792.0,
            ..InMemoryPage::default()
        };
        assert_eq!(analyze_tables(&page).unwrap(), Vec::new());
    }
}
