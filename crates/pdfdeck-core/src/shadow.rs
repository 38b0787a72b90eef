//! Duplicate-overlay ("shadow") image detection.
//!
//! Some page generators draw a decorative copy of an image slightly
//! larger than and underneath the original to simulate a drop shadow.
//! Reconstructing such a page verbatim would stack both copies, so the
//! duplicate must be suppressed, while a legitimately overlapping but
//! distinct image (e.g. a thumbnail inside a larger figure) must not be.

use std::collections::HashSet;

use crate::geometry::Rect;

/// Options for shadow classification.
///
/// A rectangle is a shadow of another when they intersect, it is larger
/// than the other by more than `tolerance` but less than `ceiling` in
/// *both* dimensions (strict on both ends), and the intersection covers
/// more than `min_overlap` of its own area.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowOptions {
    /// Minimum size difference (in points) below which two images are
    /// treated as coincidentally similar, not shadow and original.
    /// Default: `2.0`.
    pub tolerance: f64,
    /// Maximum size difference (in points); a much larger image is a
    /// different picture, not a shadow. Default: `20.0`.
    pub ceiling: f64,
    /// Minimum share of the candidate's own area that the intersection
    /// must cover. Default: `0.8`.
    pub min_overlap: f64,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            tolerance: 2.0,
            ceiling: 20.0,
            min_overlap: 0.8,
        }
    }
}

/// One source image's identifier and every rectangle it occupies on the
/// page.
///
/// An image may be referenced from zero, one, or multiple placements;
/// only the first placement is used for classification and rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImagePlacements {
    /// Opaque source identifier for the image's byte payload.
    pub xref: u32,
    /// Placement rectangles in source points, in source order.
    pub rects: Vec<Rect>,
}

/// Outcome of planning one image descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageDecision {
    /// Render the image at its first placement rectangle.
    Render { xref: u32, rect: Rect },
    /// The image duplicates another as a drop-shadow overlay; skip it.
    Shadow { xref: u32, rect: Rect },
    /// The descriptor has no placement on the page; nothing to render.
    NoPlacement { xref: u32 },
    /// A repeated descriptor for an identifier already rendered on this
    /// page.
    AlreadyRendered { xref: u32 },
}

/// Returns whether `rect` is a shadow of any rectangle in `others`.
///
/// The first qualifying rectangle wins; there is no search for a
/// "better" match. Classification is a pure function of the rectangle
/// pair and the options.
pub fn is_shadow(rect: &Rect, others: &[Rect], options: &ShadowOptions) -> bool {
    for other in others {
        if !rect.intersects(other) {
            continue;
        }

        let width_diff = rect.width() - other.width();
        let height_diff = rect.height() - other.height();

        // Slightly larger in both dimensions, strictly inside
        // (tolerance, ceiling)
        if width_diff > options.tolerance
            && height_diff > options.tolerance
            && width_diff < options.ceiling
            && height_diff < options.ceiling
        {
            let overlap_area = match rect.intersection(other) {
                Some(overlap) => overlap.area(),
                None => continue,
            };
            let overlap_ratio = overlap_area / rect.area();

            if overlap_ratio > options.min_overlap {
                return true;
            }
        }
    }

    false
}

/// Plan the rendering of one page's images.
///
/// Step 1 gathers every placement of every descriptor into one flat
/// list; each descriptor remembers the index of its own first placement
/// in that list. Step 2 walks descriptors in order and classifies each
/// against all *other* entries; identity is positional, so two
/// distinct images with identical coordinates still see each other.
///
/// A shadow-classified identifier is not marked rendered; only a
/// successful [`ImageDecision::Render`] suppresses later descriptors
/// for the same identifier.
pub fn plan_page_images(images: &[ImagePlacements], options: &ShadowOptions) -> Vec<ImageDecision> {
    let mut all_rects: Vec<Rect> = Vec::new();
    let mut first_index: Vec<Option<usize>> = Vec::with_capacity(images.len());
    for image in images {
        first_index.push((!image.rects.is_empty()).then_some(all_rects.len()));
        all_rects.extend(image.rects.iter().copied());
    }

    let mut rendered: HashSet<u32> = HashSet::new();
    let mut decisions = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        if rendered.contains(&image.xref) {
            decisions.push(ImageDecision::AlreadyRendered { xref: image.xref });
            continue;
        }

        let own = match first_index[index] {
            Some(own) => own,
            None => {
                decisions.push(ImageDecision::NoPlacement { xref: image.xref });
                continue;
            }
        };
        let rect = all_rects[own];

        let others: Vec<Rect> = all_rects
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != own)
            .map(|(_, r)| *r)
            .collect();

        if is_shadow(&rect, &others, options) {
            decisions.push(ImageDecision::Shadow {
                xref: image.xref,
                rect,
            });
        } else {
            rendered.insert(image.xref);
            decisions.push(ImageDecision::Render {
                xref: image.xref,
                rect,
            });
        }
    }

    decisions
}
