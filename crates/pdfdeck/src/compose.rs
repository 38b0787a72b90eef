//! Slide composition: place extracted content on a blank slide.

use pdfdeck_core::units::{inches_to_emu, pt_to_emu};
use pdfdeck_core::{ConvertWarning, DiagnosticSink, TextBlock, WarningCode};
use pdfdeck_pptx::{Slide, TextAlign, TextBoxStyle};

use crate::extract::PlacedImage;
use crate::geometry::DeckGeometry;

/// Body text color (RRGGBB).
const TEXT_COLOR: &str = "000000";

/// Footer text color (RRGGBB).
const FOOTER_COLOR: &str = "666666";

/// Footer font size in points.
const FOOTER_FONT_SIZE: f64 = 10.0;

/// Footer box height in inches.
const FOOTER_HEIGHT_IN: f64 = 0.5;

/// Compose one slide from a page's surviving content.
///
/// Shape order is fixed: text boxes in source block order, then
/// pictures in source descriptor order, then the page-number footer.
/// `page_number` is 1-indexed; `page_total` is the source document's
/// page count (not the emitted slide count).
pub fn compose_slide(
    slide: &mut Slide,
    blocks: &[TextBlock],
    images: &[PlacedImage],
    geometry: &DeckGeometry,
    page_number: usize,
    page_total: usize,
    sink: &mut dyn DiagnosticSink,
) {
    for block in blocks {
        slide.add_text_box(
            pt_to_emu(block.bbox.x0),
            pt_to_emu(block.bbox.top),
            pt_to_emu(block.bbox.width()),
            pt_to_emu(block.bbox.height()),
            block.lines().map(String::from).collect(),
            TextBoxStyle {
                font_size: block.font.size,
                font_family: block.font.family.clone(),
                color: TEXT_COLOR.to_string(),
                align: TextAlign::Left,
                wrap: false,
            },
        );
    }

    for image in images {
        let result = slide.add_picture(
            pt_to_emu(image.rect.x0),
            pt_to_emu(image.rect.top),
            pt_to_emu(image.rect.width()),
            pt_to_emu(image.rect.height()),
            image.data.clone(),
        );
        if let Err(err) = result {
            sink.warn(ConvertWarning::with_element(
                WarningCode::ImageFailed,
                err.to_string(),
                page_number - 1,
                format!("image xref {}", image.xref),
            ));
        }
    }

    let footer_height = inches_to_emu(FOOTER_HEIGHT_IN);
    slide.add_text_box(
        0,
        geometry.height_emu - footer_height,
        geometry.width_emu,
        footer_height,
        vec![format!("page {page_number} of {page_total}")],
        TextBoxStyle {
            font_size: FOOTER_FONT_SIZE,
            color: FOOTER_COLOR.to_string(),
            align: TextAlign::Center,
            ..TextBoxStyle::default()
        },
    );
}
