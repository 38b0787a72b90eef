//! A single slide: an insertion-ordered sequence of shapes.

use std::fmt::Write as FmtWrite;

use crate::error::PptxError;
use crate::media::ImageKind;
use crate::shape::{Shape, TextBoxStyle};

/// A slide under construction.
///
/// Shapes render in insertion order; there is no z-order management
/// beyond that sequence.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a text box at the given EMU offsets/extents.
    ///
    /// `lines` become one paragraph each, all sharing `style`.
    pub fn add_text_box(
        &mut self,
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        lines: Vec<String>,
        style: TextBoxStyle,
    ) {
        self.shapes.push(Shape::TextBox {
            x,
            y,
            cx,
            cy,
            lines,
            style,
        });
    }

    /// Add a picture at the given EMU offsets/extents.
    ///
    /// The payload's format is sniffed from its magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PptxError::UnknownImageFormat`] when the payload
    /// matches no supported raster format.
    pub fn add_picture(
        &mut self,
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        data: Vec<u8>,
    ) -> Result<(), PptxError> {
        let kind = ImageKind::detect(&data).ok_or(PptxError::UnknownImageFormat(data.len()))?;
        self.shapes.push(Shape::Picture {
            x,
            y,
            cx,
            cy,
            data,
            kind,
        });
        Ok(())
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Picture payloads in shape order.
    pub(crate) fn pictures(&self) -> impl Iterator<Item = (&[u8], ImageKind)> {
        self.shapes.iter().filter_map(|shape| shape.image())
    }

    /// Generate the slide part XML.
    ///
    /// `picture_rel_ids` supplies one relationship id per picture shape,
    /// in shape order.
    pub(crate) fn to_xml(&self, picture_rel_ids: &[String]) -> Result<String, PptxError> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            "http://schemas.openxmlformats.org/drawingml/2006/main",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
            "http://schemas.openxmlformats.org/presentationml/2006/main"
        )?;
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );

        let mut next_picture = 0usize;
        for (index, shape) in self.shapes.iter().enumerate() {
            // id 1 is the shape tree's own group
            let shape_id = (index + 2) as u32;
            let rel_id = match shape {
                Shape::Picture { .. } => {
                    let rel_id = picture_rel_ids.get(next_picture).ok_or_else(|| {
                        PptxError::Xml(format!("missing relationship id for picture {next_picture}"))
                    })?;
                    next_picture += 1;
                    Some(rel_id.as_str())
                }
                _ => None,
            };
            shape.to_xml(shape_id, rel_id, &mut xml)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
