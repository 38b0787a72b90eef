//! Shapes placed on a slide: text boxes and pictures.

use std::fmt::Write as FmtWrite;

use crate::error::PptxError;
use crate::media::ImageKind;

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    fn attr(&self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
        }
    }
}

/// Run-level styling applied uniformly to a text box.
#[derive(Debug, Clone)]
pub struct TextBoxStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Font family name, passed through unmodified.
    pub font_family: String,
    /// Text color as an RRGGBB hex string.
    pub color: String,
    pub align: TextAlign,
    /// Whether text wraps at the box edge. Disabled for layout-preserving
    /// boxes so long lines keep their source position.
    pub wrap: bool,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "Arial".to_string(),
            color: "000000".to_string(),
            align: TextAlign::Left,
            wrap: true,
        }
    }
}

/// A shape on a slide. Offsets and extents are in EMUs.
#[derive(Debug, Clone)]
pub enum Shape {
    TextBox {
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        /// Paragraphs, one per source line.
        lines: Vec<String>,
        style: TextBoxStyle,
    },
    Picture {
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        data: Vec<u8>,
        kind: ImageKind,
    },
}

impl Shape {
    /// Picture payload and format, if this shape is a picture.
    pub(crate) fn image(&self) -> Option<(&[u8], ImageKind)> {
        match self {
            Shape::Picture { data, kind, .. } => Some((data.as_slice(), *kind)),
            _ => None,
        }
    }

    /// Generate the shape's XML into `xml`.
    ///
    /// Pictures require the relationship id of their media part within
    /// the enclosing slide.
    pub(crate) fn to_xml(
        &self,
        shape_id: u32,
        rel_id: Option<&str>,
        xml: &mut String,
    ) -> Result<(), PptxError> {
        match self {
            Shape::TextBox {
                x,
                y,
                cx,
                cy,
                lines,
                style,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{shape_id}" name="TextBox {shape_id}"/>"#
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{x}" y="{y}"/>"#)?;
                write!(xml, r#"<a:ext cx="{cx}" cy="{cy}"/>"#)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                let wrap = if style.wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{wrap}" rtlCol="0"/>"#)?;
                xml.push_str("<a:lstStyle/>");

                let sz = (style.font_size * 100.0).round() as u32;
                for line in lines {
                    xml.push_str("<a:p>");
                    write!(xml, r#"<a:pPr algn="{}"/>"#, style.align.attr())?;
                    xml.push_str("<a:r>");
                    write!(xml, r#"<a:rPr lang="en-US" sz="{sz}" dirty="0">"#)?;
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        style.color
                    )?;
                    write!(
                        xml,
                        r#"<a:latin typeface="{}"/>"#,
                        escape_xml(&style.font_family)
                    )?;
                    xml.push_str("</a:rPr>");
                    write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                    xml.push_str("</a:r>");
                    xml.push_str("</a:p>");
                }

                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            }
            Shape::Picture {
                x,
                y,
                cx,
                cy,
                data: _,
                kind: _,
            } => {
                let rel_id = rel_id
                    .ok_or_else(|| PptxError::Xml("picture requires a relationship id".into()))?;

                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{shape_id}" name="Picture {shape_id}"/>"#
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{rel_id}"/>"#)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{x}" y="{y}"/>"#)?;
                write!(xml, r#"<a:ext cx="{cx}" cy="{cy}"/>"#)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_box(lines: Vec<&str>, style: TextBoxStyle) -> Shape {
        Shape::TextBox {
            x: 914400,
            y: 457200,
            cx: 1828800,
            cy: 914400,
            lines: lines.into_iter().map(String::from).collect(),
            style,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_text_box_xml() {
        let shape = text_box(
            vec!["Hello"],
            TextBoxStyle {
                font_size: 14.0,
                font_family: "Times".to_string(),
                ..TextBoxStyle::default()
            },
        );
        let mut xml = String::new();
        shape.to_xml(2, None, &mut xml).unwrap();

        assert!(xml.starts_with("<p:sp>"));
        assert!(xml.ends_with("</p:sp>"));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="457200"/>"#));
        assert!(xml.contains(r#"<a:ext cx="1828800" cy="914400"/>"#));
        assert!(xml.contains(r#"sz="1400""#));
        assert!(xml.contains(r#"<a:latin typeface="Times"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert!(xml.contains(r#"<a:srgbClr val="000000"/>"#));
    }

    #[test]
    fn test_text_box_one_paragraph_per_line() {
        let shape = text_box(vec!["first", "second"], TextBoxStyle::default());
        let mut xml = String::new();
        shape.to_xml(2, None, &mut xml).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 2);
        assert!(xml.contains("<a:t>first</a:t>"));
        assert!(xml.contains("<a:t>second</a:t>"));
    }

    #[test]
    fn test_text_box_no_wrap_and_alignment() {
        let shape = text_box(
            vec!["x"],
            TextBoxStyle {
                align: TextAlign::Center,
                wrap: false,
                ..TextBoxStyle::default()
            },
        );
        let mut xml = String::new();
        shape.to_xml(2, None, &mut xml).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
    }

    #[test]
    fn test_text_box_escapes_content() {
        let shape = text_box(vec!["a < b & c"], TextBoxStyle::default());
        let mut xml = String::new();
        shape.to_xml(2, None, &mut xml).unwrap();
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
    }

    #[test]
    fn test_fractional_font_size_rounds_to_hundredths() {
        let shape = text_box(
            vec!["x"],
            TextBoxStyle {
                font_size: 10.5,
                ..TextBoxStyle::default()
            },
        );
        let mut xml = String::new();
        shape.to_xml(2, None, &mut xml).unwrap();
        assert!(xml.contains(r#"sz="1050""#));
    }

    #[test]
    fn test_picture_xml() {
        let shape = Shape::Picture {
            x: 0,
            y: 0,
            cx: 914400,
            cy: 457200,
            data: vec![0xFF, 0xD8, 0xFF],
            kind: ImageKind::Jpeg,
        };
        let mut xml = String::new();
        shape.to_xml(3, Some("rId2"), &mut xml).unwrap();

        assert!(xml.starts_with("<p:pic>"));
        assert!(xml.ends_with("</p:pic>"));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"<a:ext cx="914400" cy="457200"/>"#));
    }

    #[test]
    fn test_picture_without_rel_id_errors() {
        let shape = Shape::Picture {
            x: 0,
            y: 0,
            cx: 1,
            cy: 1,
            data: vec![],
            kind: ImageKind::Png,
        };
        let mut xml = String::new();
        assert!(matches!(
            shape.to_xml(3, None, &mut xml),
            Err(PptxError::Xml(_))
        ));
    }
}
