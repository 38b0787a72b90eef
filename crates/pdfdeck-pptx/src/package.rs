//! Presentation assembly and OPC package serialization.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PptxError;
use crate::media::ImageKind;
use crate::slide::Slide;
use crate::template;

/// Default slide width: 10 inches (standard 4:3).
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;

/// Default slide height: 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// A presentation under construction.
///
/// Slides are appended in order and serialized to a PPTX (OPC zip)
/// package with [`save`](Presentation::save) or
/// [`write_to`](Presentation::write_to).
#[derive(Debug, Default)]
pub struct Presentation {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
}

impl Presentation {
    /// Create an empty presentation with default 10" x 7.5" slides.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
        }
    }

    /// Set the slide size in EMUs, applied to every slide in the deck.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Append a new blank slide and return it for shape placement.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        self.slides.last_mut().unwrap()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Write the package to a file, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PptxError> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))
    }

    /// Serialize the package into any seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<(), PptxError> {
        log::debug!(
            "writing presentation package: {} slide(s), {}x{} EMU",
            self.slides.len(),
            self.slide_width,
            self.slide_height
        );

        // Media numbering is package-global; relationship ids are
        // slide-local (rId1 is the layout).
        let mut media_parts: Vec<(String, &[u8])> = Vec::new();
        let mut slide_rel_ids: Vec<Vec<String>> = Vec::new();
        let mut slide_rels_xml: Vec<String> = Vec::new();

        for slide in &self.slides {
            let mut rel_ids = Vec::new();
            let mut rels = String::new();
            rels.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
            rels.push_str(
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            );
            rels.push_str(
                r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
            );
            for (data, kind) in slide.pictures() {
                let file_name = format!("image{}.{}", media_parts.len() + 1, kind.extension());
                let rel_id = format!("rId{}", rel_ids.len() + 2);
                write!(
                    rels,
                    r#"<Relationship Id="{rel_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/{file_name}"/>"#
                )?;
                media_parts.push((file_name, data));
                rel_ids.push(rel_id);
            }
            rels.push_str("</Relationships>");
            slide_rel_ids.push(rel_ids);
            slide_rels_xml.push(rels);
        }

        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let put = |zip: &mut ZipWriter<W>, name: &str, content: &[u8]| -> Result<(), PptxError> {
            zip.start_file(name, options)?;
            zip.write_all(content)?;
            Ok(())
        };

        put(&mut zip, "[Content_Types].xml", self.content_types_xml()?.as_bytes())?;
        put(&mut zip, "_rels/.rels", template::ROOT_RELS_XML.as_bytes())?;
        put(&mut zip, "docProps/core.xml", template::CORE_PROPS_XML.as_bytes())?;
        put(&mut zip, "docProps/app.xml", template::APP_PROPS_XML.as_bytes())?;
        put(&mut zip, "ppt/presentation.xml", self.presentation_xml()?.as_bytes())?;
        put(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            self.presentation_rels_xml()?.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            template::SLIDE_MASTER_XML.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            template::SLIDE_MASTER_RELS_XML.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            template::SLIDE_LAYOUT_XML.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            template::SLIDE_LAYOUT_RELS_XML.as_bytes(),
        )?;
        put(&mut zip, "ppt/theme/theme1.xml", template::THEME_XML.as_bytes())?;

        for (index, slide) in self.slides.iter().enumerate() {
            let n = index + 1;
            let slide_xml = slide.to_xml(&slide_rel_ids[index])?;
            put(&mut zip, &format!("ppt/slides/slide{n}.xml"), slide_xml.as_bytes())?;
            put(
                &mut zip,
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                slide_rels_xml[index].as_bytes(),
            )?;
        }

        for (file_name, data) in &media_parts {
            put(&mut zip, &format!("ppt/media/{file_name}"), data)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn content_types_xml(&self) -> Result<String, PptxError> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

        let mut declared: Vec<ImageKind> = Vec::new();
        for slide in &self.slides {
            for (_, kind) in slide.pictures() {
                if !declared.contains(&kind) {
                    declared.push(kind);
                    write!(
                        xml,
                        r#"<Default Extension="{}" ContentType="{}"/>"#,
                        kind.extension(),
                        kind.content_type()
                    )?;
                }
            }
        }

        xml.push_str(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
        );
        xml.push_str(
            r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
        );
        xml.push_str(
            r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
        );
        xml.push_str(
            r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
        );
        for n in 1..=self.slides.len() {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
            )?;
        }
        xml.push_str(
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
        );
        xml.push_str(
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
        );
        xml.push_str("</Types>");
        Ok(xml)
    }

    fn presentation_xml(&self) -> Result<String, PptxError> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for index in 0..self.slides.len() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    256 + index,
                    index + 2
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    fn presentation_rels_xml(&self) -> Result<String, PptxError> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push_str(
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
        );
        for (index, _) in self.slides.iter().enumerate() {
            write!(
                xml,
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                index + 2,
                index + 1
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}
