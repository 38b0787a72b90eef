//! Raster image format detection for embedded media parts.
//!
//! Picture payloads arrive as opaque encoded bytes; the package needs an
//! extension and content type for each, so the format is sniffed from
//! the magic bytes.

/// Raster format of an embedded picture payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageKind {
    /// Sniff the image format from the payload's magic bytes.
    ///
    /// Returns `None` for payloads that match no supported format.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageKind::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageKind::Jpeg)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageKind::Gif)
        } else if data.starts_with(b"BM") {
            Some(ImageKind::Bmp)
        } else if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            Some(ImageKind::Tiff)
        } else {
            None
        }
    }

    /// File extension used for the media part.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
            ImageKind::Gif => "gif",
            ImageKind::Bmp => "bmp",
            ImageKind::Tiff => "tiff",
        }
    }

    /// MIME content type declared in `[Content_Types].xml`.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::Bmp => "image/bmp",
            ImageKind::Tiff => "image/tiff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(ImageKind::detect(&data), Some(ImageKind::Png));
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(ImageKind::detect(&data), Some(ImageKind::Jpeg));
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(ImageKind::detect(b"GIF89a...."), Some(ImageKind::Gif));
        assert_eq!(ImageKind::detect(b"GIF87a...."), Some(ImageKind::Gif));
    }

    #[test]
    fn test_detect_bmp() {
        assert_eq!(ImageKind::detect(b"BM\x00\x00"), Some(ImageKind::Bmp));
    }

    #[test]
    fn test_detect_tiff_both_endians() {
        assert_eq!(
            ImageKind::detect(&[0x49, 0x49, 0x2A, 0x00]),
            Some(ImageKind::Tiff)
        );
        assert_eq!(
            ImageKind::detect(&[0x4D, 0x4D, 0x00, 0x2A]),
            Some(ImageKind::Tiff)
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(ImageKind::detect(b"not an image"), None);
        assert_eq!(ImageKind::detect(&[]), None);
    }

    #[test]
    fn test_extension_and_content_type() {
        assert_eq!(ImageKind::Png.extension(), "png");
        assert_eq!(ImageKind::Png.content_type(), "image/png");
        assert_eq!(ImageKind::Jpeg.extension(), "jpeg");
        assert_eq!(ImageKind::Jpeg.content_type(), "image/jpeg");
        assert_eq!(ImageKind::Tiff.content_type(), "image/tiff");
    }
}
