use thiserror::Error;

/// Errors raised while assembling or writing a presentation package.
#[derive(Debug, Error)]
pub enum PptxError {
    /// I/O failure creating or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing the OPC zip container.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failure generating part XML.
    #[error("XML generation error: {0}")]
    Xml(String),

    /// Picture data whose format could not be recognized.
    #[error("unrecognized image format ({0} bytes)")]
    UnknownImageFormat(usize),
}

impl From<std::fmt::Error> for PptxError {
    fn from(err: std::fmt::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}
