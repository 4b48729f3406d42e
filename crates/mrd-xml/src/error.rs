//! Error types for XML header operations.

use thiserror::Error;

/// Errors that can occur when reading or writing an XML header.
///
/// Reading and writing fail fast: the first violation is returned and no
/// partial header or document is produced.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The input text is not well-formed XML.
    #[error("malformed XML header: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The document root is not the expected element.
    #[error("root node 'ismrmrdHeader' not found")]
    MissingRoot,

    /// A mandatory element is absent.
    #[error("{element} not found in {parent}")]
    MissingElement { element: String, parent: String },

    /// A mandatory string element is absent or has zero-length text.
    #[error("mandatory string element '{element}' is missing or empty")]
    EmptyString { element: String },

    /// Element text failed conversion to its scalar type, or an enum token
    /// is outside its closed table.
    #[error("illegal value in element '{element}': '{value}' is not a valid {kind}")]
    InvalidValue {
        element: String,
        value: String,
        kind: &'static str,
    },

    /// The header declares a schema revision this codec does not write.
    #[error("header version {found} does not match schema version {expected}")]
    VersionMismatch { found: i64, expected: i64 },

    /// The header carries no encodings.
    #[error("encoding list is empty, at least one encoding is required")]
    EmptyEncoding,

    /// XML writer failure.
    #[error("writing XML failed: {0}")]
    Write(#[from] quick_xml::Error),

    /// I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized bytes are not valid UTF-8.
    #[error("serialized header is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl HeaderError {
    /// Create a MissingElement error.
    pub fn missing(element: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            parent: parent.into(),
        }
    }

    /// Create an EmptyString error.
    pub fn empty_string(element: impl Into<String>) -> Self {
        Self::EmptyString {
            element: element.into(),
        }
    }

    /// Create an InvalidValue error.
    pub fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        kind: &'static str,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Result type alias for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeaderError::missing("matrixSize", "encodedSpace");
        assert_eq!(format!("{err}"), "matrixSize not found in encodedSpace");

        let err = HeaderError::invalid_value("trajectory", "zigzag", "trajectory type");
        assert_eq!(
            format!("{err}"),
            "illegal value in element 'trajectory': 'zigzag' is not a valid trajectory type"
        );

        let err = HeaderError::VersionMismatch {
            found: 2,
            expected: 3,
        };
        assert_eq!(
            format!("{err}"),
            "header version 2 does not match schema version 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: HeaderError = io_err.into();
        assert!(matches!(err, HeaderError::Io(_)));
    }
}
