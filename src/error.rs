//! Error types for the layermake library

use crate::catalog::Slot;
use std::io;
use thiserror::Error;

/// Main error type for layermake operations
#[derive(Debug, Error)]
pub enum LayerMakeError {
    /// IO error while reading the segment catalog
    #[error("catalog IO error: {0}")]
    CatalogIo(#[from] io::Error),

    /// The segment catalog document is malformed
    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    /// A required catalog slot has no entries
    #[error("catalog slot '{0}' has no entries")]
    EmptySlot(Slot),

    /// Layer name collision, in the local table or the host document
    #[error("layer '{0}' already exists")]
    DuplicateName(String),

    /// Update or lookup on a name that is not in the table
    #[error("no layer named '{0}'")]
    LayerNotFound(String),

    /// Selection index outside the catalog slot's entry list
    #[error("no segment at index {index} in slot '{slot}'")]
    SegmentOutOfRange {
        /// The slot that was indexed
        slot: Slot,
        /// The out-of-range index
        index: usize,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for layermake operations
pub type Result<T> = std::result::Result<T, LayerMakeError>;

impl From<String> for LayerMakeError {
    fn from(s: String) -> Self {
        LayerMakeError::Custom(s)
    }
}

impl From<&str> for LayerMakeError {
    fn from(s: &str) -> Self {
        LayerMakeError::Custom(s.to_string())
    }
}

impl From<quick_xml::Error> for LayerMakeError {
    fn from(e: quick_xml::Error) -> Self {
        LayerMakeError::CatalogParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayerMakeError::DuplicateName("E-RDW-LN-CURBZZZZ".to_string());
        assert_eq!(err.to_string(), "layer 'E-RDW-LN-CURBZZZZ' already exists");
    }

    #[test]
    fn test_empty_slot_display() {
        let err = LayerMakeError::EmptySlot(Slot::Category);
        assert!(err.to_string().contains("Category"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = LayerMakeError::SegmentOutOfRange {
            slot: Slot::DataState,
            index: 9,
        };
        assert!(err.to_string().contains("index 9"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LayerMakeError = io_err.into();
        assert!(matches!(err, LayerMakeError::CatalogIo(_)));
    }
}
