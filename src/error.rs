//! Error types.
//!
//! Each layer has its own error enum: [GeometryError] for malformed bit strings
//! and dimensions, [EncodeError] for failures reported by an [Encoder](crate::Encoder).
//! [Error] wraps both so `?` works across the render pipeline.
use thiserror::Error;

use crate::encoder::Symbology;

/// Invalid input passed to the bar compaction.
///
/// Silently skipping bad modules would draw a barcode which looks fine but scans
/// to something else, so every malformed input is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("bit string is empty")]
    Empty,
    #[error("invalid character {character:?} at index {index}, expected '0' or '1'")]
    InvalidCharacter { index: usize, character: char },
    #[error("module width must be positive and finite, got {0}")]
    InvalidModuleWidth(f64),
    #[error("bar height must be positive and finite, got {0}")]
    InvalidBarHeight(f64),
    #[error("surface width must be positive and finite, got {0}")]
    InvalidSurfaceWidth(f64),
}

/// Failure reported by an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The symbology is unknown, or the encoder does not implement it.
    #[error("Invalid barcode format: {name}")]
    InvalidFormat { name: String },
    /// The text can not be represented in the chosen symbology.
    #[error("Invalid barcode for selected format {format}: {reason}")]
    InvalidValue { format: Symbology, reason: String },
}

impl EncodeError {
    pub fn invalid_format(name: impl Into<String>) -> Self {
        Self::InvalidFormat { name: name.into() }
    }

    pub fn invalid_value(format: Symbology, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            format,
            reason: reason.into(),
        }
    }
}

/// Coarse classification of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidValue,
    InvalidInput,
}

/// Any error of the render pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode(EncodeError::InvalidFormat { .. }) => ErrorKind::InvalidFormat,
            Self::Encode(EncodeError::InvalidValue { .. }) => ErrorKind::InvalidValue,
            Self::Geometry(_) => ErrorKind::InvalidInput,
        }
    }
}

#[test]
fn test_kind_classification() {
    let err: Error = EncodeError::invalid_format("QR").into();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    let err: Error = EncodeError::invalid_value(Symbology::Ean13, "checksum").into();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    let err: Error = GeometryError::Empty.into();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_messages() {
    let err = GeometryError::InvalidCharacter {
        index: 2,
        character: '2',
    };
    assert_eq!(
        err.to_string(),
        "invalid character '2' at index 2, expected '0' or '1'"
    );
    let err: Error = EncodeError::invalid_value(Symbology::Upc, "too short").into();
    assert_eq!(
        err.to_string(),
        "Invalid barcode for selected format UPC: too short"
    );
}
