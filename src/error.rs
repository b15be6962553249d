//! Defines [`GeometryError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

use crate::datatypes::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// The column value handed over by the driver was neither text nor bytes.
    #[error("Unsupported input kind: {0}")]
    UnsupportedInputKind(String),

    /// A text column value was not valid hexadecimal.
    #[error("Malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// The byte sequence is not valid EWKB.
    #[error("Malformed EWKB: {0}")]
    MalformedEwkb(String),

    /// The decoded geometry is not the variant the value was declared with.
    #[error("Unexpected geometry type: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Variant the value was declared with
        expected: GeometryKind,
        /// Variant found in the input
        actual: GeometryKind,
    },

    /// The geometry has no coordinates, or a coordinate dimension other than XY.
    #[error("Unsupported layout: {0}")]
    UnsupportedLayout(String),

    /// A geometry kind name that is not one of the seven canonical names.
    #[error("Unknown geometry kind: {0}")]
    UnknownGeometryKind(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [std::fmt::Error]
    #[error(transparent)]
    FmtError(#[from] std::fmt::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
