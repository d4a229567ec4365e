//! Error types of pixel data representation management.

use dicom_pixrep_encoding::adapters::{DecodeError, EncodeError};
use dicom_pixrep_encoding::TransferSyntaxId;
use snafu::Snafu;
use std::collections::TryReserveError;

/// An error occurred while managing
/// the representations of a pixel data element.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Cannot change pixel data representation to {ts}
    CannotChangeRepresentation {
        ts: TransferSyntaxId,
        source: TranscodeError,
    },

    /// No pixel data representation in {ts}
    RepresentationNotFound { ts: TransferSyntaxId },

    /// Illegal call: {reason}
    IllegalCall { reason: &'static str },

    /// Could not allocate memory for pixel data
    MemoryExhausted { source: TryReserveError },

    /// Corrupted pixel data: {reason}
    CorruptedData { reason: String },

    /// Could not read or write pixel data
    Io { source: std::io::Error },
}

/// The reason why a representation could not be produced.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum TranscodeError {
    /// No codec can produce the requested representation
    NoConversionPath,

    /// Could not decode pixel data in {ts}
    Decode {
        ts: TransferSyntaxId,
        source: DecodeError,
    },

    /// Could not encode pixel data into {ts}
    Encode {
        ts: TransferSyntaxId,
        source: EncodeError,
    },
}

impl Error {
    pub(crate) fn no_conversion_path(ts: TransferSyntaxId) -> Self {
        Error::CannotChangeRepresentation {
            ts,
            source: TranscodeError::NoConversionPath,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
