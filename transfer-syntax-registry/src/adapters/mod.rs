//! Root module for built-in pixel data adapters.
//!
//! Additional support for certain transfer syntaxes
//! can be added via Cargo features.
//!
//! - [`uncompressed`](uncompressed) provides
//!   Encapsulated Uncompressed Explicit VR Little Endian
//!   encoding and decoding.
//!   Requires the `uncompressed` feature,
//!   enabled by default.
//!
//! Codecs for compressed transfer syntaxes
//! are expected to be provided by other crates,
//! either registered explicitly
//! or submitted with [`submit_codec!`](dicom_pixrep_encoding::submit_codec).

#[cfg(feature = "uncompressed")]
pub mod uncompressed;

/// **Note:** This module is a stub.
/// Enable the `uncompressed` feature to use this module.
#[cfg(not(feature = "uncompressed"))]
pub mod uncompressed {}
