//! DICOM pixel data representation primitives.
//!
//! This crate provides the building blocks
//! shared by the pixel data codecs and the representation cache:
//!
//! - the static [transfer syntax descriptors],
//!   identified by a [`TransferSyntaxId`];
//! - the [codec interface] which converts pixel data
//!   between native and encapsulated forms,
//!   together with the payload types it exchanges.
//!
//! Codecs may be provided by other crates
//! and submitted at compile time with [`submit_codec!`]
//! when the `inventory-registry` feature is enabled.
//!
//! [transfer syntax descriptors]: ./transfer_syntax/index.html
//! [codec interface]: ./adapters/index.html

pub mod adapters;
pub mod transfer_syntax;

pub use adapters::{
    CodecFactory, CodecSource, DecodeError, DecodeResult, DynPixelCodec, EncapsulatedPixelData,
    EncodeError, EncodeOptions, EncodeResult, NativePixelData, PixelCodec,
    RepresentationParameter, RepresentationParams,
};
pub use byteordered;
pub use transfer_syntax::{TransferSyntax, TransferSyntaxId};

// re-export crates that are used by codec implementers
#[cfg(feature = "inventory-registry")]
pub use inventory;
pub use snafu;

#[cfg(feature = "inventory-registry")]
#[macro_export]
/// Submit a pixel data codec to be supported by the
/// program's runtime. This is to be used by crates wishing to provide
/// additional support for a certain transfer syntax using the
/// main codec registry.
///
/// The argument is a [`CodecFactory`] constant expression.
///
/// This macro does not actually "run" anything, so place it outside of a
/// function body at the root of the crate.
macro_rules! submit_codec {
    ($factory: expr) => {
        $crate::inventory::submit! {
            $factory
        }
    };
}

#[cfg(not(feature = "inventory-registry"))]
#[macro_export]
/// Submit a pixel data codec to be supported by the
/// program's runtime. This is to be used by crates wishing to provide
/// additional support for a certain transfer syntax using the
/// main codec registry.
///
/// This macro does not actually "run" anything, so place it outside of a
/// function body at the root of the crate.
///
/// Without the `inventory-registry` feature, this request is ignored.
macro_rules! submit_codec {
    ($factory: expr) => {
        // ignore request
    };
}
