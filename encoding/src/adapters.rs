//! Core module for building pixel data codecs.
//!
//! This module contains the core types and traits
//! for consumers and implementers of
//! codecs between native and encapsulated pixel data.
//!
//! A codec implements [`PixelCodec`],
//! declaring which conversions it supports
//! through [`PixelCodec::can_change_coding`].
//! All codecs exchange native pixel data
//! in the _native pivot_ encoding
//! (Explicit VR Little Endian, see [`TransferSyntaxId::NATIVE_PIVOT`]),
//! and encapsulated pixel data as a sequence of byte fragments.
//!
//! Codecs may be configured per representation
//! by a [`RepresentationParameter`],
//! an opaque value defined by the codec (such as a quality factor).
//! Any type which is `Debug + PartialEq + Send + Sync + 'static`
//! can serve as one.

use crate::transfer_syntax::TransferSyntaxId;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicom_core::value::PixelFragmentSequence;
use dicom_core::VR;
use snafu::Snafu;
use std::any::Any;
use std::collections::TryReserveError;
use std::fmt;
use std::sync::Arc;

/// The possible error conditions when decoding pixel data
/// into its native form.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
///
/// Implementers of codecs
/// are recommended to choose the most fitting error variant
/// for the tested condition.
/// When no suitable variant is available,
/// the [`Custom`](DecodeError::Custom) variant may be used.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum DecodeError {
    /// A custom error occurred when decoding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The codec does not decode pixel data in this transfer syntax.
    #[snafu(display("Unsupported transfer syntax {}", ts))]
    UnsupportedTransferSyntax { ts: TransferSyntaxId },

    /// The given representation parameters are not understood by this codec.
    InvalidParameters,
}

/// The possible error conditions when encoding pixel data
/// into an encapsulated form.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum EncodeError {
    /// A custom error when encoding fails.
    /// Read the `message` and the underlying `source`
    /// for more details.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The source is neither native
    /// nor in an encapsulated form this codec can transcode from.
    #[snafu(display("Cannot encode from transfer syntax {}", ts))]
    NotNative { ts: TransferSyntaxId },

    /// The given representation parameters are not understood by this codec.
    InvalidParameters,
}

/// The result of decoding pixel data
pub type DecodeResult<T, E = DecodeError> = Result<T, E>;

/// The result of encoding pixel data
pub type EncodeResult<T, E = EncodeError> = Result<T, E>;

/// Encapsulated pixel data:
/// a basic offset table and a sequence of byte fragments.
pub type EncapsulatedPixelData = PixelFragmentSequence<Vec<u8>>;

/// An opaque, codec-defined, value-comparable configuration
/// of an encapsulated representation.
///
/// This trait is implemented automatically
/// for every `Debug + PartialEq + Send + Sync + 'static` type.
/// Two parameters compare equal
/// only if they are of the same concrete type and equal by value.
pub trait RepresentationParameter: fmt::Debug + Send + Sync + 'static {
    /// Obtain this parameter as a dynamically typed value,
    /// for codecs to downcast into their own parameter type.
    fn as_any(&self) -> &dyn Any;

    /// Compare this parameter with another, possibly of a different type.
    fn dyn_eq(&self, other: &dyn RepresentationParameter) -> bool;
}

impl<T> RepresentationParameter for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn RepresentationParameter) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// A shared, immutable representation parameter.
pub type RepresentationParams = Arc<dyn RepresentationParameter>;

/// Compare two optional representation parameters:
/// they are equal if both are absent or both are present and equal.
pub fn params_eq(
    a: Option<&dyn RepresentationParameter>,
    b: Option<&dyn RepresentationParameter>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.dyn_eq(b),
        _ => false,
    }
}

/// Custom options when encoding pixel data into an encapsulated form.
///
/// This is a general purpose representation parameter
/// which codecs are free to adopt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct EncodeOptions {
    /// The quality of the output image as a number between 0 and 100,
    /// where 100 is the best quality that the encapsulated form can achieve
    /// and smaller values represent smaller data size
    /// with an increasingly higher error.
    /// It is ignored if the transfer syntax only supports lossless compression.
    ///
    /// If this option is not specified,
    /// the output quality is decided automatically by the underlying codec.
    pub quality: Option<u8>,

    /// The amount of effort that the encoder may take to encode the pixel data,
    /// as a number between 0 and 100.
    /// Encoders are not required to support this option.
    pub effort: Option<u8>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output quality.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.min(100));
        self
    }

    /// Set the encoding effort.
    pub fn effort(mut self, effort: u8) -> Self {
        self.effort = Some(effort.min(100));
        self
    }
}

/// Native (unencapsulated) pixel data,
/// in the byte order of the native pivot encoding (little endian).
#[derive(Debug, Clone, PartialEq)]
pub struct NativePixelData {
    vr: VR,
    data: Vec<u8>,
}

impl NativePixelData {
    /// Create native pixel data from raw bytes and a value representation
    /// (usually `OB` or `OW`).
    pub fn new(vr: VR, data: Vec<u8>) -> Self {
        NativePixelData { vr, data }
    }

    /// Create native pixel data of 8-bit samples (`OB`).
    pub fn from_bytes(data: Vec<u8>) -> Self {
        NativePixelData { vr: VR::OB, data }
    }

    /// Create native pixel data of 16-bit words (`OW`).
    pub fn from_words(words: &[u16]) -> Self {
        let mut data = vec![0; words.len() * 2];
        LittleEndian::write_u16_into(words, &mut data);
        NativePixelData { vr: VR::OW, data }
    }

    /// An empty buffer with the given value representation.
    pub fn empty(vr: VR) -> Self {
        NativePixelData {
            vr,
            data: Vec::new(),
        }
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn set_vr(&mut self, vr: VR) {
        self.vr = vr;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Interpret the data as 16-bit little endian words.
    /// A trailing odd byte is ignored.
    pub fn to_words(&self) -> Vec<u16> {
        let mut words = vec![0; self.data.len() / 2];
        LittleEndian::read_u16_into(&self.data[..words.len() * 2], &mut words);
        words
    }

    /// Append bytes to the buffer,
    /// failing without changes if memory cannot be reserved.
    pub fn try_extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), TryReserveError> {
        self.data.try_reserve(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Reserve capacity for at least `additional` more bytes.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }
}

/// The source of an encoding operation.
#[derive(Debug, Copy, Clone)]
pub enum CodecSource<'a> {
    /// Native pixel data in the native pivot encoding.
    Native(&'a NativePixelData),
    /// Pixel data in another encapsulated transfer syntax,
    /// to be transcoded directly.
    Encapsulated {
        /// The transfer syntax of the source.
        ts: TransferSyntaxId,
        /// The representation parameters of the source, if any.
        params: Option<&'a dyn RepresentationParameter>,
        /// The encapsulated pixel data.
        pixels: &'a EncapsulatedPixelData,
    },
}

impl CodecSource<'_> {
    /// The transfer syntax of the source.
    pub fn transfer_syntax(&self) -> TransferSyntaxId {
        match self {
            CodecSource::Native(_) => TransferSyntaxId::NATIVE_PIVOT,
            CodecSource::Encapsulated { ts, .. } => *ts,
        }
    }
}

/// Trait object responsible for converting pixel data
/// between the native pivot encoding and one encapsulated transfer syntax
/// (or between two encapsulated transfer syntaxes).
///
/// Implementations must be free of interior mutability
/// observable through these methods:
/// codecs are shared by the whole process.
pub trait PixelCodec: fmt::Debug + Send + Sync {
    /// Check whether this codec is able to convert pixel data
    /// from the transfer syntax `from` to the transfer syntax `to`.
    ///
    /// This must be a pure predicate:
    /// decisions on whether a conversion is possible
    /// are made on this answer alone.
    fn can_change_coding(&self, from: TransferSyntaxId, to: TransferSyntaxId) -> bool;

    /// Decode encapsulated pixel data into native pixel data
    /// in the native pivot encoding.
    ///
    /// `params` are the representation parameters of the source, if any.
    fn decode(
        &self,
        params: Option<&dyn RepresentationParameter>,
        src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData>;

    /// Encode pixel data into the encapsulated form of this codec,
    /// using the given representation parameters.
    ///
    /// All implementations are required to support
    /// encoding from native pixel data
    /// when `can_change_coding(NATIVE_PIVOT, ...)` holds.
    /// If the source is encapsulated
    /// and this codec cannot transcode from its transfer syntax,
    /// a `NotNative` error is returned instead.
    fn encode(
        &self,
        src: CodecSource<'_>,
        params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData>;
}

/// Alias type for a dynamically dispatched, shared pixel codec.
pub type DynPixelCodec = Arc<dyn PixelCodec>;

/// A statically declared codec provider,
/// to be collected by the codec registry at start-up.
///
/// See [`submit_codec!`](crate::submit_codec).
#[derive(Debug, Copy, Clone)]
pub struct CodecFactory {
    /// The transfer syntax handled by the codec.
    pub ts: TransferSyntaxId,
    /// Function creating the codec.
    pub codec: fn() -> DynPixelCodec,
    /// Function creating the default representation parameters, if any.
    pub default_params: fn() -> Option<RepresentationParams>,
}

impl CodecFactory {
    pub const fn new(
        ts: TransferSyntaxId,
        codec: fn() -> DynPixelCodec,
        default_params: fn() -> Option<RepresentationParams>,
    ) -> Self {
        CodecFactory {
            ts,
            codec,
            default_params,
        }
    }
}

#[cfg(feature = "inventory-registry")]
// Collect codec providers from other crates.
inventory::collect!(CodecFactory);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Quality(u8);

    #[test]
    fn parameters_compare_by_type_and_value() {
        let a: RepresentationParams = Arc::new(Quality(90));
        let b: RepresentationParams = Arc::new(Quality(90));
        let c: RepresentationParams = Arc::new(Quality(50));
        let d: RepresentationParams = Arc::new(EncodeOptions::new().quality(90));

        assert!(params_eq(Some(&*a), Some(&*b)));
        assert!(!params_eq(Some(&*a), Some(&*c)));
        assert!(!params_eq(Some(&*a), Some(&*d)));
        assert!(!params_eq(Some(&*a), None));
        assert!(params_eq(None, None));
    }

    #[test]
    fn native_words_are_little_endian() {
        let native = NativePixelData::from_words(&[0x0102, 0x0304]);
        assert_eq!(native.vr(), VR::OW);
        assert_eq!(native.data(), &[0x02, 0x01, 0x04, 0x03]);
        assert_eq!(native.to_words(), vec![0x0102, 0x0304]);
    }

    #[test]
    fn encode_options_are_clamped() {
        let options = EncodeOptions::new().quality(120).effort(30);
        assert_eq!(options.quality, Some(100));
        assert_eq!(options.effort, Some(30));
    }
}
