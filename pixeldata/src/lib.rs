//! This crate manages the representations of DICOM pixel data.
//!
//! A single pixel data element may hold its pixel data
//! in several encapsulated forms (JPEG, RLE, JPEG 2000, ...)
//! plus at most one native (unencapsulated) form.
//! The [`PixelDataElement`] keeps track of all of them
//! in a [`RepresentationStore`],
//! converting between them on demand
//! with the codecs of a [codec registry](dicom_pixrep_registry),
//! and reading or writing its value from and to byte streams.
//!
//! # Examples
//!
//! ```
//! use dicom_pixrep::PixelDataElement;
//! use dicom_pixrep_encoding::TransferSyntaxId;
//! use dicom_pixrep_registry::CodecRegistry;
//! # use dicom_pixrep::RepresentationKey;
//!
//! # fn main() -> Result<(), dicom_pixrep::Error> {
//! let mut element = PixelDataElement::new();
//! element.put_native_words(&[0, 1, 2, 3, 4, 5, 6, 7]);
//!
//! let registry = CodecRegistry::with_builtin();
//! let ts = TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian;
//! # if cfg!(feature = "uncompressed") {
//! element.choose_representation_with(&ts.into(), &registry)?;
//! assert_eq!(element.current_key(), Some(RepresentationKey::from(ts)));
//! // the native form is still the original
//! assert_eq!(element.original_key(), Some(RepresentationKey::native()));
//!
//! let bytes = element.request_write(ts)?;
//! assert_eq!(bytes.len() as u64, element.encoded_value_length(ts)?);
//! # }
//! # Ok(())
//! # }
//! ```
//!
//! Failing to produce a representation leaves the element unchanged:
//!
//! ```
//! # use dicom_pixrep::{Error, PixelDataElement, RepresentationKey};
//! # use dicom_pixrep_encoding::TransferSyntaxId;
//! # use dicom_pixrep_registry::CodecRegistry;
//! let mut element = PixelDataElement::new();
//! element.put_native_words(&[0, 1, 2, 3]);
//!
//! let target = RepresentationKey::from(TransferSyntaxId::Jpeg2000);
//! let res = element.choose_representation_with(&target, &CodecRegistry::new());
//! assert!(matches!(res, Err(Error::CannotChangeRepresentation { .. })));
//! assert_eq!(element.current_key(), Some(RepresentationKey::native()));
//! ```

pub mod error;
pub mod key;
pub mod store;
pub mod stream;
pub mod transcode;

pub use error::{Error, Result, TranscodeError};
pub use key::RepresentationKey;
pub use store::{Designation, Handle, Representation, RepresentationStore};
pub use stream::{PixelDataElement, ReadOptions, TransferState};
pub use transcode::{can_choose_representation, choose_representation};

pub use dicom_pixrep_encoding as encoding;
pub use dicom_pixrep_registry as registry;
