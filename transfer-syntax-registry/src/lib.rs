//! This crate contains the DICOM pixel data codec registry.
//!
//! The codec registry maps a transfer syntax identifier
//! into the codec able to produce pixel data in that transfer syntax,
//! together with the default representation parameters
//! to use when none are requested.
//!
//! A [`CodecRegistry`] is a plain value,
//! which can be built and queried locally.
//! It can also be installed as the process-wide registry
//! with [`init`], after which it is available through [`global`]
//! until [`shutdown`].
//! Registration must be complete before the registry is installed:
//! the global registry is never mutated in place.
//!
//! ```
//! use dicom_pixrep_encoding::TransferSyntaxId;
//! use dicom_pixrep_registry::{CodecIndex, CodecRegistry};
//!
//! let registry = CodecRegistry::with_builtin();
//! // no JPEG 2000 codec is built in
//! assert!(registry.find(TransferSyntaxId::Jpeg2000).is_none());
//! ```
//!
//! ## Compile-time codec submission
//!
//! With the `inventory-registry` feature,
//! crates may submit codecs at compile time using
//! [`submit_codec!`](dicom_pixrep_encoding::submit_codec).
//! These are added to the registry by [`CodecRegistry::with_builtin`].

use dicom_pixrep_encoding::adapters::{
    DynPixelCodec, PixelCodec, RepresentationParameter, RepresentationParams,
};
use dicom_pixrep_encoding::TransferSyntaxId;
use lazy_static::lazy_static;
use snafu::{ensure, Snafu};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

pub mod adapters;

pub use dicom_pixrep_encoding::submit_codec;

/// Error type for the global registry lifecycle.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegistryError {
    /// The global codec registry was already initialized
    #[snafu(display("Global codec registry is already initialized"))]
    AlreadyInitialized,
}

/// A codec registered for a transfer syntax,
/// together with its default representation parameters.
#[derive(Debug, Clone)]
pub struct CodecRegistration {
    codec: DynPixelCodec,
    default_params: Option<RepresentationParams>,
}

impl CodecRegistration {
    pub fn new(codec: DynPixelCodec, default_params: Option<RepresentationParams>) -> Self {
        CodecRegistration {
            codec,
            default_params,
        }
    }

    /// The registered codec.
    pub fn codec(&self) -> &dyn PixelCodec {
        &*self.codec
    }

    /// A shared reference to the registered codec.
    pub fn shared_codec(&self) -> &DynPixelCodec {
        &self.codec
    }

    /// The parameters used when a representation of this transfer syntax
    /// is requested without parameters.
    pub fn default_params(&self) -> Option<&dyn RepresentationParameter> {
        self.default_params.as_deref()
    }

    /// A shared reference to the default parameters.
    pub fn shared_default_params(&self) -> Option<&RepresentationParams> {
        self.default_params.as_ref()
    }
}

/// Trait for containers of pixel data codecs.
///
/// The transcoder is generic over this trait,
/// so that codecs can be looked up
/// in a local registry as well as in the global one.
pub trait CodecIndex {
    /// Obtain the codec registered for the given transfer syntax.
    ///
    /// A missing codec is not an error.
    fn find(&self, ts: TransferSyntaxId) -> Option<&CodecRegistration>;
}

impl<T: ?Sized> CodecIndex for &T
where
    T: CodecIndex,
{
    fn find(&self, ts: TransferSyntaxId) -> Option<&CodecRegistration> {
        (**self).find(ts)
    }
}

impl<T: ?Sized> CodecIndex for Arc<T>
where
    T: CodecIndex,
{
    fn find(&self, ts: TransferSyntaxId) -> Option<&CodecRegistration> {
        (**self).find(ts)
    }
}

/// Data type for a registry of pixel data codecs.
#[derive(Default, Clone)]
pub struct CodecRegistry {
    m: HashMap<TransferSyntaxId, CodecRegistration>,
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<&str> = self.m.keys().map(|ts| ts.name()).collect();
        entries.sort_unstable();
        f.debug_struct("CodecRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl CodecRegistry {
    /// Create an empty codec registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec registry with all built-in codecs,
    /// plus the codecs submitted at compile time
    /// when the `inventory-registry` feature is enabled.
    pub fn with_builtin() -> Self {
        let mut registry = CodecRegistry::new();

        #[cfg(feature = "uncompressed")]
        registry.register(
            TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian,
            Arc::new(adapters::uncompressed::UncompressedAdapter),
            None,
        );

        #[cfg(feature = "inventory-registry")]
        for factory in dicom_pixrep_encoding::inventory::iter::<dicom_pixrep_encoding::CodecFactory> {
            registry.register(
                factory.ts,
                (factory.codec)(),
                (factory.default_params)(),
            );
        }

        registry
    }

    /// Register a codec for the given transfer syntax,
    /// replacing any existing registration for it.
    ///
    /// Returns the previous registration, if any.
    pub fn register(
        &mut self,
        ts: TransferSyntaxId,
        codec: DynPixelCodec,
        default_params: Option<RepresentationParams>,
    ) -> Option<CodecRegistration> {
        let registration = CodecRegistration::new(codec, default_params);
        match self.m.entry(ts) {
            Entry::Occupied(mut e) => {
                debug!("Replacing codec for {}", ts);
                Some(e.insert(registration))
            }
            Entry::Vacant(e) => {
                e.insert(registration);
                None
            }
        }
    }

    /// Remove the codec registered for the given transfer syntax.
    pub fn deregister(&mut self, ts: TransferSyntaxId) -> Option<CodecRegistration> {
        self.m.remove(&ts)
    }

    /// Obtain the codec registered for the given transfer syntax.
    pub fn get(&self, ts: TransferSyntaxId) -> Option<&CodecRegistration> {
        self.m.get(&ts)
    }

    /// Whether a codec is registered for the given transfer syntax.
    pub fn contains(&self, ts: TransferSyntaxId) -> bool {
        self.m.contains_key(&ts)
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// Iterate over all registrations, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (TransferSyntaxId, &CodecRegistration)> {
        self.m.iter().map(|(ts, r)| (*ts, r))
    }
}

impl CodecIndex for CodecRegistry {
    fn find(&self, ts: TransferSyntaxId) -> Option<&CodecRegistration> {
        self.get(ts)
    }
}

lazy_static! {
    static ref REGISTRY: RwLock<Option<Arc<CodecRegistry>>> = RwLock::new(None);
}

/// Install the given codec registry as the process-wide registry.
///
/// Fails if a registry is already installed.
/// Call [`shutdown`] first to replace it.
pub fn init(registry: CodecRegistry) -> Result<(), RegistryError> {
    let mut global = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    ensure!(global.is_none(), AlreadyInitializedSnafu);
    info!("Initializing global codec registry with {} codecs", registry.len());
    *global = Some(Arc::new(registry));
    Ok(())
}

/// Remove the process-wide codec registry.
///
/// Snapshots obtained through [`global`] before this call remain valid.
pub fn shutdown() {
    let mut global = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if global.take().is_some() {
        info!("Global codec registry shut down");
    } else {
        warn!("Global codec registry shut down without being initialized");
    }
}

/// Whether a process-wide codec registry is installed.
pub fn is_initialized() -> bool {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Obtain a snapshot of the process-wide codec registry,
/// or `None` if it is not initialized.
pub fn global() -> Option<Arc<CodecRegistry>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_pixrep_encoding::adapters::{
        CodecSource, DecodeResult, EncapsulatedPixelData, EncodeOptions, EncodeResult,
        NativePixelData,
    };

    #[derive(Debug)]
    struct NullCodec(TransferSyntaxId);

    impl PixelCodec for NullCodec {
        fn can_change_coding(&self, _from: TransferSyntaxId, to: TransferSyntaxId) -> bool {
            to == self.0
        }

        fn decode(
            &self,
            _params: Option<&dyn RepresentationParameter>,
            _src: &EncapsulatedPixelData,
        ) -> DecodeResult<NativePixelData> {
            Ok(NativePixelData::from_bytes(Vec::new()))
        }

        fn encode(
            &self,
            _src: CodecSource<'_>,
            _params: Option<&dyn RepresentationParameter>,
        ) -> EncodeResult<EncapsulatedPixelData> {
            Ok(EncapsulatedPixelData::new_fragments(Vec::new()))
        }
    }

    #[test]
    fn register_replaces_existing() {
        let mut registry = CodecRegistry::new();
        let ts = TransferSyntaxId::JpegBaseline;
        assert!(registry
            .register(ts, Arc::new(NullCodec(ts)), None)
            .is_none());
        let old = registry.register(
            ts,
            Arc::new(NullCodec(ts)),
            Some(Arc::new(EncodeOptions::new().quality(90))),
        );
        assert!(old.is_some());
        assert!(old.unwrap().default_params().is_none());
        assert_eq!(registry.len(), 1);

        let params = registry.find(ts).unwrap().default_params().unwrap();
        assert!(params.dyn_eq(&EncodeOptions::new().quality(90)));
    }

    #[test]
    fn deregister_and_lookup() {
        let mut registry = CodecRegistry::new();
        let ts = TransferSyntaxId::RleLossless;
        registry.register(ts, Arc::new(NullCodec(ts)), None);
        assert!(registry.contains(ts));
        assert!((&registry).find(ts).is_some());
        assert!(registry.find(TransferSyntaxId::JpegBaseline).is_none());

        assert!(registry.deregister(ts).is_some());
        assert!(registry.deregister(ts).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn builtin_has_uncompressed_adapter() {
        let registry = CodecRegistry::with_builtin();
        let ts = TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian;
        if cfg!(feature = "uncompressed") {
            let codec = registry.find(ts).unwrap().codec();
            assert!(codec.can_change_coding(TransferSyntaxId::NATIVE_PIVOT, ts));
        } else {
            assert!(registry.find(ts).is_none());
        }
    }
}
