//! Selection and production of pixel data representations.
//!
//! Choosing a representation happens in two phases.
//! First, a [`Plan`] is built from the state of the store
//! and the capabilities declared by the codecs,
//! without calling any codec nor changing the store.
//! Then the plan is executed,
//! trying each of its strategies in order until one succeeds.
//! Checking whether a representation can be chosen
//! is the same as checking whether a plan can be built,
//! so both questions are always answered by the same rules.
//!
//! A plan is built as follows:
//!
//! - Native targets are served by the native buffer if present,
//!   or else by decoding the original representation.
//! - Encapsulated targets are served by a cached representation
//!   with the same key
//!   (a target without parameters also matches
//!   a representation with the default parameters of the codec).
//!   Otherwise, the codec registered for the target must either
//!   transcode the original representation directly,
//!   or encode from native pixel data,
//!   which is obtained by decoding the original if necessary.
//!
//! Results of a plan are only committed to the store
//! once every codec call has succeeded.

use crate::error::{
    CannotChangeRepresentationSnafu, DecodeSnafu, EncodeSnafu, Error, Result, TranscodeError,
};
use crate::key::RepresentationKey;
use crate::store::{Designation, Handle, Representation, RepresentationStore};
use dicom_pixrep_encoding::adapters::{CodecSource, NativePixelData};
use dicom_pixrep_encoding::TransferSyntaxId;
use dicom_pixrep_registry::{CodecIndex, CodecRegistration};
use snafu::ResultExt;
use tracing::{debug, trace};

const PIVOT: TransferSyntaxId = TransferSyntaxId::NATIVE_PIVOT;

/// One way of obtaining the target representation.
#[derive(Debug)]
enum Strategy<'r> {
    /// the native buffer is already there
    SelectNative,
    /// the representation is already cached
    SelectEntry(Handle),
    /// decode the original into native pixel data
    Decode {
        decoder: &'r CodecRegistration,
        source: Handle,
    },
    /// encode the existing native buffer
    EncodeNative { encoder: &'r CodecRegistration },
    /// transcode the original directly
    Transcode {
        encoder: &'r CodecRegistration,
        source: Handle,
    },
    /// decode the original, then encode the decoded pixel data
    DecodeEncode {
        decoder: &'r CodecRegistration,
        source: Handle,
        encoder: &'r CodecRegistration,
    },
}

/// A dry run of choosing a representation.
#[derive(Debug)]
pub(crate) struct Plan<'r> {
    /// the target key, with codec default parameters applied
    target: RepresentationKey,
    strategies: Vec<Strategy<'r>>,
}

/// Build the plan for obtaining the representation `target`.
///
/// Fails with `CannotChangeRepresentation` if there is no way to obtain it.
pub(crate) fn plan<'r, C>(
    store: &RepresentationStore,
    target: &RepresentationKey,
    codecs: &'r C,
) -> Result<Plan<'r>>
where
    C: CodecIndex + ?Sized,
{
    let to = target.ts();
    let mut strategies = Vec::new();

    if target.is_native() {
        if store.has_native() {
            strategies.push(Strategy::SelectNative);
        } else if let Some((source, decoder)) = original_decoder(store, codecs) {
            strategies.push(Strategy::Decode { decoder, source });
        }
        return finish(target.clone(), strategies);
    }

    if !target.is_encapsulated() {
        // referenced or unknown pixel data
        return Err(Error::no_conversion_path(to));
    }

    if let Some(h) = store.find_by_key(target) {
        strategies.push(Strategy::SelectEntry(h));
        return finish(target.clone(), strategies);
    }

    let encoder = match codecs.find(to) {
        Some(encoder) => encoder,
        None => return Err(Error::no_conversion_path(to)),
    };

    let target = match (target.params(), encoder.shared_default_params()) {
        (None, Some(defaults)) => {
            let key = RepresentationKey::new(to, Some(defaults.clone()));
            if let Some(h) = store.find_by_key(&key) {
                strategies.push(Strategy::SelectEntry(h));
                return finish(key, strategies);
            }
            key
        }
        _ => target.clone(),
    };

    let can_encode_native = encoder.codec().can_change_coding(PIVOT, to);

    match store.original() {
        Designation::None | Designation::Native => {
            if store.has_native() && can_encode_native {
                strategies.push(Strategy::EncodeNative { encoder });
            }
        }
        Designation::Entry(source) => {
            let from = store
                .get(source)
                .map(|r| r.ts())
                .unwrap_or(TransferSyntaxId::Unknown);
            if encoder.codec().can_change_coding(from, to) {
                strategies.push(Strategy::Transcode { encoder, source });
            }
            if can_encode_native {
                if store.has_native() {
                    strategies.push(Strategy::EncodeNative { encoder });
                } else if let Some((source, decoder)) = original_decoder(store, codecs) {
                    strategies.push(Strategy::DecodeEncode {
                        decoder,
                        source,
                        encoder,
                    });
                }
            }
        }
    }

    finish(target, strategies)
}

/// The original representation and the codec which can decode it.
fn original_decoder<'r, C>(
    store: &RepresentationStore,
    codecs: &'r C,
) -> Option<(Handle, &'r CodecRegistration)>
where
    C: CodecIndex + ?Sized,
{
    let source = match store.original() {
        Designation::Entry(h) => h,
        _ => return None,
    };
    let from = store.get(source)?.ts();
    let decoder = codecs.find(from)?;
    if decoder.codec().can_change_coding(from, PIVOT) {
        Some((source, decoder))
    } else {
        None
    }
}

fn finish<'r>(target: RepresentationKey, strategies: Vec<Strategy<'r>>) -> Result<Plan<'r>> {
    if strategies.is_empty() {
        return Err(Error::no_conversion_path(target.ts()));
    }
    trace!("Plan for {}: {:?}", target, strategies);
    Ok(Plan { target, strategies })
}

/// The changes to commit to the store after a successful strategy.
enum Outcome {
    Select(Designation),
    Native(NativePixelData),
    Encoded {
        decoded: Option<NativePixelData>,
        representation: Representation,
    },
}

impl Plan<'_> {
    /// Execute the plan on the store it was built from.
    ///
    /// Strategies are tried in order.
    /// If all of them fail, the error of the last one is returned
    /// and the store is left unchanged.
    pub(crate) fn execute(self, store: &mut RepresentationStore) -> Result<()> {
        let to = self.target.ts();
        let mut last_error = TranscodeError::NoConversionPath;
        for strategy in &self.strategies {
            match run(store, &self.target, strategy) {
                Ok(outcome) => return commit(store, outcome),
                Err(e) => {
                    debug!("Could not obtain {}: {}", self.target, e);
                    last_error = e;
                }
            }
        }
        Err(last_error).context(CannotChangeRepresentationSnafu { ts: to })
    }
}

fn run(
    store: &RepresentationStore,
    target: &RepresentationKey,
    strategy: &Strategy<'_>,
) -> Result<Outcome, TranscodeError> {
    let to = target.ts();
    match strategy {
        Strategy::SelectNative => {
            debug!("Selecting native pixel data");
            Ok(Outcome::Select(Designation::Native))
        }
        Strategy::SelectEntry(h) => {
            debug!("Selecting cached representation {}", target);
            Ok(Outcome::Select(Designation::Entry(*h)))
        }
        Strategy::Decode { decoder, source } => {
            debug!("Decoding original representation into native pixel data");
            let native = decode(store, decoder, *source)?;
            Ok(Outcome::Native(native))
        }
        Strategy::EncodeNative { encoder } => {
            debug!("Encoding native pixel data into {}", target);
            let native = match store.native() {
                Some(native) => native,
                None => return Err(TranscodeError::NoConversionPath),
            };
            let pixels = encoder
                .codec()
                .encode(CodecSource::Native(native), target.params())
                .context(EncodeSnafu { ts: to })?;
            Ok(Outcome::Encoded {
                decoded: None,
                representation: Representation::new(target.clone(), pixels),
            })
        }
        Strategy::Transcode { encoder, source } => {
            let original = match store.get(*source) {
                Some(original) => original,
                None => return Err(TranscodeError::NoConversionPath),
            };
            debug!("Transcoding {} into {}", original.key(), target);
            let pixels = encoder
                .codec()
                .encode(
                    CodecSource::Encapsulated {
                        ts: original.ts(),
                        params: original.params(),
                        pixels: original.pixels(),
                    },
                    target.params(),
                )
                .context(EncodeSnafu { ts: to })?;
            Ok(Outcome::Encoded {
                decoded: None,
                representation: Representation::new(target.clone(), pixels),
            })
        }
        Strategy::DecodeEncode {
            decoder,
            source,
            encoder,
        } => {
            debug!("Transcoding into {} through native pixel data", target);
            let native = decode(store, decoder, *source)?;
            let pixels = encoder
                .codec()
                .encode(CodecSource::Native(&native), target.params())
                .context(EncodeSnafu { ts: to })?;
            Ok(Outcome::Encoded {
                decoded: Some(native),
                representation: Representation::new(target.clone(), pixels),
            })
        }
    }
}

fn decode(
    store: &RepresentationStore,
    decoder: &CodecRegistration,
    source: Handle,
) -> Result<NativePixelData, TranscodeError> {
    let original = match store.get(source) {
        Some(original) => original,
        None => return Err(TranscodeError::NoConversionPath),
    };
    decoder
        .codec()
        .decode(original.params(), original.pixels())
        .context(DecodeSnafu { ts: original.ts() })
}

fn commit(store: &mut RepresentationStore, outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Select(designation) => store.set_current(designation),
        Outcome::Native(native) => {
            store.install_native(native);
            store.set_current(Designation::Native)
        }
        Outcome::Encoded {
            decoded,
            representation,
        } => {
            let h = store.insert(representation)?;
            if let Some(native) = decoded {
                store.install_native(native);
            }
            store.set_current(Designation::Entry(h))
        }
    }
}

/// Make the representation `target` the current one,
/// producing it with the given codecs if necessary.
///
/// On failure, the store is left unchanged.
pub fn choose_representation<C>(
    store: &mut RepresentationStore,
    target: &RepresentationKey,
    codecs: &C,
) -> Result<()>
where
    C: CodecIndex + ?Sized,
{
    plan(store, target, codecs)?.execute(store)
}

/// Check whether [`choose_representation`] would succeed,
/// without calling any codec.
///
/// This relies on codecs answering truthfully
/// whether they can perform a conversion.
pub fn can_choose_representation<C>(
    store: &RepresentationStore,
    target: &RepresentationKey,
    codecs: &C,
) -> bool
where
    C: CodecIndex + ?Sized,
{
    plan(store, target, codecs).is_ok()
}
