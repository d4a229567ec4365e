//! Test codecs for the pixel data representation engine.
#![allow(dead_code)]

use dicom_core::VR;
use dicom_pixrep_encoding::adapters::{
    CodecSource, DecodeResult, EncapsulatedPixelData, EncodeResult, NativePixelData, PixelCodec,
    RepresentationParameter,
};
use dicom_pixrep_encoding::snafu::whatever;
use dicom_pixrep_encoding::TransferSyntaxId;
use dicom_pixrep_registry::CodecRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const NATIVE: TransferSyntaxId = TransferSyntaxId::NATIVE_PIVOT;

/// Encode bytes as `(count, value)` pairs.
pub fn run_length_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut iter = data.iter().copied().peekable();
    while let Some(value) = iter.next() {
        let mut count = 1u8;
        while count < u8::MAX && iter.peek() == Some(&value) {
            iter.next();
            count += 1;
        }
        out.push(count);
        out.push(value);
    }
    out
}

pub fn run_length_decode(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(2)
        .flat_map(|pair| std::iter::repeat(pair[1]).take(pair[0] as usize))
        .collect()
}

/// A lossless run-length codec standing in for RLE Lossless.
///
/// Counts how many times it was asked to decode or encode.
#[derive(Debug, Default)]
pub struct RunLengthCodec {
    pub calls: AtomicUsize,
}

impl RunLengthCodec {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PixelCodec for RunLengthCodec {
    fn can_change_coding(&self, from: TransferSyntaxId, to: TransferSyntaxId) -> bool {
        matches!(
            (from, to),
            (NATIVE, TransferSyntaxId::RleLossless) | (TransferSyntaxId::RleLossless, NATIVE)
        )
    }

    fn decode(
        &self,
        _params: Option<&dyn RepresentationParameter>,
        src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let data = src
            .fragments()
            .iter()
            .flat_map(|f| run_length_decode(f))
            .collect();
        Ok(NativePixelData::new(VR::OW, data))
    }

    fn encode(
        &self,
        src: CodecSource<'_>,
        _params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match src {
            CodecSource::Native(native) => Ok(EncapsulatedPixelData::new(
                vec![0u32],
                vec![run_length_encode(native.data())],
            )),
            CodecSource::Encapsulated { ts, .. } => {
                whatever!("cannot transcode from {}", ts)
            }
        }
    }
}

/// A codec which only encodes from native pixel data,
/// keeping the bytes as they are in a single fragment.
#[derive(Debug)]
pub struct NativeOnlyCodec {
    pub ts: TransferSyntaxId,
}

impl PixelCodec for NativeOnlyCodec {
    fn can_change_coding(&self, from: TransferSyntaxId, to: TransferSyntaxId) -> bool {
        from == NATIVE && to == self.ts
    }

    fn decode(
        &self,
        _params: Option<&dyn RepresentationParameter>,
        _src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData> {
        whatever!("decoding is not supported")
    }

    fn encode(
        &self,
        src: CodecSource<'_>,
        _params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData> {
        match src {
            CodecSource::Native(native) => Ok(EncapsulatedPixelData::new(
                vec![0u32],
                vec![native.data().to_vec()],
            )),
            CodecSource::Encapsulated { ts, .. } => {
                whatever!("cannot transcode from {}", ts)
            }
        }
    }
}

/// A codec which claims it can transcode from RLE Lossless directly,
/// but fails to do so.
/// Encoding from native pixel data works.
#[derive(Debug)]
pub struct BrokenTranscoder {
    pub ts: TransferSyntaxId,
}

impl PixelCodec for BrokenTranscoder {
    fn can_change_coding(&self, from: TransferSyntaxId, to: TransferSyntaxId) -> bool {
        (from == NATIVE || from == TransferSyntaxId::RleLossless) && to == self.ts
    }

    fn decode(
        &self,
        _params: Option<&dyn RepresentationParameter>,
        _src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData> {
        whatever!("decoding is not supported")
    }

    fn encode(
        &self,
        src: CodecSource<'_>,
        _params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData> {
        match src {
            CodecSource::Native(native) => Ok(EncapsulatedPixelData::new(
                vec![0u32],
                vec![native.data().to_vec()],
            )),
            CodecSource::Encapsulated { .. } => whatever!("transcoder is broken"),
        }
    }
}

/// A codec which claims it can do anything and always fails.
#[derive(Debug)]
pub struct FailingCodec;

impl PixelCodec for FailingCodec {
    fn can_change_coding(&self, _from: TransferSyntaxId, _to: TransferSyntaxId) -> bool {
        true
    }

    fn decode(
        &self,
        _params: Option<&dyn RepresentationParameter>,
        _src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData> {
        whatever!("decoding failed")
    }

    fn encode(
        &self,
        _src: CodecSource<'_>,
        _params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData> {
        whatever!("encoding failed")
    }
}

/// Quality factor of the near-lossless test syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

/// A registry with:
///
/// - [`RunLengthCodec`] for RLE Lossless
/// - [`NativeOnlyCodec`] for JPEG-LS Lossless
/// - [`BrokenTranscoder`] for JPEG-LS Near Lossless,
///   with a default [`Quality`] of 90
/// - [`FailingCodec`] for JPEG Baseline
///
/// Returns the run-length codec as well, to inspect its call count.
pub fn test_registry() -> (CodecRegistry, Arc<RunLengthCodec>) {
    let rle = Arc::new(RunLengthCodec::default());
    let mut registry = CodecRegistry::new();
    registry.register(TransferSyntaxId::RleLossless, rle.clone(), None);
    registry.register(
        TransferSyntaxId::JpegLsLossless,
        Arc::new(NativeOnlyCodec {
            ts: TransferSyntaxId::JpegLsLossless,
        }),
        None,
    );
    registry.register(
        TransferSyntaxId::JpegLsNearLossless,
        Arc::new(BrokenTranscoder {
            ts: TransferSyntaxId::JpegLsNearLossless,
        }),
        Some(Arc::new(Quality(90))),
    );
    registry.register(TransferSyntaxId::JpegBaseline, Arc::new(FailingCodec), None);
    (registry, rle)
}

/// Eight 16-bit samples `0..8`.
pub fn eight_words() -> Vec<u16> {
    (0..8).collect()
}
