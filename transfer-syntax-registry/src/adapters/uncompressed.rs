//! Support for encapsulated uncompressed via pixel data adapter.

use std::convert::TryFrom;

use dicom_pixrep_encoding::{
    adapters::{
        CodecSource, DecodeResult, EncapsulatedPixelData, EncodeResult, NativePixelData,
        PixelCodec, RepresentationParameter,
    },
    snafu::{ensure, whatever},
    TransferSyntaxId,
};

use dicom_pixrep_encoding::adapters::{decode_error, encode_error};

/// Representation parameters of
/// Encapsulated Uncompressed Explicit VR Little Endian.
///
/// Each frame is encapsulated in its own fragment,
/// so the native pixel data is split evenly
/// into the given number of frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UncompressedOptions {
    /// The number of frames in the pixel data (1 by default).
    pub frames: u32,
}

impl Default for UncompressedOptions {
    fn default() -> Self {
        UncompressedOptions { frames: 1 }
    }
}

impl UncompressedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames.
    pub fn frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}

/// Adapter for [Encapsulated Uncompressed Explicit VR Little Endian][1]
///
/// [1]: https://dicom.nema.org/medical/dicom/2023c/output/chtml/part05/sect_A.4.11.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UncompressedAdapter;

impl PixelCodec for UncompressedAdapter {
    fn can_change_coding(&self, from: TransferSyntaxId, to: TransferSyntaxId) -> bool {
        matches!(
            (from, to),
            (
                TransferSyntaxId::ExplicitVRLittleEndian,
                TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian
            ) | (
                TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian,
                TransferSyntaxId::ExplicitVRLittleEndian
            )
        )
    }

    fn decode(
        &self,
        params: Option<&dyn RepresentationParameter>,
        src: &EncapsulatedPixelData,
    ) -> DecodeResult<NativePixelData> {
        ensure!(
            params.map_or(true, |p| p.as_any().is::<UncompressedOptions>()),
            decode_error::InvalidParametersSnafu
        );

        // just flatten all fragments into the output buffer
        let len = src.fragments().iter().map(|f| f.len()).sum();
        let mut native = NativePixelData::from_bytes(Vec::new());
        if let Err(e) = native.try_reserve(len) {
            whatever!("Could not allocate {} bytes of pixel data: {}", len, e);
        }
        for fragment in src.fragments() {
            if let Err(e) = native.try_extend_from_slice(fragment) {
                whatever!("Could not copy pixel data fragment: {}", e);
            }
        }
        Ok(native)
    }

    fn encode(
        &self,
        src: CodecSource<'_>,
        params: Option<&dyn RepresentationParameter>,
    ) -> EncodeResult<EncapsulatedPixelData> {
        let native = match src {
            CodecSource::Native(native) => native,
            CodecSource::Encapsulated { ts, .. } => {
                return encode_error::NotNativeSnafu { ts }.fail();
            }
        };

        let frames = match params {
            None => 1,
            Some(params) => match params.as_any().downcast_ref::<UncompressedOptions>() {
                Some(options) => options.frames,
                None => return encode_error::InvalidParametersSnafu.fail(),
            },
        } as usize;

        if frames == 0 {
            whatever!("Number of frames must be positive");
        }
        let data = native.data();
        if data.len() % frames != 0 {
            whatever!(
                "Pixel data of {} bytes cannot be split into {} frames",
                data.len(),
                frames
            );
        }

        // one fragment per frame,
        // frames are never empty unless there is no pixel data at all
        let frame_size = data.len() / frames;
        // fragments are padded to even length when written,
        // which would shift every frame after the first
        if frames > 1 && frame_size % 2 != 0 {
            whatever!(
                "Frames of {} bytes cannot be encapsulated without padding",
                frame_size
            );
        }
        let item_length = match u32::try_from(frame_size + frame_size % 2) {
            Ok(len) if len < u32::MAX - 8 => len,
            _ => whatever!("Frame of {} bytes is too large to encapsulate", frame_size),
        };

        let mut offset_table = Vec::with_capacity(frames);
        let mut fragments = Vec::with_capacity(frames);
        let mut offset = 0u32;
        for i in 0..frames {
            let frame = &data[i * frame_size..(i + 1) * frame_size];
            offset_table.push(offset);
            fragments.push(frame.to_vec());
            if i + 1 < frames {
                // item header + even value length
                offset = match offset.checked_add(8 + item_length) {
                    Some(offset) => offset,
                    None => whatever!("Pixel data is too large for a basic offset table"),
                };
            }
        }
        if frames == 1 {
            offset_table.clear();
        }

        Ok(EncapsulatedPixelData::new(offset_table, fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_pixrep_encoding::adapters::{DecodeError, EncodeError, EncodeOptions};

    #[test]
    fn declares_conversions_to_and_from_native() {
        let adapter = UncompressedAdapter;
        assert!(adapter.can_change_coding(
            TransferSyntaxId::ExplicitVRLittleEndian,
            TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian
        ));
        assert!(adapter.can_change_coding(
            TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian,
            TransferSyntaxId::ExplicitVRLittleEndian
        ));
        assert!(!adapter.can_change_coding(
            TransferSyntaxId::RleLossless,
            TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian
        ));
        assert!(!adapter.can_change_coding(
            TransferSyntaxId::ExplicitVRLittleEndian,
            TransferSyntaxId::JpegBaseline
        ));
    }

    #[test]
    fn encodes_one_fragment_per_frame() {
        let native = NativePixelData::from_bytes((0..12).collect());
        let options = UncompressedOptions::new().frames(3);
        let encoded = UncompressedAdapter
            .encode(CodecSource::Native(&native), Some(&options))
            .unwrap();

        assert_eq!(encoded.fragments().len(), 3);
        assert_eq!(encoded.fragments()[1], vec![4, 5, 6, 7]);
        assert_eq!(encoded.offset_table(), &[0, 12, 24]);

        let decoded = UncompressedAdapter.decode(Some(&options), &encoded).unwrap();
        assert_eq!(decoded.data(), native.data());
    }

    #[test]
    fn single_frame_has_empty_offset_table() {
        let native = NativePixelData::from_words(&[1, 2, 3]);
        let encoded = UncompressedAdapter
            .encode(CodecSource::Native(&native), None)
            .unwrap();
        assert_eq!(encoded.fragments().len(), 1);
        assert!(encoded.offset_table().is_empty());
    }

    #[test]
    fn rejects_odd_length_frames() {
        let native = NativePixelData::from_bytes(vec![1, 2, 3, 4, 5, 6]);
        let options = UncompressedOptions::new().frames(2);
        let res = UncompressedAdapter.encode(CodecSource::Native(&native), Some(&options));
        assert!(matches!(res, Err(EncodeError::Custom { .. })));

        // a single frame is fine
        let encoded = UncompressedAdapter
            .encode(CodecSource::Native(&native), None)
            .unwrap();
        assert_eq!(encoded.fragments()[0], vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rejects_uneven_frames() {
        let native = NativePixelData::from_bytes(vec![0; 10]);
        let options = UncompressedOptions::new().frames(3);
        let res = UncompressedAdapter.encode(CodecSource::Native(&native), Some(&options));
        assert!(matches!(res, Err(EncodeError::Custom { .. })));
    }

    #[test]
    fn rejects_foreign_parameters() {
        let native = NativePixelData::from_bytes(vec![0; 4]);
        let options = EncodeOptions::new().quality(80);
        let res = UncompressedAdapter.encode(CodecSource::Native(&native), Some(&options));
        assert!(matches!(res, Err(EncodeError::InvalidParameters)));

        let encoded = EncapsulatedPixelData::new_fragments(vec![vec![0u8; 4]]);
        let res = UncompressedAdapter.decode(Some(&options), &encoded);
        assert!(matches!(res, Err(DecodeError::InvalidParameters)));
    }

    #[test]
    fn does_not_transcode_from_other_encapsulated_syntaxes() {
        let pixels = EncapsulatedPixelData::new_fragments(vec![vec![0u8; 4]]);
        let res = UncompressedAdapter.encode(
            CodecSource::Encapsulated {
                ts: TransferSyntaxId::RleLossless,
                params: None,
                pixels: &pixels,
            },
            None,
        );
        assert!(matches!(
            res,
            Err(EncodeError::NotNative {
                ts: TransferSyntaxId::RleLossless
            })
        ));
    }
}
