//! Module containing the DICOM transfer syntax descriptors.
//!
//! Every transfer syntax known to this library is identified by a
//! [`TransferSyntaxId`], a small copyable value which is compared in
//! constant time. The respective [`TransferSyntax`] descriptor
//! holds the static properties of the transfer syntax
//! (byte order, VR encoding, pixel data encoding and compression).
//! Descriptors are immutable and live for the entire program,
//! so they can be looked up freely without any synchronization.
//!
//! Unlike the codec registry,
//! the table of descriptors is never extended at run-time.
//! Unrecognized transfer syntax UIDs resolve to
//! [`TransferSyntaxId::Unknown`],
//! which has a descriptor of its own.
//!
//! ```
//! use dicom_pixrep_encoding::transfer_syntax::TransferSyntaxId;
//!
//! let ts = TransferSyntaxId::from_uid("1.2.840.10008.1.2.5\0");
//! assert_eq!(ts, TransferSyntaxId::RleLossless);
//! assert!(ts.descriptor().uses_encapsulated_format());
//! assert!(ts.descriptor().is_lossless_compressed());
//! ```

pub mod entries;

use std::fmt;

pub use byteordered::Endianness;

/// The value representation encoding mode of a transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VrEncoding {
    /// The VR is not written and must be inferred from a dictionary.
    Implicit,
    /// The VR is written alongside each data element header.
    Explicit,
}

/// How pixel data is laid out in a transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    /// Flat, unencapsulated pixel data (`OB` or `OW`).
    Native,
    /// Pixel data is a sequence of opaque byte fragments.
    Encapsulated,
    /// Pixel data is not present, only referenced (e.g. JPIP).
    Referenced,
    /// The pixel data encoding is not known.
    Unknown,
}

/// The kind of compression applied to the pixel data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelCompression {
    /// No compression.
    Uncompressed,
    /// Mathematically lossless compression.
    Lossless,
    /// Lossy (or near-lossless) compression.
    Lossy,
    /// The pixel data compression is not known.
    Unknown,
}

/// The kind of compression applied to the whole data set stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StreamCompression {
    /// The data set is not compressed.
    None,
    /// The data set is compressed with an unsupported method.
    Unsupported,
    /// The data set is compressed with the deflate algorithm (zlib-like).
    Deflate,
}

/// The definition status of a transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Only used internally by this library, never written to files.
    Internal,
    /// Defined in the current edition of the DICOM standard.
    Standard,
    /// Defined in a previous edition of the DICOM standard and since retired.
    Retired,
    /// Private (vendor-specific) transfer syntax.
    Private,
    /// Not known to this library.
    Unknown,
}

macro_rules! transfer_syntax_ids {
    ($($(#[$meta:meta])* $id:ident,)*) => {
        /// An identifier of a transfer syntax known to this library.
        ///
        /// Identifiers are ordered by their declaration order,
        /// which is used to keep representation caches sorted.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TransferSyntaxId {
            $($(#[$meta])* $id,)*
        }

        impl TransferSyntaxId {
            /// All transfer syntax identifiers, in declaration order.
            pub const ALL: &'static [TransferSyntaxId] = &[$(TransferSyntaxId::$id,)*];
        }
    };
}

transfer_syntax_ids! {
    /// An unrecognized transfer syntax.
    Unknown,
    /// Implicit VR Little Endian: Default Transfer Syntax for DICOM
    ImplicitVRLittleEndian,
    /// Implicit VR Big Endian (internal use only)
    ImplicitVRBigEndian,
    /// Explicit VR Little Endian
    ExplicitVRLittleEndian,
    /// Encapsulated Uncompressed Explicit VR Little Endian
    EncapsulatedUncompressedExplicitVRLittleEndian,
    /// Deflated Explicit VR Little Endian
    DeflatedExplicitVRLittleEndian,
    /// Explicit VR Big Endian (retired)
    ExplicitVRBigEndian,
    /// JPEG Baseline (Process 1)
    JpegBaseline,
    /// JPEG Extended (Process 2 & 4)
    JpegExtended,
    /// JPEG Extended (Process 3 & 5) (retired)
    JpegExtended35,
    /// JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8) (retired)
    JpegSpectralSelection68,
    /// JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9) (retired)
    JpegSpectralSelection79,
    /// JPEG Full Progression, Non-Hierarchical (Process 10 & 12) (retired)
    JpegFullProgression1012,
    /// JPEG Full Progression, Non-Hierarchical (Process 11 & 13) (retired)
    JpegFullProgression1113,
    /// JPEG Lossless, Non-Hierarchical (Process 14)
    JpegLossless,
    /// JPEG Lossless, Non-Hierarchical (Process 15) (retired)
    JpegLossless15,
    /// JPEG Extended, Hierarchical (Process 16 & 18) (retired)
    JpegExtendedHierarchical1618,
    /// JPEG Extended, Hierarchical (Process 17 & 19) (retired)
    JpegExtendedHierarchical1719,
    /// JPEG Spectral Selection, Hierarchical (Process 20 & 22) (retired)
    JpegSpectralSelectionHierarchical2022,
    /// JPEG Spectral Selection, Hierarchical (Process 21 & 23) (retired)
    JpegSpectralSelectionHierarchical2123,
    /// JPEG Full Progression, Hierarchical (Process 24 & 26) (retired)
    JpegFullProgressionHierarchical2426,
    /// JPEG Full Progression, Hierarchical (Process 25 & 27) (retired)
    JpegFullProgressionHierarchical2527,
    /// JPEG Lossless, Hierarchical (Process 28) (retired)
    JpegLosslessHierarchical28,
    /// JPEG Lossless, Hierarchical (Process 29) (retired)
    JpegLosslessHierarchical29,
    /// JPEG Lossless, Non-Hierarchical, First-Order Prediction
    /// (Process 14 [Selection Value 1])
    JpegLosslessSv1,
    /// JPEG-LS Lossless Image Compression
    JpegLsLossless,
    /// JPEG-LS Lossy (Near-Lossless) Image Compression
    JpegLsNearLossless,
    /// JPEG 2000 Image Compression (Lossless Only)
    Jpeg2000Lossless,
    /// JPEG 2000 Image Compression
    Jpeg2000,
    /// JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
    Jpeg2000MultiComponentLossless,
    /// JPEG 2000 Part 2 Multi-component Image Compression
    Jpeg2000MultiComponent,
    /// JPIP Referenced
    JpipReferenced,
    /// JPIP Referenced Deflate
    JpipReferencedDeflate,
    /// MPEG2 Main Profile / Main Level
    Mpeg2MainProfileMainLevel,
    /// Fragmentable MPEG2 Main Profile / Main Level
    Mpeg2MainProfileMainLevelFragmentable,
    /// MPEG2 Main Profile / High Level
    Mpeg2MainProfileHighLevel,
    /// Fragmentable MPEG2 Main Profile / High Level
    Mpeg2MainProfileHighLevelFragmentable,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.1
    Mpeg4HighProfileLevel41,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1
    Mpeg4HighProfileLevel41Fragmentable,
    /// MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
    Mpeg4BdCompatibleHighProfileLevel41,
    /// Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
    Mpeg4BdCompatibleHighProfileLevel41Fragmentable,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
    Mpeg4HighProfileLevel42For2dVideo,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
    Mpeg4HighProfileLevel42For2dVideoFragmentable,
    /// MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
    Mpeg4HighProfileLevel42For3dVideo,
    /// Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
    Mpeg4HighProfileLevel42For3dVideoFragmentable,
    /// MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
    Mpeg4StereoHighProfileLevel42,
    /// Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
    Mpeg4StereoHighProfileLevel42Fragmentable,
    /// HEVC/H.265 Main Profile / Level 5.1
    HevcMainProfileLevel51,
    /// HEVC/H.265 Main 10 Profile / Level 5.1
    HevcMain10ProfileLevel51,
    /// JPEG XL Lossless
    JpegXlLossless,
    /// JPEG XL JPEG Recompression
    JpegXlJpegRecompression,
    /// JPEG XL
    JpegXl,
    /// High-Throughput JPEG 2000 Image Compression (Lossless Only)
    HtJpeg2000Lossless,
    /// High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
    HtJpeg2000RpclLossless,
    /// High-Throughput JPEG 2000 Image Compression
    HtJpeg2000,
    /// JPIP HTJ2K Referenced
    JpipHtJpeg2000Referenced,
    /// JPIP HTJ2K Referenced Deflate
    JpipHtJpeg2000ReferencedDeflate,
    /// RLE Lossless
    RleLossless,
    /// Deflated Image Frame Compression
    DeflatedImageFrameCompression,
    /// Papyrus 3 Implicit VR Little Endian (retired)
    Papyrus3ImplicitVRLittleEndian,
    /// Private GE Implicit VR Little Endian with big endian pixel data
    PrivateGeImplicitVRLittleEndianBigEndianPixelData,
}

impl TransferSyntaxId {
    /// The transfer syntax in which codecs exchange native pixel data.
    pub const NATIVE_PIVOT: TransferSyntaxId = TransferSyntaxId::ExplicitVRLittleEndian;

    /// Resolve a transfer syntax UID into its identifier.
    ///
    /// Trailing null characters and spaces (used for padding UIDs
    /// to an even length) are ignored.
    /// UIDs which are not known to this library,
    /// as well as the empty string,
    /// resolve to [`TransferSyntaxId::Unknown`].
    pub fn from_uid(uid: &str) -> TransferSyntaxId {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        if uid.is_empty() {
            return TransferSyntaxId::Unknown;
        }
        entries::TRANSFER_SYNTAXES
            .iter()
            .find(|ts| ts.uid() == uid)
            .map(|ts| ts.id())
            .unwrap_or(TransferSyntaxId::Unknown)
    }

    /// Obtain the descriptor of this transfer syntax.
    #[inline]
    pub fn descriptor(self) -> &'static TransferSyntax {
        &entries::TRANSFER_SYNTAXES[self as usize]
    }

    /// Obtain the UID of this transfer syntax,
    /// or an empty string if it has none.
    #[inline]
    pub fn uid(self) -> &'static str {
        self.descriptor().uid()
    }

    /// Obtain the human readable name of this transfer syntax.
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }
}

impl Default for TransferSyntaxId {
    fn default() -> Self {
        TransferSyntaxId::Unknown
    }
}

impl fmt::Display for TransferSyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.descriptor();
        if ts.uid().is_empty() {
            f.write_str(ts.name())
        } else {
            write!(f, "{} ({})", ts.name(), ts.uid())
        }
    }
}

impl From<&str> for TransferSyntaxId {
    fn from(uid: &str) -> Self {
        TransferSyntaxId::from_uid(uid)
    }
}

/// A DICOM transfer syntax descriptor.
///
/// Only the primitive properties are stored.
/// All predicates are derived from them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The identifier of the transfer syntax.
    id: TransferSyntaxId,
    /// The unique identifier of the transfer syntax,
    /// empty for internal or unknown transfer syntaxes.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data, if known.
    byte_order: Option<Endianness>,
    /// Whether the VR is implicit or explicit.
    vr_encoding: VrEncoding,
    /// How pixel data is laid out.
    pixel_encoding: PixelEncoding,
    /// How pixel data is compressed.
    pixel_compression: PixelCompression,
    /// Whether encapsulated frames may span multiple fragments.
    fragmentable: bool,
    /// How the data set stream is compressed.
    stream_compression: StreamCompression,
    /// The definition status.
    validity: Validity,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    ///
    /// Note that only the library's descriptor table
    /// is expected to construct descriptors from scratch.
    /// For a practical usage of transfer syntaxes,
    /// look up an existing descriptor via [`TransferSyntaxId::descriptor`].
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: TransferSyntaxId,
        uid: &'static str,
        name: &'static str,
        byte_order: Option<Endianness>,
        vr_encoding: VrEncoding,
        pixel_encoding: PixelEncoding,
        pixel_compression: PixelCompression,
        fragmentable: bool,
        stream_compression: StreamCompression,
        validity: Validity,
    ) -> Self {
        TransferSyntax {
            id,
            uid,
            name,
            byte_order,
            vr_encoding,
            pixel_encoding,
            pixel_compression,
            fragmentable,
            stream_compression,
            validity,
        }
    }

    /// Obtain this transfer syntax' identifier.
    pub const fn id(&self) -> TransferSyntaxId {
        self.id
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected byte order,
    /// or `None` if it is not known.
    pub const fn byte_order(&self) -> Option<Endianness> {
        self.byte_order
    }

    pub const fn vr_encoding(&self) -> VrEncoding {
        self.vr_encoding
    }

    pub const fn pixel_encoding(&self) -> PixelEncoding {
        self.pixel_encoding
    }

    pub const fn pixel_compression(&self) -> PixelCompression {
        self.pixel_compression
    }

    pub const fn stream_compression(&self) -> StreamCompression {
        self.stream_compression
    }

    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Whether this is a transfer syntax known to this library.
    pub fn is_known(&self) -> bool {
        self.id != TransferSyntaxId::Unknown
    }

    pub fn is_little_endian(&self) -> bool {
        self.byte_order == Some(Endianness::Little)
    }

    pub fn is_big_endian(&self) -> bool {
        self.byte_order == Some(Endianness::Big)
    }

    pub fn is_implicit_vr(&self) -> bool {
        self.vr_encoding == VrEncoding::Implicit
    }

    pub fn is_explicit_vr(&self) -> bool {
        self.vr_encoding == VrEncoding::Explicit
    }

    /// Whether pixel data is stored flat, without encapsulation.
    pub fn uses_native_format(&self) -> bool {
        self.pixel_encoding == PixelEncoding::Native
    }

    /// Whether pixel data is stored as a sequence of fragments.
    pub fn uses_encapsulated_format(&self) -> bool {
        self.pixel_encoding == PixelEncoding::Encapsulated
    }

    /// Whether pixel data is only referenced, not contained.
    pub fn uses_referenced_pixel_data(&self) -> bool {
        self.pixel_encoding == PixelEncoding::Referenced
    }

    /// Whether the pixel data is compressed,
    /// either lossless or lossy.
    pub fn is_pixel_data_compressed(&self) -> bool {
        matches!(
            self.pixel_compression,
            PixelCompression::Lossless | PixelCompression::Lossy
        )
    }

    pub fn is_pixel_data_uncompressed(&self) -> bool {
        self.pixel_compression == PixelCompression::Uncompressed
    }

    /// Whether some form of lossless compression applies,
    /// either to the pixel data or to the whole data set stream.
    pub fn is_lossless_compressed(&self) -> bool {
        self.pixel_compression == PixelCompression::Lossless
            || self.stream_compression != StreamCompression::None
    }

    pub fn is_lossy_compressed(&self) -> bool {
        self.pixel_compression == PixelCompression::Lossy
    }

    /// Whether a single frame of encapsulated pixel data
    /// may be split across multiple fragments.
    ///
    /// Always `false` for transfer syntaxes without encapsulation.
    pub fn is_pixel_data_fragmentable(&self) -> bool {
        self.uses_encapsulated_format() && self.fragmentable
    }

    /// Whether the whole data set is compressed.
    pub fn is_dataset_compressed(&self) -> bool {
        self.stream_compression != StreamCompression::None
    }

    pub fn is_standard(&self) -> bool {
        self.validity == Validity::Standard
    }

    pub fn is_retired(&self) -> bool {
        self.validity == Validity::Retired
    }

    pub fn is_private(&self) -> bool {
        self.validity == Validity::Private
    }

    pub fn is_internal(&self) -> bool {
        self.validity == Validity::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        assert_eq!(
            entries::TRANSFER_SYNTAXES.len(),
            TransferSyntaxId::ALL.len()
        );
        for (i, ts) in entries::TRANSFER_SYNTAXES.iter().enumerate() {
            assert_eq!(ts.id() as usize, i, "entry {} is out of place", ts.name());
            assert_eq!(TransferSyntaxId::ALL[i], ts.id());
        }
    }

    #[test]
    fn uids_are_unique() {
        for ts in entries::TRANSFER_SYNTAXES {
            if ts.uid().is_empty() {
                continue;
            }
            let count = entries::TRANSFER_SYNTAXES
                .iter()
                .filter(|other| other.uid() == ts.uid())
                .count();
            assert_eq!(count, 1, "duplicate UID {}", ts.uid());
        }
    }

    #[test]
    fn from_uid_is_total() {
        assert_eq!(
            TransferSyntaxId::from_uid("1.2.840.10008.1.2.1"),
            TransferSyntaxId::ExplicitVRLittleEndian
        );
        assert_eq!(
            TransferSyntaxId::from_uid("1.2.840.10008.1.2\0"),
            TransferSyntaxId::ImplicitVRLittleEndian
        );
        assert_eq!(
            TransferSyntaxId::from_uid("1.2.840.10008.1.2.4.50 "),
            TransferSyntaxId::JpegBaseline
        );
        assert_eq!(TransferSyntaxId::from_uid("1.2.3.4"), TransferSyntaxId::Unknown);
        assert_eq!(TransferSyntaxId::from_uid(""), TransferSyntaxId::Unknown);
        // internal transfer syntaxes have no UID to resolve from
        assert_eq!(TransferSyntaxId::from_uid("\0"), TransferSyntaxId::Unknown);
    }

    #[test]
    fn unknown_descriptor() {
        let ts = TransferSyntaxId::Unknown.descriptor();
        assert!(!ts.is_known());
        assert_eq!(ts.byte_order(), None);
        assert_eq!(ts.pixel_encoding(), PixelEncoding::Unknown);
        assert!(!ts.is_pixel_data_compressed());
        assert!(!ts.is_pixel_data_fragmentable());
        assert_eq!(ts.validity(), Validity::Unknown);
    }

    #[test]
    fn derived_predicates_follow_primitives() {
        for ts in entries::TRANSFER_SYNTAXES {
            assert_eq!(
                ts.is_pixel_data_compressed(),
                matches!(
                    ts.pixel_compression(),
                    PixelCompression::Lossless | PixelCompression::Lossy
                ),
                "{}",
                ts.name()
            );
            assert_eq!(
                ts.is_lossless_compressed(),
                ts.pixel_compression() == PixelCompression::Lossless
                    || ts.stream_compression() != StreamCompression::None,
                "{}",
                ts.name()
            );
            if !ts.uses_encapsulated_format() {
                assert!(!ts.is_pixel_data_fragmentable(), "{}", ts.name());
            }
        }
    }

    #[test]
    fn base_transfer_syntaxes() {
        let ts = TransferSyntaxId::ImplicitVRLittleEndian.descriptor();
        assert!(ts.is_implicit_vr());
        assert!(ts.is_little_endian());
        assert!(ts.uses_native_format());
        assert!(ts.is_standard());

        let ts = TransferSyntaxId::ExplicitVRBigEndian.descriptor();
        assert!(ts.is_explicit_vr());
        assert!(ts.is_big_endian());
        assert!(ts.is_retired());

        let ts = TransferSyntaxId::ImplicitVRBigEndian.descriptor();
        assert!(ts.is_internal());
        assert_eq!(ts.uid(), "");

        let ts = TransferSyntaxId::DeflatedExplicitVRLittleEndian.descriptor();
        assert!(ts.uses_native_format());
        assert!(ts.is_dataset_compressed());
        assert!(ts.is_lossless_compressed());
        assert!(!ts.is_pixel_data_compressed());
    }

    #[test]
    fn encapsulated_transfer_syntaxes() {
        let ts = TransferSyntaxId::JpegBaseline.descriptor();
        assert!(ts.uses_encapsulated_format());
        assert!(ts.is_lossy_compressed());
        assert!(ts.is_pixel_data_fragmentable());

        let ts = TransferSyntaxId::EncapsulatedUncompressedExplicitVRLittleEndian.descriptor();
        assert!(ts.uses_encapsulated_format());
        assert!(ts.is_pixel_data_uncompressed());
        assert!(!ts.is_pixel_data_compressed());

        let ts = TransferSyntaxId::JpipReferenced.descriptor();
        assert!(ts.uses_referenced_pixel_data());
        assert!(!ts.uses_encapsulated_format());

        let ts = TransferSyntaxId::Mpeg2MainProfileMainLevel.descriptor();
        assert!(!ts.is_pixel_data_fragmentable());
        let ts = TransferSyntaxId::Mpeg2MainProfileMainLevelFragmentable.descriptor();
        assert!(ts.is_pixel_data_fragmentable());
    }
}
