//! The table of transfer syntax descriptors known to this library.
//!
//! The constants exported here are the descriptors of each
//! [`TransferSyntaxId`].
//! [`TRANSFER_SYNTAXES`] holds all of them,
//! in the same order as the identifiers are declared,
//! so that a descriptor can be fetched by indexing.

use super::{
    Endianness, PixelCompression, PixelEncoding, StreamCompression, TransferSyntax as Ts,
    TransferSyntaxId as Id, Validity, VrEncoding,
};

/// create a descriptor for a transfer syntax with native pixel data
const fn create_ts_native(
    id: Id,
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    vr_encoding: VrEncoding,
    validity: Validity,
) -> Ts {
    Ts::new(
        id,
        uid,
        name,
        Some(byte_order),
        vr_encoding,
        PixelEncoding::Native,
        PixelCompression::Uncompressed,
        false,
        StreamCompression::None,
        validity,
    )
}

/// create a descriptor for an explicit VR little endian transfer syntax
/// with encapsulated pixel data
const fn create_ts_encapsulated(
    id: Id,
    uid: &'static str,
    name: &'static str,
    compression: PixelCompression,
    fragmentable: bool,
    validity: Validity,
) -> Ts {
    Ts::new(
        id,
        uid,
        name,
        Some(Endianness::Little),
        VrEncoding::Explicit,
        PixelEncoding::Encapsulated,
        compression,
        fragmentable,
        StreamCompression::None,
        validity,
    )
}

/// create a descriptor for a transfer syntax with referenced pixel data
const fn create_ts_referenced(
    id: Id,
    uid: &'static str,
    name: &'static str,
    stream_compression: StreamCompression,
) -> Ts {
    Ts::new(
        id,
        uid,
        name,
        Some(Endianness::Little),
        VrEncoding::Explicit,
        PixelEncoding::Referenced,
        PixelCompression::Unknown,
        false,
        stream_compression,
        Validity::Standard,
    )
}

/// Descriptor for any transfer syntax not known to this library.
pub const UNKNOWN: Ts = Ts::new(
    Id::Unknown,
    "",
    "Unknown Transfer Syntax",
    None,
    VrEncoding::Explicit,
    PixelEncoding::Unknown,
    PixelCompression::Unknown,
    false,
    StreamCompression::None,
    Validity::Unknown,
);

// -- uncompressed transfer syntaxes --

pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = create_ts_native(
    Id::ImplicitVRLittleEndian,
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    VrEncoding::Implicit,
    Validity::Standard,
);

/// Implicit VR Big Endian is not part of the standard,
/// it only exists to describe intermediate representations.
pub const IMPLICIT_VR_BIG_ENDIAN: Ts = create_ts_native(
    Id::ImplicitVRBigEndian,
    "",
    "Implicit VR Big Endian",
    Endianness::Big,
    VrEncoding::Implicit,
    Validity::Internal,
);

pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = create_ts_native(
    Id::ExplicitVRLittleEndian,
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Endianness::Little,
    VrEncoding::Explicit,
    Validity::Standard,
);

pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = create_ts_encapsulated(
    Id::EncapsulatedUncompressedExplicitVRLittleEndian,
    "1.2.840.10008.1.2.1.98",
    "Encapsulated Uncompressed Explicit VR Little Endian",
    PixelCompression::Uncompressed,
    false,
    Validity::Standard,
);

pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    Id::DeflatedExplicitVRLittleEndian,
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    Some(Endianness::Little),
    VrEncoding::Explicit,
    PixelEncoding::Native,
    PixelCompression::Uncompressed,
    false,
    StreamCompression::Deflate,
    Validity::Standard,
);

pub const EXPLICIT_VR_BIG_ENDIAN: Ts = create_ts_native(
    Id::ExplicitVRBigEndian,
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    VrEncoding::Explicit,
    Validity::Retired,
);

// -- JPEG --

pub const JPEG_BASELINE: Ts = create_ts_encapsulated(
    Id::JpegBaseline,
    "1.2.840.10008.1.2.4.50",
    "JPEG Baseline (Process 1)",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const JPEG_EXTENDED: Ts = create_ts_encapsulated(
    Id::JpegExtended,
    "1.2.840.10008.1.2.4.51",
    "JPEG Extended (Process 2 & 4)",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const JPEG_EXTENDED_35: Ts = create_ts_encapsulated(
    Id::JpegExtended35,
    "1.2.840.10008.1.2.4.52",
    "JPEG Extended (Process 3 & 5)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_SPECTRAL_SELECTION_68: Ts = create_ts_encapsulated(
    Id::JpegSpectralSelection68,
    "1.2.840.10008.1.2.4.53",
    "JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_SPECTRAL_SELECTION_79: Ts = create_ts_encapsulated(
    Id::JpegSpectralSelection79,
    "1.2.840.10008.1.2.4.54",
    "JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_FULL_PROGRESSION_1012: Ts = create_ts_encapsulated(
    Id::JpegFullProgression1012,
    "1.2.840.10008.1.2.4.55",
    "JPEG Full Progression, Non-Hierarchical (Process 10 & 12)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_FULL_PROGRESSION_1113: Ts = create_ts_encapsulated(
    Id::JpegFullProgression1113,
    "1.2.840.10008.1.2.4.56",
    "JPEG Full Progression, Non-Hierarchical (Process 11 & 13)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_LOSSLESS: Ts = create_ts_encapsulated(
    Id::JpegLossless,
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_LOSSLESS_15: Ts = create_ts_encapsulated(
    Id::JpegLossless15,
    "1.2.840.10008.1.2.4.58",
    "JPEG Lossless, Non-Hierarchical (Process 15)",
    PixelCompression::Lossless,
    true,
    Validity::Retired,
);

pub const JPEG_EXTENDED_HIERARCHICAL_1618: Ts = create_ts_encapsulated(
    Id::JpegExtendedHierarchical1618,
    "1.2.840.10008.1.2.4.59",
    "JPEG Extended, Hierarchical (Process 16 & 18)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_EXTENDED_HIERARCHICAL_1719: Ts = create_ts_encapsulated(
    Id::JpegExtendedHierarchical1719,
    "1.2.840.10008.1.2.4.60",
    "JPEG Extended, Hierarchical (Process 17 & 19)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2022: Ts = create_ts_encapsulated(
    Id::JpegSpectralSelectionHierarchical2022,
    "1.2.840.10008.1.2.4.61",
    "JPEG Spectral Selection, Hierarchical (Process 20 & 22)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2123: Ts = create_ts_encapsulated(
    Id::JpegSpectralSelectionHierarchical2123,
    "1.2.840.10008.1.2.4.62",
    "JPEG Spectral Selection, Hierarchical (Process 21 & 23)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_2426: Ts = create_ts_encapsulated(
    Id::JpegFullProgressionHierarchical2426,
    "1.2.840.10008.1.2.4.63",
    "JPEG Full Progression, Hierarchical (Process 24 & 26)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_2527: Ts = create_ts_encapsulated(
    Id::JpegFullProgressionHierarchical2527,
    "1.2.840.10008.1.2.4.64",
    "JPEG Full Progression, Hierarchical (Process 25 & 27)",
    PixelCompression::Lossy,
    true,
    Validity::Retired,
);

pub const JPEG_LOSSLESS_HIERARCHICAL_28: Ts = create_ts_encapsulated(
    Id::JpegLosslessHierarchical28,
    "1.2.840.10008.1.2.4.65",
    "JPEG Lossless, Hierarchical (Process 28)",
    PixelCompression::Lossless,
    true,
    Validity::Retired,
);

pub const JPEG_LOSSLESS_HIERARCHICAL_29: Ts = create_ts_encapsulated(
    Id::JpegLosslessHierarchical29,
    "1.2.840.10008.1.2.4.66",
    "JPEG Lossless, Hierarchical (Process 29)",
    PixelCompression::Lossless,
    true,
    Validity::Retired,
);

pub const JPEG_LOSSLESS_SV1: Ts = create_ts_encapsulated(
    Id::JpegLosslessSv1,
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

// -- JPEG-LS --

pub const JPEG_LS_LOSSLESS: Ts = create_ts_encapsulated(
    Id::JpegLsLossless,
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_LS_NEAR_LOSSLESS: Ts = create_ts_encapsulated(
    Id::JpegLsNearLossless,
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

// -- JPEG 2000 --

pub const JPEG_2000_LOSSLESS: Ts = create_ts_encapsulated(
    Id::Jpeg2000Lossless,
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_2000: Ts = create_ts_encapsulated(
    Id::Jpeg2000,
    "1.2.840.10008.1.2.4.91",
    "JPEG 2000 Image Compression",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const JPEG_2000_MULTI_COMPONENT_LOSSLESS: Ts = create_ts_encapsulated(
    Id::Jpeg2000MultiComponentLossless,
    "1.2.840.10008.1.2.4.92",
    "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_2000_MULTI_COMPONENT: Ts = create_ts_encapsulated(
    Id::Jpeg2000MultiComponent,
    "1.2.840.10008.1.2.4.93",
    "JPEG 2000 Part 2 Multi-component Image Compression",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const JPIP_REFERENCED: Ts = create_ts_referenced(
    Id::JpipReferenced,
    "1.2.840.10008.1.2.4.94",
    "JPIP Referenced",
    StreamCompression::None,
);

pub const JPIP_REFERENCED_DEFLATE: Ts = create_ts_referenced(
    Id::JpipReferencedDeflate,
    "1.2.840.10008.1.2.4.95",
    "JPIP Referenced Deflate",
    StreamCompression::Deflate,
);

// -- MPEG video --

pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: Ts = create_ts_encapsulated(
    Id::Mpeg2MainProfileMainLevel,
    "1.2.840.10008.1.2.4.100",
    "MPEG2 Main Profile / Main Level",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg2MainProfileMainLevelFragmentable,
    "1.2.840.10008.1.2.4.100.1",
    "Fragmentable MPEG2 Main Profile / Main Level",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG2_MAIN_PROFILE_HIGH_LEVEL: Ts = create_ts_encapsulated(
    Id::Mpeg2MainProfileHighLevel,
    "1.2.840.10008.1.2.4.101",
    "MPEG2 Main Profile / High Level",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG2_MAIN_PROFILE_HIGH_LEVEL_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg2MainProfileHighLevelFragmentable,
    "1.2.840.10008.1.2.4.101.1",
    "Fragmentable MPEG2 Main Profile / High Level",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_1: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel41,
    "1.2.840.10008.1.2.4.102",
    "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_1_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel41Fragmentable,
    "1.2.840.10008.1.2.4.102.1",
    "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG4_BD_COMPATIBLE_HIGH_PROFILE_LEVEL_4_1: Ts = create_ts_encapsulated(
    Id::Mpeg4BdCompatibleHighProfileLevel41,
    "1.2.840.10008.1.2.4.103",
    "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG4_BD_COMPATIBLE_HIGH_PROFILE_LEVEL_4_1_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg4BdCompatibleHighProfileLevel41Fragmentable,
    "1.2.840.10008.1.2.4.103.1",
    "Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_2D_VIDEO: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel42For2dVideo,
    "1.2.840.10008.1.2.4.104",
    "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_2D_VIDEO_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel42For2dVideoFragmentable,
    "1.2.840.10008.1.2.4.104.1",
    "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_3D_VIDEO: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel42For3dVideo,
    "1.2.840.10008.1.2.4.105",
    "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_3D_VIDEO_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg4HighProfileLevel42For3dVideoFragmentable,
    "1.2.840.10008.1.2.4.105.1",
    "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const MPEG4_STEREO_HIGH_PROFILE_LEVEL_4_2: Ts = create_ts_encapsulated(
    Id::Mpeg4StereoHighProfileLevel42,
    "1.2.840.10008.1.2.4.106",
    "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const MPEG4_STEREO_HIGH_PROFILE_LEVEL_4_2_FRAGMENTABLE: Ts = create_ts_encapsulated(
    Id::Mpeg4StereoHighProfileLevel42Fragmentable,
    "1.2.840.10008.1.2.4.106.1",
    "Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const HEVC_MAIN_PROFILE_LEVEL_5_1: Ts = create_ts_encapsulated(
    Id::HevcMainProfileLevel51,
    "1.2.840.10008.1.2.4.107",
    "HEVC/H.265 Main Profile / Level 5.1",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

pub const HEVC_MAIN_10_PROFILE_LEVEL_5_1: Ts = create_ts_encapsulated(
    Id::HevcMain10ProfileLevel51,
    "1.2.840.10008.1.2.4.108",
    "HEVC/H.265 Main 10 Profile / Level 5.1",
    PixelCompression::Lossy,
    false,
    Validity::Standard,
);

// -- JPEG XL --

pub const JPEG_XL_LOSSLESS: Ts = create_ts_encapsulated(
    Id::JpegXlLossless,
    "1.2.840.10008.1.2.4.110",
    "JPEG XL Lossless",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_XL_JPEG_RECOMPRESSION: Ts = create_ts_encapsulated(
    Id::JpegXlJpegRecompression,
    "1.2.840.10008.1.2.4.111",
    "JPEG XL JPEG Recompression",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const JPEG_XL: Ts = create_ts_encapsulated(
    Id::JpegXl,
    "1.2.840.10008.1.2.4.112",
    "JPEG XL",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

// -- High-Throughput JPEG 2000 --

pub const HTJ2K_LOSSLESS: Ts = create_ts_encapsulated(
    Id::HtJpeg2000Lossless,
    "1.2.840.10008.1.2.4.201",
    "High-Throughput JPEG 2000 Image Compression (Lossless Only)",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const HTJ2K_RPCL_LOSSLESS: Ts = create_ts_encapsulated(
    Id::HtJpeg2000RpclLossless,
    "1.2.840.10008.1.2.4.202",
    "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)",
    PixelCompression::Lossless,
    true,
    Validity::Standard,
);

pub const HTJ2K: Ts = create_ts_encapsulated(
    Id::HtJpeg2000,
    "1.2.840.10008.1.2.4.203",
    "High-Throughput JPEG 2000 Image Compression",
    PixelCompression::Lossy,
    true,
    Validity::Standard,
);

pub const JPIP_HTJ2K_REFERENCED: Ts = create_ts_referenced(
    Id::JpipHtJpeg2000Referenced,
    "1.2.840.10008.1.2.4.204",
    "JPIP HTJ2K Referenced",
    StreamCompression::None,
);

pub const JPIP_HTJ2K_REFERENCED_DEFLATE: Ts = create_ts_referenced(
    Id::JpipHtJpeg2000ReferencedDeflate,
    "1.2.840.10008.1.2.4.205",
    "JPIP HTJ2K Referenced Deflate",
    StreamCompression::Deflate,
);

// -- others --

pub const RLE_LOSSLESS: Ts = create_ts_encapsulated(
    Id::RleLossless,
    "1.2.840.10008.1.2.5",
    "RLE Lossless",
    PixelCompression::Lossless,
    false,
    Validity::Standard,
);

pub const DEFLATED_IMAGE_FRAME_COMPRESSION: Ts = create_ts_encapsulated(
    Id::DeflatedImageFrameCompression,
    "1.2.840.10008.1.2.8.1",
    "Deflated Image Frame Compression",
    PixelCompression::Lossless,
    false,
    Validity::Standard,
);

pub const PAPYRUS_3_IMPLICIT_VR_LITTLE_ENDIAN: Ts = create_ts_native(
    Id::Papyrus3ImplicitVRLittleEndian,
    "1.2.840.10008.1.20",
    "Papyrus 3 Implicit VR Little Endian",
    Endianness::Little,
    VrEncoding::Implicit,
    Validity::Retired,
);

/// GE Private: the data set is in implicit VR little endian,
/// but the pixel data values are in big endian.
pub const PRIVATE_GE_IMPLICIT_VR_LITTLE_ENDIAN_BIG_ENDIAN_PIXEL_DATA: Ts = create_ts_native(
    Id::PrivateGeImplicitVRLittleEndianBigEndianPixelData,
    "1.2.840.113619.5.2",
    "Private GE Implicit VR Little Endian with Big Endian Pixel Data",
    Endianness::Little,
    VrEncoding::Implicit,
    Validity::Private,
);

/// All known transfer syntax descriptors,
/// indexed by [`TransferSyntaxId`](super::TransferSyntaxId).
pub static TRANSFER_SYNTAXES: &[Ts] = &[
    UNKNOWN,
    IMPLICIT_VR_LITTLE_ENDIAN,
    IMPLICIT_VR_BIG_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_EXTENDED_35,
    JPEG_SPECTRAL_SELECTION_68,
    JPEG_SPECTRAL_SELECTION_79,
    JPEG_FULL_PROGRESSION_1012,
    JPEG_FULL_PROGRESSION_1113,
    JPEG_LOSSLESS,
    JPEG_LOSSLESS_15,
    JPEG_EXTENDED_HIERARCHICAL_1618,
    JPEG_EXTENDED_HIERARCHICAL_1719,
    JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2022,
    JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2123,
    JPEG_FULL_PROGRESSION_HIERARCHICAL_2426,
    JPEG_FULL_PROGRESSION_HIERARCHICAL_2527,
    JPEG_LOSSLESS_HIERARCHICAL_28,
    JPEG_LOSSLESS_HIERARCHICAL_29,
    JPEG_LOSSLESS_SV1,
    JPEG_LS_LOSSLESS,
    JPEG_LS_NEAR_LOSSLESS,
    JPEG_2000_LOSSLESS,
    JPEG_2000,
    JPEG_2000_MULTI_COMPONENT_LOSSLESS,
    JPEG_2000_MULTI_COMPONENT,
    JPIP_REFERENCED,
    JPIP_REFERENCED_DEFLATE,
    MPEG2_MAIN_PROFILE_MAIN_LEVEL,
    MPEG2_MAIN_PROFILE_MAIN_LEVEL_FRAGMENTABLE,
    MPEG2_MAIN_PROFILE_HIGH_LEVEL,
    MPEG2_MAIN_PROFILE_HIGH_LEVEL_FRAGMENTABLE,
    MPEG4_HIGH_PROFILE_LEVEL_4_1,
    MPEG4_HIGH_PROFILE_LEVEL_4_1_FRAGMENTABLE,
    MPEG4_BD_COMPATIBLE_HIGH_PROFILE_LEVEL_4_1,
    MPEG4_BD_COMPATIBLE_HIGH_PROFILE_LEVEL_4_1_FRAGMENTABLE,
    MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_2D_VIDEO,
    MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_2D_VIDEO_FRAGMENTABLE,
    MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_3D_VIDEO,
    MPEG4_HIGH_PROFILE_LEVEL_4_2_FOR_3D_VIDEO_FRAGMENTABLE,
    MPEG4_STEREO_HIGH_PROFILE_LEVEL_4_2,
    MPEG4_STEREO_HIGH_PROFILE_LEVEL_4_2_FRAGMENTABLE,
    HEVC_MAIN_PROFILE_LEVEL_5_1,
    HEVC_MAIN_10_PROFILE_LEVEL_5_1,
    JPEG_XL_LOSSLESS,
    JPEG_XL_JPEG_RECOMPRESSION,
    JPEG_XL,
    HTJ2K_LOSSLESS,
    HTJ2K_RPCL_LOSSLESS,
    HTJ2K,
    JPIP_HTJ2K_REFERENCED,
    JPIP_HTJ2K_REFERENCED_DEFLATE,
    RLE_LOSSLESS,
    DEFLATED_IMAGE_FRAME_COMPRESSION,
    PAPYRUS_3_IMPLICIT_VR_LITTLE_ENDIAN,
    PRIVATE_GE_IMPLICIT_VR_LITTLE_ENDIAN_BIG_ENDIAN_PIXEL_DATA,
];
