//! Stream integration of pixel data elements.
//!
//! A [`PixelDataElement`] is fed with the value of a _Pixel Data_ element
//! while a data set is being parsed,
//! either through the event methods
//! ([`on_parse_begin`](PixelDataElement::on_parse_begin),
//! [`on_bytes`](PixelDataElement::on_bytes),
//! [`on_parse_end`](PixelDataElement::on_parse_end))
//! or directly from a byte source with
//! [`read_from`](PixelDataElement::read_from).
//! It can then be written in any transfer syntax
//! for which a representation is already available.
//!
//! The element follows a transfer state machine:
//! it starts in the [`Init`](TransferState::Init) state,
//! enters [`InWork`](TransferState::InWork) when parsing begins,
//! and becomes [`Ready`](TransferState::Ready) once parsing is complete.
//! [`transfer_end`](PixelDataElement::transfer_end)
//! puts it out of service until the next
//! [`transfer_init`](PixelDataElement::transfer_init).

use std::convert::TryFrom;
use crate::error::{
    CorruptedDataSnafu, IllegalCallSnafu, IoSnafu, MemoryExhaustedSnafu,
    RepresentationNotFoundSnafu, Result,
};
use crate::key::RepresentationKey;
use crate::store::{Designation, Representation, RepresentationStore};
use crate::transcode;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::ByteOrdered;
use dicom_core::header::SequenceItemHeader;
use dicom_core::{Length, Tag, VR};
use dicom_pixrep_encoding::adapters::{
    EncapsulatedPixelData, NativePixelData, RepresentationParameter, RepresentationParams,
};
use dicom_pixrep_encoding::TransferSyntaxId;
use dicom_pixrep_registry::{CodecIndex, CodecRegistry};
use snafu::{ensure, OptionExt, ResultExt};
use std::io::{Read, Write};

/// The item tag of an encapsulated pixel data sequence.
const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// The sequence delimitation tag of an encapsulated pixel data sequence.
const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

/// The transfer state of a pixel data element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransferState {
    /// Out of service: reading and writing are illegal.
    NotInitialized,
    /// Ready to begin a transfer.
    Init,
    /// Parsing is in progress.
    InWork,
    /// Parsing is complete.
    Ready,
}

/// Options for reading pixel data from a byte source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ReadOptions {
    /// The maximum length of a single item (or of the whole native value).
    /// Bigger items are rejected as corrupted.
    pub max_fragment_length: u32,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            max_fragment_length: u32::MAX - 1,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum length of a single item.
    pub fn max_fragment_length(mut self, max_fragment_length: u32) -> Self {
        self.max_fragment_length = max_fragment_length;
        self
    }
}

/// Progress of the value being parsed.
#[derive(Debug, Clone)]
enum Progress {
    Native {
        ts: TransferSyntaxId,
        declared: u32,
    },
    Encapsulated {
        offset_table_seen: bool,
    },
}

/// A pixel data element holding several representations of the same pixel data.
#[derive(Debug, Clone)]
pub struct PixelDataElement {
    store: RepresentationStore,
    state: TransferState,
    native_vr: VR,
    progress: Option<Progress>,
}

impl Default for PixelDataElement {
    fn default() -> Self {
        PixelDataElement {
            store: RepresentationStore::new(),
            state: TransferState::Init,
            native_vr: VR::OW,
            progress: None,
        }
    }
}

impl PixelDataElement {
    /// Create an empty pixel data element, ready for a transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pixel data element with the given native pixel data.
    pub fn from_native(native: NativePixelData) -> Self {
        let mut element = Self::new();
        element.put_native(native);
        element
    }

    /// The representation store of this element.
    pub fn store(&self) -> &RepresentationStore {
        &self.store
    }

    pub fn transfer_state(&self) -> TransferState {
        self.state
    }

    /// Prepare the element for a new transfer.
    ///
    /// An unfinished parse is abandoned,
    /// leaving the element without pixel data.
    pub fn transfer_init(&mut self) {
        if self.progress.take().is_some() {
            self.store.clear();
        }
        self.state = TransferState::Init;
    }

    /// Put the element out of service until the next [`transfer_init`](Self::transfer_init).
    pub fn transfer_end(&mut self) {
        if self.progress.take().is_some() {
            self.store.clear();
        }
        self.state = TransferState::NotInitialized;
    }

    // --- parsing ---

    /// Begin parsing the value of the element,
    /// encoded in the transfer syntax `ts` with the given declared length.
    ///
    /// Any pixel data previously held is discarded.
    /// If `ts` uses encapsulated pixel data,
    /// an empty representation is immediately inserted
    /// and designated as the original and current representation,
    /// so that a partially read element is visible in place.
    /// Otherwise, the value is read into the native buffer,
    /// which requires a defined length.
    pub fn on_parse_begin(&mut self, ts: TransferSyntaxId, declared_length: Length) -> Result<()> {
        self.begin(ts, declared_length, u32::MAX)
    }

    /// Begin parsing, rejecting native values longer than `max_native_length`
    /// before any memory is reserved for them.
    fn begin(
        &mut self,
        ts: TransferSyntaxId,
        declared_length: Length,
        max_native_length: u32,
    ) -> Result<()> {
        ensure!(
            self.state == TransferState::Init,
            IllegalCallSnafu {
                reason: "pixel data element is not ready for reading"
            }
        );

        let progress = if ts.descriptor().uses_encapsulated_format() {
            self.store.replace_original(Representation::new(
                RepresentationKey::from(ts),
                EncapsulatedPixelData::new_fragments(Vec::new()),
            ))?;
            Progress::Encapsulated {
                offset_table_seen: false,
            }
        } else {
            let declared = declared_length.get().context(CorruptedDataSnafu {
                reason: "native pixel data of undefined length",
            })?;
            ensure!(
                declared <= max_native_length,
                CorruptedDataSnafu {
                    reason: format!(
                        "native pixel data of {} bytes exceeds the maximum of {}",
                        declared, max_native_length
                    ),
                }
            );
            let mut native = NativePixelData::empty(self.native_vr);
            native
                .try_reserve(declared as usize)
                .context(MemoryExhaustedSnafu)?;
            self.store.set_native(native);
            Progress::Native { ts, declared }
        };

        self.progress = Some(progress);
        self.state = TransferState::InWork;
        Ok(())
    }

    /// Feed a piece of the element's value.
    ///
    /// For native pixel data, the bytes are appended to the native buffer.
    /// For encapsulated pixel data, each call provides the value of one item:
    /// the first one is the basic offset table,
    /// and the following ones are pixel data fragments.
    ///
    /// Any error aborts the parse, leaving the element empty.
    pub fn on_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        ensure!(
            self.state == TransferState::InWork,
            IllegalCallSnafu {
                reason: "pixel data element is not being read"
            }
        );
        let res = self.feed(bytes);
        self.abort_on_error(res)
    }

    fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        match &mut self.progress {
            Some(Progress::Native { declared, .. }) => {
                let declared = *declared as usize;
                let native = self.store.native_mut().context(IllegalCallSnafu {
                    reason: "native pixel data is missing",
                })?;
                ensure!(
                    native.len() + bytes.len() <= declared,
                    CorruptedDataSnafu {
                        reason: format!(
                            "pixel data exceeds the declared length of {} bytes",
                            declared
                        ),
                    }
                );
                native
                    .try_extend_from_slice(bytes)
                    .context(MemoryExhaustedSnafu)
            }
            Some(Progress::Encapsulated { offset_table_seen }) => {
                let first = !*offset_table_seen;
                *offset_table_seen = true;
                let pixels = self.in_progress_pixels()?;
                if first {
                    ensure!(
                        bytes.len() % 4 == 0,
                        CorruptedDataSnafu {
                            reason: format!(
                                "basic offset table length {} is not a multiple of 4",
                                bytes.len()
                            ),
                        }
                    );
                    pixels
                        .offset_table_mut()
                        .extend(bytes.chunks_exact(4).map(LittleEndian::read_u32));
                } else {
                    let mut fragment = Vec::new();
                    fragment
                        .try_reserve_exact(bytes.len())
                        .context(MemoryExhaustedSnafu)?;
                    fragment.extend_from_slice(bytes);
                    pixels.fragments_mut().push(fragment);
                }
                Ok(())
            }
            None => IllegalCallSnafu {
                reason: "pixel data element is not being read",
            }
            .fail(),
        }
    }

    fn in_progress_pixels(&mut self) -> Result<&mut EncapsulatedPixelData> {
        let h = match self.store.original() {
            Designation::Entry(h) => h,
            _ => {
                return IllegalCallSnafu {
                    reason: "encapsulated pixel data is missing",
                }
                .fail()
            }
        };
        self.store
            .get_mut(h)
            .map(|r| r.pixels_mut())
            .context(IllegalCallSnafu {
                reason: "encapsulated pixel data is missing",
            })
    }

    /// Finish parsing the element's value.
    pub fn on_parse_end(&mut self) -> Result<()> {
        ensure!(
            self.state == TransferState::InWork,
            IllegalCallSnafu {
                reason: "pixel data element is not being read"
            }
        );
        let res = self.finish_parse();
        self.abort_on_error(res)?;
        self.progress = None;
        self.state = TransferState::Ready;
        Ok(())
    }

    fn finish_parse(&mut self) -> Result<()> {
        match self.progress.clone() {
            Some(Progress::Native { ts, declared }) => {
                let native = self.store.native_mut().context(IllegalCallSnafu {
                    reason: "native pixel data is missing",
                })?;
                ensure!(
                    native.len() == declared as usize,
                    CorruptedDataSnafu {
                        reason: format!(
                            "expected {} bytes of pixel data, got {}",
                            declared,
                            native.len()
                        ),
                    }
                );
                if ts.descriptor().is_big_endian() && native.vr() == VR::OW {
                    // keep native pixel data in little endian
                    for word in native.data_mut().chunks_exact_mut(2) {
                        word.swap(0, 1);
                    }
                }
                Ok(())
            }
            Some(Progress::Encapsulated { offset_table_seen }) => {
                ensure!(
                    offset_table_seen,
                    CorruptedDataSnafu {
                        reason: "missing basic offset table item",
                    }
                );
                Ok(())
            }
            None => IllegalCallSnafu {
                reason: "pixel data element is not being read",
            }
            .fail(),
        }
    }

    fn abort_on_error<T>(&mut self, res: Result<T>) -> Result<T> {
        if res.is_err() {
            self.store.clear();
            self.progress = None;
            self.state = TransferState::Init;
        }
        res
    }

    /// Read the element's value from a byte source,
    /// encoded in the transfer syntax `ts` with the given declared length.
    ///
    /// Encapsulated pixel data is read item by item
    /// until the sequence delimiter.
    pub fn read_from<R>(
        &mut self,
        reader: R,
        ts: TransferSyntaxId,
        declared_length: Length,
        options: &ReadOptions,
    ) -> Result<()>
    where
        R: Read,
    {
        self.begin(ts, declared_length, options.max_fragment_length)?;
        let res = self.read_value(reader, ts, declared_length, options);
        self.abort_on_error(res)?;
        self.on_parse_end()
    }

    fn read_value<R>(
        &mut self,
        mut reader: R,
        ts: TransferSyntaxId,
        declared_length: Length,
        options: &ReadOptions,
    ) -> Result<()>
    where
        R: Read,
    {
        if !ts.descriptor().uses_encapsulated_format() {
            let len = declared_length.get().unwrap_or(0);
            let value = read_item(&mut reader, len, options)?;
            return self.feed(&value);
        }

        loop {
            let mut source = ByteOrdered::le(&mut reader);
            let group = source.read_u16().context(IoSnafu)?;
            let element = source.read_u16().context(IoSnafu)?;
            let len = source.read_u32().context(IoSnafu)?;
            let header = SequenceItemHeader::new(Tag(group, element), Length(len)).map_err(|e| {
                CorruptedDataSnafu {
                    reason: e.to_string(),
                }
                .build()
            })?;
            match header {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(CorruptedDataSnafu {
                        reason: "pixel data item of undefined length",
                    })?;
                    let value = read_item(&mut reader, len, options)?;
                    self.feed(&value)?;
                }
                SequenceItemHeader::SequenceDelimiter => return Ok(()),
                SequenceItemHeader::ItemDelimiter => {
                    return CorruptedDataSnafu {
                        reason: "unexpected item delimiter in pixel data",
                    }
                    .fail()
                }
            }
        }
    }

    // --- writing ---

    /// Write the element's value in the transfer syntax `ts`.
    ///
    /// This never produces a new representation:
    /// an encapsulated representation conforming to `ts`
    /// (or native pixel data if `ts` is not encapsulated)
    /// must already exist, and it becomes the current representation.
    /// An element without any pixel data writes nothing.
    pub fn write_to<W>(&mut self, mut writer: W, ts: TransferSyntaxId) -> Result<()>
    where
        W: Write,
    {
        self.check_writable()?;

        if ts.descriptor().uses_encapsulated_format() {
            let h = self
                .store
                .find_conforming(ts, None)
                .context(RepresentationNotFoundSnafu { ts })?;
            self.store.set_current(Designation::Entry(h))?;
            let pixels = self
                .store
                .get(h)
                .map(|r| r.pixels())
                .context(RepresentationNotFoundSnafu { ts })?;
            write_encapsulated(&mut writer, pixels)
        } else if self.store.has_native() {
            self.store.set_current(Designation::Native)?;
            let native = self
                .store
                .native()
                .context(RepresentationNotFoundSnafu { ts })?;
            write_native(&mut writer, native, ts).context(IoSnafu)
        } else if self.store.is_empty() {
            Ok(())
        } else {
            RepresentationNotFoundSnafu { ts }.fail()
        }
    }

    /// Write the element's value in the transfer syntax `ts`
    /// to a new byte vector.
    pub fn request_write(&mut self, ts: TransferSyntaxId) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out, ts)?;
        Ok(out)
    }

    fn check_writable(&self) -> Result<()> {
        match self.state {
            TransferState::NotInitialized => IllegalCallSnafu {
                reason: "pixel data element is not initialized",
            }
            .fail(),
            TransferState::InWork => IllegalCallSnafu {
                reason: "pixel data element is still being read",
            }
            .fail(),
            TransferState::Init | TransferState::Ready => Ok(()),
        }
    }

    /// Whether the element can be written in the transfer syntax `ts`
    /// without producing a new representation.
    pub fn can_write(&self, ts: TransferSyntaxId) -> bool {
        if self.check_writable().is_err() {
            return false;
        }
        if ts.descriptor().uses_encapsulated_format() {
            self.store.find_conforming(ts, None).is_some()
        } else {
            self.store.has_native() || self.store.is_empty()
        }
    }

    /// The number of bytes that writing the value in `ts` would produce.
    pub fn encoded_value_length(&self, ts: TransferSyntaxId) -> Result<u64> {
        if ts.descriptor().uses_encapsulated_format() {
            let pixels = self
                .store
                .find_conforming(ts, None)
                .and_then(|h| self.store.get(h))
                .map(|r| r.pixels())
                .context(RepresentationNotFoundSnafu { ts })?;
            Ok(encapsulated_length(pixels))
        } else if let Some(native) = self.store.native() {
            Ok(even(native.len() as u64))
        } else if self.store.is_empty() {
            Ok(0)
        } else {
            RepresentationNotFoundSnafu { ts }.fail()
        }
    }

    /// The value representation of the element in its current representation:
    /// `OB` if encapsulated, the native VR otherwise.
    pub fn vr(&self) -> VR {
        match self.store.current() {
            Designation::Entry(_) => VR::OB,
            _ => self.native_vr,
        }
    }

    /// The value length of the element in its current representation.
    ///
    /// Fails if native pixel data is too long for a defined length.
    pub fn length(&self) -> Result<Length> {
        match self.store.current() {
            Designation::Entry(_) => Ok(Length::UNDEFINED),
            Designation::Native => {
                let len = self.store.native().map_or(0, |n| n.len() as u64);
                defined_length(even(len)).map(Length)
            }
            Designation::None => Ok(Length(0)),
        }
    }

    /// Set the value representation of native pixel data (`OB` or `OW`).
    pub fn set_native_vr(&mut self, vr: VR) -> Result<()> {
        ensure!(
            vr == VR::OB || vr == VR::OW,
            IllegalCallSnafu {
                reason: "native pixel data must be OB or OW"
            }
        );
        self.native_vr = vr;
        if let Some(native) = self.store.native_mut() {
            native.set_vr(vr);
        }
        Ok(())
    }

    // --- representations ---

    /// Replace the element's pixel data with native pixel data,
    /// discarding every other representation.
    pub fn put_native(&mut self, native: NativePixelData) {
        self.native_vr = native.vr();
        self.store.set_native(native);
    }

    /// Replace the element's pixel data with 16-bit native samples.
    pub fn put_native_words(&mut self, words: &[u16]) {
        self.put_native(NativePixelData::from_words(words));
    }

    /// Replace the element's pixel data with 8-bit native samples.
    pub fn put_native_bytes(&mut self, bytes: Vec<u8>) {
        self.put_native(NativePixelData::from_bytes(bytes));
    }

    /// Replace the element's pixel data with an encapsulated representation,
    /// which becomes the original and current representation.
    pub fn put_original_representation(
        &mut self,
        key: RepresentationKey,
        pixels: EncapsulatedPixelData,
    ) -> Result<()> {
        self.store
            .replace_original(Representation::new(key, pixels))
            .map(|_| ())
    }

    /// Make the representation `(ts, params)` the current one,
    /// producing it with the codecs of the global registry if necessary.
    ///
    /// Without a global registry, only existing representations can be chosen.
    pub fn choose_representation(
        &mut self,
        ts: TransferSyntaxId,
        params: Option<RepresentationParams>,
    ) -> Result<()> {
        let key = RepresentationKey::new(ts, params);
        match dicom_pixrep_registry::global() {
            Some(registry) => self.choose_representation_with(&key, &*registry),
            None => self.choose_representation_with(&key, &CodecRegistry::new()),
        }
    }

    /// Make the given representation the current one,
    /// producing it with the given codecs if necessary.
    ///
    /// On failure, the element is left unchanged.
    pub fn choose_representation_with<C>(&mut self, key: &RepresentationKey, codecs: &C) -> Result<()>
    where
        C: CodecIndex + ?Sized,
    {
        transcode::choose_representation(&mut self.store, key, codecs)
    }

    /// Check whether the representation `(ts, params)` can be chosen
    /// with the codecs of the global registry.
    pub fn can_choose_representation(
        &self,
        ts: TransferSyntaxId,
        params: Option<RepresentationParams>,
    ) -> bool {
        let key = RepresentationKey::new(ts, params);
        match dicom_pixrep_registry::global() {
            Some(registry) => self.can_choose_representation_with(&key, &*registry),
            None => self.can_choose_representation_with(&key, &CodecRegistry::new()),
        }
    }

    /// Check whether the given representation can be chosen
    /// with the given codecs.
    pub fn can_choose_representation_with<C>(&self, key: &RepresentationKey, codecs: &C) -> bool
    where
        C: CodecIndex + ?Sized,
    {
        transcode::can_choose_representation(&self.store, key, codecs)
    }

    /// Whether a representation in `ts` is available,
    /// with the given parameters or any parameters if `params` is `None`.
    pub fn has_representation(
        &self,
        ts: TransferSyntaxId,
        params: Option<&dyn RepresentationParameter>,
    ) -> bool {
        if ts.descriptor().uses_encapsulated_format() {
            self.store.find_conforming(ts, params).is_some()
        } else {
            self.store.has_native()
        }
    }

    /// The key of the original representation, if any.
    pub fn original_key(&self) -> Option<RepresentationKey> {
        self.store.original_key()
    }

    /// The key of the current representation, if any.
    pub fn current_key(&self) -> Option<RepresentationKey> {
        self.store.current_key()
    }

    /// Obtain the encapsulated pixel data with exactly the given key.
    pub fn encapsulated_representation(
        &self,
        key: &RepresentationKey,
    ) -> Result<&EncapsulatedPixelData> {
        self.store.encapsulated_representation(key)
    }

    /// Obtain the native pixel data, if present.
    pub fn native_pixel_data(&self) -> Option<&NativePixelData> {
        self.store.native_pixel_data()
    }

    /// See [`RepresentationStore::remove_representation`].
    pub fn remove_representation(&mut self, key: &RepresentationKey) -> Result<()> {
        self.store.remove_representation(key)
    }

    /// See [`RepresentationStore::remove_original_representation`].
    pub fn remove_original_representation(&mut self, key: &RepresentationKey) -> Result<()> {
        self.store.remove_original_representation(key)
    }

    /// See [`RepresentationStore::remove_all_but_current`].
    pub fn remove_all_but_current(&mut self) -> Result<()> {
        self.store.remove_all_but_current()
    }

    /// See [`RepresentationStore::remove_all_but_original`].
    pub fn remove_all_but_original(&mut self) -> Result<()> {
        self.store.remove_all_but_original()
    }

    /// See [`RepresentationStore::set_current_representation_parameter`].
    pub fn set_current_representation_parameter(
        &mut self,
        params: Option<RepresentationParams>,
    ) -> Result<()> {
        self.store.set_current_representation_parameter(params)
    }
}

fn even(len: u64) -> u64 {
    (len + 1) & !1
}

fn read_item<R>(reader: &mut R, len: u32, options: &ReadOptions) -> Result<Vec<u8>>
where
    R: Read,
{
    ensure!(
        len <= options.max_fragment_length,
        CorruptedDataSnafu {
            reason: format!(
                "pixel data item of {} bytes exceeds the maximum of {}",
                len, options.max_fragment_length
            ),
        }
    );
    let mut value = Vec::new();
    value
        .try_reserve_exact(len as usize)
        .context(MemoryExhaustedSnafu)?;
    reader
        .take(u64::from(len))
        .read_to_end(&mut value)
        .context(IoSnafu)?;
    ensure!(
        value.len() == len as usize,
        CorruptedDataSnafu {
            reason: "unexpected end of pixel data",
        }
    );
    Ok(value)
}

fn encapsulated_length(pixels: &EncapsulatedPixelData) -> u64 {
    let offset_table = 8 + 4 * pixels.offset_table().len() as u64;
    let fragments: u64 = pixels
        .fragments()
        .iter()
        .map(|f| 8 + even(f.len() as u64))
        .sum();
    // plus the sequence delimiter
    offset_table + fragments + 8
}

fn write_item_header<W>(writer: &mut W, tag: Tag, len: u32) -> std::io::Result<()>
where
    W: Write,
{
    let mut to = ByteOrdered::le(writer);
    to.write_u16(tag.group())?;
    to.write_u16(tag.element())?;
    to.write_u32(len)
}

/// Convert a value length to a defined 32-bit length.
fn defined_length(len: u64) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len != u32::MAX)
        .context(CorruptedDataSnafu {
            reason: format!("value of {} bytes is too long for a defined length", len),
        })
}

fn write_encapsulated<W>(writer: &mut W, pixels: &EncapsulatedPixelData) -> Result<()>
where
    W: Write,
{
    // nothing is written unless every item fits
    let offset_table = pixels.offset_table();
    let table_length = defined_length(4 * offset_table.len() as u64)?;
    let fragment_lengths = pixels
        .fragments()
        .iter()
        .map(|f| defined_length(even(f.len() as u64)))
        .collect::<Result<Vec<_>>>()?;

    write_item_header(writer, ITEM, table_length).context(IoSnafu)?;
    for offset in offset_table {
        ByteOrdered::le(&mut *writer)
            .write_u32(*offset)
            .context(IoSnafu)?;
    }
    for (fragment, len) in pixels.fragments().iter().zip(fragment_lengths) {
        write_item_header(writer, ITEM, len).context(IoSnafu)?;
        writer.write_all(fragment).context(IoSnafu)?;
        if fragment.len() % 2 == 1 {
            writer.write_all(&[0]).context(IoSnafu)?;
        }
    }
    write_item_header(writer, SEQUENCE_DELIMITER, 0).context(IoSnafu)
}

fn write_native<W>(writer: &mut W, native: &NativePixelData, ts: TransferSyntaxId) -> std::io::Result<()>
where
    W: Write,
{
    if ts.descriptor().is_big_endian() && native.vr() == VR::OW {
        let mut to = ByteOrdered::be(&mut *writer);
        for pair in native.data().chunks(2) {
            let word = if pair.len() == 2 {
                LittleEndian::read_u16(pair)
            } else {
                u16::from(pair[0])
            };
            to.write_u16(word)?;
        }
        return Ok(());
    }
    writer.write_all(native.data())?;
    if native.len() % 2 == 1 {
        writer.write_all(&[0])?;
    }
    Ok(())
}
