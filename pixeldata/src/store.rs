//! The representation store of a pixel data element.
//!
//! A [`RepresentationStore`] holds every encapsulated representation
//! of the same pixel data known so far,
//! plus at most one native (unencapsulated) buffer.
//! Two of these forms are designated at any time:
//! the _original_ representation,
//! which the data was first read or constructed in,
//! and the _current_ representation,
//! which was selected most recently.
//!
//! Encapsulated representations live in an arena
//! and are referred to by generation-checked [`Handle`]s,
//! so that a handle to a removed representation
//! can never resolve to another one.
//! The store also keeps the representations sorted by transfer syntax
//! (ties in insertion order),
//! so that a lookup by key only scans the entries of one transfer syntax.

use crate::error::{Error, IllegalCallSnafu, RepresentationNotFoundSnafu, Result};
use crate::key::RepresentationKey;
use dicom_pixrep_encoding::adapters::{
    params_eq, EncapsulatedPixelData, NativePixelData, RepresentationParameter,
    RepresentationParams,
};
use dicom_pixrep_encoding::TransferSyntaxId;
use snafu::{ensure, OptionExt};

/// One cached encapsulated form of pixel data.
#[derive(Debug, Clone)]
pub struct Representation {
    key: RepresentationKey,
    pixels: EncapsulatedPixelData,
}

impl Representation {
    pub fn new(key: RepresentationKey, pixels: EncapsulatedPixelData) -> Self {
        Representation { key, pixels }
    }

    pub fn key(&self) -> &RepresentationKey {
        &self.key
    }

    pub fn ts(&self) -> TransferSyntaxId {
        self.key.ts()
    }

    pub fn params(&self) -> Option<&dyn RepresentationParameter> {
        self.key.params()
    }

    /// The encapsulated pixel data of this representation.
    pub fn pixels(&self) -> &EncapsulatedPixelData {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut EncapsulatedPixelData {
        &mut self.pixels
    }

    pub fn into_parts(self) -> (RepresentationKey, EncapsulatedPixelData) {
        (self.key, self.pixels)
    }
}

/// A generation-checked reference to a representation in a store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

/// What the original or the current representation of a store refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Designation {
    /// Nothing is designated.
    None,
    /// The native pixel data buffer.
    Native,
    /// An encapsulated representation.
    Entry(Handle),
}

impl Default for Designation {
    fn default() -> Self {
        Designation::None
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    entry: Option<Representation>,
}

/// The cache of all representations of a pixel data element.
///
/// Cloning a store yields an independent deep copy,
/// in which the same handles and designations remain valid.
#[derive(Debug, Clone, Default)]
pub struct RepresentationStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// live handles sorted by transfer syntax, then by insertion
    order: Vec<Handle>,
    native: Option<NativePixelData>,
    original: Designation,
    current: Designation,
}

impl RepresentationStore {
    /// Create an empty store, with no original nor current representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of encapsulated representations in the store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no pixel data at all,
    /// neither encapsulated nor native.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.native.is_none()
    }

    /// Resolve a handle into the representation it refers to.
    pub fn get(&self, handle: Handle) -> Option<&Representation> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut Representation> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    /// Iterate over all encapsulated representations,
    /// sorted by transfer syntax.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &Representation)> + '_ {
        self.order
            .iter()
            .filter_map(move |h| self.get(*h).map(|r| (*h, r)))
    }

    pub fn native(&self) -> Option<&NativePixelData> {
        self.native.as_ref()
    }

    pub(crate) fn native_mut(&mut self) -> Option<&mut NativePixelData> {
        self.native.as_mut()
    }

    pub fn has_native(&self) -> bool {
        self.native.is_some()
    }

    pub fn original(&self) -> Designation {
        self.original
    }

    pub fn current(&self) -> Designation {
        self.current
    }

    /// The key of the original representation,
    /// or `None` if there is no original representation.
    pub fn original_key(&self) -> Option<RepresentationKey> {
        self.designation_key(self.original)
    }

    /// The key of the current representation,
    /// or `None` if there is no current representation.
    pub fn current_key(&self) -> Option<RepresentationKey> {
        self.designation_key(self.current)
    }

    fn designation_key(&self, designation: Designation) -> Option<RepresentationKey> {
        match designation {
            Designation::None => None,
            Designation::Native => Some(RepresentationKey::native()),
            Designation::Entry(h) => self.get(h).map(|r| r.key().clone()),
        }
    }

    fn is_valid(&self, designation: Designation) -> bool {
        match designation {
            Designation::None => true,
            Designation::Native => self.native.is_some(),
            Designation::Entry(h) => self.get(h).is_some(),
        }
    }

    /// Designate the current representation.
    pub(crate) fn set_current(&mut self, designation: Designation) -> Result<()> {
        ensure!(
            self.is_valid(designation),
            IllegalCallSnafu {
                reason: "designated representation does not exist"
            }
        );
        self.current = designation;
        Ok(())
    }

    fn ts_of(&self, handle: &Handle) -> TransferSyntaxId {
        self.get(*handle)
            .map(|r| r.ts())
            .unwrap_or(TransferSyntaxId::Unknown)
    }

    /// The position in `order` where the run of `ts` starts.
    fn run_start(&self, ts: TransferSyntaxId) -> usize {
        self.order.partition_point(|h| self.ts_of(h) < ts)
    }

    /// The position in `order` right after the run of `ts`.
    fn run_end(&self, ts: TransferSyntaxId) -> usize {
        self.order.partition_point(|h| self.ts_of(h) <= ts)
    }

    /// Find the representation with exactly the given transfer syntax
    /// and parameters.
    pub fn find(
        &self,
        ts: TransferSyntaxId,
        params: Option<&dyn RepresentationParameter>,
    ) -> Option<Handle> {
        self.order[self.run_start(ts)..]
            .iter()
            .take_while(|h| self.ts_of(h) == ts)
            .find(|h| {
                self.get(**h)
                    .map_or(false, |r| params_eq(r.params(), params))
            })
            .copied()
    }

    /// Find the representation with the given key.
    pub fn find_by_key(&self, key: &RepresentationKey) -> Option<Handle> {
        self.find(key.ts(), key.params())
    }

    /// Find an encapsulated representation in the given transfer syntax
    /// with the given parameters,
    /// or with any parameters if `params` is `None`.
    ///
    /// The current representation is preferred.
    pub fn find_conforming(
        &self,
        ts: TransferSyntaxId,
        params: Option<&dyn RepresentationParameter>,
    ) -> Option<Handle> {
        let conforms = |r: &Representation| {
            r.ts() == ts
                && params.map_or(true, |p| r.params().map_or(false, |q| q.dyn_eq(p)))
        };

        if let Designation::Entry(h) = self.current {
            if self.get(h).map_or(false, conforms) {
                return Some(h);
            }
        }

        self.order[self.run_start(ts)..]
            .iter()
            .take_while(|h| self.ts_of(h) == ts)
            .find(|h| self.get(**h).map_or(false, conforms))
            .copied()
    }

    /// Whether a representation with the given key exists.
    ///
    /// For native keys, this checks the presence of the native buffer.
    pub fn has_representation(&self, key: &RepresentationKey) -> bool {
        if key.is_encapsulated() {
            self.find_by_key(key).is_some()
        } else {
            self.has_native()
        }
    }

    /// Insert an encapsulated representation.
    ///
    /// If a representation with the same key already exists,
    /// it is replaced in place and its handle is kept,
    /// so designations referring to it see the new payload.
    pub fn insert(&mut self, representation: Representation) -> Result<Handle> {
        ensure!(
            representation.key().is_encapsulated(),
            IllegalCallSnafu {
                reason: "only encapsulated representations can be stored"
            }
        );

        if let Some(h) = self.find_by_key(representation.key()) {
            if let Some(entry) = self.get_mut(h) {
                *entry = representation;
            }
            return Ok(h);
        }

        let ts = representation.ts();
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(representation);
                Handle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(representation),
                });
                Handle {
                    index,
                    generation: 0,
                }
            }
        };

        let at = self.run_end(ts);
        self.order.insert(at, handle);
        Ok(handle)
    }

    /// Remove an encapsulated representation from the store,
    /// clearing any designation referring to it.
    fn take(&mut self, handle: Handle) -> Option<Representation> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.order.retain(|h| *h != handle);

        if self.original == Designation::Entry(handle) {
            self.original = Designation::None;
        }
        if self.current == Designation::Entry(handle) {
            self.current = Designation::None;
        }
        Some(entry)
    }

    /// Remove every encapsulated representation except the given one.
    fn retain_only(&mut self, keep: Option<Handle>) {
        let remove: Vec<Handle> = self
            .order
            .iter()
            .copied()
            .filter(|h| Some(*h) != keep)
            .collect();
        for h in remove {
            self.take(h);
        }
    }

    fn drop_native(&mut self) {
        self.native = None;
        if self.original == Designation::Native {
            self.original = Designation::None;
        }
        if self.current == Designation::Native {
            self.current = Designation::None;
        }
    }

    /// Remove all pixel data from the store.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.order.clear();
        self.native = None;
        self.original = Designation::None;
        self.current = Designation::None;
    }

    /// Replace all pixel data with the given native pixel data,
    /// which becomes the original and current representation.
    ///
    /// All encapsulated representations are discarded.
    pub fn set_native(&mut self, native: NativePixelData) {
        self.retain_only(None);
        self.native = Some(native);
        self.original = Designation::Native;
        self.current = Designation::Native;
    }

    /// Install a native buffer derived from the original representation,
    /// keeping every other representation and designation.
    pub(crate) fn install_native(&mut self, native: NativePixelData) {
        self.native = Some(native);
    }

    /// Replace all pixel data with the given encapsulated representation,
    /// which becomes the original and current representation.
    pub fn replace_original(&mut self, representation: Representation) -> Result<Handle> {
        ensure!(
            representation.key().is_encapsulated(),
            IllegalCallSnafu {
                reason: "only encapsulated representations can be stored"
            }
        );
        self.clear();
        let h = self.insert(representation)?;
        self.original = Designation::Entry(h);
        self.current = Designation::Entry(h);
        Ok(h)
    }

    /// Remove the original representation.
    ///
    /// If it was also the current representation,
    /// the store is left without a current representation.
    pub fn remove_original(&mut self) -> Result<()> {
        match self.original {
            Designation::None => IllegalCallSnafu {
                reason: "there is no original representation",
            }
            .fail(),
            Designation::Native => {
                self.drop_native();
                Ok(())
            }
            Designation::Entry(h) => {
                self.take(h);
                Ok(())
            }
        }
    }

    /// Obtain the pixel data of the encapsulated representation
    /// with exactly the given key.
    pub fn encapsulated_representation(
        &self,
        key: &RepresentationKey,
    ) -> Result<&EncapsulatedPixelData> {
        self.find_by_key(key)
            .and_then(|h| self.get(h))
            .map(|r| r.pixels())
            .context(RepresentationNotFoundSnafu { ts: key.ts() })
    }

    /// Obtain the native pixel data, if present.
    pub fn native_pixel_data(&self) -> Option<&NativePixelData> {
        self.native()
    }

    /// Remove a representation which is not the original one.
    ///
    /// If it was the current representation,
    /// the original becomes the current one.
    pub fn remove_representation(&mut self, key: &RepresentationKey) -> Result<()> {
        if key.is_encapsulated() {
            let h = self
                .find_by_key(key)
                .context(RepresentationNotFoundSnafu { ts: key.ts() })?;
            if self.original == Designation::Entry(h) {
                return Err(Error::no_conversion_path(key.ts()));
            }
            let was_current = self.current == Designation::Entry(h);
            self.take(h);
            if was_current {
                self.current = self.original;
            }
            Ok(())
        } else {
            ensure!(
                self.native.is_some(),
                RepresentationNotFoundSnafu { ts: key.ts() }
            );
            if self.original == Designation::Native {
                return Err(Error::no_conversion_path(key.ts()));
            }
            let was_current = self.current == Designation::Native;
            self.drop_native();
            if was_current {
                self.current = self.original;
            }
            Ok(())
        }
    }

    /// Make the representation with the given key the new original
    /// representation, discarding the previous original.
    pub fn remove_original_representation(&mut self, key: &RepresentationKey) -> Result<()> {
        ensure!(
            self.original != Designation::None,
            IllegalCallSnafu {
                reason: "there is no original representation"
            }
        );

        let new_original = if key.is_encapsulated() {
            let h = self
                .find_by_key(key)
                .context(RepresentationNotFoundSnafu { ts: key.ts() })?;
            Designation::Entry(h)
        } else {
            ensure!(
                self.native.is_some(),
                RepresentationNotFoundSnafu { ts: key.ts() }
            );
            Designation::Native
        };
        ensure!(
            new_original != self.original,
            IllegalCallSnafu {
                reason: "representation is already the original"
            }
        );

        let old_original = self.original;
        let move_current = self.current == old_original;
        match old_original {
            Designation::Native => self.drop_native(),
            Designation::Entry(h) => {
                self.take(h);
            }
            Designation::None => {}
        }
        self.original = new_original;
        if move_current {
            self.current = new_original;
        }
        Ok(())
    }

    /// Discard every representation but the current one,
    /// which also becomes the original.
    pub fn remove_all_but_current(&mut self) -> Result<()> {
        let keep = self.current;
        self.remove_all_but(keep)
    }

    /// Discard every representation but the original one,
    /// which also becomes the current.
    pub fn remove_all_but_original(&mut self) -> Result<()> {
        let keep = self.original;
        self.remove_all_but(keep)
    }

    fn remove_all_but(&mut self, keep: Designation) -> Result<()> {
        match keep {
            Designation::None => {
                return IllegalCallSnafu {
                    reason: "there is no representation to keep",
                }
                .fail();
            }
            Designation::Native => {
                self.retain_only(None);
            }
            Designation::Entry(h) => {
                self.retain_only(Some(h));
                self.native = None;
            }
        }
        self.original = keep;
        self.current = keep;
        Ok(())
    }

    /// Change the parameters of the current encapsulated representation.
    ///
    /// Another representation holding the new key is discarded.
    /// If that one was the original,
    /// the current representation becomes the original.
    pub fn set_current_representation_parameter(
        &mut self,
        params: Option<RepresentationParams>,
    ) -> Result<()> {
        let h = match self.current {
            Designation::Entry(h) => h,
            _ => {
                let ts = self
                    .current_key()
                    .map(|k| k.ts())
                    .unwrap_or(TransferSyntaxId::Unknown);
                return RepresentationNotFoundSnafu { ts }.fail();
            }
        };
        let ts = self.ts_of(&h);
        let key = RepresentationKey::new(ts, params);

        if let Some(other) = self.find_by_key(&key) {
            if other != h {
                let was_original = self.original == Designation::Entry(other);
                self.take(other);
                if was_original {
                    self.original = Designation::Entry(h);
                }
            }
        }

        if let Some(entry) = self.get_mut(h) {
            entry.key = key;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_pixrep_encoding::adapters::EncodeOptions;

    fn rep(key: RepresentationKey, payload: u8) -> Representation {
        Representation::new(
            key,
            EncapsulatedPixelData::new_fragments(vec![vec![payload; 4]]),
        )
    }

    fn quality(ts: TransferSyntaxId, quality: u8) -> RepresentationKey {
        RepresentationKey::with_params(ts, EncodeOptions::new().quality(quality))
    }

    fn payload(store: &RepresentationStore, h: Handle) -> u8 {
        store.get(h).unwrap().pixels().fragments()[0][0]
    }

    #[test]
    fn insert_deduplicates_by_key() {
        let mut store = RepresentationStore::new();
        let k1 = quality(TransferSyntaxId::JpegBaseline, 80);
        let k2 = quality(TransferSyntaxId::JpegBaseline, 50);

        let h1 = store.insert(rep(k1.clone(), 1)).unwrap();
        let h2 = store.insert(rep(k2.clone(), 2)).unwrap();
        let h3 = store.insert(rep(k1.clone(), 3)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(h1, h3);
        assert_ne!(h1, h2);
        assert_eq!(payload(&store, h1), 3);
        assert_eq!(store.find_by_key(&k2), Some(h2));
    }

    #[test]
    fn entries_are_sorted_by_transfer_syntax() {
        let mut store = RepresentationStore::new();
        store
            .insert(rep(TransferSyntaxId::RleLossless.into(), 1))
            .unwrap();
        store
            .insert(rep(quality(TransferSyntaxId::JpegBaseline, 80), 2))
            .unwrap();
        store
            .insert(rep(TransferSyntaxId::Jpeg2000.into(), 3))
            .unwrap();
        store
            .insert(rep(quality(TransferSyntaxId::JpegBaseline, 50), 4))
            .unwrap();

        let order: Vec<_> = store.iter().map(|(h, _)| payload(&store, h)).collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn native_representations_are_not_stored() {
        let mut store = RepresentationStore::new();
        let res = store.insert(rep(RepresentationKey::native(), 0));
        assert!(matches!(res, Err(Error::IllegalCall { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn set_native_clears_everything() {
        let mut store = RepresentationStore::new();
        store
            .replace_original(rep(TransferSyntaxId::RleLossless.into(), 1))
            .unwrap();
        store
            .insert(rep(TransferSyntaxId::JpegBaseline.into(), 2))
            .unwrap();

        store.set_native(NativePixelData::from_words(&[1, 2]));
        store.set_native(NativePixelData::from_words(&[3, 4]));
        assert_eq!(store.len(), 0);
        assert_eq!(store.native().unwrap().to_words(), vec![3, 4]);
        assert_eq!(store.original(), Designation::Native);
        assert_eq!(store.current(), Designation::Native);
        assert_eq!(store.original_key(), Some(RepresentationKey::native()));
    }

    #[test]
    fn stale_handles_do_not_resolve() {
        let mut store = RepresentationStore::new();
        let h1 = store
            .insert(rep(TransferSyntaxId::JpegBaseline.into(), 1))
            .unwrap();
        store
            .remove_representation(&TransferSyntaxId::JpegBaseline.into())
            .unwrap();
        let h2 = store
            .insert(rep(TransferSyntaxId::RleLossless.into(), 2))
            .unwrap();

        // the slot is reused with a new generation
        assert_eq!(h1.index, h2.index);
        assert!(store.get(h1).is_none());
        assert_eq!(payload(&store, h2), 2);
    }

    #[test]
    fn remove_original_without_original_is_illegal() {
        let mut store = RepresentationStore::new();
        store
            .insert(rep(TransferSyntaxId::RleLossless.into(), 1))
            .unwrap();
        let res = store.remove_original();
        assert!(matches!(res, Err(Error::IllegalCall { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_original_resets_current() {
        let mut store = RepresentationStore::new();
        store
            .replace_original(rep(TransferSyntaxId::RleLossless.into(), 1))
            .unwrap();
        store.remove_original().unwrap();
        assert_eq!(store.original(), Designation::None);
        assert_eq!(store.current(), Designation::None);
        assert!(store.is_empty());

        store.set_native(NativePixelData::from_bytes(vec![1, 2]));
        store.remove_original().unwrap();
        assert!(!store.has_native());
        assert_eq!(store.current_key(), None);
    }

    #[test]
    fn original_cannot_be_removed_as_a_representation() {
        let mut store = RepresentationStore::new();
        let key = RepresentationKey::from(TransferSyntaxId::RleLossless);
        store.replace_original(rep(key.clone(), 1)).unwrap();
        let res = store.remove_representation(&key);
        assert!(matches!(
            res,
            Err(Error::CannotChangeRepresentation { .. })
        ));

        let res = store.remove_representation(&TransferSyntaxId::JpegBaseline.into());
        assert!(matches!(res, Err(Error::RepresentationNotFound { .. })));
    }

    #[test]
    fn removing_current_falls_back_to_original() {
        let mut store = RepresentationStore::new();
        store.set_native(NativePixelData::from_bytes(vec![1, 2]));
        let key = RepresentationKey::from(TransferSyntaxId::RleLossless);
        let h = store.insert(rep(key.clone(), 1)).unwrap();
        store.set_current(Designation::Entry(h)).unwrap();

        store.remove_representation(&key).unwrap();
        assert_eq!(store.current(), Designation::Native);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn remove_original_representation_promotes_key() {
        let mut store = RepresentationStore::new();
        store.set_native(NativePixelData::from_bytes(vec![1, 2]));
        let key = quality(TransferSyntaxId::JpegBaseline, 80);
        let h = store.insert(rep(key.clone(), 1)).unwrap();

        store.remove_original_representation(&key).unwrap();
        assert!(!store.has_native());
        assert_eq!(store.original(), Designation::Entry(h));
        assert_eq!(store.current(), Designation::Entry(h));
        assert_eq!(store.original_key(), Some(key.clone()));

        // already the original
        let res = store.remove_original_representation(&key);
        assert!(matches!(res, Err(Error::IllegalCall { .. })));
    }

    #[test]
    fn remove_all_but_current_and_original() {
        let mut store = RepresentationStore::new();
        store.set_native(NativePixelData::from_bytes(vec![1, 2]));
        let h1 = store
            .insert(rep(TransferSyntaxId::RleLossless.into(), 1))
            .unwrap();
        store
            .insert(rep(TransferSyntaxId::JpegBaseline.into(), 2))
            .unwrap();
        store.set_current(Designation::Entry(h1)).unwrap();

        let mut copy = store.clone();

        store.remove_all_but_current().unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.has_native());
        assert_eq!(store.original(), Designation::Entry(h1));

        copy.remove_all_but_original().unwrap();
        assert_eq!(copy.len(), 0);
        assert!(copy.has_native());
        assert_eq!(copy.current(), Designation::Native);

        let mut empty = RepresentationStore::new();
        assert!(matches!(
            empty.remove_all_but_current(),
            Err(Error::IllegalCall { .. })
        ));
        assert!(matches!(
            empty.remove_all_but_original(),
            Err(Error::IllegalCall { .. })
        ));
    }

    #[test]
    fn conforming_prefers_current() {
        let mut store = RepresentationStore::new();
        let ts = TransferSyntaxId::JpegBaseline;
        let h1 = store.insert(rep(quality(ts, 80), 1)).unwrap();
        let h2 = store.insert(rep(quality(ts, 50), 2)).unwrap();

        assert_eq!(store.find_conforming(ts, None), Some(h1));
        store.set_current(Designation::Entry(h2)).unwrap();
        assert_eq!(store.find_conforming(ts, None), Some(h2));
        assert_eq!(
            store.find_conforming(ts, Some(&EncodeOptions::new().quality(80))),
            Some(h1)
        );
        assert_eq!(store.find_conforming(TransferSyntaxId::RleLossless, None), None);
    }

    #[test]
    fn rekey_current_representation() {
        let mut store = RepresentationStore::new();
        let ts = TransferSyntaxId::JpegBaseline;
        let h1 = store.replace_original(rep(quality(ts, 80), 1)).unwrap();
        let h2 = store.insert(rep(quality(ts, 50), 2)).unwrap();
        store.set_current(Designation::Entry(h2)).unwrap();

        // takes over the key of the original
        store
            .set_current_representation_parameter(Some(std::sync::Arc::new(
                EncodeOptions::new().quality(80),
            )))
            .unwrap();
        assert!(store.get(h1).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.original(), Designation::Entry(h2));
        assert_eq!(store.find_by_key(&quality(ts, 80)), Some(h2));
        assert_eq!(payload(&store, h2), 2);

        store.set_native(NativePixelData::from_bytes(vec![0, 0]));
        let res = store.set_current_representation_parameter(None);
        assert!(matches!(res, Err(Error::RepresentationNotFound { .. })));
    }

    #[test]
    fn encapsulated_representation_lookup() {
        let mut store = RepresentationStore::new();
        let key = quality(TransferSyntaxId::JpegBaseline, 80);
        store.insert(rep(key.clone(), 7)).unwrap();

        let pixels = store.encapsulated_representation(&key).unwrap();
        assert_eq!(pixels.fragments()[0], vec![7; 4]);

        let res = store.encapsulated_representation(&TransferSyntaxId::JpegBaseline.into());
        assert!(matches!(
            res,
            Err(Error::RepresentationNotFound {
                ts: TransferSyntaxId::JpegBaseline
            })
        ));
    }
}
