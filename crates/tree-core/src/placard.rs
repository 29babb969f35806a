//! Texture state for photo placards.
//!
//! Loading happens elsewhere and reports back once per placard. A slot starts
//! as a placeholder, becomes `Loaded` on success, and stays `Failed` forever
//! on error so the renderer can draw a fallback. Camera and animation code
//! never look at these slots.

use fnv::{FnvHashMap, FnvHashSet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextureSlot<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T> TextureSlot<T> {
    pub fn is_settled(&self) -> bool {
        !matches!(self, TextureSlot::Pending)
    }
}

#[derive(Debug)]
pub struct PlacardTextures<T> {
    slots: FnvHashMap<u64, TextureSlot<T>>,
}

impl<T> Default for PlacardTextures<T> {
    fn default() -> Self {
        Self {
            slots: FnvHashMap::default(),
        }
    }
}

impl<T> PlacardTextures<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a placeholder for `id`. Returns true when the caller should
    /// start a fetch, false when one was already requested.
    pub fn request(&mut self, id: u64) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.slots.insert(id, TextureSlot::Pending);
        true
    }

    /// One-shot completion of a fetch.
    ///
    /// Results for placards that were removed in the meantime are dropped,
    /// and a slot that already settled keeps its first outcome.
    pub fn resolve(&mut self, id: u64, result: Result<T, AssetError>) {
        let Some(slot) = self.slots.get_mut(&id) else {
            log::debug!("[placard] dropping result for removed placard {id}");
            return;
        };
        if slot.is_settled() {
            log::debug!("[placard] ignoring repeated result for placard {id}");
            return;
        }
        *slot = match result {
            Ok(texture) => TextureSlot::Loaded(texture),
            Err(e) => {
                log::warn!("[placard] texture for {id} failed: {e}");
                TextureSlot::Failed(e.to_string())
            }
        };
    }

    /// Forget every slot whose placard is not in `ids`.
    pub fn retain_ids(&mut self, ids: &[u64]) {
        let keep: FnvHashSet<u64> = ids.iter().copied().collect();
        self.slots.retain(|id, _| keep.contains(id));
    }

    pub fn slot(&self, id: u64) -> Option<&TextureSlot<T>> {
        self.slots.get(&id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots
            .iter()
            .filter(|(_, s)| matches!(s, TextureSlot::Pending))
            .map(|(id, _)| *id)
    }
}
