//! Item to registry bitmap table

use groupreg_core::{Bitmap, GroupError, RegistryItem, Result};
use tracing::debug;

/// An owned item clone and its group registry
#[derive(Debug, Clone)]
pub struct RegistryEntry<I> {
    item: I,
    registry: Bitmap,
}

impl<I> RegistryEntry<I> {
    pub fn item(&self) -> &I {
        &self.item
    }

    pub fn registry(&self) -> &Bitmap {
        &self.registry
    }
}

/// Registries of the items of one context, ordered by
/// [`RegistryItem::compare`]
#[derive(Debug, Clone)]
pub struct ItemRegistryMap<I> {
    entries: Vec<RegistryEntry<I>>,
}

impl<I> Default for ItemRegistryMap<I> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<I: RegistryItem> ItemRegistryMap<I> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item: &I) -> std::result::Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.item.compare(item))
    }

    /// Registry of `item`, inserting a clone of the item with an empty
    /// registry when absent
    pub fn find_or_insert(&mut self, item: &I) -> Result<&mut Bitmap> {
        let at = match self.position(item) {
            Ok(at) => at,
            Err(at) => {
                self.entries
                    .try_reserve(1)
                    .map_err(|_| GroupError::Os("item registry entry"))?;
                self.entries.insert(
                    at,
                    RegistryEntry {
                        item: item.clone(),
                        registry: Bitmap::new(),
                    },
                );
                debug!(owner = ?item.owner(), items = self.entries.len(), "created item registry");
                at
            }
        };
        Ok(&mut self.entries[at].registry)
    }

    /// Registry of `item`
    pub fn find(&self, item: &I) -> Result<&Bitmap> {
        match self.position(item) {
            Ok(at) => Ok(&self.entries[at].registry),
            Err(_) => Err(GroupError::unknown("item has no registry")),
        }
    }

    pub fn find_mut(&mut self, item: &I) -> Result<&mut Bitmap> {
        match self.position(item) {
            Ok(at) => Ok(&mut self.entries[at].registry),
            Err(_) => Err(GroupError::unknown("item has no registry")),
        }
    }

    /// Drop the item clone and return its registry
    pub fn remove(&mut self, item: &I) -> Result<Bitmap> {
        match self.position(item) {
            Ok(at) => {
                let entry = self.entries.remove(at);
                debug!(owner = ?item.owner(), items = self.entries.len(), "removed item registry");
                Ok(entry.registry)
            }
            Err(_) => Err(GroupError::unknown("item has no registry")),
        }
    }

    pub fn contains(&self, item: &I) -> bool {
        self.position(item).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in item order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry<I>> {
        self.entries.iter()
    }
}
