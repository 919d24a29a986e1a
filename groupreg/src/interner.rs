//! Case-insensitive group name interning
//!
//! Each owning context keeps one [`NameInterner`]. Names map to small
//! sequential indices; the first name given an index is its primary name and
//! later names bound to the same index are aliases. Lookups ignore ASCII
//! case and entries enumerate in case-insensitive order.

use std::collections::btree_map::{BTreeMap, Entry};

use groupreg_core::validation::{validate_alias_index, validate_group_capacity};
use groupreg_core::{fold_name, validate_group_name, Bitmap, GroupError, Result};
use tracing::{debug, trace, warn};

/// An interned name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    name: String,
    index: usize,
    is_primary: bool,
}

impl NameEntry {
    /// Name as first registered, case preserved
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group index shared by the primary name and its aliases
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// Selection of entries for enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFilter {
    /// Every primary name and alias
    All,
    /// Primary names only
    Primary,
    /// Every name bound to the index, primary included
    AliasesOf(usize),
}

impl NameFilter {
    fn accepts(self, entry: &NameEntry) -> bool {
        match self {
            NameFilter::All => true,
            NameFilter::Primary => entry.is_primary,
            NameFilter::AliasesOf(index) => entry.index == index,
        }
    }
}

/// Name to group index table of one context
#[derive(Debug, Clone, Default)]
pub struct NameInterner {
    /// Keyed by the case-folded name
    entries: BTreeMap<String, NameEntry>,
    primary_count: usize,
    group_limit: Option<usize>,
}

impl NameInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner that refuses to allocate more than `limit` groups
    pub fn with_group_limit(limit: Option<usize>) -> Self {
        Self {
            group_limit: limit,
            ..Self::default()
        }
    }

    pub fn group_limit(&self) -> Option<usize> {
        self.group_limit
    }

    /// Find or create a name
    ///
    /// With `forced = None` a new name becomes the primary name of the next
    /// group index. With `forced = Some(index)` a new name becomes an alias
    /// of that existing group. An existing name is returned unchanged unless
    /// it is bound to a different index than `forced`, which is
    /// [`GroupError::Exists`].
    pub fn intern(&mut self, name: &str, forced: Option<usize>) -> Result<&NameEntry> {
        validate_group_name(name)?;
        if let Some(index) = forced {
            validate_alias_index(index, self.primary_count)?;
        }

        match self.entries.entry(fold_name(name)) {
            Entry::Occupied(slot) => {
                let entry = slot.into_mut();
                match forced {
                    Some(index) if index != entry.index => {
                        warn!(
                            group = name,
                            existing = %entry.name,
                            bound = entry.index,
                            requested = index,
                            "group name already bound to another group"
                        );
                        Err(GroupError::Exists {
                            name: entry.name.clone(),
                            index: entry.index,
                        })
                    }
                    _ => Ok(&*entry),
                }
            }
            Entry::Vacant(slot) => {
                let (index, is_primary) = match forced {
                    Some(index) => (index, false),
                    None => {
                        if let Err(err) =
                            validate_group_capacity(self.primary_count, self.group_limit)
                        {
                            warn!(group = name, limit = ?self.group_limit, "group limit reached");
                            return Err(err);
                        }
                        self.primary_count += 1;
                        (self.primary_count - 1, true)
                    }
                };

                debug!(group = name, index, is_primary, "interned group name");
                Ok(&*slot.insert(NameEntry {
                    name: name.to_owned(),
                    index,
                    is_primary,
                }))
            }
        }
    }

    /// Look a name up, ignoring ASCII case
    pub fn find(&self, name: &str) -> Result<&NameEntry> {
        validate_group_name(name)?;
        let entry = self.entries.get(&fold_name(name));
        trace!(group = name, found = entry.is_some(), "group name lookup");
        entry.ok_or_else(|| GroupError::unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.entries.contains_key(&fold_name(name))
    }

    /// Primary name of a group index
    pub fn primary_name(&self, index: usize) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.is_primary && entry.index == index)
            .map(NameEntry::name)
    }

    /// Entries in case-insensitive order, filtered by `filter` and, when
    /// given, by membership of their index in `restrict`
    pub fn enumerate<'a>(
        &'a self,
        filter: NameFilter,
        restrict: Option<&'a Bitmap>,
    ) -> impl Iterator<Item = &'a NameEntry> + 'a {
        self.entries.values().filter(move |entry| {
            filter.accepts(entry) && restrict.map_or(true, |bitmap| bitmap.is_set(entry.index))
        })
    }

    /// Number of groups, which is also the next index to allocate
    pub fn primary_count(&self) -> usize {
        self.primary_count
    }

    /// Number of names, aliases included
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
