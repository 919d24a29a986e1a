//! Registries of many owning contexts
//!
//! A [`RegistryDirectory`] maps each owning context to its
//! [`NamedSystems`]. Item operations are routed through
//! [`RegistryItem::owner`], so callers holding only an item never need to
//! look the context up themselves. Contexts are created on first use from
//! the directory's configuration and torn down with
//! [`RegistryDirectory::remove_context`].

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use groupreg_core::{validate_group_name, GroupError, RegistryItem, Result};
use tracing::debug;

use crate::config::{ConfigError, RegistryConfig};
use crate::interner::NameInterner;
use crate::name_list::NameList;
use crate::registry::NamedSystems;

/// Owning context to registry map
#[derive(Debug)]
pub struct RegistryDirectory<I: RegistryItem> {
    contexts: HashMap<I::Owner, NamedSystems<I>>,
    config: RegistryConfig,
    /// Seed names every new context starts from
    seed: NameInterner,
}

impl<I: RegistryItem> Default for RegistryDirectory<I> {
    fn default() -> Self {
        Self {
            contexts: HashMap::new(),
            config: RegistryConfig::default(),
            seed: NameInterner::new(),
        }
    }
}

impl<I: RegistryItem> RegistryDirectory<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory whose contexts start from `config`
    pub fn with_config(config: RegistryConfig) -> std::result::Result<Self, ConfigError> {
        let seed = config.seeded_names()?;
        Ok(Self {
            contexts: HashMap::new(),
            config,
            seed,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of live contexts
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn context(&self, owner: &I::Owner) -> Option<&NamedSystems<I>> {
        self.contexts.get(owner)
    }

    pub fn context_mut(&mut self, owner: &I::Owner) -> Option<&mut NamedSystems<I>> {
        self.contexts.get_mut(owner)
    }

    /// Registry of `owner`, created from the configuration when absent
    pub fn context_or_insert(&mut self, owner: I::Owner) -> &mut NamedSystems<I> {
        match self.contexts.entry(owner) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                debug!(owner = ?slot.key(), "created registry context");
                let systems = NamedSystems::with_names(
                    slot.key().clone(),
                    self.seed.clone(),
                    self.config.auto_create_groups,
                );
                slot.insert(systems)
            }
        }
    }

    /// Tear a context down, returning its registry
    ///
    /// Dropping the returned value releases every name, item clone and
    /// bitmap of the context.
    pub fn remove_context(&mut self, owner: &I::Owner) -> Option<NamedSystems<I>> {
        let removed = self.contexts.remove(owner);
        if let Some(systems) = &removed {
            debug!(
                ?owner,
                groups = systems.named_system_count(),
                items = systems.items().len(),
                "removed registry context"
            );
        }
        removed
    }

    fn context_of(&self, item: &I) -> Result<&NamedSystems<I>> {
        let owner = item.owner();
        self.contexts
            .get(&owner)
            .ok_or_else(|| GroupError::unknown(format!("context {owner:?}")))
    }

    fn context_of_mut(&mut self, item: &I) -> Result<&mut NamedSystems<I>> {
        let owner = item.owner();
        self.contexts
            .get_mut(&owner)
            .ok_or_else(|| GroupError::unknown(format!("context {owner:?}")))
    }

    /// Add `item` to group `name` of its own context
    ///
    /// An invalid name is rejected before the context is created.
    pub fn add_item_to_named_system(&mut self, item: &I, name: &str) -> Result<()> {
        validate_group_name(name)?;
        self.context_or_insert(item.owner())
            .add_item_to_named_system(item, name)
    }

    pub fn remove_item_from_named_system(&mut self, item: &I, name: &str) -> Result<()> {
        self.context_of_mut(item)?
            .remove_item_from_named_system(item, name)
    }

    pub fn is_item_in_named_system(&self, item: &I, name: &str) -> Result<bool> {
        self.context_of(item)?.is_item_in_named_system(item, name)
    }

    /// Primary names of the groups `item` belongs to; empty when its
    /// context does not exist
    pub fn named_systems_for_item(&self, item: &I) -> Result<NameList> {
        match self.contexts.get(&item.owner()) {
            Some(systems) => systems.named_systems_for_item(item),
            None => Ok(NameList::new()),
        }
    }

    pub fn forget_item(&mut self, item: &I) -> Result<()> {
        self.context_of_mut(item)?.forget_item(item)
    }
}
