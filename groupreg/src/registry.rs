//! Named groups of one owning context
//!
//! [`NamedSystems`] is the public face of the registry. It interns group
//! names, manipulates caller-held registry bitmaps, and records which groups
//! each item of the context belongs to.
//!
//! ## Example
//!
//! ```rust
//! use groupreg::{NameQuery, NamedSystems, RegistryItem};
//! use std::cmp::Ordering;
//!
//! #[derive(Clone)]
//! struct Unit(&'static str);
//!
//! impl RegistryItem for Unit {
//!     type Owner = ();
//!     fn owner(&self) {}
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.0.cmp(other.0)
//!     }
//! }
//!
//! let mut systems = NamedSystems::<Unit>::new(());
//! systems.add_named_system("SI").unwrap();
//! systems.map_name_to_named_system("International System", "SI").unwrap();
//!
//! let meter = Unit("m");
//! systems.add_item_to_named_system(&meter, "international system").unwrap();
//! assert!(systems.is_item_in_named_system(&meter, "si").unwrap());
//!
//! let names = systems.named_system_aliases(NameQuery::AliasesOf("SI")).unwrap();
//! assert_eq!(names.implode(", ", Some(" and ")), "International System and SI");
//! ```

use groupreg_core::{validate_group_name, Bitmap, GroupError, RegistryItem, Result};
use tracing::{debug, warn};

use crate::config::{ConfigError, RegistryConfig};
use crate::interner::{NameFilter, NameInterner};
use crate::item_map::ItemRegistryMap;
use crate::name_list::NameList;

/// Selection of names for [`NamedSystems::named_system_aliases`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameQuery<'a> {
    /// Every defined name, aliases included
    All,
    /// Primary names only
    Primary,
    /// Every name of the group `name` belongs to, `name` included
    AliasesOf(&'a str),
}

/// Group names and item registries of one owning context
#[derive(Debug)]
pub struct NamedSystems<I: RegistryItem> {
    owner: I::Owner,
    names: NameInterner,
    items: ItemRegistryMap<I>,
    auto_create_groups: bool,
}

impl<I: RegistryItem> NamedSystems<I> {
    /// Create an empty context with the default configuration
    pub fn new(owner: I::Owner) -> Self {
        Self {
            owner,
            names: NameInterner::new(),
            items: ItemRegistryMap::new(),
            auto_create_groups: true,
        }
    }

    /// Create a context and intern the configured seed groups
    pub fn with_config(
        owner: I::Owner,
        config: &RegistryConfig,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self::with_names(
            owner,
            config.seeded_names()?,
            config.auto_create_groups,
        ))
    }

    /// Create a context around an existing name table
    pub fn with_names(owner: I::Owner, names: NameInterner, auto_create_groups: bool) -> Self {
        Self {
            owner,
            names,
            items: ItemRegistryMap::new(),
            auto_create_groups,
        }
    }

    pub fn owner(&self) -> &I::Owner {
        &self.owner
    }

    pub fn names(&self) -> &NameInterner {
        &self.names
    }

    pub fn items(&self) -> &ItemRegistryMap<I> {
        &self.items
    }

    /// Whether adding an item may create an undefined group
    pub fn auto_create_groups(&self) -> bool {
        self.auto_create_groups
    }

    /// Change [`auto_create_groups`](Self::auto_create_groups), returning
    /// the previous setting
    pub fn set_auto_create_groups(&mut self, auto_create: bool) -> bool {
        std::mem::replace(&mut self.auto_create_groups, auto_create)
    }

    /// Number of defined groups
    pub fn named_system_count(&self) -> usize {
        self.names.primary_count()
    }

    /// Define a group, or return the index of an existing name
    pub fn add_named_system(&mut self, name: &str) -> Result<usize> {
        Ok(self.names.intern(name, None)?.index())
    }

    /// Bind `new_name` to the group `existing` belongs to
    ///
    /// Rebinding a name to the group it already belongs to succeeds without
    /// change; binding it to any other group is [`GroupError::Exists`].
    pub fn map_name_to_named_system(&mut self, new_name: &str, existing: &str) -> Result<usize> {
        validate_group_name(new_name)?;
        let index = self.find_named_system_index(existing)?;
        Ok(self.names.intern(new_name, Some(index))?.index())
    }

    pub fn find_named_system_index(&self, name: &str) -> Result<usize> {
        Ok(self.names.find(name)?.index())
    }

    pub fn named_system_exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Set the bit of group `name` in a caller-held registry
    ///
    /// The registry is allocated when absent and the group is defined when
    /// unknown. On failure an absent registry stays absent.
    pub fn set_in_registry(&mut self, registry: &mut Option<Bitmap>, name: &str) -> Result<()> {
        let index = self.add_named_system(name)?;
        registry
            .get_or_insert_with(Bitmap::new)
            .set(index)
            .map(drop)
            .inspect_err(|err| warn!(group = name, %err, "failed to update registry"))
    }

    /// By-value form of [`set_in_registry`](Self::set_in_registry)
    ///
    /// The returned registry replaces the one passed in, whatever the
    /// outcome.
    pub fn set_in_registry_value(
        &mut self,
        registry: Option<Bitmap>,
        name: &str,
    ) -> (Option<Bitmap>, Result<()>) {
        let mut registry = registry;
        let result = self.set_in_registry(&mut registry, name);
        (registry, result)
    }

    /// Clear the bit of group `name` in a caller-held registry
    ///
    /// An absent registry, or a bit that is already clear, is success.
    pub fn remove_from_registry(&self, registry: &mut Option<Bitmap>, name: &str) -> Result<()> {
        let index = self.find_named_system_index(name)?;
        if let Some(registry) = registry.as_mut() {
            registry.clear(index);
        }
        Ok(())
    }

    /// Test the bit of group `name`; an absent registry has no bits set
    pub fn is_in_registry(&self, registry: Option<&Bitmap>, name: &str) -> Result<bool> {
        let index = self.find_named_system_index(name)?;
        Ok(registry.is_some_and(|registry| registry.is_set(index)))
    }

    fn check_owner(&self, item: &I) -> Result<()> {
        let owner = item.owner();
        if owner != self.owner {
            warn!(expected = ?self.owner, found = ?owner, "item belongs to another context");
            return Err(GroupError::BadArg("item belongs to another context"));
        }
        Ok(())
    }

    /// Record that `item` belongs to group `name`
    ///
    /// An undefined group is created when
    /// [`auto_create_groups`](Self::auto_create_groups) is set and is
    /// [`GroupError::Unknown`] otherwise.
    pub fn add_item_to_named_system(&mut self, item: &I, name: &str) -> Result<()> {
        self.check_owner(item)?;
        let index = if self.auto_create_groups {
            self.add_named_system(name)?
        } else {
            self.find_named_system_index(name)?
        };

        let registry = self.items.find_or_insert(item)?;
        registry
            .set(index)
            .map(drop)
            .inspect_err(|err| warn!(group = name, %err, "failed to add item to group"))
    }

    /// Record that `item` no longer belongs to group `name`
    pub fn remove_item_from_named_system(&mut self, item: &I, name: &str) -> Result<()> {
        self.check_owner(item)?;
        let index = self.find_named_system_index(name)?;
        self.items.find_mut(item)?.clear(index);
        Ok(())
    }

    /// Whether `item` belongs to group `name`
    ///
    /// An item that was never added to any group is
    /// [`GroupError::Unknown`].
    pub fn is_item_in_named_system(&self, item: &I, name: &str) -> Result<bool> {
        self.check_owner(item)?;
        let index = self.find_named_system_index(name)?;
        Ok(self.items.find(item)?.is_set(index))
    }

    /// Drop the registry of `item`
    pub fn forget_item(&mut self, item: &I) -> Result<()> {
        self.check_owner(item)?;
        self.items.remove(item)?;
        debug!(owner = ?self.owner, "forgot item");
        Ok(())
    }

    fn name_filter(&self, query: NameQuery<'_>) -> Result<NameFilter> {
        Ok(match query {
            NameQuery::All => NameFilter::All,
            NameQuery::Primary => NameFilter::Primary,
            NameQuery::AliasesOf(name) => NameFilter::AliasesOf(self.find_named_system_index(name)?),
        })
    }

    /// Primary names of all groups
    pub fn named_systems(&self) -> NameList {
        self.collect_names(NameFilter::Primary, None)
    }

    /// Names selected by `query`, in case-insensitive order
    ///
    /// [`NameQuery::AliasesOf`] an undefined name is [`GroupError::Unknown`]
    /// rather than an empty list.
    pub fn named_system_aliases(&self, query: NameQuery<'_>) -> Result<NameList> {
        let filter = self.name_filter(query)?;
        Ok(self.collect_names(filter, None))
    }

    /// Names selected by `query` whose group `item` belongs to
    ///
    /// Empty when the item has no registry.
    pub fn named_system_aliases_for_item(&self, query: NameQuery<'_>, item: &I) -> Result<NameList> {
        self.check_owner(item)?;
        let filter = self.name_filter(query)?;
        Ok(match self.items.find(item) {
            Ok(registry) => self.collect_names(filter, Some(registry)),
            Err(_) => NameList::new(),
        })
    }

    /// Primary names of the groups `item` belongs to
    pub fn named_systems_for_item(&self, item: &I) -> Result<NameList> {
        self.named_system_aliases_for_item(NameQuery::Primary, item)
    }

    fn collect_names(&self, filter: NameFilter, restrict: Option<&Bitmap>) -> NameList {
        self.names
            .enumerate(filter, restrict)
            .map(|entry| entry.name().to_owned())
            .collect()
    }
}
