//! groupreg - Named-group membership registries
//!
//! This library interns human-readable group names into small stable
//! indices per owning context and records, for each item of the context,
//! the set of groups it belongs to as an extensible bitmap.
//!
//! ## Architecture
//!
//! groupreg follows a core/implementation separation:
//!
//! - **groupreg-core**: `no_std` bitmap, bitmap formatting, error and status
//!   types, validation and the item contract (no I/O)
//! - **groupreg**: name interning, item registries, per-context facade,
//!   multi-context directory, configuration and stream output
//!
//! ## Quick Start
//!
//! ```rust
//! use groupreg::{format_to_string, RegistryConfig, RegistryDirectory, RegistryItem};
//! use std::cmp::Ordering;
//!
//! #[derive(Clone)]
//! struct Unit {
//!     system: u32,
//!     symbol: &'static str,
//! }
//!
//! impl RegistryItem for Unit {
//!     type Owner = u32;
//!     fn owner(&self) -> u32 {
//!         self.system
//!     }
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.symbol.cmp(other.symbol)
//!     }
//! }
//!
//! let config = RegistryConfig::default().with_group("SI", ["International System"]);
//! let mut directory = RegistryDirectory::with_config(config).unwrap();
//!
//! let meter = Unit { system: 1, symbol: "m" };
//! directory.add_item_to_named_system(&meter, "SI").unwrap();
//! directory.add_item_to_named_system(&meter, "Metric").unwrap();
//!
//! let names = directory.named_systems_for_item(&meter).unwrap();
//! assert_eq!(names.implode(", ", Some(" and ")), "Metric and SI");
//!
//! let systems = directory.context(&1).unwrap();
//! let registry = systems.items().find(&meter).unwrap();
//! assert_eq!(format_to_string("%#b", Some(registry)), "0b11");
//! ```
//!
//! ## Features
//!
//! - **Case-insensitive names**: lookups ignore ASCII case, primary names
//!   keep their first spelling
//! - **Aliases**: any number of names per group, rebinding is rejected
//! - **Compact membership**: one bit per group per item
//! - **Byte-exact formatting**: printf-style hex/octal/binary rendering with
//!   bounded-buffer truncation
//! - **JSON configuration**: seed groups, group caps and auto-creation

// Re-export core abstractions
pub use groupreg_core::{
    // Bitmap
    bit_is_set, compare, duplicate, Bitmap, Chunk, CHUNK_BITS,
    // Formatting
    format_bitmap, format_to_string, format_to_vec,
    // Error handling
    GroupError, Result, Status,
    // Item contract
    RegistryItem,
};

// Implementation modules
pub mod config;
pub mod directory;
pub mod interner;
pub mod item_map;
pub mod name_list;
pub mod output;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

// Public exports
pub use config::{ConfigError, GroupSeed, RegistryConfig};
pub use directory::RegistryDirectory;
pub use interner::{NameEntry, NameFilter, NameInterner};
pub use item_map::{ItemRegistryMap, RegistryEntry};
pub use name_list::NameList;
pub use output::{print_bitmap, write_bitmap};
pub use registry::{NameQuery, NamedSystems};
