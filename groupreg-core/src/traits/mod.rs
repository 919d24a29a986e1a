//! Abstract interfaces for group registries
//!
//! Traits are pure interfaces - no concrete implementations.

pub mod item;

pub use item::RegistryItem;
