//! Constraints on items tracked by a membership registry
//!
//! The registry never inspects an item beyond this trait: it stores owned
//! clones, orders them with [`RegistryItem::compare`], and routes them to a
//! context with [`RegistryItem::owner`]. Dropping the clone releases it.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::Hash;

/// Trait for values whose group membership can be recorded
///
/// `compare` must be a total order consistent with item identity: two items
/// comparing `Equal` share one registry.
pub trait RegistryItem: Clone {
    /// Handle of the owning context
    type Owner: Eq + Hash + Clone + Debug;

    /// The context this item belongs to
    fn owner(&self) -> Self::Owner;

    /// Order two items of the same context
    fn compare(&self, other: &Self) -> Ordering;

    /// Whether two items share a registry
    fn same_item(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
