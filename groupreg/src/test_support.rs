//! Minimal registry item used by the unit tests

use std::cmp::Ordering;

use groupreg_core::RegistryItem;

/// A unit symbol belonging to a numbered unit system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub system: u32,
    pub symbol: &'static str,
}

impl Unit {
    pub fn new(system: u32, symbol: &'static str) -> Self {
        Self { system, symbol }
    }
}

impl RegistryItem for Unit {
    type Owner = u32;

    fn owner(&self) -> u32 {
        self.system
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.symbol.cmp(other.symbol)
    }
}
