//! Validation utilities for bitmaps and group names
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod names;

pub use bounds::{
    chunk_position, chunks_for_bits, validate_alias_index, validate_group_capacity,
};
pub use names::{fold_name, names_equal, validate_group_name};
