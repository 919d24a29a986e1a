#![no_std]

//! groupreg-core - Extensible bitmaps and named-group definitions
//!
//! This crate provides the allocation-only building blocks for named-group
//! membership registries: a growable [`Bitmap`], its printf-style formatting
//! codec, the shared [`Status`]/[`GroupError`] outcome types, name and index
//! validation, and the [`RegistryItem`] contract for tracked items.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bitmap;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use bitmap::{bit_is_set, compare, duplicate, Bitmap, Chunk, Ones, CHUNK_BITS};
pub use error::*;
pub use format::{format_bitmap, format_to_string, format_to_vec, Conversion, Directive, Template};
pub use traits::*;
pub use validation::{fold_name, names_equal, validate_group_name};
