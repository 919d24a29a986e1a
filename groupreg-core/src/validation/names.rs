//! Group name validation and case folding

use alloc::string::String;

use crate::error::{GroupError, Result};

/// Validate a group name or alias
///
/// Names must be non-empty and free of NUL bytes. Any other text,
/// including whitespace and non-ASCII characters, is accepted verbatim.
pub fn validate_group_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GroupError::BadArg("empty group name"));
    }

    if name.bytes().any(|b| b == 0) {
        return Err(GroupError::BadArg("group name contains a NUL byte"));
    }

    Ok(())
}

/// Lookup key for a name: ASCII letters lowercased, everything else kept
///
/// Byte order of folded keys is the order of a case-insensitive
/// comparison of the original names.
pub fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Case-insensitive name equality
#[inline]
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
