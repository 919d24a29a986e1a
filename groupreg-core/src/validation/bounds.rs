//! Bit position and group index bounds
//!
//! Pure arithmetic on bitmap layout and index allocation with no
//! allocation or I/O.

use crate::bitmap::{Chunk, CHUNK_BITS};
use crate::error::{GroupError, Result};

/// Chunk index and in-chunk mask addressing `bit`
#[inline]
pub const fn chunk_position(bit: usize) -> (usize, Chunk) {
    (bit / CHUNK_BITS, 1 << (bit % CHUNK_BITS))
}

/// Number of chunks needed to hold `bit_count` bits
#[inline]
pub const fn chunks_for_bits(bit_count: usize) -> usize {
    bit_count.div_ceil(CHUNK_BITS)
}

/// An alias may only bind to a group that already has a primary name
pub fn validate_alias_index(index: usize, primary_count: usize) -> Result<()> {
    if index >= primary_count {
        return Err(GroupError::BadArg("alias index has no primary group"));
    }
    Ok(())
}

/// Check that one more primary group fits under an optional limit
pub fn validate_group_capacity(primary_count: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if primary_count >= limit => Err(GroupError::CapacityExceeded { limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_position() {
        assert_eq!(chunk_position(0), (0, 1));
        assert_eq!(chunk_position(31), (0, 1 << 31));
        assert_eq!(chunk_position(32), (1, 1));
        assert_eq!(chunk_position(95), (2, 1 << 31));
    }

    #[test]
    fn test_chunks_for_bits() {
        assert_eq!(chunks_for_bits(0), 0);
        assert_eq!(chunks_for_bits(1), 1);
        assert_eq!(chunks_for_bits(32), 1);
        assert_eq!(chunks_for_bits(33), 2);
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(validate_alias_index(0, 1), Ok(()));
        assert_eq!(
            validate_alias_index(1, 1),
            Err(GroupError::BadArg("alias index has no primary group"))
        );
        assert_eq!(validate_group_capacity(10, None), Ok(()));
        assert_eq!(validate_group_capacity(1, Some(2)), Ok(()));
        assert_eq!(
            validate_group_capacity(2, Some(2)),
            Err(GroupError::CapacityExceeded { limit: 2 })
        );
    }
}
