//! Extensible bitmap
//!
//! A [`Bitmap`] is an unbounded set of small non-negative integers stored as
//! little-endian `u32` chunks. It is also read as a single binary magnitude:
//! comparison, hashing and equality all ignore trailing all-zero chunks, so
//! a bitmap that was grown and then cleared equals one that was never
//! allocated.
//!
//! Storage grows only on [`Bitmap::set`] and never shrinks on
//! [`Bitmap::clear`]. Copies ([`Clone`], [`Bitmap::copy_from`],
//! [`duplicate`]) are trimmed to the highest non-zero chunk.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::error::{GroupError, Result};
use crate::validation::bounds::{chunk_position, chunks_for_bits};

/// Storage unit of a bitmap
pub type Chunk = u32;

/// Bits per chunk
pub const CHUNK_BITS: usize = Chunk::BITS as usize;

/// Growable bit-vector
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitmap {
    /// Empty means never allocated (or reset); equivalent to zero
    chunks: Vec<Chunk>,
}

impl Bitmap {
    /// Create an empty bitmap without allocating
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Build a bitmap with the given bits set
    pub fn from_bits(bits: &[usize]) -> Result<Self> {
        let mut bitmap = Self::new();
        if let Some(&max) = bits.iter().max() {
            let needed = chunks_for_bits(max.saturating_add(1));
            bitmap.grow_to(needed)?;
        }
        for &bit in bits {
            bitmap.set(bit)?;
        }
        Ok(bitmap)
    }

    /// Release all storage; the bitmap reads as zero afterwards
    pub fn reset(&mut self) {
        self.chunks = Vec::new();
    }

    /// True when no storage is allocated
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// True when no bit is set
    pub fn is_zero(&self) -> bool {
        self.chunks.iter().all(|&chunk| chunk == 0)
    }

    /// Number of allocated chunks, including trailing zero chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// All allocated chunks, least significant first
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunks up to and including the most significant non-zero one
    pub fn significant_chunks(&self) -> &[Chunk] {
        let len = self
            .chunks
            .iter()
            .rposition(|&chunk| chunk != 0)
            .map_or(0, |top| top + 1);
        &self.chunks[..len]
    }

    /// Little-endian byte view of the significant chunks
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.significant_chunks())
    }

    /// Test a bit; bits beyond the allocated storage read as clear
    #[inline]
    pub fn is_set(&self, bit: usize) -> bool {
        let (chunk, mask) = chunk_position(bit);
        self.chunks.get(chunk).is_some_and(|&value| value & mask != 0)
    }

    /// Set a bit, growing storage to exactly the chunk that holds it
    ///
    /// Returns the previous value of the bit. If storage cannot grow the
    /// bitmap is reset to empty and [`GroupError::Os`] is returned.
    pub fn set(&mut self, bit: usize) -> Result<bool> {
        let (chunk, mask) = chunk_position(bit);
        if chunk >= self.chunks.len() {
            self.grow_to(chunk + 1)?;
        }

        let slot = &mut self.chunks[chunk];
        let was_set = *slot & mask != 0;
        *slot |= mask;
        Ok(was_set)
    }

    /// Clear a bit in place and return its previous value
    ///
    /// Never allocates and never releases storage.
    pub fn clear(&mut self, bit: usize) -> bool {
        let (chunk, mask) = chunk_position(bit);
        match self.chunks.get_mut(chunk) {
            Some(slot) => {
                let was_set = *slot & mask != 0;
                *slot &= !mask;
                was_set
            }
            None => false,
        }
    }

    /// Index of the most significant set bit
    pub fn highest_set_bit(&self) -> Option<usize> {
        let significant = self.significant_chunks();
        let top = *significant.last()?;
        let top_bit = CHUNK_BITS - 1 - top.leading_zeros() as usize;
        Some((significant.len() - 1) * CHUNK_BITS + top_bit)
    }

    /// Highest set bit plus one, zero when no bit is set
    pub fn bit_span(&self) -> usize {
        self.highest_set_bit().map_or(0, |bit| bit + 1)
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.chunks
            .iter()
            .map(|chunk| chunk.count_ones() as usize)
            .sum()
    }

    /// Iterate set bits in ascending order
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            chunks: &self.chunks,
            index: 0,
            current: self.chunks.first().copied().unwrap_or(0),
        }
    }

    /// Replace the contents with a trimmed copy of `src`
    ///
    /// A missing or zero source leaves `self` empty. On allocation failure
    /// `self` is left empty and [`GroupError::Os`] is returned.
    pub fn copy_from(&mut self, src: Option<&Bitmap>) -> Result<()> {
        self.reset();

        let Some(src) = src else {
            return Ok(());
        };
        let significant = src.significant_chunks();
        if significant.is_empty() {
            return Ok(());
        }

        self.chunks
            .try_reserve_exact(significant.len())
            .map_err(|_| GroupError::Os("bitmap copy"))?;
        self.chunks.extend_from_slice(significant);
        Ok(())
    }

    fn grow_to(&mut self, chunk_count: usize) -> Result<()> {
        let Some(additional) = chunk_count.checked_sub(self.chunks.len()) else {
            return Ok(());
        };

        if self.chunks.try_reserve_exact(additional).is_err() {
            self.reset();
            return Err(GroupError::Os("bitmap growth"));
        }
        self.chunks.resize(chunk_count, 0);
        Ok(())
    }
}

/// Test a bit of an optional bitmap; `None` has no bits set
pub fn bit_is_set(bitmap: Option<&Bitmap>, bit: usize) -> bool {
    bitmap.is_some_and(|bitmap| bitmap.is_set(bit))
}

/// Independent trimmed copy; `None` duplicates to `None`
pub fn duplicate(src: Option<&Bitmap>) -> Option<Bitmap> {
    src.cloned()
}

/// Compare two optional bitmaps as binary magnitudes
///
/// `None` and an empty bitmap both compare as zero.
pub fn compare(a: Option<&Bitmap>, b: Option<&Bitmap>) -> Ordering {
    let a = a.map_or(&[][..], Bitmap::chunks);
    let b = b.map_or(&[][..], Bitmap::chunks);
    compare_chunks(a, b)
}

fn compare_chunks(a: &[Chunk], b: &[Chunk]) -> Ordering {
    let shared = a.len().min(b.len());

    // high chunks only one side has decide unless they are all zero
    if a[shared..].iter().any(|&chunk| chunk != 0) {
        return Ordering::Greater;
    }
    if b[shared..].iter().any(|&chunk| chunk != 0) {
        return Ordering::Less;
    }

    a[..shared].iter().rev().cmp(b[..shared].iter().rev())
}

impl Clone for Bitmap {
    fn clone(&self) -> Self {
        Self {
            chunks: self.significant_chunks().to_vec(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.chunks.clear();
        self.chunks.extend_from_slice(source.significant_chunks());
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.significant_chunks() == other.significant_chunks()
    }
}

impl Eq for Bitmap {}

impl PartialOrd for Bitmap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bitmap {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_chunks(&self.chunks, &other.chunks)
    }
}

impl Hash for Bitmap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_chunks().hash(state);
    }
}

/// Iterator over the set bits of a [`Bitmap`]
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    chunks: &'a [Chunk],
    index: usize,
    current: Chunk,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.chunks.get(self.index)?;
        }

        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * CHUNK_BITS + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};

    fn bits(list: &[usize]) -> Bitmap {
        Bitmap::from_bits(list).unwrap()
    }

    #[test]
    fn test_set_and_clear() {
        let mut bitmap = Bitmap::new();
        assert!(bitmap.is_empty());
        assert!(!bitmap.is_set(2));

        assert_eq!(bitmap.set(2), Ok(false));
        assert_eq!(bitmap.set(95), Ok(false));
        assert_eq!(bitmap.set(2), Ok(true));
        assert!(bitmap.is_set(2));
        assert!(bitmap.is_set(95));
        assert!(!bitmap.is_set(94));
        assert_eq!(bitmap.chunk_count(), 3);

        // clearing beyond storage is a no-op
        assert!(!bitmap.clear(2400));
        assert_eq!(bitmap.chunk_count(), 3);

        assert!(bitmap.clear(95));
        assert!(!bitmap.clear(95));
        // no shrink on clear
        assert_eq!(bitmap.chunk_count(), 3);
        assert_eq!(bitmap.significant_chunks(), &[4]);
    }

    #[test]
    fn test_growth_is_exact() {
        let mut bitmap = Bitmap::new();
        bitmap.set(64).unwrap();
        assert_eq!(bitmap.chunks(), &[0, 0, 1]);
        bitmap.set(10).unwrap();
        assert_eq!(bitmap.chunks(), &[1 << 10, 0, 1]);
    }

    #[test]
    fn test_span_and_ones() {
        let bitmap = bits(&[2, 71, 33]);
        assert_eq!(bitmap.highest_set_bit(), Some(71));
        assert_eq!(bitmap.bit_span(), 72);
        assert_eq!(bitmap.count_ones(), 3);
        assert_eq!(bitmap.ones().collect::<Vec<_>>(), vec![2, 33, 71]);

        let empty = Bitmap::new();
        assert_eq!(empty.bit_span(), 0);
        assert_eq!(empty.ones().next(), None);

        let mut cleared = bits(&[40]);
        cleared.clear(40);
        assert_eq!(cleared.highest_set_bit(), None);
        assert_eq!(cleared.ones().next(), None);
    }

    #[test]
    fn test_compare() {
        // different chunk counts
        assert_eq!(compare(Some(&bits(&[2])), Some(&bits(&[962]))), Ordering::Less);
        assert_eq!(compare(Some(&bits(&[962])), Some(&bits(&[2]))), Ordering::Greater);
        // same chunk, different word
        assert_eq!(compare(Some(&bits(&[62])), Some(&bits(&[66]))), Ordering::Less);
        // same word
        assert_eq!(compare(Some(&bits(&[2])), Some(&bits(&[3]))), Ordering::Less);
        assert_eq!(compare(Some(&bits(&[3])), Some(&bits(&[2]))), Ordering::Greater);

        // extra high chunks that were cleared do not count
        let mut wide = bits(&[2, 38]);
        wide.clear(38);
        assert_eq!(compare(Some(&wide), Some(&bits(&[2]))), Ordering::Equal);
        assert_eq!(wide, bits(&[2]));

        wide.clear(2);
        assert_eq!(compare(Some(&wide), None), Ordering::Equal);
        assert_eq!(compare(None, Some(&Bitmap::new())), Ordering::Equal);
        assert_eq!(compare(None, None), Ordering::Equal);
        assert_eq!(compare(None, Some(&bits(&[0]))), Ordering::Less);
    }

    #[test]
    fn test_copy_and_duplicate() {
        let mut src = bits(&[2, 95]);
        src.clear(95);

        let mut dst = bits(&[500]);
        dst.copy_from(Some(&src)).unwrap();
        assert_eq!(dst.chunks(), &[4]);
        assert_eq!(dst, src);

        dst.copy_from(None).unwrap();
        assert!(dst.is_empty());

        assert_eq!(duplicate(None), None);
        let mut dup = duplicate(Some(&src)).unwrap();
        assert_eq!(dup.chunk_count(), 1);
        assert_eq!(dup, src);

        dup.set(7).unwrap();
        assert!(!src.is_set(7));
        assert_ne!(dup, src);
    }

    #[test]
    fn test_hash_ignores_trailing_zero_chunks() {
        use core::hash::BuildHasher;
        let state = std::collections::hash_map::RandomState::new();

        let mut grown = bits(&[5, 200]);
        grown.clear(200);
        let small = bits(&[5]);
        assert_eq!(state.hash_one(&grown), state.hash_one(&small));
        assert_eq!(grown.as_bytes(), small.as_bytes());
        assert_eq!(small.as_bytes(), &[32, 0, 0, 0]);
    }

    #[test]
    fn test_bit_is_set_on_missing_bitmap() {
        assert!(!bit_is_set(None, 0));
        assert!(bit_is_set(Some(&bits(&[0])), 0));
    }

    #[test]
    fn test_random_bitmaps_order_like_integers() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a: u64 = rng.gen();
            let b: u64 = rng.gen();
            let to_bitmap = |value: u64| {
                let set: Vec<usize> = (0..64).filter(|bit| value >> bit & 1 == 1).collect();
                bits(&set)
            };
            assert_eq!(to_bitmap(a).cmp(&to_bitmap(b)), a.cmp(&b));
        }
    }

    fn arb_bits() -> impl Strategy<Value = Vec<usize>> {
        proptest::collection::vec(0usize..300, 0..12)
    }

    proptest! {
        #[test]
        fn prop_compare_reflexive(list in arb_bits()) {
            let bitmap = bits(&list);
            prop_assert_eq!(compare(Some(&bitmap), Some(&bitmap)), Ordering::Equal);
        }

        #[test]
        fn prop_duplicate_is_independent(list in arb_bits(), extra in 0usize..400) {
            let original = bits(&list);
            let mut dup = duplicate(Some(&original)).unwrap();
            prop_assert_eq!(&dup, &original);

            let before = original.clone();
            dup.set(extra).unwrap();
            prop_assert_eq!(&original, &before);
        }

        #[test]
        fn prop_higher_bit_increases(list in arb_bits()) {
            let bitmap = bits(&list);
            let mut bigger = bitmap.clone();
            bigger.set(bitmap.bit_span()).unwrap();
            prop_assert_eq!(compare(Some(&bigger), Some(&bitmap)), Ordering::Greater);
        }

        #[test]
        fn prop_clear_only_bit_is_zero(bit in 0usize..1000) {
            let mut bitmap = Bitmap::new();
            bitmap.set(bit).unwrap();
            prop_assert!(bitmap.clear(bit));
            prop_assert_eq!(compare(Some(&bitmap), None), Ordering::Equal);
            prop_assert_eq!(bitmap, Bitmap::new());
        }
    }
}
