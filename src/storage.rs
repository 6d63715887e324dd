//! Block storage backing a truth table.
//!
//! A table over `n` variables holds `2^n` bits packed into `max(1, 2^(n-6))`
//! words of 64 bits. Bit `k` lives in word `k >> 6` at offset `k & 63`.
//! Two backends share this layout:
//!
//! - [`Inline`]: arity fixed at compile time, words stored inline;
//! - [`Heap`]: arity chosen at runtime, words allocated once on the heap.
//!
//! Neither backend ever changes its word count after construction.

use std::fmt::Debug;
use std::hash::Hash;

use crate::masks::num_blocks_for;

/// Largest arity accepted by [`Heap`].
pub const MAX_VARS: usize = 32;

/// Packed-bit container of a truth table.
pub trait Storage: Clone + Debug + Eq + Hash {
    /// Number of variables of the stored function.
    fn num_vars(&self) -> usize;

    /// The words, least significant first.
    fn words(&self) -> &[u64];

    /// Mutable access to the words.
    fn words_mut(&mut self) -> &mut [u64];
}

/// Inline storage for a compile-time arity.
///
/// `NUM_BLOCKS` must equal `max(1, 2^(NUM_VARS - 6))`; any other value is
/// rejected when the storage is first constructed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Inline<const NUM_VARS: usize, const NUM_BLOCKS: usize> {
    words: [u64; NUM_BLOCKS],
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> Inline<NUM_VARS, NUM_BLOCKS> {
    const LAYOUT_OK: () = assert!(
        NUM_BLOCKS == num_blocks_for(NUM_VARS),
        "NUM_BLOCKS must equal max(1, 2^(NUM_VARS - 6))"
    );

    /// Creates all-zero storage.
    pub fn zeroed() -> Self {
        Self::from_words([0; NUM_BLOCKS])
    }

    /// Wraps the given words without checking the masking invariant.
    pub(crate) fn from_words(words: [u64; NUM_BLOCKS]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT_OK;
        Self { words }
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> Storage for Inline<NUM_VARS, NUM_BLOCKS> {
    #[inline]
    fn num_vars(&self) -> usize {
        NUM_VARS
    }

    #[inline]
    fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}

/// Heap storage for a runtime arity.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Heap {
    num_vars: usize,
    words: Box<[u64]>,
}

impl Heap {
    /// Creates all-zero storage for `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars > MAX_VARS`.
    pub fn zeroed(num_vars: usize) -> Self {
        assert!(
            num_vars <= MAX_VARS,
            "At most {} variables are supported, got {}",
            MAX_VARS,
            num_vars
        );
        Self {
            num_vars,
            words: vec![0; num_blocks_for(num_vars)].into_boxed_slice(),
        }
    }

    /// Wraps the given words. The caller has checked the length.
    pub(crate) fn from_words(num_vars: usize, words: Vec<u64>) -> Self {
        debug_assert_eq!(words.len(), num_blocks_for(num_vars));
        Self {
            num_vars,
            words: words.into_boxed_slice(),
        }
    }
}

impl Storage for Heap {
    #[inline]
    fn num_vars(&self) -> usize {
        self.num_vars
    }

    #[inline]
    fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}
