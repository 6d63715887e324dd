//! The truth table type and its basic accessors.

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::error::TruthTableError;
use crate::masks::{length_mask, num_blocks_for, PROJECTIONS, WORD_BITS, WORD_VARS};
use crate::storage::{Heap, Inline, Storage, MAX_VARS};

/// A Boolean function of `num_vars` variables stored as a bit vector of
/// length `2^num_vars`.
///
/// Bit `k` is the function value at the input assignment whose `i`-th bit is
/// the value of variable `i`. When `num_vars < 6` only the low `2^num_vars`
/// bits of the single block are used and the remaining bits are kept zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable<S: Storage> {
    storage: S,
}

/// Truth table whose arity is fixed at compile time.
///
/// `NUM_BLOCKS` must be `max(1, 2^(NUM_VARS - 6))`, e.g. `StaticTruthTable<3, 1>`
/// or `StaticTruthTable<8, 4>`.
pub type StaticTruthTable<const NUM_VARS: usize, const NUM_BLOCKS: usize> =
    TruthTable<Inline<NUM_VARS, NUM_BLOCKS>>;

/// Truth table whose arity is chosen at runtime.
pub type DynamicTruthTable = TruthTable<Heap>;

impl<S: Storage> TruthTable<S> {
    pub(crate) fn from_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Number of variables.
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.storage.num_vars()
    }

    /// Number of 64-bit blocks.
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.storage.words().len()
    }

    /// Number of meaningful bits, `2^num_vars`.
    #[inline]
    pub fn num_bits(&self) -> u64 {
        1 << self.num_vars()
    }

    /// The blocks, least significant first.
    #[inline]
    pub fn blocks(&self) -> &[u64] {
        self.storage.words()
    }

    #[inline]
    pub(crate) fn blocks_mut(&mut self) -> &mut [u64] {
        self.storage.words_mut()
    }

    /// Clears the bits above `2^num_vars` in a single-block table.
    #[inline]
    pub(crate) fn mask_bits(&mut self) {
        if self.num_vars() < WORD_VARS {
            let mask = length_mask(self.num_vars());
            self.blocks_mut()[0] &= mask;
        }
    }

    #[inline]
    pub(crate) fn check_var(&self, var: usize) {
        assert!(
            var < self.num_vars(),
            "Variable index {} out of range for {} variables",
            var,
            self.num_vars()
        );
    }

    #[inline]
    fn check_bit(&self, index: u64) {
        assert!(
            index < self.num_bits(),
            "Bit index {} out of range for {} bits",
            index,
            self.num_bits()
        );
    }

    /// Returns the function value at input assignment `index`.
    pub fn get_bit(&self, index: u64) -> bool {
        self.check_bit(index);
        let word = self.blocks()[(index as usize) / WORD_BITS];
        (word >> (index as usize % WORD_BITS)) & 1 == 1
    }

    /// Sets the function value at input assignment `index` to one.
    pub fn set_bit(&mut self, index: u64) {
        self.check_bit(index);
        self.blocks_mut()[(index as usize) / WORD_BITS] |= 1 << (index as usize % WORD_BITS);
    }

    /// Sets the function value at input assignment `index` to zero.
    pub fn clear_bit(&mut self, index: u64) {
        self.check_bit(index);
        self.blocks_mut()[(index as usize) / WORD_BITS] &= !(1 << (index as usize % WORD_BITS));
    }

    /// Turns the table into the constant-0 function.
    pub fn clear(&mut self) {
        self.blocks_mut().fill(0);
    }

    /// Checks whether the function is constant 0.
    pub fn is_const0(&self) -> bool {
        self.blocks().iter().all(|&w| w == 0)
    }

    /// Number of satisfying assignments.
    pub fn count_ones(&self) -> u64 {
        self.blocks().iter().map(|w| w.count_ones() as u64).sum()
    }

    /// Overwrites the table with the projection function `x_var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn nth_var_inplace(&mut self, var: usize) {
        self.check_var(var);
        if var < WORD_VARS {
            self.blocks_mut().fill(PROJECTIONS[var]);
            self.mask_bits();
        } else {
            let shift = var - WORD_VARS;
            for (i, word) in self.blocks_mut().iter_mut().enumerate() {
                *word = if (i >> shift) & 1 == 1 { u64::MAX } else { 0 };
            }
        }
    }
}

impl<S: Storage> Debug for TruthTable<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruthTable")
            .field("num_vars", &self.num_vars())
            .field("blocks", &format_args!("{:x?}", self.blocks()))
            .finish()
    }
}

/// Tables are ordered by arity first, then as unsigned integers compared
/// from the most significant block down.
impl<S: Storage> Ord for TruthTable<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_vars()
            .cmp(&other.num_vars())
            .then_with(|| self.blocks().iter().rev().cmp(other.blocks().iter().rev()))
    }
}

impl<S: Storage> PartialOrd for TruthTable<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> StaticTruthTable<NUM_VARS, NUM_BLOCKS> {
    /// Creates the constant-0 table.
    pub fn new() -> Self {
        Self::from_storage(Inline::zeroed())
    }

    /// Creates a table from raw blocks, least significant first.
    pub fn from_blocks(blocks: [u64; NUM_BLOCKS]) -> Result<Self, TruthTableError> {
        check_stray_bits(NUM_VARS, &blocks)?;
        Ok(Self::from_storage(Inline::from_words(blocks)))
    }

    /// Creates the projection function `x_var`.
    pub fn nth_var(var: usize) -> Self {
        let mut tt = Self::new();
        tt.nth_var_inplace(var);
        tt
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> Default for StaticTruthTable<NUM_VARS, NUM_BLOCKS> {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicTruthTable {
    /// Creates the constant-0 table over `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars` exceeds [`MAX_VARS`].
    pub fn new(num_vars: usize) -> Self {
        Self::from_storage(Heap::zeroed(num_vars))
    }

    /// Fallible version of [`new`][Self::new].
    pub fn try_new(num_vars: usize) -> Result<Self, TruthTableError> {
        check_arity(num_vars)?;
        Ok(Self::new(num_vars))
    }

    /// Creates a table from raw blocks, least significant first.
    pub fn from_blocks(num_vars: usize, blocks: Vec<u64>) -> Result<Self, TruthTableError> {
        check_arity(num_vars)?;
        let expected = num_blocks_for(num_vars);
        if blocks.len() != expected {
            return Err(TruthTableError::BlockCountMismatch {
                num_vars,
                expected,
                actual: blocks.len(),
            });
        }
        check_stray_bits(num_vars, &blocks)?;
        Ok(Self::from_storage(Heap::from_words(num_vars, blocks)))
    }

    /// Creates the projection function `x_var` over `num_vars` variables.
    pub fn nth_var(num_vars: usize, var: usize) -> Self {
        let mut tt = Self::new(num_vars);
        tt.nth_var_inplace(var);
        tt
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> From<&StaticTruthTable<NUM_VARS, NUM_BLOCKS>>
    for DynamicTruthTable
{
    fn from(tt: &StaticTruthTable<NUM_VARS, NUM_BLOCKS>) -> Self {
        Self::from_storage(Heap::from_words(NUM_VARS, tt.blocks().to_vec()))
    }
}

pub(crate) fn check_arity(num_vars: usize) -> Result<(), TruthTableError> {
    if num_vars > MAX_VARS {
        return Err(TruthTableError::TooManyVars {
            num_vars,
            max: MAX_VARS,
        });
    }
    Ok(())
}

fn check_stray_bits(num_vars: usize, blocks: &[u64]) -> Result<(), TruthTableError> {
    if blocks[0] & !length_mask(num_vars) != 0 {
        return Err(TruthTableError::StrayBits { num_vars });
    }
    Ok(())
}
