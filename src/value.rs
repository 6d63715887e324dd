//! Integer view of truth tables.
//!
//! A table over `n` variables is the unsigned integer `sum(bit_k * 2^k)`,
//! which ranges over `0..2^(2^n)`. This is the order used by
//! [`next_inplace`][crate::table::TruthTable::next_inplace].

use num_bigint::BigUint;

use crate::error::TruthTableError;
use crate::masks::num_blocks_for;
use crate::storage::{Inline, Storage, MAX_VARS};
use crate::table::{check_arity, DynamicTruthTable, StaticTruthTable, TruthTable};

/// Number of distinct Boolean functions over `num_vars` variables, `2^(2^num_vars)`.
///
/// # Panics
///
/// Panics if `num_vars` exceeds [`MAX_VARS`].
pub fn num_functions(num_vars: usize) -> BigUint {
    assert!(
        num_vars <= MAX_VARS,
        "At most {} variables are supported, got {}",
        MAX_VARS,
        num_vars
    );
    BigUint::from(1u32) << (1u64 << num_vars)
}

impl<S: Storage> TruthTable<S> {
    /// Returns the table as an unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        let bytes: Vec<u8> = self.blocks().iter().flat_map(|w| w.to_le_bytes()).collect();
        BigUint::from_bytes_le(&bytes)
    }
}

/// Splits `value` into `num_blocks_for(num_vars)` words, checking that it fits.
fn to_words(num_vars: usize, value: &BigUint) -> Result<Vec<u64>, TruthTableError> {
    if value.bits() > 1u64 << num_vars {
        return Err(TruthTableError::ValueOutOfRange { num_vars });
    }
    let mut words = value.to_u64_digits();
    words.resize(num_blocks_for(num_vars), 0);
    Ok(words)
}

impl DynamicTruthTable {
    /// Creates the table over `num_vars` variables whose integer value is `value`.
    pub fn from_biguint(num_vars: usize, value: &BigUint) -> Result<Self, TruthTableError> {
        check_arity(num_vars)?;
        let words = to_words(num_vars, value)?;
        Self::from_blocks(num_vars, words)
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> StaticTruthTable<NUM_VARS, NUM_BLOCKS> {
    /// Creates the table whose integer value is `value`.
    pub fn from_biguint(value: &BigUint) -> Result<Self, TruthTableError> {
        let words = to_words(NUM_VARS, value)?;
        let mut blocks = [0; NUM_BLOCKS];
        blocks.copy_from_slice(&words);
        Ok(Self::from_storage(Inline::from_words(blocks)))
    }
}
