//! Precomputed bit masks for variables that live inside a single 64-bit word.
//!
//! Bit `k` of a block stores the function value at the input assignment `k`,
//! so variable `i < 6` selects bits whose index has bit `i` set. All tables are
//! evaluated at compile time and shared by every truth table.

/// Number of variables whose values are encoded inside one block.
pub const WORD_VARS: usize = 6;

/// Number of bits in one block.
pub const WORD_BITS: usize = 64;

/// `PROJECTIONS[i]` has bit `k` set iff bit `i` of `k` is one.
///
/// In other words, it is the truth table of the function `x_i` over 6 variables.
pub const PROJECTIONS: [u64; WORD_VARS] = projections();

/// Complements of [`PROJECTIONS`]: bits where variable `i` is zero.
pub const PROJECTIONS_NEG: [u64; WORD_VARS] = projections_neg();

/// Interleave masks for swapping adjacent variables `i` and `i + 1` (`i < 5`).
///
/// See [`PAIR_MASKS`] for the meaning of the three parts.
pub const PERMUTATION_MASKS: [[u64; 3]; WORD_VARS - 1] = permutation_masks();

/// Interleave masks for swapping variables `i < j < 6`, indexed as `[i][j]`.
///
/// - `[0]`: bits where `x_i == x_j`, they stay in place;
/// - `[1]`: bits where `x_i = 1, x_j = 0`, they move up by `2^j - 2^i`;
/// - `[2]`: bits where `x_i = 0, x_j = 1`, they move down by `2^j - 2^i`.
///
/// Entries with `i >= j` are zero and never used.
pub const PAIR_MASKS: [[[u64; 3]; WORD_VARS]; WORD_VARS] = pair_masks();

const fn projection(var: usize) -> u64 {
    let mut mask = 0u64;
    let mut k = 0;
    while k < WORD_BITS {
        if (k >> var) & 1 == 1 {
            mask |= 1u64 << k;
        }
        k += 1;
    }
    mask
}

const fn projections() -> [u64; WORD_VARS] {
    let mut table = [0u64; WORD_VARS];
    let mut i = 0;
    while i < WORD_VARS {
        table[i] = projection(i);
        i += 1;
    }
    table
}

const fn projections_neg() -> [u64; WORD_VARS] {
    let mut table = projections();
    let mut i = 0;
    while i < WORD_VARS {
        table[i] = !table[i];
        i += 1;
    }
    table
}

const fn pair_mask(i: usize, j: usize) -> [u64; 3] {
    let mut masks = [0u64; 3];
    let mut k = 0;
    while k < WORD_BITS {
        let xi = (k >> i) & 1;
        let xj = (k >> j) & 1;
        let part = if xi == xj {
            0
        } else if xi == 1 {
            1
        } else {
            2
        };
        masks[part] |= 1u64 << k;
        k += 1;
    }
    masks
}

const fn pair_masks() -> [[[u64; 3]; WORD_VARS]; WORD_VARS] {
    let mut table = [[[0u64; 3]; WORD_VARS]; WORD_VARS];
    let mut i = 0;
    while i < WORD_VARS {
        let mut j = i + 1;
        while j < WORD_VARS {
            table[i][j] = pair_mask(i, j);
            j += 1;
        }
        i += 1;
    }
    table
}

const fn permutation_masks() -> [[u64; 3]; WORD_VARS - 1] {
    let mut table = [[0u64; 3]; WORD_VARS - 1];
    let mut i = 0;
    while i < WORD_VARS - 1 {
        table[i] = pair_mask(i, i + 1);
        i += 1;
    }
    table
}

/// Mask of the meaningful bits of a single-block table with `num_vars` variables.
#[inline]
pub const fn length_mask(num_vars: usize) -> u64 {
    if num_vars >= WORD_VARS {
        u64::MAX
    } else {
        (1u64 << (1 << num_vars)) - 1
    }
}

/// Number of blocks needed to store `2^num_vars` bits.
#[inline]
pub const fn num_blocks_for(num_vars: usize) -> usize {
    if num_vars <= WORD_VARS {
        1
    } else {
        1 << (num_vars - WORD_VARS)
    }
}
