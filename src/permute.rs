//! Variable permutation and negation.
//!
//! Variables `0..6` index bits inside a block, variables `6..` index whole
//! blocks. Each operation picks a strategy by where its variables fall:
//!
//! - inside a word: mask, shift and recombine every block;
//! - variable 5 swapped with variable 6: exchange 32-bit halves of block pairs;
//! - a word variable with a block variable: exchange bit fields between blocks;
//! - block variables only: swap whole blocks.
//!
//! All three operations are involutions.

use crate::masks::{PAIR_MASKS, PERMUTATION_MASKS, PROJECTIONS, WORD_VARS};
use crate::storage::Storage;
use crate::table::TruthTable;

const LOW_HALF: u64 = 0x0000_0000_ffff_ffff;
const HIGH_HALF: u64 = 0xffff_ffff_0000_0000;

/// Applies a three-part interleave mask: keep part 0, move part 1 up and part 2 down.
#[inline]
fn interleave(word: u64, masks: &[u64; 3], shift: usize) -> u64 {
    (word & masks[0]) | ((word & masks[1]) << shift) | ((word & masks[2]) >> shift)
}

impl<S: Storage> TruthTable<S> {
    /// Swaps variables `var` and `var + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `var + 1 >= num_vars`.
    pub fn swap_adjacent_inplace(&mut self, var: usize) {
        assert!(
            var < self.num_vars().saturating_sub(1),
            "Variable index {} has no adjacent variable among {} variables",
            var,
            self.num_vars()
        );

        if var < WORD_VARS - 1 {
            let masks = &PERMUTATION_MASKS[var];
            let shift = 1 << var;
            for w in self.blocks_mut() {
                *w = interleave(*w, masks, shift);
            }
        } else if var == WORD_VARS - 1 {
            // Variable 5 selects the upper half of a word, variable 6 the odd word of a pair.
            for pair in self.blocks_mut().chunks_exact_mut(2) {
                let (low, high) = (pair[0], pair[1]);
                pair[0] = (low & LOW_HALF) | (high << 32);
                pair[1] = (high & HIGH_HALF) | (low >> 32);
            }
        } else {
            let step = 1 << (var - WORD_VARS);
            for group in self.blocks_mut().chunks_exact_mut(4 * step) {
                let (first, second) = group.split_at_mut(2 * step);
                first[step..].swap_with_slice(&mut second[..step]);
            }
        }
    }

    /// Swaps variables `var1` and `var2`. The order of the arguments does not matter.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_inplace(&mut self, var1: usize, var2: usize) {
        self.check_var(var1);
        self.check_var(var2);

        if var1 == var2 {
            return;
        }
        let (i, j) = if var1 < var2 { (var1, var2) } else { (var2, var1) };

        if j < WORD_VARS {
            // Also covers every table with at most 6 variables.
            let masks = &PAIR_MASKS[i][j];
            let shift = (1 << j) - (1 << i);
            for w in self.blocks_mut() {
                *w = interleave(*w, masks, shift);
            }
        } else if i < WORD_VARS {
            let step = 1 << (j - WORD_VARS);
            let shift = 1 << i;
            let pos = PROJECTIONS[i];
            for group in self.blocks_mut().chunks_exact_mut(2 * step) {
                let (low, high) = group.split_at_mut(step);
                for (a, b) in low.iter_mut().zip(high.iter_mut()) {
                    let low_to_high = (*a & pos) >> shift;
                    let high_to_low = (*b << shift) & pos;
                    *a = (*a & !pos) | high_to_low;
                    *b = (*b & pos) | low_to_high;
                }
            }
        } else {
            let step1 = 1 << (i - WORD_VARS);
            let step2 = 1 << (j - WORD_VARS);
            for group in self.blocks_mut().chunks_exact_mut(2 * step2) {
                let (low, high) = group.split_at_mut(step2);
                // Blocks with x_i = 1, x_j = 0 trade places with x_i = 0, x_j = 1.
                for (a, b) in low
                    .chunks_exact_mut(2 * step1)
                    .zip(high.chunks_exact_mut(2 * step1))
                {
                    a[step1..].swap_with_slice(&mut b[..step1]);
                }
            }
        }
    }

    /// Negates the input variable `var`, i.e. replaces `f` with `f|x_var=!x_var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn flip_inplace(&mut self, var: usize) {
        self.check_var(var);

        if var < WORD_VARS {
            let shift = 1 << var;
            let pos = PROJECTIONS[var];
            for w in self.blocks_mut() {
                *w = ((*w << shift) & pos) | ((*w & pos) >> shift);
            }
        } else {
            let step = 1 << (var - WORD_VARS);
            for group in self.blocks_mut().chunks_exact_mut(2 * step) {
                let (low, high) = group.split_at_mut(step);
                low.swap_with_slice(high);
            }
        }
    }

    /// Returns the function with variables `var` and `var + 1` swapped.
    pub fn swap_adjacent(&self, var: usize) -> Self {
        let mut tt = self.clone();
        tt.swap_adjacent_inplace(var);
        tt
    }

    /// Returns the function with variables `var1` and `var2` swapped.
    pub fn swap(&self, var1: usize, var2: usize) -> Self {
        let mut tt = self.clone();
        tt.swap_inplace(var1, var2);
        tt
    }

    /// Returns the function with input `var` negated.
    pub fn flip(&self, var: usize) -> Self {
        let mut tt = self.clone();
        tt.flip_inplace(var);
        tt
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::table::{DynamicTruthTable, StaticTruthTable};

    /// Builds a table by evaluating `f` on every input assignment.
    fn from_fn(num_vars: usize, f: impl Fn(u64) -> bool) -> DynamicTruthTable {
        let mut tt = DynamicTruthTable::new(num_vars);
        for k in 0..tt.num_bits() {
            if f(k) {
                tt.set_bit(k);
            }
        }
        tt
    }

    /// Exchanges bits `i` and `j` of an input assignment.
    fn swap_bits(k: u64, i: usize, j: usize) -> u64 {
        let bi = (k >> i) & 1;
        let bj = (k >> j) & 1;
        if bi == bj {
            k
        } else {
            k ^ (1 << i) ^ (1 << j)
        }
    }

    /// Some function without symmetries, fixed per arity.
    fn sample(num_vars: usize) -> DynamicTruthTable {
        from_fn(num_vars, |k| {
            let h = k.wrapping_mul(0x9e37_79b9_7f4a_7c15).rotate_left(17);
            h.count_ones() % 2 == 1
        })
    }

    #[test]
    fn test_and_symmetric() {
        let tt = StaticTruthTable::<2, 1>::from_blocks([0b1000]).unwrap();
        assert_eq!(tt.swap_adjacent(0), tt);
        assert_eq!(tt.swap(1, 0), tt);
    }

    #[test]
    fn test_flip_and() {
        let tt = StaticTruthTable::<2, 1>::from_blocks([0b1000]).unwrap();
        let flipped = tt.flip(0);
        // x1 & !x0
        assert_eq!(flipped.blocks(), &[0b0100]);
        assert_eq!(tt.flip(1).blocks(), &[0b0010]);
    }

    #[test]
    fn test_swap_adjacent_semantics() {
        for n in [2, 5, 6, 7, 8, 9] {
            let tt = sample(n);
            for i in 0..n - 1 {
                let expected = from_fn(n, |k| tt.get_bit(swap_bits(k, i, i + 1)));
                assert_eq!(tt.swap_adjacent(i), expected, "n = {}, i = {}", n, i);
            }
        }
    }

    #[test]
    fn test_swap_semantics() {
        for n in [3, 6, 7, 8, 9] {
            let tt = sample(n);
            for i in 0..n {
                for j in 0..n {
                    let expected = from_fn(n, |k| tt.get_bit(swap_bits(k, i, j)));
                    assert_eq!(tt.swap(i, j), expected, "n = {}, i = {}, j = {}", n, i, j);
                }
            }
        }
    }

    #[test]
    fn test_flip_semantics() {
        for n in [1, 4, 6, 7, 9] {
            let tt = sample(n);
            for i in 0..n {
                let expected = from_fn(n, |k| tt.get_bit(k ^ (1 << i)));
                assert_eq!(tt.flip(i), expected, "n = {}, i = {}", n, i);
            }
        }
    }

    #[test]
    fn test_swap_matches_adjacent() {
        let tt = sample(8);
        for i in 0..7 {
            assert_eq!(tt.swap(i, i + 1), tt.swap_adjacent(i));
        }
    }

    #[test]
    fn test_involutions() {
        let tt = sample(9);
        for i in 0..9 {
            assert_eq!(tt.flip(i).flip(i), tt);
            if i + 1 < 9 {
                assert_eq!(tt.swap_adjacent(i).swap_adjacent(i), tt);
            }
            for j in 0..9 {
                assert_eq!(tt.swap(i, j).swap(i, j), tt);
            }
        }
    }

    #[test]
    fn test_swap_same_var_noop() {
        let tt = sample(7);
        for i in 0..7 {
            assert_eq!(tt.swap(i, i), tt);
        }
    }

    #[test]
    #[should_panic(expected = "has no adjacent variable")]
    fn test_swap_adjacent_last_var() {
        sample(3).swap_adjacent_inplace(2);
    }

    #[test]
    #[should_panic(expected = "has no adjacent variable")]
    fn test_swap_adjacent_huge_index() {
        sample(3).swap_adjacent_inplace(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "has no adjacent variable")]
    fn test_swap_adjacent_zero_vars() {
        sample(0).swap_adjacent_inplace(0);
    }

    #[test]
    #[should_panic(expected = "Variable index 4 out of range for 4 variables")]
    fn test_swap_out_of_range() {
        sample(4).swap_inplace(0, 4);
    }

    #[test]
    #[should_panic(expected = "Variable index 6 out of range for 6 variables")]
    fn test_flip_out_of_range() {
        sample(6).flip_inplace(6);
    }
}
