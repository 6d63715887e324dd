//! Cofactors and functional dependence.

use crate::masks::{PROJECTIONS, PROJECTIONS_NEG, WORD_VARS};
use crate::storage::Storage;
use crate::table::TruthTable;

impl<S: Storage> TruthTable<S> {
    /// Checks whether the function depends on variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn has_var(&self, var: usize) -> bool {
        self.check_var(var);

        if var < WORD_VARS {
            let shift = 1 << var;
            let neg = PROJECTIONS_NEG[var];
            self.blocks().iter().any(|&w| (w >> shift) & neg != w & neg)
        } else {
            let step = 1 << (var - WORD_VARS);
            self.blocks()
                .chunks_exact(2 * step)
                .any(|group| group[..step] != group[step..])
        }
    }

    /// Replaces the function with its cofactor `f|x_var=0`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn cofactor0_inplace(&mut self, var: usize) {
        self.check_var(var);

        if var < WORD_VARS {
            let shift = 1 << var;
            let neg = PROJECTIONS_NEG[var];
            for w in self.blocks_mut() {
                *w = ((*w & neg) << shift) | (*w & neg);
            }
        } else {
            let step = 1 << (var - WORD_VARS);
            for group in self.blocks_mut().chunks_exact_mut(2 * step) {
                let (low, high) = group.split_at_mut(step);
                high.copy_from_slice(low);
            }
        }
    }

    /// Replaces the function with its cofactor `f|x_var=1`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn cofactor1_inplace(&mut self, var: usize) {
        self.check_var(var);

        if var < WORD_VARS {
            let shift = 1 << var;
            let pos = PROJECTIONS[var];
            for w in self.blocks_mut() {
                *w = (*w & pos) | ((*w & pos) >> shift);
            }
        } else {
            let step = 1 << (var - WORD_VARS);
            for group in self.blocks_mut().chunks_exact_mut(2 * step) {
                let (low, high) = group.split_at_mut(step);
                low.copy_from_slice(high);
            }
        }
    }

    /// Returns the cofactor `f|x_var=0`.
    pub fn cofactor0(&self, var: usize) -> Self {
        let mut tt = self.clone();
        tt.cofactor0_inplace(var);
        tt
    }

    /// Returns the cofactor `f|x_var=1`.
    pub fn cofactor1(&self, var: usize) -> Self {
        let mut tt = self.clone();
        tt.cofactor1_inplace(var);
        tt
    }
}
