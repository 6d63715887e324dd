//! Support minimization.

use log::{debug, trace};

use crate::storage::Storage;
use crate::table::TruthTable;

impl<S: Storage> TruthTable<S> {
    /// Moves the variables in the functional support to the lowest indices.
    ///
    /// For example, `x0 & x2` becomes `x0 & x1`. The arity of the table does
    /// not change: variables outside the support end up at the top and the
    /// function does not depend on them.
    ///
    /// Returns the original indices of the support variables in ascending
    /// order. Passing them to [`expand_inplace`][Self::expand_inplace]
    /// restores the original function.
    pub fn min_base_inplace(&mut self) -> Vec<usize> {
        debug!("min_base(num_vars = {})", self.num_vars());

        let mut support = Vec::new();
        let mut k = 0;
        for i in 0..self.num_vars() {
            if !self.has_var(i) {
                continue;
            }
            if k < i {
                trace!("min_base: moving x{} to x{}", i, k);
                self.swap_inplace(k, i);
            }
            support.push(i);
            k += 1;
        }

        debug!("min_base: support = {:?}", support);
        support
    }

    /// Moves the support variables of a minimized function back to their
    /// original indices. Inverse of [`min_base_inplace`][Self::min_base_inplace].
    ///
    /// # Panics
    ///
    /// Panics if `support[i] < i` for some position `i`, or if an index is
    /// out of range.
    pub fn expand_inplace(&mut self, support: &[usize]) {
        debug!("expand(num_vars = {}, support = {:?})", self.num_vars(), support);

        for (i, &var) in support.iter().enumerate().rev() {
            assert!(
                i <= var,
                "Support variable x{} cannot move down to position {}",
                var,
                i
            );
            self.swap_inplace(i, var);
        }
    }

    /// Returns the minimized function together with its support.
    pub fn min_base(&self) -> (Self, Vec<usize>) {
        let mut tt = self.clone();
        let support = tt.min_base_inplace();
        (tt, support)
    }

    /// Returns the function with its support variables moved back.
    pub fn expand(&self, support: &[usize]) -> Self {
        let mut tt = self.clone();
        tt.expand_inplace(support);
        tt
    }
}
