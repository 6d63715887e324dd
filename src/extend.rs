//! Extending a table to more variables.

use std::cmp::min;

use log::debug;

use crate::masks::WORD_VARS;
use crate::storage::Storage;
use crate::table::{DynamicTruthTable, StaticTruthTable, TruthTable};

fn check_extend(from: usize, to: usize) {
    assert!(
        to >= from,
        "Cannot extend a table over {} variables to {} variables",
        from,
        to
    );
}

impl<S: Storage> TruthTable<S> {
    /// Overwrites `target` with this function, viewed as a function over
    /// `target.num_vars()` variables.
    ///
    /// The additional variables are not in the support of the result: the
    /// table is replicated along them.
    ///
    /// # Panics
    ///
    /// Panics if `target` has fewer variables than `self`.
    pub fn extend_into<T: Storage>(&self, target: &mut TruthTable<T>) {
        check_extend(self.num_vars(), target.num_vars());
        debug!("extend(from = {}, to = {})", self.num_vars(), target.num_vars());

        if self.num_vars() < WORD_VARS {
            let mut word = self.blocks()[0];
            for i in self.num_vars()..min(WORD_VARS, target.num_vars()) {
                word |= word << (1 << i);
            }
            target.blocks_mut().fill(word);
        } else {
            let source = self.blocks();
            for chunk in target.blocks_mut().chunks_exact_mut(source.len()) {
                chunk.copy_from_slice(source);
            }
        }
    }

    /// Returns this function as a dynamic table over `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars < self.num_vars()`.
    pub fn extend_to(&self, num_vars: usize) -> DynamicTruthTable {
        check_extend(self.num_vars(), num_vars);
        let mut tt = DynamicTruthTable::new(num_vars);
        self.extend_into(&mut tt);
        tt
    }
}

impl<const NUM_VARS: usize, const NUM_BLOCKS: usize> StaticTruthTable<NUM_VARS, NUM_BLOCKS> {
    /// Creates a static table from a function over at most `NUM_VARS` variables.
    ///
    /// # Panics
    ///
    /// Panics if `source` has more than `NUM_VARS` variables.
    pub fn extend_from<T: Storage>(source: &TruthTable<T>) -> Self {
        let mut tt = Self::new();
        source.extend_into(&mut tt);
        tt
    }
}
