//! Enumeration and bit shifting.
//!
//! Both operations view the blocks as one unsigned integer with block 0 as
//! the least significant word.

use log::debug;

use crate::masks::{WORD_BITS, WORD_VARS};
use crate::storage::Storage;
use crate::table::TruthTable;

impl<S: Storage> TruthTable<S> {
    /// Advances to the next table in ascending numeric order.
    ///
    /// The largest table (constant 1) wraps around to constant 0, so starting
    /// from constant 0 this visits all `2^(2^n)` tables exactly once.
    pub fn next_inplace(&mut self) {
        if self.num_vars() <= WORD_VARS {
            let w = &mut self.blocks_mut()[0];
            *w = w.wrapping_add(1);
            self.mask_bits();
        } else {
            for w in self.blocks_mut() {
                *w = w.wrapping_add(1);
                if *w != 0 {
                    break;
                }
            }
        }
    }

    /// Returns the next table in ascending numeric order.
    pub fn next(&self) -> Self {
        let mut tt = self.clone();
        tt.next_inplace();
        tt
    }

    /// Shifts all `2^n` bits left by `shift` positions.
    ///
    /// Bits moved past the most significant position are dropped and the
    /// vacated low positions become zero.
    pub fn shift_left_inplace(&mut self, shift: u64) {
        if self.num_vars() <= WORD_VARS {
            let w = &mut self.blocks_mut()[0];
            *w = if shift < WORD_BITS as u64 { *w << shift } else { 0 };
            self.mask_bits();
            return;
        }

        if shift >= self.num_bits() {
            self.clear();
            return;
        }
        if shift == 0 {
            return;
        }

        debug!("shift_left(num_vars = {}, shift = {})", self.num_vars(), shift);

        let div = (shift / WORD_BITS as u64) as usize;
        let rem = (shift % WORD_BITS as u64) as u32;
        let blocks = self.blocks_mut();
        let last = blocks.len() - 1;

        if rem != 0 {
            for i in (1..=last - div).rev() {
                blocks[i + div] = (blocks[i] << rem) | (blocks[i - 1] >> (WORD_BITS as u32 - rem));
            }
            blocks[div] = blocks[0] << rem;
        } else {
            blocks.copy_within(0..=last - div, div);
        }
        blocks[..div].fill(0);
    }

    /// Returns the table shifted left by `shift` positions.
    pub fn shift_left(&self, shift: u64) -> Self {
        let mut tt = self.clone();
        tt.shift_left_inplace(shift);
        tt
    }
}
