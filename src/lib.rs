//! # tt-rs: Explicit truth tables in Rust
//!
//! **`tt-rs`** represents Boolean functions of `n` variables as truth tables:
//! bit vectors of length `2^n` packed into 64-bit blocks. It provides the
//! primitive algebra that logic synthesis and verification tools build on:
//! cofactoring, variable permutation and negation, support minimization,
//! resizing, shifting and enumeration.
//!
//! ## Representation
//!
//! Bit `k` of the table is the value of the function at the input assignment
//! whose `i`-th bit is the value of variable `i`. It lives in block `k >> 6`
//! at offset `k & 63`. Tables with fewer than 6 variables use a single block
//! and keep its unused high bits at zero.
//!
//! Two flavors share every operation:
//!
//! - [`StaticTruthTable<N, B>`][crate::table::StaticTruthTable]: arity `N`
//!   fixed at compile time, `B = max(1, 2^(N-6))` blocks stored inline;
//! - [`DynamicTruthTable`][crate::table::DynamicTruthTable]: arity chosen at
//!   runtime, blocks allocated once on the heap.
//!
//! Every mutating operation has an `_inplace` form taking `&mut self` and a
//! pure form returning a modified copy.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tt_rs::table::{DynamicTruthTable, StaticTruthTable};
//!
//! // f = x0 & x1
//! let and = StaticTruthTable::<2, 1>::from_blocks([0b1000]).unwrap();
//! assert!(and.has_var(0) && and.has_var(1));
//!
//! // AND is symmetric, and negating x0 gives x1 & !x0
//! assert_eq!(and.swap_adjacent(0), and);
//! assert_eq!(and.flip(0).blocks(), &[0b0100]);
//!
//! // Cofactors
//! assert!(and.cofactor0(0).is_const0());
//! assert_eq!(and.cofactor1(0), StaticTruthTable::<2, 1>::nth_var(1));
//!
//! // View it over 8 variables, then move the support back down
//! let mut wide: DynamicTruthTable = and.extend_to(8);
//! wide.swap_inplace(1, 7);
//! let support = wide.min_base_inplace();
//! assert_eq!(support, vec![0, 7]);
//! ```
//!
//! ## Preconditions
//!
//! Variable indices must be below `num_vars`, and a table can only be
//! extended to at least as many variables. Violations are programming errors
//! and panic. Building tables from external data (raw blocks or integers)
//! returns [`TruthTableError`][crate::error::TruthTableError] instead.

pub mod cofactor;
pub mod error;
pub mod extend;
pub mod masks;
pub mod permute;
pub mod shift;
pub mod storage;
pub mod support;
pub mod table;
pub mod value;
