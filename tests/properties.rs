//! Algebraic properties checked on random tables of both storage flavors.
//!
//! Arities are chosen to hit every strategy: a single partial word (n < 6),
//! a single full word (n = 6), two words (n = 7) and several words (n >= 8).

use std::collections::HashSet;

use num_bigint::BigUint;
use proptest::prelude::*;

use tt_rs::masks::{length_mask, num_blocks_for};
use tt_rs::storage::Storage;
use tt_rs::table::{DynamicTruthTable, StaticTruthTable, TruthTable};
use tt_rs::value::num_functions;

fn assert_masked<S: Storage>(tt: &TruthTable<S>) {
    assert_eq!(
        tt.blocks()[0] & !length_mask(tt.num_vars()),
        0,
        "stray bits in {:?}",
        tt
    );
}

fn check_involutions<S: Storage>(tt: &TruthTable<S>) {
    let n = tt.num_vars();
    for i in 0..n {
        let flipped = tt.flip(i);
        assert_masked(&flipped);
        assert_eq!(&flipped.flip(i), tt);

        if i + 1 < n {
            let swapped = tt.swap_adjacent(i);
            assert_masked(&swapped);
            assert_eq!(&swapped.swap_adjacent(i), tt);
            assert_eq!(swapped, tt.swap(i, i + 1));
        }

        for j in 0..n {
            let swapped = tt.swap(i, j);
            assert_masked(&swapped);
            assert_eq!(&swapped.swap(i, j), tt);
            assert_eq!(swapped, tt.swap(j, i));
        }
    }
}

fn check_independence<S: Storage>(tt: &TruthTable<S>) {
    for i in 0..tt.num_vars() {
        let depends = tt.has_var(i);
        assert_eq!(depends, &tt.flip(i) != tt, "flip, x{}", i);
        assert_eq!(depends, tt.cofactor0(i) != tt.cofactor1(i), "cofactors, x{}", i);
    }
}

fn check_cofactor_closure<S: Storage>(tt: &TruthTable<S>) {
    for i in 0..tt.num_vars() {
        let f0 = tt.cofactor0(i);
        let f1 = tt.cofactor1(i);
        assert_masked(&f0);
        assert_masked(&f1);
        assert!(!f0.has_var(i));
        assert!(!f1.has_var(i));
        for j in 0..tt.num_vars() {
            if j != i && !tt.has_var(j) {
                assert!(!f0.has_var(j));
                assert!(!f1.has_var(j));
            }
        }
    }
}

fn check_min_base_round_trip<S: Storage>(tt: &TruthTable<S>) {
    let (minimized, support) = tt.min_base();
    assert!(support.windows(2).all(|w| w[0] < w[1]));
    for (i, &var) in support.iter().enumerate() {
        assert!(tt.has_var(var));
        assert!(minimized.has_var(i));
    }
    for i in support.len()..tt.num_vars() {
        assert!(!minimized.has_var(i));
    }
    assert_eq!(&minimized.expand(&support), tt);
}

fn check_extend_round_trip<S: Storage>(tt: &TruthTable<S>) {
    let n = tt.num_vars();
    for m in n..=n + 2 {
        let mut g = tt.extend_to(m);
        for i in n..m {
            assert!(!g.has_var(i));
            g.cofactor0_inplace(i);
        }
        for k in 0..tt.num_bits() {
            assert_eq!(g.get_bit(k), tt.get_bit(k));
        }
        assert_eq!(g.count_ones(), tt.count_ones() << (m - n));
    }
}

fn check_shift<S: Storage>(tt: &TruthTable<S>, shift: u64) {
    assert_eq!(&tt.shift_left(0), tt);
    assert!(tt.shift_left(tt.num_bits()).is_const0());

    let shifted = tt.shift_left(shift);
    assert_masked(&shifted);
    let expected = (tt.to_biguint() << shift) % num_functions(tt.num_vars());
    assert_eq!(shifted.to_biguint(), expected);
}

fn check_next<S: Storage>(tt: &TruthTable<S>) {
    let next = tt.next();
    assert_masked(&next);
    let expected = (tt.to_biguint() + 1u32) % num_functions(tt.num_vars());
    assert_eq!(next.to_biguint(), expected);
}

fn check_all<S: Storage>(tt: &TruthTable<S>, shift: u64) {
    assert_masked(tt);
    check_involutions(tt);
    check_independence(tt);
    check_cofactor_closure(tt);
    check_min_base_round_trip(tt);
    check_extend_round_trip(tt);
    check_shift(tt, shift);
    check_next(tt);
}

fn random_blocks(num_vars: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), num_blocks_for(num_vars)).prop_map(move |mut words| {
        words[0] &= length_mask(num_vars);
        words
    })
}

/// Random tables whose support is a random subset of the variables.
fn sparse_blocks(num_vars: usize) -> impl Strategy<Value = Vec<u64>> {
    (random_blocks(num_vars), any::<u16>()).prop_map(move |(words, removed)| {
        let mut tt = DynamicTruthTable::from_blocks(num_vars, words).unwrap();
        for i in 0..num_vars {
            if (removed >> i) & 1 == 1 {
                tt.cofactor0_inplace(i);
            }
        }
        tt.blocks().to_vec()
    })
}

fn dynamic_table() -> impl Strategy<Value = DynamicTruthTable> {
    (0usize..=9)
        .prop_flat_map(|n| prop_oneof![random_blocks(n), sparse_blocks(n)].prop_map(move |w| (n, w)))
        .prop_map(|(n, words)| DynamicTruthTable::from_blocks(n, words).unwrap())
}

fn table_pair() -> impl Strategy<Value = (DynamicTruthTable, DynamicTruthTable)> {
    (0usize..=8)
        .prop_flat_map(|n| (random_blocks(n), random_blocks(n)).prop_map(move |(a, b)| (n, a, b)))
        .prop_map(|(n, a, b)| {
            (
                DynamicTruthTable::from_blocks(n, a).unwrap(),
                DynamicTruthTable::from_blocks(n, b).unwrap(),
            )
        })
}

fn static_table<const N: usize, const B: usize>(words: Vec<u64>) -> StaticTruthTable<N, B> {
    let blocks: [u64; B] = words.try_into().unwrap();
    StaticTruthTable::from_blocks(blocks).unwrap()
}

proptest! {
    #[test]
    fn dynamic_properties(tt in dynamic_table(), shift in 0u64..600) {
        check_all(&tt, shift);
    }

    #[test]
    fn dynamic_ordering_matches_value((a, b) in table_pair()) {
        prop_assert_eq!(a.cmp(&b), a.to_biguint().cmp(&b.to_biguint()));
    }

    #[test]
    fn static_properties_0(words in random_blocks(0), shift in 0u64..4) {
        check_all(&static_table::<0, 1>(words), shift);
    }

    #[test]
    fn static_properties_3(words in sparse_blocks(3), shift in 0u64..10) {
        check_all(&static_table::<3, 1>(words), shift);
    }

    #[test]
    fn static_properties_5(words in random_blocks(5), shift in 0u64..40) {
        check_all(&static_table::<5, 1>(words), shift);
    }

    #[test]
    fn static_properties_6(words in sparse_blocks(6), shift in 0u64..70) {
        check_all(&static_table::<6, 1>(words), shift);
    }

    #[test]
    fn static_properties_7(words in random_blocks(7), shift in 0u64..140) {
        check_all(&static_table::<7, 2>(words), shift);
    }

    #[test]
    fn static_properties_8(words in sparse_blocks(8), shift in 0u64..270) {
        check_all(&static_table::<8, 4>(words), shift);
    }

    #[test]
    fn static_matches_dynamic(words in random_blocks(8), i in 0usize..8, j in 0usize..8, shift in 0u64..256) {
        let s = static_table::<8, 4>(words.clone());
        let d = DynamicTruthTable::from_blocks(8, words).unwrap();
        prop_assert_eq!(DynamicTruthTable::from(&s.swap(i, j)), d.swap(i, j));
        prop_assert_eq!(DynamicTruthTable::from(&s.flip(i)), d.flip(i));
        prop_assert_eq!(DynamicTruthTable::from(&s.cofactor1(j)), d.cofactor1(j));
        prop_assert_eq!(DynamicTruthTable::from(&s.shift_left(shift)), d.shift_left(shift));
        prop_assert_eq!(s.min_base().1, d.min_base().1);
    }
}

#[test]
fn enumeration_cycle_two_vars() {
    let mut s = StaticTruthTable::<2, 1>::new();
    let mut d = DynamicTruthTable::new(2);
    for _ in 0..16 {
        s.next_inplace();
        d.next_inplace();
        assert_eq!(s.blocks(), d.blocks());
    }
    assert!(s.is_const0());
    assert!(d.is_const0());
}

#[test]
fn enumeration_visits_every_table() {
    let mut tt = DynamicTruthTable::new(3);
    let mut seen = HashSet::new();
    loop {
        assert!(seen.insert(tt.clone()));
        tt.next_inplace();
        if tt.is_const0() {
            break;
        }
    }
    assert_eq!(BigUint::from(seen.len()), num_functions(3));
}

#[test]
fn min_base_and_of_x0_x2() {
    // x0 & x2 over 3 variables
    let mut tt = DynamicTruthTable::new(3);
    tt.set_bit(0b101);
    tt.set_bit(0b111);
    let original = tt.clone();

    let support = tt.min_base_inplace();
    assert_eq!(support, vec![0, 2]);

    let and2 = DynamicTruthTable::from_blocks(2, vec![0b1000]).unwrap();
    assert_eq!(tt, and2.extend_to(3));

    tt.expand_inplace(&support);
    assert_eq!(tt, original);
}

#[test]
fn swap_and_flip_of_and() {
    let and = StaticTruthTable::<2, 1>::from_blocks([0b1000]).unwrap();
    assert_eq!(and.swap_adjacent(0), and);

    let mut flipped = and;
    flipped.flip_inplace(0);
    assert_eq!(flipped.blocks(), &[0b0100]);
    assert!(flipped.get_bit(2));
    assert_eq!(flipped.count_ones(), 1);
}
