//! Property tests for the completeness solver.
//!
//! Signatures are drawn over a small tag universe so the region of any signature can be enumerated
//! exhaustively and compared against the solver's answer:
//!
//! 1. Exactness: the leaves cover precisely the interface tuples that no implementation accepts
//! 2. Self-coverage: an interface implemented by itself has no leaves
//! 3. Monotonicity: adding an implementation never uncovers a tuple
//! 4. Leaves stay inside the interface and are inhabited

use std::collections::HashSet;

use proptest::prelude::*;

use super::{check_completeness, Leaves};
use crate::model::{Signature, TypeSet, TypeTag};

const TAG_POOL: &[&str] = &["A", "B", "C"];

fn arb_type_set() -> impl Strategy<Value = TypeSet> {
    prop::sample::subsequence(TAG_POOL, 0..=TAG_POOL.len())
        .prop_map(|tags| tags.into_iter().map(TypeTag::from).collect())
}

fn arb_signature(arity: usize) -> impl Strategy<Value = Signature> {
    prop::collection::vec(arb_type_set(), arity).prop_map(Signature::new)
}

/// An interface together with implementations of the same arity.
fn arb_overload_set() -> impl Strategy<Value = (Signature, Vec<Signature>)> {
    (1..=3usize).prop_flat_map(|arity| {
        (arb_signature(arity), prop::collection::vec(arb_signature(arity), 0..5))
    })
}

fn tuples(s: &Signature) -> HashSet<Vec<TypeTag>> {
    s.iter().fold(HashSet::from([Vec::new()]), |prefixes, p| {
        (prefixes.iter())
            .flat_map(|prefix| {
                p.iter().map(move |t| {
                    let mut tuple = prefix.clone();
                    tuple.push(t.clone());
                    tuple
                })
            })
            .collect()
    })
}

fn uncovered(interface: &Signature, implementations: &[Signature]) -> HashSet<Vec<TypeTag>> {
    (tuples(interface).into_iter())
        .filter(|tuple| !implementations.iter().any(|i| i.accepts(tuple)))
        .collect()
}

fn covered_by_leaves(leaves: &Leaves) -> HashSet<Vec<TypeTag>> {
    leaves.iter().flat_map(tuples).collect()
}

proptest! {
    #[test]
    fn leaves_are_exactly_the_uncovered_tuples((interface, implementations) in arb_overload_set()) {
        let leaves = check_completeness(&interface, &implementations).unwrap();
        prop_assert_eq!(covered_by_leaves(&leaves), uncovered(&interface, &implementations));
    }
}

proptest! {
    #[test]
    fn interface_covers_itself((interface, implementations) in arb_overload_set()) {
        let mut implementations = implementations;
        implementations.push(interface.clone());
        prop_assert!(check_completeness(&interface, &implementations).unwrap().is_empty());
    }
}

proptest! {
    #[test]
    fn adding_an_implementation_never_uncovers(
        (interface, implementations, extra) in (1..=3usize).prop_flat_map(|arity| (
            arb_signature(arity),
            prop::collection::vec(arb_signature(arity), 0..4),
            arb_signature(arity),
        ))
    ) {
        let before = check_completeness(&interface, &implementations).unwrap();
        let mut implementations = implementations;
        implementations.push(extra);
        let after = check_completeness(&interface, &implementations).unwrap();
        prop_assert!(covered_by_leaves(&after).is_subset(&covered_by_leaves(&before)));
    }
}

proptest! {
    #[test]
    fn leaves_are_inhabited_subregions((interface, implementations) in arb_overload_set()) {
        let leaves = check_completeness(&interface, &implementations).unwrap();
        for leaf in &leaves {
            prop_assert!(leaf.is_inhabited());
            prop_assert_eq!(leaf.arity(), interface.arity());
            prop_assert!(leaf.iter().zip(interface.iter()).all(|(l, p)| l.difference(p).is_empty()));
            prop_assert!(!implementations.iter().any(|i| i.overlaps(leaf)));
        }
    }
}
