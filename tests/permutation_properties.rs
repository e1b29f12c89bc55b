//! Property-based tests for the permutation laws.
//!
//! Generates random disjoint-cycle decompositions of the standard A-Z
//! alphabet and checks the invariants that every valid permutation must
//! satisfy: forward and inverse application are mutual inverses, and the
//! derangement flag agrees with an exhaustive fixed-point scan.

use enigma::{Alphabet, Permutation};
use proptest::prelude::*;

/// Builds a syntactically valid cycle specification from a shuffled
/// alphabet: the first symbols are cut into groups of the given lengths,
/// the rest are left out of the cycles (and become fixed points).
fn cycle_spec(shuffled: Vec<char>, lens: Vec<usize>) -> String {
    let mut spec = String::new();
    let mut symbols = shuffled.into_iter();
    for len in lens {
        let group: Vec<char> = symbols.by_ref().take(len).collect();
        if group.is_empty() {
            break;
        }
        if !spec.is_empty() {
            spec.push(' ');
        }
        spec.push('(');
        spec.extend(group);
        spec.push(')');
    }
    spec
}

fn cycle_spec_strategy() -> impl Strategy<Value = String> {
    let letters: Vec<char> = ('A'..='Z').collect();
    (
        Just(letters).prop_shuffle(),
        prop::collection::vec(1usize..=7, 0..10),
    )
        .prop_map(|(shuffled, lens)| cycle_spec(shuffled, lens))
}

proptest! {
    #[test]
    fn permute_and_invert_are_mutual_inverses(spec in cycle_spec_strategy()) {
        let perm = Permutation::new(&spec, Alphabet::default()).unwrap();
        for x in 0..26 {
            prop_assert_eq!(perm.invert(perm.permute(x)), x);
            prop_assert_eq!(perm.permute(perm.invert(x)), x);
        }
    }

    #[test]
    fn permutation_is_a_bijection(spec in cycle_spec_strategy()) {
        let perm = Permutation::new(&spec, Alphabet::default()).unwrap();
        let mut seen = [false; 26];
        for x in 0..26 {
            seen[perm.permute(x) as usize] = true;
        }
        prop_assert!(seen.iter().all(|&hit| hit), "image misses an index");
    }

    #[test]
    fn derangement_flag_matches_fixed_point_scan(spec in cycle_spec_strategy()) {
        let perm = Permutation::new(&spec, Alphabet::default()).unwrap();
        let has_fixed_point = (0..26).any(|x| perm.permute(x) == x);
        prop_assert_eq!(perm.is_derangement(), !has_fixed_point);
    }

    #[test]
    fn char_and_index_application_agree(spec in cycle_spec_strategy()) {
        let alpha = Alphabet::default();
        let perm = Permutation::new(&spec, alpha.clone()).unwrap();
        for x in 0..26 {
            let ch = alpha.to_char(x).unwrap();
            let by_char = perm.permute_char(ch).unwrap();
            let by_index = alpha.to_char(perm.permute(x as i32) as usize).unwrap();
            prop_assert_eq!(by_char, by_index);
        }
    }
}
