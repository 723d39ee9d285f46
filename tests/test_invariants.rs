//! Property tests for the universal invariants of the built-ins.

use proptest::prelude::*;
use pythonic::{
    divmod, enumerate, floor_divmod, len, list, map, range, reversed, sorted, sum, xrange,
};
use std::collections::{BTreeSet, LinkedList};

fn steps() -> impl Strategy<Value = i64> {
    prop_oneof![-7i64..=-1, 1i64..=7]
}

proptest! {
    #[test]
    fn prop_all_is_not_any_of_negation(v in prop::collection::vec(-50i64..50, 0..40), k in -50i64..50) {
        let holds = map(|x: &i64| *x > k, &v);
        let fails = map(|x: &i64| !(*x > k), &v);
        prop_assert_eq!(pythonic::all(&holds), !pythonic::any(&fails));
    }

    #[test]
    fn prop_divmod_reconstructs(a in -10_000i64..10_000, b in prop_oneof![-100i64..=-1, 1i64..=100]) {
        let (q, r) = divmod(a, b);
        prop_assert_eq!(q * b + r, a);

        let (q, r) = floor_divmod(a, b);
        prop_assert_eq!(q * b + r, a);
        prop_assert!(r == 0 || (r < 0) == (b < 0));
    }

    #[test]
    fn prop_double_reverse_is_identity(v in prop::collection::vec(any::<i32>(), 0..40)) {
        let once = list(&reversed(&v));
        prop_assert_eq!(list(&reversed(&once)), list(&v));

        let linked: LinkedList<i32> = v.iter().copied().collect();
        let once = list(&reversed(&linked));
        prop_assert_eq!(list(&reversed(&once)), v.clone());

        let ordered: BTreeSet<i32> = v.iter().copied().collect();
        let twice = list(&reversed(&list(&reversed(&ordered))));
        prop_assert_eq!(twice, list(&ordered));
    }

    #[test]
    fn prop_list_preserves_len(v in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(len(&list(&v)), len(&v));

        let text: String = v.iter().map(|b| char::from(b'a' + b % 26)).collect();
        prop_assert_eq!(len(&list(text.as_str())), len(text.as_str()));
    }

    #[test]
    fn prop_xrange_len_counts_terms(b in -60i64..60, e in -60i64..60, s in steps()) {
        let expected = (0i64..)
            .map(|k| b + k * s)
            .take_while(|&v| if s > 0 { v < e } else { v > e })
            .count() as i64;

        let xr = xrange((b, e, s));
        prop_assert_eq!(len(&xr), expected);
        prop_assert_eq!(xr.iter().count() as i64, expected);
        prop_assert_eq!(range((b, e, s)).len() as i64, expected);
    }

    #[test]
    fn prop_xrange_reverse_mirrors_forward(b in -60i64..60, e in -60i64..60, s in steps()) {
        let xr = xrange((b, e, s));
        let mut forward: Vec<i64> = xr.iter().collect();
        forward.reverse();
        prop_assert_eq!(xr.iter().rev().collect::<Vec<_>>(), forward);
    }

    #[test]
    fn prop_xrange_membership(b in -60i64..60, e in -60i64..60, s in steps(), value in -80i64..80) {
        let xr = xrange((b, e, s));
        prop_assert_eq!(pythonic::contains(&xr, &value), xr.iter().any(|v| v == value));
    }

    #[test]
    fn prop_gauss_sum(n in 0i64..2_000) {
        prop_assert_eq!(sum(&range((0, n + 1))), n * (n + 1) / 2);
    }

    #[test]
    fn prop_sorted_is_idempotent(v in prop::collection::vec(any::<i16>(), 0..64)) {
        let once = sorted(&v);
        prop_assert_eq!(sorted(&once), once.clone());
        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_enumerate_pairs_index_with_element(v in prop::collection::vec(any::<i32>(), 0..40)) {
        let pairs = list(&enumerate(&v));
        prop_assert_eq!(pairs.len(), v.len());
        for (i, pair) in pairs.iter().enumerate() {
            prop_assert_eq!(*pair, (i as i64, v[i]));
        }
    }

    #[test]
    fn prop_max_min_bound_every_element(v in prop::collection::vec(-1_000i64..1_000, 1..40)) {
        let hi = pythonic::max(&v);
        let lo = pythonic::min(&v);
        prop_assert!(v.iter().all(|x| lo <= *x && *x <= hi));
        prop_assert!(v.contains(&hi) && v.contains(&lo));
    }
}
