//! Tests for builtin functions working together

use super::*;
use std::collections::{BTreeSet, HashSet, LinkedList};

#[test]
fn test_range_basic() {
    let mut r = xrange(5).iter();
    assert_eq!(r.next(), Some(0));
    assert_eq!(r.next(), Some(1));
    assert_eq!(r.next(), Some(2));
    assert_eq!(r.next(), Some(3));
    assert_eq!(r.next(), Some(4));
    assert_eq!(r.next(), None);
}

#[test]
fn test_range_step() {
    assert_eq!(range((0, 10, 2)), vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_range_negative_step() {
    assert_eq!(range((10, 0, -2)), vec![10, 8, 6, 4, 2]);
}

#[test]
fn test_range_empty() {
    let r = xrange((0, 0));
    assert_eq!(len(&r), 0);
    assert_eq!(r.iter().next(), None);
    assert!(range((5, 0)).is_empty());
}

#[test]
fn test_range_len() {
    assert_eq!(len(&xrange(10)), 10);
    assert_eq!(len(&xrange((0, 10, 2))), 5);
    assert_eq!(len(&xrange((10, 0, -1))), 10);
    assert_eq!(len(&xrange((0, 10, 3))), 4);
}

#[test]
fn test_range_double_ended() {
    let mut r = xrange(5).iter();
    assert_eq!(r.next(), Some(0));
    assert_eq!(r.next_back(), Some(4));
    assert_eq!(r.next(), Some(1));
    assert_eq!(r.next_back(), Some(3));
    assert_eq!(r.next(), Some(2));
    assert_eq!(r.next(), None);
    assert_eq!(r.next_back(), None);
}

#[test]
fn test_len_across_categories() {
    let list = vec![1, 2, 3];
    let ordered: BTreeSet<_> = list.iter().copied().collect();
    let hashed: HashSet<_> = list.iter().copied().collect();
    let linked: LinkedList<_> = list.iter().copied().collect();

    assert_eq!(len(&list), 3);
    assert_eq!(len(&ordered), 3);
    assert_eq!(len(&hashed), 3);
    assert_eq!(len(&linked), 3);
    assert_eq!(len(&reversed(&list)), 3);
    assert_eq!(len(&enumerate(&list)), 3);
    assert_eq!(len(&EmptyList), 0);
}

#[test]
fn test_list_of_enumerate() {
    let source = vec!["a", "b"];
    assert_eq!(list(&enumerate(&source)), vec![(0, "a"), (1, "b")]);
}

#[test]
fn test_list_of_reversed_set() {
    let s = set(&vec![5, 1, 3]);
    assert_eq!(list(&reversed(&s)), vec![5, 3, 1]);
}

#[test]
fn test_sorted_of_hash_set() {
    let s: HashSet<i64> = range(6).into_iter().collect();
    assert_eq!(sorted(&s), range(6));
}

#[test]
fn test_zip_then_map() {
    let xs = range(4);
    let ys = map(|x| x * x, &xs);
    let pairs = zip((&xs, &ys));
    assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 4), (3, 9)]);
    assert_eq!(sum(&map(|(x, y)| x + y, (&xs, &ys))), 20);
}

#[test]
fn test_reduce_with_binary_max() {
    let v = vec![3, 9, 2];
    assert_eq!(reduce(max2, &v), 9);
    assert_eq!(reduce(min2, &v), 2);
}

#[test]
fn test_string_builtins_compose() {
    let digits = map(str, &xrange((1, 4)));
    assert_eq!(digits, vec!["1", "2", "3"]);

    let joined = reduce(|a: String, b: String| a + &b, &digits);
    assert_eq!(joined, "123");
    assert!(contains(joined.as_str(), "23"));
}

#[test]
fn test_any_all_over_generated() {
    assert!(any(&xrange(3)));
    assert!(!all(&xrange(3)));
    assert!(all(&xrange((1, 4))));
    assert!(all(&EmptyList));
}

#[test]
fn test_max_over_views() {
    let v = vec![4, 8, 1];
    assert_eq!(max(&reversed(&v)), 8);
    assert_eq!(min(&xrange((3, 30, 7))), 3);
    assert_eq!(max(&"hello"[..]), b'o');
}

#[test]
fn test_filter_over_range() {
    let evens = filter(|x| x % 2 == 0, &xrange(10));
    assert_eq!(evens, vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_init_and_cleanup() {
    init();
    cleanup();
}
