use pythonic::{
    bin, divmod, enumerate, len, list, map, range, reduce, sorted, sum, try_max, try_reduce,
    try_xrange, xrange, zip, BuiltinError, EmptyList, XRange,
};

#[test]
fn test_sum_of_range() {
    assert_eq!(sum(&range(10)), 45);
}

#[test]
fn test_list_of_enumerate() {
    let source = vec![10, 20, 30];
    assert_eq!(list(&enumerate(&source)), vec![(0, 10), (1, 20), (2, 30)]);
}

#[test]
fn test_map_two_sources() {
    let a = vec![1, 2, 3];
    let b = vec![10, 20, 30];
    assert_eq!(map(|(x, y)| x + y, (&a, &b)), vec![11, 22, 33]);
}

#[test]
fn test_sorted_with_duplicates() {
    let v = vec![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(sorted(&v), vec![1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_divmod_positive() {
    assert_eq!(divmod(7, 3), (2, 1));
}

#[test]
fn test_zip_numbers_and_strings() {
    let nums = vec![1, 2, 3];
    let words = vec!["a", "b", "c"];
    assert_eq!(zip((&nums, &words)), vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_empty_xranges() {
    for xr in [xrange(0), xrange((5, 5)), xrange((5, 0, 1)), xrange((0, 5, -1))] {
        assert_eq!(len(&xr), 0);
        assert_eq!(xr.iter().count(), 0);
        assert_eq!(xr.iter().rev().count(), 0);
    }
}

#[test]
fn test_negative_step_xrange() {
    assert_eq!(list(&xrange((5, 0, -2))), vec![5, 3, 1]);
    assert_eq!(xrange((5, 0, -2)).iter().rev().collect::<Vec<_>>(), vec![1, 3, 5]);
}

#[test]
fn test_reverse_iteration_of_uneven_span() {
    // 0, 3, 6, 9: the span of 10 is not a multiple of the step
    assert_eq!(xrange((0, 10, 3)).iter().rev().collect::<Vec<_>>(), vec![9, 6, 3, 0]);
}

#[test]
fn test_bin_boundaries() {
    assert_eq!(bin(0), "0b0");
    assert_eq!(bin(1), "0b1");
}

#[test]
fn test_zip_without_arguments() {
    assert_eq!(zip(()), EmptyList);
}

#[test]
fn test_reduce_single_element() {
    let mut calls = 0;
    let out = reduce(
        |a, b| {
            calls += 1;
            a + b
        },
        &vec![42],
    );
    assert_eq!(out, 42);
    assert_eq!(calls, 0);
}

#[test]
fn test_checked_variants() {
    let empty: Vec<i64> = Vec::new();
    assert!(matches!(try_xrange((1, 2, 0)), Err(BuiltinError::ZeroStep)));
    assert!(matches!(
        try_reduce(|a, b| a + b, &empty),
        Err(BuiltinError::EmptySequence { builtin: "reduce" })
    ));
    assert!(try_max(&empty).is_err());
}

#[test]
#[should_panic(expected = "xrange() arg 3 must not be zero")]
fn test_zero_step_panics() {
    let _ = XRange::new(0, 10, 0);
}

#[test]
#[should_panic(expected = "min() arg is an empty sequence")]
fn test_min_of_empty_panics() {
    let empty: Vec<i32> = Vec::new();
    pythonic::min(&empty);
}

#[test]
fn test_variadic_macros() {
    assert_eq!(pythonic::max!(1, 5, 3), 5);
    assert_eq!(pythonic::min!(4.5, 2, 8u8), 2.0);
}

#[test]
fn test_runtime_init() {
    pythonic::init();
    assert!(pythonic::logging::is_initialized());
    pythonic::cleanup();
}
