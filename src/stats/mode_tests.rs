//! Tests for stats/mode

use super::*;
use proptest::prelude::*;

#[test]
fn test_mode_single_winner() {
    assert_eq!(mode(&[1, 2, 2, 3, 4]), vec![2]);
}

#[test]
fn test_mode_tie_in_first_max_order() {
    assert_eq!(mode(&[1, 1, 2, 2, 3]), vec![1, 2]);
}

#[test]
fn test_mode_tie_order_follows_scan_not_value() {
    assert_eq!(mode(&[2, 2, 1, 1]), vec![2, 1]);
    assert_eq!(mode(&[1, 2, 2, 1]), vec![2, 1]);
}

#[test]
fn test_mode_all_distinct_keeps_input_order() {
    assert_eq!(mode(&[5, 3, 9]), vec![5, 3, 9]);
}

#[test]
fn test_mode_later_value_overtakes() {
    assert_eq!(mode(&[1, 1, 2, 2, 2]), vec![2]);
}

#[test]
fn test_mode_supports_values_outside_small_range() {
    assert_eq!(mode(&[-500, 1_000_000, -500]), vec![-500]);
    assert_eq!(mode(&[i32::MIN, i32::MAX, i32::MAX]), vec![i32::MAX]);
}

#[test]
fn test_mode_empty() {
    assert!(mode(&[]).is_empty());
    let set = mode_with_frequency(&[]);
    assert!(set.is_empty());
    assert_eq!(set.frequency, 0);
}

#[test]
fn test_mode_with_frequency_reports_count() {
    let set = mode_with_frequency(&[1, 2, 2, 3, 4]);
    assert_eq!(set.values, vec![2]);
    assert_eq!(set.frequency, 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_mode_values_share_max_frequency(
        data in prop::collection::vec(-20i32..20, 1..80)
    ) {
        let set = mode_with_frequency(&data);
        let occurrences = |v: i32| data.iter().filter(|&&x| x == v).count();
        let max = data.iter().map(|&x| occurrences(x)).max().unwrap();

        prop_assert_eq!(set.frequency, max);
        for &v in &set.values {
            prop_assert_eq!(occurrences(v), max);
        }
        let expected = data
            .iter()
            .filter(|&&x| occurrences(x) == max)
            .collect::<std::collections::HashSet<_>>()
            .len();
        prop_assert_eq!(set.values.len(), expected);
    }

    #[test]
    fn prop_mode_never_repeats_a_value(
        data in prop::collection::vec(-5i32..5, 0..80)
    ) {
        let values = mode(&data);
        let mut deduped = values.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), values.len());
    }

    #[test]
    fn prop_mode_does_not_mutate_input(
        data in prop::collection::vec(any::<i32>(), 0..64)
    ) {
        let before = data.clone();
        let _ = mode(&data);
        prop_assert_eq!(data, before);
    }
}
