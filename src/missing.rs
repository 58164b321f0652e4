use rustc_hash::FxHashSet as HashSet;

/// Numbers in `1..=max` that never occur in `sample`, in increasing order.
pub fn find_missing_numbers(sample: &[u32], max: u32) -> Vec<u32> {
    let present: HashSet<u32> = sample.iter().copied().collect();
    (1..=max).filter(|n| !present.contains(n)).collect()
}

#[cfg(test)]
#[test]
fn reports_absent_numbers_in_order() {
    assert_eq!(find_missing_numbers(&[2, 4, 4, 7], 8), vec![1, 3, 5, 6, 8]);
}

#[cfg(test)]
#[test]
fn full_coverage_leaves_nothing_missing() {
    assert_eq!(find_missing_numbers(&[3, 1, 2], 3), Vec::<u32>::new());
}

#[cfg(test)]
#[test]
fn empty_sample_misses_everything() {
    assert_eq!(find_missing_numbers(&[], 4), vec![1, 2, 3, 4]);
}
