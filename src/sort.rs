//! Comparison sorts over numeric slices.
//!
//! Every sort here orders its input non-decreasingly and keeps the same multiset of
//! values. Six of them work in place on the caller's slice; merge sort leaves its input
//! alone and returns a freshly allocated `Vec`. Callers may rely on either behavior.
//!
//! # Strategies
//!
//! | Function | Strategy | In place | Stable | Avg / worst |
//! |----------|----------|----------|--------|-------------|
//! | [`selection_sort`] | Select the minimum of the unsorted suffix | yes | no | O(n²) / O(n²) |
//! | [`bubble_sort`] | Adjacent swaps, stop after a clean pass | yes | yes | O(n²) / O(n²), O(n) sorted |
//! | [`insertion_sort`] | Grow a sorted prefix by shifting | yes | yes | O(n²) / O(n²), O(n) sorted |
//! | [`merge_sort`] | Split at midpoint, merge sorted halves | no | yes | O(n log n) / O(n log n) |
//! | [`shell_sort`] | Gapped insertion sort, gaps n/2, n/4, ..., 1 | yes | no | ~O(n log n) / O(n²) |
//! | [`quick_sort`] | Midpoint pivot, Hoare-style partition | yes | no | O(n log n) / O(n²) |
//! | [`heap_sort`] | Max-heap, repeatedly move the root to the end | yes | no | O(n log n) / O(n log n) |
//!
//! # Comparable values
//!
//! Elements only need [`PartialOrd`]. Values that do not compare with themselves
//! (`f64::NAN`) leave the output order unspecified but never cause a panic or an
//! out-of-bounds access. Use [`crate::SortAlgorithm::try_sort`] to reject them up front.

use std::ops::{Bound, RangeBounds};

/// Selection sort: `n - 1` passes, each swapping the suffix minimum into place.
///
/// The swap is skipped when the minimum already sits at the front of the suffix.
pub fn selection_sort<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            values.swap(i, min_idx);
        }
    }
}

/// Bubble sort with early exit.
///
/// Full passes of adjacent compare-and-swap repeat until a pass performs no swap,
/// so already sorted input costs a single pass.
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();
    if n < 2 {
        return;
    }

    loop {
        let mut swapped = false;
        for i in 0..n - 1 {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort.
///
/// Larger prefix elements are shifted one slot right and the held key is written
/// once into the gap, rather than swapped step by step.
pub fn insertion_sort<T: PartialOrd + Copy>(values: &mut [T]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// Top-down merge sort returning a new vector. The input is not modified.
pub fn merge_sort<T: PartialOrd + Copy>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(left, right)
}

/// Merges two ascending vectors into one ascending vector.
///
/// On equal heads the left element is taken first, which keeps [`merge_sort`] stable.
pub fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
///
/// The final `gap == 1` round is a plain insertion sort, so the gap sequence only
/// affects speed.
pub fn shell_sort<T: PartialOrd + Copy>(values: &mut [T]) {
    let n = values.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = values[i];
            let mut j = i;
            while j >= gap && values[j - gap] > key {
                values[j] = values[j - gap];
                j -= gap;
            }
            values[j] = key;
        }
        gap /= 2;
    }
}

/// Quick sort over the whole slice.
pub fn quick_sort<T: PartialOrd + Copy>(values: &mut [T]) {
    if values.len() > 1 {
        quick_sort_bounds(values, 0, values.len() - 1);
    }
}

/// Quick sort restricted to `range`; elements outside it are left untouched.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `values`, like slice indexing does.
pub fn quick_sort_range<T, R>(values: &mut [T], range: R)
where
    T: PartialOrd + Copy,
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => values.len(),
    };
    assert!(
        start <= end && end <= values.len(),
        "range {start}..{end} out of bounds for slice of length {}",
        values.len()
    );

    if end - start > 1 {
        quick_sort_bounds(values, start, end - 1);
    }
}

/// Sorts the inclusive index range `[low, high]`.
///
/// Pending ranges live on an explicit stack instead of the call stack. The larger
/// side is pushed first so the stack stays O(log n) deep.
fn quick_sort_bounds<T: PartialOrd + Copy>(values: &mut [T], low: usize, high: usize) {
    let mut pending = vec![(low, high)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        // split >= low + 1: the first scan pair always meets at or around the pivot.
        let split = partition(values, low, high);
        let left = (low, split - 1);
        let right = (split, high);
        if split - low > high + 1 - split {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}

/// Hoare-style partition around the value at the midpoint index.
///
/// Returns `i` such that `[low, i - 1]` holds values `<= pivot` and `[i, high]`
/// values `>= pivot`. Recursing on exactly those two ranges (not Lomuto's
/// `[low, p - 1]` / `[p + 1, high]`) is what terminates on two-element ranges.
fn partition<T: PartialOrd + Copy>(values: &mut [T], low: usize, high: usize) -> usize {
    let pivot = values[low + (high - low) / 2];
    let mut i = low;
    let mut j = high;

    while i <= j {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i <= j {
            values.swap(i, j);
            i += 1;
            if j == 0 {
                break;
            }
            j -= 1;
        }
    }

    i
}

/// Heap sort: bottom-up max-heap build, then `n - 1` root extractions.
pub fn heap_sort<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();
    for root in (0..n / 2).rev() {
        sift_down(values, n, root);
    }

    for end in (1..n).rev() {
        values.swap(0, end);
        sift_down(values, end, 0);
    }
}

/// Restores the max-heap property for the subtree at `root` within `values[..len]`.
fn sift_down<T: PartialOrd>(values: &mut [T], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        values.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type InPlaceFn = fn(&mut [i32]);

    const IN_PLACE: &[(&str, InPlaceFn)] = &[
        ("selection", selection_sort),
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("shell", shell_sort),
        ("quick", quick_sort),
        ("heap", heap_sort),
    ];

    /// Compares equal on `key` only, so `tag` exposes reordering of ties.
    #[derive(Debug, Clone, Copy)]
    struct Keyed {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    fn keyed(keys: &[u8]) -> Vec<Keyed> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Keyed { key, tag })
            .collect()
    }

    fn assert_stable(sorted: &[Keyed]) {
        for pair in sorted.windows(2) {
            assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                assert!(pair[0].tag < pair[1].tag, "ties reordered: {sorted:?}");
            }
        }
    }

    #[test]
    fn known_cases() {
        let mut values = [5, 3, 8, 1];
        selection_sort(&mut values);
        assert_eq!(values, [1, 3, 5, 8]);

        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        assert!(empty.is_empty());

        assert_eq!(merge_sort(&[2, 2, 1]), vec![1, 2, 2]);

        let mut values = [9, 1, 4, 1, 5];
        quick_sort(&mut values);
        assert_eq!(values, [1, 1, 4, 5, 9]);
    }

    #[test]
    fn empty_and_singleton() {
        for &(name, sort) in IN_PLACE {
            let mut empty: Vec<i32> = Vec::new();
            sort(&mut empty);
            assert!(empty.is_empty(), "{name}");

            let mut single = vec![42];
            sort(&mut single);
            assert_eq!(single, [42], "{name}");
        }
        assert!(merge_sort::<i32>(&[]).is_empty());
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn two_element_ranges_terminate() {
        for input in [[1, 2], [2, 1], [7, 7]] {
            for &(name, sort) in IN_PLACE {
                let mut values = input;
                sort(&mut values);
                assert!(values[0] <= values[1], "{name}: {values:?}");
            }
        }
    }

    #[test]
    fn merge_sort_leaves_input_untouched() {
        let input = vec![3, 1, 2];
        let sorted = merge_sort(&input);
        assert_eq!(input, [3, 1, 2]);
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = vec![Keyed { key: 1, tag: 0 }, Keyed { key: 2, tag: 1 }];
        let right = vec![Keyed { key: 1, tag: 2 }, Keyed { key: 2, tag: 3 }];
        let tags: Vec<usize> = merge(left, right).iter().map(|k| k.tag).collect();
        assert_eq!(tags, [0, 2, 1, 3]);
    }

    #[test]
    fn stable_sorts_keep_tie_order() {
        let keys = [3, 1, 2, 1, 3, 2, 1, 0, 2, 3];

        let mut values = keyed(&keys);
        bubble_sort(&mut values);
        assert_stable(&values);

        let mut values = keyed(&keys);
        insertion_sort(&mut values);
        assert_stable(&values);

        assert_stable(&merge_sort(&keyed(&keys)));
    }

    #[test]
    fn quick_sort_range_touches_only_the_range() {
        let mut values = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        quick_sort_range(&mut values, 2..=6);
        assert_eq!(values, [9, 8, 3, 4, 5, 6, 7, 2, 1]);

        let mut values = [3, 2, 1];
        quick_sort_range(&mut values, 1..1);
        assert_eq!(values, [3, 2, 1]);

        quick_sort_range(&mut values, ..);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn quick_sort_range_rejects_out_of_bounds() {
        let mut values = [1, 2, 3];
        quick_sort_range(&mut values, 1..=3);
    }

    #[test]
    fn sorts_floats() {
        let input = [2.5, -1.0, 0.0, 3.25, -1.0, 1e9];
        let mut expected = input.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(merge_sort(&input), expected);

        let mut values = input;
        heap_sort(&mut values);
        assert_eq!(values.to_vec(), expected);

        let mut values = input;
        shell_sort(&mut values);
        assert_eq!(values.to_vec(), expected);

        let mut values = input;
        quick_sort(&mut values);
        assert_eq!(values.to_vec(), expected);
    }

    #[test]
    fn nan_input_does_not_panic() {
        let input = [3.0, f64::NAN, 1.0, f64::NAN, 2.0, 0.5];
        let mut values = input;
        selection_sort(&mut values);
        let mut values = input;
        bubble_sort(&mut values);
        let mut values = input;
        insertion_sort(&mut values);
        let mut values = input;
        shell_sort(&mut values);
        let mut values = input;
        quick_sort(&mut values);
        let mut values = input;
        heap_sort(&mut values);
        assert_eq!(merge_sort(&input).len(), input.len());
    }

    proptest! {
        /// Output is ascending and a permutation of the input.
        #[test]
        fn in_place_sorts_match_std(values in prop::collection::vec(any::<i32>(), 0..256)) {
            let mut expected = values.clone();
            expected.sort();

            for &(name, sort) in IN_PLACE {
                let mut actual = values.clone();
                sort(&mut actual);
                prop_assert_eq!(&actual, &expected, "{}", name);
            }
        }

        #[test]
        fn merge_sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..256)) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(merge_sort(&values), expected);
        }

        /// Sorting sorted input changes nothing.
        #[test]
        fn idempotent(mut values in prop::collection::vec(-50i32..50, 0..128)) {
            values.sort();
            for &(name, sort) in IN_PLACE {
                let mut again = values.clone();
                sort(&mut again);
                prop_assert_eq!(&again, &values, "{}", name);
            }
            prop_assert_eq!(merge_sort(&values), values);
        }

        /// Heavy duplication stresses the partition's equal-to-pivot handling.
        #[test]
        fn quick_sort_with_duplicates(values in prop::collection::vec(0i32..4, 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            let mut actual = values;
            quick_sort(&mut actual);
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn quick_sort_range_matches_sorted_subslice(
            values in prop::collection::vec(any::<i32>(), 1..128),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let (lo, hi) = {
                let x = a.index(values.len());
                let y = b.index(values.len());
                (x.min(y), x.max(y))
            };

            let mut expected = values.clone();
            expected[lo..=hi].sort();

            let mut actual = values;
            quick_sort_range(&mut actual, lo..=hi);
            prop_assert_eq!(actual, expected);
        }
    }
}
