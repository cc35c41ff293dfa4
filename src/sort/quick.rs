//! Quicksort with a last-element pivot.

use super::SortStrategy;
use std::cmp::Ordering;

/// In-place quicksort using the Lomuto partition scheme.
///
/// The last element of each range is the pivot. This makes the algorithm
/// O(n log n) on average but O(n²) on input that is already sorted in either
/// direction. Not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn sort(&self, sequence: &mut [i32]) {
        quick_sort_by(sequence, i32::cmp);
    }

    fn name(&self) -> &'static str {
        "QuickSort"
    }
}

/// Sort `data` in place with [`QuickSort`]'s algorithm and a custom comparator.
///
/// # Examples
///
/// ```rust
/// use patternkit::sort::quick_sort_by;
///
/// let mut words = ["pear", "fig", "banana"];
/// quick_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn quick_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(data, &mut compare);
}

fn quick_sort_range<T, F>(mut data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Recurse into the smaller side, loop on the larger one: stack depth stays O(log n).
    while data.len() > 1 {
        let pivot = partition(data, compare);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_range(left, compare);
            data = right;
        } else {
            quick_sort_range(right, compare);
            data = left;
        }
    }
}

/// Partition around the last element and return the pivot's final index.
fn partition<T, F>(data: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = data.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if compare(&data[j], &data[high]) == Ordering::Less {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(data: &[i32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = [9, 1, 8, 2, 5];
        let pivot = partition(&mut data, &mut i32::cmp);
        assert_eq!(pivot, 2);
        assert_eq!(data[pivot], 5);
        assert!(data[..pivot].iter().all(|&x| x < 5));
        assert!(data[pivot + 1..].iter().all(|&x| x >= 5));
    }

    #[test]
    fn test_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        QuickSort.sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        QuickSort.sort(&mut single);
        assert_eq!(single, vec![42]);

        let mut two = vec![5, 3];
        QuickSort.sort(&mut two);
        assert_eq!(two, vec![3, 5]);
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let mut data = vec![3, -1, 3, 0, -1, 7, 3, i32::MIN, i32::MAX];
        QuickSort.sort(&mut data);
        assert_eq!(data, vec![i32::MIN, -1, -1, 0, 3, 3, 3, 7, i32::MAX]);
    }

    #[test]
    fn test_worst_case_inputs() {
        let mut ascending: Vec<i32> = (0..2000).collect();
        QuickSort.sort(&mut ascending);
        assert!(is_sorted(&ascending));

        let mut descending: Vec<i32> = (0..2000).rev().collect();
        QuickSort.sort(&mut descending);
        assert!(is_sorted(&descending));

        let mut same = vec![7; 500];
        QuickSort.sort(&mut same);
        assert!(same.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_custom_comparator_descending() {
        let mut data = [1, 4, 2, 3];
        quick_sort_by(&mut data, |a, b| b.cmp(a));
        assert_eq!(data, [4, 3, 2, 1]);
    }
}
