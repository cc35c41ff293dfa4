//! Top-down merge sort.

use super::SortStrategy;
use std::cmp::Ordering;

/// Stable top-down merge sort.
///
/// O(n log n) time in every case, with O(n) scratch space per merge.
/// Equal elements keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn sort(&self, sequence: &mut [i32]) {
        merge_sort_by(sequence, i32::cmp);
    }

    fn name(&self) -> &'static str {
        "MergeSort"
    }
}

/// Stable-sort `data` in place with [`MergeSort`]'s algorithm and a custom comparator.
///
/// # Examples
///
/// ```rust
/// use patternkit::sort::merge_sort_by;
///
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// merge_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_range(data, &mut compare);
}

fn merge_sort_range<T, F>(data: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    merge_sort_range(&mut data[..mid], compare);
    merge_sort_range(&mut data[mid..], compare);
    merge(data, mid, compare);
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`.
fn merge<T, F>(data: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in data.iter_mut() {
        // Ties go left.
        let take_left = j == right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);

        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
