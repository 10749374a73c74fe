//! Binary-search insertion into comparator-sorted sequences.

use std::cmp::Ordering;

/// Returns the index at which `item` should be inserted to keep `sorted`
/// ordered under `compare`.
///
/// Ties are stable: the returned index follows every element that compares
/// less than or equal to `item`, so equal-ranked elements keep their arrival
/// order. `sorted` must already be sorted under `compare`; if it is not, the
/// result is some valid index but no ordering is implied.
///
/// Uses O(log n) comparisons.
///
/// # Example
///
/// ```
/// use lattice_arrange::model::insertion_position;
///
/// let sorted = [1, 3, 3, 5];
/// assert_eq!(insertion_position(&sorted, &3, |a, b| a.cmp(b)), 3);
/// assert_eq!(insertion_position(&sorted, &0, |a, b| a.cmp(b)), 0);
/// assert_eq!(insertion_position(&sorted, &9, |a, b| a.cmp(b)), 4);
/// ```
pub fn insertion_position<T, F>(sorted: &[T], item: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    sorted.partition_point(|probe| compare(probe, item) != Ordering::Greater)
}

/// Inserts `item` into `sorted` at its [`insertion_position`] and returns
/// that index.
pub fn insert_sorted<T, F>(sorted: &mut Vec<T>, item: T, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = insertion_position(sorted, &item, compare);
    sorted.insert(index, item);
    index
}
