//! The arrangement engine: filtered, sorted projection of a content sequence.
//!
//! [`ArrangementEngine`] owns the arranged items and keeps them in step with
//! content in one of two ways:
//!
//! - [`rebuild`](ArrangementEngine::rebuild) recomputes everything from a
//!   content snapshot: filter, then a stable sort. O(n log n).
//! - [`apply_delta`](ArrangementEngine::apply_delta) folds a single
//!   [`ContentChange`] in element by element. O(log n) comparisons per
//!   element when sorted.
//!
//! Deltas are not an exact mirror of content. Without a comparator, inserted
//! items are appended to the tail whatever their content position; only a
//! rebuild restores content order.

use std::cmp::Ordering;
use std::sync::Arc;

use lattice_arrange_core::logging::targets;
use lattice_arrange_core::ContentChange;

use super::ordered_insert::insertion_position;

/// Type alias for a filter predicate.
///
/// Returns `true` if the item belongs in the arranged items.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Type alias for a sort comparator. Must be a total order.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Orders items by their `Ord` implementation.
pub fn natural_order<T: Ord + 'static>() -> CompareFn<T> {
    Arc::new(|a: &T, b: &T| a.cmp(b))
}

/// Orders items by the reverse of their `Ord` implementation.
pub fn reverse_order<T: Ord + 'static>() -> CompareFn<T> {
    Arc::new(|a: &T, b: &T| b.cmp(a))
}

/// Orders items by a key extracted from each.
pub fn sort_by_key<T, K, F>(key: F) -> CompareFn<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Arc::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}

/// What [`ArrangementEngine::apply_delta`] did with a content change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaOutcome<T> {
    /// The change was folded in. Holds the resulting changes to the arranged
    /// items, in the order they were made; empty if nothing passed the filter.
    Applied(Vec<ContentChange<T>>),
    /// The change replaced content wholesale; call `rebuild`.
    RebuildRequired,
    /// The change kind is not understood and was skipped.
    Ignored,
}

/// Owns the arranged items and the filter and comparator that shape them.
pub struct ArrangementEngine<T> {
    arranged: Vec<T>,
    filter: Option<FilterFn<T>>,
    compare: Option<CompareFn<T>>,
}

impl<T> Default for ArrangementEngine<T> {
    fn default() -> Self {
        Self {
            arranged: Vec::new(),
            filter: None,
            compare: None,
        }
    }
}

impl<T: Clone + PartialEq> ArrangementEngine<T> {
    /// Creates an engine with no items, no filter and no comparator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter. Takes effect at the next rebuild or delta.
    pub fn with_filter(mut self, filter: Option<FilterFn<T>>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the comparator. Takes effect at the next rebuild or delta.
    pub fn with_compare(mut self, compare: Option<CompareFn<T>>) -> Self {
        self.compare = compare;
        self
    }

    /// The arranged items.
    pub fn arranged(&self) -> &[T] {
        &self.arranged
    }

    /// The current filter.
    pub fn filter(&self) -> Option<&FilterFn<T>> {
        self.filter.as_ref()
    }

    /// The current comparator.
    pub fn compare(&self) -> Option<&CompareFn<T>> {
        self.compare.as_ref()
    }

    /// Replaces the filter without rearranging.
    pub fn set_filter(&mut self, filter: Option<FilterFn<T>>) {
        self.filter = filter;
    }

    /// Replaces the comparator without rearranging.
    pub fn set_compare(&mut self, compare: Option<CompareFn<T>>) {
        self.compare = compare;
    }

    /// Returns `true` if `item` passes the filter (or there is none).
    pub fn accepts(&self, item: &T) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(item))
    }

    /// Position of the first arranged item equal to `item`.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.arranged.iter().position(|candidate| candidate == item)
    }

    /// Recomputes the arranged items from a content snapshot.
    ///
    /// The result is `content` filtered, then stably sorted if a comparator
    /// is set; equal-ranked items keep their content order.
    #[tracing::instrument(skip_all, target = "lattice_arrange::arrangement", level = "debug")]
    pub fn rebuild(&mut self, content: &[T]) {
        let mut working: Vec<T> = content
            .iter()
            .filter(|item| self.accepts(item))
            .cloned()
            .collect();

        if let Some(compare) = &self.compare {
            working.sort_by(|a, b| compare(a, b));
        }

        tracing::debug!(
            target: targets::ARRANGEMENT,
            content_len = content.len(),
            arranged_len = working.len(),
            sorted = self.compare.is_some(),
            filtered = self.filter.is_some(),
            "rebuilt arranged items"
        );
        self.arranged = working;
    }

    /// Empties the arranged items.
    pub fn clear(&mut self) {
        self.arranged.clear();
    }

    /// Folds one inserted content item in.
    ///
    /// Returns the arranged position it landed at, or `None` if the filter
    /// rejected it. With a comparator the position comes from a binary
    /// search; without one the item is appended.
    pub fn insert_element(&mut self, item: T) -> Option<usize> {
        if !self.accepts(&item) {
            tracing::trace!(target: targets::ARRANGEMENT, "inserted item rejected by filter");
            return None;
        }

        let index = match &self.compare {
            Some(compare) => insertion_position(&self.arranged, &item, |a, b| compare(a, b)),
            None => self.arranged.len(),
        };
        self.arranged.insert(index, item);
        tracing::trace!(target: targets::ARRANGEMENT, index, "inserted arranged item");
        Some(index)
    }

    /// Removes the first arranged item equal to `item`.
    ///
    /// Returns the position it was removed from; a miss is not an error.
    pub fn remove_element(&mut self, item: &T) -> Option<usize> {
        let index = self.position_of(item)?;
        self.arranged.remove(index);
        tracing::trace!(target: targets::ARRANGEMENT, index, "removed arranged item");
        Some(index)
    }

    /// Replaces `previous` with `current`: inserts `current`, then removes
    /// `previous`.
    ///
    /// Returns the insert position and the removal position, the latter
    /// measured after the insert.
    pub fn update_element(&mut self, current: T, previous: &T) -> (Option<usize>, Option<usize>) {
        let inserted = self.insert_element(current);
        let removed = self.remove_element(previous);
        (inserted, removed)
    }

    /// Folds a content change in without a full rebuild.
    pub fn apply_delta(&mut self, change: &ContentChange<T>) -> DeltaOutcome<T> {
        let mut applied = Vec::new();
        match change {
            ContentChange::Change => return DeltaOutcome::RebuildRequired,
            ContentChange::Insert { items, .. } => {
                for item in items {
                    self.insert_recorded(item, &mut applied);
                }
            }
            ContentChange::Remove { items, .. } => {
                for item in items {
                    self.remove_recorded(item, &mut applied);
                }
            }
            ContentChange::Update {
                current, previous, ..
            } => {
                for (current, previous) in current.iter().zip(previous) {
                    self.insert_recorded(current, &mut applied);
                    self.remove_recorded(previous, &mut applied);
                }
            }
            other => {
                tracing::debug!(
                    target: targets::ARRANGEMENT,
                    kind = other.kind(),
                    "ignoring unknown content change"
                );
                return DeltaOutcome::Ignored;
            }
        }
        DeltaOutcome::Applied(applied)
    }

    fn insert_recorded(&mut self, item: &T, applied: &mut Vec<ContentChange<T>>) {
        if let Some(index) = self.insert_element(item.clone()) {
            applied.push(ContentChange::insert(index, vec![item.clone()]));
        }
    }

    fn remove_recorded(&mut self, item: &T, applied: &mut Vec<ContentChange<T>>) {
        if let Some(index) = self.remove_element(item) {
            applied.push(ContentChange::remove(index, vec![item.clone()]));
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrangementEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrangementEngine")
            .field("arranged", &self.arranged)
            .field("filtered", &self.filter.is_some())
            .field("sorted", &self.compare.is_some())
            .finish()
    }
}
