//! Selection tracking for arranged items.
//!
//! [`SelectionTracker`] keeps the selected items (an ordered set) and the
//! positions those items occupied in the arranged items when captured. Each
//! selected item remembers its own captured index. Select and unselect calls
//! and [`resync`](SelectionTracker::resync) after a rebuild keep the two in
//! step; incremental content changes do not touch either, so between
//! rebuilds the indexes can go stale.
//!
//! # Example
//!
//! ```
//! use lattice_arrange::model::SelectionTracker;
//!
//! let arranged = ["a", "b", "c"];
//! let mut selection = SelectionTracker::new(true);
//!
//! selection.select_item("c", &arranged);
//! selection.select_item("a", &arranged);
//!
//! assert_eq!(selection.selection(), &["c", "a"]);
//! assert_eq!(selection.selection_indexes(), &[2, 0]);
//! ```

use lattice_arrange_core::logging::targets;

/// Items that entered and left the selection in one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange<T> {
    /// Newly selected items, in selection order.
    pub selected: Vec<T>,
    /// Items no longer selected.
    pub deselected: Vec<T>,
}

impl<T> Default for SelectionChange<T> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            deselected: Vec::new(),
        }
    }
}

impl<T> SelectionChange<T> {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.deselected.is_empty()
    }

    pub(crate) fn merge(&mut self, other: SelectionChange<T>) {
        self.selected.extend(other.selected);
        self.deselected.extend(other.deselected);
    }
}

/// Tracks the selected items and their arranged positions.
pub struct SelectionTracker<T> {
    /// Selected items in selection order, without duplicates.
    selection: Vec<T>,
    /// Index captured for each entry of `selection`, if it was arranged.
    captured: Vec<Option<usize>>,
    /// Arranged positions of selected items, as of the last select, unselect
    /// or resync.
    indexes: Vec<usize>,
    allows_multiple: bool,
}

impl<T> Default for SelectionTracker<T> {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            captured: Vec::new(),
            indexes: Vec::new(),
            allows_multiple: true,
        }
    }
}

impl<T: Clone + PartialEq> SelectionTracker<T> {
    /// Creates an empty tracker.
    pub fn new(allows_multiple: bool) -> Self {
        Self {
            allows_multiple,
            ..Self::default()
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The selected items in selection order.
    pub fn selection(&self) -> &[T] {
        &self.selection
    }

    /// Arranged positions of the selected items.
    ///
    /// Items that were not arranged when selected have no entry, so this can
    /// be shorter than [`selection`](Self::selection).
    pub fn selection_indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// Returns `true` if `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.contains(item)
    }

    /// Returns `true` if any items are selected.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    // =========================================================================
    // Selection Mode
    // =========================================================================

    /// Whether more than one item may be selected at once.
    pub fn allows_multiple_selection(&self) -> bool {
        self.allows_multiple
    }

    /// Sets the selection policy.
    ///
    /// Does not trim an existing multiple selection; the next select call
    /// follows the new policy.
    pub fn set_allows_multiple_selection(&mut self, allows: bool) {
        self.allows_multiple = allows;
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Selects `item`.
    ///
    /// A no-op if it is already selected. In single-selection mode the
    /// previous selection is cleared first. The item's arranged position is
    /// recorded if it has one.
    pub fn select_item(&mut self, item: T, arranged: &[T]) -> SelectionChange<T> {
        if self.is_selected(&item) {
            return SelectionChange::default();
        }

        let mut change = if self.allows_multiple {
            SelectionChange::default()
        } else {
            self.clear()
        };

        let index = arranged.iter().position(|candidate| *candidate == item);
        match index {
            Some(index) => self.indexes.push(index),
            None => {
                tracing::trace!(target: targets::SELECTION, "selected item is not arranged");
            }
        }
        self.captured.push(index);
        self.selection.push(item.clone());
        change.selected.push(item);
        change
    }

    /// Selects each of `items` in order.
    pub fn select_items<I>(&mut self, items: I, arranged: &[T]) -> SelectionChange<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut change = SelectionChange::default();
        for item in items {
            change.merge(self.select_item(item, arranged));
        }
        change
    }

    /// Unselects `item`.
    ///
    /// A no-op if it is not selected. Otherwise removes it from the
    /// selection, then removes the index value captured for it when it was
    /// selected or last resynced. That value is matched by value, not by
    /// slot, and may no longer be the item's true arranged position.
    pub fn unselect_item(&mut self, item: &T) -> SelectionChange<T> {
        let Some(position) = self.selection.iter().position(|selected| selected == item) else {
            return SelectionChange::default();
        };

        let deselected = self.selection.remove(position);
        if let Some(index) = self.captured.remove(position)
            && let Some(slot) = self.indexes.iter().position(|&recorded| recorded == index)
        {
            self.indexes.remove(slot);
        }

        SelectionChange {
            selected: Vec::new(),
            deselected: vec![deselected],
        }
    }

    /// Unselects each of `items` in order.
    pub fn unselect_items<'a, I>(&mut self, items: I) -> SelectionChange<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut change = SelectionChange::default();
        for item in items {
            change.merge(self.unselect_item(item));
        }
        change
    }

    /// Clears the selection and its indexes.
    pub fn clear(&mut self) -> SelectionChange<T> {
        self.indexes.clear();
        self.captured.clear();
        SelectionChange {
            selected: Vec::new(),
            deselected: std::mem::take(&mut self.selection),
        }
    }

    /// Recomputes the indexes against freshly rebuilt arranged items.
    ///
    /// Selected items missing from `arranged` lose their index but stay
    /// selected.
    pub fn resync(&mut self, arranged: &[T]) {
        self.captured = self
            .selection
            .iter()
            .map(|item| arranged.iter().position(|candidate| candidate == item))
            .collect();
        self.indexes = self.captured.iter().flatten().copied().collect();
        tracing::trace!(
            target: targets::SELECTION,
            selected = self.selection.len(),
            indexed = self.indexes.len(),
            "resynced selection indexes"
        );
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionTracker<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("selection", &self.selection)
            .field("indexes", &self.indexes)
            .field("allows_multiple", &self.allows_multiple)
            .finish()
    }
}
