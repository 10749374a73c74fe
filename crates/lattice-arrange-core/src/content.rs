//! Observable content sequences.
//!
//! A content sequence is the externally owned list an array controller
//! arranges. Every mutation is announced exactly once through the list's
//! change signal as a [`ContentChange`], after the mutation has been applied
//! and all internal locks released.
//!
//! # Example
//!
//! ```
//! use lattice_arrange_core::{ContentChange, ContentList};
//!
//! let list = ContentList::new(vec![1, 2, 3]);
//! list.signal().connect(|change: &ContentChange<i32>| {
//!     println!("{} over {:?}", change.kind(), change.range());
//! });
//!
//! list.push(4);
//! assert_eq!(list.items(), vec![1, 2, 3, 4]);
//! ```

use std::ops::Range;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{ContentError, Result};
use crate::logging::targets;
use crate::signal::Signal;

/// A change notification for an ordered sequence.
///
/// Ranges are positions in the sequence that emitted the change: for
/// `Insert` and `Update` they refer to the sequence after the change, for
/// `Remove` to the sequence before it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentChange<T> {
    /// The whole sequence was replaced; re-read it.
    Change,
    /// `items` now occupy `range`.
    Insert { range: Range<usize>, items: Vec<T> },
    /// `items` previously occupied `range` and are gone.
    Remove { range: Range<usize>, items: Vec<T> },
    /// The items in `range` were replaced. `current[k]` supersedes `previous[k]`.
    Update {
        range: Range<usize>,
        current: Vec<T>,
        previous: Vec<T>,
    },
}

impl<T> ContentChange<T> {
    /// An insertion of `items` starting at `start`.
    pub fn insert(start: usize, items: Vec<T>) -> Self {
        Self::Insert {
            range: start..start + items.len(),
            items,
        }
    }

    /// A removal of `items` that started at `start`.
    pub fn remove(start: usize, items: Vec<T>) -> Self {
        Self::Remove {
            range: start..start + items.len(),
            items,
        }
    }

    /// A pairwise replacement starting at `start`.
    ///
    /// Returns `LengthMismatch` if `current` and `previous` differ in length.
    pub fn update(start: usize, current: Vec<T>, previous: Vec<T>) -> Result<Self> {
        if current.len() != previous.len() {
            return Err(ContentError::LengthMismatch {
                expected: previous.len(),
                actual: current.len(),
            });
        }
        Ok(Self::Update {
            range: start..start + current.len(),
            current,
            previous,
        })
    }

    /// Short name of the notification kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Update { .. } => "update",
        }
    }

    /// The affected positions, or `None` for a wholesale change.
    pub fn range(&self) -> Option<Range<usize>> {
        match self {
            Self::Change => None,
            Self::Insert { range, .. } | Self::Remove { range, .. } | Self::Update { range, .. } => {
                Some(range.clone())
            }
        }
    }

    /// Returns `true` for the wholesale `Change` notification.
    pub fn is_wholesale(&self) -> bool {
        matches!(self, Self::Change)
    }
}

/// A shared, observable list of content items.
///
/// Mutations take `&self`; the list is meant to be held in an `Arc` and
/// shared between its owner and any controllers arranging it.
///
/// # Reentrancy
///
/// A change handler must not mutate the list that is notifying it. Debug
/// builds assert on this; release builds deliver the nested notification
/// after the outer handlers have seen a list that no longer matches their
/// notification.
pub struct ContentList<T> {
    items: RwLock<Vec<T>>,
    changed: Arc<Signal<ContentChange<T>>>,
}

impl<T> Default for ContentList<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            changed: Arc::new(Signal::new()),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ContentList<T> {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            changed: Arc::new(Signal::new()),
        }
    }

    /// The change signal. Connect here to observe mutations.
    pub fn signal(&self) -> &Arc<Signal<ContentChange<T>>> {
        &self.changed
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a snapshot of the items.
    pub fn items(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Reads the items through a closure without cloning them.
    pub fn with_items<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.items.read())
    }

    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }

    /// Appends an item.
    pub fn push(&self, item: T) {
        self.assert_not_notifying();
        let index = {
            let mut items = self.items.write();
            items.push(item.clone());
            items.len() - 1
        };
        self.notify(ContentChange::insert(index, vec![item]));
    }

    /// Inserts an item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        if let Err(err) = self.try_insert(index, item) {
            panic!("{err}");
        }
    }

    /// Inserts an item at `index`, failing if `index > len()`.
    pub fn try_insert(&self, index: usize, item: T) -> Result<()> {
        self.try_insert_many(index, vec![item])
    }

    /// Inserts `new_items` starting at `index`. Emits a single notification.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_many(&self, index: usize, new_items: Vec<T>) {
        if let Err(err) = self.try_insert_many(index, new_items) {
            panic!("{err}");
        }
    }

    /// Inserts `new_items` starting at `index`, failing if `index > len()`.
    pub fn try_insert_many(&self, index: usize, new_items: Vec<T>) -> Result<()> {
        self.assert_not_notifying();
        {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(ContentError::out_of_bounds(index, items.len()));
            }
            if new_items.is_empty() {
                return Ok(());
            }
            items.splice(index..index, new_items.iter().cloned());
        }
        self.notify(ContentChange::insert(index, new_items));
        Ok(())
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes and returns the item at `index`, failing if out of bounds.
    pub fn try_remove(&self, index: usize) -> Result<T> {
        self.assert_not_notifying();
        let item = {
            let mut items = self.items.write();
            if index >= items.len() {
                return Err(ContentError::out_of_bounds(index, items.len()));
            }
            items.remove(index)
        };
        self.notify(ContentChange::remove(index, vec![item.clone()]));
        Ok(item)
    }

    /// Removes the items in `range`, returning them. Emits a single notification.
    pub fn remove_range(&self, range: Range<usize>) -> Result<Vec<T>> {
        self.assert_not_notifying();
        let start = range.start;
        let removed: Vec<T> = {
            let mut items = self.items.write();
            if range.start > range.end || range.end > items.len() {
                return Err(ContentError::invalid_range(&range, items.len()));
            }
            items.drain(range).collect()
        };
        if !removed.is_empty() {
            self.notify(ContentChange::remove(start, removed.clone()));
        }
        Ok(removed)
    }

    /// Replaces the item at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn replace(&self, index: usize, item: T) -> T {
        match self.try_replace(index, item) {
            Ok(previous) => previous,
            Err(err) => panic!("{err}"),
        }
    }

    /// Replaces the item at `index`, failing if out of bounds.
    pub fn try_replace(&self, index: usize, item: T) -> Result<T> {
        let mut previous = self.try_replace_range(index..index + 1, vec![item])?;
        Ok(previous.remove(0))
    }

    /// Replaces the items in `range` with `new_items` of the same length.
    ///
    /// Emits one `Update` pairing each new item with the one it replaced.
    pub fn try_replace_range(&self, range: Range<usize>, new_items: Vec<T>) -> Result<Vec<T>> {
        self.assert_not_notifying();
        let start = range.start;
        let previous: Vec<T> = {
            let mut items = self.items.write();
            if range.start > range.end || range.end > items.len() {
                return Err(ContentError::invalid_range(&range, items.len()));
            }
            if new_items.len() != range.len() {
                return Err(ContentError::LengthMismatch {
                    expected: range.len(),
                    actual: new_items.len(),
                });
            }
            items.splice(range, new_items.iter().cloned()).collect()
        };
        if !previous.is_empty() {
            self.notify(ContentChange::update(start, new_items, previous.clone())?);
        }
        Ok(previous)
    }

    /// Mutates the item at `index` in place and announces it as an update.
    ///
    /// Returns `None` without notifying if `index` is out of bounds.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.assert_not_notifying();
        let (result, current, previous) = {
            let mut items = self.items.write();
            let item = items.get_mut(index)?;
            let previous = item.clone();
            let result = f(item);
            (result, item.clone(), previous)
        };
        self.notify(ContentChange::Update {
            range: index..index + 1,
            current: vec![current],
            previous: vec![previous],
        });
        Some(result)
    }

    /// Replaces all items. Announced as a wholesale `Change`.
    pub fn set_items(&self, items: Vec<T>) {
        self.assert_not_notifying();
        *self.items.write() = items;
        self.notify(ContentChange::Change);
    }

    /// Removes all items. Announced as a wholesale `Change`.
    pub fn clear(&self) {
        self.set_items(Vec::new());
    }

    fn notify(&self, change: ContentChange<T>) {
        tracing::trace!(
            target: targets::CONTENT,
            kind = change.kind(),
            range = ?change.range(),
            "content changed"
        );
        self.changed.emit(change);
    }

    fn assert_not_notifying(&self) {
        debug_assert!(
            !self.changed.is_emitting(),
            "content mutated while its change notification is being delivered"
        );
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ContentList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentList")
            .field("items", &*self.items.read())
            .field("observers", &self.changed.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(ContentList<String>: Send, Sync);
