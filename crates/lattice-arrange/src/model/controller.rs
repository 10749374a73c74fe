//! The array controller facade.
//!
//! [`ArrayController`] observes a [`ContentList`], keeps a filtered and sorted
//! projection of it (the arranged items), and tracks a selection over those
//! items. Content notifications are dispatched by kind:
//!
//! | Content change | Controller action |
//! |---|---|
//! | `Change` | rearrange, then clear the selection |
//! | `Insert` | insert each item into the arranged items |
//! | `Remove` | remove each item from the arranged items |
//! | `Update` | insert each current item, then remove its previous value |
//!
//! Changing the comparator or filter, or pointing the controller at other
//! content, rearranges and resyncs the selection indexes against the result.
//!
//! # Example
//!
//! ```
//! use lattice_arrange::model::{natural_order, ArrayController};
//! use lattice_arrange::ContentList;
//! use std::sync::Arc;
//!
//! let content = Arc::new(ContentList::new(vec![3, 1, 2]));
//! let controller = ArrayController::new(Some(content.clone()), Some(natural_order()), None, true);
//! assert_eq!(controller.arranged(), vec![1, 2, 3]);
//!
//! controller.select_item(3);
//! assert_eq!(controller.selection_indexes(), vec![2]);
//!
//! content.push(0);
//! assert_eq!(controller.arranged(), vec![0, 1, 2, 3]);
//! ```

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use lattice_arrange_core::logging::{span_names, targets};
use lattice_arrange_core::{ConnectionGuard, ContentChange, ContentList, PerfSpan, Signal};
use parking_lot::{Mutex, RwLock};

use super::arrangement::{ArrangementEngine, CompareFn, DeltaOutcome, FilterFn};
use super::config::ControllerConfig;
use super::selection::{SelectionChange, SelectionTracker};
use crate::error::{ArrangeError, Result};

/// Signals emitted by an [`ArrayController`].
///
/// Signals fire after the controller's internal state is consistent and
/// unlocked, so slots may read the controller.
pub struct ArrangedSignals<T> {
    /// Changes to the arranged items.
    ///
    /// A rearrangement is a single `Change`. Incremental content changes
    /// produce one single-item `Insert` or `Remove` per arranged item
    /// touched, with ranges in arranged positions.
    pub arranged_changed: Signal<ContentChange<T>>,

    /// Emitted when items enter or leave the selection.
    pub selection_changed: Signal<SelectionChange<T>>,
}

impl<T> Default for ArrangedSignals<T> {
    fn default() -> Self {
        Self {
            arranged_changed: Signal::new(),
            selection_changed: Signal::new(),
        }
    }
}

/// Notifications gathered under the state lock and emitted after it.
struct Pending<T> {
    arranged: Vec<ContentChange<T>>,
    selection: SelectionChange<T>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self {
            arranged: Vec::new(),
            selection: SelectionChange::default(),
        }
    }
}

struct State<T> {
    content: Option<Arc<ContentList<T>>>,
    engine: ArrangementEngine<T>,
    selection: SelectionTracker<T>,
    clears_selection_on_change: bool,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> State<T> {
    /// Rebuilds the arranged items from content and resyncs the selection.
    ///
    /// Without content this is a hard reset: arranged items and selection
    /// are both emptied.
    fn rearrange(&mut self) -> Pending<T> {
        let _span = PerfSpan::new(span_names::REBUILD);
        let selection = match self.content.clone() {
            Some(content) => {
                content.with_items(|items| self.engine.rebuild(items));
                self.selection.resync(self.engine.arranged());
                SelectionChange::default()
            }
            None => {
                tracing::debug!(target: targets::CONTROLLER, "no content, resetting");
                self.engine.clear();
                self.selection.clear()
            }
        };
        Pending {
            arranged: vec![ContentChange::Change],
            selection,
        }
    }
}

struct Inner<T> {
    state: RwLock<State<T>>,
    subscription: Mutex<Option<ConnectionGuard<ContentChange<T>>>>,
    signals: ArrangedSignals<T>,
    disposed: AtomicBool,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Inner<T> {
    fn subscribe(this: &Arc<Self>, content: &ContentList<T>) -> ConnectionGuard<ContentChange<T>> {
        let weak: Weak<Self> = Arc::downgrade(this);
        content.signal().connect_scoped(move |change| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_content_change(change);
            }
        })
    }

    fn handle_content_change(&self, change: &ContentChange<T>) {
        if self.disposed.load(AtomicOrdering::SeqCst) {
            return;
        }
        let _span = PerfSpan::new(span_names::DELTA);

        let pending = {
            let mut state = self.state.write();
            match state.engine.apply_delta(change) {
                DeltaOutcome::Applied(arranged) => Pending {
                    arranged,
                    selection: SelectionChange::default(),
                },
                DeltaOutcome::RebuildRequired => {
                    let mut pending = state.rearrange();
                    if state.clears_selection_on_change {
                        let cleared = state.selection.clear();
                        pending.selection.merge(cleared);
                    }
                    pending
                }
                DeltaOutcome::Ignored => Pending::default(),
            }
        };
        self.emit(pending);
    }

    fn emit(&self, pending: Pending<T>) {
        for change in pending.arranged {
            self.signals.arranged_changed.emit(change);
        }
        self.emit_selection(pending.selection);
    }

    fn emit_selection(&self, change: SelectionChange<T>) {
        if !change.is_empty() {
            self.signals.selection_changed.emit(change);
        }
    }
}

/// Keeps a filtered, sorted view of a content list and a selection over it.
///
/// # Threading
///
/// All operations run synchronously to completion. The controller is
/// `Send + Sync` but assumes a single writer: hosts that touch it from
/// several threads must serialize those calls themselves. Content change
/// handlers, including slots connected to [`ArrangedSignals`], must not
/// mutate the content that is notifying them.
///
/// # Lifecycle
///
/// The controller subscribes to its content on construction and whenever
/// content is replaced. [`dispose`](Self::dispose) or dropping the
/// controller unsubscribes.
pub struct ArrayController<T: Clone + PartialEq + Send + Sync + 'static> {
    inner: Arc<Inner<T>>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ArrayController<T> {
    /// Creates a controller over `content`, arranged by `compare` and `filter`.
    pub fn new(
        content: Option<Arc<ContentList<T>>>,
        compare: Option<CompareFn<T>>,
        filter: Option<FilterFn<T>>,
        allows_multiple_selection: bool,
    ) -> Self {
        let config = ControllerConfig::default().with_multiple_selection(allows_multiple_selection);
        Self::from_parts(content, compare, filter, config)
    }

    /// Returns a builder for a controller.
    pub fn builder() -> ArrayControllerBuilder<T> {
        ArrayControllerBuilder::new()
    }

    fn from_parts(
        content: Option<Arc<ContentList<T>>>,
        compare: Option<CompareFn<T>>,
        filter: Option<FilterFn<T>>,
        config: ControllerConfig,
    ) -> Self {
        let state = State {
            content: None,
            engine: ArrangementEngine::new()
                .with_filter(filter)
                .with_compare(compare),
            selection: SelectionTracker::new(config.allows_multiple_selection),
            clears_selection_on_change: config.clears_selection_on_change,
        };
        let controller = Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                subscription: Mutex::new(None),
                signals: ArrangedSignals::default(),
                disposed: AtomicBool::new(false),
            }),
        };
        controller.attach(content);
        controller
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Signals for arranged-item and selection changes.
    pub fn signals(&self) -> &ArrangedSignals<T> {
        &self.inner.signals
    }

    /// The content currently observed.
    pub fn content(&self) -> Option<Arc<ContentList<T>>> {
        self.inner.state.read().content.clone()
    }

    /// A snapshot of the arranged items.
    pub fn arranged(&self) -> Vec<T> {
        self.inner.state.read().engine.arranged().to_vec()
    }

    /// Number of arranged items.
    pub fn arranged_len(&self) -> usize {
        self.inner.state.read().engine.arranged().len()
    }

    /// A snapshot of the selected items, in selection order.
    pub fn selection(&self) -> Vec<T> {
        self.inner.state.read().selection.selection().to_vec()
    }

    /// A snapshot of the selected items' arranged positions.
    ///
    /// Accurate right after a rearrangement or a select/unselect call.
    /// Incremental content changes do not update it.
    pub fn selection_indexes(&self) -> Vec<usize> {
        self.inner.state.read().selection.selection_indexes().to_vec()
    }

    /// Returns `true` if `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.inner.state.read().selection.is_selected(item)
    }

    /// Returns `true` if any items are selected.
    pub fn has_selection(&self) -> bool {
        self.inner.state.read().selection.has_selection()
    }

    /// Returns the number of selected items.
    pub fn selection_count(&self) -> usize {
        self.inner.state.read().selection.selected_count()
    }

    /// Whether more than one item may be selected at once.
    pub fn allows_multiple_selection(&self) -> bool {
        self.inner.state.read().selection.allows_multiple_selection()
    }

    /// Whether a wholesale content change clears the selection.
    pub fn clears_selection_on_change(&self) -> bool {
        self.inner.state.read().clears_selection_on_change
    }

    /// The current selection policy as a config value.
    pub fn config(&self) -> ControllerConfig {
        let state = self.inner.state.read();
        ControllerConfig {
            allows_multiple_selection: state.selection.allows_multiple_selection(),
            clears_selection_on_change: state.clears_selection_on_change,
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(AtomicOrdering::SeqCst)
    }

    // =========================================================================
    // Content, Sort and Filter
    // =========================================================================

    /// Points the controller at different content, or at none.
    ///
    /// Unsubscribes from the previous content, subscribes to the new one and
    /// rearranges. The selection is kept and its indexes resynced; with no
    /// content, everything is reset.
    pub fn set_content(&self, content: Option<Arc<ContentList<T>>>) {
        if let Err(err) = self.try_set_content(content) {
            debug_assert!(false, "array controller used after dispose: {err}");
        }
    }

    /// Like [`set_content`](Self::set_content), but reports use after dispose.
    pub fn try_set_content(&self, content: Option<Arc<ContentList<T>>>) -> Result<()> {
        if self.is_disposed() {
            return Err(ArrangeError::Disposed);
        }
        self.attach(content);
        Ok(())
    }

    fn attach(&self, content: Option<Arc<ContentList<T>>>) {
        drop(self.inner.subscription.lock().take());
        let guard = content
            .as_ref()
            .map(|content| Inner::subscribe(&self.inner, content));
        tracing::debug!(
            target: targets::CONTROLLER,
            subscribed = guard.is_some(),
            "content attached"
        );
        *self.inner.subscription.lock() = guard;

        let pending = {
            let mut state = self.inner.state.write();
            state.content = content;
            state.rearrange()
        };
        self.inner.emit(pending);
    }

    /// Replaces the comparator (or removes it with `None`) and rearranges.
    pub fn set_compare_fn(&self, compare: Option<CompareFn<T>>) {
        self.assert_live();
        self.rearrange_with(|engine| engine.set_compare(compare));
    }

    /// Sorts with `compare` and rearranges.
    pub fn set_sort<F>(&self, compare: F)
    where
        F: Fn(&T, &T) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        self.set_compare_fn(Some(Arc::new(compare)));
    }

    /// Removes the comparator; arranged items follow content order.
    pub fn clear_sort(&self) {
        self.set_compare_fn(None);
    }

    /// Replaces the filter (or removes it with `None`) and rearranges.
    pub fn set_filter_fn(&self, filter: Option<FilterFn<T>>) {
        self.assert_live();
        self.rearrange_with(|engine| engine.set_filter(filter));
    }

    /// Filters with `filter` and rearranges.
    pub fn set_filter<F>(&self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.set_filter_fn(Some(Arc::new(filter)));
    }

    /// Removes the filter; every content item is arranged.
    pub fn clear_filter(&self) {
        self.set_filter_fn(None);
    }

    /// Rebuilds the arranged items from content and resyncs the selection.
    pub fn rearrange(&self) {
        self.assert_live();
        self.rearrange_with(|_| {});
    }

    fn rearrange_with<F>(&self, configure: F)
    where
        F: FnOnce(&mut ArrangementEngine<T>),
    {
        let pending = {
            let mut state = self.inner.state.write();
            configure(&mut state.engine);
            state.rearrange()
        };
        self.inner.emit(pending);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Sets the selection policy. An existing multiple selection is kept
    /// until the next select call.
    pub fn set_allows_multiple_selection(&self, allows: bool) {
        self.assert_live();
        self.inner
            .state
            .write()
            .selection
            .set_allows_multiple_selection(allows);
    }

    /// Sets whether a wholesale content change clears the selection.
    pub fn set_clears_selection_on_change(&self, clears: bool) {
        self.assert_live();
        self.inner.state.write().clears_selection_on_change = clears;
    }

    /// Selects `item`. See [`SelectionTracker::select_item`].
    pub fn select_item(&self, item: T) {
        self.update_selection(|selection, arranged| selection.select_item(item, arranged));
    }

    /// Selects each of `items` in order.
    pub fn select_items<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.update_selection(|selection, arranged| selection.select_items(items, arranged));
    }

    /// Unselects `item`. See [`SelectionTracker::unselect_item`].
    pub fn unselect_item(&self, item: &T) {
        self.update_selection(|selection, _| selection.unselect_item(item));
    }

    /// Unselects each of `items` in order.
    pub fn unselect_items(&self, items: &[T]) {
        self.update_selection(|selection, _| selection.unselect_items(items));
    }

    /// Clears the selection and its indexes.
    pub fn clear_selection(&self) {
        self.update_selection(|selection, _| selection.clear());
    }

    fn update_selection<F>(&self, update: F)
    where
        F: FnOnce(&mut SelectionTracker<T>, &[T]) -> SelectionChange<T>,
    {
        self.assert_live();
        let change = {
            let mut guard = self.inner.state.write();
            let state = &mut *guard;
            update(&mut state.selection, state.engine.arranged())
        };
        self.inner.emit_selection(change);
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Stops observing content. Arranged items and selection stay readable.
    ///
    /// Calling this more than once is harmless.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, AtomicOrdering::SeqCst) {
            return;
        }
        drop(self.inner.subscription.lock().take());
        tracing::debug!(target: targets::CONTROLLER, "array controller disposed");
    }

    fn assert_live(&self) {
        debug_assert!(!self.is_disposed(), "array controller used after dispose");
    }
}

impl<T> std::fmt::Debug for ArrayController<T>
where
    T: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("ArrayController")
            .field("engine", &state.engine)
            .field("selection", &state.selection)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

static_assertions::assert_impl_all!(ArrayController<String>: Send, Sync);

/// Builder for [`ArrayController`].
///
/// # Example
///
/// ```
/// use lattice_arrange::model::ArrayController;
/// use lattice_arrange::ContentList;
/// use std::sync::Arc;
///
/// let content = Arc::new(ContentList::new(vec!["pear", "fig", "apple", "kiwi"]));
/// let controller = ArrayController::builder()
///     .content(content)
///     .filter(|name: &&str| name.len() > 3)
///     .sort(|a: &&str, b: &&str| a.cmp(b))
///     .allows_multiple_selection(false)
///     .build();
///
/// assert_eq!(controller.arranged(), vec!["apple", "kiwi", "pear"]);
/// ```
pub struct ArrayControllerBuilder<T> {
    content: Option<Arc<ContentList<T>>>,
    compare: Option<CompareFn<T>>,
    filter: Option<FilterFn<T>>,
    config: ControllerConfig,
}

impl<T> Default for ArrayControllerBuilder<T> {
    fn default() -> Self {
        Self {
            content: None,
            compare: None,
            filter: None,
            config: ControllerConfig::default(),
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ArrayControllerBuilder<T> {
    /// Creates a builder with no content, comparator or filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content to observe.
    pub fn content(mut self, content: Arc<ContentList<T>>) -> Self {
        self.content = Some(content);
        self
    }

    /// Adds a sort comparator.
    pub fn sort<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        self.compare = Some(Arc::new(compare));
        self
    }

    /// Sets a shared comparator, such as [`natural_order`](super::natural_order).
    pub fn compare_fn(mut self, compare: CompareFn<T>) -> Self {
        self.compare = Some(compare);
        self
    }

    /// Adds a filter predicate.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Sets a shared filter predicate.
    pub fn filter_fn(mut self, filter: FilterFn<T>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the selection policy.
    pub fn allows_multiple_selection(mut self, allows: bool) -> Self {
        self.config.allows_multiple_selection = allows;
        self
    }

    /// Sets whether a wholesale content change clears the selection.
    pub fn clears_selection_on_change(mut self, clears: bool) -> Self {
        self.config.clears_selection_on_change = clears;
        self
    }

    /// Applies a whole configuration.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the controller.
    pub fn build(self) -> ArrayController<T> {
        ArrayController::from_parts(self.content, self.compare, self.filter, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::natural_order;

    fn controller_over(items: Vec<i32>) -> (Arc<ContentList<i32>>, ArrayController<i32>) {
        let content = Arc::new(ContentList::new(items));
        let controller = ArrayController::new(Some(content.clone()), Some(natural_order()), None, true);
        (content, controller)
    }

    fn record_arranged(controller: &ArrayController<i32>) -> Arc<Mutex<Vec<ContentChange<i32>>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        controller
            .signals()
            .arranged_changed
            .connect(move |change| log_clone.lock().push(change.clone()));
        log
    }

    #[test]
    fn test_construction_subscribes() {
        let (content, controller) = controller_over(vec![2, 1]);
        assert_eq!(content.signal().connection_count(), 1);
        assert_eq!(controller.arranged(), vec![1, 2]);
        assert!(!controller.is_disposed());
    }

    #[test]
    fn test_dispose_unsubscribes() {
        let (content, controller) = controller_over(vec![1]);

        controller.dispose();
        controller.dispose();

        assert_eq!(content.signal().connection_count(), 0);
        content.push(5);
        assert_eq!(controller.arranged(), vec![1]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (content, controller) = controller_over(vec![1]);
        drop(controller);
        assert_eq!(content.signal().connection_count(), 0);
        content.push(2);
    }

    #[test]
    fn test_set_content_switches_subscription() {
        let (old, controller) = controller_over(vec![9, 8]);
        controller.select_item(8);
        let new = Arc::new(ContentList::new(vec![8, 3]));

        controller.set_content(Some(new.clone()));

        assert_eq!(old.signal().connection_count(), 0);
        assert_eq!(new.signal().connection_count(), 1);
        assert_eq!(controller.arranged(), vec![3, 8]);
        assert_eq!(controller.selection(), vec![8]);
        assert_eq!(controller.selection_indexes(), vec![1]);

        old.push(1);
        assert_eq!(controller.arranged(), vec![3, 8]);
        new.push(1);
        assert_eq!(controller.arranged(), vec![1, 3, 8]);
    }

    #[test]
    fn test_absent_content_hard_resets() {
        let (_content, controller) = controller_over(vec![1, 2]);
        controller.select_items([1, 2]);

        controller.set_content(None);

        assert!(controller.arranged().is_empty());
        assert!(controller.selection().is_empty());
        assert!(controller.selection_indexes().is_empty());
        assert!(controller.content().is_none());
    }

    #[test]
    fn test_wholesale_change_clears_selection() {
        let (content, controller) = controller_over(vec![1, 2]);
        controller.select_item(2);

        content.set_items(vec![2, 0]);

        assert_eq!(controller.arranged(), vec![0, 2]);
        assert!(!controller.has_selection());
        assert!(controller.selection_indexes().is_empty());
    }

    #[test]
    fn test_wholesale_change_can_keep_selection() {
        let content = Arc::new(ContentList::new(vec![1, 2]));
        let controller = ArrayController::builder()
            .content(content.clone())
            .compare_fn(natural_order())
            .clears_selection_on_change(false)
            .build();
        controller.select_item(2);

        content.set_items(vec![2, 0, 5]);

        assert_eq!(controller.selection(), vec![2]);
        assert_eq!(controller.selection_indexes(), vec![1]);
    }

    #[test]
    fn test_sort_change_resyncs_selection() {
        let (_content, controller) = controller_over(vec![1, 2, 3]);
        controller.select_item(1);
        assert_eq!(controller.selection_indexes(), vec![0]);

        controller.set_sort(|a: &i32, b: &i32| b.cmp(a));

        assert_eq!(controller.arranged(), vec![3, 2, 1]);
        assert_eq!(controller.selection_indexes(), vec![2]);

        controller.clear_sort();
        assert_eq!(controller.arranged(), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_change_keeps_filtered_out_selection() {
        let (_content, controller) = controller_over(vec![1, 2, 3, 4]);
        controller.select_items([3, 4]);

        controller.set_filter(|n: &i32| n % 2 == 0);

        assert_eq!(controller.arranged(), vec![2, 4]);
        assert_eq!(controller.selection(), vec![3, 4]);
        assert_eq!(controller.selection_indexes(), vec![1]);

        controller.clear_filter();
        assert_eq!(controller.selection_indexes(), vec![2, 3]);
    }

    #[test]
    fn test_update_notification_moves_item() {
        let (content, controller) = controller_over(vec![1, 5, 9]);

        content.replace(0, 7);

        assert_eq!(controller.arranged(), vec![5, 7, 9]);
    }

    #[test]
    fn test_arranged_signal_reports_deltas() {
        let (content, controller) = controller_over(vec![1, 3]);
        let log = record_arranged(&controller);

        content.push(2);
        content.remove(0);
        controller.rearrange();

        assert_eq!(
            *log.lock(),
            vec![
                ContentChange::insert(1, vec![2]),
                ContentChange::remove(0, vec![1]),
                ContentChange::Change,
            ]
        );
    }

    #[test]
    fn test_filtered_insert_emits_nothing() {
        let content = Arc::new(ContentList::new(vec![2]));
        let controller = ArrayController::builder()
            .content(content.clone())
            .filter(|n: &i32| n % 2 == 0)
            .build();
        let log = record_arranged(&controller);

        content.push(3);

        assert!(log.lock().is_empty());
        assert_eq!(controller.arranged(), vec![2]);
    }

    #[test]
    fn test_selection_signal() {
        let (content, controller) = controller_over(vec![1, 2, 3]);
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        controller
            .signals()
            .selection_changed
            .connect(move |change| log_clone.lock().push(change.clone()));

        controller.select_items([1, 2]);
        controller.select_item(2);
        controller.unselect_item(&1);
        content.clear();

        let log = log.lock();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].selected, vec![1, 2]);
        assert_eq!(log[1].deselected, vec![1]);
        assert_eq!(log[2].deselected, vec![2]);
    }

    #[test]
    fn test_slots_can_read_controller() {
        let (content, controller) = controller_over(vec![1]);
        let controller = Arc::new(controller);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&controller);
        let seen_clone = seen.clone();
        controller.signals().arranged_changed.connect(move |_| {
            if let Some(controller) = weak.upgrade() {
                seen_clone.lock().push(controller.arranged_len());
            }
        });

        content.push(4);
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_policy_accessors() {
        let (_content, controller) = controller_over(vec![1, 2]);
        assert!(controller.allows_multiple_selection());

        controller.set_allows_multiple_selection(false);
        controller.set_clears_selection_on_change(false);

        assert_eq!(
            controller.config(),
            ControllerConfig {
                allows_multiple_selection: false,
                clears_selection_on_change: false,
            }
        );
    }

    #[test]
    fn test_try_set_content_after_dispose() {
        let (_content, controller) = controller_over(vec![1]);
        controller.dispose();

        let other = Arc::new(ContentList::new(vec![2]));
        assert!(matches!(
            controller.try_set_content(Some(other.clone())),
            Err(ArrangeError::Disposed)
        ));
        assert_eq!(other.signal().connection_count(), 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "array controller used after dispose")]
    fn test_select_after_dispose_asserts() {
        let (_content, controller) = controller_over(vec![1]);
        controller.dispose();
        controller.select_item(1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "array controller used after dispose")]
    fn test_policy_change_after_dispose_asserts() {
        let (_content, controller) = controller_over(vec![1]);
        controller.dispose();
        controller.set_allows_multiple_selection(false);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "array controller used after dispose")]
    fn test_clear_policy_change_after_dispose_asserts() {
        let (_content, controller) = controller_over(vec![1]);
        controller.dispose();
        controller.set_clears_selection_on_change(false);
    }
}
