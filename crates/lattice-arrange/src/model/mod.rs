//! Arrangement and selection for observable content.
//!
//! # Core Types
//!
//! - [`ArrayController`]: Observes a content list and keeps the arranged
//!   items and selection current
//! - [`ArrangementEngine`]: Filter, sort and incremental insert/remove over
//!   the arranged items
//! - [`SelectionTracker`]: Selected items plus their arranged positions
//! - [`insert_sorted`]: Binary-search insert into a sorted vector
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  ContentChange  ┌─────────────────┐  arranged_changed
//! │ ContentList │────────────────>│ ArrayController │──────────────────> observers
//! └─────────────┘                 │  ├ engine       │  selection_changed
//!                                 │  └ selection    │──────────────────> observers
//!                                 └─────────────────┘
//! ```

mod arrangement;
mod config;
mod controller;
mod ordered_insert;
mod selection;

pub use arrangement::{
    ArrangementEngine, CompareFn, DeltaOutcome, FilterFn, natural_order, reverse_order,
    sort_by_key,
};
pub use config::ControllerConfig;
pub use controller::{ArrangedSignals, ArrayController, ArrayControllerBuilder};
pub use ordered_insert::{insert_sorted, insertion_position};
pub use selection::{SelectionChange, SelectionTracker};
