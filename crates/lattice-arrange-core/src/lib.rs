//! Core plumbing for lattice-arrange.
//!
//! This crate provides the notification layer the array controller sits on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Content Sequences**: [`ContentList`], an observable list that announces
//!   each mutation as a [`ContentChange`]
//! - **Errors**: [`ContentError`] for checked positional mutations
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Example
//!
//! ```
//! use lattice_arrange_core::{ContentChange, ContentList};
//! use std::sync::Arc;
//!
//! let content = Arc::new(ContentList::new(vec!["b", "a"]));
//!
//! let guard = content.signal().connect_scoped(|change: &ContentChange<&str>| {
//!     if let ContentChange::Insert { range, items } = change {
//!         println!("inserted {:?} at {:?}", items, range);
//!     }
//! });
//!
//! content.push("c");
//! drop(guard);
//! ```

pub mod content;
mod error;
pub mod logging;
pub mod signal;

pub use content::{ContentChange, ContentList};
pub use error::{ContentError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
