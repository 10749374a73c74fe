//! Prelude module for Lattice Arrange.
//!
//! ```
//! use lattice_arrange::prelude::*;
//! ```

// ============================================================================
// Content and Notification
// ============================================================================

pub use lattice_arrange_core::{ConnectionGuard, ConnectionId, ContentChange, ContentList, Signal};

// ============================================================================
// Controller
// ============================================================================

pub use crate::model::{
    ArrangedSignals, ArrayController, ArrayControllerBuilder, CompareFn, ControllerConfig,
    FilterFn, SelectionChange, natural_order, reverse_order, sort_by_key,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::ArrangeError;
