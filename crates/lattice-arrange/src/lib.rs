//! Lattice Arrange - filtered, sorted views over observable content.
//!
//! An [`ArrayController`](model::ArrayController) observes a
//! [`ContentList`], keeps a filtered and sorted projection of its items, and
//! tracks a selection over that projection. Single-item changes are folded in
//! incrementally with a binary-search insert; wholesale changes rebuild.
//!
//! # Example
//!
//! ```
//! use lattice_arrange::prelude::*;
//! use std::sync::Arc;
//!
//! let content = Arc::new(ContentList::new(vec![5, 2, 8, 1]));
//! let controller = ArrayController::builder()
//!     .content(content.clone())
//!     .compare_fn(natural_order())
//!     .filter(|n: &i32| *n > 1)
//!     .build();
//!
//! assert_eq!(controller.arranged(), vec![2, 5, 8]);
//!
//! content.push(3);
//! assert_eq!(controller.arranged(), vec![2, 3, 5, 8]);
//! ```

mod error;
pub mod model;
pub mod prelude;

pub use error::{ArrangeError, Result};
pub use lattice_arrange_core::*;
