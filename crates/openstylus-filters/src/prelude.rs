//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use openstylus_filters::prelude::*;
//!
//! let (pre, post) = partition_filters(&[], true);
//! assert!(pre.is_empty() && post.is_empty());
//! ```

pub use crate::selector::partition_filters;
pub use crate::stage::FilterStage;
pub use crate::{FilterHandle, PositionFilter};
