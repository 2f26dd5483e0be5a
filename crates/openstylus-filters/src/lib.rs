//! Position Filter Capabilities for OpenStylus
//!
//! This crate defines the seam between the transpose pipeline and
//! externally supplied position filters:
//! - **`FilterStage`**: where in the pipeline a filter runs
//! - **`PositionFilter`**: the capability a filter exposes
//! - **`partition_filters`**: splitting a filter set into the ordered
//!   pre-transform and post-transform lists
//!
//! The pipeline never constructs filters; it only orders, partitions,
//! and applies the capabilities handed to it. Partitioning runs on the
//! configuration path, never per report.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use openstylus_filters::prelude::*;
//! use openstylus_geometry::Point;
//!
//! #[derive(Debug)]
//! struct Offset;
//!
//! impl PositionFilter for Offset {
//!     fn stage(&self) -> FilterStage {
//!         FilterStage::PostTranspose
//!     }
//!     fn apply(&self, p: Point) -> Point {
//!         Point::new(p.x + 1.0, p.y)
//!     }
//! }
//!
//! let filters: Vec<Arc<dyn PositionFilter>> = vec![Arc::new(Offset)];
//! let (pre, post) = partition_filters(&filters, false);
//! assert!(pre.is_empty());
//! assert_eq!(post.len(), 1);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod prelude;
pub mod selector;
pub mod stage;

pub use selector::partition_filters;
pub use stage::FilterStage;

use std::fmt;
use std::sync::Arc;

use openstylus_geometry::Point;

/// Capability exposed by an externally supplied position filter.
///
/// A filter declares exactly one [`FilterStage`] and maps one point to
/// another. Filters sharing a stage run in insertion order.
///
/// `apply` runs in the per-report hot path and must be RT-safe:
/// no allocations, no blocking, bounded execution time. Interior state
/// (e.g. smoothing history) is the filter's own concern and must be
/// safe to touch from the report stream.
pub trait PositionFilter: Send + Sync + fmt::Debug {
    /// Pipeline position at which this filter runs.
    fn stage(&self) -> FilterStage;

    /// Map one position to another (RT-safe).
    fn apply(&self, position: Point) -> Point;
}

/// Shared handle to a position filter.
///
/// Filters are owned by the session that supplied them and shared
/// read-only with the pipeline for the lifetime of any in-flight report.
pub type FilterHandle = Arc<dyn PositionFilter>;
