//! Absolute-Position Report Pipeline for OpenStylus
//!
//! This crate turns raw absolute-position digitizer reports into
//! screen-space pointer updates:
//!
//! - **`PipelineConfig`**: the session-owned configuration aggregate.
//!   Every geometry or filter mutation rebuilds a consistent
//!   [`PipelineSnapshot`] and publishes it atomically.
//! - **`transpose`**: the per-report hot path — pre-filters, affine
//!   transform, clip/limit policy, post-filters.
//! - **`ReportHandler`**: per-report orchestration — report-id gating,
//!   pressure normalization, and forwarding to a [`PointerSink`].
//!
//! # RT Safety
//!
//! Report handling is RT-safe relative to configuration churn:
//! - A report in flight always sees one fully consistent snapshot,
//!   never a mix of old transform with new bounds.
//! - Snapshot acquisition is one brief read-lock and an `Arc` clone;
//!   report processing never waits for a configuration update.
//! - The hot path performs no allocation, logging, or blocking I/O.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use openstylus_geometry::{Area, DigitizerSpec, Point};
//! use openstylus_pipeline::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Recorder(Vec<Point>);
//!
//! impl PointerSink for Recorder {
//!     fn set_position(&mut self, position: Point) {
//!         self.0.push(position);
//!     }
//! }
//!
//! let config = Arc::new(PipelineConfig::new());
//! config.set_digitizer(DigitizerSpec {
//!     width_mm: 100.0,
//!     height_mm: 100.0,
//!     max_x: 10000.0,
//!     max_y: 10000.0,
//!     max_pressure: 8192.0,
//!     active_report_id_range: 1..3,
//! });
//! config.set_input_area(Area::new(Point::new(50.0, 50.0), 100.0, 100.0, 0.0));
//! config.set_output_area(Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0));
//!
//! let mut handler = ReportHandler::new(config, Recorder::default());
//! let outcome = handler.handle(&DeviceReport {
//!     report_id: 1,
//!     position: Point::new(5000.0, 5000.0),
//!     pressure: 4096.0,
//! });
//! assert!(matches!(outcome, Ok(ReportOutcome::Forwarded(_))));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod handler;
pub mod prelude;
pub mod sink;
pub mod snapshot;
pub mod transpose;

pub use config::PipelineConfig;
pub use handler::{ReportHandler, ReportOutcome};
pub use sink::{PointerSink, PressureSink};
pub use snapshot::PipelineSnapshot;
pub use transpose::transpose;

use openstylus_geometry::Point;

/// One decoded absolute-position report from a digitizer device.
///
/// Decoding from raw device bytes happens upstream; by the time a
/// report reaches this crate it carries the report identifier, the raw
/// absolute position in device counts, and the raw pressure value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceReport {
    /// Report identifier, gated against the digitizer's active range.
    pub report_id: u32,
    /// Absolute position in raw device counts.
    pub position: Point,
    /// Raw pressure in device counts.
    pub pressure: f64,
}
