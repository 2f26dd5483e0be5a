//! Area Mapping Geometry for OpenStylus
//!
//! This crate provides the value types and derivations used to map raw
//! absolute digitizer coordinates onto screen space:
//! - **Area**: a rectangle with rotation, centered on its position
//! - **DigitizerSpec**: raw-unit to physical-unit calibration of one surface
//! - **AffineTransform**: the composed 2D mapping, derived once per
//!   configuration change and reused for every report
//! - **Bounds**: the axis-aligned output box used for clipping and limiting
//!
//! # RT Safety Guarantees
//!
//! Everything here that runs per report is RT-safe:
//! - `AffineTransform::apply` and `Bounds::clamp` do no heap allocations
//! - O(1) time complexity, bounded execution time
//! - No syscalls or I/O
//!
//! Derivation (`AffineTransform::from_mapping`, `Bounds::from_output_area`)
//! happens on the configuration path, not per report.
//!
//! # Example
//!
//! ```
//! use openstylus_geometry::{Area, Bounds, DigitizerSpec, Point};
//! use openstylus_geometry::AffineTransform;
//!
//! let digitizer = DigitizerSpec {
//!     width_mm: 100.0,
//!     height_mm: 100.0,
//!     max_x: 10000.0,
//!     max_y: 10000.0,
//!     max_pressure: 8192.0,
//!     active_report_id_range: 1..3,
//! };
//! let input = Area::new(Point::new(50.0, 50.0), 100.0, 100.0, 0.0);
//! let output = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
//!
//! let transform = AffineTransform::from_mapping(&input, &output, &digitizer);
//! let center = transform.apply(Point::new(5000.0, 5000.0));
//! assert!((center.x - 960.0).abs() < 1e-6);
//! assert!((center.y - 540.0).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod area;
pub mod bounds;
pub mod digitizer;
pub mod prelude;
pub mod transform;

pub use area::Area;
pub use bounds::Bounds;
pub use digitizer::DigitizerSpec;
pub use transform::AffineTransform;

use serde::{Deserialize, Serialize};

/// A 2D position, in whatever unit the surrounding context defines
/// (raw digitizer counts, millimeters, or screen pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}
