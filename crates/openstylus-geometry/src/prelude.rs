//! Prelude for the geometry crate.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//!
//! ```
//! use openstylus_geometry::prelude::*;
//!
//! let bounds = Bounds::from_output_area(None);
//! assert_eq!(bounds, Bounds::ZERO);
//! ```

pub use crate::Point;
pub use crate::area::Area;
pub use crate::bounds::Bounds;
pub use crate::digitizer::DigitizerSpec;
pub use crate::transform::AffineTransform;
