//! Rectangle-with-rotation value type.

use serde::{Deserialize, Serialize};

use crate::Point;

/// A rectangle in some coordinate space, rotated about its own position.
///
/// `position` is the **center** of the rectangle. For an input area the
/// space is digitizer millimeters; for an output area it is screen pixels.
///
/// Areas are immutable values: configuration changes replace the whole
/// area rather than mutating it in place.
///
/// # Example
///
/// ```
/// use openstylus_geometry::{Area, Point};
///
/// let output = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
/// assert_eq!(output.width, 1920.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Center of the rectangle.
    pub position: Point,
    /// Extent along the unrotated x axis.
    pub width: f64,
    /// Extent along the unrotated y axis.
    pub height: f64,
    /// Clockwise rotation about `position`, in degrees.
    pub rotation_degrees: f64,
}

impl Area {
    /// Create an area centered on `position`.
    #[must_use]
    pub const fn new(position: Point, width: f64, height: f64, rotation_degrees: f64) -> Self {
        Self {
            position,
            width,
            height,
            rotation_degrees,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn area_is_a_plain_value() {
        let a = Area::new(Point::new(10.0, 20.0), 30.0, 40.0, 90.0);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn area_round_trips_through_serde() {
        let a = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let json = serde_json::to_string(&a).unwrap();
        let back: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
