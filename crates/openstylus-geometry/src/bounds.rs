//! Axis-aligned output bounds for clipping and limiting.

use crate::{Area, Point};

/// Min/max screen-space box derived from the output area.
///
/// Derived once per configuration change and cached next to the
/// transform; `clamp` is the only per-report operation.
///
/// Bounds are axis-aligned: rotation of the output area is ignored, so
/// a rotated output area is not tightly bounded. This matches the
/// behavior of the system this pipeline interoperates with and is kept
/// deliberately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Componentwise minimum corner.
    pub min: Point,
    /// Componentwise maximum corner.
    pub max: Point,
}

impl Bounds {
    /// The degenerate box collapsed onto the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Derive bounds from an output area, if one is configured.
    ///
    /// The area is centered on its position: `min = position - extent/2`,
    /// `max = position + extent/2`. An unset area yields [`Self::ZERO`].
    #[must_use]
    pub fn from_output_area(output: Option<&Area>) -> Self {
        match output {
            None => Self::ZERO,
            Some(area) => Self {
                min: Point::new(
                    area.position.x - area.width / 2.0,
                    area.position.y - area.height / 2.0,
                ),
                max: Point::new(
                    area.position.x + area.width / 2.0,
                    area.position.y + area.height / 2.0,
                ),
            },
        }
    }

    /// Componentwise clamp of `p` into the box (RT-safe).
    ///
    /// Implemented as a max/min chain rather than `f64::clamp` so that
    /// inverted or non-finite bounds propagate instead of panicking;
    /// with such bounds the result is unspecified but the call always
    /// returns.
    #[inline]
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.max(self.min.x).min(self.max.x),
            y: p.y.max(self.min.y).min(self.max.y),
        }
    }

    /// Whether `p` is unchanged by clamping into the box.
    ///
    /// Exact floating-point comparison, no epsilon: the limiting policy
    /// is defined in terms of the clamp result itself.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, p: Point) -> bool {
        let clamped = self.clamp(p);
        clamped.x == p.x && clamped.y == p.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_area_collapses_to_origin() {
        assert_eq!(Bounds::from_output_area(None), Bounds::ZERO);
    }

    #[test]
    fn bounds_center_on_area_position() {
        let area = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let bounds = Bounds::from_output_area(Some(&area));
        assert_eq!(bounds.min, Point::new(0.0, 0.0));
        assert_eq!(bounds.max, Point::new(1920.0, 1080.0));
    }

    #[test]
    fn rotation_does_not_affect_bounds() {
        let flat = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let tilted = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 45.0);
        assert_eq!(
            Bounds::from_output_area(Some(&flat)),
            Bounds::from_output_area(Some(&tilted))
        );
    }

    #[test]
    fn clamp_pins_out_of_box_points_to_the_edge() {
        let area = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let bounds = Bounds::from_output_area(Some(&area));

        let clamped = bounds.clamp(Point::new(-10.0, 500.0));
        assert_eq!(clamped, Point::new(0.0, 500.0));

        let inside = Point::new(320.0, 200.0);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn contains_uses_the_clamp_result() {
        let area = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let bounds = Bounds::from_output_area(Some(&area));

        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(1920.0, 1080.0)));
        assert!(!bounds.contains(Point::new(1920.0001, 1080.0)));
    }

    #[test]
    fn clamp_tolerates_non_finite_input() {
        let area = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
        let bounds = Bounds::from_output_area(Some(&area));

        // Must not panic; the value itself is unspecified.
        let _ = bounds.clamp(Point::new(f64::NAN, f64::INFINITY));
    }

    #[test]
    fn clamp_tolerates_non_finite_bounds() {
        let bounds = Bounds {
            min: Point::new(f64::NAN, f64::NEG_INFINITY),
            max: Point::new(f64::NAN, f64::INFINITY),
        };
        let _ = bounds.clamp(Point::new(1.0, 2.0));
    }
}
