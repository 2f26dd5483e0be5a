//! 2D affine transform derivation and application.

use crate::{Area, DigitizerSpec, Point};

/// A 2D affine transform (6 coefficients), mapping
/// `x' = m11*x + m21*y + dx`, `y' = m12*x + m22*y + dy`.
///
/// Transforms are immutable values: composition produces a new value,
/// application never mutates. The composed mapping for a tablet session
/// is derived once per configuration change via [`Self::from_mapping`]
/// and cached by the pipeline; `apply` is the only per-report operation.
///
/// # RT Safety
///
/// `apply` is RT-safe:
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// x-from-x coefficient.
    pub m11: f64,
    /// y-from-x coefficient.
    pub m12: f64,
    /// x-from-y coefficient.
    pub m21: f64,
    /// y-from-y coefficient.
    pub m22: f64,
    /// x translation.
    pub dx: f64,
    /// y translation.
    pub dy: f64,
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// A pure scaling transform.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            m11: sx,
            m12: 0.0,
            m21: 0.0,
            m22: sy,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// A pure translation.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m11: 1.0,
            m12: 0.0,
            m21: 0.0,
            m22: 1.0,
            dx,
            dy,
        }
    }

    /// A counter-clockwise rotation by `radians` about the origin.
    #[must_use]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Compose with `next`, applied after `self`.
    ///
    /// `a.then(b).apply(p)` equals `b.apply(a.apply(p))`. Composition
    /// order is a correctness-critical contract for the mapping
    /// derivation: each derivation step is `then`-chained so earlier
    /// steps apply to the point first.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m11: next.m11 * self.m11 + next.m21 * self.m12,
            m12: next.m12 * self.m11 + next.m22 * self.m12,
            m21: next.m11 * self.m21 + next.m21 * self.m22,
            m22: next.m12 * self.m21 + next.m22 * self.m22,
            dx: next.m11 * self.dx + next.m21 * self.dy + next.dx,
            dy: next.m12 * self.dx + next.m22 * self.dy + next.dy,
        }
    }

    /// Compose with a scaling applied after `self`.
    #[must_use]
    pub fn then_scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::scale(sx, sy))
    }

    /// Compose with a translation applied after `self`.
    #[must_use]
    pub fn then_translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    /// Compose with a rotation applied after `self`.
    #[must_use]
    pub fn then_rotate(self, radians: f64) -> Self {
        self.then(Self::rotation(radians))
    }

    /// Map a point through the transform (RT-safe).
    #[inline]
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.m11 * p.x + self.m21 * p.y + self.dx,
            y: self.m12 * p.x + self.m22 * p.y + self.dy,
        }
    }

    /// Derive the raw-digitizer-to-screen mapping for one session.
    ///
    /// The composition, in application order:
    /// 1. scale raw device counts to millimeters
    /// 2. translate the input area's center to the origin
    /// 3. counter-rotate by the input area's rotation
    /// 4. scale the input extent to the output extent
    /// 5. translate to the output area's center
    ///
    /// Degenerate geometry (`input.width == 0`, `digitizer.max_x == 0`,
    /// ...) is *not* validated here; it produces non-finite coefficients
    /// that downstream clamp/compare code must tolerate without
    /// panicking. Callers wanting a usable mapping must supply
    /// non-degenerate areas and calibration.
    ///
    /// # Example
    ///
    /// ```
    /// use openstylus_geometry::{AffineTransform, Area, DigitizerSpec, Point};
    ///
    /// let digitizer = DigitizerSpec {
    ///     width_mm: 100.0,
    ///     height_mm: 100.0,
    ///     max_x: 10000.0,
    ///     max_y: 10000.0,
    ///     max_pressure: 1.0,
    ///     active_report_id_range: 0..1,
    /// };
    /// let input = Area::new(Point::new(50.0, 50.0), 100.0, 100.0, 0.0);
    /// let output = Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
    /// let t = AffineTransform::from_mapping(&input, &output, &digitizer);
    ///
    /// let p = t.apply(Point::new(5000.0, 5000.0));
    /// assert!((p.x - 960.0).abs() < 1e-6 && (p.y - 540.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn from_mapping(input: &Area, output: &Area, digitizer: &DigitizerSpec) -> Self {
        Self::scale(
            digitizer.width_mm / digitizer.max_x,
            digitizer.height_mm / digitizer.max_y,
        )
        .then_translate(-input.position.x, -input.position.y)
        .then_rotate((-input.rotation_degrees).to_radians())
        .then_scale(output.width / input.width, output.height / input.height)
        .then_translate(output.position.x, output.position.y)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
