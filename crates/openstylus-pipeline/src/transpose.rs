//! The per-report hot path: filters, transform, clip/limit policy.

use openstylus_geometry::Point;

use crate::snapshot::PipelineSnapshot;

/// Map one raw digitizer position to a screen-space position.
///
/// Steps, in order:
/// 1. fold through the pre-transform filters
/// 2. apply the cached affine transform
/// 3. clamp into the cached bounds
/// 4. with `area_limiting`, drop the report entirely if clamping moved
///    the point — no partial output
/// 5. with `area_clipping`, continue with the clamped point; otherwise
///    with the unclamped one
/// 6. fold through the post-transform filters
///
/// Empty filter lists are identity folds. The limiting comparison in
/// step 4 is exact floating-point equality against the clamp result —
/// no epsilon; the policy is defined by the clamp function itself.
/// Non-finite coordinates (from degenerate geometry) propagate without
/// panicking: under limiting they compare unequal and drop the report,
/// otherwise they pass through for the sink to reject.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(f) time, f = filter count
/// - No syscalls, no locking, no logging
#[inline]
#[must_use]
pub fn transpose(
    raw: Point,
    snapshot: &PipelineSnapshot,
    area_clipping: bool,
    area_limiting: bool,
) -> Option<Point> {
    let point = snapshot
        .pre_filters()
        .iter()
        .fold(raw, |p, filter| filter.apply(p));

    let point = snapshot.transform().apply(point);
    let clamped = snapshot.bounds().clamp(point);

    if area_limiting && clamped != point {
        return None;
    }

    let working = if area_clipping { clamped } else { point };

    Some(
        snapshot
            .post_filters()
            .iter()
            .fold(working, |p, filter| filter.apply(p)),
    )
}
