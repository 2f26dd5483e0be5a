//! Partitioning a filter set into pipeline stage lists.

use crate::{FilterHandle, FilterStage};

/// Split a filter set into the ordered pre-transform and post-transform
/// lists.
///
/// - `post` holds the `PostTranspose` filters, in original order.
/// - `pre` holds the `PreTranspose` filters and, only when
///   `interpolator_active` is false, the `PreInterpolate` filters as
///   well — taken as a union in original relative order, not
///   concatenated by stage.
///
/// When an external interpolation stage is active elsewhere in the
/// pipeline, `PreInterpolate` filters must not run before the
/// transform: interpolation expects less-processed input, so those
/// filters drop out of this pipeline entirely.
///
/// Pure function of `(filters, interpolator_active)`; the pipeline
/// memoizes the result in its published snapshot and never calls this
/// per report.
#[must_use]
pub fn partition_filters(
    filters: &[FilterHandle],
    interpolator_active: bool,
) -> (Vec<FilterHandle>, Vec<FilterHandle>) {
    let mut pre = Vec::new();
    let mut post = Vec::new();

    for filter in filters {
        match filter.stage() {
            FilterStage::PreTranspose => pre.push(filter.clone()),
            FilterStage::PreInterpolate if !interpolator_active => pre.push(filter.clone()),
            FilterStage::PreInterpolate => {}
            FilterStage::PostTranspose => post.push(filter.clone()),
        }
    }

    (pre, post)
}
