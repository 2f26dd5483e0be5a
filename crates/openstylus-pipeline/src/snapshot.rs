//! Immutable published pipeline state.

use openstylus_filters::{FilterHandle, partition_filters};
use openstylus_geometry::{AffineTransform, Area, Bounds, DigitizerSpec};

/// One fully consistent view of the derived pipeline state.
///
/// A snapshot is built wholesale on every relevant configuration
/// mutation and published atomically; it is never patched in place.
/// Report processing works against exactly one snapshot from start to
/// finish, so a transform is never paired with bounds derived from a
/// different output area.
#[derive(Debug)]
pub struct PipelineSnapshot {
    transform: AffineTransform,
    bounds: Bounds,
    digitizer: Option<DigitizerSpec>,
    pre: Vec<FilterHandle>,
    post: Vec<FilterHandle>,
    missing: Option<&'static str>,
}

impl PipelineSnapshot {
    /// Derive a snapshot from the current configuration fields.
    ///
    /// The transform is derived only once input area, output area, and
    /// digitizer are all present; until then it stays identity and the
    /// snapshot reports itself not ready. Bounds depend only on the
    /// output area. Filter partitioning is a pure function of the
    /// filter list and the interpolator flag, memoized here so the hot
    /// path never recomputes it.
    #[must_use]
    pub fn build(
        input_area: Option<&Area>,
        output_area: Option<&Area>,
        digitizer: Option<&DigitizerSpec>,
        filters: &[FilterHandle],
        interpolator_active: bool,
    ) -> Self {
        let missing = if input_area.is_none() {
            Some("input area")
        } else if output_area.is_none() {
            Some("output area")
        } else if digitizer.is_none() {
            Some("digitizer")
        } else {
            None
        };

        let transform = match (input_area, output_area, digitizer) {
            (Some(input), Some(output), Some(spec)) => {
                AffineTransform::from_mapping(input, output, spec)
            }
            _ => AffineTransform::IDENTITY,
        };

        let (pre, post) = partition_filters(filters, interpolator_active);

        Self {
            transform,
            bounds: Bounds::from_output_area(output_area),
            digitizer: digitizer.cloned(),
            pre,
            post,
            missing,
        }
    }

    /// An empty, not-ready snapshot (fresh session).
    #[must_use]
    pub fn empty() -> Self {
        Self::build(None, None, None, &[], false)
    }

    /// The cached raw-to-screen transform.
    #[must_use]
    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    /// The cached output-space bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The digitizer calibration, if configured.
    #[must_use]
    pub fn digitizer(&self) -> Option<&DigitizerSpec> {
        self.digitizer.as_ref()
    }

    /// Filters to run before the transform, in order.
    #[must_use]
    pub fn pre_filters(&self) -> &[FilterHandle] {
        &self.pre
    }

    /// Filters to run after the transform, in order.
    #[must_use]
    pub fn post_filters(&self) -> &[FilterHandle] {
        &self.post
    }

    /// The first unset geometry prerequisite, if any.
    #[must_use]
    pub fn missing_prerequisite(&self) -> Option<&'static str> {
        self.missing
    }

    /// Whether the snapshot carries a complete geometry configuration.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing.is_none()
    }
}
