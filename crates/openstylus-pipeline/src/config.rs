//! Session-owned pipeline configuration with atomic snapshot publication.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use openstylus_filters::FilterHandle;
use openstylus_geometry::{Area, DigitizerSpec};

use crate::snapshot::PipelineSnapshot;

/// Mutable configuration fields, guarded by the writer lock.
#[derive(Debug, Default)]
struct ConfigFields {
    input_area: Option<Area>,
    output_area: Option<Area>,
    digitizer: Option<DigitizerSpec>,
    filters: Vec<FilterHandle>,
    interpolator_active: bool,
}

/// The configuration aggregate owned by one device session.
///
/// Created empty, populated by the settings layer, discarded when the
/// session ends. Nothing here persists to storage.
///
/// Every setter for geometry, calibration, or filters rebuilds the
/// derived [`PipelineSnapshot`] before returning and publishes it
/// atomically, so report processing never observes a stale transform
/// paired with fresh bounds. The clip/limit flags take effect without
/// republication; the hot path reads them directly.
///
/// Configuration setters may run on a different thread than report
/// handling. Writers serialize on an internal mutex; readers take one
/// brief `RwLock` read to clone the published `Arc` and are lock-free
/// afterwards.
#[derive(Debug)]
pub struct PipelineConfig {
    fields: Mutex<ConfigFields>,
    published: RwLock<Arc<PipelineSnapshot>>,
    area_clipping: AtomicBool,
    area_limiting: AtomicBool,
}

impl PipelineConfig {
    /// Create an empty configuration: no areas, no digitizer, no
    /// filters, both policies off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(ConfigFields::default()),
            published: RwLock::new(Arc::new(PipelineSnapshot::empty())),
            area_clipping: AtomicBool::new(false),
            area_limiting: AtomicBool::new(false),
        }
    }

    /// The currently published snapshot.
    ///
    /// RT-safe apart from one brief read-lock: clones the `Arc`, never
    /// blocks on an in-progress rebuild longer than the publication
    /// store itself.
    #[must_use]
    pub fn snapshot(&self) -> Arc<PipelineSnapshot> {
        self.published.read().clone()
    }

    /// Set the active input area (digitizer millimeters).
    ///
    /// Triggers transform recomputation.
    pub fn set_input_area(&self, area: Area) {
        let mut fields = self.fields.lock();
        fields.input_area = Some(area);
        self.publish(&fields, "input area");
    }

    /// Set the output area (screen pixels).
    ///
    /// Triggers transform and bounds recomputation.
    pub fn set_output_area(&self, area: Area) {
        let mut fields = self.fields.lock();
        fields.output_area = Some(area);
        self.publish(&fields, "output area");
    }

    /// Set the digitizer calibration.
    ///
    /// Triggers transform and bounds recomputation.
    pub fn set_digitizer(&self, digitizer: DigitizerSpec) {
        let mut fields = self.fields.lock();
        fields.digitizer = Some(digitizer);
        self.publish(&fields, "digitizer");
    }

    /// Replace the filter set.
    ///
    /// Triggers re-partitioning into pre/post stage lists.
    pub fn set_filters(&self, filters: Vec<FilterHandle>) {
        let mut fields = self.fields.lock();
        fields.filters = filters;
        self.publish(&fields, "filters");
    }

    /// Record whether an external interpolation stage is active.
    ///
    /// Triggers re-partitioning: `PreInterpolate` filters only run
    /// before the transform while no interpolator is active.
    pub fn set_interpolator_active(&self, active: bool) {
        let mut fields = self.fields.lock();
        fields.interpolator_active = active;
        self.publish(&fields, "interpolator state");
    }

    /// Enable or disable clamping of out-of-bounds output positions.
    pub fn set_area_clipping(&self, enabled: bool) {
        self.area_clipping.store(enabled, Ordering::Relaxed);
    }

    /// Enable or disable dropping of out-of-bounds reports.
    pub fn set_area_limiting(&self, enabled: bool) {
        self.area_limiting.store(enabled, Ordering::Relaxed);
    }

    /// Whether out-of-bounds output positions are clamped.
    #[must_use]
    pub fn area_clipping(&self) -> bool {
        self.area_clipping.load(Ordering::Relaxed)
    }

    /// Whether out-of-bounds reports are dropped entirely.
    #[must_use]
    pub fn area_limiting(&self) -> bool {
        self.area_limiting.load(Ordering::Relaxed)
    }

    /// Rebuild the snapshot from `fields` and publish it atomically.
    fn publish(&self, fields: &ConfigFields, cause: &'static str) {
        let snapshot = PipelineSnapshot::build(
            fields.input_area.as_ref(),
            fields.output_area.as_ref(),
            fields.digitizer.as_ref(),
            &fields.filters,
            fields.interpolator_active,
        );
        debug!(
            cause,
            ready = snapshot.is_ready(),
            pre_filters = snapshot.pre_filters().len(),
            post_filters = snapshot.post_filters().len(),
            "published pipeline snapshot"
        );
        *self.published.write() = Arc::new(snapshot);
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
