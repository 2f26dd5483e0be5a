//! Digitizer surface calibration.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Raw-unit to physical-unit calibration of one digitizer surface.
///
/// A digitizer reports absolute positions as raw counts in
/// `[0, max_x] x [0, max_y]`; the physical sensing surface measures
/// `width_mm x height_mm`. Pressure is reported as raw counts in
/// `[0, max_pressure]`.
///
/// `active_report_id_range` selects which report identifiers carry
/// position/pressure data for this surface; reports outside the range
/// are ignored by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizerSpec {
    /// Physical width of the sensing surface, in millimeters.
    pub width_mm: f64,
    /// Physical height of the sensing surface, in millimeters.
    pub height_mm: f64,
    /// Maximum raw X coordinate the device reports.
    pub max_x: f64,
    /// Maximum raw Y coordinate the device reports.
    pub max_y: f64,
    /// Maximum raw pressure value the device reports.
    pub max_pressure: f64,
    /// Report identifiers that carry position data for this surface.
    pub active_report_id_range: Range<u32>,
}

impl DigitizerSpec {
    /// Check whether a report identifier carries data for this surface.
    #[must_use]
    pub fn accepts_report_id(&self, report_id: u32) -> bool {
        self.active_report_id_range.contains(&report_id)
    }

    /// Raw pressure normalized to `[0, 1]`.
    ///
    /// No validation is performed: a zero `max_pressure` yields a
    /// non-finite result, which downstream consumers must tolerate.
    #[must_use]
    pub fn normalize_pressure(&self, raw: f64) -> f32 {
        (raw / self.max_pressure) as f32
    }
}
