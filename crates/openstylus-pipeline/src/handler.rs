//! Per-report orchestration.

use std::sync::Arc;

use openstylus_errors::{PipelineError, Result};
use openstylus_geometry::Point;

use crate::DeviceReport;
use crate::config::PipelineConfig;
use crate::sink::PointerSink;
use crate::transpose::transpose;

/// What happened to one handled report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportOutcome {
    /// The report identifier is outside the digitizer's active range;
    /// the sink was not touched.
    OutOfRange,
    /// Area limiting dropped the position. Pressure, if the sink takes
    /// it, was already forwarded.
    Dropped,
    /// The position was forwarded to the sink.
    Forwarded(Point),
}

/// Drives one device session's reports through the pipeline and into
/// the pointer sink.
///
/// Each report is handled independently against the configuration
/// snapshot current at the time it arrives; there is no state machine
/// between reports. The handler runs on the report stream; the shared
/// [`PipelineConfig`] may be mutated concurrently from the settings
/// path.
#[derive(Debug)]
pub struct ReportHandler<S: PointerSink> {
    config: Arc<PipelineConfig>,
    sink: S,
}

impl<S: PointerSink> ReportHandler<S> {
    /// Create a handler over a shared configuration and a sink.
    pub fn new(config: Arc<PipelineConfig>, sink: S) -> Self {
        Self { config, sink }
    }

    /// The shared configuration this handler reads.
    #[must_use]
    pub fn config(&self) -> &Arc<PipelineConfig> {
        &self.config
    }

    /// Borrow the sink (primarily for inspection in tests).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Handle one decoded device report.
    ///
    /// - `Err(NotReady)` until input area, output area, and digitizer
    ///   have all been configured — recoverable, since configuration
    ///   may lag device attachment.
    /// - `Ok(OutOfRange)` for report identifiers outside the
    ///   digitizer's active range; expected, not an error.
    /// - Otherwise: pressure is normalized and forwarded first when the
    ///   sink exposes the capability (independent of what happens to
    ///   the position), then the position is transposed and forwarded
    ///   unless limiting drops it.
    pub fn handle(&mut self, report: &DeviceReport) -> Result<ReportOutcome> {
        let snapshot = self.config.snapshot();
        let digitizer = match (snapshot.missing_prerequisite(), snapshot.digitizer()) {
            (None, Some(digitizer)) => digitizer,
            (missing, _) => {
                return Err(PipelineError::NotReady {
                    missing: missing.unwrap_or("digitizer"),
                });
            }
        };

        if !digitizer.accepts_report_id(report.report_id) {
            return Ok(ReportOutcome::OutOfRange);
        }

        if let Some(pressure_sink) = self.sink.pressure() {
            pressure_sink.set_pressure(digitizer.normalize_pressure(report.pressure));
        }

        match transpose(
            report.position,
            &snapshot,
            self.config.area_clipping(),
            self.config.area_limiting(),
        ) {
            Some(position) => {
                self.sink.set_position(position);
                Ok(ReportOutcome::Forwarded(position))
            }
            None => Ok(ReportOutcome::Dropped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::PressureSink;
    use openstylus_geometry::{Area, DigitizerSpec};

    #[derive(Debug, Default)]
    struct Recorder {
        positions: Vec<Point>,
        pressures: Vec<f32>,
        with_pressure: bool,
    }

    impl PressureSink for Recorder {
        fn set_pressure(&mut self, pressure: f32) {
            self.pressures.push(pressure);
        }
    }

    impl PointerSink for Recorder {
        fn set_position(&mut self, position: Point) {
            self.positions.push(position);
        }
        fn pressure(&mut self) -> Option<&mut dyn PressureSink> {
            self.with_pressure.then_some(self as &mut dyn PressureSink)
        }
    }

    fn configured() -> Arc<PipelineConfig> {
        let config = Arc::new(PipelineConfig::new());
        config.set_digitizer(DigitizerSpec {
            width_mm: 100.0,
            height_mm: 100.0,
            max_x: 10000.0,
            max_y: 10000.0,
            max_pressure: 8192.0,
            active_report_id_range: 1..3,
        });
        config.set_input_area(Area::new(Point::new(50.0, 50.0), 100.0, 100.0, 0.0));
        config.set_output_area(Area::new(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0));
        config
    }

    fn report(report_id: u32, x: f64, y: f64, pressure: f64) -> DeviceReport {
        DeviceReport {
            report_id,
            position: Point::new(x, y),
            pressure,
        }
    }

    #[test]
    fn unconfigured_session_is_not_ready() {
        let mut handler = ReportHandler::new(Arc::new(PipelineConfig::new()), Recorder::default());
        let outcome = handler.handle(&report(1, 0.0, 0.0, 0.0));
        assert!(matches!(outcome, Err(PipelineError::NotReady { .. })));
        assert!(handler.sink_mut().positions.is_empty());
    }

    #[test]
    fn not_ready_names_the_first_missing_prerequisite() {
        let config = Arc::new(PipelineConfig::new());
        config.set_digitizer(DigitizerSpec {
            width_mm: 100.0,
            height_mm: 100.0,
            max_x: 10000.0,
            max_y: 10000.0,
            max_pressure: 8192.0,
            active_report_id_range: 1..3,
        });
        let mut handler = ReportHandler::new(config, Recorder::default());

        let outcome = handler.handle(&report(1, 0.0, 0.0, 0.0));
        assert_eq!(
            outcome,
            Err(PipelineError::NotReady { missing: "input area" })
        );

        handler.config().set_input_area(Area::new(Point::new(50.0, 50.0), 100.0, 100.0, 0.0));
        let outcome = handler.handle(&report(1, 0.0, 0.0, 0.0));
        assert_eq!(
            outcome,
            Err(PipelineError::NotReady { missing: "output area" })
        );
    }

    #[test]
    fn out_of_range_report_never_touches_the_sink() {
        let mut handler = ReportHandler::new(
            configured(),
            Recorder {
                with_pressure: true,
                ..Recorder::default()
            },
        );
        let outcome = handler.handle(&report(7, 5000.0, 5000.0, 4096.0));
        assert_eq!(outcome, Ok(ReportOutcome::OutOfRange));
        assert!(handler.sink_mut().positions.is_empty());
        assert!(handler.sink_mut().pressures.is_empty());
    }

    #[test]
    fn in_range_report_forwards_position() {
        let mut handler = ReportHandler::new(configured(), Recorder::default());
        let outcome = handler.handle(&report(1, 5000.0, 5000.0, 0.0));
        match outcome {
            Ok(ReportOutcome::Forwarded(p)) => {
                assert!((p.x - 960.0).abs() < 1e-6);
                assert!((p.y - 540.0).abs() < 1e-6);
            }
            other => panic!("expected forwarded position, got {other:?}"),
        }
        assert_eq!(handler.sink_mut().positions.len(), 1);
    }

    #[test]
    fn pressure_forwards_only_when_the_sink_takes_it() {
        let mut plain = ReportHandler::new(configured(), Recorder::default());
        let _ = plain.handle(&report(1, 5000.0, 5000.0, 4096.0));
        assert!(plain.sink_mut().pressures.is_empty());

        let mut with_pressure = ReportHandler::new(
            configured(),
            Recorder {
                with_pressure: true,
                ..Recorder::default()
            },
        );
        let _ = with_pressure.handle(&report(1, 5000.0, 5000.0, 4096.0));
        assert_eq!(with_pressure.sink_mut().pressures.len(), 1);
        let p = with_pressure.sink_mut().pressures[0];
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn limiting_drops_position_but_pressure_was_already_sent() {
        let config = configured();
        config.set_area_limiting(true);
        let mut handler = ReportHandler::new(
            config,
            Recorder {
                with_pressure: true,
                ..Recorder::default()
            },
        );

        // Raw position outside the input area: transposes out of bounds.
        let outcome = handler.handle(&report(1, -1000.0, 5000.0, 8192.0));
        assert_eq!(outcome, Ok(ReportOutcome::Dropped));
        assert!(handler.sink_mut().positions.is_empty());
        assert_eq!(handler.sink_mut().pressures.len(), 1);
    }

    #[test]
    fn reports_are_handled_independently() {
        let mut handler = ReportHandler::new(configured(), Recorder::default());
        let _ = handler.handle(&report(7, 0.0, 0.0, 0.0));
        let outcome = handler.handle(&report(2, 5000.0, 5000.0, 0.0));
        assert!(matches!(outcome, Ok(ReportOutcome::Forwarded(_))));
    }
}
