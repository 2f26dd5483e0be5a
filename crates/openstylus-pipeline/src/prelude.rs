//! Prelude for the pipeline crate.
//!
//! This module provides convenient re-exports of commonly used types.
//!
//! # Example
//!
//! ```
//! use openstylus_pipeline::prelude::*;
//!
//! let config = PipelineConfig::new();
//! assert!(!config.snapshot().is_ready());
//! ```

pub use crate::DeviceReport;
pub use crate::config::PipelineConfig;
pub use crate::handler::{ReportHandler, ReportOutcome};
pub use crate::sink::{PointerSink, PressureSink};
pub use crate::snapshot::PipelineSnapshot;
pub use crate::transpose::transpose;
