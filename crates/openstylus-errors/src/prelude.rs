//! Prelude for the errors crate.

pub use crate::{PipelineError, Result};
