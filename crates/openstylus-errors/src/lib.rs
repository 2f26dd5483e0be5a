//! Centralized error types for OpenStylus
//!
//! The pointer pipeline reports most failures as absence of output
//! rather than as errors: out-of-range report identifiers are ignored,
//! and limiting-triggered drops are normal control flow. What remains
//! is the configuration-readiness condition, which callers must be able
//! to distinguish from a processed report because configuration may
//! legitimately lag device attachment.
//!
//! # Example
//!
//! ```
//! use openstylus_errors::prelude::*;
//!
//! fn check_ready(has_digitizer: bool) -> Result<()> {
//!     if !has_digitizer {
//!         return Err(PipelineError::NotReady { missing: "digitizer" });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_ready(false).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

use thiserror::Error;

/// Errors surfaced by the pointer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A report was handled before the pipeline had a complete
    /// geometry configuration. Recoverable: retry once the named
    /// prerequisite has been set.
    #[error("pipeline not ready: {missing} not configured")]
    NotReady {
        /// The prerequisite that is still unset.
        missing: &'static str,
    },
}

impl PipelineError {
    /// Whether the caller can retry after supplying configuration.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

/// A specialized `Result` type for OpenStylus pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
