//! Pipeline stage declaration for position filters.

/// Where in the report pipeline a filter runs.
///
/// A filter declares exactly one stage. The set is fixed: the pipeline
/// has one transform step and one optional external interpolation step,
/// and filters hook in around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// Before the external interpolation stage (and therefore before the
    /// transform). When no interpolator is active these run together
    /// with [`Self::PreTranspose`] filters.
    PreInterpolate,
    /// Before the affine transform.
    PreTranspose,
    /// After the affine transform and clipping/limiting.
    PostTranspose,
}

impl FilterStage {
    /// Whether this stage runs before the affine transform.
    #[must_use]
    pub fn is_pre_transform(self) -> bool {
        !matches!(self, Self::PostTranspose)
    }
}
