use crate::core::models::policy::PairSelectionPolicy;
use crate::core::pddf::cutoff::CutoffError;
use crate::core::pddf::distances::DistanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read frame {frame_index}: {source}")]
    FrameRead {
        frame_index: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Pair distance calculation failed for frame {frame_index} (policy {policy}): {source}")]
    Distance {
        frame_index: usize,
        policy: PairSelectionPolicy,
        source: DistanceError,
    },

    #[error(
        "Cutoff estimation failed for frame {frame_index} (policy {policy}, r_max = {r_max}, bin width = {bin_width}, window = {window}): {source}"
    )]
    Cutoff {
        frame_index: usize,
        policy: PairSelectionPolicy,
        r_max: f64,
        bin_width: f64,
        window: usize,
        source: CutoffError,
    },
}

impl EngineError {
    /// Whether the failure is a cutoff scan that found no minimum, which callers may
    /// retry with a larger `r_max` or a different binning.
    pub fn is_no_minimum(&self) -> bool {
        matches!(
            self,
            Self::Cutoff {
                source: CutoffError::NoMinimumFound { .. },
                ..
            }
        )
    }
}
