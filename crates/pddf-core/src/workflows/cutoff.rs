use crate::core::io::traits::{FrameSource, validate_policy};
use crate::core::models::distance_set::DistanceSet;
use crate::core::models::policy::PairSelectionPolicy;
use crate::core::pddf::cutoff::{CutoffError, CutoffEstimator};
use crate::core::pddf::distances::frame_pair_distances;
use crate::core::pddf::histogram::HistogramError;
use crate::engine::cache::DistanceCache;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct CutoffReport {
    pub frame_index: usize,
    pub policy: PairSelectionPolicy,
    /// Upper bound of the histogram actually used.
    pub r_max: f64,
    /// Estimated first-shell cutoff radius.
    pub cutoff: f64,
    pub distances: DistanceSet,
}

/// Estimates the nearest-neighbour cutoff radius of one frame.
///
/// The policy label is checked against the species of the whole trajectory before the
/// frame is read. Distance sets are taken from `cache` when present and stored there
/// otherwise. When `config.r_max` is unset, the largest selected distance is used.
#[instrument(skip_all, name = "cutoff_workflow", fields(frame_index = frame_index, policy = %policy))]
pub fn run<S: FrameSource + ?Sized>(
    source: &S,
    frame_index: usize,
    policy: &PairSelectionPolicy,
    config: &AnalysisConfig,
    cache: &mut DistanceCache,
) -> Result<CutoffReport, EngineError> {
    let distance_error = |source| EngineError::Distance {
        frame_index,
        policy: policy.clone(),
        source,
    };

    validate_policy(source, policy).map_err(distance_error)?;

    let distances = cache
        .get_or_try_insert_with(frame_index, policy, || {
            let frame = source
                .read_frame(frame_index)
                .map_err(|e| EngineError::FrameRead {
                    frame_index,
                    source: Box::new(e),
                })?;
            debug!(atoms = frame.len(), "Frame loaded.");
            frame_pair_distances(&frame, policy).map_err(distance_error)
        })?
        .clone();

    let params = config.cutoff;
    let r_max = config.r_max.or_else(|| distances.max()).unwrap_or(0.0);
    let cutoff_error = |source| EngineError::Cutoff {
        frame_index,
        policy: policy.clone(),
        r_max,
        bin_width: params.bin_width,
        window: params.window,
        source,
    };

    if distances.is_empty() && config.r_max.is_none() {
        return Err(cutoff_error(CutoffError::Histogram(
            HistogramError::InvalidRange {
                r_max,
                bin_width: params.bin_width,
            },
        )));
    }

    let estimator = CutoffEstimator::new(params).map_err(cutoff_error)?;
    let cutoff = estimator
        .estimate(distances.as_slice(), r_max)
        .map_err(cutoff_error)?;

    info!(
        n_distances = distances.len(),
        r_max, cutoff, "Cutoff radius estimated."
    );

    Ok(CutoffReport {
        frame_index,
        policy: policy.clone(),
        r_max,
        cutoff,
        distances,
    })
}
