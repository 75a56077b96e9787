use super::histogram::{Histogram, HistogramError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default histogram resolution: 100 bins per unit length.
pub const DEFAULT_BIN_WIDTH: f64 = 0.01;
/// Default comparison distance, in bins, for the local-minimum test.
pub const DEFAULT_WINDOW: usize = 10;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CutoffError {
    #[error(transparent)]
    Histogram(#[from] HistogramError),

    #[error("Invalid minimum search window: {0} (must be at least one bin)")]
    InvalidWindow(usize),

    #[error("No local minimum found in {n_bins} bins with a window of {window} bins")]
    NoMinimumFound { n_bins: usize, window: usize },
}

/// Binning and scan parameters of the cutoff estimator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CutoffParams {
    /// Histogram bin width, in the distance unit of the trajectory.
    pub bin_width: f64,
    /// A bin is a local minimum if its density is strictly lower than the bins
    /// `window` positions to either side.
    pub window: usize,
}

impl Default for CutoffParams {
    fn default() -> Self {
        Self {
            bin_width: DEFAULT_BIN_WIDTH,
            window: DEFAULT_WINDOW,
        }
    }
}

impl CutoffParams {
    pub fn validate(&self) -> Result<(), CutoffError> {
        if !self.bin_width.is_finite() || self.bin_width <= 0.0 {
            return Err(HistogramError::InvalidBinWidth(self.bin_width).into());
        }
        if self.window == 0 {
            return Err(CutoffError::InvalidWindow(self.window));
        }
        Ok(())
    }
}

/// Estimates the first coordination shell radius from a set of pair distances.
///
/// The distances are binned into a normalized histogram over `[0, r_max]` and the
/// centre of the first bin whose density is strictly below both of its neighbours
/// `window` bins away is returned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CutoffEstimator {
    params: CutoffParams,
}

impl CutoffEstimator {
    pub fn new(params: CutoffParams) -> Result<Self, CutoffError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CutoffParams {
        &self.params
    }

    pub fn histogram(&self, distances: &[f64], r_max: f64) -> Result<Histogram, CutoffError> {
        Ok(Histogram::new(distances, r_max, self.params.bin_width)?)
    }

    /// Returns the centre of the first local minimum of the normalized histogram.
    ///
    /// # Errors
    ///
    /// - [`CutoffError::Histogram`] if `r_max` is not a usable upper bound.
    /// - [`CutoffError::NoMinimumFound`] if the scan finds no qualifying bin, which
    ///   includes histograms too short to hold `window` bins on both sides of a bin.
    #[instrument(level = "debug", skip_all, fields(n_distances = distances.len(), r_max = r_max))]
    pub fn estimate(&self, distances: &[f64], r_max: f64) -> Result<f64, CutoffError> {
        let histogram = self.histogram(distances, r_max)?;
        let densities = histogram.densities();
        let window = self.params.window;

        let index = first_local_minimum(&densities, window).ok_or(
            CutoffError::NoMinimumFound {
                n_bins: densities.len(),
                window,
            },
        )?;
        let cutoff = histogram.bins()[index].center;
        debug!(bin = index, cutoff, "Located first minimum of the PDDF.");
        Ok(cutoff)
    }
}

/// Index of the first `i` in `window..len - window` with
/// `values[i] < values[i - window]` and `values[i] < values[i + window]`.
pub fn first_local_minimum(values: &[f64], window: usize) -> Option<usize> {
    if window == 0 || values.len() <= 2 * window {
        return None;
    }
    (window..values.len() - window)
        .find(|&i| values[i] < values[i - window] && values[i] < values[i + window])
}
