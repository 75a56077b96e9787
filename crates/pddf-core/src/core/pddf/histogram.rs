use thiserror::Error;
use tracing::debug;

/// Tolerance, in units of bins, applied when counting how many bins fit below `r_max`.
const BIN_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest number of bins a histogram may hold.
pub const MAX_BINS: usize = 10_000_000;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum HistogramError {
    #[error(
        "Invalid histogram range: r_max = {r_max} (must be finite and span between one and {max_bins} bins of width {bin_width})",
        max_bins = MAX_BINS
    )]
    InvalidRange { r_max: f64, bin_width: f64 },

    #[error("Invalid bin width: {0} (must be finite and positive)")]
    InvalidBinWidth(f64),
}

/// One histogram bin: its midpoint and the fraction of counted distances it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub density: f64,
}

/// A normalized histogram of pair distances over `[0, n_bins * bin_width]`.
///
/// Edge `k` is always computed as `k * bin_width`. Bins are half-open `[edge_k, edge_k+1)`
/// except the last, which is closed on the right. Densities sum to one unless no distance
/// fell inside the range, in which case every density is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bin_width: f64,
    counts: Vec<usize>,
    bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins `distances` into `floor(r_max / bin_width)` bins of width `bin_width`.
    ///
    /// Non-finite, negative and out-of-range distances are not counted.
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError`] if `bin_width` is not a positive finite number, or if
    /// `r_max` is not finite or does not span between one and [`MAX_BINS`] bins.
    pub fn new(distances: &[f64], r_max: f64, bin_width: f64) -> Result<Self, HistogramError> {
        let n_bins = bin_count(r_max, bin_width)?;

        let mut counts = vec![0usize; n_bins];
        let mut skipped = 0usize;
        for &distance in distances {
            match bin_index(distance, bin_width, n_bins) {
                Some(k) => counts[k] += 1,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(
                skipped,
                upper_edge = edge(n_bins, bin_width),
                "Distances outside the histogram range were not counted."
            );
        }

        let total: usize = counts.iter().sum();
        let bins = counts
            .iter()
            .enumerate()
            .map(|(k, &count)| HistogramBin {
                center: edge(k, bin_width) + bin_width / 2.0,
                density: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            })
            .collect();

        Ok(Self {
            bin_width,
            counts,
            bins,
        })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Raw per-bin counts, before normalization.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn edge(&self, k: usize) -> f64 {
        edge(k, self.bin_width)
    }

    pub fn upper_edge(&self) -> f64 {
        edge(self.bins.len(), self.bin_width)
    }
}

/// Number of bins of width `bin_width` that fit in `[0, r_max]`.
///
/// # Errors
///
/// Same conditions as [`Histogram::new`]; checked before anything is allocated.
pub fn bin_count(r_max: f64, bin_width: f64) -> Result<usize, HistogramError> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Err(HistogramError::InvalidBinWidth(bin_width));
    }
    if !r_max.is_finite() || r_max <= 0.0 {
        return Err(HistogramError::InvalidRange { r_max, bin_width });
    }
    let quotient = (r_max / bin_width + BIN_COUNT_TOLERANCE).floor();
    if !quotient.is_finite() || quotient < 1.0 || quotient > MAX_BINS as f64 {
        return Err(HistogramError::InvalidRange { r_max, bin_width });
    }
    Ok(quotient as usize)
}

#[inline]
fn edge(k: usize, bin_width: f64) -> f64 {
    k as f64 * bin_width
}

fn bin_index(distance: f64, bin_width: f64, n_bins: usize) -> Option<usize> {
    if !distance.is_finite() || distance < 0.0 {
        return None;
    }
    let upper = edge(n_bins, bin_width);
    if distance > upper {
        return None;
    }
    if distance == upper {
        return Some(n_bins - 1);
    }

    // The quotient can land one bin off the closed-form edges; settle against them.
    let mut k = ((distance / bin_width).floor() as usize).min(n_bins - 1);
    while k > 0 && distance < edge(k, bin_width) {
        k -= 1;
    }
    while k + 1 < n_bins && distance >= edge(k + 1, bin_width) {
        k += 1;
    }
    Some(k)
}
