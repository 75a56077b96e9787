use crate::core::pddf::cutoff::{CutoffError, CutoffParams};
use crate::core::pddf::histogram::bin_count;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid cutoff parameters: {0}")]
    InvalidCutoff(#[from] CutoffError),

    #[error("Invalid r_max: {0} (must be finite, positive and within the histogram bin limit)")]
    InvalidRMax(f64),
}

/// Settings for a cutoff analysis.
///
/// ```toml
/// r_max = 4.5
///
/// [cutoff]
/// bin_width = 0.01
/// window = 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Upper bound of the histogram. When absent the largest pair distance of the
    /// frame is used.
    pub r_max: Option<f64>,
    pub cutoff: CutoffParams,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cutoff.validate()?;
        if let Some(r_max) = self.r_max {
            bin_count(r_max, self.cutoff.bin_width)
                .map_err(|_| ConfigError::InvalidRMax(r_max))?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    r_max: Option<f64>,
    bin_width: Option<f64>,
    window: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r_max(mut self, r_max: f64) -> Self {
        self.r_max = Some(r_max);
        self
    }
    pub fn bin_width(mut self, width: f64) -> Self {
        self.bin_width = Some(width);
        self
    }
    pub fn window(mut self, bins: usize) -> Self {
        self.window = Some(bins);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let defaults = CutoffParams::default();
        let config = AnalysisConfig {
            r_max: self.r_max,
            cutoff: CutoffParams {
                bin_width: self.bin_width.unwrap_or(defaults.bin_width),
                window: self.window.unwrap_or(defaults.window),
            },
        };
        config.validate()?;
        Ok(config)
    }
}
