//! Loading and validating `AppConfig`.
//!
//! Construct via `AppConfig::from_toml_str` or `AppConfig::from_file`. Both
//! run `validate` before returning, so a loaded config is always usable.

use std::path::Path;

use tracing::{debug, warn};

use sahayak_contracts::error::{SahayakError, SahayakResult};

use crate::settings::AppConfig;

impl AppConfig {
    /// Parse `s` as TOML, then validate.
    ///
    /// Returns `SahayakError::ConfigError` if the TOML is malformed, does not
    /// match the `AppConfig` schema, or holds out-of-range values.
    pub fn from_toml_str(s: &str) -> SahayakResult<Self> {
        let config: AppConfig = toml::from_str(s).map_err(|e| SahayakError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Read the file at `path` and parse it.
    pub fn from_file(path: &Path) -> SahayakResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SahayakError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check ranges the type system cannot express.
    ///
    /// - scoring weights are finite, non-negative, and not both zero
    /// - `min_probability` is at most 100
    /// - fallback latitude in [-90, 90], longitude in [-180, 180]
    pub fn validate(&self) -> SahayakResult<()> {
        let a = &self.analysis;
        let weights_ok = a.coverage_weight.is_finite()
            && a.precision_weight.is_finite()
            && a.coverage_weight >= 0.0
            && a.precision_weight >= 0.0
            && a.coverage_weight + a.precision_weight > 0.0;
        if !weights_ok {
            return Err(invalid(format!(
                "analysis weights must be non-negative and not both zero (coverage {}, precision {})",
                a.coverage_weight, a.precision_weight
            )));
        }

        if a.min_probability > 100 {
            return Err(invalid(format!(
                "analysis.min_probability must be at most 100, got {}",
                a.min_probability
            )));
        }

        let loc = &self.location;
        if !(-90.0..=90.0).contains(&loc.default_latitude) {
            return Err(invalid(format!(
                "location.default_latitude {} is outside [-90, 90]",
                loc.default_latitude
            )));
        }
        if !(-180.0..=180.0).contains(&loc.default_longitude) {
            return Err(invalid(format!(
                "location.default_longitude {} is outside [-180, 180]",
                loc.default_longitude
            )));
        }

        if self.analysis.latency_ms == 0 || self.recognition.latency_ms == 0 {
            warn!("simulated latency is zero; results will appear instantly");
        }

        Ok(())
    }
}

fn invalid(reason: String) -> SahayakError {
    warn!(%reason, "rejecting configuration");
    SahayakError::ConfigError { reason }
}
