//! # sahayak-config
//!
//! TOML configuration for the Sahayak health assistant.
//!
//! ## Overview
//!
//! [`AppConfig`] holds the analysis weights, simulated latencies, the fallback
//! map centre, and the default UI language. Every key is optional; missing
//! keys take the built-in defaults. Loading always validates.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use sahayak_config::AppConfig;
//!
//! let config = AppConfig::from_file(Path::new("config/sahayak.toml"))?;
//! let matcher = OverlapMatcher::new(conditions, config.analysis.scoring_weights())?;
//! ```
//!
//! Binaries that ship without a config file can use [`AppConfig::embedded`],
//! which parses the copy of `config/sahayak.toml` compiled into the crate.

pub mod loader;
pub mod settings;

pub use settings::{AnalysisSettings, AppConfig, LocationSettings, RecognitionSettings, UiSettings};

use sahayak_contracts::error::SahayakResult;

/// The checked-in default configuration.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../config/sahayak.toml");

impl AppConfig {
    /// Parse [`EMBEDDED_CONFIG`].
    pub fn embedded() -> SahayakResult<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sahayak_contracts::{error::SahayakError, facility::Coordinates, locale::Locale};

    use crate::AppConfig;

    fn assert_config_error(toml: &str, needle: &str) {
        match AppConfig::from_toml_str(toml) {
            Err(SahayakError::ConfigError { reason }) => {
                assert!(reason.contains(needle), "reason {reason:?} should mention {needle:?}")
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    // ── 1. defaults ───────────────────────────────────────────────────────────

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analysis.latency(), Duration::from_millis(2000));
        assert_eq!(config.recognition.latency(), Duration::from_millis(2500));
        assert_eq!(config.location.default_coordinates(), Coordinates::KATHMANDU);
        assert_eq!(config.ui.default_locale, Locale::En);
    }

    #[test]
    fn embedded_file_matches_defaults() {
        assert_eq!(AppConfig::embedded().unwrap(), AppConfig::default());
    }

    // ── 2. partial overrides ──────────────────────────────────────────────────

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [analysis]
            latency_ms = 10
            min_probability = 20

            [ui]
            default_locale = "ne"
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.latency(), Duration::from_millis(10));
        let weights = config.analysis.scoring_weights();
        assert_eq!(weights.coverage, 0.7);
        assert_eq!(weights.precision, 0.3);
        assert_eq!(weights.min_probability, 20);
        assert_eq!(config.ui.default_locale, Locale::Ne);
        assert_eq!(config.recognition.latency_ms, 2500);
    }

    // ── 3. validation ─────────────────────────────────────────────────────────

    #[test]
    fn zero_weights_are_rejected() {
        assert_config_error(
            "[analysis]\ncoverage_weight = 0.0\nprecision_weight = 0.0\n",
            "weights",
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert_config_error("[analysis]\ncoverage_weight = -1.0\n", "weights");
    }

    #[test]
    fn min_probability_above_100_is_rejected() {
        assert_config_error("[analysis]\nmin_probability = 101\n", "min_probability");
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert_config_error("[location]\ndefault_latitude = 91.0\n", "default_latitude");
        assert_config_error("[location]\ndefault_longitude = -180.5\n", "default_longitude");
    }

    #[test]
    fn unknown_locale_is_a_parse_error() {
        assert_config_error("[ui]\ndefault_locale = \"fr\"\n", "parse");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert_config_error("[analysis\nlatency_ms = 1", "parse");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = AppConfig::from_file(std::path::Path::new("/nonexistent/sahayak.toml")).unwrap_err();
        assert!(matches!(err, SahayakError::ConfigError { .. }));
    }
}
