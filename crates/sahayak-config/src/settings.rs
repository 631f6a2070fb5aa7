//! Configuration schema.
//!
//! An `AppConfig` is deserialized from TOML. Every section and every key is
//! optional; anything left out takes the default shown below.
//!
//! ```toml
//! [analysis]
//! latency_ms = 2000
//! coverage_weight = 0.7
//! precision_weight = 0.3
//! min_probability = 1
//!
//! [recognition]
//! latency_ms = 2500
//!
//! [location]
//! default_latitude = 27.7172
//! default_longitude = 85.3240
//!
//! [ui]
//! default_locale = "en"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use sahayak_contracts::{facility::Coordinates, locale::Locale};
use sahayak_core::ScoringWeights;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub recognition: RecognitionSettings,
    pub location: LocationSettings,
    pub ui: UiSettings,
}

/// Symptom analysis tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Simulated inference latency in milliseconds.
    pub latency_ms: u64,
    pub coverage_weight: f64,
    pub precision_weight: f64,
    /// Conditions scoring below this probability are not shown.
    pub min_probability: u8,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            latency_ms: 2000,
            coverage_weight: weights.coverage,
            precision_weight: weights.precision,
            min_probability: weights.min_probability,
        }
    }
}

impl AnalysisSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            coverage: self.coverage_weight,
            precision: self.precision_weight,
            min_probability: self.min_probability,
        }
    }
}

/// Medicine recognition tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Simulated recognition latency in milliseconds.
    pub latency_ms: u64,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self { latency_ms: 2500 }
    }
}

impl RecognitionSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Fallback map centre used when device location is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            default_latitude: Coordinates::KATHMANDU.latitude,
            default_longitude: Coordinates::KATHMANDU.longitude,
        }
    }
}

impl LocationSettings {
    pub fn default_coordinates(&self) -> Coordinates {
        Coordinates::new(self.default_latitude, self.default_longitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Language preselected on the login screen.
    pub default_locale: Locale,
}
