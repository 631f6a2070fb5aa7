//! Conditions, referral specialists, and match results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    locale::{to_nepali_digits, Locale, Localized},
    symptom::SymptomId,
};

/// Upper bound on the number of conditions one analysis returns.
pub const MAX_RESULTS: usize = 3;

/// A doctor a condition refers the user to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub name: Localized<String>,
    pub specialty: Localized<String>,
    /// Hospital or clinic the specialist practises at.
    pub facility: Localized<String>,
    pub years_experience: u8,
    /// Contact number in ASCII digits, e.g. "+977-1-5159266".
    pub phone: String,
    /// Patient rating from 0.0 to 5.0.
    pub rating: f32,
}

impl Specialist {
    /// "15 years" / "१५ वर्ष".
    pub fn experience_label(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!("{} years", self.years_experience),
            Locale::Ne => format!("{} वर्ष", to_nepali_digits(&self.years_experience.to_string())),
        }
    }
}

/// One symptom in a condition's pattern, with its diagnostic weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub symptom: SymptomId,
    /// Relative weight; larger means more characteristic of the condition.
    pub weight: u8,
}

impl PatternEntry {
    pub fn new(symptom: &str, weight: u8) -> Self {
        Self {
            symptom: SymptomId::new(symptom),
            weight,
        }
    }
}

/// A candidate diagnosis. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Stable machine key, e.g. "common-cold".
    pub key: String,
    pub name: Localized<String>,
    /// Prior likelihood weight in 0..=100, before symptom overlap is applied.
    pub base_probability: u8,
    pub description: Localized<String>,
    /// Ordered self-care and referral advice.
    pub recommendations: Localized<Vec<String>>,
    pub specialists: Vec<Specialist>,
    /// Symptoms characteristic of this condition.
    pub pattern: Vec<PatternEntry>,
}

/// A condition paired with the probability the matcher assigned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCondition {
    pub condition: Condition,
    /// Effective probability in 0..=100.
    pub probability: u8,
}

/// The output of one analysis: ranked, capped, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// The selection that produced this report.
    pub selection: Vec<SymptomId>,
    /// At most `MAX_RESULTS` entries, highest probability first.
    pub results: Vec<RankedCondition>,
    pub generated_at: DateTime<Utc>,
}

impl MatchReport {
    /// Condition keys in rank order.
    pub fn condition_keys(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.condition.key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
