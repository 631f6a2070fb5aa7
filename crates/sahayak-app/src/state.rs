//! Dashboard navigation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use sahayak_contracts::{error::SahayakError, locale::Locale};

use crate::strings::t;

/// The six dashboard tabs, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    SymptomChecker,
    MedicineId,
    HealthServices,
    Reminders,
    HealthInfo,
    Emergency,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::SymptomChecker,
        Tab::MedicineId,
        Tab::HealthServices,
        Tab::Reminders,
        Tab::HealthInfo,
        Tab::Emergency,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::SymptomChecker => "symptom-checker",
            Tab::MedicineId => "medicine-id",
            Tab::HealthServices => "health-services",
            Tab::Reminders => "reminders",
            Tab::HealthInfo => "health-info",
            Tab::Emergency => "emergency",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let key = match self {
            Tab::SymptomChecker => "tab.symptom-checker",
            Tab::MedicineId => "tab.medicine-id",
            Tab::HealthServices => "tab.health-services",
            Tab::Reminders => "tab.reminders",
            Tab::HealthInfo => "tab.health-info",
            Tab::Emergency => "tab.emergency",
        };
        t(locale, key)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&tab| tab == self).unwrap_or(0)
    }

    /// The tab after this one, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = SahayakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == s.trim())
            .ok_or_else(|| SahayakError::InvalidInput {
                reason: format!("unknown tab '{}'", s.trim()),
            })
    }
}
