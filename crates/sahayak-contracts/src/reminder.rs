//! Medicine and vaccination reminders.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Localized};

/// Unique identifier for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(pub uuid::Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Medicine,
    Vaccination,
}

impl ReminderKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ReminderKind::Medicine, Locale::En) => "Medicine",
            (ReminderKind::Medicine, Locale::Ne) => "औषधि",
            (ReminderKind::Vaccination, Locale::En) => "Vaccination",
            (ReminderKind::Vaccination, Locale::Ne) => "खोप",
        }
    }
}

/// A scheduled reminder held for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub kind: ReminderKind,
    pub name: Localized<String>,
    /// Time of day the reminder fires.
    pub time: NaiveTime,
    /// Free-text schedule, e.g. "Every 8 hours".
    pub frequency: Localized<String>,
    pub notes: Localized<String>,
    pub enabled: bool,
}

/// Form input for a new reminder.
///
/// Nepali fields are optional; a blank Nepali field falls back to the English
/// text when the reminder is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub kind: ReminderKind,
    pub name: String,
    pub name_ne: Option<String>,
    /// "HH:MM", 24-hour clock.
    pub time: String,
    pub frequency: String,
    pub frequency_ne: Option<String>,
    pub notes: String,
    pub notes_ne: Option<String>,
}

impl NewReminder {
    /// A medicine reminder with only the required fields filled in.
    pub fn medicine(name: &str, time: &str, frequency: &str) -> Self {
        Self {
            kind: ReminderKind::Medicine,
            name: name.to_string(),
            name_ne: None,
            time: time.to_string(),
            frequency: frequency.to_string(),
            frequency_ne: None,
            notes: String::new(),
            notes_ne: None,
        }
    }
}
