//! The session's reminder list.
//!
//! `ReminderBook` owns every reminder for one signed-in session. Reminders
//! are kept in insertion order. Ids are unique; every mutating operation that
//! names an id fails with `NotFound` when the id is unknown and leaves the
//! book unchanged.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    locale::Localized,
    reminder::{NewReminder, Reminder, ReminderId},
};
use sahayak_core::traits::KeyValueStore;

/// Key under which `save_to` writes the serialized book.
pub const REMINDERS_KEY: &str = "sahayak.reminders";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderBook {
    reminders: Vec<Reminder>,
}

impl ReminderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A book pre-populated with `seed`, e.g. the sample reminders shown on
    /// first sign-in.
    pub fn seeded(seed: Vec<Reminder>) -> Self {
        Self { reminders: seed }
    }

    pub fn list(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn get(&self, id: ReminderId) -> SahayakResult<&Reminder> {
        self.reminders
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Validate `input` and append a new, enabled reminder.
    ///
    /// Name, time, and frequency are required. Time must be `HH:MM` on a
    /// 24-hour clock.
    pub fn add(&mut self, input: NewReminder) -> SahayakResult<&Reminder> {
        let name = input.name.trim();
        let frequency = input.frequency.trim();
        if name.is_empty() || frequency.is_empty() || input.time.trim().is_empty() {
            warn!("reminder rejected: missing required field");
            return Err(SahayakError::InvalidInput {
                reason: "name, time and frequency are required".to_string(),
            });
        }
        let time = parse_time(&input.time)?;

        let reminder = Reminder {
            id: ReminderId::new(),
            kind: input.kind,
            name: Localized::with_fallback(name, input.name_ne),
            time,
            frequency: Localized::with_fallback(frequency, input.frequency_ne),
            notes: Localized::with_fallback(input.notes.trim(), input.notes_ne),
            enabled: true,
        };
        info!(id = %reminder.id, name = %reminder.name.en, time = %reminder.time, "reminder added");
        self.reminders.push(reminder);

        let added = self.reminders.len() - 1;
        Ok(&self.reminders[added])
    }

    /// Delete exactly the reminder with `id`.
    pub fn remove(&mut self, id: ReminderId) -> SahayakResult<Reminder> {
        let index = self
            .reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.reminders.remove(index);
        info!(id = %id, name = %removed.name.en, "reminder removed");
        Ok(removed)
    }

    /// Flip the enabled flag and return its new value.
    pub fn toggle(&mut self, id: ReminderId) -> SahayakResult<bool> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        reminder.enabled = !reminder.enabled;
        debug!(id = %id, enabled = reminder.enabled, "reminder toggled");
        Ok(reminder.enabled)
    }

    /// Serialize the book into `store` under [`REMINDERS_KEY`].
    pub fn save_to(&self, store: &dyn KeyValueStore) -> SahayakResult<()> {
        let json = serde_json::to_string(self).map_err(|e| SahayakError::StorageFailure {
            reason: format!("failed to serialize reminders: {}", e),
        })?;
        store.put(REMINDERS_KEY, json)
    }

    /// Load a book previously written by `save_to`. Returns `None` when the
    /// store holds no reminders.
    pub fn load_from(store: &dyn KeyValueStore) -> SahayakResult<Option<Self>> {
        let Some(json) = store.get(REMINDERS_KEY)? else {
            return Ok(None);
        };
        let book = serde_json::from_str(&json).map_err(|e| SahayakError::StorageFailure {
            reason: format!("stored reminders are corrupt: {}", e),
        })?;
        Ok(Some(book))
    }
}

/// Parse `HH:MM` (24-hour).
pub fn parse_time(s: &str) -> SahayakResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| SahayakError::InvalidInput {
        reason: format!("time '{}' is not a valid HH:MM value", s.trim()),
    })
}

fn not_found(id: ReminderId) -> SahayakError {
    SahayakError::NotFound {
        kind: "reminder".to_string(),
        id: id.to_string(),
    }
}
