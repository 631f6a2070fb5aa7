//! Reminders screen state: the reminder book plus the add form.

use tracing::info;

use sahayak_contracts::{
    error::SahayakResult,
    locale::Locale,
    reminder::{NewReminder, Reminder, ReminderId},
};
use sahayak_store::ReminderBook;

use crate::strings::t;

pub struct RemindersScreen {
    book: ReminderBook,
    form_open: bool,
}

impl RemindersScreen {
    pub fn new(book: ReminderBook) -> Self {
        Self { book, form_open: false }
    }

    pub fn book(&self) -> &ReminderBook {
        &self.book
    }

    pub fn list(&self) -> &[Reminder] {
        self.book.list()
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn cancel_form(&mut self) {
        self.form_open = false;
    }

    /// Add a reminder and close the form. On error the form stays open.
    pub fn save(&mut self, input: NewReminder) -> SahayakResult<ReminderId> {
        let id = self.book.add(input)?.id;
        self.form_open = false;
        info!(reminder = %id, total = self.book.len(), "reminder saved");
        Ok(id)
    }

    pub fn delete(&mut self, id: ReminderId) -> SahayakResult<Reminder> {
        self.book.remove(id)
    }

    pub fn toggle(&mut self, id: ReminderId) -> SahayakResult<bool> {
        self.book.toggle(id)
    }

    /// One display line per reminder, e.g.
    /// "[on] 08:00  Paracetamol 500mg · Every 8 hours (Medicine)".
    pub fn lines(&self, locale: Locale) -> Vec<String> {
        self.book
            .list()
            .iter()
            .map(|r| {
                let status = if r.enabled {
                    t(locale, "reminders.enabled")
                } else {
                    t(locale, "reminders.disabled")
                };
                format!(
                    "[{}] {}  {} · {} ({})",
                    status,
                    r.time.format("%H:%M"),
                    r.name.get(locale),
                    r.frequency.get(locale),
                    r.kind.label(locale)
                )
            })
            .collect()
    }
}
