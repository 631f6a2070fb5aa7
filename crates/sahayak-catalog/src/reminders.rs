//! Sample reminders a new session starts with.

use chrono::NaiveTime;

use sahayak_contracts::{
    locale::Localized,
    reminder::{Reminder, ReminderId, ReminderKind},
};

pub fn seed_reminders() -> Vec<Reminder> {
    [
        (
            ReminderKind::Medicine,
            ("Paracetamol 500mg", "प्यारासिटामोल ५०० मिलीग्राम"),
            (8, 0),
            ("Every 8 hours", "हरेक ८ घण्टा"),
            ("Take after meals", "खाना पछि लिनुहोस्"),
        ),
        (
            ReminderKind::Vaccination,
            ("COVID-19 Booster", "कोभिड-१९ बूस्टर"),
            (10, 0),
            ("Once", "एक पटक"),
            ("Scheduled for next month", "अर्को महिनाको लागि निर्धारित"),
        ),
        (
            ReminderKind::Medicine,
            ("Vitamin D3", "भिटामिन डी३"),
            (20, 0),
            ("Daily", "दैनिक"),
            ("Take with dinner", "बेलुकाको खानासँग लिनुहोस्"),
        ),
    ]
    .into_iter()
    .map(|(kind, name, (hour, minute), frequency, notes)| Reminder {
        id: ReminderId::new(),
        kind,
        name: Localized::text(name.0, name.1),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        frequency: Localized::text(frequency.0, frequency.1),
        notes: Localized::text(notes.0, notes.1),
        enabled: true,
    })
    .collect()
}
