//! # sahayak-store
//!
//! Session-scoped state for the Sahayak health assistant.
//!
//! ## Overview
//!
//! - [`ReminderBook`]: the mutable reminder list (add / remove / toggle)
//! - [`FacilityDirectory`]: facility filtering and nearest-first sorting
//! - [`ArticleLibrary`]: article search
//! - [`InMemoryStore`]: the reference `KeyValueStore`
//!
//! Everything here lives for one process. A `ReminderBook` can be written to
//! any `KeyValueStore` with `save_to` and read back with `load_from`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sahayak_store::{InMemoryStore, ReminderBook};
//!
//! let mut book = ReminderBook::seeded(sahayak_catalog::seed_reminders());
//! let id = book.add(NewReminder::medicine("Cetirizine", "21:00", "Daily"))?.id;
//! book.toggle(id)?;
//! book.save_to(&InMemoryStore::new())?;
//! ```

pub mod directory;
pub mod library;
pub mod memory;
pub mod reminders;

pub use directory::{FacilityDirectory, NearbyFacility};
pub use library::ArticleLibrary;
pub use memory::InMemoryStore;
pub use reminders::{parse_time, ReminderBook, REMINDERS_KEY};

// ── Tests ─────────────────────────────────────────────────────────────────────
