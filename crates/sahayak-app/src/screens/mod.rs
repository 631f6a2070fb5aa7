//! Per-tab screen state.
//!
//! Screens hold their own inputs and last results and render text in a given
//! locale. They never read the session; the `App` passes the active locale in.

pub mod emergency;
pub mod health_info;
pub mod health_services;
pub mod medicine_identifier;
pub mod reminders;
pub mod symptom_checker;

pub use emergency::EmergencyScreen;
pub use health_info::HealthInfoScreen;
pub use health_services::{HealthServicesScreen, MapCentre};
pub use medicine_identifier::{MedicineIdentifierScreen, RecognitionState};
pub use reminders::RemindersScreen;
pub use symptom_checker::{AnalysisState, ResultCard, SymptomCheckerScreen};
