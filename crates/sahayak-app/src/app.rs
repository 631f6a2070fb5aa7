//! The application controller.
//!
//! `App` owns the shared pipelines, the device collaborators, and the
//! `AppState` of the signed-in session. Every dashboard operation goes
//! through `state()` / `state_mut()`, which fail with `NotSignedIn` while the
//! login screen is showing.

use std::sync::Arc;

use tracing::{info, warn};

use sahayak_catalog::HintRecognizer;
use sahayak_config::AppConfig;
use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    locale::Locale,
};
use sahayak_core::{
    traits::{Dialer, KeyValueStore, LocationProvider},
    AnalysisPipeline, OverlapMatcher, RecognitionPipeline,
};
use sahayak_store::{ArticleLibrary, FacilityDirectory, InMemoryStore, ReminderBook};
use sahayak_verify::{standard_schema, SchemaReportVerifier};

use crate::{
    screens::{
        EmergencyScreen, HealthInfoScreen, HealthServicesScreen, MedicineIdentifierScreen, RemindersScreen,
        SymptomCheckerScreen,
    },
    session::{sign_in, Credentials, User},
    state::Tab,
};

/// Everything that exists only while a user is signed in.
pub struct AppState {
    pub user: User,
    pub locale: Locale,
    pub tab: Tab,
    pub symptoms: SymptomCheckerScreen,
    pub medicine: MedicineIdentifierScreen,
    pub services: HealthServicesScreen,
    pub reminders: RemindersScreen,
    pub info: HealthInfoScreen,
    pub emergency: EmergencyScreen,
}

pub struct App {
    config: AppConfig,
    analysis: Arc<AnalysisPipeline>,
    recognition: Arc<RecognitionPipeline>,
    location: Box<dyn LocationProvider>,
    dialer: Box<dyn Dialer>,
    store: Box<dyn KeyValueStore>,
    login_locale: Locale,
    state: Option<AppState>,
}

impl App {
    /// Wire the catalog, the local matcher and recognizer, and the given
    /// device collaborators.
    ///
    /// Reminders are snapshotted to an `InMemoryStore` on logout; use
    /// `with_store` to supply another.
    pub fn new(
        config: AppConfig,
        location: Box<dyn LocationProvider>,
        dialer: Box<dyn Dialer>,
    ) -> SahayakResult<Self> {
        let symptoms = sahayak_catalog::symptoms();
        let matcher = OverlapMatcher::new(sahayak_catalog::conditions(), config.analysis.scoring_weights())?;
        let analysis = AnalysisPipeline::new(
            Box::new(matcher),
            Box::new(SchemaReportVerifier),
            standard_schema(),
            &symptoms,
            config.analysis.latency(),
        );
        let recognition = RecognitionPipeline::new(
            Box::new(HintRecognizer::new(sahayak_catalog::medicines())),
            config.recognition.latency(),
        );

        info!(
            symptoms = symptoms.len(),
            analysis_latency_ms = config.analysis.latency_ms,
            recognition_latency_ms = config.recognition.latency_ms,
            "sahayak initialized"
        );

        Ok(Self {
            login_locale: config.ui.default_locale,
            config,
            analysis: Arc::new(analysis),
            recognition: Arc::new(recognition),
            location,
            dialer,
            store: Box::new(InMemoryStore::new()),
            state: None,
        })
    }

    pub fn with_store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = store;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dialer(&self) -> &dyn Dialer {
        self.dialer.as_ref()
    }

    // ── Session ──────────────────────────────────────────────────────────────

    pub fn is_signed_in(&self) -> bool {
        self.state.is_some()
    }

    /// Sign in (or sign up) and open the dashboard on the symptom checker.
    ///
    /// Reminders saved by an earlier logout in this process are restored;
    /// otherwise the seed reminders are used. Signing in over a live session
    /// logs it out first, so its reminders and language carry over.
    pub fn login(&mut self, credentials: &Credentials) -> SahayakResult<&User> {
        let user = sign_in(credentials, self.locale())?;
        if self.state.is_some() {
            self.logout()?;
        }

        let book = match ReminderBook::load_from(self.store.as_ref()) {
            Ok(Some(book)) => book,
            Ok(None) => ReminderBook::seeded(sahayak_catalog::seed_reminders()),
            Err(e) => {
                warn!(error = %e, "saved reminders unreadable, starting from seed");
                ReminderBook::seeded(sahayak_catalog::seed_reminders())
            }
        };

        let mut services = HealthServicesScreen::new(
            FacilityDirectory::new(sahayak_catalog::facilities()),
            self.config.location.default_coordinates(),
        );
        services.locate(self.location.as_ref());

        let state = AppState {
            locale: user.locale,
            user,
            tab: Tab::default(),
            symptoms: SymptomCheckerScreen::new(sahayak_catalog::symptoms(), Arc::clone(&self.analysis)),
            medicine: MedicineIdentifierScreen::new(Arc::clone(&self.recognition)),
            services,
            reminders: RemindersScreen::new(book),
            info: HealthInfoScreen::new(ArticleLibrary::new(sahayak_catalog::articles())),
            emergency: EmergencyScreen::new(
                sahayak_catalog::emergency_lines(),
                sahayak_catalog::emergency_instructions(),
                sahayak_catalog::emergency_hospitals(),
            ),
        };
        Ok(&self.state.insert(state).user)
    }

    /// End the session. In-flight requests are superseded and the reminder
    /// list is written to the store. The login screen keeps the session's
    /// language.
    pub fn logout(&mut self) -> SahayakResult<()> {
        let state = self.state.take().ok_or(SahayakError::NotSignedIn)?;
        self.analysis.cancel();
        self.recognition.cancel();
        self.login_locale = state.locale;
        state.reminders.book().save_to(self.store.as_ref())?;
        info!(user = %state.user.name, "user signed out");
        Ok(())
    }

    pub fn state(&self) -> SahayakResult<&AppState> {
        self.state.as_ref().ok_or(SahayakError::NotSignedIn)
    }

    pub fn state_mut(&mut self) -> SahayakResult<&mut AppState> {
        self.state.as_mut().ok_or(SahayakError::NotSignedIn)
    }

    // ── Navigation & language ────────────────────────────────────────────────

    /// The language in effect: the session's when signed in, the login
    /// screen's otherwise.
    pub fn locale(&self) -> Locale {
        self.state.as_ref().map_or(self.login_locale, |s| s.locale)
    }

    /// Switch en ↔ ne and return the new language.
    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.locale().toggle();
        match self.state.as_mut() {
            Some(state) => state.locale = next,
            None => self.login_locale = next,
        }
        info!(locale = %next, "language changed");
        next
    }

    pub fn tab(&self) -> SahayakResult<Tab> {
        self.state().map(|s| s.tab)
    }

    pub fn select_tab(&mut self, tab: Tab) -> SahayakResult<()> {
        self.state_mut()?.tab = tab;
        Ok(())
    }

    // ── Device actions ───────────────────────────────────────────────────────

    /// Re-query the device position for the health services map.
    pub fn relocate(&mut self) -> SahayakResult<()> {
        let state = self.state.as_mut().ok_or(SahayakError::NotSignedIn)?;
        state.services.locate(self.location.as_ref());
        Ok(())
    }

    /// Dial the emergency line with `key`; returns the `tel:` URI.
    pub fn call_line(&self, key: &str) -> SahayakResult<String> {
        self.state()?.emergency.call_line(key, self.dialer.as_ref())
    }

    pub fn call_hospital(&self, index: usize) -> SahayakResult<String> {
        self.state()?.emergency.call_hospital(index, self.dialer.as_ref())
    }

    /// Dial a free-form number, e.g. a facility or specialist phone.
    pub fn call(&self, number: &str) -> SahayakResult<String> {
        self.state()?;
        crate::screens::emergency::call(number, self.dialer.as_ref())
    }
}
