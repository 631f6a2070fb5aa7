//! # sahayak-app
//!
//! The application layer of the Sahayak health assistant: the login gate,
//! dashboard navigation, UI strings in English and Nepali, and the state
//! behind each of the six tabs. Front ends (the CLI and the terminal UI)
//! drive an [`App`] and render what its screens expose.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sahayak_app::{App, Credentials, LogDialer, NoLocation};
//!
//! let mut app = App::new(config, Box::new(NoLocation), Box::new(LogDialer::new()))?;
//! app.login(&Credentials::new("sita@example.com", "secret"))?;
//!
//! let state = app.state_mut()?;
//! state.symptoms.toggle("fever")?;
//! let report = state.symptoms.analyze().await?;
//! ```

pub mod app;
pub mod devices;
pub mod screens;
pub mod session;
pub mod state;
pub mod strings;

pub use app::{App, AppState};
pub use devices::{FixedLocation, LogDialer, NoLocation};
pub use session::{Credentials, User};
pub use state::Tab;
pub use strings::t;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sahayak_config::AppConfig;
    use sahayak_contracts::{
        error::SahayakError,
        facility::{Coordinates, FacilityKind},
        locale::Locale,
        medicine::ImagePayload,
        reminder::NewReminder,
    };

    use crate::{
        screens::{
            health_services::{directions_url, is_open_24h},
            symptom_checker::progress_bar,
            AnalysisState, MapCentre, RecognitionState,
        },
        App, Credentials, FixedLocation, LogDialer, NoLocation, Tab,
    };

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn app() -> App {
        App::new(AppConfig::default(), Box::new(NoLocation), Box::new(LogDialer::new())).unwrap()
    }

    fn signed_in() -> App {
        let mut app = app();
        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();
        app
    }

    // ── Session & navigation ─────────────────────────────────────────────────

    #[test]
    fn dashboard_is_unreachable_before_login() {
        let mut app = app();
        assert!(!app.is_signed_in());
        assert!(matches!(app.state(), Err(SahayakError::NotSignedIn)));
        assert!(matches!(app.select_tab(Tab::Reminders), Err(SahayakError::NotSignedIn)));
        assert!(matches!(app.call_line("ambulance"), Err(SahayakError::NotSignedIn)));
        assert!(matches!(app.logout(), Err(SahayakError::NotSignedIn)));
    }

    #[test]
    fn login_derives_name_from_email() {
        let mut app = app();
        let user = app.login(&Credentials::new("  sita@example.com ", "secret")).unwrap();
        assert_eq!(user.name, "sita");
        assert_eq!(user.email, "sita@example.com");
        assert_eq!(app.tab().unwrap(), Tab::SymptomChecker);
    }

    #[test]
    fn sign_up_keeps_the_given_name() {
        let mut app = app();
        let user = app
            .login(&Credentials::new("ram@example.com", "pw").with_name("Ram Bahadur"))
            .unwrap();
        assert_eq!(user.name, "Ram Bahadur");
    }

    #[test]
    fn blank_credentials_are_rejected() {
        let mut app = app();
        let err = app.login(&Credentials::new("   ", "secret")).unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        let err = app.login(&Credentials::new("sita@example.com", "")).unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        assert!(!app.is_signed_in());
    }

    #[test]
    fn language_chosen_at_login_carries_into_session_and_back() {
        let mut app = app();
        assert_eq!(app.locale(), Locale::En);
        assert_eq!(app.toggle_locale(), Locale::Ne);

        let user = app.login(&Credentials::new("sita@example.com", "secret")).unwrap();
        assert_eq!(user.locale, Locale::Ne);
        assert_eq!(app.locale(), Locale::Ne);

        assert_eq!(app.toggle_locale(), Locale::En);
        app.logout().unwrap();
        assert_eq!(app.locale(), Locale::En);
    }

    #[test]
    fn tabs_cycle_and_parse() {
        let mut app = signed_in();
        app.select_tab(Tab::Emergency).unwrap();
        assert_eq!(app.tab().unwrap(), Tab::Emergency);
        assert_eq!(Tab::Emergency.next(), Tab::SymptomChecker);
        assert_eq!(Tab::SymptomChecker.previous(), Tab::Emergency);
        assert_eq!("health-info".parse::<Tab>().unwrap(), Tab::HealthInfo);
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::Reminders.label(Locale::En), "Reminders");
    }

    #[test]
    fn reminders_survive_logout_within_the_process() {
        let mut app = signed_in();
        app.state_mut()
            .unwrap()
            .reminders
            .save(NewReminder::medicine("Cetirizine", "21:00", "Daily"))
            .unwrap();
        app.logout().unwrap();

        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();
        let reminders = app.state().unwrap().reminders.list();
        assert_eq!(reminders.len(), 4);
        assert!(reminders.iter().any(|r| r.name.en == "Cetirizine"));
    }

    #[tokio::test(start_paused = true)]
    async fn signing_in_again_keeps_the_live_session_reminders() {
        let mut app = signed_in();
        app.toggle_locale();
        app.state_mut()
            .unwrap()
            .reminders
            .save(NewReminder::medicine("Zinc", "07:30", "Daily"))
            .unwrap();

        let screen = &mut app.state_mut().unwrap().symptoms;
        screen.toggle("fever").unwrap();
        let pipeline = screen.pipeline();
        let selection = screen.selection().clone();
        let pending = tokio::spawn(async move { pipeline.analyze(&selection).await });
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        let user = app.login(&Credentials::new("ram@example.com", "pw")).unwrap();
        assert_eq!(user.locale, Locale::Ne);
        let reminders = app.state().unwrap().reminders.list();
        assert_eq!(reminders.len(), 4);
        assert!(reminders.iter().any(|r| r.name.en == "Zinc"));

        let outcome = pending.await.unwrap();
        assert!(matches!(outcome, Err(SahayakError::Superseded { .. })));
    }

    #[test]
    fn failed_login_leaves_the_live_session_alone() {
        let mut app = signed_in();
        assert!(app.login(&Credentials::new("", "pw")).is_err());
        assert_eq!(app.state().unwrap().user.name, "sita");
    }

    // ── Symptom checker ──────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn cold_symptoms_produce_ranked_cards() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        for id in ["fever", "cough", "sore-throat"] {
            assert!(screen.toggle(id).unwrap());
        }

        let report = screen.analyze().await.unwrap();
        assert!((1..=3).contains(&report.results.len()));
        assert!(report
            .results
            .windows(2)
            .all(|w| w[0].probability >= w[1].probability));
        assert_eq!(report.results[0].condition.key, "common-cold");

        let cards = screen.result_cards(Locale::En);
        assert_eq!(cards.len(), report.results.len());
        for card in &cards {
            assert!(card.probability <= 100);
            assert_eq!(card.progress_bar, progress_bar(card.probability, 20));
            assert_eq!(card.probability_label, format!("{}%", card.probability));
        }

        let nepali = screen.result_cards(Locale::Ne);
        assert_eq!(nepali[0].title, report.results[0].condition.name.ne);
        assert!(!nepali[0].probability_label.chars().any(|c| c.is_ascii_digit()));
    }

    #[tokio::test(start_paused = true)]
    async fn same_selection_gives_identical_results() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        screen.toggle("headache").unwrap();
        screen.toggle("nausea").unwrap();
        screen.toggle("blurred-vision").unwrap();

        let first = screen.analyze().await.unwrap();
        let second = screen.analyze().await.unwrap();
        assert_eq!(first.results, second.results);
        assert_eq!(first.results[0].condition.key, "migraine");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_selection_is_rejected_and_state_stays_idle() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        let err = screen.analyze().await.unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        assert!(matches!(screen.state(), AnalysisState::Idle));
    }

    #[test]
    fn unknown_symptom_cannot_be_selected() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        let err = screen.toggle("purple-spots").unwrap_err();
        assert!(matches!(err, SahayakError::UnknownSymptom { .. }));
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn superseded_outcome_leaves_screen_waiting() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        screen.toggle("fever").unwrap();
        screen.begin_analysis().unwrap();
        screen.apply_analysis(&Err(SahayakError::Superseded {
            operation: "analysis".to_string(),
        }));
        assert!(matches!(screen.state(), AnalysisState::Analyzing));
    }

    #[test]
    fn search_and_grouping_follow_catalog_order() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;

        let groups = screen.grouped();
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, screen.filtered().len());
        let mut categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        categories.dedup();
        assert_eq!(categories.len(), groups.len());

        screen.set_query("THROAT");
        assert!(screen.filtered().iter().any(|s| s.id.as_str() == "sore-throat"));
        screen.set_query("ज्वरो");
        assert_eq!(screen.filtered()[0].id.as_str(), "fever");
    }

    #[test]
    fn reset_clears_selection_and_query() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().symptoms;
        screen.toggle("fever").unwrap();
        screen.set_query("fev");
        screen.reset();
        assert!(screen.selection().is_empty());
        assert_eq!(screen.query(), "");
    }

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(0, 10), "░".repeat(10));
        assert_eq!(progress_bar(100, 10), "█".repeat(10));
        assert_eq!(progress_bar(50, 10).chars().filter(|c| *c == '█').count(), 5);
    }

    // ── Medicine identifier ──────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn photo_named_after_a_medicine_is_identified() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().medicine;
        let medicine = screen
            .identify(ImagePayload::new("paracetamol-strip.jpg", vec![0xFF, 0xD8]))
            .await
            .unwrap();
        assert_eq!(medicine.key, "paracetamol-500");
        assert_eq!(screen.image_name(), Some("paracetamol-strip.jpg"));

        let details = screen.details(Locale::Ne).unwrap();
        assert_eq!(details.len(), 6);
        assert_eq!(details[0].1[0], medicine.name.ne);
    }

    #[tokio::test(start_paused = true)]
    async fn unrecognized_photo_fails_visibly() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().medicine;
        let err = screen
            .identify(ImagePayload::new("IMG_0042.jpg", vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, SahayakError::RecognitionFailure { .. }));
        assert!(matches!(screen.state(), RecognitionState::Failed(_)));
        assert!(screen.details(Locale::En).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_photo_is_invalid_input() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().medicine;
        let err = screen.identify(ImagePayload::new("x.jpg", vec![])).await.unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        assert!(matches!(screen.state(), RecognitionState::Idle));
    }

    // ── Health services ──────────────────────────────────────────────────────

    #[test]
    fn denied_location_falls_back_to_default_area() {
        let app = signed_in();
        let services = &app.state().unwrap().services;
        assert_eq!(services.centre(), MapCentre::Fallback(Coordinates::KATHMANDU));
        assert_eq!(
            services.area_url(),
            "https://www.google.com/maps/place/Kathmandu,+Nepal/@27.7172,85.3240,13z"
        );
        assert_eq!(services.location_note(Locale::En), "Kathmandu Area");
    }

    #[test]
    fn configured_fallback_centres_the_map_link() {
        let mut config = AppConfig::default();
        config.location.default_latitude = 28.2096;
        config.location.default_longitude = 83.9856;
        let mut app = App::new(config, Box::new(NoLocation), Box::new(LogDialer::new())).unwrap();
        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();

        let services = &app.state().unwrap().services;
        assert_eq!(services.centre(), MapCentre::Fallback(Coordinates::new(28.2096, 83.9856)));
        assert_eq!(
            services.area_url(),
            "https://www.google.com/maps/search/health+facilities/@28.2096,83.9856,13z"
        );
        assert_eq!(services.location_note(Locale::En), "Default Area");
    }

    #[test]
    fn detected_location_centres_the_map() {
        let here = Coordinates::new(27.7, 85.3);
        let mut app = App::new(
            AppConfig::default(),
            Box::new(FixedLocation(here)),
            Box::new(LogDialer::new()),
        )
        .unwrap();
        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();
        let services = &app.state().unwrap().services;
        assert_eq!(services.centre(), MapCentre::Detected(here));
        assert!(services.area_url().contains("@27.7,85.3,13z"));
    }

    #[test]
    fn facilities_are_filtered_and_sorted_by_distance() {
        let mut app = signed_in();
        let services = &mut app.state_mut().unwrap().services;

        let all = services.visible();
        assert_eq!(all.len(), 6);
        assert!(all.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));

        services.set_kind(Some(FacilityKind::Pharmacy));
        assert!(services.visible().iter().all(|n| n.facility.kind == FacilityKind::Pharmacy));

        services.set_kind(None);
        services.set_query("lazimpat");
        let hits = services.visible();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].facility.id, "6");
        assert!(is_open_24h(hits[0].facility));
    }

    #[test]
    fn kind_filter_cycles_back_to_all() {
        let mut app = signed_in();
        let services = &mut app.state_mut().unwrap().services;
        let mut seen = Vec::new();
        for _ in 0..4 {
            services.cycle_kind();
            seen.push(services.kind());
        }
        assert_eq!(
            seen,
            vec![
                Some(FacilityKind::Hospital),
                Some(FacilityKind::Clinic),
                Some(FacilityKind::Pharmacy),
                None
            ]
        );
    }

    #[test]
    fn directions_point_at_the_facility() {
        let app = signed_in();
        let facility = app.state().unwrap().services.facility("1").unwrap();
        assert_eq!(
            directions_url(facility),
            "https://www.google.com/maps/dir/?api=1&destination=27.735,85.329"
        );
    }

    // ── Reminders ────────────────────────────────────────────────────────────

    #[test]
    fn reminder_toggle_twice_and_delete_one() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().reminders;
        let ids: Vec<_> = screen.list().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);

        let before = screen.list()[1].enabled;
        screen.toggle(ids[1]).unwrap();
        screen.toggle(ids[1]).unwrap();
        assert_eq!(screen.list()[1].enabled, before);

        screen.delete(ids[0]).unwrap();
        let left: Vec<_> = screen.list().iter().map(|r| r.id).collect();
        assert_eq!(left, vec![ids[1], ids[2]]);
    }

    #[test]
    fn failed_save_keeps_the_form_open() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().reminders;
        screen.open_form();
        let err = screen.save(NewReminder::medicine("Zinc", "25:00", "Daily")).unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        assert!(screen.form_open());

        screen.save(NewReminder::medicine("Zinc", "07:30", "Daily")).unwrap();
        assert!(!screen.form_open());
        assert!(screen.lines(Locale::En).iter().any(|l| l.contains("07:30  Zinc")));
    }

    // ── Health info ──────────────────────────────────────────────────────────

    #[test]
    fn articles_open_and_close() {
        let mut app = signed_in();
        let screen = &mut app.state_mut().unwrap().info;
        screen.set_query("heart");
        assert_eq!(screen.visible().len(), 1);

        screen.open("1").unwrap();
        assert_eq!(screen.current().map(|a| a.id.as_str()), Some("1"));
        screen.back();
        assert!(screen.current().is_none());

        assert!(matches!(screen.open("99"), Err(SahayakError::NotFound { .. })));
    }

    // ── Emergency ────────────────────────────────────────────────────────────

    #[test]
    fn emergency_calls_dial_ascii_tel_uris() {
        let dialer = LogDialer::new();
        let mut app = App::new(AppConfig::default(), Box::new(NoLocation), Box::new(dialer.clone())).unwrap();
        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();

        assert_eq!(app.call_line("ambulance").unwrap(), "tel:102");
        assert_eq!(app.call("१०३").unwrap(), "tel:103");
        assert_eq!(app.call_hospital(0).unwrap(), "tel:+977-1-4412303");
        assert_eq!(
            dialer.dialed().unwrap(),
            vec!["tel:102", "tel:103", "tel:+977-1-4412303"]
        );
    }

    #[test]
    fn undialable_numbers_are_refused() {
        let dialer = LogDialer::new();
        let mut app = App::new(AppConfig::default(), Box::new(NoLocation), Box::new(dialer.clone())).unwrap();
        app.login(&Credentials::new("sita@example.com", "secret")).unwrap();

        assert!(matches!(app.call("call me"), Err(SahayakError::InvalidInput { .. })));
        assert!(matches!(app.call_line("coast-guard"), Err(SahayakError::NotFound { .. })));
        assert!(matches!(app.call_hospital(9), Err(SahayakError::NotFound { .. })));
        assert!(dialer.dialed().unwrap().is_empty());
    }

    #[test]
    fn emergency_screen_renders_in_active_digits() {
        let app = signed_in();
        let screen = &app.state().unwrap().emergency;
        let ambulance = screen.lines().iter().find(|l| l.key == "ambulance").unwrap();
        assert_eq!(ambulance.display_number(Locale::Ne), "१०२");
        assert_eq!(screen.instructions(Locale::Ne).len(), 5);
        assert_eq!(screen.hospitals().len(), 3);
    }
}
