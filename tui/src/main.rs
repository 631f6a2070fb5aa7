//! Sahayak interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  Sahayak · user · language   [Symptom Checker] Medicine ID  ...     │
//!   ├─── body ────────────────────────────────────────────────────────────┤
//!   │  active tab                                                         │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings + status)                                     │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Analysis and recognition run on a tokio runtime; their outcomes come back
//! over a channel and are applied on the next loop iteration.

use std::{io, path::Path, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{
    runtime::Runtime,
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sahayak_app::{
    screens::health_services::directions_url, App, Credentials, LogDialer, NoLocation, Tab,
};
use sahayak_config::AppConfig;
use sahayak_contracts::{
    condition::MatchReport,
    error::{SahayakError, SahayakResult},
    medicine::{ImagePayload, Medicine},
    reminder::NewReminder,
    symptom::Symptom,
};

mod render;

// ── Forms ─────────────────────────────────────────────────────────────────────

/// One text input. `label` is a UI string key.
#[derive(Debug, Clone)]
struct Field {
    label: &'static str,
    value: String,
    secret: bool,
}

/// A stack of text inputs with one focused.
#[derive(Debug, Clone)]
struct Form {
    fields: Vec<Field>,
    focus: usize,
}

impl Form {
    fn new(labels: &[(&'static str, bool)]) -> Self {
        Self {
            fields: labels
                .iter()
                .map(|&(label, secret)| Field {
                    label,
                    value: String::new(),
                    secret,
                })
                .collect(),
            focus: 0,
        }
    }

    fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }

    fn next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Feed a key to the focused field. Returns false if the key was not
    /// a text edit.
    fn edit(&mut self, code: KeyCode) -> bool {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        match code {
            KeyCode::Char(c) => field.value.push(c),
            KeyCode::Backspace => {
                field.value.pop();
            }
            _ => return false,
        }
        true
    }
}

fn login_form(signup: bool) -> Form {
    let mut fields = vec![("login.email", false), ("login.password", true)];
    if signup {
        fields.insert(0, ("login.name", false));
    }
    Form::new(&fields)
}

// ── TUI state ─────────────────────────────────────────────────────────────────

/// A modal input drawn over the dashboard.
enum Overlay {
    /// Typing into the active tab's search box.
    Search,
    ImagePath(Form),
    NewReminder(Form),
}

enum Outcome {
    Analysis(SahayakResult<MatchReport>),
    Recognition(SahayakResult<Medicine>),
}

struct Status {
    text: String,
    error: bool,
}

struct Tui {
    app: App,
    runtime: Runtime,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,

    login: Form,
    signup: bool,

    overlay: Option<Overlay>,
    /// Highlighted row in the active tab's list.
    cursor: usize,
    status: Option<Status>,
    quit: bool,
}

impl Tui {
    fn new(app: App, runtime: Runtime) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            app,
            runtime,
            tx,
            rx,
            login: login_form(false),
            signup: false,
            overlay: None,
            cursor: 0,
            status: None,
            quit: false,
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            error: false,
        });
    }

    /// Show `result`'s error in the status line, if any.
    fn report<T>(&mut self, result: SahayakResult<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.status = Some(Status {
                    text: e.to_string(),
                    error: true,
                });
                None
            }
        }
    }

    // ── Background outcomes ──────────────────────────────────────────────────

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            let Ok(state) = self.app.state_mut() else {
                continue;
            };
            let error = match outcome {
                Outcome::Analysis(result) => {
                    state.symptoms.apply_analysis(&result);
                    result.err()
                }
                Outcome::Recognition(result) => {
                    state.medicine.apply_identification(&result);
                    result.err()
                }
            };
            match error {
                None | Some(SahayakError::Superseded { .. }) => {}
                Some(e) => {
                    self.report::<()>(Err(e));
                }
            }
        }
    }

    fn start_analysis(&mut self) -> SahayakResult<()> {
        let screen = &mut self.app.state_mut()?.symptoms;
        screen.begin_analysis()?;
        let pipeline = screen.pipeline();
        let selection = screen.selection().clone();
        debug!(symptoms = selection.len(), "analysis spawned");
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = pipeline.analyze(&selection).await;
            let _ = tx.send(Outcome::Analysis(outcome));
        });
        Ok(())
    }

    fn start_recognition(&mut self, path: &str) -> SahayakResult<()> {
        let path = Path::new(path.trim());
        let bytes = std::fs::read(path).map_err(|e| SahayakError::InvalidInput {
            reason: format!("cannot read image '{}': {}", path.display(), e),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let image = ImagePayload::new(file_name, bytes);

        let screen = &mut self.app.state_mut()?.medicine;
        screen.begin_identification(&image)?;
        let pipeline = screen.pipeline();
        debug!(file = %image.file_name, bytes = image.bytes.len(), "recognition spawned");
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = pipeline.identify(&image).await;
            let _ = tx.send(Outcome::Recognition(outcome));
        });
        Ok(())
    }

    // ── Key handling ─────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('l') if ctrl => {
                let locale = self.app.toggle_locale();
                self.info(format!("{}: {}", sahayak_app::t(locale, "dashboard.language"), locale.native_name()));
            }
            _ if !self.app.is_signed_in() => self.handle_login_key(key),
            _ if self.overlay.is_some() => self.handle_overlay_key(key),
            _ => self.handle_dashboard_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.signup = !self.signup;
                self.login = login_form(self.signup);
            }
            KeyCode::Tab | KeyCode::Down => self.login.next(),
            KeyCode::BackTab | KeyCode::Up => self.login.previous(),
            KeyCode::Enter => {
                let offset = usize::from(self.signup);
                let mut credentials = Credentials::new(self.login.value(offset), self.login.value(offset + 1));
                if self.signup {
                    credentials = credentials.with_name(self.login.value(0));
                }
                let result = self.app.login(&credentials).map(|_| ());
                if self.report(result).is_some() {
                    self.login = login_form(self.signup);
                    self.cursor = 0;
                    self.status = None;
                }
            }
            code => {
                self.login.edit(code);
            }
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        match (overlay, key.code) {
            (_, KeyCode::Esc) => self.overlay = None,

            (Overlay::Search, KeyCode::Enter) => self.overlay = None,
            (Overlay::Search, code) => {
                let Ok(state) = self.app.state_mut() else {
                    return;
                };
                let query = match state.tab {
                    Tab::SymptomChecker => state.symptoms.query(),
                    Tab::HealthServices => state.services.query(),
                    Tab::HealthInfo => state.info.query(),
                    _ => return,
                };
                let mut query = query.to_string();
                match code {
                    KeyCode::Char(c) => query.push(c),
                    KeyCode::Backspace => {
                        query.pop();
                    }
                    _ => return,
                }
                match state.tab {
                    Tab::SymptomChecker => state.symptoms.set_query(query),
                    Tab::HealthServices => state.services.set_query(query),
                    _ => state.info.set_query(query),
                }
                self.cursor = 0;
            }

            (Overlay::ImagePath(form), KeyCode::Enter) => {
                let path = form.value(0).to_string();
                self.overlay = None;
                let result = self.start_recognition(&path);
                self.report(result);
            }

            (Overlay::NewReminder(form), KeyCode::Enter) => {
                let input = NewReminder::medicine(form.value(0), form.value(1), form.value(2));
                let input = NewReminder {
                    notes: form.value(3).to_string(),
                    ..input
                };
                let saved = self.app.state_mut().and_then(|s| s.reminders.save(input));
                if self.report(saved).is_some() {
                    self.overlay = None;
                    if let Ok(state) = self.app.state_mut() {
                        state.reminders.cancel_form();
                    }
                }
            }

            (Overlay::ImagePath(form) | Overlay::NewReminder(form), KeyCode::Tab | KeyCode::Down) => form.next(),
            (Overlay::ImagePath(form) | Overlay::NewReminder(form), KeyCode::BackTab | KeyCode::Up) => {
                form.previous()
            }
            (Overlay::ImagePath(form) | Overlay::NewReminder(form), code) => {
                form.edit(code);
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let Ok(tab) = self.app.tab() else {
            return;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            KeyCode::Tab => self.switch_tab(tab.next()),
            KeyCode::BackTab => self.switch_tab(tab.previous()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = usize::from(c as u8 - b'1');
                self.switch_tab(Tab::ALL[index]);
            }
            KeyCode::Char('l') => {
                self.app.toggle_locale();
            }
            KeyCode::Char('o') => {
                let result = self.app.logout();
                self.report(result);
                self.overlay = None;
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.row_count();
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('/') if matches!(tab, Tab::SymptomChecker | Tab::HealthServices | Tab::HealthInfo) => {
                self.overlay = Some(Overlay::Search);
            }
            code => {
                let result = self.tab_action(tab, code);
                self.report(result);
            }
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        let result = self.app.select_tab(tab);
        self.report(result);
        self.cursor = 0;
        self.overlay = None;
    }

    /// Keys that mean something only on one tab.
    fn tab_action(&mut self, tab: Tab, code: KeyCode) -> SahayakResult<()> {
        let cursor = self.cursor;
        match (tab, code) {
            (Tab::SymptomChecker, KeyCode::Char(' ')) => {
                let state = self.app.state_mut()?;
                let id = symptom_rows(&state.symptoms)
                    .get(cursor)
                    .map(|s| s.id.as_str().to_string());
                if let Some(id) = id {
                    state.symptoms.toggle(&id)?;
                }
            }
            (Tab::SymptomChecker, KeyCode::Enter) => self.start_analysis()?,
            (Tab::SymptomChecker, KeyCode::Char('x')) => {
                self.app.state_mut()?.symptoms.reset();
                self.cursor = 0;
            }

            (Tab::MedicineId, KeyCode::Char('u') | KeyCode::Enter) => {
                self.overlay = Some(Overlay::ImagePath(Form::new(&[("medicine.upload", false)])));
            }
            (Tab::MedicineId, KeyCode::Char('x')) => self.app.state_mut()?.medicine.reset(),

            (Tab::HealthServices, KeyCode::Char('k')) => {
                self.app.state_mut()?.services.cycle_kind();
                self.cursor = 0;
            }
            (Tab::HealthServices, KeyCode::Char('r')) => self.app.relocate()?,
            (Tab::HealthServices, KeyCode::Enter) => {
                let url = self
                    .app
                    .state()?
                    .services
                    .visible()
                    .get(cursor)
                    .map(|n| directions_url(n.facility));
                if let Some(url) = url {
                    self.info(url);
                }
            }
            (Tab::HealthServices, KeyCode::Char('c')) => {
                let phone = self
                    .app
                    .state()?
                    .services
                    .visible()
                    .get(cursor)
                    .map(|n| n.facility.phone.clone());
                if let Some(phone) = phone {
                    let uri = self.app.call(&phone)?;
                    self.info(uri);
                }
            }

            (Tab::Reminders, KeyCode::Char('a')) => {
                self.app.state_mut()?.reminders.open_form();
                self.overlay = Some(Overlay::NewReminder(Form::new(&[
                    ("reminders.name", false),
                    ("reminders.time", false),
                    ("reminders.frequency", false),
                    ("reminders.notes", false),
                ])));
            }
            (Tab::Reminders, KeyCode::Char(' ')) => {
                let reminders = &mut self.app.state_mut()?.reminders;
                if let Some(id) = reminders.list().get(cursor).map(|r| r.id) {
                    reminders.toggle(id)?;
                }
            }
            (Tab::Reminders, KeyCode::Delete | KeyCode::Char('d')) => {
                let reminders = &mut self.app.state_mut()?.reminders;
                if let Some(id) = reminders.list().get(cursor).map(|r| r.id) {
                    reminders.delete(id)?;
                    self.cursor = cursor.min(reminders.list().len().saturating_sub(1));
                }
            }

            (Tab::HealthInfo, KeyCode::Enter) => {
                let info = &mut self.app.state_mut()?.info;
                let id = info.visible().get(cursor).map(|a| a.id.clone());
                if let Some(id) = id {
                    info.open(&id)?;
                }
            }
            (Tab::HealthInfo, KeyCode::Esc | KeyCode::Backspace) => self.app.state_mut()?.info.back(),

            (Tab::Emergency, KeyCode::Enter) => {
                let lines = self.app.state()?.emergency.lines().len();
                let uri = if cursor < lines {
                    let key = self.app.state()?.emergency.lines()[cursor].key.clone();
                    self.app.call_line(&key)?
                } else {
                    self.app.call_hospital(cursor - lines)?
                };
                self.info(uri);
            }

            _ => {}
        }
        Ok(())
    }

    /// Number of selectable rows on the active tab.
    fn row_count(&self) -> usize {
        let Ok(state) = self.app.state() else {
            return 0;
        };
        match state.tab {
            Tab::SymptomChecker => symptom_rows(&state.symptoms).len(),
            Tab::MedicineId => 0,
            Tab::HealthServices => state.services.visible().len(),
            Tab::Reminders => state.reminders.list().len(),
            Tab::HealthInfo => state.info.visible().len(),
            Tab::Emergency => state.emergency.lines().len() + state.emergency.hospitals().len(),
        }
    }
}

/// Symptoms in on-screen order: grouped by category, filtered by the query.
fn symptom_rows(screen: &sahayak_app::screens::SymptomCheckerScreen) -> Vec<&Symptom> {
    screen.grouped().into_iter().flat_map(|(_, members)| members).collect()
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Logs go to the file named by `SAHAYAK_TUI_LOG`, never to the terminal.
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var("SAHAYAK_TUI_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    init_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(Path::new(&path)),
        None => AppConfig::embedded(),
    }
    .map_err(io::Error::other)?;
    let app = App::new(config, Box::new(NoLocation), Box::new(LogDialer::new())).map_err(io::Error::other)?;
    let runtime = Runtime::new()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut tui = Tui::new(app, runtime);

    // Short poll so background outcomes appear promptly.
    const TICK_MS: u64 = 100;

    while !tui.quit {
        tui.drain_outcomes();
        terminal.draw(|f| render::ui(f, &tui))?;

        if event::poll(Duration::from_millis(TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                tui.handle_key(key);
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
