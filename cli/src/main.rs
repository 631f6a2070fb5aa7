//! Sahayak command-line front end.
//!
//! Signs in a local session and runs one screen of the assistant per
//! subcommand, printing the result in the chosen language.
//!
//! Usage:
//!   cargo run -p sahayak -- run-all
//!   cargo run -p sahayak -- analyze fever cough sore-throat
//!   cargo run -p sahayak -- --lang ne emergency
//!   cargo run -p sahayak -- identify photos/paracetamol.jpg

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sahayak_app::{App, Credentials, LogDialer, NoLocation};
use sahayak_config::AppConfig;
use sahayak_contracts::{error::SahayakResult, locale::Locale};

mod commands;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Sahayak: bilingual (English / नेपाली) health assistant.
#[derive(Parser)]
#[command(
    name = "sahayak",
    about = "Sahayak bilingual health assistant",
    long_about = "Symptom checker, medicine identifier, facility finder, reminders,\n\
                  health articles and emergency numbers, in English or Nepali."
)]
struct Cli {
    /// TOML configuration file. The built-in defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display language: en or ne.
    #[arg(long, global = true)]
    lang: Option<Locale>,

    /// Email used for the local sign-in.
    #[arg(long, global = true, default_value = "guest@sahayak.local")]
    email: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through every screen with sample input.
    RunAll,
    /// List symptoms by category.
    Symptoms {
        /// Only symptoms whose label or category contains this text.
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Rank likely conditions for the given symptom ids.
    Analyze {
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// Identify the medicine in a photo.
    Identify { image: PathBuf },
    /// Nearby hospitals, clinics and pharmacies.
    Facilities {
        /// hospital, clinic or pharmacy.
        #[arg(long)]
        kind: Option<String>,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// List reminders, optionally adding one first.
    Reminders {
        /// Name of a medicine reminder to add.
        #[arg(long, requires_all = ["time", "frequency"])]
        add: Option<String>,
        /// HH:MM, 24-hour clock.
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Search health articles, or read one.
    Articles {
        #[arg(long, default_value = "")]
        query: String,
        /// Article id to print in full.
        #[arg(long)]
        open: Option<String>,
    },
    /// Emergency numbers and first-response steps.
    Emergency {
        /// Line to dial: ambulance, police, fire or medical.
        #[arg(long)]
        call: Option<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("sahayak: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> SahayakResult<()> {
    let mut app = start_session(&cli)?;

    match cli.command {
        Command::RunAll => commands::run_all(&mut app).await,
        Command::Symptoms { query } => commands::symptoms(&mut app, &query),
        Command::Analyze { symptoms } => commands::analyze(&mut app, &symptoms).await,
        Command::Identify { image } => commands::identify(&mut app, &image).await,
        Command::Facilities { kind, query } => commands::facilities(&mut app, kind.as_deref(), &query),
        Command::Reminders { add, time, frequency } => {
            let new = match (add, time, frequency) {
                (Some(name), Some(time), Some(frequency)) => Some((name, time, frequency)),
                _ => None,
            };
            commands::reminders(&mut app, new)
        }
        Command::Articles { query, open } => commands::articles(&mut app, &query, open.as_deref()),
        Command::Emergency { call } => commands::emergency(&app, call.as_deref()),
    }
}

/// Load configuration, build the app, and sign in.
fn start_session(cli: &Cli) -> SahayakResult<App> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::embedded()?,
    };

    let mut app = App::new(config, Box::new(NoLocation), Box::new(LogDialer::new()))?;
    if let Some(lang) = cli.lang {
        if app.locale() != lang {
            app.toggle_locale();
        }
    }
    let user = app.login(&Credentials::new(&cli.email, "local"))?;
    debug!(user = %user.name, locale = %user.locale, "cli session started");
    Ok(app)
}
