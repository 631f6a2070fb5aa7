//! One function per subcommand. Each prints in the session's language.

use std::path::Path;

use sahayak_app::{screens::health_services::distance_label, t, App};
use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    facility::FacilityKind,
    locale::Locale,
    medicine::ImagePayload,
    reminder::NewReminder,
};

// ── Walkthrough ───────────────────────────────────────────────────────────────

pub async fn run_all(app: &mut App) -> SahayakResult<()> {
    print_banner(app.locale());
    symptoms(app, "respiratory")?;
    analyze(app, &["fever".to_string(), "cough".to_string(), "sore-throat".to_string()]).await?;
    identify_payload(app, ImagePayload::new("paracetamol-500.jpg", vec![0xFF, 0xD8, 0xFF])).await?;
    facilities(app, None, "")?;
    reminders(app, Some(("Cetirizine".to_string(), "21:00".to_string(), "Daily".to_string())))?;
    articles(app, "", Some("1"))?;
    emergency(app, Some("ambulance"))?;
    Ok(())
}

// ── Symptom checker ───────────────────────────────────────────────────────────

pub fn symptoms(app: &mut App, query: &str) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &mut app.state_mut()?.symptoms;
    screen.set_query(query);

    heading(t(locale, "symptoms.title"));
    for (category, members) in screen.grouped() {
        println!("  {}", category.label(locale));
        for s in members {
            println!("    {:<20} {}", s.id.as_str(), s.label.get(locale));
        }
    }
    println!();
    Ok(())
}

pub async fn analyze(app: &mut App, ids: &[String]) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &mut app.state_mut()?.symptoms;
    screen.reset();
    for id in ids {
        screen.toggle(id)?;
    }

    heading(t(locale, "symptoms.results"));
    println!("  {}: {}", t(locale, "symptoms.selected"), screen.selected_labels(locale).join(", "));
    println!("  {}", t(locale, "symptoms.analyzing"));
    println!();
    screen.analyze().await?;

    let cards = screen.result_cards(locale);
    if cards.is_empty() {
        println!("  {}", t(locale, "symptoms.no_results"));
    }
    for card in cards {
        println!("  {}  {} {}", card.title, card.progress_bar, card.probability_label);
        println!("    {}", card.description);
        println!("    {}:", t(locale, "symptoms.recommendations"));
        for r in &card.recommendations {
            println!("      - {}", r);
        }
        println!("    {}:", t(locale, "symptoms.doctors"));
        for s in &card.specialists {
            println!("      - {}", s);
        }
        println!();
    }
    println!("  {}", t(locale, "symptoms.disclaimer"));
    println!();
    Ok(())
}

// ── Medicine identifier ───────────────────────────────────────────────────────

pub async fn identify(app: &mut App, path: &Path) -> SahayakResult<()> {
    let bytes = tokio::fs::read(path).await.map_err(|e| SahayakError::InvalidInput {
        reason: format!("cannot read image '{}': {}", path.display(), e),
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    identify_payload(app, ImagePayload::new(file_name, bytes)).await
}

async fn identify_payload(app: &mut App, image: ImagePayload) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &mut app.state_mut()?.medicine;

    heading(t(locale, "medicine.title"));
    println!("  {} ({})", t(locale, "medicine.analyzing"), image.file_name);
    println!();
    if let Err(e) = screen.identify(image).await {
        println!("  {}", t(locale, "medicine.not_recognized"));
        println!();
        return Err(e);
    }

    for (label, values) in screen.details(locale).unwrap_or_default() {
        match values.as_slice() {
            [single] => println!("  {}: {}", label, single),
            many => {
                println!("  {}:", label);
                for v in many {
                    println!("    - {}", v);
                }
            }
        }
    }
    println!();
    println!("  {}", t(locale, "medicine.disclaimer"));
    println!();
    Ok(())
}

// ── Health services ───────────────────────────────────────────────────────────

pub fn facilities(app: &mut App, kind: Option<&str>, query: &str) -> SahayakResult<()> {
    let locale = app.locale();
    let kind = kind
        .map(|k| {
            FacilityKind::from_key(k).ok_or_else(|| SahayakError::InvalidInput {
                reason: format!("unknown facility kind '{}'", k),
            })
        })
        .transpose()?;

    let screen = &mut app.state_mut()?.services;
    screen.set_kind(kind);
    screen.set_query(query);

    heading(t(locale, "services.title"));
    println!("  {}", screen.location_note(locale));
    println!("  {}: {}", t(locale, "services.view_map"), screen.area_url());
    println!();
    for nearby in screen.visible() {
        let f = nearby.facility;
        println!(
            "  {} ({}) · {}",
            f.name.get(locale),
            f.kind.label(locale),
            distance_label(nearby.distance_km, locale)
        );
        println!("    {}", f.address.get(locale));
        println!("    {}: {}  {}: {}", t(locale, "services.phone"), f.phone, t(locale, "services.hours"), f.hours.get(locale));
        println!(
            "    {}: {}",
            t(locale, "services.directions"),
            sahayak_app::screens::health_services::directions_url(f)
        );
    }
    println!();
    Ok(())
}

// ── Reminders ─────────────────────────────────────────────────────────────────

pub fn reminders(app: &mut App, add: Option<(String, String, String)>) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &mut app.state_mut()?.reminders;
    if let Some((name, time, frequency)) = add {
        screen.save(NewReminder::medicine(&name, &time, &frequency))?;
    }

    heading(t(locale, "reminders.title"));
    let lines = screen.lines(locale);
    if lines.is_empty() {
        println!("  {}", t(locale, "reminders.empty"));
    }
    for line in lines {
        println!("  {}", line);
    }
    println!();
    Ok(())
}

// ── Health info ───────────────────────────────────────────────────────────────

pub fn articles(app: &mut App, query: &str, open: Option<&str>) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &mut app.state_mut()?.info;

    heading(t(locale, "info.title"));
    if let Some(id) = open {
        let article = screen.open(id)?;
        println!("  {} [{}]", article.title.get(locale), article.category.label(locale));
        println!();
        println!("  {}", article.content.get(locale));
        println!();
        println!("  {}", t(locale, "info.disclaimer"));
        println!();
        return Ok(());
    }

    screen.set_query(query);
    for article in screen.visible() {
        println!("  [{}] {} · {}", article.id, article.title.get(locale), article.category.label(locale));
        println!("      {}", article.summary.get(locale));
    }
    println!();
    Ok(())
}

// ── Emergency ─────────────────────────────────────────────────────────────────

pub fn emergency(app: &App, call: Option<&str>) -> SahayakResult<()> {
    let locale = app.locale();
    let screen = &app.state()?.emergency;

    heading(t(locale, "emergency.title"));
    println!("  {}", t(locale, "emergency.warning"));
    println!();
    for line in screen.lines() {
        println!("  {:<28} {}", line.name.get(locale), line.display_number(locale));
    }
    println!();
    println!("  {}", t(locale, "emergency.instructions"));
    for (i, step) in screen.instructions(locale).iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
    println!();
    println!("  {}", t(locale, "emergency.hospitals"));
    for h in screen.hospitals() {
        println!("    {} · {} · {}", h.name.get(locale), h.address.get(locale), h.phone);
    }
    println!();

    if let Some(key) = call {
        let uri = app.call_line(key)?;
        println!("  {} → {}", t(locale, "emergency.call"), uri);
        println!();
    }
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn heading(title: &str) {
    println!("=== {} ===", title);
    println!();
}

fn print_banner(locale: Locale) {
    println!();
    println!("{}", t(locale, "app.title"));
    println!("{}", t(locale, "app.subtitle"));
    println!("=================================");
    println!();
}
