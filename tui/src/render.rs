//! Drawing. Everything here reads `Tui` and never mutates it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use sahayak_app::{
    screens::{
        health_services::{distance_label, is_open_24h},
        AnalysisState, RecognitionState,
    },
    t, AppState, Tab,
};
use sahayak_contracts::locale::Locale;

use crate::{symptom_rows, Form, Overlay, Tui};

pub fn ui(f: &mut Frame, tui: &Tui) {
    let full = f.area();

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // body
            Constraint::Length(4), // footer
        ])
        .split(full);

    let locale = tui.app.locale();
    match tui.app.state() {
        Ok(state) => {
            render_header(f, outer_chunks[0], state);
            render_tab(f, outer_chunks[1], tui, state);
        }
        Err(_) => {
            render_title(f, outer_chunks[0], locale);
            render_login(f, outer_chunks[1], tui, locale);
        }
    }
    render_footer(f, outer_chunks[2], tui, locale);

    match &tui.overlay {
        Some(Overlay::ImagePath(form)) => render_form_popup(f, full, t(locale, "medicine.upload"), form, locale),
        Some(Overlay::NewReminder(form)) => render_form_popup(f, full, t(locale, "reminders.add"), form, locale),
        Some(Overlay::Search) | None => {}
    }
}

// ── Header ────────────────────────────────────────────────────────────────────

fn panel(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title))
    }
}

fn title_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn render_title(f: &mut Frame, area: Rect, locale: Locale) {
    let line = Line::from(vec![
        Span::styled(format!("{}    ", t(locale, "app.title")), title_style()),
        Span::styled(t(locale, "app.subtitle"), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).block(panel("")), area);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let locale = state.locale;
    let mut spans = vec![
        Span::styled(format!("{}  ", t(locale, "app.title")), title_style()),
        Span::styled(
            format!("{}, {} · {}   ", t(locale, "dashboard.welcome"), state.user.name, locale.native_name()),
            Style::default().fg(Color::Gray),
        ),
    ];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == state.tab {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}  ", i + 1, tab.label(locale)), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(panel("")), area);
}

// ── Login ─────────────────────────────────────────────────────────────────────

fn render_login(f: &mut Frame, area: Rect, tui: &Tui, locale: Locale) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let heading = if tui.signup {
        t(locale, "login.signup")
    } else {
        t(locale, "login.login")
    };
    let mut lines = form_lines(&tui.login, locale);
    lines.push(Line::from(""));
    let switch = if tui.signup {
        t(locale, "login.switch_to_login")
    } else {
        t(locale, "login.switch_to_signup")
    };
    lines.push(Line::from(Span::styled(format!("  Ctrl-S: {}", switch), muted())));
    f.render_widget(Paragraph::new(lines).block(panel(heading)), chunks[0]);

    let features: Vec<ListItem> = [
        "login.feature.symptoms",
        "login.feature.medicine",
        "login.feature.reminders",
        "login.feature.emergency",
    ]
    .iter()
    .map(|key| ListItem::new(format!("  • {}", t(locale, *key))))
    .collect();
    f.render_widget(List::new(features).block(panel(t(locale, "app.subtitle"))), chunks[1]);
}

fn form_lines<'a>(form: &'a Form, locale: Locale) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from("")];
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let value = if field.secret {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<16}", t(locale, field.label)), Style::default().fg(Color::Gray)),
            Span::styled(value, value_style),
            Span::styled(if focused { "_" } else { "" }, Style::default().fg(Color::Cyan)),
        ]));
    }
    lines
}

fn render_form_popup(f: &mut Frame, full: Rect, title: &str, form: &Form, locale: Locale) {
    let width = full.width.saturating_mul(3) / 5;
    let height = (form.fields.len() as u16 + 4).min(full.height);
    let area = Rect {
        x: full.x + (full.width.saturating_sub(width)) / 2,
        y: full.y + (full.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(form_lines(form, locale)).block(panel(title).border_style(Style::default().fg(Color::Cyan))),
        area,
    );
}

// ── Tabs ──────────────────────────────────────────────────────────────────────

fn render_tab(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    match state.tab {
        Tab::SymptomChecker => render_symptoms(f, area, tui, state),
        Tab::MedicineId => render_medicine(f, area, state),
        Tab::HealthServices => render_services(f, area, tui, state),
        Tab::Reminders => render_reminders(f, area, tui, state),
        Tab::HealthInfo => render_info(f, area, tui, state),
        Tab::Emergency => render_emergency(f, area, tui, state),
    }
}

/// A list whose selected row is kept in view.
fn render_list(f: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: Option<usize>) {
    let list = List::new(items)
        .block(panel(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn search_line<'a>(query: &'a str, searching: bool, locale: Locale, placeholder: &'static str) -> Line<'a> {
    let (text, style) = if query.is_empty() && !searching {
        (t(locale, placeholder), muted())
    } else {
        (query, Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(" / ", Style::default().fg(Color::Cyan)),
        Span::styled(text, style),
        Span::styled(if searching { "_" } else { "" }, Style::default().fg(Color::Cyan)),
    ])
}

fn render_symptoms(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    let locale = state.locale;
    let screen = &state.symptoms;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(chunks[0]);

    let searching = matches!(tui.overlay, Some(Overlay::Search));
    f.render_widget(
        Paragraph::new(search_line(screen.query(), searching, locale, "symptoms.search")).block(panel("")),
        left[0],
    );

    // Category headings are interleaved, so map the cursor to a list index.
    let mut items = Vec::new();
    let mut selected = None;
    let mut row = 0;
    for (category, members) in screen.grouped() {
        items.push(ListItem::new(Span::styled(category.label(locale), title_style())));
        for symptom in members {
            if row == tui.cursor {
                selected = Some(items.len());
            }
            let mark = if screen.selection().contains(&symptom.id) { "[x]" } else { "[ ]" };
            items.push(ListItem::new(format!(" {} {}", mark, symptom.label.get(locale))));
            row += 1;
        }
    }
    debug_assert_eq!(row, symptom_rows(screen).len());
    render_list(f, left[1], t(locale, "symptoms.select"), items, selected);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", t(locale, "symptoms.selected")), Style::default().fg(Color::Gray)),
        Span::raw(screen.selected_labels(locale).join(", ")),
    ])];
    lines.push(Line::from(""));
    match screen.state() {
        AnalysisState::Idle if screen.selection().is_empty() => {
            lines.push(Line::from(Span::styled(t(locale, "symptoms.no_symptoms"), muted())));
        }
        AnalysisState::Idle => {
            lines.push(Line::from(Span::styled(format!("Enter: {}", t(locale, "symptoms.analyze")), muted())));
        }
        AnalysisState::Analyzing => {
            lines.push(Line::from(Span::styled(
                t(locale, "symptoms.analyzing"),
                Style::default().fg(Color::Yellow),
            )));
        }
        AnalysisState::Failed(reason) => {
            lines.push(Line::from(Span::styled(reason.as_str(), Style::default().fg(Color::Red))));
        }
        AnalysisState::Done(_) => {
            let cards = screen.result_cards(locale);
            if cards.is_empty() {
                lines.push(Line::from(t(locale, "symptoms.no_results")));
            }
            for card in cards {
                lines.push(Line::from(vec![
                    Span::styled(card.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(card.progress_bar, Style::default().fg(probability_color(card.probability))),
                    Span::raw(format!(" {}", card.probability_label)),
                ]));
                lines.push(Line::from(Span::styled(card.description, Style::default().fg(Color::Gray))));
                lines.push(Line::from(format!("{}:", t(locale, "symptoms.recommendations"))));
                for r in card.recommendations {
                    lines.push(Line::from(format!("  • {}", r)));
                }
                lines.push(Line::from(format!("{}:", t(locale, "symptoms.doctors"))));
                for s in card.specialists {
                    lines.push(Line::from(Span::styled(format!("  {}", s), Style::default().fg(Color::Gray))));
                }
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(t(locale, "symptoms.disclaimer"), muted())));
        }
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(t(locale, "symptoms.results"))),
        chunks[1],
    );
}

fn probability_color(probability: u8) -> Color {
    if probability >= 60 {
        Color::Red
    } else if probability >= 30 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn render_medicine(f: &mut Frame, area: Rect, state: &AppState) {
    let locale = state.locale;
    let screen = &state.medicine;

    let mut lines = vec![
        Line::from(Span::styled(t(locale, "medicine.subtitle"), Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    if let Some(name) = screen.image_name() {
        lines.push(Line::from(format!("» {}", name)));
        lines.push(Line::from(""));
    }
    match screen.state() {
        RecognitionState::Idle => {
            lines.push(Line::from(Span::styled(t(locale, "medicine.no_image"), muted())));
        }
        RecognitionState::Analyzing => {
            lines.push(Line::from(Span::styled(
                t(locale, "medicine.analyzing"),
                Style::default().fg(Color::Yellow),
            )));
        }
        RecognitionState::Failed(_) => {
            lines.push(Line::from(Span::styled(
                t(locale, "medicine.not_recognized"),
                Style::default().fg(Color::Red),
            )));
        }
        RecognitionState::Identified(_) => {
            for (label, values) in screen.details(locale).unwrap_or_default() {
                lines.push(Line::from(Span::styled(format!("{}:", label), title_style())));
                for v in values {
                    lines.push(Line::from(format!("  {}", v)));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(t(locale, "medicine.disclaimer"), muted())));
        }
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(t(locale, "medicine.title"))),
        area,
    );
}

fn render_services(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    let locale = state.locale;
    let screen = &state.services;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let kind = screen.kind().map_or(t(locale, "services.all"), |k| k.label(locale));
    let searching = matches!(tui.overlay, Some(Overlay::Search));
    let header = vec![
        Line::from(vec![
            Span::styled(format!("{}  ", screen.location_note(locale)), title_style()),
            Span::styled(screen.area_url(), muted()),
        ]),
        Line::from(Span::styled(format!(" [k] {}", kind), Style::default().fg(Color::White))),
        search_line(screen.query(), searching, locale, "services.search"),
    ];
    f.render_widget(Paragraph::new(header).block(panel(t(locale, "services.title"))), chunks[0]);

    let items: Vec<ListItem> = screen
        .visible()
        .iter()
        .map(|n| {
            let fac = n.facility;
            let open = if is_open_24h(fac) {
                Span::styled(format!("  {}", t(locale, "services.open_now")), Style::default().fg(Color::Green))
            } else {
                Span::raw("")
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(fac.name.get(locale).clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  ({})", fac.kind.label(locale)), muted()),
                    Span::raw(format!("  {}", distance_label(n.distance_km, locale))),
                    open,
                ]),
                Line::from(Span::styled(
                    format!("   {} · {} · {}", fac.address.get(locale), fac.phone, fac.hours.get(locale)),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();
    let selected = (!items.is_empty()).then_some(tui.cursor);
    render_list(f, chunks[1], t(locale, "services.shown"), items, selected);
}

fn render_reminders(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    let locale = state.locale;
    let screen = &state.reminders;
    let lines = screen.lines(locale);
    if lines.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(t(locale, "reminders.empty"), muted())).block(panel(t(locale, "reminders.title"))),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = screen
        .list()
        .iter()
        .zip(lines)
        .map(|(r, line)| {
            let style = if r.enabled {
                Style::default().fg(Color::White)
            } else {
                muted()
            };
            let mut rows = vec![Line::from(Span::styled(line, style))];
            let notes = r.notes.get(locale);
            if !notes.is_empty() {
                rows.push(Line::from(Span::styled(format!("        {}", notes), muted())));
            }
            ListItem::new(rows)
        })
        .collect();
    render_list(f, area, t(locale, "reminders.title"), items, Some(tui.cursor));
}

fn render_info(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    let locale = state.locale;
    let screen = &state.info;

    if let Some(article) = screen.current() {
        let lines = vec![
            Line::from(Span::styled(article.category.label(locale), muted())),
            Line::from(""),
            Line::from(article.content.get(locale).as_str()),
            Line::from(""),
            Line::from(Span::styled(t(locale, "info.disclaimer"), muted())),
            Line::from(""),
            Line::from(Span::styled(format!("Esc: {}", t(locale, "info.back")), Style::default().fg(Color::Cyan))),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(panel(article.title.get(locale))),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let searching = matches!(tui.overlay, Some(Overlay::Search));
    f.render_widget(
        Paragraph::new(search_line(screen.query(), searching, locale, "info.search")).block(panel(t(locale, "info.title"))),
        chunks[0],
    );

    let items: Vec<ListItem> = screen
        .visible()
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(a.title.get(locale).clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  [{}]", a.category.label(locale)), muted()),
                ]),
                Line::from(Span::styled(format!("   {}", a.summary.get(locale)), Style::default().fg(Color::Gray))),
            ])
        })
        .collect();
    let selected = (!items.is_empty()).then_some(tui.cursor);
    render_list(f, chunks[1], t(locale, "info.all"), items, selected);
}

fn render_emergency(f: &mut Frame, area: Rect, tui: &Tui, state: &AppState) {
    let locale = state.locale;
    let screen = &state.emergency;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut items: Vec<ListItem> = screen
        .lines()
        .iter()
        .map(|l| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<6}", l.display_number(locale)), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(l.name.get(locale).clone()),
                Span::styled(format!("  {}", t(locale, "emergency.available_24")), muted()),
            ]))
        })
        .collect();
    items.extend(screen.hospitals().iter().map(|h| {
        ListItem::new(vec![
            Line::from(Span::styled(h.name.get(locale).clone(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(format!("   {} · {}", h.address.get(locale), h.phone), Style::default().fg(Color::Gray))),
        ])
    }));
    render_list(f, chunks[0], t(locale, "emergency.title"), items, Some(tui.cursor));

    let mut lines = vec![
        Line::from(Span::styled(t(locale, "emergency.warning"), Style::default().fg(Color::Red))),
        Line::from(""),
    ];
    for (i, step) in screen.instructions(locale).iter().enumerate() {
        lines.push(Line::from(format!("{}. {}", i + 1, step)));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(t(locale, "emergency.instructions"))),
        chunks[1],
    );
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn key(k: &str) -> Span<'_> {
    Span::styled(format!("[{}] ", k), Style::default().fg(Color::Cyan))
}

fn render_footer(f: &mut Frame, area: Rect, tui: &Tui, locale: Locale) {
    let mut spans: Vec<Span> = Vec::new();
    match tui.app.tab() {
        Err(_) => {
            spans.extend([key("Tab"), Span::raw("Next field  "), key("Enter"), Span::raw(format!("{}  ", t(locale, "login.login")))]);
            spans.extend([key("Ctrl-S"), Span::raw(format!("{}  ", t(locale, "login.signup")))]);
            spans.extend([key("Esc"), Span::raw("Quit  ")]);
        }
        Ok(_) if tui.overlay.is_some() => {
            spans.extend([key("Enter"), Span::raw("OK  "), key("Esc"), Span::raw(format!("{}  ", t(locale, "reminders.cancel")))]);
        }
        Ok(tab) => {
            spans.extend([key("1-6"), Span::raw("Tab  "), key("↑↓"), Span::raw("Move  ")]);
            let tab_keys: &[(&str, &str)] = match tab {
                Tab::SymptomChecker => &[("Space", "Select"), ("Enter", "Analyze"), ("/", "Search"), ("x", "Clear")],
                Tab::MedicineId => &[("u", "Upload"), ("x", "Clear")],
                Tab::HealthServices => &[("k", "Kind"), ("/", "Search"), ("Enter", "Directions"), ("c", "Call"), ("r", "Locate")],
                Tab::Reminders => &[("a", "Add"), ("Space", "On/off"), ("d", "Delete")],
                Tab::HealthInfo => &[("Enter", "Read"), ("Esc", "Back"), ("/", "Search")],
                Tab::Emergency => &[("Enter", "Call")],
            };
            for (k, label) in tab_keys {
                spans.push(key(k));
                spans.push(Span::raw(format!("{}  ", label)));
            }
            spans.extend([key("l"), Span::raw(format!("{}  ", locale.toggle().native_name()))]);
            spans.extend([key("o"), Span::raw(format!("{}  ", t(locale, "dashboard.logout")))]);
            spans.extend([key("q"), Span::raw("Quit")]);
        }
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(status) = &tui.status {
        let color = if status.error { Color::Red } else { Color::Green };
        lines.push(Line::from(Span::styled(format!(" {}", status.text), Style::default().fg(color))));
    }
    f.render_widget(Paragraph::new(lines).block(panel("")), area);
}
