/// Wizard form pane: progress stepper, per-step fields with inline errors,
/// preference toggles, review card, submitted card.
///
/// Keys (shown in the footer):
///   ↑↓ field focus · type to edit · Enter next/submit · Esc back
///   Preferences: t theme · n notifications · s newsletter
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
};

use super::AppState;
use crate::wizard::{StepId, Theme, WizardState, STEPS};

const BG: Color = Color::Rgb(8, 8, 14);
const LABEL_FG: Color = Color::Rgb(100, 95, 140);
const ACCENT: Color = Color::Rgb(160, 140, 255);
const ERROR_FG: Color = Color::Rgb(220, 60, 60);

pub fn draw(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stepper
            Constraint::Min(1),    // step content
            Constraint::Length(1), // footer hints
        ])
        .split(area);

    draw_stepper(f, &state.wizard, chunks[0]);

    let wizard = &state.wizard;
    let items: Vec<ListItem<'static>> = if wizard.submitted {
        submitted_items(state.spinner_tick)
    } else {
        match wizard.step() {
            StepId::Personal | StepId::Contact => field_items(wizard),
            StepId::Preferences => preference_items(wizard),
            StepId::Review => review_items(wizard),
        }
    };
    let list = List::new(items).block(Block::default().style(Style::default().bg(BG)));
    f.render_widget(list, chunks[1]);

    draw_footer(f, wizard, chunks[2]);
}

// ── Stepper header ────────────────────────────────────────────────────────────

fn draw_stepper(f: &mut Frame, wizard: &WizardState, area: Rect) {
    let mut marks: Vec<Span<'static>> = vec![Span::raw("  ")];
    for (i, (_, title)) in STEPS.iter().enumerate() {
        let done = i < wizard.current || wizard.submitted;
        let active = i == wizard.current && !wizard.submitted;

        let (glyph, fg) = if done {
            ("✓".to_string(), Color::Rgb(0, 200, 100))
        } else if active {
            (format!("{}", i + 1), ACCENT)
        } else {
            (format!("{}", i + 1), Color::DarkGray)
        };
        let style = if active {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg)
        };
        marks.push(Span::styled(format!("({glyph}) "), style));
        marks.push(Span::styled(
            title.to_string(),
            if active {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
        if i < STEPS.len() - 1 {
            let conn_fg = if done { Color::Rgb(0, 200, 100) } else { Color::Rgb(50, 50, 70) };
            marks.push(Span::styled("  ──  ", Style::default().fg(conn_fg)));
        }
    }

    let lines = vec![Line::raw(""), Line::from(marks), Line::raw("")];
    f.render_widget(Paragraph::new(lines).style(Style::default().bg(BG)), area);
}

// ── Text-field steps ──────────────────────────────────────────────────────────

fn field_items(wizard: &WizardState) -> Vec<ListItem<'static>> {
    let mut items: Vec<ListItem<'static>> = vec![blank()];

    for (i, &field) in wizard.current_fields().iter().enumerate() {
        let focused = i == wizard.focused;
        let value = wizard.data.field(field).to_string();

        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(LABEL_FG)
        };
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:<12}", field.label()), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
        items.push(ListItem::new(Line::from(spans)));

        if let Some(msg) = wizard.error(field) {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("                "),
                Span::styled(msg.to_string(), Style::default().fg(ERROR_FG)),
            ])));
        }
        items.push(blank());
    }

    items
}

// ── Preferences step ──────────────────────────────────────────────────────────

fn preference_items(wizard: &WizardState) -> Vec<ListItem<'static>> {
    let prefs = &wizard.data.preferences;

    let radio = |selected: bool, label: &str| -> Span<'static> {
        let mark = if selected { "(•)" } else { "( )" };
        let fg = if selected { ACCENT } else { Color::DarkGray };
        Span::styled(format!("{mark} {label}   "), Style::default().fg(fg))
    };
    let checkbox = |checked: bool, label: &str| -> Line<'static> {
        let mark = if checked { "[x]" } else { "[ ]" };
        let fg = if checked { ACCENT } else { Color::DarkGray };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{mark} "), Style::default().fg(fg)),
            Span::styled(label.to_string(), Style::default().fg(Color::White)),
        ])
    };
    let hint = |s: &str| -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::raw("      "),
            Span::styled(s.to_string(), Style::default().fg(LABEL_FG)),
        ]))
    };

    vec![
        blank(),
        ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled("Theme       ", Style::default().fg(LABEL_FG)),
            radio(prefs.theme == Theme::Light, Theme::Light.label()),
            radio(prefs.theme == Theme::Dark, Theme::Dark.label()),
        ])),
        blank(),
        ListItem::new(checkbox(prefs.notifications, "Enable Notifications")),
        hint("Receive updates about your account activity"),
        blank(),
        ListItem::new(checkbox(prefs.newsletter, "Subscribe to Newsletter")),
        hint("Get weekly news and updates"),
    ]
}

// ── Review step ───────────────────────────────────────────────────────────────

fn review_items(wizard: &WizardState) -> Vec<ListItem<'static>> {
    let data = &wizard.data;
    let yes_no = |b: bool| if b { "Yes" } else { "No" };

    let mut items: Vec<ListItem<'static>> = vec![blank()];
    items.push(heading("Personal Information"));
    items.push(kv("First name", &data.personal.first_name));
    items.push(kv("Last name", &data.personal.last_name));
    items.push(kv("Birth date", &data.personal.birth_date));
    items.push(blank());
    items.push(heading("Contact Details"));
    items.push(kv("Email", &data.contact.email));
    items.push(kv("Phone", &data.contact.phone));
    items.push(kv("Address", &data.contact.address));
    items.push(blank());
    items.push(heading("Preferences"));
    items.push(kv("Theme", data.preferences.theme.label()));
    items.push(kv("Notifications", yes_no(data.preferences.notifications)));
    items.push(kv("Newsletter", yes_no(data.preferences.newsletter)));
    items.push(blank());
    items.push(ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "Please review your information carefully before submitting",
            Style::default().fg(LABEL_FG),
        ),
    ])));
    items
}

// ── Submitted card ────────────────────────────────────────────────────────────

fn submitted_items(tick: u32) -> Vec<ListItem<'static>> {
    // Pulse the check mark with the spinner tick
    let fg = if (tick / 4) % 2 == 0 {
        Color::Rgb(0, 240, 120)
    } else {
        Color::Rgb(0, 180, 90)
    };
    vec![
        blank(),
        blank(),
        ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled("✓ All set!", Style::default().fg(fg).add_modifier(Modifier::BOLD)),
        ])),
        blank(),
        ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "Your information has been submitted.",
                Style::default().fg(Color::White),
            ),
        ])),
        ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled("q to quit · Tab for the chat", Style::default().fg(LABEL_FG)),
        ])),
    ]
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn draw_footer(f: &mut Frame, wizard: &WizardState, area: Rect) {
    let key = |s: &str| Span::styled(s.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let txt = |s: &str| Span::styled(s.to_string(), Style::default().fg(LABEL_FG));

    let mut spans = vec![Span::raw("  ")];
    if wizard.submitted {
        spans.push(key("q"));
        spans.push(txt(" quit   "));
        spans.push(key("Tab"));
        spans.push(txt(" chat"));
    } else {
        match wizard.step() {
            StepId::Personal | StepId::Contact => {
                spans.push(key("↑↓"));
                spans.push(txt(" field   type to edit   "));
            }
            StepId::Preferences => {
                spans.push(key("t"));
                spans.push(txt(" theme   "));
                spans.push(key("n"));
                spans.push(txt(" notifications   "));
                spans.push(key("s"));
                spans.push(txt(" newsletter   "));
            }
            StepId::Review => {}
        }
        spans.push(key("Enter"));
        spans.push(txt(if wizard.is_last_step() { " submit   " } else { " next   " }));
        spans.push(key("Esc"));
        spans.push(txt(if wizard.current == 0 { " chat" } else { " back" }));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(12, 12, 20)));
    f.render_widget(footer, area);
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn blank() -> ListItem<'static> {
    ListItem::new(Line::raw(""))
}

fn heading(s: &str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]))
}

fn kv(k: &str, v: &str) -> ListItem<'static> {
    let v = if v.is_empty() { "—".to_string() } else { v.to_string() };
    ListItem::new(Line::from(vec![
        Span::styled(format!("    {k:<16}"), Style::default().fg(LABEL_FG)),
        Span::styled(v, Style::default().fg(Color::White)),
    ]))
}
