/// Ratatui draw entry-point for appweave.
/// Thin dispatcher — most rendering lives in chat.rs and form.rs.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{AppState, Tab};

// ── Splash screen ─────────────────────────────────────────────────────────────

const LOGO: &str = r#"
  ██╗    ██╗███████╗ █████╗ ██╗   ██╗███████╗
  ██║    ██║██╔════╝██╔══██╗██║   ██║██╔════╝
  ██║ █╗ ██║█████╗  ███████║██║   ██║█████╗
  ██║███╗██║██╔══╝  ██╔══██║╚██╗ ██╔╝██╔══╝
  ╚███╔███╔╝███████╗██║  ██║ ╚████╔╝ ███████╗
   ╚══╝╚══╝ ╚══════╝╚═╝  ╚═╝  ╚═══╝  ╚══════╝
"#;

pub fn draw_splash(f: &mut Frame) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let color = match i % 6 {
                0 => Color::DarkGray,
                1 | 5 => Color::Magenta,
                2 | 4 => Color::Rgb(160, 140, 255),
                _ => Color::White,
            };
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let logo_height = logo_lines.len() as u16;
    let y = area.height.saturating_sub(logo_height + 3) / 2;

    let logo_area = Rect {
        x: area.x,
        y: area.y + y,
        width: area.width,
        height: logo_height,
    };
    let subtitle_area = Rect {
        x: area.x,
        y: logo_area.y + logo_height + 1,
        width: area.width,
        height: 1,
    };

    f.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        logo_area,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("transcript replay", Style::default().fg(Color::DarkGray)),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled("onboarding wizard", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center),
        subtitle_area,
    );
}

// ── Main draw entry point ─────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(area);

    draw_tab_bar(f, state, chunks[0]);

    match state.tab {
        Tab::Chat => super::chat::draw_history(f, state, chunks[1]),
        Tab::Form => super::form::draw(f, state, chunks[1]),
    }

    draw_status_bar(f, state, chunks[2]);
}

// ── Tab bar ───────────────────────────────────────────────────────────────────

fn draw_tab_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let tab = |label: &str, active: bool| -> Span<'static> {
        if active {
            Span::styled(
                format!("  {label}  "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(160, 140, 255))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {label}  "), Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        tab("chat", state.tab == Tab::Chat),
        tab("form", state.tab == Tab::Form),
        Span::styled("   Tab to switch", Style::default().fg(Color::Rgb(60, 55, 90))),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Rgb(12, 12, 20))),
        area,
    );
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn draw_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![Span::raw("  ")];

    match state.tab {
        Tab::Chat => {
            if state.replay_done() {
                spans.push(Span::styled(
                    format!("✓ {} events", state.entries.len()),
                    Style::default().fg(Color::Rgb(0, 200, 100)),
                ));
                spans.push(Span::styled(
                    "   r replay   j/k scroll   q quit",
                    Style::default().fg(Color::Rgb(100, 95, 140)),
                ));
            } else {
                let glyph = super::chat::spinner_glyph(state.spinner_tick);
                spans.push(Span::styled(
                    format!("{glyph} replaying {}/{}", state.entries.len(), state.script.len()),
                    Style::default().fg(Color::Cyan),
                ));
            }
        }
        Tab::Form => {
            let wizard = &state.wizard;
            let label = if wizard.submitted {
                "submitted".to_string()
            } else {
                format!(
                    "step {}/{} · {}",
                    wizard.current + 1,
                    crate::wizard::STEPS.len(),
                    wizard.step_title()
                )
            };
            spans.push(Span::styled(label, Style::default().fg(Color::Rgb(160, 140, 255))));
            if !wizard.submitted && !wizard.step_valid(wizard.step()) {
                spans.push(Span::styled(
                    "   fix the highlighted fields",
                    Style::default().fg(Color::Rgb(220, 60, 60)),
                ));
            }
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(12, 12, 20))),
        area,
    );
}
