/// Chat history pane: build_items, draw_history, spinner, word-wrap.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::AppState;
use crate::status::{IconCategory, Lifecycle};
use crate::transcript::{ChatEvent, Role};
use crate::ui::icon_glyph;

// ── Spinner ────────────────────────────────────────────────────────────────────

pub const SPINNER_GLYPHS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(tick: u32) -> &'static str {
    SPINNER_GLYPHS[(tick as usize) % SPINNER_GLYPHS.len()]
}

// ── Icon colour ────────────────────────────────────────────────────────────────

fn icon_color(icon: IconCategory) -> Color {
    match icon {
        IconCategory::Create => Color::Green,
        IconCategory::Edit => Color::Cyan,
        IconCategory::View => Color::Blue,
        IconCategory::Manage => Color::Yellow,
        IconCategory::DeleteFile | IconCategory::DeleteDirectory => Color::Red,
        IconCategory::Generic => Color::DarkGray,
    }
}

// ── History items builder ──────────────────────────────────────────────────────

pub fn build_items(state: &AppState, term_width: u16) -> Vec<ListItem<'static>> {
    let mut items: Vec<ListItem<'static>> = Vec::new();
    let wrap_width = (term_width as usize).saturating_sub(9).max(20);

    for entry in &state.entries {
        match entry {
            ChatEvent::Message { role, text } => {
                let (label, label_fg, text_fg) = match role {
                    Role::User => ("you  ", Color::Rgb(160, 140, 255), Color::Rgb(235, 232, 255)),
                    Role::Assistant => ("weave", Color::Rgb(0, 210, 210), Color::Rgb(210, 230, 255)),
                };
                let mut first = true;
                for src_line in text.lines() {
                    for w in wrap_text(src_line, wrap_width) {
                        if first {
                            first = false;
                            items.push(ListItem::new(Line::from(vec![
                                Span::raw("  "),
                                Span::styled(
                                    label.to_string(),
                                    Style::default().fg(label_fg).add_modifier(Modifier::BOLD),
                                ),
                                Span::raw("  "),
                                Span::styled(w, Style::default().fg(text_fg)),
                            ])));
                        } else {
                            items.push(ListItem::new(Line::from(vec![
                                Span::raw("         "),
                                Span::styled(w, Style::default().fg(text_fg)),
                            ])));
                        }
                    }
                }
                items.push(ListItem::new(Line::raw("")));
            }

            ChatEvent::Tool(inv) => {
                // Status is recomputed on every draw; the same invocation
                // renders differently as its state transitions.
                let status = inv.status();
                let (mark, mark_color, msg_color) = match status.lifecycle {
                    Lifecycle::InProgress => (
                        spinner_glyph(state.spinner_tick).to_string(),
                        Color::Cyan,
                        Color::Rgb(180, 220, 255),
                    ),
                    Lifecycle::Succeeded => {
                        ("✓".to_string(), Color::Rgb(0, 240, 120), Color::Rgb(200, 200, 220))
                    }
                    Lifecycle::Failed => ("✗".to_string(), Color::Red, Color::Rgb(230, 150, 150)),
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{mark} "), Style::default().fg(mark_color)),
                    Span::styled(
                        format!("{} ", icon_glyph(status.icon)),
                        Style::default().fg(icon_color(status.icon)),
                    ),
                    Span::styled(status.message, Style::default().fg(msg_color)),
                ])));
            }
        }
    }

    if !state.replay_done() && !state.entries.is_empty() {
        items.push(ListItem::new(Line::raw("")));
    }

    items
}

// ── Draw ───────────────────────────────────────────────────────────────────────

pub fn draw_history(f: &mut Frame, state: &AppState, area: Rect) {
    let all_items = build_items(state, area.width);
    let total = all_items.len();
    let visible = area.height as usize;

    let skip = if total > visible {
        (total - visible).saturating_sub(state.scroll)
    } else {
        0
    };

    let sliced: Vec<ListItem<'static>> = all_items.into_iter().skip(skip).collect();
    let list = List::new(sliced)
        .block(Block::default().style(Style::default().bg(Color::Rgb(8, 8, 14))));
    f.render_widget(list, area);
}

// ── Utilities ──────────────────────────────────────────────────────────────────

/// Word-wrap a single line of text to `max_width` columns (display width).
/// Splits on whitespace; a word wider than the line gets its own line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width == 0 {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current.clone());
            current = word.to_string();
            current_width = word_width;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_short_line_unchanged() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_wrap_text_splits_on_word_boundary() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_overlong_word_gets_own_line() {
        let lines = wrap_text("a reallyreallylongword b", 10);
        assert_eq!(
            lines,
            vec!["a".to_string(), "reallyreallylongword".to_string(), "b".to_string()]
        );
    }
}
