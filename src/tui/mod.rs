/// Ratatui-based TUI for appweave.
///
/// Architecture:
///   single thread: crossterm `event::poll` with a 120 ms tick that drives
///   the spinner and the transcript replay; no async work exists.
///
/// Layout:
///   ┌────────────────────────────────────────────────┐
///   │  tab bar (1 line)                              │
///   ├────────────────────────────────────────────────┤
///   │  chat history or wizard form (Min(0))          │
///   ├────────────────────────────────────────────────┤
///   │  status bar (1 line)                           │
///   └────────────────────────────────────────────────┘
pub mod chat;
pub mod form;
pub mod render;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::status::ToolState;
use crate::transcript::ChatEvent;
use crate::wizard::{StepId, Theme, WizardState};

// ── Replay pacing (in 120 ms ticks) ───────────────────────────────────────────

/// Ticks between revealing consecutive transcript events.
const REVEAL_EVERY: u32 = 5;
/// Ticks a revealed tool call stays in progress before its recorded state
/// and result are applied.
const TOOL_SETTLE: u32 = 9;

// ── Tab ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chat,
    Form,
}

// ── AppState ──────────────────────────────────────────────────────────────────

pub struct AppState {
    pub tab: Tab,
    /// Full transcript, in order.
    pub script: Vec<ChatEvent>,
    /// Prefix of `script` revealed so far. Revealed tool calls are held
    /// in progress for `TOOL_SETTLE` ticks before settling to their
    /// recorded state; statuses are recomputed from these entries on
    /// every draw.
    pub entries: Vec<ChatEvent>,
    /// Index into `entries` of a tool call still settling, with the tick
    /// it was revealed on.
    pub settling: Option<(usize, u32)>,
    pub wizard: WizardState,
    pub spinner_tick: u32,
    /// Chat scroll offset, in lines from the bottom.
    pub scroll: usize,
}

impl AppState {
    pub fn new(script: Vec<ChatEvent>, start_on_form: bool) -> Self {
        Self {
            tab: if start_on_form { Tab::Form } else { Tab::Chat },
            script,
            entries: Vec::new(),
            settling: None,
            wizard: WizardState::new(),
            spinner_tick: 0,
            scroll: 0,
        }
    }

    pub fn replay_done(&self) -> bool {
        self.entries.len() == self.script.len() && self.settling.is_none()
    }

    /// Restart the replay from the top.
    pub fn restart(&mut self) {
        self.entries.clear();
        self.settling = None;
        self.scroll = 0;
        self.spinner_tick = 0;
    }

    /// Advance one animation tick: settle an in-progress tool call or
    /// reveal the next transcript event.
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);

        if let Some((idx, since)) = self.settling {
            if self.spinner_tick.wrapping_sub(since) >= TOOL_SETTLE {
                // Apply the recorded final state and result.
                self.entries[idx] = self.script[idx].clone();
                self.settling = None;
            }
            return;
        }

        if self.entries.len() < self.script.len() && self.spinner_tick % REVEAL_EVERY == 0 {
            let next = self.script[self.entries.len()].clone();
            match next {
                ChatEvent::Tool(mut inv) => {
                    inv.state = ToolState::PendingComplete;
                    inv.result = None;
                    self.entries.push(ChatEvent::Tool(inv));
                    self.settling = Some((self.entries.len() - 1, self.spinner_tick));
                }
                other => self.entries.push(other),
            }
            // New content: snap back to the bottom.
            self.scroll = 0;
        }
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

// ── Main TUI run loop ─────────────────────────────────────────────────────────

pub fn run(script: Vec<ChatEvent>, start_on_form: bool) -> Result<()> {
    let mut terminal = setup_terminal()?;

    // Panic hook restores the terminal before printing the panic
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        orig_hook(info);
    }));

    let result = event_loop(&mut terminal, script, start_on_form);

    restore_terminal(&mut terminal);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    script: Vec<ChatEvent>,
    start_on_form: bool,
) -> Result<()> {
    let mut state = AppState::new(script, start_on_form);

    terminal.draw(|f| render::draw_splash(f))?;
    std::thread::sleep(Duration::from_millis(900));
    terminal.draw(|f| render::draw(f, &state))?;

    loop {
        // ── Animation / replay tick ───────────────────────────────────────────
        if !event::poll(Duration::from_millis(120))? {
            state.tick();
            terminal.draw(|f| render::draw(f, &state))?;
            continue;
        }

        // ── Keyboard / resize events ──────────────────────────────────────────
        match event::read()? {
            Event::Key(key) => {
                if !handle_key(key, &mut state) {
                    break;
                }
            }
            Event::Resize(_, _) => {}
            _ => {}
        }
        terminal.draw(|f| render::draw(f, &state))?;
    }

    Ok(())
}

// ── Key handler ───────────────────────────────────────────────────────────────

/// Returns false when the app should exit.
fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Global bindings first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return false;
    }
    if key.code == KeyCode::Tab {
        state.tab = match state.tab {
            Tab::Chat => Tab::Form,
            Tab::Form => Tab::Chat,
        };
        return true;
    }

    match state.tab {
        Tab::Chat => handle_chat_key(key, state),
        Tab::Form => handle_form_key(key, state),
    }
}

fn handle_chat_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll = state.scroll.saturating_sub(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll = state.scroll.saturating_add(1);
        }
        KeyCode::PageDown => {
            state.scroll = state.scroll.saturating_sub(10);
        }
        KeyCode::PageUp => {
            state.scroll = state.scroll.saturating_add(10);
        }
        KeyCode::Char('r') => state.restart(),
        _ => {}
    }
    true
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) -> bool {
    let wizard = &mut state.wizard;

    // After submission the form is read-only
    if wizard.submitted {
        if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
            return false;
        }
        return true;
    }

    match key.code {
        KeyCode::Enter => wizard.next(),
        KeyCode::Esc => {
            if wizard.current == 0 {
                state.tab = Tab::Chat;
            } else {
                wizard.prev();
            }
        }
        KeyCode::Down => wizard.focus_next(),
        KeyCode::Up => wizard.focus_prev(),
        KeyCode::Backspace => wizard.pop_char(),
        KeyCode::Char(c) => {
            // Preferences has no text fields; letters are toggles there
            if wizard.step() == StepId::Preferences {
                match c {
                    't' => {
                        wizard.data.preferences.theme = match wizard.data.preferences.theme {
                            Theme::Light => Theme::Dark,
                            Theme::Dark => Theme::Light,
                        };
                    }
                    'n' => {
                        wizard.data.preferences.notifications =
                            !wizard.data.preferences.notifications;
                    }
                    's' => {
                        wizard.data.preferences.newsletter = !wizard.data.preferences.newsletter;
                    }
                    _ => {}
                }
            } else {
                wizard.push_char(c);
            }
        }
        _ => {}
    }
    true
}

// ── Tests ──────────────────────────────────────────────────────────────────────
