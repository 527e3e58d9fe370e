mod prompt;
mod status;
mod transcript;
mod tui;
mod ui;
mod wizard;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use transcript::{ChatEvent, Role};

#[derive(Parser, Debug)]
#[command(
    name = "appweave",
    about = "Terminal companion for an AI app-building assistant",
    long_about = None,
)]
struct Args {
    /// Transcript to replay (JSONL, one chat event per line). Omit for the
    /// built-in demo session.
    #[arg(env = "APPWEAVE_TRANSCRIPT")]
    transcript: Option<PathBuf>,

    /// Start on the onboarding form tab
    #[arg(long)]
    form: bool,

    /// Print final tool statuses to stdout instead of opening the TUI
    #[arg(long)]
    plain: bool,

    /// Print the generation system prompt and exit
    #[arg(long)]
    prompt: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ── --prompt ──────────────────────────────────────────────────────────────
    if args.prompt {
        print!("{}", prompt::GENERATION_PROMPT);
        return Ok(());
    }

    let events = match &args.transcript {
        Some(path) => transcript::load(path)?,
        None => transcript::demo(),
    };

    // ── --plain ───────────────────────────────────────────────────────────────
    if args.plain {
        print_plain(&events);
        return Ok(());
    }

    tui::run(events, args.form)
}

/// One line per event, no terminal takeover. Useful for piping a recorded
/// session through grep.
fn print_plain(events: &[ChatEvent]) {
    for event in events {
        match event {
            ChatEvent::Message { role, text } => {
                let label = match role {
                    Role::User => "you",
                    Role::Assistant => "weave",
                };
                println!("{label:>6}  {text}");
            }
            ChatEvent::Tool(inv) => {
                let s = inv.status();
                println!(
                    "        {} {} {}",
                    ui::lifecycle_mark(s.lifecycle),
                    ui::icon_glyph(s.icon),
                    s.message
                );
            }
        }
    }
}
