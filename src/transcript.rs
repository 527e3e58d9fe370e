/// Transcript loading and the built-in demo script.
///
/// A transcript is JSONL: one `ChatEvent` per line, either a role-tagged
/// message or a tool invocation in the upstream wire shape. The TUI replays
/// events in order; plain mode prints each tool's final status.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::status::{ToolInvocation, ToolState};

// ── Events ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Message { role: Role, text: String },
    Tool(ToolInvocation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Read a JSONL transcript. Blank lines are skipped; a malformed line fails
/// with its line number.
pub fn load(path: &Path) -> Result<Vec<ChatEvent>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading transcript {}", path.display()))?;
    let mut events = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event: ChatEvent = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: malformed transcript line", path.display(), i + 1))?;
        events.push(event);
    }
    Ok(events)
}

// ── Demo script ───────────────────────────────────────────────────────────────

fn tool(id: &str, name: &str, args: serde_json::Value, result: Option<&str>) -> ChatEvent {
    ChatEvent::Tool(ToolInvocation {
        id: id.to_string(),
        tool_name: name.to_string(),
        args: Some(args),
        state: ToolState::Done,
        result: result.map(|s| json!(s)),
    })
}

/// Built-in session used when no transcript file is given. Covers every
/// formatter branch, including a failed call and an unknown tool.
pub fn demo() -> Vec<ChatEvent> {
    vec![
        ChatEvent::Message {
            role: Role::User,
            text: "Build me a signup wizard with a progress stepper".to_string(),
        },
        ChatEvent::Message {
            role: Role::Assistant,
            text: "Starting with the app entrypoint, then the wizard steps.".to_string(),
        },
        tool(
            "demo-1",
            "str_replace_editor",
            json!({"command": "create", "path": "/App.jsx"}),
            Some("File created successfully"),
        ),
        tool(
            "demo-2",
            "str_replace_editor",
            json!({"command": "create", "path": "/components/WizardForm.jsx"}),
            Some("File created successfully"),
        ),
        tool(
            "demo-3",
            "str_replace_editor",
            json!({"command": "view", "path": "/components/WizardForm.jsx"}),
            Some("File content retrieved"),
        ),
        tool(
            "demo-4",
            "str_replace_editor",
            json!({"command": "str_replace", "path": "/components/WizardForm.jsx"}),
            Some("Replacement successful"),
        ),
        tool(
            "demo-5",
            "str_replace_editor",
            json!({"command": "insert", "path": "/App.jsx"}),
            Some("Content inserted"),
        ),
        ChatEvent::Message {
            role: Role::Assistant,
            text: "Cleaning up the scaffold files the template left behind.".to_string(),
        },
        tool(
            "demo-6",
            "file_manager",
            json!({"command": "rename", "path": "/components/old-stepper.jsx", "new_path": "/components/Stepper.jsx"}),
            Some("Renamed"),
        ),
        tool(
            "demo-7",
            "file_manager",
            json!({"command": "delete", "path": "/unused.js"}),
            Some("Deleted"),
        ),
        tool(
            "demo-8",
            "file_manager",
            json!({"command": "delete", "path": "/old-components"}),
            Some("Deleted"),
        ),
        tool(
            "demo-9",
            "str_replace_editor",
            json!({"command": "create", "path": "/components/steps/Review.jsx"}),
            Some("Error: File creation failed"),
        ),
        tool("demo-10", "web_search", json!({"query": "stepper patterns"}), Some("3 results")),
        ChatEvent::Message {
            role: Role::Assistant,
            text: "Done. The Review step failed to create; retry it from the form tab."
                .to_string(),
        },
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────
