/// Tool status formatting: maps a tool invocation record (name + args +
/// lifecycle state) to a human-readable status line and icon category.
///
/// Pure and total: no combination of missing args, missing path, missing
/// command, or non-string result may panic. The rendering layer decides
/// glyphs and colours; this module only classifies.
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Wire types ────────────────────────────────────────────────────────────────

/// Execution lifecycle of a tool call as reported by the transport.
/// Wire tags match the upstream chat protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolState {
    /// Still streaming in; arguments may be incomplete.
    #[serde(rename = "partial-call")]
    PendingPartial,
    /// Fully specified, not yet executed.
    #[serde(rename = "call")]
    PendingComplete,
    /// Execution finished; `result` is attached.
    #[serde(rename = "result")]
    Done,
}

/// A single tool call as it arrives from the assistant transport.
/// Read-only input: the formatter never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    #[serde(rename = "toolCallId", default)]
    pub id: String,
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Untyped argument mapping. Absent is treated as empty.
    #[serde(default)]
    pub args: Option<Value>,
    pub state: ToolState,
    /// Only meaningful when `state == Done`; ignored otherwise.
    #[serde(default)]
    pub result: Option<Value>,
}

// ── Display classification ────────────────────────────────────────────────────

/// Closed set of icon slots the rendering layer maps to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Create,
    Edit,
    View,
    Manage,
    DeleteFile,
    DeleteDirectory,
    Generic,
}

/// Derived per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    InProgress,
    Succeeded,
    Failed,
}

/// What to show for one tool invocation. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub message: String,
    pub icon: IconCategory,
    pub lifecycle: Lifecycle,
}

// ── Path helper ───────────────────────────────────────────────────────────────

/// Last path segment with leading slashes stripped; `"file"` when the path
/// is missing or empty. `"///App.jsx"` → `"App.jsx"`, already-bare names
/// pass through unchanged.
pub fn file_name(path: Option<&str>) -> String {
    let Some(path) = path else {
        return "file".to_string();
    };
    let normalized = path.trim_start_matches('/');
    let last = normalized.rsplit('/').next().unwrap_or(normalized);
    if last.is_empty() {
        "file".to_string()
    } else {
        last.to_string()
    }
}

/// Look up a string-valued argument, tolerating absent args and non-object
/// args values.
fn arg_str<'a>(args: Option<&'a Value>, key: &str) -> Option<&'a str> {
    args?.get(key)?.as_str()
}

// ── Formatter ─────────────────────────────────────────────────────────────────

impl ToolInvocation {
    /// Compute the display status for this invocation.
    pub fn status(&self) -> StatusDisplay {
        let (base, icon) = self.base_message();
        let lifecycle = self.lifecycle();
        let message = match lifecycle {
            Lifecycle::Failed => format!("{base} (failed)"),
            _ => base,
        };
        StatusDisplay { message, icon, lifecycle }
    }

    /// Base message + icon, independent of lifecycle state.
    fn base_message(&self) -> (String, IconCategory) {
        let args = self.args.as_ref();
        match self.tool_name.as_str() {
            "str_replace_editor" => {
                let name = file_name(arg_str(args, "path"));
                match arg_str(args, "command") {
                    Some("create") => (format!("Creating {name}"), IconCategory::Create),
                    Some("str_replace") => (format!("Editing {name}"), IconCategory::Edit),
                    Some("view") => (format!("Viewing {name}"), IconCategory::View),
                    Some("insert") => (format!("Adding content to {name}"), IconCategory::Edit),
                    _ => (format!("Working with {name}"), IconCategory::Generic),
                }
            }
            "file_manager" => {
                let name = file_name(arg_str(args, "path"));
                match arg_str(args, "command") {
                    Some("rename") => match arg_str(args, "new_path") {
                        Some(new_path) if !new_path.is_empty() => {
                            let new_name = file_name(Some(new_path));
                            (format!("Renaming {name} → {new_name}"), IconCategory::Edit)
                        }
                        _ => (format!("Renaming {name}"), IconCategory::Edit),
                    },
                    Some("delete") => {
                        // Extensionless names are assumed to be directories.
                        // Approximate on purpose: matches upstream behaviour.
                        let is_directory = !name.contains('.') || name.ends_with('/');
                        let icon = if is_directory {
                            IconCategory::DeleteDirectory
                        } else {
                            IconCategory::DeleteFile
                        };
                        (format!("Deleting {name}"), icon)
                    }
                    _ => (format!("Managing {name}"), IconCategory::Generic),
                }
            }
            // Unknown tools show their raw name.
            other => (other.to_string(), IconCategory::Generic),
        }
    }

    fn lifecycle(&self) -> Lifecycle {
        match self.state {
            ToolState::PendingPartial | ToolState::PendingComplete => Lifecycle::InProgress,
            ToolState::Done => {
                // Only textual results are inspected for the error substring.
                let failed = self
                    .result
                    .as_ref()
                    .and_then(|v| v.as_str())
                    .is_some_and(|s| s.to_lowercase().contains("error"));
                if failed { Lifecycle::Failed } else { Lifecycle::Succeeded }
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(tool: &str, args: Value, state: ToolState, result: Option<Value>) -> ToolInvocation {
        ToolInvocation {
            id: "test".to_string(),
            tool_name: tool.to_string(),
            args: Some(args),
            state,
            result,
        }
    }

    fn done(tool: &str, args: Value, result: Value) -> ToolInvocation {
        call(tool, args, ToolState::Done, Some(result))
    }

    // ── file_name ───────────────────────────────────────────────────────────────

    #[test]
    fn test_file_name_missing() {
        assert_eq!(file_name(None), "file");
    }

    #[test]
    fn test_file_name_empty() {
        assert_eq!(file_name(Some("")), "file");
    }

    #[test]
    fn test_file_name_bare_is_idempotent() {
        assert_eq!(file_name(Some("App.jsx")), "App.jsx");
    }

    #[test]
    fn test_file_name_leading_slashes() {
        assert_eq!(file_name(Some("/App.jsx")), "App.jsx");
        assert_eq!(file_name(Some("///App.jsx")), "App.jsx");
    }

    #[test]
    fn test_file_name_nested_path() {
        assert_eq!(file_name(Some("/src/components/ui/Button.tsx")), "Button.tsx");
    }

    #[test]
    fn test_file_name_only_slashes() {
        assert_eq!(file_name(Some("///")), "file");
    }

    // ── str_replace_editor ──────────────────────────────────────────────────────

    #[test]
    fn test_create_command() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "create", "path": "/components/Button.jsx"}),
            json!("File created successfully"),
        );
        let s = inv.status();
        assert_eq!(s.message, "Creating Button.jsx");
        assert_eq!(s.icon, IconCategory::Create);
        assert_eq!(s.lifecycle, Lifecycle::Succeeded);
    }

    #[test]
    fn test_str_replace_command() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "str_replace", "path": "/App.jsx"}),
            json!("Replacement successful"),
        );
        assert_eq!(inv.status().message, "Editing App.jsx");
        assert_eq!(inv.status().icon, IconCategory::Edit);
    }

    #[test]
    fn test_view_command() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "view", "path": "/utils/helpers.js"}),
            json!("File content retrieved"),
        );
        assert_eq!(inv.status().message, "Viewing helpers.js");
        assert_eq!(inv.status().icon, IconCategory::View);
    }

    #[test]
    fn test_insert_command() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "insert", "path": "/components/Card.tsx"}),
            json!("Content inserted"),
        );
        assert_eq!(inv.status().message, "Adding content to Card.tsx");
        assert_eq!(inv.status().icon, IconCategory::Edit);
    }

    #[test]
    fn test_unknown_editor_command() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "unknown", "path": "/test.js"}),
            json!("Some result"),
        );
        assert_eq!(inv.status().message, "Working with test.js");
        assert_eq!(inv.status().icon, IconCategory::Generic);
    }

    #[test]
    fn test_missing_editor_command() {
        let inv = done("str_replace_editor", json!({"path": "/test.js"}), json!("ok"));
        assert_eq!(inv.status().message, "Working with test.js");
    }

    #[test]
    fn test_editor_missing_path() {
        let inv = done("str_replace_editor", json!({"command": "create"}), json!("ok"));
        assert_eq!(inv.status().message, "Creating file");
    }

    // ── file_manager ────────────────────────────────────────────────────────────

    #[test]
    fn test_rename_with_new_path() {
        let inv = done(
            "file_manager",
            json!({"command": "rename", "path": "/old-component.jsx", "new_path": "/NewComponent.jsx"}),
            json!({"success": true}),
        );
        let s = inv.status();
        assert_eq!(s.message, "Renaming old-component.jsx → NewComponent.jsx");
        assert_eq!(s.icon, IconCategory::Edit);
    }

    #[test]
    fn test_rename_without_new_path() {
        let inv = done(
            "file_manager",
            json!({"command": "rename", "path": "/component.jsx"}),
            json!({"success": true}),
        );
        assert_eq!(inv.status().message, "Renaming component.jsx");
        assert_eq!(inv.status().icon, IconCategory::Edit);
    }

    #[test]
    fn test_rename_empty_new_path() {
        let inv = done(
            "file_manager",
            json!({"command": "rename", "path": "/component.jsx", "new_path": ""}),
            json!({"success": true}),
        );
        assert_eq!(inv.status().message, "Renaming component.jsx");
    }

    #[test]
    fn test_delete_file() {
        let inv = done(
            "file_manager",
            json!({"command": "delete", "path": "/unused.js"}),
            json!({"success": true}),
        );
        let s = inv.status();
        assert_eq!(s.message, "Deleting unused.js");
        assert_eq!(s.icon, IconCategory::DeleteFile);
    }

    #[test]
    fn test_delete_directory_no_extension() {
        let inv = done(
            "file_manager",
            json!({"command": "delete", "path": "/old-components"}),
            json!({"success": true}),
        );
        let s = inv.status();
        assert_eq!(s.message, "Deleting old-components");
        assert_eq!(s.icon, IconCategory::DeleteDirectory);
    }

    #[test]
    fn test_delete_missing_path_classified_as_directory() {
        // Fallback name "file" has no dot, so the heuristic says directory.
        let inv = done("file_manager", json!({"command": "delete"}), json!("ok"));
        let s = inv.status();
        assert_eq!(s.message, "Deleting file");
        assert_eq!(s.icon, IconCategory::DeleteDirectory);
    }

    #[test]
    fn test_unknown_manager_command() {
        let inv = done(
            "file_manager",
            json!({"command": "unknown", "path": "/test.js"}),
            json!("Some result"),
        );
        assert_eq!(inv.status().message, "Managing test.js");
        assert_eq!(inv.status().icon, IconCategory::Generic);
    }

    #[test]
    fn test_missing_manager_command() {
        let inv = done("file_manager", json!({"path": "/notes.txt"}), json!("ok"));
        assert_eq!(inv.status().message, "Managing notes.txt");
    }

    // ── unknown tools ───────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_tool_shows_raw_name() {
        let inv = done("web_search", json!({"query": "ratatui"}), json!("results"));
        let s = inv.status();
        assert_eq!(s.message, "web_search");
        assert_eq!(s.icon, IconCategory::Generic);
    }

    #[test]
    fn test_unknown_tool_with_null_args() {
        let inv = ToolInvocation {
            id: "t".to_string(),
            tool_name: "mystery_tool".to_string(),
            args: None,
            state: ToolState::Done,
            result: Some(json!("done")),
        };
        assert_eq!(inv.status().message, "mystery_tool");
    }

    // ── missing / malformed args never panic ────────────────────────────────────

    #[test]
    fn test_known_tools_with_null_args() {
        for tool in ["str_replace_editor", "file_manager", "anything_else"] {
            let inv = ToolInvocation {
                id: "t".to_string(),
                tool_name: tool.to_string(),
                args: None,
                state: ToolState::PendingComplete,
                result: None,
            };
            let s = inv.status();
            assert!(!s.message.is_empty());
            assert_eq!(s.lifecycle, Lifecycle::InProgress);
        }
    }

    #[test]
    fn test_known_tools_with_empty_args() {
        let inv = call("str_replace_editor", json!({}), ToolState::Done, Some(json!("ok")));
        assert_eq!(inv.status().message, "Working with file");

        let inv = call("file_manager", json!({}), ToolState::Done, Some(json!("ok")));
        assert_eq!(inv.status().message, "Managing file");
    }

    #[test]
    fn test_non_object_args() {
        let inv = call("str_replace_editor", json!("not an object"), ToolState::Done, None);
        assert_eq!(inv.status().message, "Working with file");
    }

    #[test]
    fn test_non_string_command() {
        let inv = call(
            "str_replace_editor",
            json!({"command": 42, "path": "/a.js"}),
            ToolState::Done,
            None,
        );
        assert_eq!(inv.status().message, "Working with a.js");
    }

    // ── lifecycle ───────────────────────────────────────────────────────────────

    #[test]
    fn test_pending_states_are_in_progress() {
        for state in [ToolState::PendingPartial, ToolState::PendingComplete] {
            let inv = call(
                "str_replace_editor",
                json!({"command": "create", "path": "/App.jsx"}),
                state,
                None,
            );
            let s = inv.status();
            assert_eq!(s.lifecycle, Lifecycle::InProgress);
            // State changes lifecycle only, never the base message.
            assert_eq!(s.message, "Creating App.jsx");
        }
    }

    #[test]
    fn test_pending_ignores_attached_result() {
        let inv = call(
            "str_replace_editor",
            json!({"command": "create", "path": "/App.jsx"}),
            ToolState::PendingComplete,
            Some(json!("Error: should be ignored")),
        );
        assert_eq!(inv.status().lifecycle, Lifecycle::InProgress);
        assert_eq!(inv.status().message, "Creating App.jsx");
    }

    #[test]
    fn test_error_result_fails() {
        let inv = done(
            "str_replace_editor",
            json!({"command": "create", "path": "/App.jsx"}),
            json!("Error: File creation failed"),
        );
        let s = inv.status();
        assert_eq!(s.lifecycle, Lifecycle::Failed);
        assert!(s.message.ends_with(" (failed)"));
        assert_eq!(s.message, "Creating App.jsx (failed)");
        // Icon is unchanged by failure.
        assert_eq!(s.icon, IconCategory::Create);
    }

    #[test]
    fn test_error_match_is_case_insensitive() {
        let inv = done("web_search", json!({}), json!("ERROR: rate limited"));
        assert_eq!(inv.status().lifecycle, Lifecycle::Failed);
        assert_eq!(inv.status().message, "web_search (failed)");
    }

    #[test]
    fn test_error_substring_mid_result() {
        let inv = done("web_search", json!({}), json!("finished with 2 errors"));
        assert_eq!(inv.status().lifecycle, Lifecycle::Failed);
    }

    #[test]
    fn test_non_string_result_never_fails() {
        let inv = done(
            "file_manager",
            json!({"command": "delete", "path": "/a.js"}),
            json!({"error": "structured errors are not inspected"}),
        );
        assert_eq!(inv.status().lifecycle, Lifecycle::Succeeded);
    }

    #[test]
    fn test_done_without_result_succeeds() {
        let inv = call(
            "file_manager",
            json!({"command": "delete", "path": "/a.js"}),
            ToolState::Done,
            None,
        );
        assert_eq!(inv.status().lifecycle, Lifecycle::Succeeded);
    }

    // ── wire format ─────────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_wire_record() {
        let inv: ToolInvocation = serde_json::from_str(
            r#"{
                "toolCallId": "call-7",
                "toolName": "str_replace_editor",
                "args": {"command": "view", "path": "/src/App.jsx"},
                "state": "partial-call"
            }"#,
        )
        .unwrap();
        assert_eq!(inv.id, "call-7");
        assert_eq!(inv.state, ToolState::PendingPartial);
        assert!(inv.result.is_none());
        assert_eq!(inv.status().message, "Viewing App.jsx");
    }

    #[test]
    fn test_state_wire_tags() {
        assert_eq!(
            serde_json::to_string(&ToolState::PendingPartial).unwrap(),
            "\"partial-call\""
        );
        assert_eq!(serde_json::to_string(&ToolState::PendingComplete).unwrap(), "\"call\"");
        assert_eq!(serde_json::to_string(&ToolState::Done).unwrap(), "\"result\"");
    }
}
