/// UI helpers shared between the TUI and plain-stdout modes.
use crate::status::{IconCategory, Lifecycle};

// ── Icon glyphs ───────────────────────────────────────────────────────────────

pub fn icon_glyph(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Create          => "●",
        IconCategory::Edit            => "◈",
        IconCategory::View            => "○",
        IconCategory::Manage          => "⚙",
        IconCategory::DeleteFile      => "✕",
        IconCategory::DeleteDirectory => "⌦",
        IconCategory::Generic         => "≡",
    }
}

// ── Lifecycle marks ───────────────────────────────────────────────────────────

/// Terminal-friendly completion mark; the TUI substitutes a spinner frame
/// while a call is in progress.
pub fn lifecycle_mark(lifecycle: Lifecycle) -> &'static str {
    match lifecycle {
        Lifecycle::InProgress => "…",
        Lifecycle::Succeeded  => "✓",
        Lifecycle::Failed     => "✗",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        let all = [
            IconCategory::Create,
            IconCategory::Edit,
            IconCategory::View,
            IconCategory::Manage,
            IconCategory::DeleteFile,
            IconCategory::DeleteDirectory,
            IconCategory::Generic,
        ];
        for icon in all {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
