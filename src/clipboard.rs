//! Clipboard export.
//!
//! The writer is a capability trait so the dispatch logic can be exercised
//! without a windowing system. The production implementation goes through
//! `arboard`; a denied or unavailable clipboard comes back as an error the
//! app turns into a transient status message.

use anyhow::Result;

use crate::mood::Mood;

/// Write-only access to the system clipboard
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Format the current quote for clipboard export
pub fn format_payload(mood: Mood, quote: &str) -> String {
    format!("{} mood:\n\"{}\"", mood.label(), quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_label_and_quoted_text() {
        let payload = format_payload(Mood::Savage, "Know your worth.");
        assert_eq!(payload, "Savage mood:\n\"Know your worth.\"");
    }

    #[test]
    fn payload_uses_display_label_not_key() {
        assert!(format_payload(Mood::Istarii, "x").starts_with("Istarii mood:"));
    }
}
