//! Message formatting utilities for client display.

use campus_entry_server::infrastructure::dto::websocket::GuestStatusUpdateMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    pub fn format_registered(department_id: u32) -> String {
        format!(
            "\n============================================================\n\
             Watching department {} for guest decisions. Press Ctrl+C to exit.\n\
             ============================================================\n",
            department_id
        )
    }

    /// Format a guest decision notification
    ///
    /// The dashboard should re-fetch the guest list after this; the
    /// notification itself is only a hint.
    pub fn format_guest_status_update(update: &GuestStatusUpdateMessage) -> String {
        let mark = match update.status.as_str() {
            "Approved" => "✔",
            "Rejected" => "✘",
            _ => "•",
        };
        format!(
            "{} Guest '{}' was {} on {}\n",
            mark,
            update.guest_name,
            update.status.to_lowercase(),
            update.date
        )
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("← Received: {}\n", text)
    }
}
