//! Raycast deep links

use crate::record::{Detection, Payload};

use super::markdown_link;

/// `[Raycast Note|Raycast AI|Raycast](original)`; note wins over AI chat
pub fn render(detection: &Detection) -> String {
    let Payload::AppDeepLink {
        is_ai_chat,
        is_note,
    } = detection.payload
    else {
        return detection.original_input.clone();
    };

    let label = if is_note {
        "Raycast Note"
    } else if is_ai_chat {
        "Raycast AI"
    } else {
        "Raycast"
    };
    markdown_link(label, &detection.original_input)
}
