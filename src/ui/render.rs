use colored::*;

use crate::models::{Notification, NotificationLevel, MAX_PROMPT_CHARS};
use crate::workflow::StudioState;

pub const IDLE_CAPTION: &str = "Generate image 🎨";
pub const BUSY_CAPTION: &str = "Generating image...";
pub const PROMPT_PLACEHOLDER: &str = "e.g. 'киберпанк ящерица'";

pub fn submit_caption(state: &StudioState) -> &'static str {
    if state.is_loading {
        BUSY_CAPTION
    } else {
        IDLE_CAPTION
    }
}

/// Plain-text panel for the current state.
pub fn render_state(state: &StudioState) -> String {
    let mut out = String::new();

    let prompt = if state.prompt.as_str().is_empty() {
        PROMPT_PLACEHOLDER.to_string()
    } else {
        state.prompt.to_string()
    };
    out.push_str(&format!(
        "Prompt ({}/{}): {}\n",
        state.prompt.as_str().chars().count(),
        MAX_PROMPT_CHARS,
        prompt
    ));
    out.push_str(&format!("Steps: {}\n", state.steps));

    let disabled = if state.is_loading { " (disabled)" } else { "" };
    out.push_str(&format!("[ {} ]{}\n", submit_caption(state), disabled));

    if let Some(error) = &state.error_message {
        out.push_str(&format!("Error: {}\n", error));
    }

    if let Some(image) = &state.image {
        let uri = image.data_uri();
        let preview: String = uri.chars().take(48).collect();
        out.push_str(&format!(
            "Image: {} base64 chars, {}...\n",
            image.data.len(),
            preview
        ));
        out.push_str("[ Save image 💾 ]  use /save [DIR]\n");
    }

    out
}

pub fn render_notification(notification: &Notification) -> String {
    let time = notification.created_at.format("%H:%M:%S").to_string();
    let (emoji, color) = match notification.level {
        NotificationLevel::Info => ("💡", Color::Cyan),
        NotificationLevel::Success => ("✅", Color::Green),
        NotificationLevel::Error => ("❌", Color::Red),
    };
    format!(
        "{} {} {}",
        time.bright_black(),
        emoji,
        notification.message.color(color).bold()
    )
}
