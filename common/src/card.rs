//! View-state rules for a species card.
//!
//! The Leptos component holds these values in signals; the decisions about
//! what to show live here so they can be checked without a browser.

use std::fmt::Display;

use crate::species::Species;

/// Maximum number of characters of the description shown on a card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this species?";

/// Per-card state. Both fields start empty when a card mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    pub hovered: bool,
    pub author_name: String,
}

impl CardState {
    /// `Author: …` line, hidden until the display name has resolved.
    pub fn author_line(&self) -> Option<String> {
        (!self.author_name.is_empty()).then(|| format!("Author: {}", self.author_name))
    }
}

/// The delete button shows only while hovered, and only to the author.
pub fn delete_button_visible(species: &Species, current_user: &str, hovered: bool) -> bool {
    hovered && species.is_owned_by(current_user)
}

/// Card text for a description: the first [`DESCRIPTION_PREVIEW_CHARS`]
/// characters, trimmed, followed by `...`. A missing or empty description
/// renders as "".
pub fn description_preview(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => {
            let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", head.trim())
        }
        _ => String::new(),
    }
}

/// Whether a card should look up its author's display name at all.
pub fn should_fetch_author(author: &str) -> bool {
    !author.is_empty()
}

/// Whether a display name fetched for `requested` may still be shown.
///
/// `current` is the card's author key at the time the answer arrives, or
/// `None` once the card has been torn down.
pub fn accept_author_result(current: Option<&str>, requested: &str) -> bool {
    current == Some(requested)
}

/// What the card does once a delete request has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterDelete {
    /// Reload the whole page so the list is fetched again.
    Reload,
    /// Show a blocking alert and leave the page as it is.
    Alert(String),
}

pub fn after_delete<E: Display>(result: &Result<(), E>) -> AfterDelete {
    match result {
        Ok(()) => AfterDelete::Reload,
        Err(e) => AfterDelete::Alert(format!("Error deleting species: {e}")),
    }
}
