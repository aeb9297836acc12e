//! Text projection of the board view
//!
//! Turns a `BoardView` into plain terminal text. Activity names, schedules
//! and participant identifiers are untrusted for layout purposes: they are
//! passed through `sanitize_inline` so an interpolated value cannot break
//! out of its single-line field.

use std::fmt::Write;

use super::model::{ActivityCard, BoardView};
use crate::utils::helpers::sanitize_inline;

/// Shown in place of the activity list when the roster fetch failed
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Shown on a card with no participants
pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet";

/// Render the full board as terminal text.
pub fn board_text(view: &BoardView) -> String {
    match view {
        BoardView::LoadFailed => format!("{}\n", LOAD_FAILED_NOTICE),
        BoardView::Loaded { cards, selector } => {
            let mut out = String::new();
            for card in cards {
                write_card(&mut out, card);
            }
            if !selector.is_empty() {
                let options: Vec<String> =
                    selector.iter().map(|name| sanitize_inline(name)).collect();
                let _ = writeln!(out, "Sign up for: {}", options.join(", "));
            }
            out
        }
    }
}

fn write_card(out: &mut String, card: &ActivityCard) {
    let _ = writeln!(out, "=== {} ===", sanitize_inline(&card.name));
    let _ = writeln!(out, "{}", sanitize_inline(&card.description));
    let _ = writeln!(out, "Schedule: {}", sanitize_inline(&card.schedule));
    let _ = writeln!(out, "Availability: {} spots left", card.spots_left);
    let _ = writeln!(out, "Participants:");
    if card.participants.is_empty() {
        let _ = writeln!(out, "  {}", NO_PARTICIPANTS_PLACEHOLDER);
    } else {
        for row in &card.participants {
            let _ = writeln!(
                out,
                "  [{}] {}",
                sanitize_inline(&row.initials),
                sanitize_inline(&row.email)
            );
        }
    }
    let _ = writeln!(out);
}
