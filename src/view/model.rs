//! Board view model

use crate::models::Roster;
use crate::utils::helpers::initials;

/// The (activity, email) pair a remove control acts on.
///
/// Captured at render time, one binding per row, so a control stays correct
/// after any number of re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBinding {
    pub activity: String,
    pub email: String,
}

/// One participant row on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub initials: String,
    pub email: String,
    pub remove: RemoveBinding,
}

/// One rendered activity card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    /// Empty means the card shows the no-participants placeholder.
    pub participants: Vec<ParticipantRow>,
}

/// The complete rendered board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// Cards and the signup selector options, both in roster order.
    Loaded {
        cards: Vec<ActivityCard>,
        selector: Vec<String>,
    },
    /// The roster fetch failed; the list is replaced by a failure notice
    /// and the selector is empty.
    LoadFailed,
}

impl BoardView {
    /// Project a roster into a fresh view.
    ///
    /// Deterministic: the same roster always yields the same view, however
    /// many times it is rendered.
    pub fn render(roster: &Roster) -> Self {
        let mut cards = Vec::with_capacity(roster.len());
        let mut selector = Vec::with_capacity(roster.len());

        for (name, activity) in roster {
            let participants = activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    initials: initials(email),
                    email: email.clone(),
                    remove: RemoveBinding {
                        activity: name.clone(),
                        email: email.clone(),
                    },
                })
                .collect();

            cards.push(ActivityCard {
                name: name.clone(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants,
            });
            selector.push(name.clone());
        }

        BoardView::Loaded { cards, selector }
    }

    /// The failure placeholder view
    pub fn load_failed() -> Self {
        BoardView::LoadFailed
    }

    /// Rendered cards, empty when the last load failed
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            BoardView::Loaded { cards, .. } => cards,
            BoardView::LoadFailed => &[],
        }
    }

    /// Signup selector options, empty when the last load failed
    pub fn selector(&self) -> &[String] {
        match self {
            BoardView::Loaded { selector, .. } => selector,
            BoardView::LoadFailed => &[],
        }
    }
}
