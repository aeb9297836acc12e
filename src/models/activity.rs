//! Activity model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single activity as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant identifiers in backend order; order is preserved for display.
    pub participants: Vec<String>,
}

/// The full roster: activity name mapped to its state.
///
/// The backend returns a JSON object whose key order is the rendering order,
/// so an insertion-ordered map is required. A roster is rebuilt wholesale on
/// every fetch; nothing is cached across fetches.
pub type Roster = IndexMap<String, Activity>;

impl Activity {
    /// Remaining capacity. Clamped to zero so a backend that ever reports
    /// more participants than `max_participants` cannot surface a negative
    /// count.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}
