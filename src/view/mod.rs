//! View module
//!
//! The rendered board is a pure projection of the roster: the view model is
//! rebuilt from scratch on every refresh, and the text projection turns it
//! into terminal output. No incremental patching, so no stale view state
//! can survive a render.

pub mod model;
pub mod text;

// Re-export commonly used view types
pub use model::{ActivityCard, BoardView, ParticipantRow, RemoveBinding};
pub use text::{board_text, LOAD_FAILED_NOTICE, NO_PARTICIPANTS_PLACEHOLDER};
