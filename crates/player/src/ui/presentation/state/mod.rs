//! Signal-backed state containers for the presentation layer

mod game_state;

pub use game_state::GameState;

use dioxus::prelude::*;

/// Hook to access the game state from Dioxus context
pub fn use_game_state() -> GameState {
    use_context::<GameState>()
}
