//! UI components for the monster scene.
//!
//! The illustration, the part info panel, and the mini-game components
//! rendered inside it.

mod monster;
pub use monster::Monster;

mod info_panel;
pub use info_panel::InfoPanel;

pub mod games;
