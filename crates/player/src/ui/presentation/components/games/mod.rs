//! Mini-game components, one per challenge archetype.
//!
//! Each component reads its session snapshot from the shared game state,
//! submits guesses through it, and schedules its own feedback clears. The
//! pacing of those clears differs per game; the timings live with the
//! component that owns the look.

mod quiz;
pub use quiz::QuizGame;

mod assembly;
pub use assembly::AssemblyGame;

mod matching;
pub use matching::MatchingGame;
