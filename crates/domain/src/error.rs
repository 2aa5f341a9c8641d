//! Content integrity errors.
//!
//! Challenge data is validated eagerly when a session is constructed; any of
//! these conditions would make a challenge unwinnable or ambiguous, so
//! construction aborts instead of letting the session run.

use thiserror::Error;

use crate::content::{CardId, PairId, StepId};

/// A defect in static challenge data, fatal at session construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A challenge with no rounds, steps, or cards would be born won.
    #[error("challenge '{title}' has no content")]
    EmptyChallenge { title: &'static str },

    /// Quiz round with no option marked correct.
    #[error("quiz round {round} has no correct option")]
    NoCorrectOption { round: usize },

    /// Quiz round with more than one option marked correct.
    #[error("quiz round {round} has {count} options marked correct, expected exactly 1")]
    MultipleCorrectOptions { round: usize, count: usize },

    /// Two assembly steps share the same identifier.
    #[error("assembly step id {step} is used more than once")]
    DuplicateStepId { step: StepId },

    /// Two assembly steps target the same position.
    #[error("assembly target position {position} is used more than once")]
    DuplicatePosition { position: u8 },

    /// No assembly step targets this position, leaving a hole in 1..=N.
    #[error("no assembly step targets position {position}")]
    MissingPosition { position: u8 },

    /// Two matching cards share the same identifier.
    #[error("matching card id {card} is used more than once")]
    DuplicateCardId { card: CardId },

    /// A matching pair does not consist of exactly two cards.
    #[error("matching pair {pair} has {count} cards, expected exactly 2")]
    PairCardCount { pair: PairId, count: usize },
}
