//! Refactory domain - the rules of the monster-refactoring game.
//!
//! A character assembled from five damaged parts is repaired one part at a
//! time by winning the mini-challenge bound to that part. This crate owns the
//! whole rule set: part lifecycle, overlay selection, the three challenge
//! archetypes behind one guess contract, the heal transition, and the static
//! content catalog. It is deliberately free of UI, async, and RNG
//! dependencies; anything platform-flavoured (timers, randomness) is injected
//! by the caller.

pub mod challenge;
pub mod content;
pub mod error;
pub mod events;
pub mod game;
pub mod ids;
pub mod part;

pub use challenge::{
    ArchetypeSession, AssemblySession, ChallengeKind, ChallengeSession, Guess, GuessOutcome,
    MatchingSession, QuizFeedback, QuizSession,
};
pub use content::{
    challenge_spec, part_content, AssemblySpec, AssemblyStep, CardId, CardKind, ChallengeSpec,
    InfoPoint, MatchingCard, MatchingSpec, PairId, PartContent, PartIcon, QuizOption,
    QuizPresentation, QuizRound, QuizSpec, StepId,
};
pub use error::ContentError;
pub use events::GameEvent;
pub use game::{Game, SubmitReport, HEAL_TRANSITION_MS};
pub use ids::SessionId;
pub use part::{PartId, PartLifecycle};
