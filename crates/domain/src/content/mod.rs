//! Static content catalog.
//!
//! Everything the game displays or asks is fixed data: per-part descriptive
//! text for the detail overlay, and the challenge definition bound to each
//! part. The catalog is immutable and consumed read-only; sessions borrow
//! `&'static` references into it rather than copying.
//!
//! Integrity of the challenge data (exactly one correct option per quiz
//! round, complete 1..=N assembly positions, every card paired) is *not*
//! checked here; the session constructors in [`crate::challenge`] validate it
//! and refuse to build a session from malformed data.

mod catalog;
mod challenges;

use std::fmt;

use serde::Serialize;

use crate::part::PartId;

pub use catalog::part_content;
pub use challenges::challenge_spec;

// =============================================================================
// Detail overlay content
// =============================================================================

/// One expandable row in the detail overlay's takeaway list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoPoint {
    pub summary: &'static str,
    pub detail: &'static str,
}

/// Icon tag shown next to a part's title; the renderer maps it to artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PartIcon {
    Brain,
    Heart,
    Wrench,
    Shield,
    Footprints,
}

/// Descriptive data for one part, keyed by [`PartId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartContent {
    pub part: PartId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: PartIcon,
    pub points: &'static [InfoPoint],
}

// =============================================================================
// Challenge item identifiers
// =============================================================================

/// Identifier of one assembly step. Distinct from the step's target
/// position; the mapping between the two is content data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StepId(u8);

impl StepId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one card in a matching deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(u8);

impl CardId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the pair a matching card belongs to. Correctness travels
/// with the card through any shuffle; it is never derived from deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairId(u8);

impl PairId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Challenge definitions
// =============================================================================

/// One answer option in a quiz round. `correct` is a per-option mark so the
/// session constructor can verify each round has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub label: &'static str,
    pub correct: bool,
    /// Rationale revealed with the answer, where the content provides one.
    pub explanation: Option<&'static str>,
}

/// One question with its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizRound {
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

/// Visual treatment of a quiz in the challenge view. Three of the five
/// challenges share the quiz state machine and differ only in dressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizPresentation {
    /// Log-viewer chrome; options are stack frames.
    StackFrames,
    /// Card-style options with revealed explanations.
    StrategyCards,
    /// Terminal chrome; options are shell commands.
    GitConsole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSpec {
    pub title: &'static str,
    pub tagline: &'static str,
    pub presentation: QuizPresentation,
    pub rounds: &'static [QuizRound],
}

/// One step in an ordered-assembly challenge. `position` is where the step
/// belongs (1-based); the order of steps in [`AssemblySpec::steps`] is the
/// scrambled presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssemblyStep {
    pub id: StepId,
    pub label: &'static str,
    pub position: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssemblySpec {
    pub title: &'static str,
    pub tagline: &'static str,
    pub steps: &'static [AssemblyStep],
}

impl AssemblySpec {
    pub fn step(&self, id: StepId) -> Option<&'static AssemblyStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Which face of a pair a card shows; only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    Concept,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchingCard {
    pub id: CardId,
    pub pair: PairId,
    pub label: &'static str,
    pub kind: CardKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchingSpec {
    pub title: &'static str,
    pub tagline: &'static str,
    pub cards: &'static [MatchingCard],
}

impl MatchingSpec {
    pub fn card(&self, id: CardId) -> Option<&'static MatchingCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn pair_count(&self) -> usize {
        let mut pairs: Vec<PairId> = self.cards.iter().map(|c| c.pair).collect();
        pairs.sort_unstable();
        pairs.dedup();
        pairs.len()
    }
}

/// The challenge definition bound to a part, tagged by archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeSpec {
    Quiz(&'static QuizSpec),
    Assembly(&'static AssemblySpec),
    Matching(&'static MatchingSpec),
}

impl ChallengeSpec {
    /// Display title of the challenge.
    pub fn title(&self) -> &'static str {
        match self {
            ChallengeSpec::Quiz(spec) => spec.title,
            ChallengeSpec::Assembly(spec) => spec.title,
            ChallengeSpec::Matching(spec) => spec.title,
        }
    }
}
