//! Challenge engines and the uniform session facade over them.
//!
//! Three archetypes implement the same contract: a guess goes in, an
//! outcome comes out, and a session that reports won stays won. The
//! facade hides which engine is live so the orchestrator never matches
//! on archetype.

mod assembly;
mod matching;
mod quiz;

pub use assembly::AssemblySession;
pub use matching::MatchingSession;
pub use quiz::{QuizFeedback, QuizSession};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{challenge_spec, CardId, ChallengeSpec, StepId};
use crate::error::ContentError;
use crate::ids::SessionId;
use crate::part::PartId;

/// Which archetype a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeKind {
    Quiz,
    Assembly,
    Matching,
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ChallengeKind::Quiz => "quiz",
            ChallengeKind::Assembly => "assembly",
            ChallengeKind::Matching => "matching",
        };
        write!(f, "{kind}")
    }
}

/// One player interaction, addressed to whichever engine is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Guess {
    /// Option index within the current quiz round.
    Choice(usize),
    /// Assembly step selected from the pool.
    Step(StepId),
    /// Matching card flipped on the table.
    Card(CardId),
}

/// What a submitted guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessOutcome {
    /// The guess advanced the challenge.
    Accepted,
    /// The guess was wrong; recorded as feedback, progress kept.
    Rejected,
    /// The session was already won when the guess arrived.
    AlreadyResolved,
    /// The guess did not address anything actionable and changed nothing.
    Ignored,
}

/// The engine behind a session, for presentation code that renders each
/// archetype differently.
#[derive(Debug, Clone)]
pub enum ArchetypeSession {
    Quiz(QuizSession),
    Assembly(AssemblySession),
    Matching(MatchingSession),
}

/// One attempt at one part's challenge.
///
/// Constructed through [`ChallengeSession::for_part`], which validates
/// the bound content and shuffles decks with the injected randomness.
#[derive(Debug, Clone)]
pub struct ChallengeSession {
    id: SessionId,
    part: PartId,
    archetype: ArchetypeSession,
}

impl ChallengeSession {
    /// Starts the challenge bound to `part`. `rand_index` is consulted
    /// only by archetypes that shuffle.
    pub fn for_part(
        part: PartId,
        rand_index: &mut dyn FnMut(usize) -> usize,
    ) -> Result<Self, ContentError> {
        let archetype = match challenge_spec(part) {
            ChallengeSpec::Quiz(spec) => ArchetypeSession::Quiz(QuizSession::new(spec)?),
            ChallengeSpec::Assembly(spec) => {
                ArchetypeSession::Assembly(AssemblySession::new(spec)?)
            }
            ChallengeSpec::Matching(spec) => {
                ArchetypeSession::Matching(MatchingSession::new(spec, rand_index)?)
            }
        };
        Ok(Self {
            id: SessionId::new(),
            part,
            archetype,
        })
    }

    /// Routes a guess to the live engine. A guess of the wrong shape for
    /// the live archetype is ignored.
    pub fn submit(&mut self, guess: Guess) -> GuessOutcome {
        match (&mut self.archetype, guess) {
            (ArchetypeSession::Quiz(session), Guess::Choice(option)) => session.choose(option),
            (ArchetypeSession::Assembly(session), Guess::Step(step)) => session.place(step),
            (ArchetypeSession::Matching(session), Guess::Card(card)) => session.pick(card),
            _ => GuessOutcome::Ignored,
        }
    }

    /// Clears transient wrong-guess feedback in the live engine.
    pub fn clear_feedback(&mut self) {
        match &mut self.archetype {
            ArchetypeSession::Quiz(session) => session.clear_feedback(),
            ArchetypeSession::Assembly(session) => session.clear_feedback(),
            ArchetypeSession::Matching(session) => session.clear_feedback(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[inline]
    pub fn part(&self) -> PartId {
        self.part
    }

    pub fn kind(&self) -> ChallengeKind {
        match self.archetype {
            ArchetypeSession::Quiz(_) => ChallengeKind::Quiz,
            ArchetypeSession::Assembly(_) => ChallengeKind::Assembly,
            ArchetypeSession::Matching(_) => ChallengeKind::Matching,
        }
    }

    pub fn is_won(&self) -> bool {
        match &self.archetype {
            ArchetypeSession::Quiz(session) => session.is_won(),
            ArchetypeSession::Assembly(session) => session.is_won(),
            ArchetypeSession::Matching(session) => session.is_won(),
        }
    }

    /// Display title of the bound challenge.
    pub fn title(&self) -> &'static str {
        match &self.archetype {
            ArchetypeSession::Quiz(session) => session.spec().title,
            ArchetypeSession::Assembly(session) => session.spec().title,
            ArchetypeSession::Matching(session) => session.spec().title,
        }
    }

    #[inline]
    pub fn archetype(&self) -> &ArchetypeSession {
        &self.archetype
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        match &self.archetype {
            ArchetypeSession::Quiz(session) => Some(session),
            _ => None,
        }
    }

    pub fn assembly(&self) -> Option<&AssemblySession> {
        match &self.archetype {
            ArchetypeSession::Assembly(session) => Some(session),
            _ => None,
        }
    }

    pub fn matching(&self) -> Option<&MatchingSession> {
        match &self.archetype {
            ArchetypeSession::Matching(session) => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep_order(upper: usize) -> usize {
        upper - 1
    }

    fn session_for(part: PartId) -> ChallengeSession {
        ChallengeSession::for_part(part, &mut keep_order).unwrap()
    }

    /// Drives any session to its won state through the facade alone,
    /// clearing feedback between guesses the way the presentation does.
    fn win(session: &mut ChallengeSession) {
        while !session.is_won() {
            let guess = next_winning_guess(session);
            assert_eq!(session.submit(guess), GuessOutcome::Accepted);
            session.clear_feedback();
        }
    }

    fn next_winning_guess(session: &ChallengeSession) -> Guess {
        match session.archetype() {
            ArchetypeSession::Quiz(quiz) => {
                let round = quiz.round().unwrap();
                let option = round.options.iter().position(|o| o.correct).unwrap();
                Guess::Choice(option)
            }
            ArchetypeSession::Assembly(assembly) => {
                let step = assembly
                    .spec()
                    .steps
                    .iter()
                    .find(|s| s.position == assembly.next_position())
                    .unwrap();
                Guess::Step(step.id)
            }
            ArchetypeSession::Matching(matching) => {
                if let Some(first) = matching.pending_first() {
                    let pair = matching.spec().card(first).unwrap().pair;
                    let partner = matching
                        .spec()
                        .cards
                        .iter()
                        .find(|c| c.pair == pair && c.id != first)
                        .unwrap();
                    Guess::Card(partner.id)
                } else {
                    let card = matching
                        .spec()
                        .cards
                        .iter()
                        .find(|c| !matching.is_pair_solved(c.pair))
                        .unwrap();
                    Guess::Card(card.id)
                }
            }
        }
    }

    #[test]
    fn test_each_part_binds_its_archetype() {
        assert_eq!(session_for(PartId::Head).kind(), ChallengeKind::Quiz);
        assert_eq!(session_for(PartId::Torso).kind(), ChallengeKind::Quiz);
        assert_eq!(session_for(PartId::LeftArm).kind(), ChallengeKind::Assembly);
        assert_eq!(
            session_for(PartId::RightArm).kind(),
            ChallengeKind::Matching
        );
        assert_eq!(session_for(PartId::Legs).kind(), ChallengeKind::Quiz);
    }

    #[test]
    fn test_every_part_can_be_won_through_the_facade() {
        for part in PartId::ALL {
            let mut session = session_for(part);
            win(&mut session);
            assert!(session.is_won(), "{part} never reached won");
        }
    }

    #[test]
    fn test_mismatched_guess_shape_is_ignored() {
        let mut quiz = session_for(PartId::Head);
        assert_eq!(quiz.submit(Guess::Step(StepId::new(1))), GuessOutcome::Ignored);
        assert_eq!(quiz.submit(Guess::Card(CardId::new(1))), GuessOutcome::Ignored);

        let mut assembly = session_for(PartId::LeftArm);
        assert_eq!(assembly.submit(Guess::Choice(0)), GuessOutcome::Ignored);

        let mut matching = session_for(PartId::RightArm);
        assert_eq!(
            matching.submit(Guess::Step(StepId::new(1))),
            GuessOutcome::Ignored
        );
    }

    #[test]
    fn test_won_session_stays_won() {
        let mut session = session_for(PartId::Legs);
        win(&mut session);

        assert_eq!(
            session.submit(Guess::Choice(0)),
            GuessOutcome::AlreadyResolved
        );
        assert!(session.is_won());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let first = session_for(PartId::Head);
        let second = session_for(PartId::Head);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_session_reports_its_part_and_title() {
        let session = session_for(PartId::RightArm);
        assert_eq!(session.part(), PartId::RightArm);
        assert_eq!(session.title(), "Type Safety Match");
    }
}
