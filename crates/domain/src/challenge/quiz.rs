//! Multi-round quiz engine.
//!
//! One option per round is correct. A correct choice advances to the next
//! round and the session is won when the last round is cleared; a wrong
//! choice records feedback and leaves the round unchanged, so the player
//! can retry the same round indefinitely.

use crate::content::{QuizRound, QuizSpec};
use crate::error::ContentError;

use super::GuessOutcome;

/// Feedback left behind by the most recent choice, for the presentation
/// layer to render and then clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizFeedback {
    #[default]
    Idle,
    Correct {
        option: usize,
    },
    Wrong {
        option: usize,
    },
}

/// Live state of one quiz attempt.
///
/// # Invariants
/// - `current_round <= spec.rounds.len()`, equal exactly when won.
/// - A rejected choice never moves `current_round` backwards.
#[derive(Debug, Clone)]
pub struct QuizSession {
    spec: &'static QuizSpec,
    current_round: usize,
    feedback: QuizFeedback,
    won: bool,
}

impl QuizSession {
    /// Starts a session after verifying the content: at least one round,
    /// and exactly one correct option per round.
    pub fn new(spec: &'static QuizSpec) -> Result<Self, ContentError> {
        if spec.rounds.is_empty() {
            return Err(ContentError::EmptyChallenge { title: spec.title });
        }
        for (round, definition) in spec.rounds.iter().enumerate() {
            let correct = definition.options.iter().filter(|o| o.correct).count();
            match correct {
                0 => return Err(ContentError::NoCorrectOption { round }),
                1 => {}
                count => return Err(ContentError::MultipleCorrectOptions { round, count }),
            }
        }
        Ok(Self {
            spec,
            current_round: 0,
            feedback: QuizFeedback::Idle,
            won: false,
        })
    }

    /// Submits the option at `option` in the current round.
    ///
    /// Correct choices advance one round and win the session on the last
    /// one. Wrong choices only record feedback; earlier cleared rounds are
    /// kept. Out-of-range indices are ignored, as is any input while the
    /// previous round's success feedback is still showing.
    pub fn choose(&mut self, option: usize) -> GuessOutcome {
        if self.won {
            return GuessOutcome::AlreadyResolved;
        }
        let Some(round) = self.spec.rounds.get(self.current_round) else {
            return GuessOutcome::AlreadyResolved;
        };
        // The display still shows the cleared round while the success
        // flash is up; input is ambiguous until feedback is cleared.
        if matches!(self.feedback, QuizFeedback::Correct { .. }) {
            return GuessOutcome::Ignored;
        }
        let Some(chosen) = round.options.get(option) else {
            return GuessOutcome::Ignored;
        };
        if chosen.correct {
            self.current_round += 1;
            self.feedback = QuizFeedback::Correct { option };
            if self.current_round == self.spec.rounds.len() {
                self.won = true;
            }
            GuessOutcome::Accepted
        } else {
            self.feedback = QuizFeedback::Wrong { option };
            GuessOutcome::Rejected
        }
    }

    /// Clears transient feedback once the presentation layer has shown it.
    pub fn clear_feedback(&mut self) {
        self.feedback = QuizFeedback::Idle;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn spec(&self) -> &'static QuizSpec {
        self.spec
    }

    /// Zero-based index of the round awaiting an answer. Equals
    /// `round_count()` once the session is won.
    #[inline]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// The round awaiting an answer, or `None` once won.
    pub fn round(&self) -> Option<&'static QuizRound> {
        self.spec.rounds.get(self.current_round)
    }

    #[inline]
    pub fn round_count(&self) -> usize {
        self.spec.rounds.len()
    }

    #[inline]
    pub fn feedback(&self) -> QuizFeedback {
        self.feedback
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::challenge_spec;
    use crate::content::ChallengeSpec;
    use crate::part::PartId;

    fn quiz_for(part: PartId) -> QuizSession {
        match challenge_spec(part) {
            ChallengeSpec::Quiz(spec) => QuizSession::new(spec).unwrap(),
            other => panic!("expected a quiz for {part}, got {other:?}"),
        }
    }

    fn correct_option(session: &QuizSession) -> usize {
        session
            .round()
            .unwrap()
            .options
            .iter()
            .position(|o| o.correct)
            .unwrap()
    }

    fn wrong_option(session: &QuizSession) -> usize {
        session
            .round()
            .unwrap()
            .options
            .iter()
            .position(|o| !o.correct)
            .unwrap()
    }

    #[test]
    fn test_correct_choice_advances_exactly_one_round() {
        let mut session = quiz_for(PartId::Head);
        assert_eq!(session.current_round(), 0);

        let option = correct_option(&session);
        assert_eq!(session.choose(option), GuessOutcome::Accepted);
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.feedback(), QuizFeedback::Correct { option });
        assert!(!session.is_won());
    }

    #[test]
    fn test_wrong_choice_keeps_round_and_records_feedback() {
        let mut session = quiz_for(PartId::Head);
        let option = correct_option(&session);
        assert_eq!(session.choose(option), GuessOutcome::Accepted);
        session.clear_feedback();

        let wrong = wrong_option(&session);
        assert_eq!(session.choose(wrong), GuessOutcome::Rejected);
        assert_eq!(session.current_round(), 1, "cleared rounds must be kept");
        assert_eq!(session.feedback(), QuizFeedback::Wrong { option: wrong });
        assert!(!session.is_won());
    }

    #[test]
    fn test_retry_after_rejection_can_still_win() {
        let mut session = quiz_for(PartId::Torso);
        while !session.is_won() {
            let wrong = wrong_option(&session);
            assert_eq!(session.choose(wrong), GuessOutcome::Rejected);
            let option = correct_option(&session);
            assert_eq!(session.choose(option), GuessOutcome::Accepted);
            session.clear_feedback();
        }
        assert_eq!(session.current_round(), session.round_count());
        assert!(session.round().is_none());
    }

    #[test]
    fn test_winning_on_final_round_only() {
        let mut session = quiz_for(PartId::Legs);
        for cleared in 0..session.round_count() {
            assert!(!session.is_won(), "won too early after {cleared} rounds");
            let option = correct_option(&session);
            assert_eq!(session.choose(option), GuessOutcome::Accepted);
            session.clear_feedback();
        }
        assert!(session.is_won());
    }

    #[test]
    fn test_choices_after_win_report_already_resolved() {
        let mut session = quiz_for(PartId::Legs);
        while !session.is_won() {
            let option = correct_option(&session);
            session.choose(option);
            session.clear_feedback();
        }
        assert_eq!(session.choose(0), GuessOutcome::AlreadyResolved);
        assert!(session.is_won());
    }

    #[test]
    fn test_choice_during_success_feedback_is_ignored() {
        let mut session = quiz_for(PartId::Head);
        let option = correct_option(&session);
        assert_eq!(session.choose(option), GuessOutcome::Accepted);

        assert_eq!(session.choose(option), GuessOutcome::Ignored);
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.feedback(), QuizFeedback::Correct { option });

        session.clear_feedback();
        let next = correct_option(&session);
        assert_eq!(session.choose(next), GuessOutcome::Accepted);
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut session = quiz_for(PartId::Head);
        assert_eq!(session.choose(99), GuessOutcome::Ignored);
        assert_eq!(session.current_round(), 0);
        assert_eq!(session.feedback(), QuizFeedback::Idle);
    }

    #[test]
    fn test_clear_feedback_resets_to_idle() {
        let mut session = quiz_for(PartId::Head);
        let wrong = wrong_option(&session);
        session.choose(wrong);
        assert_ne!(session.feedback(), QuizFeedback::Idle);

        session.clear_feedback();
        assert_eq!(session.feedback(), QuizFeedback::Idle);
    }

    #[test]
    fn test_rejects_round_without_correct_option() {
        static BROKEN_OPTIONS: [crate::content::QuizOption; 2] = [
            crate::content::QuizOption {
                label: "a",
                correct: false,
                explanation: None,
            },
            crate::content::QuizOption {
                label: "b",
                correct: false,
                explanation: None,
            },
        ];
        static BROKEN_ROUNDS: [QuizRound; 1] = [QuizRound {
            prompt: "broken",
            options: &BROKEN_OPTIONS,
        }];
        static BROKEN: QuizSpec = QuizSpec {
            title: "broken",
            tagline: "",
            presentation: crate::content::QuizPresentation::StrategyCards,
            rounds: &BROKEN_ROUNDS,
        };

        assert_eq!(
            QuizSession::new(&BROKEN).unwrap_err(),
            ContentError::NoCorrectOption { round: 0 }
        );
    }

    #[test]
    fn test_rejects_round_with_multiple_correct_options() {
        static BROKEN_OPTIONS: [crate::content::QuizOption; 2] = [
            crate::content::QuizOption {
                label: "a",
                correct: true,
                explanation: None,
            },
            crate::content::QuizOption {
                label: "b",
                correct: true,
                explanation: None,
            },
        ];
        static BROKEN_ROUNDS: [QuizRound; 1] = [QuizRound {
            prompt: "broken",
            options: &BROKEN_OPTIONS,
        }];
        static BROKEN: QuizSpec = QuizSpec {
            title: "broken",
            tagline: "",
            presentation: crate::content::QuizPresentation::StrategyCards,
            rounds: &BROKEN_ROUNDS,
        };

        assert_eq!(
            QuizSession::new(&BROKEN).unwrap_err(),
            ContentError::MultipleCorrectOptions { round: 0, count: 2 }
        );
    }

    #[test]
    fn test_rejects_empty_quiz() {
        static EMPTY: QuizSpec = QuizSpec {
            title: "empty",
            tagline: "",
            presentation: crate::content::QuizPresentation::StrategyCards,
            rounds: &[],
        };

        assert_eq!(
            QuizSession::new(&EMPTY).unwrap_err(),
            ContentError::EmptyChallenge { title: "empty" }
        );
    }
}
