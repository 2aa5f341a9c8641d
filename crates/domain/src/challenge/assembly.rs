//! Ordered-sequence assembly engine.
//!
//! The player places scattered steps into their target positions by
//! selecting them in ascending position order. A wrong selection flashes
//! and changes nothing else; steps already placed stay placed.

use crate::content::{AssemblySpec, StepId};
use crate::error::ContentError;

use super::GuessOutcome;

/// Live state of one assembly attempt.
///
/// # Invariants
/// - `remaining` holds the unplaced steps in presentation order.
/// - `next_position` is 1-based; positions below it are filled.
/// - Won exactly when `remaining` is empty.
#[derive(Debug, Clone)]
pub struct AssemblySession {
    spec: &'static AssemblySpec,
    remaining: Vec<StepId>,
    next_position: u8,
    wrong_step: Option<StepId>,
    won: bool,
}

impl AssemblySession {
    /// Starts a session after verifying the content: at least one step,
    /// unique step ids, and target positions covering `1..=N` exactly.
    pub fn new(spec: &'static AssemblySpec) -> Result<Self, ContentError> {
        if spec.steps.is_empty() {
            return Err(ContentError::EmptyChallenge { title: spec.title });
        }
        for (index, step) in spec.steps.iter().enumerate() {
            if spec.steps[..index].iter().any(|seen| seen.id == step.id) {
                return Err(ContentError::DuplicateStepId { step: step.id });
            }
        }
        let count = spec.steps.len() as u8;
        for position in 1..=count {
            let holders = spec.steps.iter().filter(|s| s.position == position).count();
            match holders {
                0 => return Err(ContentError::MissingPosition { position }),
                1 => {}
                _ => return Err(ContentError::DuplicatePosition { position }),
            }
        }
        Ok(Self {
            spec,
            remaining: spec.steps.iter().map(|s| s.id).collect(),
            next_position: 1,
            wrong_step: None,
            won: false,
        })
    }

    /// Submits the step the player selected.
    ///
    /// The step is placed when its target position is the lowest unfilled
    /// one, and the session is won when the last step lands. Any other
    /// unplaced step is rejected without disturbing placed steps. Unknown
    /// or already-placed steps are ignored.
    pub fn place(&mut self, step: StepId) -> GuessOutcome {
        if self.won {
            return GuessOutcome::AlreadyResolved;
        }
        let Some(definition) = self.spec.step(step) else {
            return GuessOutcome::Ignored;
        };
        if !self.remaining.contains(&step) {
            return GuessOutcome::Ignored;
        }
        if definition.position == self.next_position {
            self.remaining.retain(|s| *s != step);
            self.next_position += 1;
            self.wrong_step = None;
            if self.remaining.is_empty() {
                self.won = true;
            }
            GuessOutcome::Accepted
        } else {
            self.wrong_step = Some(step);
            GuessOutcome::Rejected
        }
    }

    /// Clears the wrong-selection flash.
    pub fn clear_feedback(&mut self) {
        self.wrong_step = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn spec(&self) -> &'static AssemblySpec {
        self.spec
    }

    /// Unplaced steps, in presentation order.
    #[inline]
    pub fn remaining(&self) -> &[StepId] {
        &self.remaining
    }

    /// 1-based position the next correct step must target.
    #[inline]
    pub fn next_position(&self) -> u8 {
        self.next_position
    }

    /// Whether the slot at `position` already holds its step.
    pub fn is_position_filled(&self, position: u8) -> bool {
        position >= 1 && position < self.next_position
    }

    /// The step currently flashing as a wrong selection, if any.
    #[inline]
    pub fn wrong_step(&self) -> Option<StepId> {
        self.wrong_step
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
    use crate::content::{AssemblyStep, ChallengeSpec};
    use crate::part::PartId;

    fn assembly() -> AssemblySession {
        match challenge_spec(PartId::LeftArm) {
            ChallengeSpec::Assembly(spec) => AssemblySession::new(spec).unwrap(),
            other => panic!("expected an assembly, got {other:?}"),
        }
    }

    fn step_at_position(session: &AssemblySession, position: u8) -> StepId {
        session
            .spec()
            .steps
            .iter()
            .find(|s| s.position == position)
            .map(|s| s.id)
            .unwrap()
    }

    #[test]
    fn test_presentation_order_differs_from_target_order() {
        let session = assembly();
        let presented: Vec<StepId> = session.remaining().to_vec();
        let mut by_position: Vec<StepId> = Vec::new();
        for position in 1..=session.spec().step_count() as u8 {
            by_position.push(step_at_position(&session, position));
        }
        assert_ne!(presented, by_position);
    }

    #[test]
    fn test_in_order_placement_wins_on_last_step_only() {
        let mut session = assembly();
        let count = session.spec().step_count() as u8;
        for position in 1..=count {
            assert!(!session.is_won());
            let step = step_at_position(&session, position);
            assert_eq!(session.place(step), GuessOutcome::Accepted);
            assert!(session.is_position_filled(position));
        }
        assert!(session.is_won());
        assert!(session.remaining().is_empty());
    }

    #[test]
    fn test_out_of_order_selection_rejected_without_progress() {
        let mut session = assembly();
        let fifth = step_at_position(&session, 5);

        assert_eq!(session.place(fifth), GuessOutcome::Rejected);
        assert_eq!(session.next_position(), 1);
        assert_eq!(session.remaining().len(), 5);
        assert_eq!(session.wrong_step(), Some(fifth));
    }

    #[test]
    fn test_rejection_keeps_placed_steps() {
        let mut session = assembly();
        session.place(step_at_position(&session, 1));
        session.place(step_at_position(&session, 2));

        let fifth = step_at_position(&session, 5);
        assert_eq!(session.place(fifth), GuessOutcome::Rejected);
        assert!(session.is_position_filled(1));
        assert!(session.is_position_filled(2));
        assert_eq!(session.next_position(), 3);
    }

    #[test]
    fn test_placed_step_is_ignored_on_reselect() {
        let mut session = assembly();
        let first = step_at_position(&session, 1);
        session.place(first);

        assert_eq!(session.place(first), GuessOutcome::Ignored);
        assert_eq!(session.next_position(), 2);
    }

    #[test]
    fn test_unknown_step_is_ignored() {
        let mut session = assembly();
        assert_eq!(session.place(StepId::new(200)), GuessOutcome::Ignored);
        assert_eq!(session.next_position(), 1);
    }

    #[test]
    fn test_placements_after_win_report_already_resolved() {
        let mut session = assembly();
        for position in 1..=5 {
            session.place(step_at_position(&session, position));
        }
        let first = step_at_position(&session, 1);
        assert_eq!(session.place(first), GuessOutcome::AlreadyResolved);
    }

    #[test]
    fn test_correct_placement_clears_wrong_flash() {
        let mut session = assembly();
        session.place(step_at_position(&session, 3));
        assert!(session.wrong_step().is_some());

        session.place(step_at_position(&session, 1));
        assert_eq!(session.wrong_step(), None);
    }

    #[test]
    fn test_clear_feedback_clears_wrong_flash() {
        let mut session = assembly();
        session.place(step_at_position(&session, 2));
        assert!(session.wrong_step().is_some());

        session.clear_feedback();
        assert_eq!(session.wrong_step(), None);
    }

    #[test]
    fn test_rejects_duplicate_step_ids() {
        static BROKEN_STEPS: [AssemblyStep; 2] = [
            AssemblyStep {
                id: StepId::new(1),
                label: "a",
                position: 1,
            },
            AssemblyStep {
                id: StepId::new(1),
                label: "b",
                position: 2,
            },
        ];
        static BROKEN: AssemblySpec = AssemblySpec {
            title: "broken",
            tagline: "",
            steps: &BROKEN_STEPS,
        };

        assert_eq!(
            AssemblySession::new(&BROKEN).unwrap_err(),
            ContentError::DuplicateStepId {
                step: StepId::new(1)
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_positions() {
        static BROKEN_STEPS: [AssemblyStep; 2] = [
            AssemblyStep {
                id: StepId::new(1),
                label: "a",
                position: 1,
            },
            AssemblyStep {
                id: StepId::new(2),
                label: "b",
                position: 1,
            },
        ];
        static BROKEN: AssemblySpec = AssemblySpec {
            title: "broken",
            tagline: "",
            steps: &BROKEN_STEPS,
        };

        assert_eq!(
            AssemblySession::new(&BROKEN).unwrap_err(),
            ContentError::DuplicatePosition { position: 1 }
        );
    }

    #[test]
    fn test_rejects_position_gap() {
        static BROKEN_STEPS: [AssemblyStep; 2] = [
            AssemblyStep {
                id: StepId::new(1),
                label: "a",
                position: 1,
            },
            AssemblyStep {
                id: StepId::new(2),
                label: "b",
                position: 3,
            },
        ];
        static BROKEN: AssemblySpec = AssemblySpec {
            title: "broken",
            tagline: "",
            steps: &BROKEN_STEPS,
        };

        assert_eq!(
            AssemblySession::new(&BROKEN).unwrap_err(),
            ContentError::MissingPosition { position: 2 }
        );
    }

    #[test]
    fn test_rejects_empty_assembly() {
        static EMPTY: AssemblySpec = AssemblySpec {
            title: "empty",
            tagline: "",
            steps: &[],
        };

        assert_eq!(
            AssemblySession::new(&EMPTY).unwrap_err(),
            ContentError::EmptyChallenge { title: "empty" }
        );
    }
}
