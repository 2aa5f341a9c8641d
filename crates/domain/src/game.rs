//! Part-healing orchestration.
//!
//! [`Game`] owns the five part lifecycles, the overlay focus, and the
//! single live challenge session. Operations mutate state and return the
//! [`GameEvent`]s they caused; timers and rendering live outside. The one
//! piece of wall-clock coupling is [`HEAL_TRANSITION_MS`]: the caller
//! schedules [`Game::complete_healing`] that long after it sees
//! [`GameEvent::HealingStarted`].

use crate::challenge::{ChallengeSession, Guess, GuessOutcome};
use crate::error::ContentError;
use crate::events::GameEvent;
use crate::part::{PartId, PartLifecycle};

/// How long a part stays in `Transitioning` between a challenge win and
/// the healed state, in milliseconds.
pub const HEAL_TRANSITION_MS: u64 = 1500;

/// Outcome bundle of [`Game::submit_guess`]: the per-guess verdict for
/// the presentation layer plus any events the guess caused.
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub outcome: GuessOutcome,
    pub events: Vec<GameEvent>,
}

/// The whole interactive state of one play-through.
///
/// # Invariants
/// - A healed part never leaves `Healed`.
/// - At most one part is `Transitioning` at a time, and while one is,
///   no overlay is active and no session is live.
/// - A live session always belongs to the active overlay's part.
///
/// # Example
/// ```
/// use refactory_domain::{Game, PartId};
///
/// let mut game = Game::new();
/// game.select_part(PartId::Head);
/// assert_eq!(game.active_part(), Some(PartId::Head));
/// assert!(game.lifecycle(PartId::Head).is_damaged());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Game {
    parts: [PartLifecycle; PartId::COUNT],
    active: Option<PartId>,
    hovered: Option<PartId>,
    session: Option<ChallengeSession>,
}

impl Game {
    /// A fresh game: every part damaged, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Overlay focus
    // =========================================================================

    /// Opens `part`'s detail overlay, closing any other overlay first and
    /// discarding its unfinished challenge. Ignored while a part is
    /// transitioning, and a no-op when `part` is already active.
    pub fn select_part(&mut self, part: PartId) -> Vec<GameEvent> {
        if self.is_transitioning() {
            return Vec::new();
        }
        if self.active == Some(part) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(previous) = self.active.take() {
            self.session = None;
            events.push(GameEvent::OverlayClosed { part: previous });
        }
        self.active = Some(part);
        events.push(GameEvent::OverlayOpened { part });
        events
    }

    /// Closes the active overlay, discarding any unfinished challenge.
    /// Part lifecycles are untouched.
    pub fn close_overlay(&mut self) -> Vec<GameEvent> {
        let Some(part) = self.active.take() else {
            return Vec::new();
        };
        self.session = None;
        vec![GameEvent::OverlayClosed { part }]
    }

    /// Records which part the pointer is over. Purely presentational;
    /// never emits events.
    pub fn hover_part(&mut self, part: Option<PartId>) {
        self.hovered = part;
    }

    // =========================================================================
    // Challenge lifecycle
    // =========================================================================

    /// Starts the challenge bound to `part`. Only valid while `part`'s
    /// overlay is active, the part is still damaged, and no session is
    /// already live; otherwise a silent no-op. `rand_index` feeds any
    /// shuffling the bound archetype does.
    ///
    /// Fails only when the bound content is inconsistent, which means
    /// the build is broken; callers are expected to abort on it.
    pub fn start_challenge(
        &mut self,
        part: PartId,
        rand_index: &mut dyn FnMut(usize) -> usize,
    ) -> Result<Vec<GameEvent>, ContentError> {
        if self.active != Some(part)
            || !self.lifecycle(part).is_damaged()
            || self.session.is_some()
        {
            return Ok(Vec::new());
        }
        let session = ChallengeSession::for_part(part, rand_index)?;
        let event = GameEvent::ChallengeStarted {
            part,
            session_id: session.id(),
            kind: session.kind(),
        };
        self.session = Some(session);
        Ok(vec![event])
    }

    /// Abandons the live challenge and returns the overlay to its detail
    /// view. The part stays damaged; a later attempt starts fresh.
    pub fn cancel_challenge(&mut self) -> Vec<GameEvent> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        vec![GameEvent::ChallengeCancelled {
            part: session.part(),
            session_id: session.id(),
        }]
    }

    /// Routes a guess to the live session.
    ///
    /// On the guess that wins the session, the session is dropped, the
    /// overlay closes, and the part enters `Transitioning`; the caller
    /// schedules [`Game::complete_healing`] after [`HEAL_TRANSITION_MS`].
    /// Without a live session the guess is ignored.
    pub fn submit_guess(&mut self, guess: Guess) -> SubmitReport {
        let (outcome, won) = match self.session.as_mut() {
            Some(session) => {
                let outcome = session.submit(guess);
                let won = (outcome == GuessOutcome::Accepted && session.is_won())
                    .then(|| (session.part(), session.id()));
                (outcome, won)
            }
            None => (GuessOutcome::Ignored, None),
        };

        let mut events = Vec::new();
        if let Some((part, session_id)) = won {
            self.session = None;
            self.active = None;
            self.parts[part.index()] = PartLifecycle::Transitioning;
            events.push(GameEvent::ChallengeWon { part, session_id });
            events.push(GameEvent::OverlayClosed { part });
            events.push(GameEvent::HealingStarted { part });
        }
        SubmitReport { outcome, events }
    }

    /// Clears transient wrong-guess feedback in the live session, if any.
    pub fn clear_feedback(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear_feedback();
        }
    }

    // =========================================================================
    // Healing
    // =========================================================================

    /// Lands the heal transition for `part`. A no-op unless `part` is
    /// currently transitioning, so stale timers cannot re-heal or
    /// un-heal anything. Emits [`GameEvent::AllPartsHealed`] with the
    /// heal that makes it true.
    pub fn complete_healing(&mut self, part: PartId) -> Vec<GameEvent> {
        if !self.lifecycle(part).is_transitioning() {
            return Vec::new();
        }
        self.parts[part.index()] = PartLifecycle::Healed;
        let mut events = vec![GameEvent::PartHealed { part }];
        if self.all_healed() {
            events.push(GameEvent::AllPartsHealed);
        }
        events
    }

    /// Starts over with every part damaged. Refused while a heal
    /// transition is in flight.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        if self.is_transitioning() {
            return Vec::new();
        }
        *self = Self::new();
        vec![GameEvent::GameReset]
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn lifecycle(&self, part: PartId) -> PartLifecycle {
        self.parts[part.index()]
    }

    #[inline]
    pub fn active_part(&self) -> Option<PartId> {
        self.active
    }

    #[inline]
    pub fn hovered_part(&self) -> Option<PartId> {
        self.hovered
    }

    /// The part whose hover hint should show: the hovered part, unless
    /// an overlay is open or a heal transition is running.
    pub fn hover_hint_part(&self) -> Option<PartId> {
        if self.active.is_some() || self.is_transitioning() {
            return None;
        }
        self.hovered
    }

    #[inline]
    pub fn session(&self) -> Option<&ChallengeSession> {
        self.session.as_ref()
    }

    /// The part mid-heal, if any. At most one by construction.
    pub fn transitioning_part(&self) -> Option<PartId> {
        PartId::ALL
            .into_iter()
            .find(|part| self.lifecycle(*part).is_transitioning())
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning_part().is_some()
    }

    pub fn healed_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_healed()).count()
    }

    /// Whether the monster is fully restored.
    pub fn all_healed(&self) -> bool {
        self.parts.iter().all(|p| p.is_healed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ArchetypeSession;
    use crate::content::{CardId, StepId};
    use crate::ids::SessionId;

    fn keep_order(upper: usize) -> usize {
        upper - 1
    }

    fn winning_guess(session: &ChallengeSession) -> Guess {
        match session.archetype() {
            ArchetypeSession::Quiz(quiz) => {
                let round = quiz.round().unwrap();
                Guess::Choice(round.options.iter().position(|o| o.correct).unwrap())
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

    /// Wins `part`'s challenge, leaving it in `Transitioning`.
    fn win_part(game: &mut Game, part: PartId) {
        game.select_part(part);
        game.start_challenge(part, &mut keep_order).unwrap();
        while game.session().is_some() {
            let guess = winning_guess(game.session().unwrap());
            game.submit_guess(guess);
            game.clear_feedback();
        }
        assert!(game.lifecycle(part).is_transitioning());
    }

    /// Wins and lands the heal for `part`.
    fn heal_part(game: &mut Game, part: PartId) {
        win_part(game, part);
        game.complete_healing(part);
        assert!(game.lifecycle(part).is_healed());
    }

    #[test]
    fn test_new_game_has_every_part_damaged() {
        let game = Game::new();
        for part in PartId::ALL {
            assert!(game.lifecycle(part).is_damaged());
        }
        assert_eq!(game.active_part(), None);
        assert!(game.session().is_none());
        assert!(!game.all_healed());
        assert_eq!(game.healed_count(), 0);
    }

    #[test]
    fn test_select_part_opens_overlay() {
        let mut game = Game::new();
        let events = game.select_part(PartId::Torso);
        assert_eq!(
            events,
            vec![GameEvent::OverlayOpened {
                part: PartId::Torso
            }]
        );
        assert_eq!(game.active_part(), Some(PartId::Torso));
    }

    #[test]
    fn test_selecting_active_part_again_is_a_noop() {
        let mut game = Game::new();
        game.select_part(PartId::Torso);
        assert!(game.select_part(PartId::Torso).is_empty());
        assert_eq!(game.active_part(), Some(PartId::Torso));
    }

    #[test]
    fn test_switching_parts_closes_previous_and_discards_session() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        assert!(game.session().is_some());

        let events = game.select_part(PartId::Legs);
        assert_eq!(
            events,
            vec![
                GameEvent::OverlayClosed { part: PartId::Head },
                GameEvent::OverlayOpened { part: PartId::Legs },
            ]
        );
        assert!(game.session().is_none());
        assert_eq!(game.active_part(), Some(PartId::Legs));
    }

    #[test]
    fn test_close_overlay_discards_session_without_touching_lifecycle() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        // Make some progress first.
        let guess = winning_guess(game.session().unwrap());
        assert_eq!(game.submit_guess(guess).outcome, GuessOutcome::Accepted);

        let events = game.close_overlay();
        assert_eq!(
            events,
            vec![GameEvent::OverlayClosed { part: PartId::Head }]
        );
        assert_eq!(game.active_part(), None);
        assert!(game.session().is_none());
        assert!(game.lifecycle(PartId::Head).is_damaged());

        // A later attempt starts from scratch.
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        let quiz = game.session().unwrap().quiz().unwrap();
        assert_eq!(quiz.current_round(), 0);
    }

    #[test]
    fn test_start_challenge_requires_matching_active_overlay() {
        let mut game = Game::new();
        assert!(game
            .start_challenge(PartId::Head, &mut keep_order)
            .unwrap()
            .is_empty());
        assert!(game.session().is_none());

        game.select_part(PartId::Head);
        assert!(game
            .start_challenge(PartId::Legs, &mut keep_order)
            .unwrap()
            .is_empty());
        assert!(game.session().is_none());
    }

    #[test]
    fn test_start_challenge_emits_started_event_once() {
        let mut game = Game::new();
        game.select_part(PartId::LeftArm);
        let events = game
            .start_challenge(PartId::LeftArm, &mut keep_order)
            .unwrap();
        let session_id = game.session().unwrap().id();
        assert_eq!(
            events,
            vec![GameEvent::ChallengeStarted {
                part: PartId::LeftArm,
                session_id,
                kind: crate::challenge::ChallengeKind::Assembly,
            }]
        );

        // Starting again while live changes nothing.
        assert!(game
            .start_challenge(PartId::LeftArm, &mut keep_order)
            .unwrap()
            .is_empty());
        assert_eq!(game.session().unwrap().id(), session_id);
    }

    #[test]
    fn test_healed_part_cannot_start_a_challenge() {
        let mut game = Game::new();
        heal_part(&mut game, PartId::Head);

        game.select_part(PartId::Head);
        assert!(game
            .start_challenge(PartId::Head, &mut keep_order)
            .unwrap()
            .is_empty());
        assert!(game.session().is_none());
    }

    #[test]
    fn test_cancel_challenge_returns_overlay_to_detail_view() {
        let mut game = Game::new();
        game.select_part(PartId::RightArm);
        game.start_challenge(PartId::RightArm, &mut keep_order)
            .unwrap();
        let session_id = game.session().unwrap().id();

        let events = game.cancel_challenge();
        assert_eq!(
            events,
            vec![GameEvent::ChallengeCancelled {
                part: PartId::RightArm,
                session_id,
            }]
        );
        assert!(game.session().is_none());
        assert_eq!(game.active_part(), Some(PartId::RightArm));
        assert!(game.lifecycle(PartId::RightArm).is_damaged());

        assert!(game.cancel_challenge().is_empty());
    }

    #[test]
    fn test_rejected_guess_changes_no_lifecycle_and_keeps_progress() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        let guess = winning_guess(game.session().unwrap());
        game.submit_guess(guess);
        game.clear_feedback();

        let round = game.session().unwrap().quiz().unwrap().round().unwrap();
        let wrong = round.options.iter().position(|o| !o.correct).unwrap();
        let report = game.submit_guess(Guess::Choice(wrong));
        assert_eq!(report.outcome, GuessOutcome::Rejected);
        assert!(report.events.is_empty());
        assert_eq!(game.session().unwrap().quiz().unwrap().current_round(), 1);
        assert!(game.lifecycle(PartId::Head).is_damaged());
    }

    #[test]
    fn test_winning_guess_closes_overlay_and_starts_healing() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        let session_id = game.session().unwrap().id();

        let mut last = None;
        while game.session().is_some() {
            let guess = winning_guess(game.session().unwrap());
            last = Some(game.submit_guess(guess));
            game.clear_feedback();
        }
        let report = last.unwrap();
        assert_eq!(report.outcome, GuessOutcome::Accepted);
        assert_eq!(
            report.events,
            vec![
                GameEvent::ChallengeWon {
                    part: PartId::Head,
                    session_id,
                },
                GameEvent::OverlayClosed { part: PartId::Head },
                GameEvent::HealingStarted { part: PartId::Head },
            ]
        );
        assert!(game.lifecycle(PartId::Head).is_transitioning());
        assert_eq!(game.active_part(), None);
    }

    #[test]
    fn test_input_is_suppressed_while_healing() {
        let mut game = Game::new();
        win_part(&mut game, PartId::Torso);

        assert!(game.select_part(PartId::Head).is_empty());
        assert_eq!(game.active_part(), None);
        assert!(game
            .start_challenge(PartId::Head, &mut keep_order)
            .unwrap()
            .is_empty());
        assert!(game.restart().is_empty());
        assert!(game.lifecycle(PartId::Torso).is_transitioning());
    }

    #[test]
    fn test_at_most_one_part_transitions_at_a_time() {
        let mut game = Game::new();
        win_part(&mut game, PartId::Torso);

        let transitioning = PartId::ALL
            .into_iter()
            .filter(|p| game.lifecycle(*p).is_transitioning())
            .count();
        assert_eq!(transitioning, 1);
        assert_eq!(game.transitioning_part(), Some(PartId::Torso));
    }

    #[test]
    fn test_complete_healing_lands_the_transition() {
        let mut game = Game::new();
        win_part(&mut game, PartId::Legs);

        let events = game.complete_healing(PartId::Legs);
        assert_eq!(events, vec![GameEvent::PartHealed { part: PartId::Legs }]);
        assert!(game.lifecycle(PartId::Legs).is_healed());
        assert_eq!(game.transitioning_part(), None);
    }

    #[test]
    fn test_stale_heal_timers_are_ignored() {
        let mut game = Game::new();
        // Never lit: a timer for a damaged part does nothing.
        assert!(game.complete_healing(PartId::Head).is_empty());
        assert!(game.lifecycle(PartId::Head).is_damaged());

        heal_part(&mut game, PartId::Head);
        // A duplicate timer for an already-healed part does nothing.
        assert!(game.complete_healing(PartId::Head).is_empty());
        assert!(game.lifecycle(PartId::Head).is_healed());
    }

    #[test]
    fn test_healed_parts_never_regress() {
        let mut game = Game::new();
        heal_part(&mut game, PartId::RightArm);

        game.select_part(PartId::RightArm);
        let report = game.submit_guess(Guess::Card(CardId::new(1)));
        assert_eq!(report.outcome, GuessOutcome::Ignored);
        game.close_overlay();
        assert!(game.lifecycle(PartId::RightArm).is_healed());
    }

    #[test]
    fn test_completion_fires_with_the_final_heal_only() {
        let mut game = Game::new();
        let mut parts = PartId::ALL.into_iter();
        for part in parts.by_ref().take(4) {
            heal_part(&mut game, part);
            assert!(!game.all_healed());
        }

        let last = parts.next().unwrap();
        win_part(&mut game, last);
        let events = game.complete_healing(last);
        assert_eq!(
            events,
            vec![GameEvent::PartHealed { part: last }, GameEvent::AllPartsHealed]
        );
        assert!(game.all_healed());
        assert_eq!(game.healed_count(), PartId::COUNT);
    }

    #[test]
    fn test_restart_returns_to_initial_state() {
        let mut game = Game::new();
        for part in PartId::ALL {
            heal_part(&mut game, part);
        }
        assert!(game.all_healed());

        let events = game.restart();
        assert_eq!(events, vec![GameEvent::GameReset]);
        for part in PartId::ALL {
            assert!(game.lifecycle(part).is_damaged());
        }
        assert_eq!(game.active_part(), None);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_guess_without_session_is_ignored() {
        let mut game = Game::new();
        let report = game.submit_guess(Guess::Choice(0));
        assert_eq!(report.outcome, GuessOutcome::Ignored);
        assert!(report.events.is_empty());

        game.select_part(PartId::Head);
        let report = game.submit_guess(Guess::Choice(0));
        assert_eq!(report.outcome, GuessOutcome::Ignored);
    }

    #[test]
    fn test_wrong_shaped_guess_is_ignored_by_live_session() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();

        let report = game.submit_guess(Guess::Step(StepId::new(1)));
        assert_eq!(report.outcome, GuessOutcome::Ignored);
        assert_eq!(game.session().unwrap().quiz().unwrap().current_round(), 0);
    }

    #[test]
    fn test_hover_hint_hidden_while_overlay_open_or_healing() {
        let mut game = Game::new();
        game.hover_part(Some(PartId::Legs));
        assert_eq!(game.hover_hint_part(), Some(PartId::Legs));

        game.select_part(PartId::Legs);
        assert_eq!(game.hover_hint_part(), None);
        game.close_overlay();
        assert_eq!(game.hover_hint_part(), Some(PartId::Legs));

        win_part(&mut game, PartId::Legs);
        assert_eq!(game.hover_hint_part(), None);
        game.complete_healing(PartId::Legs);
        assert_eq!(game.hover_hint_part(), Some(PartId::Legs));

        game.hover_part(None);
        assert_eq!(game.hover_hint_part(), None);
    }

    #[test]
    fn test_clear_feedback_reaches_the_live_session() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        let round = game.session().unwrap().quiz().unwrap().round().unwrap();
        let wrong = round.options.iter().position(|o| !o.correct).unwrap();
        game.submit_guess(Guess::Choice(wrong));

        game.clear_feedback();
        assert_eq!(
            game.session().unwrap().quiz().unwrap().feedback(),
            crate::challenge::QuizFeedback::Idle
        );
        // Without a session this is a harmless no-op.
        game.close_overlay();
        game.clear_feedback();
    }

    #[test]
    fn test_full_restoration_walkthrough() {
        let mut game = Game::new();
        let mut healed_events = 0;
        let mut completion_events = 0;

        for part in PartId::ALL {
            game.select_part(part);
            game.start_challenge(part, &mut keep_order).unwrap();
            while game.session().is_some() {
                let guess = winning_guess(game.session().unwrap());
                game.submit_guess(guess);
                game.clear_feedback();
            }
            for event in game.complete_healing(part) {
                match event {
                    GameEvent::PartHealed { .. } => healed_events += 1,
                    GameEvent::AllPartsHealed => completion_events += 1,
                    other => panic!("unexpected event {other:?}"),
                }
            }
        }

        assert_eq!(healed_events, PartId::COUNT);
        assert_eq!(completion_events, 1);
        assert!(game.all_healed());
    }

    #[test]
    fn test_session_ids_differ_between_attempts() {
        let mut game = Game::new();
        game.select_part(PartId::Head);
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        let first: SessionId = game.session().unwrap().id();
        game.cancel_challenge();
        game.start_challenge(PartId::Head, &mut keep_order).unwrap();
        assert_ne!(game.session().unwrap().id(), first);
    }
}
