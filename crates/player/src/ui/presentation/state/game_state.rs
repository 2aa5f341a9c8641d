//! Game state management using Dioxus signals
//!
//! Central game state for the Refactory player. Wraps the domain
//! orchestrator in a signal and funnels every mutation through methods
//! that log the emitted domain events.

use dioxus::prelude::*;

use refactory_domain::{Game, GameEvent, Guess, PartId, SubmitReport, HEAL_TRANSITION_MS};

use crate::infrastructure::spawn_task;
use crate::state::Platform;

/// Central game state stored as a Dioxus signal
///
/// Obtained via `use_context::<GameState>()`. Components read the game
/// through the `game` signal; all writes go through the methods below so
/// emitted [`GameEvent`]s are logged in one place.
#[derive(Clone)]
pub struct GameState {
    /// The part-healing orchestrator
    pub game: Signal<Game>,
    platform: Platform,
}

impl GameState {
    /// Create a new GameState over a fresh, fully damaged monster
    pub fn new(platform: Platform) -> Self {
        Self {
            game: Signal::new(Game::new()),
            platform,
        }
    }

    /// Open the overlay for `part` (refused while a heal is running)
    pub fn select_part(&mut self, part: PartId) {
        let events = self.game.write().select_part(part);
        self.publish(&events);
    }

    /// Close the overlay, dropping any live challenge with it
    pub fn close_overlay(&mut self) {
        let events = self.game.write().close_overlay();
        self.publish(&events);
    }

    /// Track pointer hover; `None` clears it
    pub fn hover_part(&mut self, part: Option<PartId>) {
        self.game.write().hover_part(part);
    }

    /// Start the challenge bound to `part`
    ///
    /// A content error means the built-in challenge data is inconsistent;
    /// it is logged and the overlay stays on the detail view.
    pub fn start_challenge(&mut self, part: PartId) {
        let platform = self.platform.clone();
        let mut rand_index = move |upper: usize| platform.random_index(upper);
        let result = self.game.write().start_challenge(part, &mut rand_index);
        match result {
            Ok(events) => self.publish(&events),
            Err(e) => self
                .platform
                .log_error(&format!("Failed to start challenge for {part}: {e}")),
        }
    }

    /// Abandon the live challenge and return to the detail view
    pub fn cancel_challenge(&mut self) {
        let events = self.game.write().cancel_challenge();
        self.publish(&events);
    }

    /// Route a guess to the live challenge
    ///
    /// Returns the report so the submitting component can drive its own
    /// feedback timers off the outcome. A winning guess arms the heal
    /// timer as a side effect.
    pub fn submit_guess(&mut self, guess: Guess) -> SubmitReport {
        let report = self.game.write().submit_guess(guess);
        self.publish(&report.events);
        self.schedule_heals(&report.events);
        report
    }

    /// Clear transient wrong-guess feedback in the live challenge
    pub fn clear_feedback(&mut self) {
        self.game.write().clear_feedback();
    }

    /// Land a finished heal; called once the dissolve animation has run
    pub fn complete_healing(&mut self, part: PartId) {
        let events = self.game.write().complete_healing(part);
        self.publish(&events);
    }

    /// Reset every part to damaged (refused while a heal is running)
    pub fn restart(&mut self) {
        let events = self.game.write().restart();
        self.publish(&events);
    }

    /// Arm the heal timer for every heal the given events started
    ///
    /// The timer is detached from the submitting component on purpose:
    /// winning closes the overlay, and the heal must land anyway. There
    /// is no cancel path; a duplicate or otherwise stale timer falls
    /// through `complete_healing` as a no-op.
    fn schedule_heals(&self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::HealingStarted { part } = event {
                let part = *part;
                let platform = self.platform.clone();
                let mut state = self.clone();
                spawn_task(async move {
                    platform.sleep_ms(HEAL_TRANSITION_MS).await;
                    state.complete_healing(part);
                });
            }
        }
    }

    fn publish(&self, events: &[GameEvent]) {
        for event in events {
            self.platform.log_info(&format!("Game event: {event:?}"));
        }
    }
}
