//! Pair-matching memory engine.
//!
//! The deck is shuffled once at session start with injected randomness.
//! Correctness travels with the cards: two picks solve a pair when their
//! `PairId`s agree, regardless of where the shuffle placed them. A
//! mismatched second pick leaves both cards showing until the next pick
//! or an explicit `clear_feedback`.

use std::collections::HashSet;

use crate::content::{CardId, MatchingSpec, PairId};
use crate::error::ContentError;

use super::GuessOutcome;

/// Live state of one matching attempt.
///
/// # Invariants
/// - `deck` is a permutation of the card ids in the content.
/// - A solved pair never returns face-down.
/// - At most one mismatch is showing at a time.
#[derive(Debug, Clone)]
pub struct MatchingSession {
    spec: &'static MatchingSpec,
    deck: Vec<CardId>,
    revealed: HashSet<CardId>,
    solved: HashSet<PairId>,
    pending_first: Option<CardId>,
    mismatch: Option<(CardId, CardId)>,
    won: bool,
}

impl MatchingSession {
    /// Starts a session after verifying the content: at least one card,
    /// unique card ids, and exactly two cards per pair. `rand_index` is
    /// called with an exclusive upper bound and must return an index
    /// below it; the deck is shuffled with it once, here.
    pub fn new(
        spec: &'static MatchingSpec,
        rand_index: &mut dyn FnMut(usize) -> usize,
    ) -> Result<Self, ContentError> {
        if spec.cards.is_empty() {
            return Err(ContentError::EmptyChallenge { title: spec.title });
        }
        for (index, card) in spec.cards.iter().enumerate() {
            if spec.cards[..index].iter().any(|seen| seen.id == card.id) {
                return Err(ContentError::DuplicateCardId { card: card.id });
            }
        }
        let mut pairs: Vec<PairId> = spec.cards.iter().map(|c| c.pair).collect();
        pairs.sort_unstable();
        pairs.dedup();
        for pair in pairs {
            let count = spec.cards.iter().filter(|c| c.pair == pair).count();
            if count != 2 {
                return Err(ContentError::PairCardCount { pair, count });
            }
        }

        let mut deck: Vec<CardId> = spec.cards.iter().map(|c| c.id).collect();
        // Fisher-Yates; the clamp keeps a misbehaving source in bounds.
        for i in (1..deck.len()).rev() {
            let j = rand_index(i + 1).min(i);
            deck.swap(i, j);
        }

        Ok(Self {
            spec,
            deck,
            revealed: HashSet::new(),
            solved: HashSet::new(),
            pending_first: None,
            mismatch: None,
            won: false,
        })
    }

    /// Submits the card the player flipped.
    ///
    /// A first pick reveals the card. A second pick either solves the
    /// pair (accepted, and wins the session on the last pair) or records
    /// a mismatch (rejected, both cards stay showing until the flash is
    /// cleared). Picks on unknown, solved, or already-pending cards are
    /// ignored. A pick while a mismatch is showing hides the mismatched
    /// pair first and then counts as a fresh first pick.
    pub fn pick(&mut self, card: CardId) -> GuessOutcome {
        if self.won {
            return GuessOutcome::AlreadyResolved;
        }
        let Some(definition) = self.spec.card(card) else {
            return GuessOutcome::Ignored;
        };
        if self.solved.contains(&definition.pair) {
            return GuessOutcome::Ignored;
        }
        if self.pending_first == Some(card) {
            return GuessOutcome::Ignored;
        }
        self.hide_mismatch();

        let Some(first) = self.pending_first.take() else {
            self.revealed.insert(card);
            self.pending_first = Some(card);
            return GuessOutcome::Accepted;
        };
        self.revealed.insert(card);
        let first_pair = self.spec.card(first).map(|c| c.pair);
        if first_pair == Some(definition.pair) {
            self.revealed.remove(&first);
            self.revealed.remove(&card);
            self.solved.insert(definition.pair);
            if self.solved.len() == self.spec.pair_count() {
                self.won = true;
            }
            GuessOutcome::Accepted
        } else {
            self.mismatch = Some((first, card));
            GuessOutcome::Rejected
        }
    }

    /// Hides a showing mismatch once the presentation layer has shown it.
    pub fn clear_feedback(&mut self) {
        self.hide_mismatch();
    }

    fn hide_mismatch(&mut self) {
        if let Some((first, second)) = self.mismatch.take() {
            self.revealed.remove(&first);
            self.revealed.remove(&second);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn spec(&self) -> &'static MatchingSpec {
        self.spec
    }

    /// Cards in their shuffled table order.
    #[inline]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// Whether `card` currently shows its face: solved, mid-attempt, or
    /// part of a showing mismatch.
    pub fn is_face_up(&self, card: CardId) -> bool {
        let solved = self
            .spec
            .card(card)
            .is_some_and(|c| self.solved.contains(&c.pair));
        solved || self.revealed.contains(&card)
    }

    pub fn is_pair_solved(&self, pair: PairId) -> bool {
        self.solved.contains(&pair)
    }

    #[inline]
    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// The card waiting for its partner, if the player is mid-attempt.
    #[inline]
    pub fn pending_first(&self) -> Option<CardId> {
        self.pending_first
    }

    /// The mismatched picks currently showing, if any.
    #[inline]
    pub fn mismatch(&self) -> Option<(CardId, CardId)> {
        self.mismatch
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.won
    }
}
