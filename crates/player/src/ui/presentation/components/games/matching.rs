//! Pair-matching mini-game.
//!
//! Face-down cards on a grid; two picks that share a pair stay solved,
//! a mismatch shows both cards briefly before they flip back.

use dioxus::prelude::*;

use refactory_domain::{CardId, CardKind, Guess, GuessOutcome};

use crate::infrastructure::spawn_task;
use crate::presentation::state::use_game_state;
use crate::ui::use_platform;

const MISMATCH_SHOW_MS: u64 = 800;

struct CardView {
    id: CardId,
    label: &'static str,
    kind: CardKind,
    face_up: bool,
    solved: bool,
    mismatched: bool,
}

#[component]
pub fn MatchingGame() -> Element {
    let game_state = use_game_state();
    let platform = use_platform();

    let (spec, cards, solved_count) = {
        let game = game_state.game.read();
        let Some(matching) = game.session().and_then(|session| session.matching()) else {
            return rsx! {};
        };
        let spec = matching.spec();
        let mismatch = matching.mismatch();
        let cards: Vec<CardView> = matching
            .deck()
            .iter()
            .filter_map(|id| {
                spec.card(*id).map(|card| CardView {
                    id: *id,
                    label: card.label,
                    kind: card.kind,
                    face_up: matching.is_face_up(*id),
                    solved: matching.is_pair_solved(card.pair),
                    mismatched: mismatch.is_some_and(|(first, second)| {
                        first == *id || second == *id
                    }),
                })
            })
            .collect();
        (spec, cards, matching.solved_count())
    };

    let flip = move |card: CardId| {
        let mut state = game_state.clone();
        let report = state.submit_guess(Guess::Card(card));
        if report.outcome == GuessOutcome::Rejected {
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(MISMATCH_SHOW_MS).await;
                state.clear_feedback();
            });
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 w-full",

            div {
                class: "text-center",
                h4 { class: "text-blue-400 font-bold text-lg mb-1", "🛡️ {spec.title}" }
                p { class: "text-gray-400 text-sm", "{spec.tagline}" }
                p {
                    class: "text-xs text-gray-500 font-mono mt-1",
                    "{solved_count}/{spec.pair_count()} pairs matched"
                }
            }

            div {
                class: "grid grid-cols-4 gap-3 w-full max-w-sm mx-auto",
                for card in cards {
                    button {
                        key: "{card.id}",
                        class: if card.solved {
                            "aspect-square rounded-lg border bg-blue-900/30 border-blue-500/50 opacity-50 flex items-center justify-center p-1"
                        } else if card.mismatched {
                            "aspect-square rounded-lg border bg-red-900/40 border-red-500 flex items-center justify-center p-1 animate-shake"
                        } else if card.face_up {
                            "aspect-square rounded-lg border bg-blue-900/50 border-blue-400 flex items-center justify-center p-1"
                        } else {
                            "aspect-square rounded-lg border bg-gray-800 border-gray-700 hover:border-blue-400 hover:bg-gray-700 flex items-center justify-center p-1 transition-colors"
                        },
                        disabled: card.solved,
                        onclick: {
                            let flip = flip.clone();
                            let id = card.id;
                            move |_| flip(id)
                        },

                        if card.face_up || card.solved {
                            span {
                                class: if card.kind == CardKind::Concept {
                                    "font-mono text-xs text-blue-300 break-all"
                                } else {
                                    "font-mono text-xs text-white break-all"
                                },
                                "{card.label}"
                            }
                        } else {
                            span { class: "text-gray-600 text-lg font-bold", "?" }
                        }
                    }
                }
            }
        }
    }
}
