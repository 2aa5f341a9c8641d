//! Ordered-assembly mini-game.
//!
//! The pipeline slots fill left to right as the player picks scattered
//! steps in the right order. A wrong pick flashes red on the step for a
//! beat and changes nothing else.

use dioxus::prelude::*;

use refactory_domain::{Guess, GuessOutcome, StepId};

use crate::infrastructure::spawn_task;
use crate::presentation::state::use_game_state;
use crate::ui::use_platform;

const WRONG_FLASH_MS: u64 = 400;

#[component]
pub fn AssemblyGame() -> Element {
    let game_state = use_game_state();
    let platform = use_platform();

    let (spec, pool, next_position, wrong_step) = {
        let game = game_state.game.read();
        let Some(assembly) = game.session().and_then(|session| session.assembly()) else {
            return rsx! {};
        };
        (
            assembly.spec(),
            assembly.remaining().to_vec(),
            assembly.next_position(),
            assembly.wrong_step(),
        )
    };

    let total = spec.steps.len() as u8;
    let pool: Vec<(StepId, &'static str)> = pool
        .into_iter()
        .filter_map(|id| spec.step(id).map(|step| (id, step.label)))
        .collect();

    let pick = move |step: StepId| {
        let mut state = game_state.clone();
        let report = state.submit_guess(Guess::Step(step));
        if report.outcome == GuessOutcome::Rejected {
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(WRONG_FLASH_MS).await;
                state.clear_feedback();
            });
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 w-full max-w-md mx-auto",

            div {
                class: "text-center",
                h4 { class: "text-yellow-500 font-bold text-lg mb-1", "🔧 {spec.title}" }
                p { class: "text-gray-400 text-sm", "{spec.tagline}" }
            }

            // Pipeline track: one slot per target position.
            div {
                class: "flex items-center justify-center py-4",
                for position in 1..=total {
                    div {
                        key: "{position}",
                        class: "flex items-center",

                        div {
                            class: if position < next_position {
                                "w-8 h-8 rounded-full bg-yellow-500 text-gray-900 font-bold flex items-center justify-center text-sm scale-110 transition-transform"
                            } else if position == next_position {
                                "w-8 h-8 rounded-full bg-gray-800 border-2 border-yellow-500 text-yellow-500 font-bold flex items-center justify-center text-sm animate-pulse"
                            } else {
                                "w-8 h-8 rounded-full bg-gray-800 border border-gray-700 text-gray-500 flex items-center justify-center text-sm"
                            },
                            if position < next_position {
                                "✓"
                            } else {
                                "{position}"
                            }
                        }

                        if position < total {
                            div {
                                class: if position < next_position {
                                    "w-6 h-0.5 bg-yellow-500"
                                } else {
                                    "w-6 h-0.5 bg-gray-700"
                                },
                            }
                        }
                    }
                }
            }

            div {
                class: "flex flex-wrap justify-center gap-3",
                for (step, label) in pool {
                    button {
                        key: "{step}",
                        class: if wrong_step == Some(step) {
                            "px-3 py-2 rounded text-sm bg-red-900/60 border border-red-500 border-b-2 border-b-red-500 text-red-300 max-w-[140px] truncate animate-shake"
                        } else {
                            "px-3 py-2 rounded text-sm bg-gray-800 border border-gray-700 border-b-2 border-b-yellow-600 text-gray-200 hover:bg-gray-700 transition-colors max-w-[140px] truncate"
                        },
                        onclick: {
                            let pick = pick.clone();
                            move |_| pick(step)
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
