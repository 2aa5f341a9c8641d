//! Monster View - the single scene of the game
//!
//! The damaged codebase monster, the header copy around it, the hover
//! hint, the part info panel, and the victory banner once every part
//! has been refactored.

use dioxus::prelude::*;

use refactory_domain::{part_content, PartLifecycle};

use crate::presentation::components::{InfoPanel, Monster};
use crate::presentation::state::use_game_state;

#[component]
pub fn MonsterView() -> Element {
    let game_state = use_game_state();

    let (active, hover_hint, hint_healed, all_healed) = {
        let game = game_state.game.read();
        let hint = game.hover_hint_part();
        (
            game.active_part(),
            hint,
            hint.is_some_and(|part| game.lifecycle(part) == PartLifecycle::Healed),
            game.all_healed(),
        )
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-950 text-white flex flex-col relative overflow-hidden scene-backdrop",

            header {
                class: "text-center pt-8 pb-4 px-4 z-10",

                h1 {
                    class: "text-3xl md:text-5xl font-mono font-black tracking-tight",
                    if all_healed {
                        span { class: "text-blue-400", "MODERN " }
                        span { class: "text-white", "DEVELOPER" }
                    } else {
                        span { class: "text-monster-skin", "LEGACY PHP " }
                        span { class: "text-white", "CODEBASE" }
                    }
                }

                p {
                    class: "text-gray-400 mt-2 text-sm md:text-base max-w-xl mx-auto",
                    if all_healed {
                        "You've completely refactored the monster! The codebase is now clean and maintainable."
                    } else {
                        "A Love Story. Play the mini-games to refactor the monster into a modern developer."
                    }
                }

                div {
                    class: "flex items-center justify-center gap-3 mt-4 flex-wrap",

                    a {
                        class: "px-3 py-1 rounded-full text-xs bg-gray-800 text-gray-300 hover:bg-gray-700 transition-colors",
                        href: "https://dev.to/suckup_de/legacy-codebase-a-love-story-21p3",
                        target: "_blank",
                        "Blog Post"
                    }
                    a {
                        class: "px-3 py-1 rounded-full text-xs bg-gray-800 text-gray-300 hover:bg-gray-700 transition-colors",
                        href: "https://github.com/voku/LegacyPHP",
                        target: "_blank",
                        "GitHub"
                    }
                    if !all_healed {
                        span {
                            class: "px-3 py-1 rounded-full text-xs bg-monster-skin/20 text-monster-skin",
                            "Hover and click body parts"
                        }
                    }
                }
            }

            main {
                class: "flex-1 flex items-center justify-center relative px-4",

                div {
                    class: "w-full max-w-lg md:max-w-xl lg:max-w-2xl animate-float",
                    Monster {}
                }

                if let Some(part) = hover_hint {
                    div {
                        class: if hint_healed {
                            "absolute bottom-10 left-1/2 -translate-x-1/2 px-4 py-2 rounded-full text-sm font-bold bg-blue-500 text-white shadow-lg animate-bounce"
                        } else {
                            "absolute bottom-10 left-1/2 -translate-x-1/2 px-4 py-2 rounded-full text-sm font-bold bg-monster-skin text-gray-950 shadow-lg animate-bounce"
                        },
                        "{part_content(part).title}"
                        if hint_healed {
                            " ✓"
                        }
                    }
                }
            }

            if let Some(part) = active {
                InfoPanel { part }
            }

            if all_healed {
                WinBanner {}
            }

            div {
                class: if all_healed {
                    "pointer-events-none fixed bottom-0 inset-x-0 h-40 bg-gradient-to-t from-blue-500/10 to-transparent"
                } else {
                    "pointer-events-none fixed bottom-0 inset-x-0 h-40 bg-gradient-to-t from-monster-skin/10 to-transparent"
                },
            }
        }
    }
}

/// Full-screen banner shown once the last part heals.
#[component]
fn WinBanner() -> Element {
    let game_state = use_game_state();

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/80 backdrop-blur-md flex items-center justify-center p-4 animate-fade-in",

            div {
                class: "bg-gray-900 border-2 border-blue-500 rounded-2xl p-8 w-full max-w-md text-center shadow-2xl animate-zoom-in",

                div {
                    class: "w-20 h-20 mx-auto rounded-full bg-gradient-to-br from-blue-500 to-cyan-400 flex items-center justify-center text-4xl mb-6",
                    "🏆"
                }

                h2 {
                    class: "text-3xl font-black bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent mb-2",
                    "SYSTEM UPGRADED"
                }
                p { class: "text-sm font-mono text-gray-400 mb-4", "Legacy Codebase Refactored" }
                p {
                    class: "text-gray-300 mb-8",
                    "Congratulations! You've successfully transformed the legacy monster into a modern, type-safe, and well-maintained developer."
                }

                button {
                    class: "w-full py-3 bg-blue-500 hover:bg-blue-400 text-white font-bold rounded-lg transition-colors",
                    onclick: {
                        let state = game_state.clone();
                        move |_| {
                            let mut state = state.clone();
                            state.restart();
                        }
                    },
                    "✨ Start New Project"
                }
            }
        }
    }
}
