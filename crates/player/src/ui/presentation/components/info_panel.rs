//! Part info panel overlay.
//!
//! Opens when a body part is selected. Shows the part's lore and key
//! takeaways, and hosts the mini-game once a refactoring run starts.
//! Clicking the backdrop or the close button plays a short exit animation
//! and then dismisses the panel; clicks inside the panel stay inside.

use dioxus::prelude::*;

use refactory_domain::{part_content, ChallengeKind, PartIcon, PartId, PartLifecycle};

use crate::infrastructure::spawn_task;
use crate::presentation::components::games::{AssemblyGame, MatchingGame, QuizGame};
use crate::presentation::state::use_game_state;
use crate::ui::use_platform;

/// Must match the fade-out and zoom-out durations in the stylesheet.
const CLOSE_ANIMATION_MS: u64 = 200;

fn icon_emoji(icon: PartIcon) -> &'static str {
    match icon {
        PartIcon::Brain => "🧠",
        PartIcon::Heart => "❤️",
        PartIcon::Wrench => "🔧",
        PartIcon::Shield => "🛡️",
        PartIcon::Footprints => "👣",
    }
}

/// Modal panel for the selected body part.
#[component]
pub fn InfoPanel(part: PartId) -> Element {
    let game_state = use_game_state();
    let platform = use_platform();
    let content = part_content(part);
    let mut closing = use_signal(|| false);

    let (healed, challenge) = {
        let game = game_state.game.read();
        (
            game.lifecycle(part) == PartLifecycle::Healed,
            game.session().map(|session| session.kind()),
        )
    };

    let border = if healed {
        "border-blue-500"
    } else {
        "border-monster-skin"
    };
    let icon_bg = if healed {
        "bg-blue-500/20"
    } else {
        "bg-monster-skin/20"
    };
    let footer_strip = if healed {
        "bg-gradient-to-r from-blue-500 via-cyan-400 to-blue-500"
    } else {
        "bg-gradient-to-r from-monster-skin via-green-700 to-monster-skin"
    };

    // The exit animation runs before the actual close. A win closes the
    // overlay from the engine directly and skips this path.
    let request_close = {
        let game_state = game_state.clone();
        let platform = platform.clone();
        EventHandler::new(move |_: ()| {
            if closing() {
                return;
            }
            closing.set(true);
            let mut state = game_state.clone();
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(CLOSE_ANIMATION_MS).await;
                state.close_overlay();
            });
        })
    };

    let backdrop_anim = if closing() {
        "animate-fade-out"
    } else {
        "animate-fade-in"
    };
    let panel_anim = if closing() {
        "animate-zoom-out"
    } else {
        "animate-zoom-in"
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/70 backdrop-blur-sm flex items-center justify-center p-4 {backdrop_anim}",
            onclick: move |_| request_close.call(()),

            div {
                class: "bg-gray-900 border-2 {border} rounded-lg shadow-2xl w-full max-w-2xl max-h-[90vh] overflow-y-auto flex flex-col {panel_anim}",
                onclick: move |event| event.stop_propagation(),

                // Sticky header: part identity plus close control.
                div {
                    class: "sticky top-0 z-10 bg-gray-900/95 backdrop-blur border-b border-gray-800 p-6 flex items-start justify-between gap-4",

                    div {
                        class: "flex items-center gap-4",

                        div {
                            class: "w-12 h-12 rounded-full {icon_bg} flex items-center justify-center text-2xl shrink-0",
                            if healed {
                                span { class: "text-blue-400 font-bold", "✓" }
                            } else {
                                "{icon_emoji(content.icon)}"
                            }
                        }

                        div {
                            h2 {
                                class: "text-xl font-bold text-white flex items-center gap-2 flex-wrap",
                                "{content.title}"
                                if healed {
                                    span {
                                        class: "text-xs bg-blue-500 text-white px-2 py-0.5 rounded font-mono",
                                        "REFACTORED"
                                    }
                                }
                            }
                            p {
                                class: "text-sm text-gray-400",
                                if healed {
                                    "Modernized Component"
                                } else {
                                    "{content.subtitle}"
                                }
                            }
                        }
                    }

                    button {
                        class: "text-gray-500 hover:text-white text-2xl leading-none transition-colors",
                        onclick: move |_| request_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "p-6 min-h-[400px]",
                    match challenge {
                        Some(kind) => rsx! { ChallengeView { kind } },
                        None => rsx! { DetailView { part, healed } },
                    }
                }

                div { class: "h-2 {footer_strip} shrink-0" }
            }
        }
    }
}

/// Lore view: description, takeaway accordion, and the challenge launcher.
#[component]
fn DetailView(part: PartId, healed: bool) -> Element {
    let game_state = use_game_state();
    let content = part_content(part);
    let mut expanded = use_signal(|| None::<usize>);

    let description_border = if healed {
        "border-blue-500/50"
    } else {
        "border-monster-skin/50"
    };

    rsx! {
        div {
            class: "flex flex-col gap-6",

            p {
                class: "text-gray-300 italic border-l-4 {description_border} pl-4",
                "{content.description}"
            }

            div {
                h3 {
                    class: "text-sm font-bold text-gray-500 uppercase tracking-wider mb-3",
                    "⚡ Key Takeaways"
                }

                div {
                    class: "flex flex-col gap-2",
                    for (index, point) in content.points.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "bg-gray-800/50 rounded overflow-hidden",

                            button {
                                class: "w-full flex items-center justify-between gap-3 p-3 text-left hover:bg-gray-800 transition-colors",
                                onclick: move |_| {
                                    let open = expanded() == Some(index);
                                    expanded.set(if open { None } else { Some(index) });
                                },
                                span { class: "text-sm text-gray-200", "{point.summary}" }
                                span {
                                    class: if expanded() == Some(index) {
                                        "text-gray-500 transition-transform rotate-180"
                                    } else {
                                        "text-gray-500 transition-transform"
                                    },
                                    "▾"
                                }
                            }

                            if expanded() == Some(index) {
                                p {
                                    class: "text-sm text-gray-400 px-3 pb-3 animate-fade-in",
                                    "{point.detail}"
                                }
                            }
                        }
                    }
                }
            }

            if healed {
                p {
                    class: "text-blue-300 text-sm text-center pt-2",
                    "This part of the codebase is now clean and modern."
                }
            } else {
                button {
                    class: "w-full py-3 bg-monster-skin hover:bg-green-500 text-gray-950 font-bold rounded-lg transition-colors",
                    onclick: {
                        let state = game_state.clone();
                        move |_| {
                            let mut state = state.clone();
                            state.start_challenge(part);
                        }
                    },
                    "Refactor This Part"
                }
            }
        }
    }
}

/// Active challenge view: the archetype's mini-game plus a cancel link.
#[component]
fn ChallengeView(kind: ChallengeKind) -> Element {
    let game_state = use_game_state();

    rsx! {
        div {
            class: "flex flex-col gap-6",

            match kind {
                ChallengeKind::Quiz => rsx! { QuizGame {} },
                ChallengeKind::Assembly => rsx! { AssemblyGame {} },
                ChallengeKind::Matching => rsx! { MatchingGame {} },
            }

            button {
                class: "text-xs text-gray-500 hover:text-gray-300 underline mx-auto transition-colors",
                onclick: {
                    let state = game_state.clone();
                    move |_| {
                        let mut state = state.clone();
                        state.cancel_challenge();
                    }
                },
                "Cancel Refactoring"
            }
        }
    }
}
