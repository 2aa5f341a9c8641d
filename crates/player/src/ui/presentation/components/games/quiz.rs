//! Quiz mini-game, shared by the three quiz-bound parts.
//!
//! One component drives submission and feedback pacing; the presentation
//! variant picks the chrome around it: a log viewer for the stack-trace
//! hunt, decision cards for the strategy quiz, a terminal for the git
//! quiz.

use dioxus::prelude::*;

use refactory_domain::{Guess, GuessOutcome, QuizFeedback, QuizPresentation, QuizRound, QuizSpec};

use crate::infrastructure::spawn_task;
use crate::presentation::state::use_game_state;
use crate::ui::use_platform;

/// How long correct and wrong flashes stay on screen, per chrome.
/// The strategy cards linger so the revealed rationale can be read.
fn feedback_hold_ms(presentation: QuizPresentation) -> (u64, u64) {
    match presentation {
        QuizPresentation::StackFrames => (1000, 800),
        QuizPresentation::StrategyCards => (2000, 2500),
        QuizPresentation::GitConsole => (1000, 800),
    }
}

/// Quiz driver: submits choices and schedules the feedback clear that
/// lets the next round (or a retry) through.
#[component]
pub fn QuizGame() -> Element {
    let game_state = use_game_state();
    let platform = use_platform();

    let (spec, feedback, current_round) = {
        let game = game_state.game.read();
        let Some(quiz) = game.session().and_then(|session| session.quiz()) else {
            return rsx! {};
        };
        (quiz.spec(), quiz.feedback(), quiz.current_round())
    };

    // While the correct flash is up the engine has already advanced;
    // keep showing the round the player just cleared.
    let round_index = match feedback {
        QuizFeedback::Correct { .. } => current_round.saturating_sub(1),
        _ => current_round,
    };
    let Some(round) = spec.rounds.get(round_index) else {
        return rsx! {};
    };

    let (advance_ms, retry_ms) = feedback_hold_ms(spec.presentation);
    let choose = EventHandler::new(move |option: usize| {
        let mut state = game_state.clone();
        let report = state.submit_guess(Guess::Choice(option));
        let hold = match report.outcome {
            // A winning answer closes the overlay; only an intermediate
            // advance needs its flash cleared here.
            GuessOutcome::Accepted if report.events.is_empty() => Some(advance_ms),
            GuessOutcome::Rejected => Some(retry_ms),
            _ => None,
        };
        if let Some(ms) = hold {
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(ms).await;
                state.clear_feedback();
            });
        }
    });

    match spec.presentation {
        QuizPresentation::StackFrames => rsx! {
            StackFrameQuiz { spec, round, round_index, feedback, on_choose: choose }
        },
        QuizPresentation::StrategyCards => rsx! {
            StrategyQuiz { spec, round, round_index, feedback, on_choose: choose }
        },
        QuizPresentation::GitConsole => rsx! {
            GitConsoleQuiz { spec, round, round_index, feedback, on_choose: choose }
        },
    }
}

fn is_correct_flash(feedback: QuizFeedback, option: usize) -> bool {
    matches!(feedback, QuizFeedback::Correct { option: chosen } if chosen == option)
}

fn is_wrong_flash(feedback: QuizFeedback, option: usize) -> bool {
    matches!(feedback, QuizFeedback::Wrong { option: chosen } if chosen == option)
}

fn round_bar_class(index: usize, round_index: usize, accent: &'static str) -> String {
    if index < round_index {
        "h-2 w-8 rounded-full bg-green-500".to_string()
    } else if index == round_index {
        format!("h-2 w-8 rounded-full animate-pulse {accent}")
    } else {
        "h-2 w-8 rounded-full bg-gray-700".to_string()
    }
}

/// Props for the StackFrameQuiz component
#[derive(Props, Clone, PartialEq)]
struct StackFrameQuizProps {
    spec: &'static QuizSpec,
    round: &'static QuizRound,
    round_index: usize,
    feedback: QuizFeedback,
    on_choose: EventHandler<usize>,
}

/// Log-viewer chrome: options are the frames of a stack trace.
#[component]
fn StackFrameQuiz(props: StackFrameQuizProps) -> Element {
    let feedback = props.feedback;
    let locked = feedback != QuizFeedback::Idle;

    rsx! {
        div {
            class: if matches!(feedback, QuizFeedback::Wrong { .. }) {
                "flex flex-col items-center gap-4 w-full max-w-lg mx-auto animate-shake"
            } else {
                "flex flex-col items-center gap-4 w-full max-w-lg mx-auto"
            },

            div {
                class: "text-center",
                h4 { class: "text-monster-skin font-bold text-lg mb-1", "{props.spec.title}" }
                p { class: "text-gray-400 text-sm min-h-[40px]", "{props.round.prompt}" }
                div {
                    class: "flex justify-center gap-1 mt-2",
                    for index in 0..props.spec.rounds.len() {
                        div {
                            key: "{index}",
                            class: round_bar_class(index, props.round_index, "bg-monster-skin"),
                        }
                    }
                }
            }

            div {
                class: "bg-gray-950 rounded-lg border border-gray-800 overflow-hidden font-mono text-xs w-full",

                div {
                    class: "bg-gray-900 px-3 py-2 flex items-center gap-2 border-b border-gray-800",
                    div { class: "w-2.5 h-2.5 rounded-full bg-red-500" }
                    div { class: "w-2.5 h-2.5 rounded-full bg-yellow-500" }
                    div { class: "w-2.5 h-2.5 rounded-full bg-green-500" }
                    span { class: "text-gray-500 ml-2", "php-fpm.log" }
                }

                div {
                    class: "divide-y divide-gray-800",
                    for (index, option) in props.round.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: if is_correct_flash(feedback, index) {
                                "w-full text-left p-3 flex items-start gap-3 bg-green-900/30 text-green-400"
                            } else if matches!(feedback, QuizFeedback::Wrong { .. }) && !option.correct {
                                "w-full text-left p-3 flex items-start gap-3 opacity-50 text-gray-300"
                            } else {
                                "w-full text-left p-3 flex items-start gap-3 text-gray-300 hover:bg-gray-800/50 transition-colors"
                            },
                            disabled: locked,
                            onclick: move |_| props.on_choose.call(index),

                            span { class: "text-gray-600 shrink-0", "#{index}" }
                            span { class: "break-all", "{option.label}" }
                            if is_correct_flash(feedback, index) {
                                span { class: "ml-auto text-green-400", "✓" }
                            }
                        }
                    }
                }

                div {
                    class: "p-3 border-t border-gray-800 italic text-center",
                    match feedback {
                        QuizFeedback::Idle => rsx! {
                            span { class: "text-gray-600", "Waiting for input..." }
                        },
                        QuizFeedback::Correct { .. } => rsx! {
                            span { class: "text-green-400", "✓ Correct! Analyzing next trace..." }
                        },
                        QuizFeedback::Wrong { .. } => rsx! {
                            span { class: "text-red-400", "⚠ Wrong frame! Read the stack trace carefully." }
                        },
                    }
                }
            }
        }
    }
}

/// Props for the StrategyQuiz component
#[derive(Props, Clone, PartialEq)]
struct StrategyQuizProps {
    spec: &'static QuizSpec,
    round: &'static QuizRound,
    round_index: usize,
    feedback: QuizFeedback,
    on_choose: EventHandler<usize>,
}

/// Decision-card chrome with radio options and revealed rationale.
#[component]
fn StrategyQuiz(props: StrategyQuizProps) -> Element {
    let feedback = props.feedback;
    let locked = feedback != QuizFeedback::Idle;

    rsx! {
        div {
            class: if matches!(feedback, QuizFeedback::Wrong { .. }) {
                "flex flex-col items-center gap-4 w-full max-w-md mx-auto animate-shake"
            } else {
                "flex flex-col items-center gap-4 w-full max-w-md mx-auto"
            },

            div {
                class: "text-center",
                h4 { class: "text-red-500 font-bold text-lg mb-1", "❤️ {props.spec.title}" }
                p { class: "text-gray-400 text-sm", "{props.spec.tagline}" }
                div {
                    class: "flex justify-center gap-1 mt-2",
                    for index in 0..props.spec.rounds.len() {
                        div {
                            key: "{index}",
                            class: round_bar_class(index, props.round_index, "bg-red-500"),
                        }
                    }
                }
            }

            div {
                class: "bg-gray-800 border border-gray-700 rounded-lg p-5 w-full",

                h5 { class: "text-white font-semibold mb-4", "{props.round.prompt}" }

                div {
                    class: "flex flex-col gap-3",
                    for (index, option) in props.round.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: if is_correct_flash(feedback, index) {
                                "w-full text-left p-4 rounded-lg border bg-green-900/40 border-green-500 text-green-300"
                            } else if is_wrong_flash(feedback, index) {
                                "w-full text-left p-4 rounded-lg border bg-red-900/40 border-red-500 text-red-300"
                            } else if locked {
                                "w-full text-left p-4 rounded-lg border border-gray-700 text-gray-400 opacity-60"
                            } else {
                                "w-full text-left p-4 rounded-lg border border-gray-700 text-gray-200 hover:border-red-400 hover:bg-gray-700/50 transition-all"
                            },
                            disabled: locked,
                            onclick: move |_| props.on_choose.call(index),

                            div {
                                class: "flex items-center gap-3",
                                div {
                                    class: if is_correct_flash(feedback, index) {
                                        "w-4 h-4 rounded-full border-2 border-green-400 bg-green-400 shrink-0"
                                    } else if is_wrong_flash(feedback, index) {
                                        "w-4 h-4 rounded-full border-2 border-red-400 bg-red-400 shrink-0"
                                    } else {
                                        "w-4 h-4 rounded-full border-2 border-gray-500 shrink-0"
                                    },
                                }
                                span { "{option.label}" }
                            }
                            if is_correct_flash(feedback, index) {
                                if let Some(explanation) = option.explanation {
                                    p {
                                        class: "text-xs text-green-200/80 mt-2 pl-7 animate-fade-in",
                                        "Why: {explanation}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if matches!(feedback, QuizFeedback::Wrong { .. }) {
                div {
                    class: "text-red-400 text-sm font-semibold animate-fade-in",
                    "⚠ Incorrect strategy. Try again."
                }
            }
        }
    }
}

/// Props for the GitConsoleQuiz component
#[derive(Props, Clone, PartialEq)]
struct GitConsoleQuizProps {
    spec: &'static QuizSpec,
    round: &'static QuizRound,
    round_index: usize,
    feedback: QuizFeedback,
    on_choose: EventHandler<usize>,
}

/// Terminal chrome: options are shell commands for the scenario.
#[component]
fn GitConsoleQuiz(props: GitConsoleQuizProps) -> Element {
    let feedback = props.feedback;
    let locked = feedback != QuizFeedback::Idle;

    rsx! {
        div {
            class: if matches!(feedback, QuizFeedback::Wrong { .. }) {
                "flex flex-col items-center gap-4 w-full max-w-md mx-auto animate-shake"
            } else {
                "flex flex-col items-center gap-4 w-full max-w-md mx-auto"
            },

            div {
                class: "text-center",
                h4 { class: "text-orange-500 font-bold text-lg mb-1", "{props.spec.title}" }
                p { class: "text-gray-400 text-sm", "{props.spec.tagline}" }
            }

            div {
                class: "bg-gray-950 rounded-lg border border-gray-700 overflow-hidden font-mono text-sm w-full",

                div {
                    class: "bg-gray-800 px-3 py-1.5 flex items-center gap-2",
                    div { class: "w-2.5 h-2.5 rounded-full bg-red-500" }
                    div { class: "w-2.5 h-2.5 rounded-full bg-yellow-500" }
                    div { class: "w-2.5 h-2.5 rounded-full bg-green-500" }
                    span { class: "text-gray-400 text-xs ml-2", "bash — 80x24" }
                }

                div {
                    class: "p-4 flex flex-col gap-3",

                    div { class: "text-gray-500", "dev@legacy:~$ git status" }
                    div {
                        class: "text-gray-300",
                        span { class: "text-orange-400", "# Scenario: " }
                        "{props.round.prompt}"
                    }

                    div {
                        class: "flex flex-col gap-2",
                        for (index, option) in props.round.options.iter().enumerate() {
                            button {
                                key: "{index}",
                                class: if is_correct_flash(feedback, index) {
                                    "text-left px-3 py-2 rounded border border-green-500 bg-green-900/30 text-green-400"
                                } else if is_wrong_flash(feedback, index) {
                                    "text-left px-3 py-2 rounded border border-red-500 bg-red-900/30 text-red-400"
                                } else if locked {
                                    "text-left px-3 py-2 rounded border border-gray-800 text-gray-500"
                                } else {
                                    "text-left px-3 py-2 rounded border border-gray-800 text-gray-300 hover:border-orange-500 hover:bg-gray-800/50 transition-colors"
                                },
                                disabled: locked,
                                onclick: move |_| props.on_choose.call(index),

                                span { class: "text-gray-600", "$ " }
                                "{option.label}"
                            }
                        }
                    }

                    div {
                        class: "h-6 italic",
                        match feedback {
                            QuizFeedback::Idle => rsx! {},
                            QuizFeedback::Correct { .. } => rsx! {
                                span { class: "text-green-400", "✓ Command executed successfully." }
                            },
                            QuizFeedback::Wrong { .. } => rsx! {
                                span { class: "text-red-400", "✗ Error: Command failed." }
                            },
                        }
                    }
                }
            }

            div {
                class: "flex gap-1.5",
                for index in 0..props.spec.rounds.len() {
                    div {
                        key: "{index}",
                        class: if index < props.round_index {
                            "w-2 h-2 rounded-full bg-green-500"
                        } else if index == props.round_index {
                            "w-2 h-2 rounded-full bg-orange-500 animate-pulse"
                        } else {
                            "w-2 h-2 rounded-full bg-gray-700"
                        },
                    }
                }
            }
        }
    }
}
