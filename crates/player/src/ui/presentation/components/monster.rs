//! The monster illustration - five clickable body parts.
//!
//! Each part renders its damaged (patchwork creature) or healed (human
//! developer) artwork from its lifecycle, plus a particle burst while the
//! heal transition runs. Hover and click events funnel straight into
//! [`GameState`].

use dioxus::prelude::*;

use refactory_domain::{PartId, PartLifecycle};

use crate::presentation::state::use_game_state;
use crate::ui::use_platform;

/// Paint order, back to front. Arms tuck behind the torso and the head
/// sits on top of everything.
const PAINT_ORDER: [PartId; PartId::COUNT] = [
    PartId::Legs,
    PartId::RightArm,
    PartId::LeftArm,
    PartId::Torso,
    PartId::Head,
];

/// The full-body svg, sized by its parent
#[component]
pub fn Monster() -> Element {
    let game_state = use_game_state();
    let all_healed = game_state.game.read().all_healed();

    let hover_state = game_state.clone();

    rsx! {
        svg {
            view_box: "0 0 400 600",
            class: "w-full h-full max-h-[80vh] drop-shadow-2xl",
            onmouseleave: move |_| {
                let mut gs = hover_state.clone();
                gs.hover_part(None);
            },

            // Ground shadow under the figure
            ellipse {
                cx: "200",
                cy: "580",
                rx: "160",
                ry: "20",
                fill: "rgba(0,0,0,0.5)",
                class: "ground-aura",
            }

            for part in PAINT_ORDER {
                PartGroup { key: "{part}", part }
            }

            // Ambient sparks from the damaged machinery
            if !all_healed {
                g {
                    class: "animate-pulse-slow opacity-30",
                    path {
                        d: "M100 50 L120 80 L110 90 L130 120",
                        stroke: "#C6FF00",
                        stroke_width: "2",
                        fill: "none",
                        class: "spark",
                    }
                    path {
                        d: "M300 50 L280 80 L290 90 L270 120",
                        stroke: "#C6FF00",
                        stroke_width: "2",
                        fill: "none",
                        class: "spark",
                    }
                }
            }
        }
    }
}

/// One body part: artwork for its lifecycle plus input wiring
#[component]
fn PartGroup(part: PartId) -> Element {
    let game_state = use_game_state();
    let (lifecycle, active) = {
        let game = game_state.game.read();
        (game.lifecycle(part), game.active_part() == Some(part))
    };

    let click_state = game_state.clone();
    let enter_state = game_state;

    rsx! {
        g {
            id: "{part}",
            class: "{part_class(lifecycle, active)}",
            onclick: move |_| {
                let mut gs = click_state.clone();
                gs.select_part(part);
            },
            onmouseenter: move |_| {
                let mut gs = enter_state.clone();
                gs.hover_part(Some(part));
            },

            if lifecycle.is_healed() {
                {healed_art(part)}
            } else {
                {damaged_art(part)}
            }

            if lifecycle.is_transitioning() {
                ParticleBurst {}
            }
        }
    }
}

fn part_class(lifecycle: PartLifecycle, active: bool) -> &'static str {
    match lifecycle {
        PartLifecycle::Transitioning => "monster-part transition-all duration-500 refactoring",
        PartLifecycle::Healed => "monster-part transition-all duration-500 human-part-appear",
        PartLifecycle::Damaged if active => "monster-part transition-all duration-500 active",
        PartLifecycle::Damaged => "monster-part transition-all duration-500",
    }
}

/// Code-fragment burst played over a part while it dissolves.
///
/// Geometry is rolled once per mount, so each heal gets its own burst.
#[component]
fn ParticleBurst() -> Element {
    let platform = use_platform();
    let particles = use_hook(|| {
        (0..16)
            .map(|i| {
                let angle = (f64::from(i) / 16.0) * 360.0;
                let dist = 60.0 + platform.random_f64() * 80.0;
                Particle {
                    tx: angle.to_radians().cos() * dist,
                    ty: angle.to_radians().sin() * dist,
                    delay: 0.2 + platform.random_f64() * 0.3,
                    size: 3.0 + platform.random_f64() * 4.0,
                    color: match i % 3 {
                        0 => "#60A5FA",
                        1 => "#C6FF00",
                        _ => "#FFFFFF",
                    },
                }
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        g {
            class: "particles-group",
            style: "transform-box: fill-box; transform-origin: center;",
            for p in particles.iter() {
                rect {
                    width: "{p.size:.1}",
                    height: "{p.size:.1}",
                    fill: p.color,
                    rx: "1",
                    class: "particle",
                    style: "--tx: {p.tx:.1}px; --ty: {p.ty:.1}px; animation-delay: {p.delay:.2}s;",
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Particle {
    tx: f64,
    ty: f64,
    delay: f64,
    size: f64,
    color: &'static str,
}

// =============================================================================
// Damaged artwork - the stitched-together creature
// =============================================================================

fn damaged_art(part: PartId) -> Element {
    match part {
        PartId::Head => rsx! {
            g {
                // Neck with bolts
                rect { x: "170", y: "110", width: "60", height: "40", fill: "#689F38" }
                rect { x: "150", y: "125", width: "10", height: "10", fill: "#B0BEC5" }
                rect { x: "240", y: "125", width: "10", height: "10", fill: "#B0BEC5" }
                // Skull
                rect {
                    x: "150", y: "20", width: "100", height: "100", rx: "10",
                    fill: "#8BC34A", stroke: "#33691E", stroke_width: "2",
                }
                // Ragged hairline
                path {
                    d: "M150 20 L150 40 L160 30 L170 45 L180 30 L190 45 L200 30 L210 45 L220 30 L230 40 L250 40 L250 20 Z",
                    fill: "#212121",
                }
                // Eyes; the left one winks
                g {
                    class: "eye-wink",
                    circle { cx: "175", cy: "70", r: "8", fill: "#FFF" }
                    circle { cx: "175", cy: "70", r: "3", fill: "#000" }
                }
                circle { cx: "225", cy: "70", r: "8", fill: "#FFF" }
                circle { cx: "225", cy: "70", r: "3", fill: "#000" }
                // Forehead scar
                path { d: "M160 40 L190 45", stroke: "#33691E", stroke_width: "2" }
                line { x1: "165", y1: "38", x2: "165", y2: "46", stroke: "#33691E", stroke_width: "2" }
                line { x1: "175", y1: "39", x2: "175", y2: "47", stroke: "#33691E", stroke_width: "2" }
                line { x1: "185", y1: "40", x2: "185", y2: "48", stroke: "#33691E", stroke_width: "2" }
                path {
                    d: "M180 100 Q200 105 220 100",
                    stroke: "#33691E", stroke_width: "3", fill: "none",
                }
            }
        },
        PartId::Torso => rsx! {
            g {
                rect {
                    x: "110", y: "140", width: "180", height: "240", rx: "10",
                    fill: "#455A64", stroke: "#1a1a1a", stroke_width: "2",
                }
                path { d: "M110 140 L200 250 L290 140", fill: "#37474F", opacity: "0.5" }
                // Center seam
                path {
                    d: "M200 140 L200 380",
                    stroke: "#263238", stroke_width: "2", stroke_dasharray: "5,5",
                }
                // Reactor core
                circle {
                    cx: "200", cy: "200", r: "30",
                    fill: "#263238", stroke: "#78909C", stroke_width: "2",
                }
                path {
                    d: "M185 200 L215 200 M200 185 L200 215",
                    stroke: "#8BC34A", stroke_width: "2", class: "animate-pulse",
                }
                // Stitched gash
                path { d: "M130 300 L180 300", stroke: "#1a1a1a", stroke_width: "2" }
                line { x1: "140", y1: "290", x2: "140", y2: "310", stroke: "#1a1a1a", stroke_width: "2" }
                line { x1: "155", y1: "290", x2: "155", y2: "310", stroke: "#1a1a1a", stroke_width: "2" }
                line { x1: "170", y1: "290", x2: "170", y2: "310", stroke: "#1a1a1a", stroke_width: "2" }
            }
        },
        PartId::LeftArm => rsx! {
            g {
                path {
                    d: "M120 140 L40 180 L40 350 L120 300 Z",
                    fill: "#37474F", stroke: "#1a1a1a", stroke_width: "2",
                }
                rect {
                    x: "10", y: "350", width: "50", height: "60", rx: "10",
                    fill: "#8BC34A", stroke: "#33691E", stroke_width: "2",
                }
                rect {
                    x: "15", y: "360", width: "10", height: "40",
                    fill: "#424242", transform: "rotate(-15 20 380)",
                }
            }
        },
        PartId::RightArm => rsx! {
            g {
                path {
                    d: "M280 140 L360 180 L360 350 L280 300 Z",
                    fill: "#37474F", stroke: "#1a1a1a", stroke_width: "2",
                }
                rect {
                    x: "340", y: "350", width: "50", height: "60", rx: "10",
                    fill: "#8BC34A", stroke: "#33691E", stroke_width: "2",
                }
                rect { x: "350", y: "330", width: "20", height: "20", fill: "#546E7A" }
            }
        },
        PartId::Legs => rsx! {
            g {
                rect {
                    x: "130", y: "380", width: "50", height: "180",
                    fill: "#37474F", stroke: "#1a1a1a", stroke_width: "2",
                }
                rect { x: "120", y: "560", width: "70", height: "30", rx: "5", fill: "#212121" }
                rect {
                    x: "220", y: "380", width: "50", height: "180",
                    fill: "#37474F", stroke: "#1a1a1a", stroke_width: "2",
                }
                rect { x: "210", y: "560", width: "70", height: "30", rx: "5", fill: "#212121" }
                // Belt and buckle
                rect { x: "120", y: "360", width: "160", height: "40", fill: "#263238" }
                rect {
                    x: "180", y: "360", width: "40", height: "40",
                    fill: "#455A64", stroke: "#78909C", stroke_width: "2",
                }
                path { d: "M155 420 L155 450 M145 435 L165 435", stroke: "#78909C", stroke_width: "2" }
            }
        },
    }
}

// =============================================================================
// Healed artwork - the human developer
// =============================================================================

fn healed_art(part: PartId) -> Element {
    match part {
        PartId::Head => rsx! {
            g {
                rect { x: "175", y: "120", width: "50", height: "30", fill: "#FFCCBC" }
                ellipse {
                    cx: "200", cy: "80", rx: "55", ry: "65",
                    fill: "#FFCCBC", stroke: "#E64A19", stroke_width: "1",
                }
                // Hair
                path { d: "M145 60 C145 20, 255 20, 255 60 C255 40, 260 90, 255 80 L255 60 Z", fill: "#5D4037" }
                path { d: "M150 60 Q 200 10 250 60", fill: "#5D4037" }
                // Eyes behind glasses
                circle { cx: "180", cy: "75", r: "5", fill: "#3E2723", class: "eye-wink" }
                circle { cx: "220", cy: "75", r: "5", fill: "#3E2723" }
                path { d: "M165 75 L195 75 M205 75 L235 75", stroke: "#37474F", stroke_width: "2" }
                circle { cx: "180", cy: "75", r: "12", stroke: "#37474F", stroke_width: "2", fill: "none" }
                circle { cx: "220", cy: "75", r: "12", stroke: "#37474F", stroke_width: "2", fill: "none" }
                path { d: "M200 75 L200 78", stroke: "#37474F", stroke_width: "2" }
                path {
                    d: "M185 110 Q 200 120 215 110",
                    fill: "none", stroke: "#3E2723", stroke_width: "2", stroke_linecap: "round",
                }
            }
        },
        PartId::Torso => rsx! {
            g {
                // Hoodie with pocket
                path {
                    d: "M110 140 L290 140 L290 380 L110 380 Z",
                    fill: "#1976D2", stroke: "#0D47A1", stroke_width: "2",
                }
                path { d: "M140 280 L260 280 L240 360 L160 360 Z", fill: "#1565C0" }
                // Print: a passing check
                circle { cx: "200", cy: "220", r: "25", fill: "#E3F2FD", opacity: "0.2" }
                path { d: "M190 220 L200 230 L215 210", stroke: "#E3F2FD", stroke_width: "3", fill: "none" }
                // Drawstrings
                path { d: "M180 140 L180 200", stroke: "#E3F2FD", stroke_width: "2" }
                path { d: "M220 140 L220 200", stroke: "#E3F2FD", stroke_width: "2" }
            }
        },
        PartId::LeftArm => rsx! {
            g {
                path {
                    d: "M120 140 L40 180 L40 250 L120 220 Z",
                    fill: "#1976D2", stroke: "#0D47A1", stroke_width: "2",
                }
                path {
                    d: "M110 220 L50 250 L40 350 L110 350 Z",
                    fill: "#FFCCBC", stroke: "#E64A19", stroke_width: "1",
                }
                circle { cx: "70", cy: "350", r: "25", fill: "#FFCCBC", stroke: "#E64A19", stroke_width: "1" }
                // Watch
                rect { x: "55", y: "340", width: "30", height: "10", fill: "#212121", rx: "2" }
            }
        },
        PartId::RightArm => rsx! {
            g {
                path {
                    d: "M280 140 L360 180 L360 250 L280 220 Z",
                    fill: "#1976D2", stroke: "#0D47A1", stroke_width: "2",
                }
                path {
                    d: "M290 220 L350 250 L360 350 L290 350 Z",
                    fill: "#FFCCBC", stroke: "#E64A19", stroke_width: "1",
                }
                circle { cx: "330", cy: "350", r: "25", fill: "#FFCCBC", stroke: "#E64A19", stroke_width: "1" }
                // Coffee cup
                path {
                    d: "M315 330 L345 330 L340 370 L320 370 Z",
                    fill: "#D7CCC8", stroke: "#5D4037", stroke_width: "1",
                }
            }
        },
        PartId::Legs => rsx! {
            g {
                // Jeans
                path {
                    d: "M130 380 L130 560 L180 560 L180 420 L220 420 L220 560 L270 560 L270 380 Z",
                    fill: "#1565C0", stroke: "#0D47A1", stroke_width: "2",
                }
                // Sneakers
                path {
                    d: "M120 560 L180 560 L180 590 L120 590 Z",
                    fill: "#ECEFF1", stroke: "#CFD8DC", stroke_width: "2",
                }
                path {
                    d: "M220 560 L280 560 L280 590 L220 590 Z",
                    fill: "#ECEFF1", stroke: "#CFD8DC", stroke_width: "2",
                }
                rect { x: "130", y: "370", width: "140", height: "15", fill: "#3E2723" }
                rect { x: "190", y: "368", width: "20", height: "19", fill: "#FFC107", rx: "2" }
            }
        },
    }
}
