use dioxus::prelude::*;

pub mod presentation;

pub use crate::state::Platform;

use presentation::state::GameState;
use presentation::views::MonsterView;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_context::<Platform>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(move || GameState::new(platform));

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/refactory.css"),
        }

        MonsterView {}
    }
}
