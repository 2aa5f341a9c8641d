//! Infrastructure layer - platform adapters and task spawning.

pub mod platform;

use std::future::Future;

/// Spawn a detached background task.
///
/// Unlike `dioxus::prelude::spawn`, tasks do not die with the component
/// that spawned them. The heal timer depends on this: it is armed from
/// the challenge overlay, and the winning guess closes that overlay.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    // Parked on the root scope, which lives until app shutdown.
    let _ = dioxus::core::spawn_forever(future);
}

/// Spawn a detached background task.
///
/// On wasm the browser executor owns the task, so it is detached from
/// any component scope by construction.
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
