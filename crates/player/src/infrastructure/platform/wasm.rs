//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys, and gloo.

use crate::ports::outbound::{DocumentProvider, LogProvider, RandomProvider, SleepProvider};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// WASM sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms as u32).await;
        })
    }
}

/// WASM random provider using Math.random
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_f64(&self) -> f64 {
        js_sys::Math::random()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = f64::from(max - min + 1);
        min + (js_sys::Math::random() * span).floor() as i32
    }
}

/// WASM log provider using tracing (bridged to the console by tracing-wasm)
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// WASM document provider using web-sys
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmRandomProvider,
        WasmLogProvider,
        WasmDocumentProvider,
    )
}
