//! Mock platform implementations for tests
//!
//! Deterministic providers that record their inputs instead of touching
//! real timers, RNGs, or the browser document. Each provider shares its
//! recorded state across clones, so tests keep a handle and pass a clone
//! into [`Platform::new`].

use crate::ports::outbound::{DocumentProvider, LogProvider, RandomProvider, SleepProvider};
use crate::state::Platform;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// Mock sleep provider that completes immediately and records requested durations
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    requested: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations passed to `sleep_ms`, in call order
    pub fn requested(&self) -> Vec<u64> {
        self.requested.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut guard) = self.requested.lock() {
            guard.push(ms);
        }
        Box::pin(async {})
    }
}

/// Mock random provider that replays a scripted sequence of `[0, 1)` values
///
/// `random_range` scales the next scripted value across the requested span,
/// the same way the WASM provider derives ranged values from `Math.random`.
/// An exhausted (or unscripted) provider returns 0.0.
#[derive(Clone, Default)]
pub struct MockRandomProvider {
    values: Arc<Mutex<Vec<f64>>>,
}

impl MockRandomProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the values returned by `random_f64` / consumed by `random_range`
    pub fn with_values(values: &[f64]) -> Self {
        Self {
            values: Arc::new(Mutex::new(values.to_vec())),
        }
    }

    fn next_value(&self) -> f64 {
        match self.values.lock() {
            Ok(mut guard) if !guard.is_empty() => guard.remove(0),
            _ => 0.0,
        }
    }
}

impl RandomProvider for MockRandomProvider {
    fn random_f64(&self) -> f64 {
        self.next_value()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = f64::from(max - min + 1);
        min + (self.next_value() * span).floor() as i32
    }
}

/// Mock log provider that collects level-prefixed lines
#[derive(Clone, Default)]
pub struct MockLogProvider {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockLogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines logged so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn push(&self, level: &str, msg: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(format!("{level}: {msg}"));
        }
    }
}

impl LogProvider for MockLogProvider {
    fn info(&self, msg: &str) {
        self.push("INFO", msg);
    }

    fn error(&self, msg: &str) {
        self.push("ERROR", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("DEBUG", msg);
    }

    fn warn(&self, msg: &str) {
        self.push("WARN", msg);
    }
}

/// Mock document provider that records the last title set
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent title passed to `set_page_title`
    pub fn title(&self) -> Option<String> {
        self.title.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.title.lock() {
            *guard = Some(title.to_string());
        }
    }
}

/// Create a fully mocked platform with default providers
pub fn create_mock_platform() -> Platform {
    Platform::new(
        MockSleepProvider::new(),
        MockRandomProvider::new(),
        MockLogProvider::new(),
        MockDocumentProvider::new(),
    )
}
