//! Outbound ports - Interfaces for platform services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing presentation code to interact with platform facilities without
//! depending on concrete implementations.

pub mod platform;

pub use platform::{DocumentProvider, LogProvider, RandomProvider, SleepProvider};
