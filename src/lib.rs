//! PulseBridge firmware library.
//!
//! Co-processor firmware bridging a host controller and a finger-clip
//! heart-rate sensor over I2C. The host drives everything through a
//! shared-memory mailbox: it posts a command word plus parameters, the
//! dispatcher executes it and clears the word to signal completion.
//!
//! Exposes the pure-logic modules for host-side integration testing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod logbuf;
pub mod mailbox;
pub mod pins;

mod error;
pub use error::{Error, Result};

pub mod adapters;
pub mod drivers;
pub mod sensors;
