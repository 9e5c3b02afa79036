//! Application core — pure protocol logic, zero I/O.
//!
//! This layer owns the mailbox protocol: command decoding, the dispatch
//! state machine, and the cancellable sampling loop. All hardware access
//! goes through the **port traits** in [`ports`], so the whole layer runs
//! unchanged on the host under test with mock adapters.

pub mod commands;
pub mod events;
pub mod ports;
pub mod sampler;
pub mod service;
