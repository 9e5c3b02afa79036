#![allow(dead_code)] // Init/Config variants only surface on the espidf target

//! Unified error types for the PulseBridge firmware.
//!
//! The mailbox protocol itself has no error channel: unknown command codes
//! are silently discarded and bus reads are treated as infallible (a zero
//! byte doubles as "no reading"). The variants here cover the fallible
//! edges around that core — peripheral bring-up and configuration.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed (carries the failing subsystem).
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
