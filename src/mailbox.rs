//! Shared-memory mailbox between the host controller and this firmware.
//!
//! Layout (4-byte unsigned words, host-visible ABI):
//!
//! ```text
//! ┌──────────────┬─────────────────────┬───────────────────────────────┐
//! │ command word │ data slots 0..3     │ log window (slots 4..1003)    │
//! │ 0 = idle     │ params / results    │ 4000 bytes of logged samples  │
//! └──────────────┴─────────────────────┴───────────────────────────────┘
//! ```
//!
//! Ownership of each word alternates by protocol phase, never by lock:
//! the host writes a fresh command value (and, during a log session, the
//! stop bit); the firmware writes results and clears the command word on
//! completion. Exactly one command is in flight at a time — posting a
//! second command while the word is non-zero is a host-side protocol
//! violation and outside this module's guarantees.
//!
//! Words are atomics so the host side (in tests, another thread or a
//! delay-hook callback) can write while the dispatcher polls.

use core::sync::atomic::{AtomicU32, Ordering};

/// Command word value meaning "idle / no pending command".
pub const CMD_IDLE: u32 = 0;

/// Bytes per mailbox word.
pub const SLOT_BYTES: usize = 4;

/// Data slots reserved for command parameters and results.
pub const PARAM_SLOTS: usize = 4;

/// First data slot of the log window.
pub const LOG_BASE_SLOT: usize = PARAM_SLOTS;

/// Bytes reserved for the log window.
pub const LOG_REGION_BYTES: usize = 4000;

/// Total data slots: parameter slots followed by the log window.
pub const DATA_SLOTS: usize = PARAM_SLOTS + LOG_REGION_BYTES / SLOT_BYTES;

/// The shared mailbox region.
///
/// Lives for the whole process; handed to the dispatcher by reference
/// rather than accessed as ambient global state.
pub struct Mailbox {
    command: AtomicU32,
    data: [AtomicU32; DATA_SLOTS],
}

impl Mailbox {
    /// A fresh mailbox with the command word idle and all slots zero.
    pub const fn new() -> Self {
        Self {
            command: AtomicU32::new(CMD_IDLE),
            data: [const { AtomicU32::new(0) }; DATA_SLOTS],
        }
    }

    /// Current command word. `CMD_IDLE` means no pending command.
    pub fn command(&self) -> u32 {
        self.command.load(Ordering::Acquire)
    }

    /// Host side: post a command code (or the stop value during a log
    /// session). Parameters must be in the data slots before this call.
    pub fn post_command(&self, code: u32) {
        self.command.store(code, Ordering::Release);
    }

    /// Firmware side: signal completion back to the host.
    pub fn clear_command(&self) {
        self.command.store(CMD_IDLE, Ordering::Release);
    }

    /// Read a data slot.
    pub fn data(&self, slot: usize) -> u32 {
        self.data[slot].load(Ordering::Relaxed)
    }

    /// Write a data slot.
    pub fn set_data(&self, slot: usize, value: u32) {
        self.data[slot].store(value, Ordering::Relaxed);
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}
