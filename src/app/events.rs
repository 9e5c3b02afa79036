//! Outbound application events.
//!
//! Emitted by the dispatcher through the
//! [`EventSink`](super::ports::EventSink) port. The mailbox ABI itself
//! carries no status information beyond the data slots, so these are the
//! firmware's only observability surface.

/// Structured events emitted by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Dispatcher entered its idle-poll loop.
    Started,

    /// The switch matrix was reconfigured by the host.
    SwitchConfigured { scl_pin: u32, sda_pin: u32 },

    /// A single-shot sensor read completed (value already in slot 0).
    SampleRead(u8),

    /// A logging session began.
    LogSessionStarted { interval_ms: u32, capacity: usize },

    /// A logging session observed the stop bit and terminated.
    LogSessionStopped { samples: u64 },

    /// An unrecognised command code was discarded.
    UnknownCommand(u32),
}
