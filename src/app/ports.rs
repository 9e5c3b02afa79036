//! Port traits — the boundary between protocol logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Dispatcher (domain)
//! ```
//!
//! Concrete adapters (the real sensor/switch/delay hardware, or mocks in
//! tests) implement these; the dispatcher consumes them via generics and
//! never touches a peripheral directly.

use crate::pins::{PinRole, PIN_COUNT};

/// One single-byte read transaction against the sensor's bus address.
///
/// Deliberately infallible: bus-level failures are not modeled at this
/// layer, and any returned byte — including zero, read as "no reading" —
/// is a valid result. No retries, no validation.
pub trait SensorPort {
    fn read_sample(&mut self) -> u8;
}

/// Apply a full role assignment to the switched I/O fabric.
pub trait PinMuxPort {
    fn configure(&mut self, roles: [PinRole; PIN_COUNT]);
}

/// Blocking millisecond delay; no other work proceeds while it runs.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}

/// The dispatcher emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port; adapters decide where they go (serial log in
/// production, a capture vector in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
