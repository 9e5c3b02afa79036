//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the serial log. Tests implement the same trait with a capture vector
//! instead.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | dispatcher ready");
            }
            AppEvent::SwitchConfigured { scl_pin, sda_pin } => {
                info!("MUX   | scl=pin{} sda=pin{}", scl_pin, sda_pin);
            }
            AppEvent::SampleRead(bpm) => {
                info!("READ  | {} bpm", bpm);
            }
            AppEvent::LogSessionStarted {
                interval_ms,
                capacity,
            } => {
                info!(
                    "LOG   | session started, interval={}ms capacity={}",
                    interval_ms, capacity
                );
            }
            AppEvent::LogSessionStopped { samples } => {
                info!("LOG   | session stopped after {} samples", samples);
            }
            AppEvent::UnknownCommand(raw) => {
                warn!("CMD   | unknown 0x{:X} discarded", raw);
            }
        }
    }
}
