//! Property-based tests for the pure mailbox-protocol logic.
//!
//! Host-only: proptest needs std and these properties exercise no
//! hardware.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;

use pulsebridge::app::commands::Command;
use pulsebridge::app::events::AppEvent;
use pulsebridge::app::ports::{DelayPort, EventSink, PinMuxPort, SensorPort};
use pulsebridge::app::service::Dispatcher;
use pulsebridge::config::FirmwareConfig;
use pulsebridge::logbuf::CircularLog;
use pulsebridge::mailbox::{Mailbox, CMD_IDLE, LOG_BASE_SLOT, SLOT_BYTES};
use pulsebridge::pins::{PinRole, PIN_COUNT};

/// Inert hardware: counts sensor reads, everything else is a no-op.
#[derive(Default)]
struct InertHw {
    reads: usize,
}

impl SensorPort for InertHw {
    fn read_sample(&mut self) -> u8 {
        self.reads += 1;
        0
    }
}

impl PinMuxPort for InertHw {
    fn configure(&mut self, _roles: [PinRole; PIN_COUNT]) {}
}

impl DelayPort for InertHw {
    fn delay_ms(&mut self, _ms: u32) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

/// Codes outside the command table (and not idle).
fn unknown_code() -> impl Strategy<Value = u32> {
    any::<u32>().prop_filter("must not be a known code", |c| {
        *c != CMD_IDLE && ![0x1, 0x2, 0x3, 0xC].contains(c)
    })
}

proptest! {
    /// Any unrecognised code is discarded: register cleared, data slots
    /// untouched, no hardware activity.
    #[test]
    fn unknown_codes_are_discarded_without_side_effects(
        raw in unknown_code(),
        seed in proptest::array::uniform8(any::<u32>()),
    ) {
        let mailbox = Mailbox::new();
        for (slot, value) in seed.iter().enumerate() {
            mailbox.set_data(slot, *value);
        }

        let mut dispatcher = Dispatcher::new(FirmwareConfig::default());
        let mut hw = InertHw::default();
        mailbox.post_command(raw);
        let cmd = dispatcher.poll_once(&mailbox, &mut hw, &mut NullSink);

        prop_assert_eq!(cmd, Some(Command::Unknown(raw)));
        prop_assert_eq!(mailbox.command(), CMD_IDLE);
        prop_assert_eq!(hw.reads, 0);
        for (slot, value) in seed.iter().enumerate() {
            prop_assert_eq!(mailbox.data(slot), *value);
        }
    }

    /// After any sequence of appends the window holds the most recent
    /// `capacity` samples, each at slot `base + (i % capacity)`.
    #[test]
    fn ring_keeps_the_last_capacity_samples(
        capacity in 1usize..=16,
        samples in proptest::collection::vec(any::<u32>(), 0..=64),
    ) {
        let mailbox = Mailbox::new();
        let mut log = CircularLog::new();
        log.init(LOG_BASE_SLOT, capacity, SLOT_BYTES);

        for &sample in &samples {
            log.append(&mailbox, sample);
        }

        prop_assert_eq!(log.cursor(), samples.len());
        let kept = samples.len().saturating_sub(capacity);
        for (i, &sample) in samples.iter().enumerate().skip(kept) {
            prop_assert_eq!(mailbox.data(LOG_BASE_SLOT + i % capacity), sample);
        }
    }

    /// Re-initialising always rewinds to the front of the window,
    /// regardless of how far the previous session got.
    #[test]
    fn init_rewinds_the_cursor(
        capacity in 1usize..=16,
        appends in 0usize..=100,
    ) {
        let mailbox = Mailbox::new();
        let mut log = CircularLog::new();
        log.init(LOG_BASE_SLOT, capacity, SLOT_BYTES);

        for i in 0..appends {
            log.append(&mailbox, i as u32);
        }
        log.init(LOG_BASE_SLOT, capacity, SLOT_BYTES);

        prop_assert_eq!(log.cursor(), 0);
        prop_assert_eq!(log.next_index(), 0);

        log.append(&mailbox, 0xBEEF);
        prop_assert_eq!(mailbox.data(LOG_BASE_SLOT), 0xBEEF);
    }
}
