//! Mailbox command codes and their decoded form.
//!
//! The host posts a raw code into the mailbox command word; the
//! dispatcher decodes it exactly once per dispatch iteration, reading any
//! parameters from the data slots at that moment. Nothing here is
//! persisted — a [`Command`] lives for one dispatch.

use crate::mailbox::Mailbox;

/// Reconfigure the I/O switch matrix (slot0 = SCL pin, slot1 = SDA pin).
pub const CMD_CONFIGURE_SWITCH: u32 = 0x1;
/// One sensor read; result goes to data slot 0.
pub const CMD_READ_ONCE: u32 = 0x2;
/// Periodic sample-and-log session (slot1 = interval in ms).
pub const CMD_READ_AND_LOG: u32 = 0x3;
/// Value the host writes to end a log session.
///
/// Note the ABI wrinkle: `0xC` has bit 0 clear, while the running loop
/// cancels on `command & 0x1 != 0`. Writing `0xC` alone therefore does
/// not stop the loop — hosts write a bit-0-set value such as `0xD`.
/// Kept bit-for-bit compatible with the deployed host driver.
pub const CMD_STOP_LOG: u32 = 0xC;

/// Mask the sampling loop tests against the command word to detect a
/// cancellation request.
pub const STOP_BIT: u32 = 0x1;

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-route SCL/SDA to the two given connector pins.
    ConfigureSwitch { scl_pin: u32, sda_pin: u32 },
    /// Single sensor read, result returned via data slot 0.
    ReadOnce,
    /// Start a logging session at the given sample interval.
    ReadAndLog { interval_ms: u32 },
    /// Stop value arriving while idle; no action beyond the register clear.
    StopLog,
    /// Unrecognised non-zero code; silently discarded.
    Unknown(u32),
}

impl Command {
    /// Decode a non-zero command word, pulling parameters from the data
    /// slots. Unrecognised codes map to [`Command::Unknown`] rather than
    /// an error — the protocol has no fault channel.
    pub fn decode(raw: u32, mailbox: &Mailbox) -> Self {
        match raw {
            CMD_CONFIGURE_SWITCH => Self::ConfigureSwitch {
                scl_pin: mailbox.data(0),
                sda_pin: mailbox.data(1),
            },
            CMD_READ_ONCE => Self::ReadOnce,
            CMD_READ_AND_LOG => Self::ReadAndLog {
                interval_ms: mailbox.data(1),
            },
            CMD_STOP_LOG => Self::StopLog,
            other => Self::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_switch_reads_pin_slots() {
        let mb = Mailbox::new();
        mb.set_data(0, 2);
        mb.set_data(1, 3);
        assert_eq!(
            Command::decode(CMD_CONFIGURE_SWITCH, &mb),
            Command::ConfigureSwitch {
                scl_pin: 2,
                sda_pin: 3
            }
        );
    }

    #[test]
    fn read_and_log_takes_interval_from_slot_1() {
        let mb = Mailbox::new();
        mb.set_data(1, 250);
        assert_eq!(
            Command::decode(CMD_READ_AND_LOG, &mb),
            Command::ReadAndLog { interval_ms: 250 }
        );
    }

    #[test]
    fn unrecognised_codes_become_unknown() {
        let mb = Mailbox::new();
        for raw in [0x4, 0x5, 0xB, 0xD, 0xFF, u32::MAX] {
            assert_eq!(Command::decode(raw, &mb), Command::Unknown(raw));
        }
    }

    #[test]
    fn stop_code_has_stop_bit_clear() {
        // The documented ABI mismatch: 0xC does not satisfy the cancel mask.
        assert_eq!(CMD_STOP_LOG & STOP_BIT, 0);
    }
}
