//! Command dispatcher — the firmware's top-level protocol state machine.
//!
//! Two states: idle (busy-polling the mailbox command word) and
//! executing (running one decoded command). The transition back to idle
//! is the register clear that signals completion to the host — except
//! for `ReadAndLog`, which clears *first* so the host can post the stop
//! value into the same word while the sampling loop runs.
//!
//! ```text
//!  host ──▶ Mailbox ──▶ Dispatcher ──▶ SensorPort / PinMuxPort
//!                           │
//!                           └──▶ sampler ──▶ CircularLog ──▶ Mailbox
//! ```

use log::{debug, info, warn};

use super::commands::Command;
use super::events::AppEvent;
use super::ports::{DelayPort, EventSink, PinMuxPort, SensorPort};
use super::sampler;
use crate::config::FirmwareConfig;
use crate::diagnostics::CommandStats;
use crate::logbuf::CircularLog;
use crate::mailbox::{Mailbox, CMD_IDLE};
use crate::pins;

/// The dispatcher: owns the log-buffer descriptor and dispatch counters;
/// all shared state and hardware come in by reference.
pub struct Dispatcher {
    config: FirmwareConfig,
    log: CircularLog,
    stats: CommandStats,
}

impl Dispatcher {
    pub fn new(config: FirmwareConfig) -> Self {
        Self {
            config,
            log: CircularLog::new(),
            stats: CommandStats::new(),
        }
    }

    /// The firmware main loop: busy-poll until the host posts a command,
    /// execute it, repeat forever. There is no terminal state — the loop
    /// runs until power-off.
    ///
    /// The idle wait is an intentional tight poll (no interrupt-driven
    /// wake): the CPU has nothing else to do between commands, and the
    /// host relies on the resulting sub-microsecond pickup latency.
    pub fn run(
        &mut self,
        mailbox: &Mailbox,
        hw: &mut (impl SensorPort + PinMuxPort + DelayPort),
        sink: &mut impl EventSink,
    ) -> ! {
        sink.emit(&AppEvent::Started);
        info!("dispatcher: entering mailbox poll loop");
        loop {
            while mailbox.command() == CMD_IDLE {
                core::hint::spin_loop();
            }
            self.poll_once(mailbox, hw, sink);
        }
    }

    /// Single dispatch iteration: if a command is pending, decode and
    /// execute it. Returns the decoded command, or `None` when idle.
    pub fn poll_once(
        &mut self,
        mailbox: &Mailbox,
        hw: &mut (impl SensorPort + PinMuxPort + DelayPort),
        sink: &mut impl EventSink,
    ) -> Option<Command> {
        let raw = mailbox.command();
        if raw == CMD_IDLE {
            return None;
        }
        let cmd = Command::decode(raw, mailbox);
        debug!("dispatcher: 0x{raw:X} -> {cmd:?}");
        self.stats.record_dispatch(raw);
        self.execute(cmd, mailbox, hw, sink);
        Some(cmd)
    }

    /// Dispatch counters (read-only; surfaced via the serial log).
    pub fn stats(&self) -> &CommandStats {
        &self.stats
    }

    /// The log-buffer descriptor of the most recent session.
    pub fn log(&self) -> &CircularLog {
        &self.log
    }

    // ── Command handlers ──────────────────────────────────────

    fn execute(
        &mut self,
        cmd: Command,
        mailbox: &Mailbox,
        hw: &mut (impl SensorPort + PinMuxPort + DelayPort),
        sink: &mut impl EventSink,
    ) {
        match cmd {
            Command::ConfigureSwitch { scl_pin, sda_pin } => {
                hw.configure(pins::roles_with_i2c(scl_pin, sda_pin));
                mailbox.clear_command();
                sink.emit(&AppEvent::SwitchConfigured { scl_pin, sda_pin });
            }

            Command::ReadOnce => {
                let sample = hw.read_sample();
                mailbox.set_data(0, u32::from(sample));
                mailbox.clear_command();
                sink.emit(&AppEvent::SampleRead(sample));
            }

            Command::ReadAndLog { interval_ms } => {
                let capacity = self.config.log_capacity();
                self.log
                    .init(self.config.log_base_slot, capacity, self.config.log_item_bytes);

                // Clear before the loop starts: the host cancels by
                // writing the stop value into this same word.
                mailbox.clear_command();
                sink.emit(&AppEvent::LogSessionStarted {
                    interval_ms,
                    capacity,
                });

                let samples = sampler::run(mailbox, &mut self.log, interval_ms, hw);

                // The word now holds whatever stop value the host wrote;
                // the next poll iteration dispatches it normally.
                self.stats.record_samples(samples);
                sink.emit(&AppEvent::LogSessionStopped { samples });
            }

            // The stop code's only job is to be written *during* a log
            // session; arriving here (while idle) it is a no-op ack.
            Command::StopLog => {
                mailbox.clear_command();
            }

            Command::Unknown(raw) => {
                warn!("dispatcher: unknown command 0x{raw:X} discarded");
                self.stats.record_unknown();
                mailbox.clear_command();
                sink.emit(&AppEvent::UnknownCommand(raw));
                self.stats.log_summary();
            }
        }
    }
}
