//! Sampling loop controller — the cancellable sample-and-log loop.
//!
//! Each cycle: read one sample, append it to the ring, block for the
//! host-requested interval, then poll the shared command word for the
//! stop bit. Cancellation is only observed at that polling point, so the
//! worst-case latency from stop request to loop exit is one sample
//! interval plus one bus transaction. Host timing depends on that bound;
//! do not move the check or make the wait event-driven.
//!
//! The loop never writes the command word. The dispatcher cleared it
//! before the session started, and whatever stop value the host wrote is
//! left in place to be dispatched as an ordinary command afterwards.

use log::trace;

use super::commands::STOP_BIT;
use super::ports::{DelayPort, SensorPort};
use crate::logbuf::CircularLog;
use crate::mailbox::Mailbox;

/// Run one logging session until the host sets the stop bit.
///
/// `interval_ms == 0` is legal and yields a tight polling loop; there is
/// no bound on session length other than cancellation. At least one
/// sample is always taken — the stop check runs at the end of the cycle.
///
/// Returns the number of samples appended.
pub fn run(
    mailbox: &Mailbox,
    log: &mut CircularLog,
    interval_ms: u32,
    hw: &mut (impl SensorPort + DelayPort),
) -> u64 {
    let mut samples: u64 = 0;
    loop {
        let sample = hw.read_sample();
        log.append(mailbox, u32::from(sample));
        samples += 1;
        trace!("sampler: #{samples} = {sample}");

        hw.delay_ms(interval_ms);

        if mailbox.command() & STOP_BIT != 0 {
            break;
        }
    }
    samples
}
