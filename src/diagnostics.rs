//! Runtime counters for field debugging.
//!
//! The mailbox protocol gives the host no status channel beyond the data
//! slots, so these counters surface through the serial log instead. The
//! recent-command history is a fixed-capacity ring — no heap, bounded
//! cost per dispatch.

use heapless::HistoryBuffer;
use log::info;

/// How many raw command codes to keep in the history ring.
const RECENT_COMMANDS: usize = 8;

/// Dispatch counters plus a short history of raw command codes.
#[derive(Default)]
pub struct CommandStats {
    dispatched: u64,
    unknown: u64,
    samples_logged: u64,
    recent: HistoryBuffer<u32, RECENT_COMMANDS>,
}

impl CommandStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatched command (any code, known or not).
    pub fn record_dispatch(&mut self, raw: u32) {
        self.dispatched += 1;
        self.recent.write(raw);
    }

    /// Record an unrecognised command code.
    pub fn record_unknown(&mut self) {
        self.unknown += 1;
    }

    /// Record samples appended during a log session.
    pub fn record_samples(&mut self, count: u64) {
        self.samples_logged += count;
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn unknown(&self) -> u64 {
        self.unknown
    }

    pub fn samples_logged(&self) -> u64 {
        self.samples_logged
    }

    /// Raw codes of the most recent dispatches, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = u32> + '_ {
        self.recent.oldest_ordered().copied()
    }

    /// Dump counters to the serial log.
    pub fn log_summary(&self) {
        info!(
            "STATS | dispatched={} unknown={} samples_logged={}",
            self.dispatched, self.unknown, self.samples_logged
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut stats = CommandStats::new();
        stats.record_dispatch(0x2);
        stats.record_dispatch(0x9);
        stats.record_unknown();
        stats.record_samples(6);
        assert_eq!(stats.dispatched(), 2);
        assert_eq!(stats.unknown(), 1);
        assert_eq!(stats.samples_logged(), 6);
    }

    #[test]
    fn history_is_bounded_and_ordered() {
        let mut stats = CommandStats::new();
        for code in 0..20u32 {
            stats.record_dispatch(code);
        }
        let recent: Vec<u32> = stats.recent().collect();
        assert_eq!(recent.len(), RECENT_COMMANDS);
        assert_eq!(recent, (12..20).collect::<Vec<u32>>());
    }
}
