//! Circular sample log over the mailbox log window.
//!
//! A fixed-capacity, lossy-by-design ring: once `capacity` items have
//! been appended the oldest entries are overwritten in place. There is no
//! backpressure, no growth, and no error path — the most recent
//! `capacity` samples are always recoverable, anything older is gone.
//!
//! The buffer owns only its geometry and write cursor; the backing store
//! is the shared [`Mailbox`] data region, which the host reads directly
//! once logging stops. No read/export API exists on the firmware side.

use crate::mailbox::{Mailbox, SLOT_BYTES};

/// Descriptor for the ring: geometry plus write cursor.
#[derive(Debug, Clone, Copy)]
pub struct CircularLog {
    base_slot: usize,
    capacity: usize,
    item_slots: usize,
    cursor: usize,
}

impl CircularLog {
    /// An unconfigured ring; call [`init`](Self::init) before appending.
    pub const fn new() -> Self {
        Self {
            base_slot: 0,
            capacity: 0,
            item_slots: 1,
            cursor: 0,
        }
    }

    /// (Re)configure the ring and reset the write cursor to zero.
    ///
    /// Called at the start of every log session. Repeated calls are
    /// idempotent with respect to the cursor; prior window contents are
    /// not cleared, they are simply overwritten as new items land.
    pub fn init(&mut self, base_slot: usize, capacity_items: usize, item_bytes: usize) {
        self.base_slot = base_slot;
        self.capacity = capacity_items;
        self.item_slots = (item_bytes / SLOT_BYTES).max(1);
        self.cursor = 0;
    }

    /// Append one sample, overwriting the oldest entry once full.
    /// Never blocks, never fails, never reports overflow.
    pub fn append(&mut self, mailbox: &Mailbox, sample: u32) {
        if self.capacity == 0 {
            // Unconfigured ring: nowhere to write.
            return;
        }
        let slot = self.base_slot + (self.cursor % self.capacity) * self.item_slots;
        mailbox.set_data(slot, sample);
        self.cursor += 1;
    }

    /// Total items appended since the last `init`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ring index the next append will land on.
    pub fn next_index(&self) -> usize {
        if self.capacity == 0 {
            0
        } else {
            self.cursor % self.capacity
        }
    }

    /// Configured capacity in items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for CircularLog {
    fn default() -> Self {
        Self::new()
    }
}
