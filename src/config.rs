//! Firmware configuration parameters.
//!
//! Defaults encode the board's shared-memory ABI with the host: where the
//! log window sits inside the mailbox data region, how wide one sample is,
//! and which bus address the sensor answers on. These values are part of
//! the host contract — change them only together with the host-side driver.

use serde::{Deserialize, Serialize};

use crate::mailbox;

/// Core firmware configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareConfig {
    /// 7-bit I2C address of the heart-rate sensor.
    pub sensor_addr: u8,
    /// Data slot where the log window begins.
    pub log_base_slot: usize,
    /// Total bytes reserved for the log window.
    pub log_region_bytes: usize,
    /// Bytes per logged sample.
    pub log_item_bytes: usize,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            // Sensor datasheet address 0xA0, shifted to 7-bit form.
            sensor_addr: 0xA0 >> 1,
            log_base_slot: mailbox::LOG_BASE_SLOT,
            log_region_bytes: mailbox::LOG_REGION_BYTES,
            log_item_bytes: mailbox::SLOT_BYTES,
        }
    }
}

impl FirmwareConfig {
    /// Maximum number of samples the log window holds.
    pub fn log_capacity(&self) -> usize {
        self.log_region_bytes / self.log_item_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_mailbox_abi() {
        let c = FirmwareConfig::default();
        assert_eq!(c.sensor_addr, 0x50);
        assert_eq!(c.log_base_slot, 4);
        assert_eq!(c.log_capacity(), 1000);
        // The log window must fit inside the mailbox data region.
        assert!(c.log_base_slot + c.log_capacity() <= mailbox::DATA_SLOTS);
    }

    #[test]
    fn capacity_derives_from_region_and_item_size() {
        let c = FirmwareConfig {
            log_region_bytes: 16,
            log_item_bytes: 4,
            ..FirmwareConfig::default()
        };
        assert_eq!(c.log_capacity(), 4);
    }

    #[test]
    fn serde_roundtrip() {
        let c = FirmwareConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: FirmwareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = FirmwareConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: FirmwareConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c, c2);
    }
}
