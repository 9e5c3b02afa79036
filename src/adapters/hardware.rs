//! Hardware adapter — bridges real peripherals to the port traits.
//!
//! Owns the sensor driver and the switch-matrix driver, exposing them
//! through [`SensorPort`], [`PinMuxPort`] and [`DelayPort`]. This is the
//! only module the dispatcher's hardware side flows through; on
//! non-espidf targets the underlying drivers use simulation stubs.

use crate::app::ports::{DelayPort, PinMuxPort, SensorPort};
use crate::drivers::pin_switch::PinSwitch;
use crate::pins::{PinRole, PIN_COUNT};
use crate::sensors::heart_rate::HeartRateSensor;

/// Concrete adapter combining all hardware behind the port traits.
pub struct HardwareAdapter {
    sensor: HeartRateSensor,
    switch: PinSwitch,
}

impl HardwareAdapter {
    pub fn new(sensor: HeartRateSensor, switch: PinSwitch) -> Self {
        Self { sensor, switch }
    }
}

impl SensorPort for HardwareAdapter {
    fn read_sample(&mut self) -> u8 {
        self.sensor.read()
    }
}

impl PinMuxPort for HardwareAdapter {
    fn configure(&mut self, roles: [PinRole; PIN_COUNT]) {
        self.switch.apply(roles);
    }
}

impl DelayPort for HardwareAdapter {
    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
