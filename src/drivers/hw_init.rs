//! One-shot hardware peripheral initialization.
//!
//! Brings up the I2C master for the heart-rate sensor and owns the bus
//! handle for the lifetime of the process. Called once from `main()`
//! before the dispatch loop starts.

#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::error::Result;
use crate::pins::{PinRole, PIN_COUNT};

#[cfg(target_os = "espidf")]
use esp_idf_hal::{
    i2c::{I2cConfig, I2cDriver},
    peripherals::Peripherals,
    units::Hertz,
};
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut I2C_DRIVER: Option<I2cDriver<'static>> = None;

/// Initialise the I2C master on the connector pins that carry SCL/SDA at
/// boot.
#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    let p = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;
    let cfg = I2cConfig::new().baudrate(Hertz(100_000));
    // Boot routing places SDA on connector pin 2 (GPIO6) and SCL on
    // connector pin 6 (GPIO17); see pins::boot_roles().
    let driver = I2cDriver::new(p.i2c0, p.pins.gpio6, p.pins.gpio17, &cfg)
        .map_err(|_| Error::Init("i2c master"))?;
    // SAFETY: written exactly once here, before the single-threaded
    // dispatch loop starts; read only from that loop afterwards.
    unsafe {
        I2C_DRIVER = Some(driver);
    }
    info!("hw_init: I2C master ready");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

/// One single-byte read against `addr`. Returns 0 if the bus is not up —
/// the same byte a sensor with no finger clipped on reports.
#[cfg(target_os = "espidf")]
pub fn i2c_read_byte(addr: u8) -> u8 {
    // SAFETY: I2C_DRIVER is written once during init_peripherals();
    // single-threaded dispatch-loop access only.
    match unsafe { (*(&raw mut I2C_DRIVER)).as_mut() } {
        Some(bus) => crate::sensors::heart_rate::read_register(bus, addr),
        None => 0,
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_read_byte(_addr: u8) -> u8 {
    0
}

/// Apply a role table to the connector.
///
/// This port has no runtime switch matrix — the I2C pair is fixed at
/// init — so the requested routing is recorded in the log for the host
/// to verify rather than driven into hardware.
#[cfg(target_os = "espidf")]
pub fn apply_pin_roles(roles: &[PinRole; PIN_COUNT]) {
    info!("hw_init: switch roles = {roles:?}");
}

#[cfg(not(target_os = "espidf"))]
pub fn apply_pin_roles(roles: &[PinRole; PIN_COUNT]) {
    log::debug!("hw_init(sim): switch roles = {roles:?}");
}
