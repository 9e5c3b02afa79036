//! Pin-role assignments for the co-processor's switched I/O fabric.
//!
//! The board routes eight physical connector pins through a run-time
//! switch matrix. Each pin carries exactly one [`PinRole`]; the host can
//! re-route the I2C pair anywhere on the connector via the
//! `ConfigureSwitch` mailbox command.

/// Number of switchable connector pins.
pub const PIN_COUNT: usize = 8;

/// Role a connector pin can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    Gpio0,
    Gpio1,
    Gpio2,
    Gpio3,
    Gpio4,
    Gpio5,
    Gpio6,
    Gpio7,
    /// I2C clock line.
    Scl,
    /// I2C data line.
    Sda,
}

/// All-GPIO baseline: pin N carries GpioN.
pub fn default_roles() -> [PinRole; PIN_COUNT] {
    use PinRole::{Gpio0, Gpio1, Gpio2, Gpio3, Gpio4, Gpio5, Gpio6, Gpio7};
    [Gpio0, Gpio1, Gpio2, Gpio3, Gpio4, Gpio5, Gpio6, Gpio7]
}

/// Power-on assignment applied before the first host command.
/// SDA is mirrored on pins 2/3 and SCL on pins 6/7 so the sensor works
/// on either row of the shield socket.
pub fn boot_roles() -> [PinRole; PIN_COUNT] {
    use PinRole::{Gpio0, Gpio1, Gpio4, Gpio5, Scl, Sda};
    [Gpio0, Gpio1, Sda, Sda, Gpio4, Gpio5, Scl, Scl]
}

/// Role table for `ConfigureSwitch`: GPIO defaults with SCL/SDA placed at
/// the two host-supplied pin indices.
///
/// An out-of-range index leaves the table untouched at that position.
pub fn roles_with_i2c(scl_pin: u32, sda_pin: u32) -> [PinRole; PIN_COUNT] {
    let mut roles = default_roles();
    if let Some(slot) = roles.get_mut(scl_pin as usize) {
        *slot = PinRole::Scl;
    }
    if let Some(slot) = roles.get_mut(sda_pin as usize) {
        *slot = PinRole::Sda;
    }
    roles
}
