//! Switch-matrix driver for the eight-pin connector.
//!
//! Tracks the role table currently routed to the connector and pushes
//! changes down through `hw_init`. The dispatcher reconfigures this on
//! every `ConfigureSwitch` command; `main()` applies the boot assignment
//! before the first command arrives.

use crate::drivers::hw_init;
use crate::pins::{boot_roles, PinRole, PIN_COUNT};

pub struct PinSwitch {
    current: [PinRole; PIN_COUNT],
}

impl PinSwitch {
    /// A driver primed with the boot assignment (not yet applied).
    pub fn new() -> Self {
        Self {
            current: boot_roles(),
        }
    }

    /// Route the connector to `roles`.
    pub fn apply(&mut self, roles: [PinRole; PIN_COUNT]) {
        hw_init::apply_pin_roles(&roles);
        self.current = roles;
    }

    /// The role table currently routed.
    pub fn current(&self) -> [PinRole; PIN_COUNT] {
        self.current
    }
}

impl Default for PinSwitch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::roles_with_i2c;

    #[test]
    fn starts_with_boot_assignment() {
        let switch = PinSwitch::new();
        assert_eq!(switch.current(), boot_roles());
    }

    #[test]
    fn apply_updates_current_table() {
        let mut switch = PinSwitch::new();
        let roles = roles_with_i2c(2, 3);
        switch.apply(roles);
        assert_eq!(switch.current(), roles);
    }
}
