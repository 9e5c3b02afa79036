//! Peripheral drivers.
//!
//! `hw_init` performs one-shot bring-up and owns the raw bus handle;
//! `pin_switch` tracks the connector's switch-matrix routing.

pub mod hw_init;
pub mod pin_switch;
