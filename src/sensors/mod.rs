//! Sensor drivers.
//!
//! One sensor in this system: the finger-clip heart-rate sensor on the
//! two-wire bus. Single-sensor support is a deliberate scope limit.

pub mod heart_rate;
