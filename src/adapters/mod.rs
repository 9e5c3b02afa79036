//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                        | Connects to            |
//! |------------|-----------------------------------|------------------------|
//! | `hardware` | SensorPort, PinMuxPort, DelayPort | I2C bus, switch matrix |
//! | `log_sink` | EventSink                         | Serial log output      |

pub mod hardware;
pub mod log_sink;
