//! PulseBridge firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │   HardwareAdapter            LogEventSink            │
//! │   (Sensor+PinMux+Delay)      (EventSink)             │
//! │                                                      │
//! │   ─────────── Port Trait Boundary ───────────        │
//! │                                                      │
//! │   ┌──────────────────────────────────────────┐       │
//! │   │        Dispatcher (pure logic)           │       │
//! │   │  decode · execute · sampling loop        │       │
//! │   └──────────────────────────────────────────┘       │
//! │                        │                             │
//! │                 shared Mailbox ◀── host              │
//! └──────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use pulsebridge::adapters::hardware::HardwareAdapter;
use pulsebridge::adapters::log_sink::LogEventSink;
use pulsebridge::app::service::Dispatcher;
use pulsebridge::config::FirmwareConfig;
use pulsebridge::drivers::hw_init;
use pulsebridge::drivers::pin_switch::PinSwitch;
use pulsebridge::mailbox::Mailbox;
use pulsebridge::pins;
use pulsebridge::sensors::heart_rate::HeartRateSensor;

/// The host-shared mailbox window. On this port it is pinned in a static
/// whose address the platform publishes to the host-side driver; the
/// firmware only ever hands out a shared reference.
static MAILBOX: Mailbox = Mailbox::new();

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    info!("PulseBridge v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals()?;

    let config = FirmwareConfig::default();

    let mut switch = PinSwitch::new();
    switch.apply(pins::boot_roles());

    let sensor = HeartRateSensor::new(config.sensor_addr);
    let mut hw = HardwareAdapter::new(sensor, switch);
    let mut sink = LogEventSink::new();

    // ── 3. Dispatch loop (runs until power-off) ───────────────
    let mut dispatcher = Dispatcher::new(config);
    dispatcher.run(&MAILBOX, &mut hw, &mut sink)
}
