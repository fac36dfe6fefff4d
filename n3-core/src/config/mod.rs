//! Compile-time configuration
//!
//! All timing parameters, display geometry and electrical constants live
//! here so they can be tuned in one place.

pub mod ui;

pub use ui::{RevalidationPolicy, UiConfig};

/// Firmware version shown on the About window, as `major.minor`
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

// Timing

/// Worst-case UI refresh period; altitude redraws are throttled to this (ms)
pub const UI_UPDATE_PERIOD_MS: u32 = 1100;

/// Minimum hold time for a press to count as long (ms)
pub const LONG_PRESS_DURATION_MS: u32 = 500;

/// How long each window's splash is shown after gaining focus (ms)
pub const SPLASH_DURATION_MS: u32 = 2000;

/// How long each page of a multi-page window is shown (ms)
pub const PAGE_DURATION_MS: u32 = 3000;

/// Presses shorter than this are contact bounce and are discarded (ms)
pub const MIN_PRESS_DURATION_MS: u32 = 2;

// GPS

/// HDOP at or below which a fix is considered excellent
pub const GPS_EXCELLENT_HDOP: f32 = 2.0;

/// GPS receiver UART baud rate
pub const GPS_BAUDRATE: u32 = 57_600;

/// A fix older than this is treated as no fix at all (ms)
pub const GPS_FIX_TIMEOUT_MS: u32 = 3000;

// Altitude display

/// Smallest change in displayed altitude worth a redraw (m)
pub const ALTITUDE_REDRAW_THRESHOLD_M: f64 = 0.1;

// Battery
//
// Battery -- R1 -- ADC_PIN -- R2 -- GND

/// Microcontroller supply / ADC reference voltage
pub const UC_VOLTAGE: f32 = 3.3;

/// Upper divider resistor (ohms)
pub const BAT_DIV_R1_OHMS: f32 = 2200.0;

/// Lower divider resistor (ohms)
pub const BAT_DIV_R2_OHMS: f32 = 3300.0;

/// Battery voltage treated as empty. The pack keeps running lower, but the
/// discharge curve is steep from here.
pub const BAT_MIN_V: f32 = 2.0;

/// Battery voltage treated as full. Fresh cells start higher but drop
/// quickly before the linear part of the discharge.
pub const BAT_MAX_V: f32 = 2.85;
