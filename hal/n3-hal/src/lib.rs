//! N3 Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the altimeter
//! core consumes. Board support (the firmware crate) implements them on top of
//! embassy; host tests implement them with plain fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  n3-firmware (board wiring)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  n3-core (button, windows, manager)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  n3-hal (this crate - traits)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (the push button)
//! - [`clock::Clock`] - Monotonic millisecond time source
//! - [`adc::AdcReader`] - Raw ADC samples (battery divider)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AdcReader};
pub use clock::{elapsed_ms, Clock, Millis};
pub use gpio::InputPin;
