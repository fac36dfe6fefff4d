//! Board-agnostic interaction core for the N3 GPS altimeter
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button edge detection and press classification
//! - Window capability trait and the About / altitude windows
//! - Altitude strategies and datum correction models
//! - Window manager (focus rotation, splash/active state machine)
//! - Battery level conversion
//! - Configuration constants

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod battery;
pub mod config;
pub mod datum;
pub mod gps;
pub mod input;
pub mod manager;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use app::Altimeter;
pub use manager::{ManagerError, ManagerEvent, Phase, WindowManager};
pub use window::{AnyWindow, Context, Window};
