//! Button input
//!
//! Edge detection and press-duration classification for the single
//! push button.

pub mod button;

pub use button::{ButtonInput, Press};
