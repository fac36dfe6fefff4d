//! Character display abstraction for the N3 altimeter
//!
//! This crate provides:
//! - `CharDisplay` trait for 2x8 HD44780-style character displays
//! - `Glyph` custom-character bitmaps and the splash icons
//! - `Screen`, an in-memory display used as the host test sink
//!
//! # Architecture
//!
//! Windows in `n3-core` render through `&mut dyn CharDisplay`. On the device
//! the firmware's LCD driver implements the trait; on the host `Screen`
//! records what would have been shown.

#![no_std]

pub mod backend;
pub mod glyph;
pub mod screen;

// Re-export key types
pub use backend::{CharDisplay, CharDisplayExt, DisplayError, LCD_COLS, LCD_ROWS, MAX_GLYPHS};
pub use glyph::Glyph;
pub use screen::Screen;
