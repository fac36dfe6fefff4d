//! GPIO pin abstractions
//!
//! The altimeter only reads a single push-to-make switch, wired to ground
//! and pulled up internally, so a pressed button reads low.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Check if an active-low switch on this pin is closed
    fn is_pressed(&self) -> bool {
        self.is_low()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
