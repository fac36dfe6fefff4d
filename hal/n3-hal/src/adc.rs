//! ADC sampling
//!
//! Used for the battery voltage divider. Conversion to volts lives in the
//! core crate so it can be tested on the host.

/// ADC read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    Conversion,
    /// Channel not configured
    NotConfigured,
}

/// Raw ADC reading trait for platform abstraction
#[allow(async_fn_in_trait)]
pub trait AdcReader {
    /// Full-scale raw value (4095 for a 12-bit converter)
    const MAX_RAW: u16 = 4095;

    /// Take a single raw sample
    async fn read(&mut self) -> Result<u16, AdcError>;
}
