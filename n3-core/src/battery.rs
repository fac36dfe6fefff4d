//! Battery level
//!
//! The pack is measured through a resistor divider on an ADC pin:
//!
//! ```text
//! Battery -- R1 -- ADC_PIN -- R2 -- GND
//! ```

use n3_hal::{AdcError, AdcReader};

use crate::config::{BAT_DIV_R1_OHMS, BAT_DIV_R2_OHMS, BAT_MAX_V, BAT_MIN_V, UC_VOLTAGE};

/// Voltage on the ADC pin for a raw reading
pub fn pin_voltage(raw: u16, adc_max: u16, vref: f32) -> f32 {
    if adc_max == 0 {
        return 0.0;
    }
    f32::from(raw.min(adc_max)) * vref / f32::from(adc_max)
}

/// Battery voltage from the divider's tap voltage
pub fn battery_voltage(pin_v: f32, r1_ohms: f32, r2_ohms: f32) -> f32 {
    pin_v * (r1_ohms + r2_ohms) / r2_ohms
}

/// Charge estimate, linear between the empty and full voltages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryLevel {
    /// Measured battery voltage (V)
    pub voltage: f32,
    /// 0.0 (empty) to 1.0 (full)
    pub fraction: f32,
}

impl BatteryLevel {
    pub fn from_voltage(voltage: f32) -> Self {
        let fraction = ((voltage - BAT_MIN_V) / (BAT_MAX_V - BAT_MIN_V)).clamp(0.0, 1.0);
        Self { voltage, fraction }
    }

    /// Level for a raw ADC reading with the board's divider and reference
    pub fn from_raw(raw: u16, adc_max: u16) -> Self {
        let pin_v = pin_voltage(raw, adc_max, UC_VOLTAGE);
        Self::from_voltage(battery_voltage(pin_v, BAT_DIV_R1_OHMS, BAT_DIV_R2_OHMS))
    }

    /// Whole percent, rounded down
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.fraction <= 0.0
    }
}

/// Samples the divider through an ADC channel
pub struct BatteryMonitor<A> {
    adc: A,
}

impl<A: AdcReader> BatteryMonitor<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    pub async fn sample(&mut self) -> Result<BatteryLevel, AdcError> {
        let raw = self.adc.read().await?;
        Ok(BatteryLevel::from_raw(raw, A::MAX_RAW))
    }
}
