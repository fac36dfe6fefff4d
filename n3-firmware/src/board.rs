//! Board glue: embassy peripherals behind the N3 capability traits
//!
//! Pin map (STM32F103RB):
//!
//! | Function      | Pin            |
//! |---------------|----------------|
//! | Button        | PB0 (EXTI0)    |
//! | Battery ADC   | PA1 (ADC1_IN1) |
//! | GPS RX        | PA3 (USART2)   |
//! | LCD RS / E    | PB10 / PB11    |
//! | LCD D4..D7    | PB12..PB15     |

use embassy_stm32::adc::{Adc, AnyAdcChannel};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Output;
use embassy_stm32::peripherals::ADC1;
use embassy_time::{Delay, Instant};

use n3_core::gps::{Fix, GpsSource};
use n3_core::Altimeter;
use n3_hal::{AdcError, AdcReader, Clock, InputPin, Millis};

use crate::channels;
use crate::lcd::Hd44780;

pub type Lcd = Hd44780<Output<'static>, Delay>;

/// The application as wired on this board
pub type App = Altimeter<WakePin, EmbassyClock, Lcd, SharedGps>;

/// Button pin whose edges wake the UI loop
pub struct WakePin(pub ExtiInput<'static>);

impl WakePin {
    /// Resolves on the next press or release
    pub async fn wait_for_edge(&mut self) {
        self.0.wait_for_any_edge().await;
    }
}

impl InputPin for WakePin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Milliseconds since boot, wrapping after ~49 days
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> Millis {
        Instant::now().as_millis() as Millis
    }
}

/// Reads the fix published by the GPS receive task
pub struct SharedGps;

impl GpsSource for SharedGps {
    fn fix(&self) -> Fix {
        channels::latest_fix(EmbassyClock.now_ms())
    }
}

/// Battery divider tap on an ADC1 channel
pub struct BatteryAdc {
    adc: Adc<'static, ADC1>,
    channel: AnyAdcChannel<'static, ADC1>,
}

impl BatteryAdc {
    pub fn new(adc: Adc<'static, ADC1>, channel: AnyAdcChannel<'static, ADC1>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for BatteryAdc {
    async fn read(&mut self) -> Result<u16, AdcError> {
        Ok(self.adc.read(&mut self.channel).await)
    }
}
