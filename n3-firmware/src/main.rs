//! N3 - Handheld GPS Altimeter Firmware
//!
//! Main firmware binary for STM32F103 boards with a 2x8 character LCD, a
//! single push button and a serial GPS receiver.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::adc::{Adc, AdcChannel};
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::peripherals::{ADC1, USART2};
use embassy_stm32::usart::{self, UartRx};
use embassy_stm32::{adc, interrupt};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use n3_core::battery::BatteryMonitor;
use n3_core::config::{UiConfig, GPS_BAUDRATE, VERSION};
use n3_core::Altimeter;

use crate::board::{BatteryAdc, EmbassyClock, SharedGps, WakePin};
use crate::lcd::Hd44780;

mod board;
mod channels;
mod lcd;
mod tasks;

bind_interrupts!(struct Irqs {
    USART2 => usart::InterruptHandler<USART2>;
    ADC1_2 => adc::InterruptHandler<ADC1>;
    EXTI0 => exti::InterruptHandler<interrupt::typelevel::EXTI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("N3 altimeter v{} starting...", VERSION);

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // LCD (RS=PB10, E=PB11, D4..D7=PB12..PB15)
    let mut lcd = Hd44780::new(
        Output::new(p.PB10, Level::Low, Speed::Low),
        Output::new(p.PB11, Level::Low, Speed::Low),
        [
            Output::new(p.PB12, Level::Low, Speed::Low),
            Output::new(p.PB13, Level::Low, Speed::Low),
            Output::new(p.PB14, Level::Low, Speed::Low),
            Output::new(p.PB15, Level::Low, Speed::Low),
        ],
        Delay,
    );
    if let Err(e) = lcd.init() {
        error!("Failed to initialize LCD: {:?}", e);
    } else {
        info!("LCD initialized");
    }

    // GPS receiver on USART2 RX (PA3)
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = GPS_BAUDRATE;
    let gps_rx = UartRx::new(p.USART2, Irqs, p.PA3, p.DMA1_CH6, uart_config).unwrap();
    info!("GPS UART initialized at {} baud", GPS_BAUDRATE);

    // Battery divider tap on PA1
    let adc = Adc::new(p.ADC1);
    let battery = BatteryMonitor::new(BatteryAdc::new(adc, p.PA1.degrade_adc()));

    // Push button to ground on PB0
    let button = WakePin(ExtiInput::new(p.PB0, p.EXTI0, Pull::Up, Irqs));

    let app = unwrap!(Altimeter::new(
        button,
        EmbassyClock,
        lcd,
        SharedGps,
        UiConfig::default()
    ));

    spawner.spawn(tasks::gps_rx_task(gps_rx)).unwrap();
    spawner.spawn(tasks::battery_task(battery)).unwrap();
    spawner.spawn(tasks::ui_task(app)).unwrap();

    info!("All tasks spawned");
}
