//! GPS UART receive task
//!
//! Reassembles NMEA sentences and publishes each GGA fix.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;

use n3_core::gps::nmea::{parse_gga, LineBuffer};
use n3_core::gps::FixQuality;
use n3_hal::Clock;

use crate::board::EmbassyClock;
use crate::channels::publish_fix;

/// DMA chunk size
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn gps_rx_task(mut rx: UartRx<'static, Async>) {
    info!("GPS RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];
    let mut line = LineBuffer::new();
    let mut last_quality = FixQuality::NoFix;

    loop {
        match rx.read_until_idle(&mut buf).await {
            Ok(n) => {
                trace!("GPS RX: {} bytes", n);
                for &byte in &buf[..n] {
                    let Some(fix) = line.push(byte).and_then(parse_gga) else {
                        continue;
                    };

                    if fix.quality != last_quality {
                        info!(
                            "GPS fix {:?}: {} sats, hdop {}",
                            fix.quality, fix.satellites, fix.hdop
                        );
                        last_quality = fix.quality;
                    }
                    publish_fix(fix, EmbassyClock.now_ms());
                }
            }
            Err(e) => {
                warn!("GPS UART error: {:?}", e);
            }
        }
    }
}
