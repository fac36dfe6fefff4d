//! Battery monitoring task

use defmt::*;
use embassy_time::{Duration, Ticker};

use n3_core::battery::BatteryMonitor;

use crate::board::BatteryAdc;

/// Sampling period (s)
pub const BATTERY_PERIOD_S: u64 = 60;

#[embassy_executor::task]
pub async fn battery_task(mut monitor: BatteryMonitor<BatteryAdc>) {
    info!("Battery task started");

    let mut ticker = Ticker::every(Duration::from_secs(BATTERY_PERIOD_S));

    loop {
        match monitor.sample().await {
            Ok(level) if level.is_empty() => {
                warn!("Battery empty ({} V)", level.voltage);
            }
            Ok(level) => {
                info!("Battery {}% ({} V)", level.percent(), level.voltage);
            }
            Err(e) => {
                warn!("Battery read failed: {:?}", e);
            }
        }
        ticker.next().await;
    }
}
