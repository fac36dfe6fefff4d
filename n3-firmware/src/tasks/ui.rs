//! UI task
//!
//! The single cooperative loop: sleep until the button changes or the
//! poll tick fires, then let the altimeter run one step.

use defmt::*;
use embassy_futures::select::select;
use embassy_time::{Duration, Ticker};

use n3_core::ManagerEvent;

use crate::board::App;

/// Poll period while nothing happens on the button (ms)
pub const UI_TICK_MS: u64 = 50;

#[embassy_executor::task]
pub async fn ui_task(mut app: App) {
    info!("UI task started");

    let event = app.start();
    log_event(&app, event);

    let mut ticker = Ticker::every(Duration::from_millis(UI_TICK_MS));

    loop {
        select(app.button_pin_mut().wait_for_edge(), ticker.next()).await;

        if let Some(event) = app.poll() {
            log_event(&app, event);
        }
    }
}

fn log_event(app: &App, event: ManagerEvent) {
    let windows = app.manager().windows();
    match event {
        ManagerEvent::Focused(i) => info!("Focus -> {} ({})", i, windows[i].name()),
        ManagerEvent::Activated(i) => debug!("Window {} active", windows[i].name()),
        ManagerEvent::RotationRefused => debug!("No other valid window"),
    }
}
