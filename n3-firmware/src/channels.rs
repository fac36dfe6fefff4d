//! State shared between tasks

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use n3_core::config::GPS_FIX_TIMEOUT_MS;
use n3_core::gps::{Fix, StampedFix};
use n3_hal::Millis;

/// Latest fix from the GPS receive task, read by the UI loop
pub static GPS_FIX: Mutex<CriticalSectionRawMutex, Cell<Option<StampedFix>>> =
    Mutex::new(Cell::new(None));

pub fn publish_fix(fix: Fix, now: Millis) {
    GPS_FIX.lock(|cell| cell.set(Some(StampedFix::new(fix, now))));
}

/// The last fix, or [`Fix::NONE`] if the receiver has gone quiet
pub fn latest_fix(now: Millis) -> Fix {
    GPS_FIX
        .lock(|cell| cell.get())
        .map_or(Fix::NONE, |stamped| stamped.current(now, GPS_FIX_TIMEOUT_MS))
}
