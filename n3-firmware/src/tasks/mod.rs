//! Embassy async tasks
//!
//! Each task runs independently; they share only the latest GPS fix.

pub mod battery;
pub mod gps_rx;
pub mod ui;

pub use battery::battery_task;
pub use gps_rx::gps_rx_task;
pub use ui::ui_task;
