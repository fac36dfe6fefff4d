//! Runtime UI configuration
//!
//! Bundles the timing constants so tests and alternative builds can tune
//! them without touching the constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    LONG_PRESS_DURATION_MS, MIN_PRESS_DURATION_MS, PAGE_DURATION_MS, SPLASH_DURATION_MS,
    UI_UPDATE_PERIOD_MS,
};

/// What the window manager does when the focused window loses validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RevalidationPolicy {
    /// Stop updating it and wait for the next long press
    #[default]
    OnRotation,
    /// Rotate to the next valid window immediately
    Eager,
}

/// UI timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Splash duration after every focus change (ms)
    pub splash_ms: u32,
    /// Page duration for multi-page windows (ms)
    pub page_ms: u32,
    /// Minimum interval between altitude redraws (ms)
    pub update_period_ms: u32,
    /// Long-press threshold (ms)
    pub long_press_ms: u32,
    /// Jitter threshold below which presses are discarded (ms)
    pub min_press_ms: u32,
    /// Behaviour when the focused window becomes invalid
    pub revalidation: RevalidationPolicy,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash_ms: SPLASH_DURATION_MS,
            page_ms: PAGE_DURATION_MS,
            update_period_ms: UI_UPDATE_PERIOD_MS,
            long_press_ms: LONG_PRESS_DURATION_MS,
            min_press_ms: MIN_PRESS_DURATION_MS,
            revalidation: RevalidationPolicy::OnRotation,
        }
    }
}
