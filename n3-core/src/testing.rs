//! Host-side fakes for the hardware capabilities

use core::cell::Cell;

use n3_hal::{Clock, InputPin, Millis};

use crate::gps::{Fix, GpsSource, Position};

/// Push button wired active-low, driven by the test
pub struct FakePin {
    high: Cell<bool>,
}

impl FakePin {
    pub fn released() -> Self {
        Self {
            high: Cell::new(true),
        }
    }

    pub fn press(&self) {
        self.high.set(false);
    }

    pub fn release(&self) {
        self.high.set(true);
    }
}

impl InputPin for FakePin {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

/// Manually advanced millisecond clock
pub struct FakeClock {
    now: Cell<Millis>,
}

impl FakeClock {
    pub fn at(now: Millis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// GPS receiver reporting whatever fix the test sets
pub struct FakeGps {
    fix: Cell<Fix>,
}

impl FakeGps {
    pub fn no_fix() -> Self {
        Self {
            fix: Cell::new(Fix::default()),
        }
    }

    /// A 3D fix in central London
    pub fn london(altitude_msl_m: f64) -> Self {
        Self {
            fix: Cell::new(Fix::fix3d(LONDON, altitude_msl_m)),
        }
    }

    pub fn set(&self, fix: Fix) {
        self.fix.set(fix);
    }

    pub fn set_altitude(&self, altitude_msl_m: f64) {
        let mut fix = self.fix.get();
        fix.altitude_msl_m = altitude_msl_m;
        self.fix.set(fix);
    }
}

impl GpsSource for FakeGps {
    fn fix(&self) -> Fix {
        self.fix.get()
    }
}

pub const LONDON: Position = Position::new(51.5, -0.12);

/// Outside every built-in datum model
pub const PARIS: Position = Position::new(48.85, 2.35);
