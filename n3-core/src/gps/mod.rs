//! GPS fix data
//!
//! The receiver task owns the UART and publishes the latest fix; windows
//! only ever see it through [`GpsSource`].

pub mod nmea;

use n3_hal::{elapsed_ms, Millis};

/// Fix dimension reported by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixQuality {
    #[default]
    NoFix,
    Fix2d,
    Fix3d,
}

/// WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Latitude, north positive
    pub lat_deg: f64,
    /// Longitude, east positive
    pub lon_deg: f64,
}

impl Position {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Snapshot of the most recent receiver solution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub quality: FixQuality,
    /// Horizontal dilution of precision
    pub hdop: f32,
    /// Satellites used in the solution
    pub satellites: u8,
    pub position: Position,
    /// Altitude above mean sea level (m)
    pub altitude_msl_m: f64,
}

impl Fix {
    /// What the receiver reports before it locks
    pub const NONE: Fix = Fix {
        quality: FixQuality::NoFix,
        hdop: 99.9,
        satellites: 0,
        position: Position::new(0.0, 0.0),
        altitude_msl_m: 0.0,
    };

    /// A 3D fix at `position` and `altitude_msl_m`
    pub const fn fix3d(position: Position, altitude_msl_m: f64) -> Self {
        Self {
            quality: FixQuality::Fix3d,
            hdop: 1.0,
            satellites: 8,
            position,
            altitude_msl_m,
        }
    }

    /// Check if the altitude field is meaningful
    pub fn has_altitude(&self) -> bool {
        self.quality == FixQuality::Fix3d
    }

    /// Check if horizontal precision is good enough to trust
    pub fn is_excellent(&self) -> bool {
        self.quality != FixQuality::NoFix && self.hdop <= crate::config::GPS_EXCELLENT_HDOP
    }
}

impl Default for Fix {
    fn default() -> Self {
        Self::NONE
    }
}

/// A fix tagged with the time it was received
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StampedFix {
    pub fix: Fix,
    pub received_at: Millis,
}

impl StampedFix {
    pub const fn new(fix: Fix, received_at: Millis) -> Self {
        Self { fix, received_at }
    }

    /// The fix, or [`Fix::NONE`] once it is older than `timeout_ms`
    pub fn current(&self, now: Millis, timeout_ms: Millis) -> Fix {
        if elapsed_ms(now, self.received_at) > timeout_ms {
            Fix::NONE
        } else {
            self.fix
        }
    }
}

/// Read access to the latest GPS fix
pub trait GpsSource {
    /// Most recent fix; `FixQuality::NoFix` until the receiver locks
    fn fix(&self) -> Fix;
}

impl<T: GpsSource + ?Sized> GpsSource for &T {
    fn fix(&self) -> Fix {
        (**self).fix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_altitude() {
        let fix = Fix::default();
        assert_eq!(fix, Fix::NONE);
        assert_eq!(fix.quality, FixQuality::NoFix);
        assert!(!fix.has_altitude());
        assert!(!fix.is_excellent());
    }

    #[test]
    fn test_2d_fix_has_no_altitude() {
        let fix = Fix {
            quality: FixQuality::Fix2d,
            ..Fix::fix3d(Position::new(51.5, -0.1), 40.0)
        };
        assert!(!fix.has_altitude());
        assert!(fix.is_excellent());
    }

    #[test]
    fn test_stamped_fix_expires() {
        let stamped = StampedFix::new(Fix::fix3d(Position::new(51.5, -0.1), 80.0), 10_000);
        assert!(stamped.current(10_000, 3000).has_altitude());
        assert!(stamped.current(13_000, 3000).has_altitude());
        assert_eq!(stamped.current(13_001, 3000), Fix::NONE);
    }

    #[test]
    fn test_stamped_fix_across_wraparound() {
        let stamped = StampedFix::new(Fix::fix3d(Position::default(), 5.0), Millis::MAX - 999);
        assert!(stamped.current(1000, 3000).has_altitude());
        assert_eq!(stamped.current(2001, 3000), Fix::NONE);
    }

    #[test]
    fn test_hdop_threshold() {
        let mut fix = Fix::fix3d(Position::default(), 0.0);
        fix.hdop = 2.0;
        assert!(fix.is_excellent());
        fix.hdop = 2.1;
        assert!(!fix.is_excellent());
    }
}
