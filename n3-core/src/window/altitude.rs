//! Altitude windows
//!
//! One window type, three strategies for turning a fix into an altitude.
//! The top row shows the strategy's absolute altitude, the bottom row the
//! change since the window was focused.

use core::fmt::Write;

use heapless::String;
use n3_display::glyph::icons;
use n3_display::{CharDisplayExt, Glyph, LCD_COLS};
use n3_hal::{elapsed_ms, Millis};

use super::{Context, Window};
use crate::config::ALTITUDE_REDRAW_THRESHOLD_M;
use crate::datum::{DatumGrid, FixedDatum};
use crate::gps::{Fix, GpsSource};

/// Turns a GPS fix into an altitude in metres
pub trait AltitudeSource {
    /// Altitude for this fix, `None` if the strategy cannot produce one
    fn altitude(&self, fix: &Fix) -> Option<f64>;

    fn splash_icon(&self, pos: usize) -> Glyph;

    fn splash_text(&self, line: usize) -> &'static str;
}

/// Receiver altitude above mean sea level, uncorrected
pub struct Sea;

impl AltitudeSource for Sea {
    fn altitude(&self, fix: &Fix) -> Option<f64> {
        fix.has_altitude().then_some(fix.altitude_msl_m)
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        icons::SEA.get(pos).copied().unwrap_or(Glyph::BLANK)
    }

    fn splash_text(&self, line: usize) -> &'static str {
        match line {
            0 => "Alt.",
            1 => " SEA",
            _ => "",
        }
    }
}

/// Ordnance Datum Newlyn height from a single fixed offset
pub struct Osdn {
    datum: FixedDatum,
}

impl Osdn {
    pub fn new(datum: FixedDatum) -> Self {
        Self { datum }
    }
}

impl AltitudeSource for Osdn {
    fn altitude(&self, fix: &Fix) -> Option<f64> {
        if !fix.has_altitude() {
            return None;
        }
        let offset = self.datum.correction(fix.position)?;
        Some(fix.altitude_msl_m + offset)
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        icons::DATUM.get(pos).copied().unwrap_or(Glyph::BLANK)
    }

    fn splash_text(&self, line: usize) -> &'static str {
        match line {
            0 => "Alt.",
            1 => "OSDN",
            _ => "",
        }
    }
}

/// Ordnance Datum Newlyn height interpolated from a correction grid
pub struct Iosdn {
    grid: Option<DatumGrid<'static>>,
}

impl Iosdn {
    /// `None` when no grid is available; the window is then never valid
    pub fn new(grid: Option<DatumGrid<'static>>) -> Self {
        Self { grid }
    }
}

impl AltitudeSource for Iosdn {
    fn altitude(&self, fix: &Fix) -> Option<f64> {
        if !fix.has_altitude() {
            return None;
        }
        let offset = self.grid.as_ref()?.interpolate(fix.position)?;
        Some(fix.altitude_msl_m + offset)
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        icons::DATUM.get(pos).copied().unwrap_or(Glyph::BLANK)
    }

    fn splash_text(&self, line: usize) -> &'static str {
        match line {
            0 => "Alt.",
            1 => "IOSDN",
            _ => "",
        }
    }
}

/// Shown in the first column while HDOP is worse than excellent
pub const IMPRECISE_MARKER: char = '~';

/// Zeroing altitude display over an [`AltitudeSource`]
pub struct AltitudeWindow<S> {
    source: S,
    /// Altitude captured at focus; `None` until one is available
    baseline: Option<f64>,
    /// Last relative altitude computed by `update`
    displayed: f64,
    /// Relative altitude on screen, `None` forces a redraw
    last_drawn: Option<f64>,
    last_draw_at: Millis,
    /// Fix precision when last drawn
    last_excellent: bool,
    update_period_ms: Millis,
}

impl<S: AltitudeSource> AltitudeWindow<S> {
    pub fn new(source: S, update_period_ms: Millis) -> Self {
        Self {
            source,
            baseline: None,
            displayed: 0.0,
            last_drawn: None,
            last_draw_at: 0,
            last_excellent: false,
            update_period_ms,
        }
    }

    /// Altitude relative to the value captured at focus (m)
    pub fn displayed_altitude(&self) -> f64 {
        self.displayed
    }

    fn redraw_due(&self, now: Millis, excellent: bool) -> bool {
        let Some(prev) = self.last_drawn else {
            return true;
        };
        if excellent != self.last_excellent {
            return true;
        }
        let moved = self.displayed - prev;
        let moved = if moved < 0.0 { -moved } else { moved };
        moved >= ALTITUDE_REDRAW_THRESHOLD_M
            && elapsed_ms(now, self.last_draw_at) >= self.update_period_ms
    }

    fn draw(&self, cx: &mut Context<'_>, absolute: f64, excellent: bool) {
        let marker = if excellent { ' ' } else { IMPRECISE_MARKER };
        let mut line: String<{ LCD_COLS as usize }> = String::new();
        // Values too wide for the row leave it partially filled
        let _ = write!(line, "{}{:>6.0}m", marker, absolute);
        cx.display.draw_row(0, &line).ok();

        line.clear();
        let _ = write!(line, "{:>+7.1}m", self.displayed);
        cx.display.draw_row(1, &line).ok();
    }
}

impl<S: AltitudeSource> Window for AltitudeWindow<S> {
    fn focus(&mut self, cx: &mut Context<'_>) {
        self.baseline = self.source.altitude(&cx.gps.fix());
        self.displayed = 0.0;
        self.last_drawn = None;
    }

    fn update(&mut self, cx: &mut Context<'_>) {
        let fix = cx.gps.fix();
        let Some(altitude) = self.source.altitude(&fix) else {
            return;
        };
        let baseline = *self.baseline.get_or_insert(altitude);
        self.displayed = altitude - baseline;

        let excellent = fix.is_excellent();
        if self.redraw_due(cx.now, excellent) {
            self.draw(cx, altitude, excellent);
            self.last_drawn = Some(self.displayed);
            self.last_draw_at = cx.now;
            self.last_excellent = excellent;
        }
    }

    fn unfocus(&mut self) {
        self.last_drawn = None;
    }

    fn is_valid(&self, gps: &dyn GpsSource) -> bool {
        self.source.altitude(&gps.fix()).is_some()
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        self.source.splash_icon(pos)
    }

    fn splash_text(&self, line: usize) -> &'static str {
        self.source.splash_text(line)
    }
}
