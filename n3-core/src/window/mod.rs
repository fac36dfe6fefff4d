//! Display windows
//!
//! Every screen the user can rotate through implements [`Window`]. The
//! manager only ever talks to the focused window, and only through this
//! capability set.

pub mod about;
pub mod altitude;

pub use about::AboutWindow;
pub use altitude::{AltitudeSource, AltitudeWindow, Iosdn, Osdn, Sea};

use n3_display::{CharDisplay, Glyph};
use n3_hal::Millis;

use crate::config::UiConfig;
use crate::datum::{GB_FIXED, GB_GRID};
use crate::gps::GpsSource;

/// Hardware handles lent to a window for one call
pub struct Context<'a> {
    pub now: Millis,
    pub display: &'a mut dyn CharDisplay,
    pub gps: &'a dyn GpsSource,
}

/// A focusable screen
pub trait Window {
    /// Reset display state on gaining focus. May be called any number of
    /// times.
    fn focus(&mut self, cx: &mut Context<'_>);

    /// Refresh the display; called on every poll while active
    fn update(&mut self, cx: &mut Context<'_>);

    /// Exit hook, leaving the window ready to be focused again
    fn unfocus(&mut self);

    /// Check whether the window has meaningful data to show. When false,
    /// only `is_valid` and `unfocus` may be called.
    fn is_valid(&self, gps: &dyn GpsSource) -> bool;

    /// Splash icon cell `pos`, laid out `012 / 345`
    fn splash_icon(&self, pos: usize) -> Glyph;

    /// Splash text for `line` (0 or 1), at most five columns
    fn splash_text(&self, line: usize) -> &'static str;
}

/// Number of windows on the device
pub const WINDOW_COUNT: usize = 4;

/// The windows the device ships with
pub enum AnyWindow {
    About(AboutWindow),
    Sea(AltitudeWindow<Sea>),
    Osdn(AltitudeWindow<Osdn>),
    Iosdn(AltitudeWindow<Iosdn>),
}

impl AnyWindow {
    /// About first (the home window), then the altitude views
    pub fn standard_set(config: &UiConfig) -> [AnyWindow; WINDOW_COUNT] {
        let period = config.update_period_ms;
        [
            AnyWindow::About(AboutWindow::new(config.page_ms)),
            AnyWindow::Sea(AltitudeWindow::new(Sea, period)),
            AnyWindow::Osdn(AltitudeWindow::new(Osdn::new(GB_FIXED), period)),
            AnyWindow::Iosdn(AltitudeWindow::new(Iosdn::new(Some(GB_GRID)), period)),
        ]
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AnyWindow::About(_) => "about",
            AnyWindow::Sea(_) => "sea",
            AnyWindow::Osdn(_) => "osdn",
            AnyWindow::Iosdn(_) => "iosdn",
        }
    }
}

macro_rules! delegate {
    ($self:ident, $w:ident => $e:expr) => {
        match $self {
            AnyWindow::About($w) => $e,
            AnyWindow::Sea($w) => $e,
            AnyWindow::Osdn($w) => $e,
            AnyWindow::Iosdn($w) => $e,
        }
    };
}

impl Window for AnyWindow {
    fn focus(&mut self, cx: &mut Context<'_>) {
        delegate!(self, w => w.focus(cx))
    }

    fn update(&mut self, cx: &mut Context<'_>) {
        delegate!(self, w => w.update(cx))
    }

    fn unfocus(&mut self) {
        delegate!(self, w => w.unfocus())
    }

    fn is_valid(&self, gps: &dyn GpsSource) -> bool {
        delegate!(self, w => w.is_valid(gps))
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        delegate!(self, w => w.splash_icon(pos))
    }

    fn splash_text(&self, line: usize) -> &'static str {
        delegate!(self, w => w.splash_text(line))
    }
}
