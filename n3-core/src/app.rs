//! The altimeter's cooperative UI loop body
//!
//! Wires the button, clock and the standard window set together. The
//! firmware calls [`Altimeter::poll`] whenever the button pin changes or
//! the UI tick fires; everything else happens inside `poll`.

use heapless::Vec;
use n3_display::CharDisplay;
use n3_hal::{Clock, InputPin};

use crate::config::UiConfig;
use crate::gps::GpsSource;
use crate::input::ButtonInput;
use crate::manager::{ManagerError, ManagerEvent, WindowManager};
use crate::window::{AnyWindow, WINDOW_COUNT};

/// About is always valid, so it is the fallback focus
const HOME_WINDOW: usize = 0;

pub struct Altimeter<P, C, D, G> {
    button: ButtonInput<P>,
    clock: C,
    manager: WindowManager<AnyWindow, D, G, WINDOW_COUNT>,
    long_press_ms: u32,
}

impl<P, C, D, G> Altimeter<P, C, D, G>
where
    P: InputPin,
    C: Clock,
    D: CharDisplay,
    G: GpsSource,
{
    pub fn new(pin: P, clock: C, display: D, gps: G, config: UiConfig) -> Result<Self, ManagerError> {
        let windows: Vec<AnyWindow, WINDOW_COUNT> =
            Vec::from_iter(AnyWindow::standard_set(&config));
        let manager = WindowManager::new(windows, HOME_WINDOW, display, gps, config)?;

        Ok(Self {
            button: ButtonInput::new(pin, config.min_press_ms),
            clock,
            manager,
            long_press_ms: config.long_press_ms,
        })
    }

    /// Focus the first valid window and show its splash
    pub fn start(&mut self) -> ManagerEvent {
        let now = self.clock.now_ms();
        self.manager.start(now)
    }

    /// Sample the button and advance the window manager
    pub fn poll(&mut self) -> Option<ManagerEvent> {
        let now = self.clock.now_ms();
        self.button.update(now);
        let press = self.button.take_press(self.long_press_ms);
        self.manager.poll(now, press)
    }

    /// The button pin, e.g. to await its next edge
    pub fn button_pin_mut(&mut self) -> &mut P {
        self.button.pin_mut()
    }

    pub fn manager(&self) -> &WindowManager<AnyWindow, D, G, WINDOW_COUNT> {
        &self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Phase;
    use crate::testing::{FakeClock, FakeGps, FakePin};
    use n3_display::Screen;

    struct Rig<'a> {
        pin: &'a FakePin,
        clock: &'a FakeClock,
        app: Altimeter<&'a FakePin, &'a FakeClock, Screen, &'a FakeGps>,
    }

    impl Rig<'_> {
        fn wait(&mut self, ms: u32) -> Option<ManagerEvent> {
            self.clock.advance(ms);
            self.app.poll()
        }

        fn hold(&mut self, ms: u32) -> Option<ManagerEvent> {
            self.pin.press();
            assert_eq!(self.app.poll(), None);
            self.pin.release();
            self.wait(ms)
        }
    }

    #[test]
    fn test_full_rotation() {
        let pin = FakePin::released();
        let clock = FakeClock::at(1_000);
        let gps = FakeGps::london(120.0);
        let app = Altimeter::new(&pin, &clock, Screen::new(), &gps, UiConfig::default()).unwrap();
        let mut rig = Rig {
            pin: &pin,
            clock: &clock,
            app,
        };

        assert_eq!(rig.app.start(), ManagerEvent::Focused(0));
        assert_eq!(rig.app.manager().display().row_text(0).as_str(), "###About");
        assert_eq!(rig.wait(2_000), Some(ManagerEvent::Activated(0)));
        assert_eq!(rig.app.manager().display().row_text(1).as_str(), "(C) JDH ");

        // Short press does nothing
        assert_eq!(rig.hold(100), None);
        assert_eq!(rig.app.manager().focused_index(), 0);

        assert_eq!(rig.hold(600), Some(ManagerEvent::Focused(1)));
        assert_eq!(rig.app.manager().display().row_text(1).as_str(), "### SEA ");
        assert_eq!(rig.wait(2_000), Some(ManagerEvent::Activated(1)));
        assert_eq!(rig.app.manager().display().row_text(0).as_str(), "    120m");

        gps.set_altitude(125.0);
        assert_eq!(rig.wait(1_100), None);
        assert_eq!(rig.app.manager().display().row_text(1).as_str(), "   +5.0m");

        assert_eq!(rig.hold(500), Some(ManagerEvent::Focused(2)));
        rig.wait(2_000);
        assert_eq!(rig.hold(500), Some(ManagerEvent::Focused(3)));
        rig.wait(2_000);
        assert_eq!(rig.hold(500), Some(ManagerEvent::Focused(0)));
        assert_eq!(rig.app.manager().phase(), Phase::Splash);
    }

    #[test]
    fn test_without_fix_stays_on_about() {
        let pin = FakePin::released();
        let clock = FakeClock::at(0);
        let gps = FakeGps::no_fix();
        let app = Altimeter::new(&pin, &clock, Screen::new(), &gps, UiConfig::default()).unwrap();
        let mut rig = Rig {
            pin: &pin,
            clock: &clock,
            app,
        };

        assert_eq!(rig.app.poll(), Some(ManagerEvent::Focused(0)));
        rig.wait(2_000);
        assert_eq!(rig.hold(800), Some(ManagerEvent::RotationRefused));
        assert_eq!(rig.app.manager().focused_index(), 0);
    }
}
