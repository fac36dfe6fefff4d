//! Window manager
//!
//! Owns the windows and the display, tracks which window has focus and
//! runs the splash/active state machine:
//!
//! ```text
//!            focus change
//!   ┌─────────────────────────────┐
//!   ▼                             │
//! Splash ──(splash_ms elapsed)──► Active
//! ```
//!
//! While active, a long press moves focus to the next valid window. A
//! press that finds no other valid window leaves focus where it is.

use heapless::Vec;
use n3_display::{CharDisplay, CharDisplayExt, LCD_ROWS};
use n3_display::glyph::{ICON_COLS, ICON_GLYPHS};
use n3_hal::{elapsed_ms, Millis};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{RevalidationPolicy, UiConfig};
use crate::gps::GpsSource;
use crate::input::Press;
use crate::window::{Context, Window};

/// Manager phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Showing the focused window's splash screen
    Splash,
    /// Focused window is updating its own content
    Active,
}

/// Transition reported by [`WindowManager::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ManagerEvent {
    /// Focus moved to this window; its splash is showing
    Focused(usize),
    /// Splash finished for this window
    Activated(usize),
    /// Long press with no other valid window to go to
    RotationRefused,
}

/// Construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ManagerError {
    /// No windows to manage
    NoWindows,
    /// Home index does not name a window
    HomeOutOfRange,
}

/// Single-focus window manager
pub struct WindowManager<W, D, G, const N: usize> {
    windows: Vec<W, N>,
    display: D,
    gps: G,
    config: UiConfig,
    focused: usize,
    /// Fallback focus when nothing is valid at startup
    home: usize,
    phase: Phase,
    phase_entered_at: Millis,
    started: bool,
}

impl<W: Window, D: CharDisplay, G: GpsSource, const N: usize> WindowManager<W, D, G, N> {
    /// Create a manager; `home` should be a window that is always valid
    pub fn new(
        windows: Vec<W, N>,
        home: usize,
        display: D,
        gps: G,
        config: UiConfig,
    ) -> Result<Self, ManagerError> {
        if windows.is_empty() {
            return Err(ManagerError::NoWindows);
        }
        if home >= windows.len() {
            return Err(ManagerError::HomeOutOfRange);
        }

        Ok(Self {
            windows,
            display,
            gps,
            config,
            focused: home,
            home,
            phase: Phase::Splash,
            phase_entered_at: 0,
            started: false,
        })
    }

    /// Focus the first valid window (or home) and show its splash
    pub fn start(&mut self, now: Millis) -> ManagerEvent {
        let len = self.windows.len();
        let first = (0..len).find(|&i| self.windows[i].is_valid(&self.gps));
        if self.started {
            self.windows[self.focused].unfocus();
        }
        self.started = true;
        self.enter(first.unwrap_or(self.home), now)
    }

    /// Advance the state machine
    ///
    /// `press` is the press completed since the last poll, if any. Only long
    /// presses matter, and only while active.
    pub fn poll(&mut self, now: Millis, press: Option<Press>) -> Option<ManagerEvent> {
        if !self.started {
            return Some(self.start(now));
        }

        match self.phase {
            Phase::Splash => {
                if elapsed_ms(now, self.phase_entered_at) < self.config.splash_ms {
                    return None;
                }
                self.phase = Phase::Active;
                self.phase_entered_at = now;
                self.display.clear().ok();
                if self.focused_is_valid() {
                    self.update_focused(now);
                }
                Some(ManagerEvent::Activated(self.focused))
            }
            Phase::Active => {
                if press.is_some_and(|p| p.is_long()) {
                    return Some(match self.next_valid() {
                        Some(next) => self.rotate_to(next, now),
                        None => ManagerEvent::RotationRefused,
                    });
                }

                if self.focused_is_valid() {
                    self.update_focused(now);
                    return None;
                }

                match self.config.revalidation {
                    RevalidationPolicy::OnRotation => None,
                    RevalidationPolicy::Eager => {
                        self.next_valid().map(|next| self.rotate_to(next, now))
                    }
                }
            }
        }
    }

    /// Index of the next valid window after the focused one, cyclically
    fn next_valid(&self) -> Option<usize> {
        let len = self.windows.len();
        (1..len)
            .map(|k| (self.focused + k) % len)
            .find(|&i| self.windows[i].is_valid(&self.gps))
    }

    fn focused_is_valid(&self) -> bool {
        self.windows[self.focused].is_valid(&self.gps)
    }

    fn update_focused(&mut self, now: Millis) {
        let mut cx = Context {
            now,
            display: &mut self.display,
            gps: &self.gps,
        };
        self.windows[self.focused].update(&mut cx);
    }

    fn rotate_to(&mut self, index: usize, now: Millis) -> ManagerEvent {
        self.windows[self.focused].unfocus();
        self.enter(index, now)
    }

    /// Give `index` focus and show its splash
    fn enter(&mut self, index: usize, now: Millis) -> ManagerEvent {
        self.focused = index;

        let mut cx = Context {
            now,
            display: &mut self.display,
            gps: &self.gps,
        };
        self.windows[index].focus(&mut cx);

        self.phase = Phase::Splash;
        self.phase_entered_at = now;
        self.render_splash();
        ManagerEvent::Focused(index)
    }

    /// Icon on the left three columns, text on the right
    fn render_splash(&mut self) {
        let window = &self.windows[self.focused];
        let display = &mut self.display;
        display.clear().ok();

        for pos in 0..ICON_GLYPHS {
            display.define_glyph(pos as u8, &window.splash_icon(pos)).ok();
        }

        for row in 0..LCD_ROWS {
            display.set_cursor(0, row).ok();
            for col in 0..ICON_COLS {
                display.write_glyph(row * ICON_COLS + col).ok();
            }
            display.print_at(ICON_COLS, row, window.splash_text(row as usize)).ok();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn windows(&self) -> &[W] {
        &self.windows
    }

    pub fn window_mut(&mut self, index: usize) -> Option<&mut W> {
        self.windows.get_mut(index)
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGps;
    use n3_display::{Glyph, Screen};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<std::vec::Vec<(usize, &'static str)>>>;

    /// Window whose validity the test controls and which records its calls
    struct Scripted {
        id: usize,
        valid: bool,
        log: Log,
    }

    impl Window for Scripted {
        fn focus(&mut self, _cx: &mut Context<'_>) {
            self.log.borrow_mut().push((self.id, "focus"));
        }

        fn update(&mut self, _cx: &mut Context<'_>) {
            assert!(self.valid, "update on invalid window {}", self.id);
            self.log.borrow_mut().push((self.id, "update"));
        }

        fn unfocus(&mut self) {
            self.log.borrow_mut().push((self.id, "unfocus"));
        }

        fn is_valid(&self, _gps: &dyn GpsSource) -> bool {
            self.valid
        }

        fn splash_icon(&self, _pos: usize) -> Glyph {
            Glyph([0x1F; 8])
        }

        fn splash_text(&self, line: usize) -> &'static str {
            ["Win", "Test"].get(line).copied().unwrap_or("")
        }
    }

    const SPLASH: Millis = 2000;
    const LONG: Option<Press> = Some(Press::Long(600));
    const SHORT: Option<Press> = Some(Press::Short(100));

    type Manager = WindowManager<Scripted, Screen, FakeGps, 4>;

    fn manager(valid: &[bool], config: UiConfig) -> (Manager, Log) {
        let log = Log::default();
        let windows = valid
            .iter()
            .enumerate()
            .map(|(id, &valid)| Scripted {
                id,
                valid,
                log: log.clone(),
            })
            .collect();
        let m = WindowManager::new(windows, 0, Screen::new(), FakeGps::no_fix(), config).unwrap();
        (m, log)
    }

    /// Start at `t0` and run past the splash
    fn activate(m: &mut Manager, t0: Millis) -> Millis {
        m.start(t0);
        let t = t0.wrapping_add(SPLASH);
        assert_eq!(m.poll(t, None), Some(ManagerEvent::Activated(m.focused_index())));
        t
    }

    #[test]
    fn test_rejects_bad_construction() {
        let err = WindowManager::<Scripted, _, _, 4>::new(
            Vec::new(),
            0,
            Screen::new(),
            FakeGps::no_fix(),
            UiConfig::default(),
        );
        assert_eq!(err.err(), Some(ManagerError::NoWindows));

        let mut windows: Vec<Scripted, 4> = Vec::new();
        let _ = windows.push(Scripted {
            id: 0,
            valid: true,
            log: Log::default(),
        });
        let err = WindowManager::new(windows, 1, Screen::new(), FakeGps::no_fix(), UiConfig::default());
        assert_eq!(err.err(), Some(ManagerError::HomeOutOfRange));
    }

    #[test]
    fn test_start_focuses_first_valid() {
        let (mut m, _) = manager(&[false, false, true, true], UiConfig::default());
        assert_eq!(m.start(0), ManagerEvent::Focused(2));
        assert_eq!(m.phase(), Phase::Splash);
    }

    #[test]
    fn test_start_falls_back_to_home() {
        let (mut m, log) = manager(&[false, false, false], UiConfig::default());
        assert_eq!(m.start(0), ManagerEvent::Focused(0));
        assert_eq!(*log.borrow(), [(0, "focus")]);
    }

    #[test]
    fn test_first_poll_starts() {
        let (mut m, _) = manager(&[true, true], UiConfig::default());
        assert_eq!(m.poll(50, None), Some(ManagerEvent::Focused(0)));
        assert_eq!(m.poll(51, None), None);
    }

    #[test]
    fn test_splash_rendered() {
        let (mut m, _) = manager(&[true], UiConfig::default());
        m.start(0);
        assert_eq!(m.display().row_text(0).as_str(), "###Win  ");
        assert_eq!(m.display().row_text(1).as_str(), "###Test ");
        assert_eq!(m.display().cell(2, 1), Some(5));
        assert_eq!(m.display().glyph(5), Some(&Glyph([0x1F; 8])));
    }

    #[test]
    fn test_splash_timing() {
        let (mut m, log) = manager(&[true, true], UiConfig::default());
        let t0 = 7;
        m.start(t0);
        assert_eq!(m.poll(t0 + SPLASH - 1, None), None);
        assert_eq!(m.phase(), Phase::Splash);
        assert_eq!(m.poll(t0 + SPLASH, None), Some(ManagerEvent::Activated(0)));
        assert_eq!(m.phase(), Phase::Active);

        // Activation clears the splash and updates in the same poll
        assert_eq!(log.borrow().last(), Some(&(0, "update")));
        assert_eq!(m.display().row_text(0).as_str(), "        ");
    }

    #[test]
    fn test_splash_timing_across_wraparound() {
        let (mut m, _) = manager(&[true], UiConfig::default());
        let t0 = Millis::MAX - 500;
        m.start(t0);
        assert_eq!(m.poll(t0.wrapping_add(SPLASH - 1), None), None);
        assert!(m.poll(t0.wrapping_add(SPLASH), None).is_some());
        assert_eq!(m.phase(), Phase::Active);
    }

    #[test]
    fn test_rotation_skips_invalid() {
        let (mut m, log) = manager(&[true, false, true, false], UiConfig::default());
        let t = activate(&mut m, 0);
        log.borrow_mut().clear();

        assert_eq!(m.poll(t + 1, LONG), Some(ManagerEvent::Focused(2)));
        assert_eq!(m.phase(), Phase::Splash);
        assert_eq!(*log.borrow(), [(0, "unfocus"), (2, "focus")]);

        // Wraps back past the invalid tail
        let t = t + 1 + SPLASH;
        m.poll(t, None);
        assert_eq!(m.poll(t + 1, LONG), Some(ManagerEvent::Focused(0)));
    }

    #[test]
    fn test_rotation_refused_when_alone() {
        let (mut m, log) = manager(&[false, true, false], UiConfig::default());
        let t = activate(&mut m, 0);
        assert_eq!(m.focused_index(), 1);
        log.borrow_mut().clear();

        assert_eq!(m.poll(t + 1, LONG), Some(ManagerEvent::RotationRefused));
        assert_eq!(m.focused_index(), 1);
        assert_eq!(m.phase(), Phase::Active);
        assert!(log.borrow().iter().all(|&(_, call)| call != "focus"));
    }

    #[test]
    fn test_press_ignored_during_splash_and_short_ignored() {
        let (mut m, _) = manager(&[true, true], UiConfig::default());
        m.start(0);
        assert_eq!(m.poll(10, LONG), None);
        assert_eq!(m.focused_index(), 0);

        m.poll(SPLASH, None);
        assert_eq!(m.poll(SPLASH + 1, SHORT), None);
        assert_eq!(m.focused_index(), 0);
    }

    #[test]
    fn test_invalid_focused_not_updated() {
        let (mut m, log) = manager(&[true, true], UiConfig::default());
        let t = activate(&mut m, 0);
        if let Some(w) = m.window_mut(0) {
            w.valid = false;
        }
        log.borrow_mut().clear();

        assert_eq!(m.poll(t + 1, None), None);
        assert_eq!(m.focused_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_eager_policy_rotates_away() {
        let config = UiConfig {
            revalidation: RevalidationPolicy::Eager,
            ..UiConfig::default()
        };
        let (mut m, _) = manager(&[true, true, true], config);
        let t = activate(&mut m, 0);
        if let Some(w) = m.window_mut(0) {
            w.valid = false;
        }
        assert_eq!(m.poll(t + 1, None), Some(ManagerEvent::Focused(1)));
    }

    #[test]
    fn test_eager_policy_stays_when_alone() {
        let config = UiConfig {
            revalidation: RevalidationPolicy::Eager,
            ..UiConfig::default()
        };
        let (mut m, _) = manager(&[true, false], config);
        let t = activate(&mut m, 0);
        if let Some(w) = m.window_mut(0) {
            w.valid = false;
        }
        assert_eq!(m.poll(t + 1, None), None);
        assert_eq!(m.focused_index(), 0);
    }
}
