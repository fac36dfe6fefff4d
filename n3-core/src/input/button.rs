//! Push-button edge detector
//!
//! Assumes a push-to-make switch connected to ground with the pin pulled up.
//! `update` must run after every pin change (the pin interrupt wakes the
//! loop for exactly this) or at least once per polling cycle.

use n3_hal::{elapsed_ms, InputPin, Millis};

/// A completed, classified button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Released before the long-press threshold (held ms)
    Short(Millis),
    /// Held for at least the long-press threshold (held ms)
    Long(Millis),
}

impl Press {
    /// Classify a press duration; zero means no press
    pub fn classify(duration_ms: Millis, long_threshold_ms: Millis) -> Option<Self> {
        match duration_ms {
            0 => None,
            d if d >= long_threshold_ms => Some(Press::Long(d)),
            d => Some(Press::Short(d)),
        }
    }

    /// Check if this is a long press
    pub fn is_long(&self) -> bool {
        matches!(self, Press::Long(_))
    }

    /// How long the button was held (ms)
    pub fn duration_ms(&self) -> Millis {
        match *self {
            Press::Short(d) | Press::Long(d) => d,
        }
    }
}

/// Debounced button with a one-slot press buffer
pub struct ButtonInput<P> {
    pin: P,
    /// Pressed state when last observed
    last_pressed: bool,
    /// Start of the current press; `None` if it began before we looked
    pressed_at: Option<Millis>,
    /// Duration of the last completed press, 0 if none pending
    pending: Millis,
    /// Completed presses shorter than this are discarded
    min_press_ms: Millis,
}

impl<P: InputPin> ButtonInput<P> {
    /// Create a button on `pin`, sampling its current level
    ///
    /// A button already held at startup never produces a press of
    /// unknown length; its release is ignored.
    pub fn new(pin: P, min_press_ms: Millis) -> Self {
        let last_pressed = pin.is_pressed();
        Self {
            pin,
            last_pressed,
            pressed_at: None,
            pending: 0,
            min_press_ms: min_press_ms.max(1),
        }
    }

    /// Sample the pin and record press/release edges
    pub fn update(&mut self, now: Millis) {
        let pressed = self.pin.is_pressed();
        if pressed == self.last_pressed {
            return;
        }
        self.last_pressed = pressed;

        if pressed {
            self.pressed_at = Some(now);
            return;
        }

        if let Some(start) = self.pressed_at.take() {
            let duration = elapsed_ms(now, start);
            // Contact bounce
            if duration >= self.min_press_ms {
                self.pending = duration;
            }
        }
    }

    /// Duration of the pending press without consuming it, 0 if none
    pub fn peek_press(&self) -> Millis {
        self.pending
    }

    /// Duration of the pending press, clearing it; 0 if none
    pub fn get_press(&mut self) -> Millis {
        core::mem::take(&mut self.pending)
    }

    /// Take the pending press classified against `long_threshold_ms`
    pub fn take_press(&mut self, long_threshold_ms: Millis) -> Option<Press> {
        Press::classify(self.get_press(), long_threshold_ms)
    }

    /// Check if the button is currently held
    pub fn is_held(&self) -> bool {
        self.last_pressed
    }

    /// Access the pin, e.g. to await its next edge
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePin;
    use proptest::prelude::*;

    fn button(pin: &FakePin) -> ButtonInput<&FakePin> {
        ButtonInput::new(pin, 2)
    }

    fn press(b: &mut ButtonInput<&FakePin>, pin: &FakePin, at: Millis, held: Millis) {
        pin.press();
        b.update(at);
        pin.release();
        b.update(at.wrapping_add(held));
    }

    #[test]
    fn test_no_press_initially() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        b.update(100);
        assert_eq!(b.peek_press(), 0);
        assert_eq!(b.get_press(), 0);
    }

    #[test]
    fn test_press_recorded_on_release_only() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        pin.press();
        b.update(1000);
        assert!(b.is_held());
        assert_eq!(b.peek_press(), 0);
        pin.release();
        b.update(1250);
        assert_eq!(b.peek_press(), 250);
    }

    #[test]
    fn test_peek_is_non_destructive() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        press(&mut b, &pin, 10, 40);
        assert_eq!(b.peek_press(), 40);
        assert_eq!(b.peek_press(), 40);
        assert_eq!(b.get_press(), 40);
        assert_eq!(b.get_press(), 0);
        assert_eq!(b.peek_press(), 0);
    }

    #[test]
    fn test_bounce_discarded() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        press(&mut b, &pin, 500, 1);
        assert_eq!(b.get_press(), 0);
        press(&mut b, &pin, 600, 0);
        assert_eq!(b.get_press(), 0);
    }

    #[test]
    fn test_held_at_startup_ignored() {
        let pin = FakePin::released();
        pin.press();
        let mut b = button(&pin);
        pin.release();
        b.update(5000);
        assert_eq!(b.get_press(), 0);

        press(&mut b, &pin, 6000, 30);
        assert_eq!(b.get_press(), 30);
    }

    #[test]
    fn test_newer_press_replaces_pending() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        press(&mut b, &pin, 0, 100);
        press(&mut b, &pin, 200, 700);
        assert_eq!(b.get_press(), 700);
    }

    #[test]
    fn test_press_across_wraparound() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        press(&mut b, &pin, Millis::MAX - 99, 300);
        assert_eq!(b.get_press(), 300);
    }

    #[test]
    fn test_classify_boundary() {
        assert_eq!(Press::classify(0, 500), None);
        assert_eq!(Press::classify(499, 500), Some(Press::Short(499)));
        assert_eq!(Press::classify(500, 500), Some(Press::Long(500)));
        assert!(Press::classify(501, 500).is_some_and(|p| p.is_long()));
    }

    #[test]
    fn test_take_press_classifies_and_clears() {
        let pin = FakePin::released();
        let mut b = button(&pin);
        press(&mut b, &pin, 0, 650);
        assert_eq!(b.take_press(500), Some(Press::Long(650)));
        assert_eq!(b.take_press(500), None);
    }

    proptest! {
        #[test]
        fn prop_release_reports_held_duration(start in any::<u32>(), held in 2u32..100_000) {
            let pin = FakePin::released();
            let mut b = button(&pin);
            press(&mut b, &pin, start, held);
            prop_assert_eq!(b.peek_press(), held);
            prop_assert_eq!(b.get_press(), held);
            prop_assert_eq!(b.get_press(), 0);
        }

        #[test]
        fn prop_no_edges_no_press(times in proptest::collection::vec(any::<u32>(), 0..32), held in any::<bool>()) {
            let pin = FakePin::released();
            if held {
                pin.press();
            }
            let mut b = button(&pin);
            for t in times {
                b.update(t);
                prop_assert_eq!(b.peek_press(), 0);
            }
        }

        #[test]
        fn prop_classify_splits_at_threshold(d in 1u32..10_000, threshold in 1u32..5_000) {
            let p = Press::classify(d, threshold).unwrap();
            prop_assert_eq!(p.is_long(), d >= threshold);
            prop_assert_eq!(p.duration_ms(), d);
        }
    }
}
