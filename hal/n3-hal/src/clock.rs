//! Monotonic time source
//!
//! Time is a free-running millisecond counter. It wraps after roughly 49
//! days, so every comparison goes through [`elapsed_ms`].

/// Milliseconds since an arbitrary epoch (usually boot)
pub type Millis = u32;

/// Monotonic millisecond clock
pub trait Clock {
    /// Current time in milliseconds; non-decreasing modulo wraparound
    fn now_ms(&self) -> Millis;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, correct across one wrap
#[inline]
pub fn elapsed_ms(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_plain() {
        assert_eq!(elapsed_ms(1500, 1000), 500);
        assert_eq!(elapsed_ms(7, 7), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let since = u32::MAX - 99;
        assert_eq!(elapsed_ms(400, since), 500);
    }
}
