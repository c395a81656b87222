#![forbid(unsafe_code)]

//! Millisecond clocks.
//!
//! Every visibility operation takes an explicit `now_ms`, so the clock is
//! the host's business. [`SystemClock`] is for real event loops;
//! [`VirtualClock`] is for tests that step time by hand.

use web_time::Instant;

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since the clock's origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at 0 ms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Manually stepped clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualClock {
    now_ms: u64,
}

impl VirtualClock {
    /// Clock at 0 ms.
    #[must_use]
    pub const fn new() -> Self {
        Self { now_ms: 0 }
    }

    /// Clock starting at `origin_ms`.
    #[must_use]
    pub const fn starting_at(origin_ms: u64) -> Self {
        Self { now_ms: origin_ms }
    }

    /// Step forward by `ms`, saturating.
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now_ms = self.now_ms.saturating_add(ms);
        self.now_ms
    }

    /// Jump to `ms`. Earlier values are ignored.
    pub fn set(&mut self, ms: u64) -> u64 {
        self.now_ms = self.now_ms.max(ms);
        self.now_ms
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_clock_advances() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.advance(250), 250);
        assert_eq!(clock.advance(50), 300);
    }

    #[test]
    fn virtual_clock_never_rewinds() {
        let mut clock = VirtualClock::starting_at(1_000);
        assert_eq!(clock.set(400), 1_000);
        assert_eq!(clock.set(1_200), 1_200);
    }

    #[test]
    fn virtual_clock_saturates() {
        let mut clock = VirtualClock::starting_at(u64::MAX - 1);
        assert_eq!(clock.advance(10), u64::MAX);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
