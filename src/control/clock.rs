//! Monotonic time sources.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Timestamps are the time elapsed since the clock's own origin, so they can
/// be subtracted and compared but carry no wall-clock meaning.
pub trait Clock: Send + Sync {
    /// Returns the current timestamp. Never decreases.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// [`Clock`] backed by [`std::time::Instant`].
///
/// # Examples
///
/// ```rust
/// use cadenza::control::{Clock, SystemClock};
///
/// let clock = SystemClock::new();
/// let earlier = clock.now();
/// assert!(clock.now() >= earlier);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is the moment of construction.
    #[inline]
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
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
