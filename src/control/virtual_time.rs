//! Deterministic, manually advanced time.
//!
//! [`VirtualTime`] is both a [`Clock`] and a [`Scheduler`]. Time only moves
//! when [`advance`](VirtualTime::advance) or
//! [`advance_to`](VirtualTime::advance_to) is called, which makes rate
//! controllers fully reproducible in tests and simulations.
//!
//! # Examples
//!
//! ```rust
//! use cadenza::control::{Clock, Scheduler, VirtualTime};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::time::Duration;
//!
//! let time = VirtualTime::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&fired);
//!
//! time.after(Duration::from_millis(100), Box::new(move || flag.store(true, Ordering::SeqCst)));
//!
//! time.advance(Duration::from_millis(99));
//! assert!(!fired.load(Ordering::SeqCst));
//!
//! time.advance(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! assert_eq!(time.now(), Duration::from_millis(100));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Callback, Clock, Scheduler};

/// Handle to a timer scheduled on [`VirtualTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualTimer {
    due: Duration,
    sequence: u64,
}

impl VirtualTimer {
    /// The virtual timestamp at which the timer fires.
    #[inline]
    pub const fn due(&self) -> Duration {
        self.due
    }
}

#[derive(Default)]
struct VirtualState {
    now: Duration,
    next_sequence: u64,
    timers: BTreeMap<(Duration, u64), Callback>,
}

/// A manual clock and scheduler sharing one timeline.
///
/// Clones share the timeline, so one clone can be handed to a controller as
/// its clock and another as its scheduler.
#[derive(Clone, Default)]
pub struct VirtualTime {
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualTime {
    /// Creates a timeline at `t = 0` with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `by`, running every timer that falls due.
    ///
    /// Returns the number of callbacks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now + by;
        self.advance_to(target)
    }

    /// Moves time forward to `target`, running every timer due at or before it.
    ///
    /// Timers run in due order, ties in scheduling order. The clock reads each
    /// timer's due time while its callback runs. Timers scheduled by a callback
    /// run in the same call if they fall due by `target`. A `target` in the
    /// past leaves the clock where it is.
    ///
    /// Returns the number of callbacks that ran.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;

        loop {
            let callback = {
                let mut state = self.state.lock();
                let next_due = state.timers.keys().next().map(|&(due, _)| due);
                match next_due {
                    Some(due) if due <= target => {
                        state.now = state.now.max(due);
                        state.timers.pop_first().map(|(_, callback)| callback)
                    }
                    _ => {
                        state.now = state.now.max(target);
                        None
                    }
                }
            };

            match callback {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }

        fired
    }

    /// Number of timers scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.state.lock().timers.len()
    }

    /// Due time of the earliest live timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.state.lock().timers.keys().next().map(|&(due, _)| due)
    }
}

impl Clock for VirtualTime {
    fn now(&self) -> Duration {
        self.state.lock().now
    }
}

impl Scheduler for VirtualTime {
    type Handle = VirtualTimer;

    fn after(&self, delay: Duration, callback: Callback) -> VirtualTimer {
        let mut state = self.state.lock();
        let timer = VirtualTimer {
            due: state.now + delay,
            sequence: state.next_sequence,
        };
        state.next_sequence += 1;
        state.timers.insert((timer.due, timer.sequence), callback);
        timer
    }

    fn cancel(&self, handle: VirtualTimer) {
        self.state.lock().timers.remove(&(handle.due, handle.sequence));
    }
}

impl fmt::Debug for VirtualTime {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("VirtualTime")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}
