//! Tokio-backed clock and scheduler.
//!
//! [`TokioClock`] reads [`tokio::time::Instant`], so it follows paused and
//! advanced time in tests. [`TokioScheduler`] runs each callback on a task
//! that sleeps for the delay; cancelling aborts the task.
//!
//! # Examples
//!
//! ```rust
//! use cadenza::control::{RateController, RateOptions, TokioClock, TokioScheduler};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let fired = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&fired);
//!
//! let save = RateController::new(
//!     move |_: ()| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     RateOptions::debounce(50),
//!     TokioClock::new(),
//!     TokioScheduler::try_current().unwrap(),
//! )
//! .unwrap();
//!
//! save.call(());
//! save.call(());
//! tokio::time::sleep(Duration::from_millis(60)).await;
//!
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! # }
//! ```

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::{Callback, Clock, Scheduler};

/// [`Clock`] backed by [`tokio::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    /// Creates a clock whose origin is the moment of construction.
    #[inline]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// [`Scheduler`] that spawns one sleeping task per timer on a Tokio runtime.
///
/// A panic in a deferred operation ends that task; it is reported through
/// Tokio's usual task-panic handling and is not caught here.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Schedules onto the runtime behind `runtime`.
    #[inline]
    pub const fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Schedules onto the runtime of the calling context.
    ///
    /// Returns `None` when called outside a Tokio runtime.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn after(&self, delay: Duration, callback: Callback) -> JoinHandle<()> {
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}
