//! The single-shot delayed-callback facility consumed by rate controllers.

use std::sync::Arc;
use std::time::Duration;

/// A deferred callback handed to a [`Scheduler`].
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Runs a callback once after a delay.
///
/// Implementations must guarantee that a callback whose handle was passed to
/// [`cancel`](Self::cancel) before it started never runs. No ordering is
/// required between unrelated timers. A callback must never run before
/// [`after`](Self::after) has returned.
pub trait Scheduler: Send + Sync {
    /// Identifies one scheduled callback.
    type Handle: Send + 'static;

    /// Schedules `callback` to run once, `delay` from now.
    fn after(&self, delay: Duration, callback: Callback) -> Self::Handle;

    /// Cancels a scheduled callback. Cancelling a callback that already ran
    /// is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    type Handle = S::Handle;

    #[inline]
    fn after(&self, delay: Duration, callback: Callback) -> Self::Handle {
        (**self).after(delay, callback)
    }

    #[inline]
    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle);
    }
}
