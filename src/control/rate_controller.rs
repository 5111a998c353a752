//! Debounce and throttle behind a single controller.
//!
//! A [`RateController`] wraps an operation and decides, per call, whether to
//! run it now, schedule it for later, or drop it. The decision follows the
//! controller's [`RatePolicy`]: the mode (debounce or throttle) and which
//! edges of a burst or window fire.
//!
//! # State Machine
//!
//! ```text
//! IDLE --call--> [leading fire?] --> PENDING --timer--> [trailing fire?] --> IDLE
//!                                      |  ^
//!                                      +--+ call: debounce reschedules,
//!                                             throttle records the arguments
//! any --dispose--> DISPOSED
//! ```
//!
//! At most one timer is live per controller. Every scheduled callback carries
//! the id of the timer it belongs to and does nothing unless that id is still
//! the pending one, so a replaced or cancelled timer can never fire.
//!
//! The operation always runs with no internal lock held, so it may call its
//! own controller again; such calls follow the ordinary rules.
//!
//! # Examples
//!
//! ```rust
//! use cadenza::control::{Dispatch, RateController, RateOptions, VirtualTime};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let time = VirtualTime::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let search = RateController::new(
//!     move |query: &'static str| sink.lock().unwrap().push(query),
//!     RateOptions::debounce(300),
//!     time.clone(),
//!     time.clone(),
//! )
//! .unwrap();
//!
//! assert_eq!(search.call("r"), Dispatch::Scheduled);
//! time.advance(Duration::from_millis(100));
//! search.call("ru");
//! time.advance(Duration::from_millis(100));
//! search.call("rust");
//!
//! time.advance(Duration::from_millis(300));
//! assert_eq!(*seen.lock().unwrap(), vec!["rust"]);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use super::{Clock, InvalidConfiguration, RateMode, RateOptions, RatePolicy, Scheduler};

/// What a call to [`RateController::call`] did with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The operation ran before `call` returned.
    Invoked,
    /// A new timer was scheduled; the arguments will be used by a trailing fire.
    Scheduled,
    /// A timer was already pending; the arguments replaced the recorded ones.
    Deferred,
    /// The trailing edge is disabled and the call did not fire; the
    /// arguments were discarded.
    Dropped,
    /// The controller has been disposed; the arguments were discarded.
    Disposed,
}

impl Dispatch {
    /// Returns `true` if the operation ran during the call.
    #[inline]
    pub const fn is_invoked(self) -> bool {
        matches!(self, Self::Invoked)
    }
}

struct PendingTimer<H> {
    id: u64,
    handle: H,
}

struct ControllerState<Args, H> {
    pending: Option<PendingTimer<H>>,
    next_timer_id: u64,
    last_fire: Option<Duration>,
    latest: Option<Args>,
    disposed: bool,
}

type Operation<Args> = Box<dyn Fn(Args) + Send + Sync>;

struct Shared<Args, C, S: Scheduler> {
    operation: Operation<Args>,
    policy: RatePolicy,
    clock: C,
    scheduler: S,
    state: Mutex<ControllerState<Args, S::Handle>>,
}

/// Rate-controlled wrapper around an operation.
///
/// `Args` carries everything the operation needs from a call, including any
/// context a caller wants threaded through (use a tuple). Calls are
/// fire-and-forget: [`call`](Self::call) reports what it did with the
/// arguments, never the operation's result.
///
/// Dropping the controller disposes it, cancelling any pending timer.
///
/// # Failures
///
/// A panic in the operation is not caught. For an immediate fire it unwinds
/// through [`call`](Self::call) or [`flush`](Self::flush); for a deferred fire
/// it surfaces wherever the scheduler runs callbacks. The controller's state
/// is settled before the operation runs, so it stays usable afterwards.
pub struct RateController<Args, C, S>
where
    S: Scheduler,
{
    shared: Arc<Shared<Args, C, S>>,
}

impl<Args, C, S> RateController<Args, C, S>
where
    Args: Send + 'static,
    C: Clock + 'static,
    S: Scheduler + 'static,
{
    /// Wraps `operation` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] if the interval is negative or both
    /// edges are disabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadenza::control::{InvalidConfiguration, RateController, RateOptions, VirtualTime};
    ///
    /// let time = VirtualTime::new();
    /// let result = RateController::new(
    ///     |_: ()| {},
    ///     RateOptions::throttle(100).leading(false).trailing(false),
    ///     time.clone(),
    ///     time,
    /// );
    ///
    /// assert!(matches!(result, Err(InvalidConfiguration::NoFiringEdge { .. })));
    /// ```
    pub fn new<F>(
        operation: F,
        options: RateOptions,
        clock: C,
        scheduler: S,
    ) -> Result<Self, InvalidConfiguration>
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        let policy = options.validate()?;
        Ok(Self::with_policy(operation, policy, clock, scheduler))
    }

    /// Wraps `operation` with an already validated policy.
    pub fn with_policy<F>(operation: F, policy: RatePolicy, clock: C, scheduler: S) -> Self
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        tracing::debug!(
            mode = %policy.mode(),
            interval = ?policy.interval(),
            leading = policy.leading(),
            trailing = policy.trailing(),
            "rate controller created"
        );

        Self {
            shared: Arc::new(Shared {
                operation: Box::new(operation),
                policy,
                clock,
                scheduler,
                state: Mutex::new(ControllerState {
                    pending: None,
                    next_timer_id: 0,
                    last_fire: None,
                    latest: None,
                    disposed: false,
                }),
            }),
        }
    }

    /// Offers one call to the controller.
    ///
    /// Depending on the policy and the current state, the operation runs now
    /// with `args`, or `args` are recorded for a trailing fire, or they are
    /// discarded.
    pub fn call(&self, args: Args) -> Dispatch {
        let (dispatch, fire) = {
            let mut state = self.shared.state.lock();
            if state.disposed {
                tracing::trace!("call ignored: controller disposed");
                return Dispatch::Disposed;
            }

            if self.shared.policy.is_passthrough() {
                (Dispatch::Invoked, Some(args))
            } else {
                match self.shared.policy.mode() {
                    RateMode::Debounce => self.shared.debounce(&mut state, args),
                    RateMode::Throttle => self.shared.throttle(&mut state, args),
                }
            }
        };

        tracing::trace!(?dispatch, "call dispatched");
        if let Some(args) = fire {
            (self.shared.operation)(args);
        }
        dispatch
    }

    /// Runs a pending trailing fire immediately.
    ///
    /// Returns `true` if the operation ran. Without a pending timer this is
    /// a no-op.
    pub fn flush(&self) -> bool {
        let fire = {
            let mut state = self.shared.state.lock();
            if !self.shared.cancel_pending(&mut state) {
                return false;
            }
            self.shared.settle(&mut state)
        };

        match fire {
            Some(args) => {
                tracing::trace!("pending fire flushed");
                (self.shared.operation)(args);
                true
            }
            None => false,
        }
    }

    /// Drops any pending trailing fire and forgets the current burst or window.
    ///
    /// The controller stays usable; the next call is treated as the first.
    /// Returns `true` if a timer was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.shared.state.lock();
        let cancelled = self.shared.cancel_pending(&mut state);
        state.latest = None;
        state.last_fire = None;
        if cancelled {
            tracing::trace!("pending fire cancelled");
        }
        cancelled
    }
}

impl<Args, C, S: Scheduler> RateController<Args, C, S> {
    /// Cancels any pending timer and stops accepting calls.
    ///
    /// Idempotent: disposing twice, or disposing with nothing pending, does
    /// nothing further.
    pub fn dispose(&self) {
        let mut state = self.shared.state.lock();
        if state.disposed {
            return;
        }
        self.shared.cancel_pending(&mut state);
        state.latest = None;
        state.disposed = true;
        tracing::debug!(mode = %self.shared.policy.mode(), "rate controller disposed");
    }

    /// Returns `true` while a trailing fire is scheduled.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.shared.state.lock().disposed
    }

    /// The validated policy this controller applies.
    pub fn policy(&self) -> RatePolicy {
        self.shared.policy
    }
}

impl<Args, C, S> Shared<Args, C, S>
where
    Args: Send + 'static,
    C: Clock + 'static,
    S: Scheduler + 'static,
{
    fn debounce(
        self: &Arc<Self>,
        state: &mut ControllerState<Args, S::Handle>,
        args: Args,
    ) -> (Dispatch, Option<Args>) {
        let burst_start = !self.cancel_pending(state);
        self.schedule(state, self.policy.interval());

        if burst_start && self.policy.leading() {
            state.latest = None;
            (Dispatch::Invoked, Some(args))
        } else if self.policy.trailing() {
            state.latest = Some(args);
            (Dispatch::Scheduled, None)
        } else {
            (Dispatch::Dropped, None)
        }
    }

    fn throttle(
        self: &Arc<Self>,
        state: &mut ControllerState<Args, S::Handle>,
        args: Args,
    ) -> (Dispatch, Option<Args>) {
        let now = self.clock.now();
        if state.last_fire.is_none() && !self.policy.leading() {
            state.last_fire = Some(now);
        }

        let remaining = state.last_fire.map_or(Duration::ZERO, |last_fire| {
            self.policy
                .interval()
                .saturating_sub(now.saturating_sub(last_fire))
        });

        if remaining.is_zero() {
            self.cancel_pending(state);
            state.latest = None;
            state.last_fire = Some(now);
            (Dispatch::Invoked, Some(args))
        } else if state.pending.is_some() {
            state.latest = Some(args);
            (Dispatch::Deferred, None)
        } else if self.policy.trailing() {
            state.latest = Some(args);
            self.schedule(state, remaining);
            (Dispatch::Scheduled, None)
        } else {
            (Dispatch::Dropped, None)
        }
    }

    fn schedule(self: &Arc<Self>, state: &mut ControllerState<Args, S::Handle>, delay: Duration) {
        let id = state.next_timer_id;
        state.next_timer_id += 1;

        let shared: Weak<Self> = Arc::downgrade(self);
        let handle = self.scheduler.after(
            delay,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.fire_timer(id);
                }
            }),
        );
        tracing::trace!(timer = id, ?delay, "timer scheduled");
        state.pending = Some(PendingTimer { id, handle });
    }

    fn fire_timer(&self, id: u64) {
        let fire = {
            let mut state = self.state.lock();
            if state.pending.as_ref().map(|timer| timer.id) != Some(id) {
                tracing::trace!(timer = id, "stale timer ignored");
                return;
            }
            state.pending = None;
            self.settle(&mut state)
        };

        if let Some(args) = fire {
            tracing::trace!(timer = id, "trailing edge fired");
            (self.operation)(args);
        }
    }

    /// Resolves the end of a pending window once its timer is gone.
    fn settle(&self, state: &mut ControllerState<Args, S::Handle>) -> Option<Args> {
        let latest = state.latest.take();
        match self.policy.mode() {
            RateMode::Debounce => latest.filter(|_| self.policy.trailing()),
            RateMode::Throttle => {
                state.last_fire = self.policy.leading().then(|| self.clock.now());
                latest
            }
        }
    }
}

impl<Args, C, S: Scheduler> Shared<Args, C, S> {
    fn cancel_pending(&self, state: &mut ControllerState<Args, S::Handle>) -> bool {
        match state.pending.take() {
            Some(timer) => {
                self.scheduler.cancel(timer.handle);
                true
            }
            None => false,
        }
    }
}

impl<Args, C, S: Scheduler> Drop for RateController<Args, C, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<Args, C, S: Scheduler> fmt::Debug for RateController<Args, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        formatter
            .debug_struct("RateController")
            .field("policy", &self.shared.policy)
            .field("pending", &state.pending.is_some())
            .field("last_fire", &state.last_fire)
            .field("disposed", &state.disposed)
            .finish_non_exhaustive()
    }
}
