//! Rate control for wrapped operations.
//!
//! This module provides a single controller for the two classic call-rate
//! policies:
//!
//! - **Debounce**: fire only after a quiet period with no further calls
//! - **Throttle**: fire at most once per interval regardless of call frequency
//!
//! Each policy can fire on the leading edge (first call of a burst or
//! window), the trailing edge (end of the burst or window, with the latest
//! arguments), or both.
//!
//! # Collaborators
//!
//! A controller never reads the system clock or spawns timers itself. It
//! consumes a [`Clock`] and a [`Scheduler`]:
//!
//! - [`VirtualTime`]: manual, deterministic time (tests, simulations)
//! - [`SystemClock`]: `std::time::Instant`
//! - [`TokioClock`] / [`TokioScheduler`]: Tokio time and tasks (`async` feature)
//!
//! # Examples
//!
//! ## Throttle
//!
//! ```rust
//! use cadenza::control::{Dispatch, RateController, RateOptions, VirtualTime};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let time = VirtualTime::new();
//! let positions = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&positions);
//!
//! let on_scroll = RateController::new(
//!     move |offset: u32| sink.lock().unwrap().push(offset),
//!     RateOptions::throttle(1000),
//!     time.clone(),
//!     time.clone(),
//! )
//! .unwrap();
//!
//! assert_eq!(on_scroll.call(0), Dispatch::Invoked);
//! time.advance(Duration::from_millis(100));
//! assert_eq!(on_scroll.call(100), Dispatch::Scheduled);
//! time.advance(Duration::from_millis(100));
//! assert_eq!(on_scroll.call(200), Dispatch::Deferred);
//!
//! time.advance(Duration::from_millis(800));
//! assert_eq!(*positions.lock().unwrap(), vec![0, 200]);
//! ```

mod clock;
mod error;
mod policy;
mod rate_controller;
mod scheduler;
#[cfg(feature = "async")]
mod tokio_time;
mod virtual_time;

pub use clock::{Clock, SystemClock};
pub use error::InvalidConfiguration;
pub use policy::{RateMode, RateOptions, RatePolicy};
pub use rate_controller::{Dispatch, RateController};
pub use scheduler::{Callback, Scheduler};
#[cfg(feature = "async")]
pub use tokio_time::{TokioClock, TokioScheduler};
pub use virtual_time::{VirtualTime, VirtualTimer};
