//! # cadenza
//!
//! Function-wrapping combinators for Rust: rate control and
//! placeholder-aware currying.
//!
//! ## Overview
//!
//! - **Rate Control**: a single controller for debounce and throttle, with
//!   configurable leading and trailing edges
//! - **Currying**: fixed-arity operations applied one step at a time, with a
//!   placeholder for out-of-order arguments
//!
//! The two halves are independent. Rate control depends only on an injected
//! [`Clock`](control::Clock) and [`Scheduler`](control::Scheduler).
//!
//! ## Feature Flags
//!
//! - `compose`: Placeholder-aware currying
//! - `control`: Rate controller, clocks and the virtual-time scheduler
//! - `async`: Tokio clock and scheduler
//! - `serde`: Serialize and deserialize controller options
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use cadenza::prelude::*;
//! use cadenza::slots;
//! use std::time::Duration;
//!
//! fn area(width: u32, height: u32) -> u32 { width * height }
//!
//! let by_height = curry(area).apply(slots![__, 3]).partial().unwrap();
//! assert_eq!(by_height.apply(slots![4]).complete(), Some(12));
//!
//! let time = VirtualTime::new();
//! let resize = RateController::new(|_: (u32, u32)| {}, RateOptions::debounce(100), time.clone(), time.clone())
//!     .unwrap();
//! assert_eq!(resize.call((640, 480)), Dispatch::Scheduled);
//! time.advance(Duration::from_millis(100));
//! assert!(!resize.is_pending());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cadenza::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
