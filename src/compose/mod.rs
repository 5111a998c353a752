//! Placeholder-aware currying.
//!
//! This module turns a fixed-arity operation into a chain of partial
//! applications. Any step may leave argument positions open with the
//! placeholder `__`, which lets callers supply arguments out of order.
//!
//! # Overview
//!
//! - [`curry`]: curry an `Fn` of 1 to 6 same-typed parameters; arity comes
//!   from the function type
//! - [`curry_variadic`]: curry an operation over a value list with an
//!   explicit arity
//! - [`Curried`]: an immutable, reusable partial application
//! - [`Application`]: the result of one step, complete or partial
//! - [`slots!`]: builds argument lists, with `__` as a literal token
//!
//! # Examples
//!
//! ## Currying one argument at a time
//!
//! ```
//! use cadenza::compose::curry;
//! use cadenza::slots;
//!
//! fn sum3(first: i32, second: i32, third: i32) -> i32 { first + second + third }
//!
//! let step = curry(sum3).apply(slots![5]).partial().unwrap();
//! let step = step.apply(slots![10]).partial().unwrap();
//! assert_eq!(step.apply(slots![15]).complete(), Some(30));
//! ```
//!
//! ## Out-of-order arguments
//!
//! ```
//! use cadenza::compose::curry;
//! use cadenza::slots;
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! let halve = curry(divide).apply(slots![__, 2.0]).partial().unwrap();
//! assert_eq!(halve.apply(slots![10.0]).complete(), Some(5.0));
//! ```
//!
//! # Resolution Rule
//!
//! Given the collected slots and a new step's arguments:
//!
//! ```text
//! collected: [_, b, _]      step: [x, _, y, z]
//! merged:    [x, b, y, _, z]
//! ```
//!
//! The Nth open position takes the Nth incoming value; incoming placeholders
//! and unused values are appended in their original order. The operation
//! runs once the first `arity` positions all hold values.
//!
//! # Laws
//!
//! - **Equivalence**: `curry(f)` applied to `a`, `b`, `c` in any split equals `f(a, b, c)`
//! - **Reuse**: applying a partial application never changes it

mod curry;
mod error;
mod placeholder;

pub use curry::{Application, Curried, UniformOperation, curry, curry_variadic};
pub use error::CurryError;
pub use placeholder::{__, Placeholder, Slot};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::slots;
