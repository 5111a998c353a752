//! Placeholder-aware currying.
//!
//! [`curry`] turns a fixed-arity operation into a [`Curried`] chain that
//! accumulates argument [`Slot`]s across application steps. A step may leave
//! positions open with the placeholder `__`; later steps fill open positions
//! left to right before appending anything new.
//!
//! # Design Decisions
//!
//! Each partial application is an immutable value: the collected slots live
//! in an `Rc<[Slot<A>]>` and every [`Curried::apply`] builds a fresh sequence.
//! This allows:
//!
//! - The same partial application to be completed along several branches
//! - Cheap `Clone` of any intermediate step
//! - No hidden shared state between chains
//!
//! Arity comes from the function type (via [`UniformOperation`]) or is
//! supplied explicitly ([`curry_variadic`]). It is never inspected at runtime.
//!
//! # Examples
//!
//! ```rust
//! use cadenza::compose::{CurryError, curry};
//! use cadenza::slots;
//!
//! fn describe(name: String, role: String, team: String) -> String {
//!     format!("{name} ({role}, {team})")
//! }
//!
//! let curried = curry(describe);
//!
//! // Leave the name open, bind role and team now.
//! let staff = curried.apply(slots![__, "engineer".to_string(), "core".to_string()]);
//! let described = staff.apply(slots!["Robin".to_string()])?.complete();
//!
//! assert_eq!(described.as_deref(), Some("Robin (engineer, core)"));
//! # Ok::<(), CurryError>(())
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::{CurryError, Slot};

/// Number of incoming slots held inline before a step spills to the heap.
const INLINE_INCOMING: usize = 4;

/// An operation whose parameters all share the argument type `A`.
///
/// Implemented for every `Fn` taking 1 to 6 parameters of type `A`. The
/// `Marker` parameter (`[A; N]`) keeps the per-arity implementations apart
/// and lets the compiler infer the arity from the function type.
pub trait UniformOperation<Marker, A, R> {
    /// Number of formal parameters.
    const ARITY: usize;

    /// Calls the operation with the first [`Self::ARITY`] values.
    ///
    /// Values past the arity are discarded.
    fn invoke(&self, arguments: Vec<A>) -> R;
}

macro_rules! same_type {
    ($_position:ident, $argument:ty) => {
        $argument
    };
}

macro_rules! impl_uniform_operation {
    ($arity:literal; $($position:ident),+) => {
        impl<F, A, R> UniformOperation<[A; $arity], A, R> for F
        where
            F: Fn($(same_type!($position, A)),+) -> R,
        {
            const ARITY: usize = $arity;

            fn invoke(&self, arguments: Vec<A>) -> R {
                let mut arguments = arguments.into_iter();
                $(
                    let Some($position) = arguments.next() else {
                        unreachable!("curried operation completed with fewer than {} values", $arity);
                    };
                )+
                self($($position),+)
            }
        }
    };
}

impl_uniform_operation!(1; first);
impl_uniform_operation!(2; first, second);
impl_uniform_operation!(3; first, second, third);
impl_uniform_operation!(4; first, second, third, fourth);
impl_uniform_operation!(5; first, second, third, fourth, fifth);
impl_uniform_operation!(6; first, second, third, fourth, fifth, sixth);

/// A partially applied operation.
///
/// Holds the wrapped operation, its arity and the slots collected so far.
/// `Clone` shares the operation and slots; every clone is an independent
/// branch because [`apply`](Self::apply) never mutates `self`.
pub struct Curried<A, R> {
    operation: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
    collected: Rc<[Slot<A>]>,
}

/// Converts a fixed-arity operation into curried form.
///
/// The arity is taken from the operation's type. All parameters must share
/// one argument type.
///
/// # Examples
///
/// ```rust
/// use cadenza::compose::{CurryError, curry};
/// use cadenza::slots;
///
/// fn sum3(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let total = curry(sum3)
///     .apply(slots![5])
///     .apply(slots![10])?
///     .apply(slots![15])?
///     .complete();
///
/// assert_eq!(total, Some(30));
/// # Ok::<(), CurryError>(())
/// ```
pub fn curry<F, Marker, A, R>(operation: F) -> Curried<A, R>
where
    F: UniformOperation<Marker, A, R> + 'static,
    Marker: 'static,
    A: 'static,
    R: 'static,
{
    Curried {
        operation: Rc::new(move |arguments: Vec<A>| {
            UniformOperation::<Marker, A, R>::invoke(&operation, arguments)
        }),
        arity: <F as UniformOperation<Marker, A, R>>::ARITY,
        collected: Rc::from(Vec::new()),
    }
}

/// Converts an operation over a value list into curried form with an
/// explicit arity.
///
/// The operation receives every resolved value, including any supplied past
/// `arity`.
///
/// # Errors
///
/// Returns [`CurryError::ArityMismatch`] when `arity` is `0`.
///
/// # Examples
///
/// ```rust
/// use cadenza::compose::{CurryError, curry_variadic};
/// use cadenza::slots;
///
/// let joined = curry_variadic(2, |words: Vec<&str>| words.join(" "))?;
///
/// let result = joined.apply(slots!["hello", "curried", "world"]).complete();
/// assert_eq!(result.as_deref(), Some("hello curried world"));
/// # Ok::<(), CurryError>(())
/// ```
pub fn curry_variadic<F, A, R>(arity: usize, operation: F) -> Result<Curried<A, R>, CurryError>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    if arity == 0 {
        return Err(CurryError::ArityMismatch { arity });
    }

    Ok(Curried {
        operation: Rc::new(operation),
        arity,
        collected: Rc::from(Vec::new()),
    })
}

impl<A, R> Curried<A, R> {
    /// Returns the number of values the operation needs.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the slots collected so far, in positional order.
    #[inline]
    pub fn collected(&self) -> &[Slot<A>] {
        &self.collected
    }

    /// Returns how many of the first `arity` positions are still open,
    /// counting both placeholders and positions not yet supplied.
    pub fn unresolved(&self) -> usize {
        let bound = self
            .collected
            .iter()
            .take(self.arity)
            .filter(|slot| !slot.is_placeholder())
            .count();
        self.arity - bound
    }

    /// Returns the number of bound values collected so far.
    pub fn supplied(&self) -> usize {
        self.collected
            .iter()
            .filter(|slot| !slot.is_placeholder())
            .count()
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Applies one step of arguments.
    ///
    /// Open positions in the collected sequence take incoming values left to
    /// right; incoming placeholders never fill a position and are appended
    /// along with any values that were not needed. The operation runs once
    /// the first `arity` positions all hold values.
    ///
    /// `self` is left untouched, so one partial application can be completed
    /// in several different ways.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadenza::compose::curry;
    /// use cadenza::slots;
    ///
    /// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
    ///     minuend - subtrahend
    /// }
    ///
    /// let from_ten = curry(subtract).apply(slots![10]);
    /// let from_ten = from_ten.partial().unwrap();
    ///
    /// assert_eq!(from_ten.apply(slots![3]).complete(), Some(7));
    /// assert_eq!(from_ten.apply(slots![4]).complete(), Some(6));
    ///
    /// let minus_three = curry(subtract).apply(slots![__, 3]).partial().unwrap();
    /// assert_eq!(minus_three.apply(slots![10]).complete(), Some(7));
    /// ```
    pub fn apply<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = Slot<A>>,
    {
        let merged = self.merge(arguments);

        if Self::is_saturated(&merged, self.arity) {
            let values = merged.into_iter().filter_map(Slot::into_value).collect();
            Application::Complete((self.operation)(values))
        } else {
            Application::Partial(Self {
                operation: Rc::clone(&self.operation),
                arity: self.arity,
                collected: Rc::from(merged),
            })
        }
    }

    fn merge<I>(&self, arguments: I) -> Vec<Slot<A>>
    where
        I: IntoIterator<Item = Slot<A>>,
    {
        let mut incoming: SmallVec<[Option<Slot<A>>; INLINE_INCOMING]> =
            arguments.into_iter().map(Some).collect();
        let mut merged = Vec::with_capacity(self.collected.len() + incoming.len());
        let mut cursor = 0;

        for slot in self.collected.iter() {
            match slot {
                Slot::Value(value) => merged.push(Slot::Value(value.clone())),
                Slot::Placeholder => {
                    while cursor < incoming.len()
                        && !matches!(incoming[cursor], Some(Slot::Value(_)))
                    {
                        cursor += 1;
                    }
                    match incoming.get_mut(cursor).and_then(Option::take) {
                        Some(value) => {
                            merged.push(value);
                            cursor += 1;
                        }
                        None => merged.push(Slot::Placeholder),
                    }
                }
            }
        }

        merged.extend(incoming.into_iter().flatten());
        merged
    }

    fn is_saturated(merged: &[Slot<A>], arity: usize) -> bool {
        merged.len() >= arity && !merged[..arity].iter().any(Slot::is_placeholder)
    }
}

impl<A, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            operation: Rc::clone(&self.operation),
            arity: self.arity,
            collected: Rc::clone(&self.collected),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}

/// The outcome of one application step.
pub enum Application<A, R> {
    /// The first `arity` positions were filled and the operation ran.
    Complete(R),
    /// More arguments are needed.
    Partial(Curried<A, R>),
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the operation has run.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the operation's result, if it has run.
    #[inline]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partial application, if more arguments are needed.
    #[inline]
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Applies the next step to a partial application.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Saturated`] if the operation has already run.
    pub fn apply<I>(self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = Slot<A>>,
    {
        match self {
            Self::Complete(_) => Err(CurryError::Saturated),
            Self::Partial(curried) => Ok(curried.apply(arguments)),
        }
    }
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Application<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots;

    fn sum3(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    fn ordered(first: i32, second: i32, third: i32) -> (i32, i32, i32) {
        (first, second, third)
    }

    #[test]
    fn test_arity_is_derived_from_function_type() {
        assert_eq!(curry(sum3).arity(), 3);
        assert_eq!(curry(|value: u8| value).arity(), 1);
    }

    #[test]
    fn test_placeholder_fills_before_append() {
        let step = curry(ordered).apply(slots![__, 2]);
        let step = step.apply(slots![1, 3]).unwrap();
        assert_eq!(step.complete(), Some((1, 2, 3)));
    }

    #[test]
    fn test_unresolved_counts_placeholders_and_missing_positions() {
        let partial = curry(sum3).apply(slots![__, 10]).partial().unwrap();
        assert_eq!(partial.unresolved(), 2);
        assert_eq!(partial.supplied(), 1);
    }

    #[test]
    fn test_incoming_placeholder_is_appended_not_consumed() {
        let partial = curry(ordered).apply(slots![__]).partial().unwrap();
        let partial = partial.apply(slots![__, 7]).partial().unwrap();
        assert_eq!(partial.collected(), &[Slot::Value(7), Slot::Placeholder]);
    }

    #[test]
    fn test_complete_application_rejects_further_steps() {
        let complete = curry(sum3).apply(slots![1, 2, 3]);
        assert!(complete.is_complete());
        assert_eq!(complete.apply(slots![4]).err(), Some(CurryError::Saturated));
    }
}
