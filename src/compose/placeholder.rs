//! The placeholder sentinel and argument slots for curried application.
//!
//! A curried chain accumulates [`Slot`]s. Each slot is either a bound value or
//! the [`Placeholder`] marker, which reserves the position for a value supplied
//! by a later application step.
//!
//! - [`Placeholder`]: the marker type
//! - [`__`]: the exported sentinel value
//! - [`Slot`]: one accumulated argument position
//! - [`slots!`](crate::slots): builds a slot list from `__` and expressions

/// Placeholder marker type for curried application.
///
/// All placeholders are equal to one another, so callers can compare any
/// value of this type against the exported [`__`] sentinel.
///
/// # Examples
///
/// ```
/// use cadenza::compose::{Placeholder, Slot, __};
///
/// assert_eq!(Placeholder, __);
///
/// let slot: Slot<i32> = __.into();
/// assert!(slot.is_placeholder());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// The placeholder sentinel.
///
/// Inside [`slots!`](crate::slots) the literal token `__` is recognised
/// directly, so the constant does not need to be imported there. It exists
/// for programmatic use, e.g. `Slot::from(__)`.
///
/// Note: This is named `__` (double underscore) because Rust's `macro_rules!`
/// cannot match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// One argument position of a curried application.
///
/// # Examples
///
/// ```
/// use cadenza::compose::Slot;
///
/// let bound = Slot::Value(5);
/// assert_eq!(bound.value(), Some(&5));
///
/// let open: Slot<i32> = Slot::Placeholder;
/// assert_eq!(open.into_value(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot<A> {
    /// A bound argument.
    Value(A),
    /// A position to be filled by a later application step.
    Placeholder,
}

impl<A> Slot<A> {
    /// Returns `true` if this slot is still waiting for a value.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns a reference to the bound value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Consumes the slot and returns the bound value, if any.
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }
}

impl<A> From<Placeholder> for Slot<A> {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

/// Builds a `Vec<Slot<_>>` from a comma-separated list.
///
/// The literal token `__` becomes [`Slot::Placeholder`]; every other
/// expression becomes [`Slot::Value`].
///
/// **Important**: `__` is matched as a literal token. Write it directly;
/// importing the constant is not required.
///
/// # Examples
///
/// ```
/// use cadenza::compose::Slot;
/// use cadenza::slots;
///
/// let arguments: Vec<Slot<i32>> = slots![__, 10, 2 + 3];
/// assert_eq!(
///     arguments,
///     vec![Slot::Placeholder, Slot::Value(10), Slot::Value(5)]
/// );
/// ```
#[macro_export]
macro_rules! slots {
    (@accumulate [$($done:expr),*]) => {
        ::std::vec![$($done),*]
    };
    (@accumulate [$($done:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::slots!(@accumulate [$($done,)* $crate::compose::Slot::Placeholder] $($($rest)*)?)
    };
    (@accumulate [$($done:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::slots!(@accumulate [$($done,)* $crate::compose::Slot::Value($value)] $($($rest)*)?)
    };
    ($($tokens:tt)*) => {
        $crate::slots!(@accumulate [] $($tokens)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_identity_comparable() {
        let first = Placeholder;
        let second = __;
        assert_eq!(first, second);
    }

    #[test]
    fn test_slots_macro_mixes_values_and_placeholders() {
        let built: Vec<Slot<i32>> = crate::slots![1, __, 3];
        assert_eq!(
            built,
            vec![Slot::Value(1), Slot::Placeholder, Slot::Value(3)]
        );
    }

    #[test]
    fn test_slots_macro_accepts_trailing_comma_and_empty_input() {
        let trailing: Vec<Slot<i32>> = crate::slots![__, 7,];
        assert_eq!(trailing, vec![Slot::Placeholder, Slot::Value(7)]);

        let empty: Vec<Slot<i32>> = crate::slots![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_slot_into_value() {
        assert_eq!(Slot::Value("bound").into_value(), Some("bound"));
        assert_eq!(Slot::<&str>::from(__).into_value(), None);
    }
}
