//! Error types for curried application.

/// Represents errors that can occur when building or applying a curried chain.
///
/// # Examples
///
/// ```rust
/// use cadenza::compose::{CurryError, curry_variadic};
///
/// let result = curry_variadic(0, |values: Vec<i32>| values.len());
/// assert_eq!(result.err(), Some(CurryError::ArityMismatch { arity: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurryError {
    /// The operation's arity could not be determined.
    ///
    /// A variadic operation declared with arity `0` has no completion point.
    ArityMismatch {
        /// The arity that was supplied.
        arity: usize,
    },
    /// The chain already produced its result and cannot take more arguments.
    Saturated,
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { arity } => write!(
                formatter,
                "curry: arity {arity} cannot be curried; the operation must declare at least one parameter"
            ),
            Self::Saturated => write!(
                formatter,
                "curry: application already complete; no further arguments accepted"
            ),
        }
    }
}

impl std::error::Error for CurryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_display() {
        let error = CurryError::ArityMismatch { arity: 0 };
        assert_eq!(
            format!("{error}"),
            "curry: arity 0 cannot be curried; the operation must declare at least one parameter"
        );
    }

    #[test]
    fn test_saturated_display() {
        assert_eq!(
            CurryError::Saturated.to_string(),
            "curry: application already complete; no further arguments accepted"
        );
    }
}
