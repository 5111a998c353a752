//! Error types for rate control.

use super::RateMode;

/// Rejected rate-control configuration.
///
/// Returned by [`RateOptions::validate`](super::RateOptions::validate) and
/// [`RateController::new`](super::RateController::new).
///
/// # Examples
///
/// ```rust
/// use cadenza::control::{InvalidConfiguration, RateOptions};
///
/// let error = RateOptions::throttle(-5).validate().unwrap_err();
/// assert_eq!(error, InvalidConfiguration::NegativeInterval { interval_ms: -5 });
/// assert_eq!(
///     error.to_string(),
///     "invalid rate configuration: interval must not be negative (got -5ms)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// The interval was below zero.
    NegativeInterval {
        /// The configured interval in milliseconds.
        interval_ms: i64,
    },
    /// Both the leading and the trailing edge were disabled, so the
    /// operation could never run.
    NoFiringEdge {
        /// The mode that was configured.
        mode: RateMode,
    },
}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeInterval { interval_ms } => write!(
                formatter,
                "invalid rate configuration: interval must not be negative (got {interval_ms}ms)"
            ),
            Self::NoFiringEdge { mode } => write!(
                formatter,
                "invalid rate configuration: {mode} with leading and trailing both disabled never fires"
            ),
        }
    }
}

impl std::error::Error for InvalidConfiguration {}
