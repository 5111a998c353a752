//! Rate-control configuration.
//!
//! [`RateOptions`] is the raw, user-facing form (deserializable with the
//! `serde` feature). [`RateOptions::validate`] turns it into a
//! [`RatePolicy`] with every default resolved.

use std::fmt;
use std::time::Duration;

use super::InvalidConfiguration;

/// How a controller spaces invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RateMode {
    /// Fire only after a quiet period with no further calls.
    Debounce,
    /// Fire at most once per interval regardless of call frequency.
    Throttle,
}

impl RateMode {
    /// Whether the leading edge fires when the options leave it unset.
    ///
    /// Debounce waits for quiet by default; throttle fires the first call.
    #[inline]
    pub const fn default_leading(self) -> bool {
        match self {
            Self::Debounce => false,
            Self::Throttle => true,
        }
    }
}

impl fmt::Display for RateMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debounce => formatter.write_str("debounce"),
            Self::Throttle => formatter.write_str("throttle"),
        }
    }
}

/// Unvalidated controller options.
///
/// # Examples
///
/// ```rust
/// use cadenza::control::{RateMode, RateOptions};
/// use std::time::Duration;
///
/// let policy = RateOptions::debounce(250).leading(true).validate().unwrap();
///
/// assert_eq!(policy.mode(), RateMode::Debounce);
/// assert_eq!(policy.interval(), Duration::from_millis(250));
/// assert!(policy.leading());
/// assert!(policy.trailing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateOptions {
    /// Debounce or throttle.
    pub mode: RateMode,
    /// Interval in milliseconds. Zero means every call fires immediately.
    pub interval_ms: i64,
    /// Fire on the first call of a burst or window. `None` uses the mode default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub leading: Option<bool>,
    /// Fire after the burst or window with the latest arguments. `None` means `true`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trailing: Option<bool>,
}

impl RateOptions {
    /// Debounce options with mode defaults.
    #[inline]
    pub const fn debounce(interval_ms: i64) -> Self {
        Self::new(RateMode::Debounce, interval_ms)
    }

    /// Throttle options with mode defaults.
    #[inline]
    pub const fn throttle(interval_ms: i64) -> Self {
        Self::new(RateMode::Throttle, interval_ms)
    }

    /// Options for `mode` with both edges left at their defaults.
    #[inline]
    pub const fn new(mode: RateMode, interval_ms: i64) -> Self {
        Self {
            mode,
            interval_ms,
            leading: None,
            trailing: None,
        }
    }

    /// Sets the leading edge.
    #[must_use]
    #[inline]
    pub const fn leading(mut self, leading: bool) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Sets the trailing edge.
    #[must_use]
    #[inline]
    pub const fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = Some(trailing);
        self
    }

    /// Resolves defaults and checks the options.
    ///
    /// # Errors
    ///
    /// - [`InvalidConfiguration::NegativeInterval`] if `interval_ms < 0`
    /// - [`InvalidConfiguration::NoFiringEdge`] if both edges end up disabled
    pub fn validate(self) -> Result<RatePolicy, InvalidConfiguration> {
        let interval_ms = u64::try_from(self.interval_ms).map_err(|_| {
            InvalidConfiguration::NegativeInterval {
                interval_ms: self.interval_ms,
            }
        })?;

        let leading = self.leading.unwrap_or(self.mode.default_leading());
        let trailing = self.trailing.unwrap_or(true);

        if !leading && !trailing {
            return Err(InvalidConfiguration::NoFiringEdge { mode: self.mode });
        }

        Ok(RatePolicy {
            mode: self.mode,
            interval: Duration::from_millis(interval_ms),
            leading,
            trailing,
        })
    }
}

/// Validated controller configuration.
///
/// Only produced by [`RateOptions::validate`], so at least one edge is
/// always enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatePolicy {
    mode: RateMode,
    interval: Duration,
    leading: bool,
    trailing: bool,
}

impl RatePolicy {
    /// The configured mode.
    #[inline]
    pub const fn mode(&self) -> RateMode {
        self.mode
    }

    /// The quiet period (debounce) or window length (throttle).
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the leading edge fires.
    #[inline]
    pub const fn leading(&self) -> bool {
        self.leading
    }

    /// Whether the trailing edge fires.
    #[inline]
    pub const fn trailing(&self) -> bool {
        self.trailing
    }

    /// `true` when the interval is zero and every call fires immediately.
    #[inline]
    pub const fn is_passthrough(&self) -> bool {
        self.interval.is_zero()
    }
}
