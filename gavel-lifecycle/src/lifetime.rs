//! Resolution of the configured auction lifetime.
//!
//! The lifetime is a single process-wide policy, not a per-auction value. It
//! is re-resolved every time a component needs it, so a configuration change
//! mid-run affects subsequent resolutions (newly armed timers, the sweeper's
//! next cutoff) without touching timers that are already sleeping.

use std::time::Duration;

/// Fallback applied when the configured lifetime is absent or unusable.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(60);

/// Environment variable consulted by [`EnvLifetime`].
pub const LIFETIME_VAR: &str = "AUCTION_DURATION";

/// A source of the raw, unvalidated auction lifetime.
///
/// Injected rather than read from a global so tests can pin the value
/// deterministically without environment mutation races.
pub trait LifetimeSource: Send + Sync + 'static {
    /// The raw configured value, if any.
    fn raw(&self) -> Option<String>;
}

/// Reads the lifetime from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvLifetime {
    var: String,
}

impl EnvLifetime {
    /// A source backed by the named environment variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLifetime {
    fn default() -> Self {
        Self::new(LIFETIME_VAR)
    }
}

impl LifetimeSource for EnvLifetime {
    fn raw(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// A fixed lifetime, used when a configuration file pins the value and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLifetime {
    secs: u64,
}

impl FixedLifetime {
    /// A source that always yields the given number of seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self { secs }
    }
}

impl From<Duration> for FixedLifetime {
    fn from(value: Duration) -> Self {
        Self::from_secs(value.as_secs())
    }
}

impl LifetimeSource for FixedLifetime {
    fn raw(&self) -> Option<String> {
        Some(self.secs.to_string())
    }
}

/// Resolve the auction lifetime, falling back to [`DEFAULT_LIFETIME`].
///
/// Only a positive integer number of seconds is accepted. An absent or
/// invalid value is a recoverable configuration problem: it is logged at
/// `warn` and the default applies. This function never fails and never
/// returns a zero duration.
pub fn resolve_lifetime(source: &dyn LifetimeSource) -> Duration {
    let Some(raw) = source.raw() else {
        tracing::warn!(
            default_secs = DEFAULT_LIFETIME.as_secs(),
            "auction lifetime is not configured, using default"
        );
        return DEFAULT_LIFETIME;
    };

    match raw.trim().parse::<i64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs as u64),
        _ => {
            tracing::warn!(
                value = %raw,
                default_secs = DEFAULT_LIFETIME.as_secs(),
                "invalid auction lifetime, using default"
            );
            DEFAULT_LIFETIME
        }
    }
}
