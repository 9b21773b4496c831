//! Configuration for the lifecycle engine.

use crate::lifetime::{EnvLifetime, FixedLifetime, LifetimeSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Lifecycle engine configuration.
///
/// # Examples
///
/// ```
/// use gavel_lifecycle::config::LifecycleConfig;
/// use std::time::Duration;
///
/// // Consult the AUCTION_DURATION environment variable on every resolution
/// let config = LifecycleConfig::default();
///
/// // Pin the lifetime from a configuration file
/// let config = LifecycleConfig {
///     lifetime: Some(Duration::from_secs(300)),
/// };
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifecycleConfig {
    /// Fixed auction lifetime, e.g. "5m" or "300s".
    ///
    /// When omitted, the `AUCTION_DURATION` environment variable is consulted
    /// on every resolution instead. Sub-second precision is not supported;
    /// the value is truncated to whole seconds.
    #[serde(default, with = "humantime_serde::option")]
    pub lifetime: Option<Duration>,
}

impl LifecycleConfig {
    /// Build the lifetime source this configuration describes.
    pub fn lifetime_source(&self) -> Arc<dyn LifetimeSource> {
        match self.lifetime {
            Some(duration) => Arc::new(FixedLifetime::from(duration)),
            None => Arc::new(EnvLifetime::default()),
        }
    }
}
