//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client runs with zero configuration.

use std::path::PathBuf;
use std::time::Duration;

use socialsphere_shared::constants::{NOTIFICATION_CAP, NOTIFICATION_DROPDOWN_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Explicit database file.
    /// Env: `SOCIALSPHERE_DB_PATH`
    /// Default: the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Cosmetic pause before a view is rendered, during which callers can
    /// show [`skeleton`](crate::render::skeleton) placeholders.
    /// Env: `SKELETON_DELAY_MS`
    /// Default: `0`
    pub skeleton_delay: Duration,

    /// Notifications retained, newest first.
    /// Env: `NOTIFICATION_CAP`
    /// Default: `50`
    pub notification_cap: usize,

    /// Notifications shown in the header dropdown.
    /// Env: `NOTIFICATION_DROPDOWN_LIMIT`
    /// Default: `6`
    pub dropdown_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            skeleton_delay: Duration::ZERO,
            notification_cap: NOTIFICATION_CAP,
            dropdown_limit: NOTIFICATION_DROPDOWN_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("SOCIALSPHERE_DB_PATH").filter(|p| !p.is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(val) = lookup("SKELETON_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.skeleton_delay = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %val, "Invalid SKELETON_DELAY_MS, using default"),
            }
        }

        if let Some(val) = lookup("NOTIFICATION_CAP") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.notification_cap = n,
                _ => tracing::warn!(value = %val, "Invalid NOTIFICATION_CAP, using default"),
            }
        }

        if let Some(val) = lookup("NOTIFICATION_DROPDOWN_LIMIT") {
            match val.parse::<usize>() {
                Ok(n) => config.dropdown_limit = n,
                Err(_) => tracing::warn!(
                    value = %val,
                    "Invalid NOTIFICATION_DROPDOWN_LIMIT, using default"
                ),
            }
        }

        config
    }
}
