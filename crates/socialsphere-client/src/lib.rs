//! # socialsphere-client
//!
//! Application layer of SocialSphere: owned state, the pure view renderer
//! and action dispatch on top of [`socialsphere_store`].

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;

use socialsphere_store::{Database, Store, StoreOptions};
use tracing_subscriber::{fmt, EnvFilter};

pub use commands::{Action, Outcome};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use state::AppState;

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("socialsphere_client=debug,socialsphere_store=info,warn")
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    // Tests and embedders may have installed a subscriber already.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

/// Open the database named by `config` (or the default one) and load state.
pub fn open(config: ClientConfig) -> Result<AppState<Database>> {
    let db = match &config.db_path {
        Some(path) => Database::open_at(path)?,
        None => Database::new()?,
    };
    let store = Store::open(
        db,
        StoreOptions {
            notification_cap: config.notification_cap,
        },
    )?;
    AppState::new(store, config)
}

/// Initialise logging, read configuration from the environment and open
/// the app.
pub fn launch() -> Result<AppState<Database>> {
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Starting SocialSphere client");

    open(config)
}
