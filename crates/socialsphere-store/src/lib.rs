//! # socialsphere-store
//!
//! Local state and persistence for SocialSphere.
//!
//! The [`Store`] owns the in-memory feed (posts and notifications) together
//! with a string-keyed [`KeyValueStore`] that mirrors it. Persistence goes
//! through a SQLite-backed [`Database`] in production and a [`MemoryStore`]
//! in tests. Corrupt mirrors are never fatal: they are discarded and the
//! fixed seed data takes their place.

pub mod comments;
pub mod database;
pub mod kv;
pub mod migrations;
pub mod models;
pub mod notifications;
pub mod posts;
pub mod preferences;
pub mod seed;
pub mod store;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
pub use models::*;
pub use store::{SaveHook, Store, StoreOptions};
