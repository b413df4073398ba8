use std::sync::{Arc, Mutex};

use socialsphere_store::{MemoryStore, Store, StoreOptions};

use crate::commands::share::Clipboard;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Seeded app over an in-memory store.
pub fn memory_app() -> AppState<MemoryStore> {
    let store = Store::open(MemoryStore::new(), StoreOptions::default()).unwrap();
    AppState::new(store, ClientConfig::default()).unwrap()
}

/// Same as [`memory_app`] with no posts at all.
pub fn empty_app() -> AppState<MemoryStore> {
    let mut app = memory_app();
    app.store.clear_all().unwrap();
    app
}

/// Clipboard whose contents the test can inspect.
#[derive(Clone, Default)]
pub struct SharedClipboard(pub Arc<Mutex<Option<String>>>);

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut slot = self
            .0
            .lock()
            .map_err(|e| ClientError::ClipboardUnavailable(e.to_string()))?;
        *slot = Some(text.to_string());
        Ok(())
    }
}
