use socialsphere_store::KeyValueStore;
use tracing::info;

use crate::error::Result;
use crate::events::{ThemePayload, EVENT_THEME_CHANGED};
use crate::state::AppState;

impl<K: KeyValueStore> AppState<K> {
    pub fn toggle_theme(&mut self) -> Result<Option<String>> {
        self.theme = self.theme.toggled();
        self.store.set_theme(self.theme)?;
        self.emit(
            EVENT_THEME_CHANGED,
            ThemePayload {
                theme: self.theme.as_str().to_string(),
            },
        );
        Ok(None)
    }

    pub fn dismiss_welcome(&mut self) -> Result<Option<String>> {
        self.store.dismiss_welcome()?;
        Ok(None)
    }

    /// Wipe the feed and start over from the seed, as on a fresh launch.
    pub fn clear_data(&mut self) -> Result<Option<String>> {
        self.store.clear_all()?;
        self.store.load()?;
        self.user = self.store.current_user()?;
        self.composer.reset();
        self.followed.clear();
        self.view = socialsphere_shared::types::View::Feed;
        info!("app data cleared");
        Ok(None)
    }
}
