//! User-level preferences persisted next to, but separately from, the feed
//! mirror. [`Store::clear_all`] leaves these in place.

use socialsphere_shared::constants::{THEME_KEY, USER_NAME_KEY, WELCOME_DISMISSED_KEY};
use socialsphere_shared::types::Theme;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::User;
use crate::store::Store;

impl<K: KeyValueStore> Store<K> {
    /// The persisted display name, if the user ever set one.
    pub fn display_name(&self) -> Result<Option<String>> {
        Ok(self.kv.get(USER_NAME_KEY)?.filter(|n| !n.is_empty()))
    }

    pub fn set_display_name(&mut self, name: &str) -> Result<()> {
        self.kv.set(USER_NAME_KEY, name)
    }

    /// Build the current user from the persisted name and default
    /// avatar and bio.
    pub fn current_user(&self) -> Result<User> {
        Ok(match self.display_name()? {
            Some(name) => User::named(name),
            None => User::default(),
        })
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(self
            .kv
            .get(THEME_KEY)?
            .map(|t| Theme::from_stored(&t))
            .unwrap_or_default())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.kv.set(THEME_KEY, theme.as_str())
    }

    pub fn welcome_dismissed(&self) -> Result<bool> {
        Ok(self.kv.get(WELCOME_DISMISSED_KEY)?.as_deref() == Some("1"))
    }

    pub fn dismiss_welcome(&mut self) -> Result<()> {
        self.kv.set(WELCOME_DISMISSED_KEY, "1")
    }
}
