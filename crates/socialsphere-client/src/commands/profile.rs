use socialsphere_shared::constants::DEFAULT_BIO;
use socialsphere_store::KeyValueStore;
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

impl<K: KeyValueStore> AppState<K> {
    /// Rename the user. Blank names are ignored. Existing posts keep the
    /// name they were written under.
    pub fn edit_display_name(&mut self, name: &str) -> Result<Option<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        self.store.set_display_name(name)?;
        self.user.display_name = name.to_string();
        info!(display_name = %name, "display name changed");
        Ok(None)
    }

    /// Settings form submit. A blank bio falls back to the default.
    pub fn save_settings(&mut self, display_name: &str, bio: &str) -> Result<Option<String>> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Ok(None);
        }
        let bio = bio.trim();

        self.store.set_display_name(display_name)?;
        self.user.display_name = display_name.to_string();
        self.user.bio = if bio.is_empty() {
            DEFAULT_BIO.to_string()
        } else {
            bio.to_string()
        };
        Ok(Some("Saved".to_string()))
    }

    pub fn follow(&mut self, name: &str) -> Result<Option<String>> {
        if self.followed.insert(name.to_string()) {
            self.store.push_notification(format!("You followed {name}"))?;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use socialsphere_shared::constants::DEFAULT_BIO;
    use socialsphere_shared::types::View;

    use crate::commands::Action;
    use crate::render::Node;
    use crate::test_support::memory_app;

    #[tokio::test]
    async fn renamed_user_sees_own_posts_on_profile() {
        let mut app = memory_app();
        app.dispatch(Action::EditDisplayName { name: "Ada".into() })
            .await
            .unwrap();
        app.dispatch(Action::QuickPost { text: "first".into() })
            .await
            .unwrap();
        app.dispatch(Action::QuickPost { text: "second".into() })
            .await
            .unwrap();

        let outcome = app.dispatch(Action::Navigate(View::Profile)).await.unwrap();
        let texts: Vec<_> = outcome.view.post_cards().iter().map(|c| c.text.clone()).collect();
        assert_eq!(texts, ["second", "first"]);
        assert_eq!(app.store.display_name().unwrap().as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn blank_name_is_ignored() {
        let mut app = memory_app();
        app.dispatch(Action::EditDisplayName { name: "  ".into() })
            .await
            .unwrap();
        assert_eq!(app.user.display_name, "You");
    }

    #[tokio::test]
    async fn settings_save_updates_user() {
        let mut app = memory_app();

        let outcome = app
            .dispatch(Action::SaveSettings {
                display_name: "Ada".into(),
                bio: "".into(),
            })
            .await
            .unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Saved"));
        assert_eq!(app.user.bio, DEFAULT_BIO);

        app.dispatch(Action::SaveSettings {
            display_name: "Ada".into(),
            bio: "Compilers".into(),
        })
        .await
        .unwrap();
        let outcome = app.dispatch(Action::Navigate(View::Settings)).await.unwrap();
        let Node::Section { children, .. } = &outcome.view.nodes[0] else {
            panic!("expected settings section");
        };
        assert_eq!(
            children[0],
            Node::SettingsForm {
                display_name: "Ada".into(),
                bio: "Compilers".into(),
            }
        );
    }

    #[tokio::test]
    async fn follow_once_per_account() {
        let mut app = memory_app();
        app.dispatch(Action::Follow("Zara".into())).await.unwrap();
        app.dispatch(Action::Follow("Zara".into())).await.unwrap();

        assert_eq!(app.store.feed().notifications.len(), 1);
        assert_eq!(app.store.feed().notifications[0].text, "You followed Zara");
        let followed = app.suggestions().into_iter().any(|n| {
            matches!(n, Node::Suggestion { name, following: true, .. } if name == "Zara")
        });
        assert!(followed);
    }
}
