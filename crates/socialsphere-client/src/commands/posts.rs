use socialsphere_shared::types::PostId;
use socialsphere_store::KeyValueStore;
use tracing::info;

use super::tolerate_missing;
use crate::error::{ClientError, Result};
use crate::state::AppState;

impl<K: KeyValueStore> AppState<K> {
    pub fn like(&mut self, id: &PostId) -> Result<Option<String>> {
        if tolerate_missing(self.store.like_post(id))?.is_none() {
            return Ok(None);
        }
        let author = self
            .store
            .feed()
            .post(id)
            .map(|p| p.author.clone())
            .unwrap_or_default();
        self.store
            .push_notification(format!("{} liked {}'s post", self.user.display_name, author))?;
        Ok(None)
    }

    pub fn toggle_save(&mut self, id: &PostId) -> Result<Option<String>> {
        let Some(saved) = tolerate_missing(self.store.toggle_saved(id))? else {
            return Ok(None);
        };
        let verb = if saved { "saved" } else { "unsaved" };
        self.store.push_notification(format!("Post {verb}"))?;
        Ok(None)
    }

    /// Blank text is silently ignored.
    pub fn quick_post(&mut self, text: &str) -> Result<Option<String>> {
        self.store.add_post(&self.user, text, None)?;
        Ok(None)
    }

    /// Publish the composer draft and clear it.
    pub fn publish(&mut self) -> Result<Option<String>> {
        let image = self.composer.ready_image()?;
        let post = self
            .store
            .add_post(&self.user, self.composer.text(), image.as_deref())?
            .ok_or(ClientError::EmptyPost)?;

        self.composer.reset();
        self.store.push_notification("Post published")?;

        info!(post_id = %post.id, has_image = post.image_ref.is_some(), "post published");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use socialsphere_shared::types::View;

    use crate::commands::Action;
    use crate::test_support::{empty_app, memory_app};

    #[tokio::test]
    async fn like_notifies_with_names() {
        let mut app = memory_app();
        app.user.display_name = "Ada".into();
        let id = app.store.feed().posts[1].id.clone();

        app.dispatch(Action::LikePost(id.clone())).await.unwrap();
        app.dispatch(Action::LikePost(id.clone())).await.unwrap();

        assert_eq!(app.store.feed().post(&id).unwrap().like_count, 6);
        assert_eq!(app.store.feed().notifications[0].text, "Ada liked Liam's post");
        assert_eq!(app.badge(), Some(2));
    }

    #[tokio::test]
    async fn save_toggle_round_trips_and_notifies() {
        let mut app = memory_app();
        let id = app.store.feed().posts[0].id.clone();

        app.dispatch(Action::ToggleSave(id.clone())).await.unwrap();
        let outcome = app.dispatch(Action::Navigate(View::Saved)).await.unwrap();
        assert_eq!(outcome.view.post_cards().len(), 1);

        app.dispatch(Action::ToggleSave(id.clone())).await.unwrap();
        assert!(!app.store.feed().post(&id).unwrap().saved);

        let texts: Vec<_> = app
            .store
            .feed()
            .notifications
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, ["Post unsaved", "Post saved"]);
    }

    #[tokio::test]
    async fn quick_post_shows_on_feed_and_explore() {
        let mut app = empty_app();

        app.dispatch(Action::QuickPost { text: "  ".into() }).await.unwrap();
        assert!(app.store.feed().posts.is_empty());

        let outcome = app
            .dispatch(Action::QuickPost { text: "hello #world".into() })
            .await
            .unwrap();
        assert_eq!(outcome.view.post_cards()[0].text, "hello #world");
        assert!(app.store.feed().notifications.is_empty());

        let explore = app.dispatch(Action::Navigate(View::Explore)).await.unwrap();
        assert_eq!(explore.view.trending(), [("#world", 1)]);
    }

    #[tokio::test]
    async fn publish_requires_content() {
        let mut app = empty_app();

        let outcome = app.dispatch(Action::Publish).await.unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Add text or image"));
        assert!(app.store.feed().posts.is_empty());
    }

    #[tokio::test]
    async fn publish_uses_draft_and_resets_it() {
        let mut app = empty_app();
        app.user.display_name = "Ada".into();
        app.composer.set_text("Shipping it");

        let outcome = app.dispatch(Action::Publish).await.unwrap();
        assert_eq!(outcome.message, None);
        assert_eq!(app.composer.text(), "");

        let post = &app.store.feed().posts[0];
        assert_eq!(post.author, "Ada");
        assert_eq!(post.text, "Shipping it");
        assert_eq!(app.store.feed().notifications[0].text, "Post published");
    }
}
