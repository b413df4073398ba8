use socialsphere_shared::types::PostId;
use socialsphere_store::KeyValueStore;

use super::tolerate_missing;
use crate::error::Result;
use crate::state::AppState;

impl<K: KeyValueStore> AppState<K> {
    pub fn comment(&mut self, post_id: &PostId, text: &str) -> Result<Option<String>> {
        let added = tolerate_missing(self.store.add_comment(post_id, &self.user, text))?;
        if matches!(added, Some(Some(_))) {
            self.store
                .push_notification(format!("{} commented", self.user.display_name))?;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use socialsphere_shared::types::PostId;

    use crate::commands::Action;
    use crate::test_support::memory_app;

    #[tokio::test]
    async fn comment_appends_and_notifies() {
        let mut app = memory_app();
        let id = app.store.feed().posts[1].id.clone();

        app.dispatch(Action::Comment {
            post_id: id.clone(),
            text: "Great!".into(),
        })
        .await
        .unwrap();

        let post = app.store.feed().post(&id).unwrap();
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].author, "You");
        assert_eq!(app.store.feed().notifications[0].text, "You commented");
        assert_eq!(app.stats().comments, 2);
    }

    #[tokio::test]
    async fn blank_or_orphan_comments_do_nothing() {
        let mut app = memory_app();
        let id = app.store.feed().posts[1].id.clone();

        for (post_id, text) in [(id, " "), (PostId::from("ghost"), "hi")] {
            app.dispatch(Action::Comment {
                post_id,
                text: text.into(),
            })
            .await
            .unwrap();
        }

        assert_eq!(app.stats().comments, 1);
        assert!(app.store.feed().notifications.is_empty());
    }
}
