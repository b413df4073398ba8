use socialsphere_shared::types::PostId;
use socialsphere_store::KeyValueStore;
use tracing::warn;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Where shared post text goes. Failures should be reported as
/// [`ClientError::ClipboardUnavailable`].
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Stand-in for platforms without clipboard access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(ClientError::ClipboardUnavailable(
            "no clipboard configured".to_string(),
        ))
    }
}

impl<K: KeyValueStore> AppState<K> {
    /// Copy `"{author}: {text}"` to the clipboard.
    pub fn share(&mut self, id: &PostId) -> Result<Option<String>> {
        let Some(post) = self.store.feed().post(id) else {
            warn!(post_id = %id, "share of missing post ignored");
            return Ok(None);
        };
        let text = format!("{}: {}", post.author, post.text);

        self.clipboard.write_text(&text)?;
        self.store
            .push_notification("Post content copied to clipboard")?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::Action;
    use crate::test_support::{memory_app, SharedClipboard};

    #[tokio::test]
    async fn share_copies_and_notifies() {
        let clipboard = SharedClipboard::default();
        let mut app = memory_app().with_clipboard(clipboard.clone());
        let id = app.store.feed().posts[1].id.clone();

        let outcome = app.dispatch(Action::SharePost(id)).await.unwrap();
        assert_eq!(outcome.message, None);
        assert_eq!(
            clipboard.0.lock().unwrap().as_deref(),
            Some("Liam: Morning coffee and code. ☕")
        );
        assert_eq!(
            app.store.feed().notifications[0].text,
            "Post content copied to clipboard"
        );
    }

    #[tokio::test]
    async fn unavailable_clipboard_reports_failure() {
        let mut app = memory_app();
        let id = app.store.feed().posts[0].id.clone();

        let outcome = app.dispatch(Action::SharePost(id)).await.unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Copy failed"));
        assert!(app.store.feed().notifications.is_empty());
    }
}
