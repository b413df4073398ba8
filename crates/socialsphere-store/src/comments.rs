use socialsphere_shared::clock;
use socialsphere_shared::types::{CommentId, PostId};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::models::{Comment, User};
use crate::store::Store;

impl<K: KeyValueStore> Store<K> {
    /// Append a comment to `post_id`. Blank text returns `Ok(None)` and
    /// leaves the store untouched; an unknown post is an error.
    pub fn add_comment(
        &mut self,
        post_id: &PostId,
        author: &User,
        text: &str,
    ) -> Result<Option<Comment>> {
        let text = text.trim();
        let mut next = self.feed.clone();
        let post = next
            .post_mut(post_id)
            .ok_or_else(|| StoreError::PostNotFound(post_id.clone()))?;
        if text.is_empty() {
            return Ok(None);
        }

        let comment = Comment {
            id: CommentId::new(),
            author: author.display_name.clone(),
            text: text.to_string(),
            created_at: clock::now(),
        };
        post.comments.push(comment.clone());
        self.commit(next)?;

        debug!(post_id = %post_id, comment_id = %comment.id, "comment added");
        Ok(Some(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::store::StoreOptions;

    #[test]
    fn comments_append_in_order() {
        let mut store = Store::open(MemoryStore::new(), StoreOptions::default()).unwrap();
        let user = User::named("Ada");
        let post_id = store.feed().posts[1].id.clone();

        store.add_comment(&post_id, &user, "one").unwrap();
        store.add_comment(&post_id, &user, " two ").unwrap();

        let comments = &store.feed().post(&post_id).unwrap().comments;
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["one", "two"]);
        assert_eq!(comments[0].author, "Ada");
    }

    #[test]
    fn blank_comment_is_ignored() {
        let mut store = Store::open(MemoryStore::new(), StoreOptions::default()).unwrap();
        let post_id = store.feed().posts[0].id.clone();
        let before = store.stats().comments;

        assert!(store.add_comment(&post_id, &User::default(), "  ").unwrap().is_none());
        assert_eq!(store.stats().comments, before);
    }

    #[test]
    fn comment_on_missing_post_errors() {
        let mut store = Store::open(MemoryStore::new(), StoreOptions::default()).unwrap();
        let err = store
            .add_comment(&PostId::from("missing"), &User::default(), "hi")
            .unwrap_err();
        assert!(matches!(err, StoreError::PostNotFound(_)));
    }
}
