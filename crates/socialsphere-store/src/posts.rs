use socialsphere_shared::clock;
use socialsphere_shared::types::PostId;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::models::{Post, User};
use crate::store::Store;

impl<K: KeyValueStore> Store<K> {
    /// Append a new post by `author`. Text is trimmed; an empty image
    /// reference counts as no image. Returns `None` without touching the
    /// store when there is neither text nor image.
    pub fn add_post(
        &mut self,
        author: &User,
        text: &str,
        image: Option<&str>,
    ) -> Result<Option<Post>> {
        let text = text.trim();
        let image = image.map(str::trim).filter(|s| !s.is_empty());
        if text.is_empty() && image.is_none() {
            return Ok(None);
        }

        let post = Post {
            id: PostId::new(),
            author: author.display_name.clone(),
            avatar_ref: author.avatar_ref.clone(),
            text: text.to_string(),
            image_ref: image.map(str::to_string),
            like_count: 0,
            comments: Vec::new(),
            created_at: clock::now(),
            saved: false,
        };
        let mut next = self.feed.clone();
        next.posts.push(post.clone());
        self.commit(next)?;

        debug!(post_id = %post.id, author = %post.author, "post added");
        Ok(Some(post))
    }

    /// Add one like. Returns the new count.
    pub fn like_post(&mut self, id: &PostId) -> Result<u64> {
        let mut next = self.feed.clone();
        let post = next
            .post_mut(id)
            .ok_or_else(|| StoreError::PostNotFound(id.clone()))?;
        post.like_count += 1;
        let likes = post.like_count;
        self.commit(next)?;

        debug!(post_id = %id, likes, "post liked");
        Ok(likes)
    }

    /// Flip the saved flag. Returns the new value.
    pub fn toggle_saved(&mut self, id: &PostId) -> Result<bool> {
        let mut next = self.feed.clone();
        let post = next
            .post_mut(id)
            .ok_or_else(|| StoreError::PostNotFound(id.clone()))?;
        post.saved = !post.saved;
        let saved = post.saved;
        self.commit(next)?;

        debug!(post_id = %id, saved, "post save toggled");
        Ok(saved)
    }
}
