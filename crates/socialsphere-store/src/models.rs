//! Domain model structs mirrored into the key-value store.
//!
//! Field names on the wire follow the layout already present in browser
//! storage (`user`, `avatar`, `img`, `likes`, `created`, `time`) so mirrors
//! written by earlier front ends still load. Timestamps are epoch
//! milliseconds. Missing fields fall back to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use socialsphere_shared::constants::{DEFAULT_AVATAR, DEFAULT_BIO, DEFAULT_DISPLAY_NAME};
use socialsphere_shared::types::{CommentId, NotificationId, PostId};

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A single feed post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub id: PostId,
    /// Display name of the author at the time of posting.
    #[serde(rename = "user", default)]
    pub author: String,
    #[serde(rename = "avatar", default)]
    pub avatar_ref: String,
    #[serde(default)]
    pub text: String,
    /// Data URI or URL. Stored as `""` when absent.
    #[serde(rename = "img", default, with = "empty_as_none")]
    pub image_ref: Option<String>,
    #[serde(rename = "likes", default, deserialize_with = "null_as_zero")]
    pub like_count: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(rename = "created", default, with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub saved: bool,
}

impl Post {
    /// Whitespace-separated tokens starting with `#`, in text order.
    pub fn hashtags(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace().filter(|w| w.starts_with('#'))
    }
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    #[serde(default)]
    pub id: CommentId,
    #[serde(rename = "user", default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "time", default, with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    #[serde(default)]
    pub id: NotificationId,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "time", default, with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Feed snapshot
// ---------------------------------------------------------------------------

/// Everything persisted under the feed key: posts in insertion order and
/// notifications newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedState {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl FeedState {
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| &p.id == id)
    }

    /// Aggregate counters consumed by the stats chart.
    pub fn stats(&self) -> Stats {
        Stats {
            posts: self.posts.len(),
            likes: self.posts.iter().map(|p| p.like_count).sum(),
            comments: self.posts.iter().map(|p| p.comments.len()).sum(),
        }
    }
}

/// `(postCount, totalLikes, totalComments)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub posts: usize,
    pub likes: u64,
    pub comments: usize,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// The signed-in user. Only the display name is persisted; avatar and bio
/// revert to defaults on restart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    pub avatar_ref: String,
    pub bio: String,
}

impl User {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            avatar_ref: DEFAULT_AVATAR.to_string(),
            bio: DEFAULT_BIO.to_string(),
        }
    }
}

/// Older mirrors may hold `"likes": null`.
fn null_as_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(d)?.unwrap_or(0))
}

/// `img` is written as an empty string when a post has no image.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_legacy_browser_layout() {
        let json = r#"{
            "posts": [{
                "id": "id_k3j9x2a", "user": "Amina", "avatar": "assets/avatar1.png",
                "text": "hi #rust", "img": "", "likes": 3,
                "comments": [{"id": "id_c1", "user": "John", "text": "Nice", "time": 1700000000000}],
                "created": 1700000000000, "saved": true
            }],
            "notifications": [{"id": "id_n1", "text": "Post saved", "time": 1700000001000}]
        }"#;

        let feed: FeedState = serde_json::from_str(json).unwrap();
        let post = &feed.posts[0];
        assert_eq!(post.id.as_str(), "id_k3j9x2a");
        assert_eq!(post.author, "Amina");
        assert_eq!(post.image_ref, None);
        assert_eq!(post.like_count, 3);
        assert_eq!(post.created_at.timestamp_millis(), 1_700_000_000_000);
        assert!(post.saved);
        assert_eq!(post.comments[0].author, "John");
        assert_eq!(feed.notifications[0].text, "Post saved");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let json = r#"{"posts": [{"id": "p", "user": "Liam"}]}"#;
        let feed: FeedState = serde_json::from_str(json).unwrap();
        let post = &feed.posts[0];
        assert_eq!(post.like_count, 0);
        assert!(post.comments.is_empty());
        assert!(!post.saved);
        assert!(feed.notifications.is_empty());
    }

    #[test]
    fn incomplete_records_still_load() {
        let json = r#"{
            "posts": [
                {"id": "id_a", "text": "my only post", "likes": 3},
                {"user": "Liam", "likes": null, "comments": [{"text": "hey"}]}
            ],
            "notifications": [{"text": "Post saved"}]
        }"#;
        let feed: FeedState = serde_json::from_str(json).unwrap();

        assert_eq!(feed.posts[0].author, "");
        assert_eq!(feed.posts[0].like_count, 3);
        assert_eq!(feed.posts[1].like_count, 0);
        assert!(!feed.posts[1].id.as_str().is_empty());
        assert_ne!(feed.posts[1].id, feed.posts[0].id);
        assert_eq!(feed.posts[1].comments[0].author, "");
        assert!(!feed.notifications[0].id.as_str().is_empty());
    }

    #[test]
    fn hashtags_split_on_whitespace() {
        let json = r##"{"id": "p", "user": "a", "text": "Loving it\n#portfolio #webdev not#tag"}"##;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.hashtags().collect::<Vec<_>>(), ["#portfolio", "#webdev"]);
    }

    #[test]
    fn stats_sum_likes_and_comments() {
        let json = r#"{"posts": [
            {"id": "a", "user": "x", "likes": 2, "comments": [{"id": "c", "user": "y", "text": "t", "time": 1}]},
            {"id": "b", "user": "x", "likes": 5}
        ]}"#;
        let feed: FeedState = serde_json::from_str(json).unwrap();
        assert_eq!(
            feed.stats(),
            Stats {
                posts: 2,
                likes: 7,
                comments: 1
            }
        );
    }
}
