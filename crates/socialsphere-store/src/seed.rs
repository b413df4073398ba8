//! Fixed data used on first run and after a corrupt mirror is discarded.

use chrono::{DateTime, Duration, Utc};
use socialsphere_shared::types::{CommentId, PostId};

use crate::models::{Comment, FeedState, Post};

/// Two sample posts, timestamped relative to `now`. Ids are fresh on every
/// call; everything else is fixed.
pub fn seed_feed(now: DateTime<Utc>) -> FeedState {
    let hour_ago = now - Duration::hours(1);

    let posts = vec![
        Post {
            id: PostId::new(),
            author: "Amina".to_string(),
            avatar_ref: "assets/avatar1.png".to_string(),
            text: "Loving the new front-end project I'm building! 🚀\n#portfolio #webdev"
                .to_string(),
            image_ref: None,
            like_count: 12,
            comments: vec![Comment {
                id: CommentId::new(),
                author: "John".to_string(),
                text: "Nice work!".to_string(),
                created_at: hour_ago,
            }],
            created_at: hour_ago,
            saved: false,
        },
        Post {
            id: PostId::new(),
            author: "Liam".to_string(),
            avatar_ref: "assets/avatar2.png".to_string(),
            text: "Morning coffee and code. ☕".to_string(),
            image_ref: None,
            like_count: 4,
            comments: Vec::new(),
            created_at: now - Duration::hours(2),
            saved: false,
        },
    ];

    FeedState {
        posts,
        notifications: Vec::new(),
    }
}

/// Compare against the seed ignoring generated ids and timestamps.
pub fn is_seed(feed: &FeedState) -> bool {
    let reference = seed_feed(Utc::now());
    feed.notifications.is_empty()
        && feed.posts.len() == reference.posts.len()
        && feed.posts.iter().zip(&reference.posts).all(|(a, b)| {
            a.author == b.author
                && a.text == b.text
                && a.like_count == b.like_count
                && a.comments.len() == b.comments.len()
                && a.saved == b.saved
        })
}
