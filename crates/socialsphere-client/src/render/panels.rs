//! Chrome around the main view: notifications, mini profile, suggestions
//! and loading placeholders.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use socialsphere_shared::clock::time_ago;
use socialsphere_shared::constants::SUGGESTED_USERS;
use socialsphere_shared::types::View;
use socialsphere_store::{FeedState, User};

use super::tree::{Node, ViewTree};
use crate::commands::Action;

const SKELETON_CARDS: usize = 3;

/// Newest `limit` notifications, or a single "No notifications" hint.
pub fn notifications_dropdown(feed: &FeedState, limit: usize, now: DateTime<Utc>) -> Vec<Node> {
    if feed.notifications.is_empty() {
        return vec![Node::muted("No notifications")];
    }
    feed.notifications
        .iter()
        .take(limit)
        .map(|n| Node::NotificationItem {
            age: time_ago(n.created_at, now),
            text: n.text.clone(),
        })
        .collect()
}

/// Count for the header badge; `None` hides it.
pub fn notification_badge(feed: &FeedState) -> Option<usize> {
    match feed.notifications.len() {
        0 => None,
        n => Some(n),
    }
}

pub fn mini_profile(user: &User) -> Node {
    Node::MiniProfile {
        display_name: user.display_name.clone(),
        bio: user.bio.clone(),
        avatar_ref: user.avatar_ref.clone(),
    }
}

pub fn suggestions(followed: &HashSet<String>) -> Vec<Node> {
    SUGGESTED_USERS
        .iter()
        .map(|name| Node::Suggestion {
            name: name.to_string(),
            following: followed.contains(*name),
            action: Action::Follow(name.to_string()),
        })
        .collect()
}

/// Placeholder tree shown during the skeleton delay.
pub fn skeleton(view: View) -> ViewTree {
    ViewTree {
        view,
        nodes: vec![Node::Skeleton; SKELETON_CARDS],
    }
}
