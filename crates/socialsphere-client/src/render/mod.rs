//! Pure rendering: application state in, [`ViewTree`] out.
//!
//! Nothing here mutates the store. Interactive controls are described by
//! [`Action`](crate::commands::Action) values which the caller hands back to
//! [`AppState::dispatch`](crate::state::AppState::dispatch).

pub mod panels;
pub mod tree;
pub mod views;

use chrono::{DateTime, Utc};
use socialsphere_shared::types::View;
use socialsphere_store::{FeedState, User};

pub use panels::{mini_profile, notification_badge, notifications_dropdown, skeleton, suggestions};
pub use tree::{Node, PostCard, ViewTree};
pub use views::render;

/// Everything a render reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub feed: &'a FeedState,
    pub user: &'a User,
    /// Reference point for relative timestamps.
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(feed: &'a FeedState, user: &'a User) -> Self {
        Self {
            feed,
            user,
            now: socialsphere_shared::clock::now(),
        }
    }

    pub fn render(&self, view: View) -> ViewTree {
        render(view, self)
    }
}
