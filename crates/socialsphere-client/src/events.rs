//! Events for widgets that live outside the view tree: the notification
//! badge, the stats chart and the page theme.

use serde::Serialize;
use serde_json::Value;
use socialsphere_store::{FeedState, SaveHook, Stats};
use tokio::sync::mpsc::UnboundedSender;

pub const EVENT_NOTIFICATIONS_CHANGED: &str = "notifications-changed";
pub const EVENT_STATS_CHANGED: &str = "stats-changed";
pub const EVENT_THEME_CHANGED: &str = "theme-changed";

#[derive(Debug, Clone, PartialEq)]
pub struct UiEvent {
    pub name: &'static str,
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgePayload {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsPayload {
    pub posts: usize,
    pub likes: u64,
    pub comments: usize,
}

impl From<Stats> for StatsPayload {
    fn from(s: Stats) -> Self {
        Self {
            posts: s.posts,
            likes: s.likes,
            comments: s.comments,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemePayload {
    pub theme: String,
}

pub fn emit_event<S: Serialize>(tx: &UnboundedSender<UiEvent>, name: &'static str, payload: S) {
    let payload = match serde_json::to_value(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(event = name, error = %e, "Failed to encode event payload");
            return;
        }
    };
    if let Err(e) = tx.send(UiEvent { name, payload }) {
        tracing::error!(event = name, error = %e, "Failed to emit event");
    }
}

/// Save hook that refreshes the badge and chart after every persist.
pub struct WidgetRefresh {
    tx: UnboundedSender<UiEvent>,
}

impl WidgetRefresh {
    pub fn new(tx: UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }
}

impl SaveHook for WidgetRefresh {
    fn after_save(&mut self, feed: &FeedState) {
        emit_event(
            &self.tx,
            EVENT_NOTIFICATIONS_CHANGED,
            BadgePayload {
                count: feed.notifications.len(),
            },
        );
        emit_event(&self.tx, EVENT_STATS_CHANGED, StatsPayload::from(feed.stats()));
    }
}
