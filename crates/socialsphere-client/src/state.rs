//! The explicitly owned application state.
//!
//! [`AppState`] bundles the store, the signed-in user, the current view and
//! UI-only state (composer draft, follows). Callers own it and pass it by
//! reference; nothing in the crate reaches it globally.

use std::collections::HashSet;

use socialsphere_shared::types::{Theme, View};
use socialsphere_store::{Database, KeyValueStore, Stats, Store, User};
use tokio::sync::mpsc::UnboundedSender;

use crate::commands::compose::Composer;
use crate::commands::share::{Clipboard, NoClipboard};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::events::{emit_event, UiEvent, WidgetRefresh};
use crate::render::{self, Node, RenderContext, ViewTree};

pub struct AppState<K = Database> {
    /// Feed data and its persisted mirror.
    pub store: Store<K>,

    /// Loaded from the persisted display name at startup.
    pub user: User,

    /// The view the last render targeted.
    pub view: View,

    pub theme: Theme,

    /// Draft in the "create post" dialog.
    pub composer: Composer,

    /// Suggested accounts followed this session. Not persisted.
    pub followed: HashSet<String>,

    pub config: ClientConfig,

    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) events: Option<UnboundedSender<UiEvent>>,
}

impl<K: KeyValueStore> AppState<K> {
    /// Build state around an already loaded store.
    pub fn new(store: Store<K>, config: ClientConfig) -> Result<Self> {
        let user = store.current_user()?;
        let theme = store.theme()?;

        Ok(Self {
            store,
            user,
            view: View::Feed,
            theme,
            composer: Composer::default(),
            followed: HashSet::new(),
            config,
            clipboard: Box::new(NoClipboard),
            events: None,
        })
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Route badge, chart and theme refreshes to `tx`.
    pub fn with_events(mut self, tx: UnboundedSender<UiEvent>) -> Self {
        self.store.add_save_hook(WidgetRefresh::new(tx.clone()));
        self.events = Some(tx);
        self
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(self.store.feed(), &self.user)
    }

    pub fn render_current(&self) -> ViewTree {
        self.render_context().render(self.view)
    }

    pub fn notifications(&self) -> Vec<Node> {
        render::notifications_dropdown(
            self.store.feed(),
            self.config.dropdown_limit,
            socialsphere_shared::clock::now(),
        )
    }

    pub fn badge(&self) -> Option<usize> {
        render::notification_badge(self.store.feed())
    }

    pub fn mini_profile(&self) -> Node {
        render::mini_profile(&self.user)
    }

    pub fn suggestions(&self) -> Vec<Node> {
        render::suggestions(&self.followed)
    }

    /// `(postCount, totalLikes, totalComments)` for the chart widget.
    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    /// Whether the one-time landing dialog should still be shown.
    pub fn should_show_welcome(&self) -> Result<bool> {
        Ok(!self.store.welcome_dismissed()?)
    }

    pub(crate) fn emit<S: serde::Serialize>(&self, name: &'static str, payload: S) {
        if let Some(tx) = &self.events {
            emit_event(tx, name, payload);
        }
    }
}
