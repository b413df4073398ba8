//! User actions and their dispatch.
//!
//! Every interactive control in a [`ViewTree`](crate::render::ViewTree)
//! resolves to an [`Action`]. [`AppState::dispatch`] applies it (mutate,
//! persist, notify) and re-renders the current view.

pub mod comments;
pub mod compose;
pub mod navigation;
pub mod posts;
pub mod profile;
pub mod settings;
pub mod share;

use serde::{Deserialize, Serialize};
use socialsphere_shared::types::{PostId, View};
use socialsphere_store::{KeyValueStore, StoreError};
use tracing::{debug, warn};

use crate::error::Result;
use crate::render::ViewTree;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Action {
    Navigate(View),
    LikePost(PostId),
    ToggleSave(PostId),
    SharePost(PostId),
    Comment { post_id: PostId, text: String },
    /// Text-only post from the box at the top of the feed.
    QuickPost { text: String },
    /// Reset the composer for a new post.
    OpenCreate,
    /// Publish the composer draft.
    Publish,
    EditDisplayName { name: String },
    SaveSettings { display_name: String, bio: String },
    Follow(String),
    ToggleTheme,
    DismissWelcome,
    ClearData,
}

/// Result of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The current view, rendered after the action.
    pub view: ViewTree,
    /// Short message for the user (e.g. "Saved", "Copy failed").
    pub message: Option<String>,
}

impl<K: KeyValueStore> AppState<K> {
    /// Apply `action` and re-render.
    ///
    /// Recoverable failures (clipboard, empty post, pending image) become
    /// [`Outcome::message`]; only store I/O errors are returned.
    pub async fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        debug!(?action, view = %self.view, "dispatching action");

        let result = match action {
            Action::Navigate(view) => self.navigate(view).await,
            Action::LikePost(id) => self.like(&id),
            Action::ToggleSave(id) => self.toggle_save(&id),
            Action::SharePost(id) => self.share(&id),
            Action::Comment { post_id, text } => self.comment(&post_id, &text),
            Action::QuickPost { text } => self.quick_post(&text),
            Action::OpenCreate => {
                self.composer.reset();
                Ok(None)
            }
            Action::Publish => self.publish(),
            Action::EditDisplayName { name } => self.edit_display_name(&name),
            Action::SaveSettings { display_name, bio } => self.save_settings(&display_name, &bio),
            Action::Follow(name) => self.follow(&name),
            Action::ToggleTheme => self.toggle_theme(),
            Action::DismissWelcome => self.dismiss_welcome(),
            Action::ClearData => self.clear_data(),
        };

        let message = match result {
            Ok(message) => message,
            Err(e) => match e.user_message() {
                Some(message) => {
                    warn!(error = %e, "action degraded");
                    Some(message.to_string())
                }
                None => return Err(e),
            },
        };

        Ok(Outcome {
            view: self.render_current(),
            message,
        })
    }
}

/// Turn a missing post into a logged no-op.
pub(crate) fn tolerate_missing<T>(result: socialsphere_store::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StoreError::PostNotFound(id)) => {
            warn!(post_id = %id, "action on missing post ignored");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
