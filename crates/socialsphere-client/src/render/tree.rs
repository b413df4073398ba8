//! Display-agnostic view tree.
//!
//! Nodes carry data and the [`Action`]s their controls trigger. They never
//! hold references into the store, so a tree can be kept, diffed or
//! serialized after the state it was rendered from has moved on.

use serde::Serialize;
use socialsphere_shared::types::{PostId, View};

use crate::commands::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    pub view: View,
    pub nodes: Vec<Node>,
}

impl ViewTree {
    /// Every post card in the tree, depth first.
    pub fn post_cards(&self) -> Vec<&PostCard> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a PostCard>) {
            for node in nodes {
                match node {
                    Node::PostCard(card) => out.push(card),
                    Node::Section { children, .. } => walk(children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    pub fn trending(&self) -> Vec<(&str, usize)> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<(&'a str, usize)>) {
            for node in nodes {
                match node {
                    Node::TrendingTag { tag, count } => out.push((tag.as_str(), *count)),
                    Node::Section { children, .. } => walk(children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Section {
        title: String,
        children: Vec<Node>,
    },
    /// Quick-post box at the top of the feed.
    Composer {
        avatar_ref: String,
        placeholder: String,
    },
    PostCard(PostCard),
    TrendingTag {
        tag: String,
        count: usize,
    },
    /// Secondary text, e.g. an empty-state hint.
    Muted {
        text: String,
    },
    ProfileHeader {
        display_name: String,
        bio: String,
        avatar_ref: String,
    },
    SettingsForm {
        display_name: String,
        bio: String,
    },
    Button {
        label: String,
        action: Action,
    },
    NotificationItem {
        age: String,
        text: String,
    },
    MiniProfile {
        display_name: String,
        bio: String,
        avatar_ref: String,
    },
    Suggestion {
        name: String,
        following: bool,
        action: Action,
    },
    /// Placeholder shown while the skeleton delay runs.
    Skeleton,
}

impl Node {
    pub fn section(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            title: title.into(),
            children,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Node::Muted { text: text.into() }
    }
}

/// One post, filled in the way the card template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: PostId,
    pub author: String,
    pub avatar_ref: String,
    pub text: String,
    pub image_ref: Option<String>,
    pub like_count: u64,
    pub comment_count: usize,
    pub saved: bool,
    /// Relative age, e.g. `3h`.
    pub age: String,
}

impl PostCard {
    /// `★` when saved, `☆` otherwise.
    pub fn save_glyph(&self) -> &'static str {
        if self.saved {
            "★"
        } else {
            "☆"
        }
    }

    /// Bound to the like button and to double-clicking the image.
    pub fn like_action(&self) -> Action {
        Action::LikePost(self.id.clone())
    }

    pub fn save_action(&self) -> Action {
        Action::ToggleSave(self.id.clone())
    }

    pub fn share_action(&self) -> Action {
        Action::SharePost(self.id.clone())
    }

    pub fn comment_action(&self, text: impl Into<String>) -> Action {
        Action::Comment {
            post_id: self.id.clone(),
            text: text.into(),
        }
    }
}
