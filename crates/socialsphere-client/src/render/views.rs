//! One function per [`View`]. Each is pure over the [`RenderContext`].

use std::collections::HashMap;

use socialsphere_shared::clock::time_ago;
use socialsphere_shared::constants::EXPLORE_LIMIT;
use socialsphere_shared::types::View;
use socialsphere_store::{FeedState, Post};

use super::tree::{Node, PostCard, ViewTree};
use super::RenderContext;
use crate::commands::Action;

pub fn render(view: View, ctx: &RenderContext<'_>) -> ViewTree {
    let nodes = match view {
        View::Feed => feed(ctx),
        View::Profile => profile(ctx),
        View::Explore => explore(ctx),
        View::Saved => saved(ctx),
        View::Settings => settings(ctx),
    };
    ViewTree { view, nodes }
}

fn feed(ctx: &RenderContext<'_>) -> Vec<Node> {
    let mut nodes = vec![Node::Composer {
        avatar_ref: ctx.user.avatar_ref.clone(),
        placeholder: "What's happening?".to_string(),
    }];
    nodes.extend(newest_first(ctx.feed).into_iter().map(|p| card(p, ctx)));
    nodes
}

fn profile(ctx: &RenderContext<'_>) -> Vec<Node> {
    let posts = authored_by(ctx.feed, &ctx.user.display_name);
    let children = if posts.is_empty() {
        vec![Node::muted("No posts yet. Create one!")]
    } else {
        posts.into_iter().map(|p| card(p, ctx)).collect()
    };

    vec![
        Node::ProfileHeader {
            display_name: ctx.user.display_name.clone(),
            bio: ctx.user.bio.clone(),
            avatar_ref: ctx.user.avatar_ref.clone(),
        },
        Node::section("Your Posts", children),
    ]
}

fn explore(ctx: &RenderContext<'_>) -> Vec<Node> {
    let tags = trending_tags(ctx.feed, EXPLORE_LIMIT);
    let trending = if tags.is_empty() {
        vec![Node::muted("No trending tags yet.")]
    } else {
        tags.into_iter()
            .map(|(tag, count)| Node::TrendingTag { tag, count })
            .collect()
    };

    let suggested = most_liked(ctx.feed, EXPLORE_LIMIT)
        .into_iter()
        .map(|p| card(p, ctx))
        .collect();

    vec![
        Node::section("Explore • Trending", trending),
        Node::section("Suggested posts", suggested),
    ]
}

fn saved(ctx: &RenderContext<'_>) -> Vec<Node> {
    let posts = saved_posts(ctx.feed);
    let children = if posts.is_empty() {
        vec![Node::muted("No saved posts.")]
    } else {
        posts.into_iter().map(|p| card(p, ctx)).collect()
    };
    vec![Node::section("Saved posts", children)]
}

fn settings(ctx: &RenderContext<'_>) -> Vec<Node> {
    vec![Node::section(
        "Settings",
        vec![
            Node::SettingsForm {
                display_name: ctx.user.display_name.clone(),
                bio: ctx.user.bio.clone(),
            },
            Node::Button {
                label: "Clear saved data".to_string(),
                action: Action::ClearData,
            },
        ],
    )]
}

fn card(post: &Post, ctx: &RenderContext<'_>) -> Node {
    Node::PostCard(PostCard {
        id: post.id.clone(),
        author: post.author.clone(),
        avatar_ref: if post.avatar_ref.is_empty() {
            socialsphere_shared::constants::DEFAULT_AVATAR.to_string()
        } else {
            post.avatar_ref.clone()
        },
        text: post.text.clone(),
        image_ref: post.image_ref.clone(),
        like_count: post.like_count,
        comment_count: post.comments.len(),
        saved: post.saved,
        age: time_ago(post.created_at, ctx.now),
    })
}

// ---------------------------------------------------------------------------
// Selectors. All sorts are stable: equal keys keep store order.
// ---------------------------------------------------------------------------

/// Posts by `created_at`, newest first.
pub fn newest_first(feed: &FeedState) -> Vec<&Post> {
    let mut posts: Vec<&Post> = feed.posts.iter().collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

/// Posts by `author`, most recently inserted first.
pub fn authored_by<'a>(feed: &'a FeedState, author: &str) -> Vec<&'a Post> {
    feed.posts
        .iter()
        .rev()
        .filter(|p| p.author == author)
        .collect()
}

/// Hashtag frequencies, highest first, at most `limit`. Ties keep the order
/// in which tags first appear.
pub fn trending_tags(feed: &FeedState, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in feed.posts.iter().flat_map(Post::hashtags) {
        match index.get(tag) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push((tag.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Posts by like count, highest first, at most `limit`.
pub fn most_liked(feed: &FeedState, limit: usize) -> Vec<&Post> {
    let mut posts: Vec<&Post> = feed.posts.iter().collect();
    posts.sort_by(|a, b| b.like_count.cmp(&a.like_count));
    posts.truncate(limit);
    posts
}

pub fn saved_posts(feed: &FeedState) -> Vec<&Post> {
    feed.posts.iter().filter(|p| p.saved).collect()
}
