//! The feed store: in-memory state plus its persisted mirror.
//!
//! Mutations live next to their concern (`posts.rs`, `comments.rs`,
//! `notifications.rs`, `preferences.rs`) as further `impl Store` blocks.
//! Every mutation builds the next state, persists it, and only then swaps it
//! in, so a failed write leaves memory and mirror in agreement.

use socialsphere_shared::clock;
use socialsphere_shared::constants::{FEED_STORAGE_KEY, NOTIFICATION_CAP};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::{FeedState, Stats};
use crate::seed;

/// Callback run after every successful save, e.g. to refresh a badge or a
/// chart. It only observes the state.
pub trait SaveHook {
    fn after_save(&mut self, feed: &FeedState);
}

impl<F: FnMut(&FeedState)> SaveHook for F {
    fn after_save(&mut self, feed: &FeedState) {
        self(feed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum notifications retained; older ones are evicted.
    pub notification_cap: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            notification_cap: NOTIFICATION_CAP,
        }
    }
}

pub struct Store<K> {
    pub(crate) kv: K,
    pub(crate) feed: FeedState,
    pub(crate) options: StoreOptions,
    hooks: Vec<Box<dyn SaveHook>>,
}

impl<K: KeyValueStore> Store<K> {
    /// Wrap `kv` and immediately [`load`](Self::load) from it.
    pub fn open(kv: K, options: StoreOptions) -> Result<Self> {
        let mut store = Self {
            kv,
            feed: FeedState::default(),
            options: StoreOptions {
                notification_cap: options.notification_cap.max(1),
            },
            hooks: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory state with the persisted mirror.
    ///
    /// - nothing persisted: seed, then persist the seed
    /// - unparsable mirror: log, drop the entry, fall back to the seed
    ///
    /// Only backend I/O can fail here.
    pub fn load(&mut self) -> Result<&FeedState> {
        match self.kv.get(FEED_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<FeedState>(&raw) {
                Ok(mut feed) => {
                    feed.notifications.truncate(self.options.notification_cap);
                    debug!(
                        posts = feed.posts.len(),
                        notifications = feed.notifications.len(),
                        "loaded feed mirror"
                    );
                    self.feed = feed;
                }
                Err(e) => {
                    warn!(error = %e, "corrupt feed mirror, reseeding");
                    self.kv.remove(FEED_STORAGE_KEY)?;
                    self.feed = seed::seed_feed(clock::now());
                }
            },
            None => {
                info!("no feed mirror found, seeding sample posts");
                self.feed = seed::seed_feed(clock::now());
                self.save()?;
            }
        }
        Ok(&self.feed)
    }

    /// Write `{posts, notifications}` to the mirror, then run save hooks.
    pub fn save(&mut self) -> Result<()> {
        write_mirror(&mut self.kv, &self.feed)?;
        self.run_hooks();
        Ok(())
    }

    /// Persist `next` and make it the current state. On error the current
    /// state is left untouched.
    pub(crate) fn commit(&mut self, next: FeedState) -> Result<()> {
        write_mirror(&mut self.kv, &next)?;
        self.feed = next;
        self.run_hooks();
        Ok(())
    }

    fn run_hooks(&mut self) {
        for hook in &mut self.hooks {
            hook.after_save(&self.feed);
        }
    }

    /// Erase the feed mirror and empty the in-memory state. Irreversible;
    /// call [`load`](Self::load) afterwards to start over from the seed.
    pub fn clear_all(&mut self) -> Result<()> {
        self.kv.remove(FEED_STORAGE_KEY)?;
        self.feed = FeedState::default();
        info!("cleared all feed data");
        Ok(())
    }

    pub fn add_save_hook(&mut self, hook: impl SaveHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn stats(&self) -> Stats {
        self.feed.stats()
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn into_inner(self) -> K {
        self.kv
    }
}

fn write_mirror<K: KeyValueStore>(kv: &mut K, feed: &FeedState) -> Result<()> {
    let json = serde_json::to_string(feed)?;
    kv.set(FEED_STORAGE_KEY, &json)
}
