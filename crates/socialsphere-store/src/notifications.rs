use socialsphere_shared::clock;
use socialsphere_shared::types::NotificationId;
use tracing::debug;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::Notification;
use crate::store::Store;

impl<K: KeyValueStore> Store<K> {
    /// Prepend a notification and evict the oldest beyond the cap.
    pub fn push_notification(&mut self, text: impl Into<String>) -> Result<Notification> {
        let notification = Notification {
            id: NotificationId::new(),
            text: text.into(),
            created_at: clock::now(),
        };
        let mut next = self.feed.clone();
        next.notifications.insert(0, notification.clone());
        next.notifications.truncate(self.options.notification_cap);
        self.commit(next)?;

        debug!(
            text = %notification.text,
            total = self.feed.notifications.len(),
            "notification pushed"
        );
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::store::StoreOptions;

    #[test]
    fn newest_first_and_capped() {
        let mut store = Store::open(MemoryStore::new(), StoreOptions::default()).unwrap();

        for i in 0..120 {
            store.push_notification(format!("n{i}")).unwrap();
            assert!(store.feed().notifications.len() <= 50);
        }

        let list = &store.feed().notifications;
        assert_eq!(list.len(), 50);
        assert_eq!(list[0].text, "n119");
        assert_eq!(list[49].text, "n70");
    }

    #[test]
    fn custom_cap_is_honoured() {
        let options = StoreOptions { notification_cap: 3 };
        let mut store = Store::open(MemoryStore::new(), options).unwrap();
        for i in 0..5 {
            store.push_notification(format!("n{i}")).unwrap();
        }
        let texts: Vec<_> = store.feed().notifications.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["n4", "n3", "n2"]);
    }

    #[test]
    fn zero_cap_is_raised_to_one() {
        let options = StoreOptions { notification_cap: 0 };
        let mut store = Store::open(MemoryStore::new(), options).unwrap();
        store.push_notification("only").unwrap();
        assert_eq!(store.feed().notifications.len(), 1);
    }
}
