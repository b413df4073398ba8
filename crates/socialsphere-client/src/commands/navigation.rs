use socialsphere_shared::types::View;
use socialsphere_store::KeyValueStore;
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

impl<K: KeyValueStore> AppState<K> {
    /// Switch to `view`, pausing for the configured skeleton delay first.
    pub async fn navigate(&mut self, view: View) -> Result<Option<String>> {
        self.view = view;
        let delay = self.config.skeleton_delay;
        if !delay.is_zero() {
            debug!(%view, delay_ms = delay.as_millis() as u64, "showing skeleton");
            tokio::time::sleep(delay).await;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use socialsphere_shared::types::View;

    use crate::commands::Action;
    use crate::test_support::memory_app;

    #[tokio::test]
    async fn every_view_is_reachable_from_every_view() {
        let mut app = memory_app();
        for from in View::ALL {
            for to in View::ALL {
                app.dispatch(Action::Navigate(from)).await.unwrap();
                let outcome = app.dispatch(Action::Navigate(to)).await.unwrap();
                assert_eq!(outcome.view.view, to);
                assert_eq!(app.view, to);
            }
        }
    }

    #[tokio::test]
    async fn skeleton_delay_is_waited_out() {
        let mut app = memory_app();
        app.config.skeleton_delay = Duration::from_millis(30);

        let start = tokio::time::Instant::now();
        app.dispatch(Action::Navigate(View::Explore)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
