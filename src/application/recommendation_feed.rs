use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::ports::CatalogSource;
use crate::domain::recommendation::Recommendation;

use super::recommendation::recommend;

/// Periodic recomputation of the recommendation list, published over a watch
/// channel so readers always see the most recent complete result.
///
/// Ticks run sequentially on one task and never queue or overlap. Stopping
/// or dropping the feed cancels the pending tick, so no work leaks against a
/// catalog that is gone.
pub struct RecommendationFeed {
    handle: JoinHandle<()>,
    rx: watch::Receiver<Vec<Recommendation>>,
}

impl RecommendationFeed {
    /// Computes an initial list synchronously, then recomputes from a fresh
    /// catalog snapshot on every `refresh` tick.
    pub fn start(source: Arc<dyn CatalogSource>, refresh: Duration) -> Self {
        let (tx, rx) = watch::channel(recommend(&source.products()));
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(refresh);
            // The first tick completes immediately and would only repeat the
            // initial computation.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let recommendations = recommend(&source.products());
                log::debug!(
                    "recomputed recommendations: {} entries",
                    recommendations.len()
                );
                if tx.send(recommendations).is_err() {
                    break;
                }
            }
        });
        Self { handle, rx }
    }

    /// The most recently published list.
    pub fn latest(&self) -> Vec<Recommendation> {
        self.rx.borrow().clone()
    }

    /// A receiver for callers that want to await changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Recommendation>> {
        self.rx.clone()
    }

    /// Cancels the periodic task. Safe to call more than once.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for RecommendationFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
