use std::sync::Arc;

use tablemates_core::domain::dashboard::{DashboardView, StoreEvent};
use tokio::sync::{RwLock, mpsc::UnboundedReceiver};
use tracing::debug;

/// Drains store events into the dashboard view, in arrival order.
///
/// Runs as a single task so the "new" buckets have exactly one writer.
pub async fn apply_store_events(
    dashboard: Arc<RwLock<DashboardView>>,
    mut events: UnboundedReceiver<StoreEvent>,
) {
    while let Some(event) = events.recv().await {
        debug!(table = ?event.table(), "applying store event");
        dashboard.write().await.apply_event(event);
    }
}
