use std::time::Duration;

use super::client::DocumentService;
use super::models::{DocumentSnapshot, DocumentStatus};

/// Grace period given to the remote renderer before the one status check.
pub const DRAFT_POLL_DELAY: Duration = Duration::from_secs(2);

/// Upgrade a freshly created snapshot to the most recent known state.
///
/// Documents still in `draft` get a single sleep-then-recheck; the
/// refreshed body wins even if the status is still non-terminal. A failed
/// refresh keeps the creation snapshot and is never escalated - callers
/// re-poll through the status endpoint for long-running renders.
pub async fn resolve_completion(
    service: &dyn DocumentService,
    snapshot: DocumentSnapshot,
    delay: Duration,
) -> DocumentSnapshot {
    if snapshot.status() != Some(DocumentStatus::Draft) {
        return snapshot;
    }
    let Some(document_id) = snapshot.id().map(str::to_string) else {
        return snapshot;
    };

    log::info!("Document {document_id} still in draft, waiting before one status check");
    tokio::time::sleep(delay).await;

    match service.fetch_document(&document_id).await {
        Ok(updated) => {
            log::info!(
                "Refreshed document {document_id}: status={:?}",
                updated.status()
            );
            updated
        }
        Err(e) => {
            log::warn!(
                "Status refresh for document {document_id} failed, keeping creation snapshot: {e}"
            );
            snapshot
        }
    }
}
