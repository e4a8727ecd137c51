// ============================================================================
// BATCH VIEWMODEL - listing, dashboard tiles, send / delete / retry
// ============================================================================
// Optimistic updates go through `BatchStore::set_status`, so a failed call
// can never push a batch backwards. A re-fetch reconciles with the server.
// ============================================================================

use std::rc::Rc;

use crate::models::{BatchStatus, DashboardStats, ProcessingStatus, RetryResponse, UploadBatch};
use crate::services::{ApiError, PortalApi};
use crate::stores::BatchStore;

pub struct BatchViewModel {
    api: Rc<dyn PortalApi>,
}

impl BatchViewModel {
    pub fn new(api: Rc<dyn PortalApi>) -> Self {
        Self { api }
    }

    pub async fn load_batches(&self) -> Result<Vec<UploadBatch>, ApiError> {
        let response = self.api.list_batches().await?;
        log::info!("📋 {} batches loaded", response.data.len());
        Ok(response.data)
    }

    pub async fn load_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self.api.dashboard().await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Marks the batch `processing` before the call goes out
    pub fn begin_send(store: &mut BatchStore, batch_id: &str) -> bool {
        let eligible = store
            .find(batch_id)
            .map(|b| b.status.can_send_slips())
            .unwrap_or(false);
        if !eligible || store.is_busy(batch_id) {
            return false;
        }
        store.set_busy(batch_id, true);
        store.set_status(batch_id, BatchStatus::Processing);
        true
    }

    /// Applies the send-slips outcome. On failure the row stays
    /// `processing`; the caller re-fetches the list.
    pub fn finish_send(store: &mut BatchStore, batch_id: &str, result: &Result<String, ApiError>) {
        store.set_busy(batch_id, false);
        match result {
            Ok(_) => {
                store.set_status(batch_id, BatchStatus::Completed);
            }
            Err(e) => log::error!("❌ Sending slips for {} failed: {}", batch_id, e),
        }
    }

    pub async fn send_slips(&self, batch_id: &str) -> Result<String, ApiError> {
        let response = self.api.send_slips(batch_id).await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Salary slips sent".to_string()))
    }

    pub async fn delete_batch(&self, batch_id: &str) -> Result<String, ApiError> {
        let response = self.api.delete_batch(batch_id).await?;
        Ok(response.message.unwrap_or_else(|| "Upload deleted".to_string()))
    }

    /// Applies a delete outcome: the row goes only once the server agreed
    pub fn finish_delete(store: &mut BatchStore, batch_id: &str, result: &Result<String, ApiError>) {
        store.set_busy(batch_id, false);
        store.pending_delete = None;
        if result.is_ok() {
            store.remove(batch_id);
        }
    }

    pub async fn status(&self, batch_id: &str) -> Result<ProcessingStatus, ApiError> {
        self.api.batch_status(batch_id).await
    }

    pub async fn retry_failed(&self, batch_id: &str) -> Result<RetryResponse, ApiError> {
        self.api.retry_failed(batch_id).await
    }
}

/// Toast text for a retry result
pub fn retry_summary(response: &RetryResponse) -> String {
    match &response.results {
        Some(results) => format!(
            "Retried {}: {} sent, {} failed",
            results.total_retried, results.successful, results.failed
        ),
        None => response
            .message
            .clone()
            .unwrap_or_else(|| "No failed slips to retry".to_string()),
    }
}
