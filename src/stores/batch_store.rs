// ============================================================================
// BATCH STORE - cached batch list + dashboard tiles
// ============================================================================
// The list is a read-only copy of the server's; `replace` is the only way a
// status can move backwards.
// ============================================================================

use std::collections::{HashMap, HashSet};

use crate::models::{BatchStatus, DashboardStats, ProcessingStatus, UploadBatch};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchStore {
    pub batches: Vec<UploadBatch>,
    pub batches_loading: bool,
    pub batches_error: Option<String>,
    pub stats: Option<DashboardStats>,
    pub stats_loading: bool,
    pub stats_error: Option<String>,
    pub search: String,
    /// Batch ids with a send/delete/retry call in flight
    pub busy: HashSet<String>,
    /// Batch awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Processing details fetched for the "details" panel
    pub details: HashMap<String, ProcessingStatus>,
    pub expanded: Option<String>,
}

impl BatchStore {
    /// Server data wins over anything held locally
    pub fn replace(&mut self, batches: Vec<UploadBatch>) {
        self.batches = batches;
        self.batches_error = None;
        self.busy.retain(|id| self.batches.iter().any(|b| &b.batch_id == id));
    }

    pub fn find(&self, batch_id: &str) -> Option<&UploadBatch> {
        self.batches.iter().find(|b| b.batch_id == batch_id)
    }

    /// Moves a batch forward in its lifecycle. Refuses regressions and
    /// returns whether anything changed.
    pub fn set_status(&mut self, batch_id: &str, status: BatchStatus) -> bool {
        match self.batches.iter_mut().find(|b| b.batch_id == batch_id) {
            Some(batch) if batch.status.can_advance_to(&status) => {
                batch.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, batch_id: &str) -> bool {
        let before = self.batches.len();
        self.batches.retain(|b| b.batch_id != batch_id);
        self.details.remove(batch_id);
        if self.expanded.as_deref() == Some(batch_id) {
            self.expanded = None;
        }
        self.batches.len() != before
    }

    pub fn is_busy(&self, batch_id: &str) -> bool {
        self.busy.contains(batch_id)
    }

    pub fn set_busy(&mut self, batch_id: &str, busy: bool) {
        if busy {
            self.busy.insert(batch_id.to_string());
        } else {
            self.busy.remove(batch_id);
        }
    }

    /// Case-insensitive substring match over `UploadBatch::search_text`
    pub fn filtered(&self) -> Vec<UploadBatch> {
        let needle = self.search.trim().to_lowercase();
        self.batches
            .iter()
            .filter(|b| needle.is_empty() || b.search_text().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn footer_text(&self) -> String {
        format!("Showing {} of {} uploads", self.filtered().len(), self.batches.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(id: &str, month: &str, year: &str, status: BatchStatus) -> UploadBatch {
        UploadBatch {
            batch_id: id.to_string(),
            month: month.to_string(),
            year: year.to_string(),
            status,
            ..UploadBatch::default()
        }
    }

    fn store() -> BatchStore {
        let mut store = BatchStore::default();
        store.replace(vec![
            batch("A1B2", "03", "2025", BatchStatus::Pending),
            batch("c3d4", "02", "2025", BatchStatus::Completed),
            batch("e5f6", "12", "2024", BatchStatus::Failed),
        ]);
        store
    }

    #[test]
    fn filter_matches_month_year_and_id() {
        let mut store = store();
        store.search = "2025".to_string();
        assert_eq!(store.filtered().len(), 2);

        store.search = "a1b".to_string();
        let rows = store.filtered();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].batch_id, "A1B2");

        store.search = "12 2024".to_string();
        assert_eq!(store.filtered()[0].batch_id, "e5f6");
    }

    #[test]
    fn filter_matches_month_name() {
        let mut store = store();
        store.search = "march".to_string();
        let rows = store.filtered();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].period_label(), "March 2025");

        store.search = "March 2025".to_string();
        assert_eq!(store.filtered().len(), 1);

        store.search = "03".to_string();
        assert_eq!(store.filtered()[0].batch_id, "A1B2");

        store.search = "december".to_string();
        assert_eq!(store.filtered()[0].batch_id, "e5f6");
    }

    #[test]
    fn no_match_yields_zero_rows() {
        let mut store = store();
        store.search = "zzz".to_string();
        assert!(store.filtered().is_empty());
        assert_eq!(store.footer_text(), "Showing 0 of 3 uploads");
    }

    #[test]
    fn status_never_regresses_locally() {
        let mut store = store();
        assert!(store.set_status("A1B2", BatchStatus::Processing));
        assert!(!store.set_status("A1B2", BatchStatus::Pending));
        assert!(store.set_status("A1B2", BatchStatus::Completed));
        assert!(!store.set_status("A1B2", BatchStatus::Processing));
        assert!(!store.set_status("missing", BatchStatus::Processing));
    }

    #[test]
    fn replace_drops_stale_busy_flags() {
        let mut store = store();
        store.set_busy("A1B2", true);
        store.set_busy("gone", true);
        store.replace(store.batches.clone());
        assert!(store.is_busy("A1B2"));
        assert!(!store.is_busy("gone"));
    }

    #[test]
    fn remove_clears_details() {
        let mut store = store();
        store.details.insert("c3d4".to_string(), ProcessingStatus::default());
        store.expanded = Some("c3d4".to_string());
        assert!(store.remove("c3d4"));
        assert!(store.find("c3d4").is_none());
        assert!(store.details.is_empty());
        assert!(store.expanded.is_none());
        assert!(!store.remove("c3d4"));
    }
}
