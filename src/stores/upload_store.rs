// ============================================================================
// UPLOAD STORE - one upload attempt
// ============================================================================
// Idle -> Uploading -> Success | Error. Transitions live here so the hook
// and the ViewModel tests share the same rules.
// ============================================================================

use crate::models::{SelectedFile, UploadDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadTab {
    #[default]
    Upload,
    Preview,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadStore {
    pub file: Option<SelectedFile>,
    pub month: String,
    pub year: String,
    pub status: UploadStatus,
    pub error: Option<String>,
    pub preview: Option<UploadDetails>,
    pub active_tab: UploadTab,
    pub sending_slips: bool,
    pub slips_sent: bool,
}

impl UploadStore {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
            ..Self::default()
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Preview is reachable only after a successful upload that returned data
    pub fn can_preview(&self) -> bool {
        self.status == UploadStatus::Success && self.preview.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && matches!(self.status, UploadStatus::Idle | UploadStatus::Error)
    }

    /// Returns false when the tab is not reachable
    pub fn select_tab(&mut self, tab: UploadTab) -> bool {
        if tab == UploadTab::Preview && !self.can_preview() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// A new file starts a new attempt
    pub fn set_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.status = UploadStatus::Idle;
        self.error = None;
        self.preview = None;
        self.active_tab = UploadTab::Upload;
        self.slips_sent = false;
    }

    pub fn reject_selection(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn remove_file(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.file = None;
        self.error = None;
        if self.status == UploadStatus::Error {
            self.status = UploadStatus::Idle;
        }
        true
    }

    /// "Clear All": back to Idle, keeping the chosen period
    pub fn clear(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        *self = Self::new(self.month.clone(), self.year.clone());
        true
    }

    pub fn set_period(&mut self, month: Option<String>, year: Option<String>) {
        if let Some(month) = month {
            self.month = month;
        }
        if let Some(year) = year {
            self.year = year;
        }
    }

    pub fn begin_upload(&mut self) {
        self.status = UploadStatus::Uploading;
        self.error = None;
        self.preview = None;
    }

    /// Jumps to the preview when the server sent one
    pub fn finish_success(&mut self, details: Option<UploadDetails>) {
        self.status = UploadStatus::Success;
        self.error = None;
        self.preview = details;
        self.active_tab = if self.preview.is_some() {
            UploadTab::Preview
        } else {
            UploadTab::Upload
        };
    }

    pub fn finish_error(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Error;
        self.error = Some(message.into());
        self.preview = None;
        self.active_tab = UploadTab::Upload;
    }

    /// Validation failure at submit time: stays Idle, no attempt was made
    pub fn block_submit(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Idle;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_tab_locked_until_success_with_data() {
        let mut store = UploadStore::new("03", "2025");
        assert!(!store.select_tab(UploadTab::Preview));

        store.set_file(SelectedFile::new("march.xlsx", 100));
        store.begin_upload();
        assert!(!store.select_tab(UploadTab::Preview));

        store.finish_error("Bad sheet");
        assert!(!store.can_preview());
        assert_eq!(store.active_tab, UploadTab::Upload);

        store.begin_upload();
        store.finish_success(Some(UploadDetails::default()));
        assert!(store.can_preview());
        assert_eq!(store.active_tab, UploadTab::Preview);
        assert!(store.select_tab(UploadTab::Upload));
        assert!(store.select_tab(UploadTab::Preview));
    }

    #[test]
    fn success_without_rows_keeps_preview_locked() {
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march.xlsx", 100));
        store.begin_upload();
        store.finish_success(None);
        assert_eq!(store.status, UploadStatus::Success);
        assert!(!store.select_tab(UploadTab::Preview));
        assert_eq!(store.active_tab, UploadTab::Upload);
    }

    #[test]
    fn file_cannot_be_removed_mid_upload() {
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march.xlsx", 100));
        store.begin_upload();
        assert!(!store.remove_file());
        assert!(!store.clear());
        assert!(store.file.is_some());
        assert!(!store.can_submit());
    }

    #[test]
    fn clear_resets_but_keeps_period() {
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march.xlsx", 100));
        store.begin_upload();
        store.finish_success(Some(UploadDetails::default()));

        assert!(store.clear());
        assert_eq!(store, UploadStore::new("03", "2025"));
    }

    #[test]
    fn new_file_discards_previous_preview() {
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march.xlsx", 100));
        store.finish_success(Some(UploadDetails::default()));
        store.set_file(SelectedFile::new("april.xlsx", 100));
        assert_eq!(store.status, UploadStatus::Idle);
        assert!(store.preview.is_none());
        assert!(store.can_submit());
    }
}
