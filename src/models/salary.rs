use serde::{Deserialize, Serialize};

use super::api::{number_or_string, string_or_number, ApiMessage};

/// One employee row parsed server-side from the uploaded spreadsheet
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SalaryRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub basic_salary: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub allowances: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub deductions: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub net_salary: f64,
    #[serde(default)]
    pub status: String,
}

/// Parse result returned by `POST salary/upload`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadDetails {
    #[serde(default, deserialize_with = "string_or_number")]
    pub month: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub records_processed: u32,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_basic_salary: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_allowances: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_net_salary: f64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub batch_id: String,
    #[serde(default)]
    pub salary_records: Vec<SalaryRecord>,
}

impl UploadDetails {
    /// Employees in the preview; falls back to the row count when the
    /// server omits `records_processed`
    pub fn employee_count(&self) -> usize {
        if self.records_processed > 0 {
            self.records_processed as usize
        } else {
            self.salary_records.len()
        }
    }

    pub fn total_deductions(&self) -> f64 {
        self.salary_records.iter().map(|r| r.deductions).sum()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub envelope: ApiMessage,
    #[serde(default)]
    pub details: Option<UploadDetails>,
}

/// File picked in the upload area. Only name and size take part in
/// validation; the browser handle is what gets sent.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            handle: None,
        }
    }

    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            handle: Some(file),
        }
    }

    /// Lower-cased extension without the dot
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
