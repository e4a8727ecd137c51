// ============================================================================
// UPLOAD VIEWMODEL - file checks, upload, slip generation
// ============================================================================
// Nothing reaches the network until the file and the period pass the local
// checks below.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::config::UploadConfig;
use crate::models::{SelectedFile, UploadDetails};
use crate::services::{ApiError, PortalApi};
use crate::utils::MONTHS;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    /// Rejected locally, no request made
    Validation(String),
    Api(ApiError),
}

impl UploadError {
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Validation(message) => message.clone(),
            UploadError::Api(e) => e.user_message(),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Validation(message) => write!(f, "Validation: {}", message),
            UploadError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl From<ApiError> for UploadError {
    fn from(e: ApiError) -> Self {
        UploadError::Api(e)
    }
}

fn invalid(message: impl Into<String>) -> UploadError {
    UploadError::Validation(message.into())
}

/// Extension allow-list (case-insensitive) and inclusive size cap
pub fn validate_file(file: &SelectedFile, config: &UploadConfig) -> Result<(), UploadError> {
    let allowed = file
        .extension()
        .map(|ext| config.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);
    if !allowed {
        return Err(invalid(format!(
            "Invalid file type. Please upload Excel files only ({}).",
            config
                .allowed_extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    if file.size > config.max_size_bytes() {
        return Err(invalid(format!(
            "File size exceeds the {}MB limit.",
            config.max_size_mb
        )));
    }
    Ok(())
}

/// What the drop area or file input handed over: exactly one valid file
pub fn validate_selection(
    mut files: Vec<SelectedFile>,
    config: &UploadConfig,
) -> Result<SelectedFile, UploadError> {
    match files.len() {
        0 => Err(invalid("Please select a file to upload.")),
        1 => {
            let file = files.remove(0);
            validate_file(&file, config)?;
            Ok(file)
        }
        _ => Err(invalid("Only one file can be uploaded at a time.")),
    }
}

pub fn is_valid_month(month: &str) -> bool {
    MONTHS.iter().any(|(value, _)| *value == month)
}

pub fn is_valid_year(year: &str) -> bool {
    year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())
}

/// Everything a submit needs, checked in the order the form shows it
pub fn validate_submission(
    file: Option<&SelectedFile>,
    month: &str,
    year: &str,
    config: &UploadConfig,
) -> Result<(), UploadError> {
    let file = file.ok_or_else(|| invalid("Please select a file to upload."))?;
    validate_file(file, config)?;
    if !is_valid_month(month) {
        return Err(invalid("Please select a month."));
    }
    if !is_valid_year(year) {
        return Err(invalid("Please select a year."));
    }
    Ok(())
}

pub struct UploadViewModel {
    api: Rc<dyn PortalApi>,
    config: UploadConfig,
}

impl UploadViewModel {
    pub fn new(api: Rc<dyn PortalApi>, config: UploadConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Uploads the spreadsheet; `Ok(None)` when the server parsed it but
    /// returned no preview
    pub async fn upload(
        &self,
        file: Option<&SelectedFile>,
        month: &str,
        year: &str,
    ) -> Result<Option<UploadDetails>, UploadError> {
        validate_submission(file, month, year, &self.config)?;
        let Some(file) = file else {
            return Err(invalid("Please select a file to upload."));
        };

        let response = self.api.upload_salary_file(month, year, file).await?;
        match &response.details {
            Some(details) => log::info!(
                "✅ {} parsed: {} employees in batch {}",
                file.name,
                details.employee_count(),
                details.batch_id
            ),
            None => log::warn!("⚠️ {} uploaded but no preview returned", file.name),
        }
        Ok(response.details)
    }

    /// "Generate Salary Slips" from the preview
    pub async fn generate_slips(&self, batch_id: &str) -> Result<String, ApiError> {
        if batch_id.is_empty() {
            return Err(ApiError::Request("Upload did not return a batch id".to_string()));
        }
        let response = self.api.send_slips(batch_id).await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Salary slips are being generated and sent.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{UploadStatus, UploadStore, UploadTab};
    use crate::test_support::{server_error, MockApi};
    use futures::executor::block_on;
    use serde_json::json;

    const MB: u64 = 1024 * 1024;

    fn vm(api: &Rc<MockApi>) -> UploadViewModel {
        UploadViewModel::new(api.clone(), UploadConfig::default())
    }

    fn records(n: usize) -> Vec<serde_json::Value> {
        (0..n)
            .map(|i| {
                json!({
                    "employee_id": format!("EMP{:03}", i + 1),
                    "name": format!("Employee {}", i + 1),
                    "email": format!("e{}@acme.io", i + 1),
                    "department": "Engineering",
                    "position": "Developer",
                    "basic_salary": 5000, "allowances": 1200, "deductions": 800, "net_salary": 5400,
                    "status": "pending"
                })
            })
            .collect()
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let config = UploadConfig::default();
        for name in ["a.xlsx", "b.XLS", "c.Csv"] {
            assert!(validate_file(&SelectedFile::new(name, 10), &config).is_ok(), "{}", name);
        }
        let err = validate_file(&SelectedFile::new("slips.pdf", 10), &config).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Invalid file type. Please upload Excel files only (.xlsx, .xls, .csv)."
        );
    }

    #[test]
    fn size_cap_is_inclusive() {
        let config = UploadConfig::default();
        assert!(validate_file(&SelectedFile::new("a.xlsx", 10 * MB), &config).is_ok());
        let err = validate_file(&SelectedFile::new("a.xlsx", 10 * MB + 1), &config).unwrap_err();
        assert_eq!(err.user_message(), "File size exceeds the 10MB limit.");
    }

    #[test]
    fn selection_takes_exactly_one_file() {
        let config = UploadConfig::default();
        assert!(validate_selection(vec![], &config).is_err());
        let two = vec![SelectedFile::new("a.xlsx", 1), SelectedFile::new("b.xlsx", 1)];
        assert_eq!(
            validate_selection(two, &config),
            Err(UploadError::Validation("Only one file can be uploaded at a time.".to_string()))
        );
        let one = validate_selection(vec![SelectedFile::new("a.csv", 1)], &config).unwrap();
        assert_eq!(one.name, "a.csv");
    }

    #[test]
    fn invalid_files_never_reach_the_network() {
        let api = MockApi::new();
        let vm = vm(&api);

        let wrong_type = SelectedFile::new("payroll.pdf", 100);
        assert!(block_on(vm.upload(Some(&wrong_type), "03", "2025")).is_err());

        let too_big = SelectedFile::new("payroll.xlsx", 11 * MB);
        assert!(block_on(vm.upload(Some(&too_big), "03", "2025")).is_err());

        assert!(block_on(vm.upload(None, "03", "2025")).is_err());

        assert!(api.calls().is_empty());
    }

    #[test]
    fn period_is_required() {
        let api = MockApi::new();
        let vm = vm(&api);
        let file = SelectedFile::new("march_2025.xlsx", 100);

        let err = block_on(vm.upload(Some(&file), "", "2025")).unwrap_err();
        assert_eq!(err.user_message(), "Please select a month.");
        let err = block_on(vm.upload(Some(&file), "13", "2025")).unwrap_err();
        assert_eq!(err.user_message(), "Please select a month.");
        let err = block_on(vm.upload(Some(&file), "03", "")).unwrap_err();
        assert_eq!(err.user_message(), "Please select a year.");
        assert!(api.calls().is_empty());
    }

    #[test]
    fn successful_upload_fills_preview() {
        let api = MockApi::new();
        api.respond(
            "upload",
            Ok(json!({
                "status": "success",
                "message": "Salary data processed and stored successfully",
                "details": {
                    "month": "03", "year": "2025", "records_processed": 5,
                    "total_basic_salary": 25000, "total_allowances": 6000, "total_net_salary": 27000,
                    "batch_id": "batch-0325", "salary_records": records(5)
                }
            })),
        );
        let vm = vm(&api);
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march_2025.xlsx", 48 * 1024));

        store.begin_upload();
        let result = block_on(vm.upload(store.file.as_ref(), &store.month, &store.year));
        match result {
            Ok(details) => store.finish_success(details),
            Err(e) => store.finish_error(e.user_message()),
        }

        assert_eq!(store.status, UploadStatus::Success);
        assert_eq!(store.active_tab, UploadTab::Preview);
        let preview = store.preview.as_ref().unwrap();
        assert_eq!(preview.salary_records.len(), 5);
        assert_eq!(preview.employee_count(), 5);
        assert_eq!(api.calls_to("upload")[0].arg, "03 2025 march_2025.xlsx");
    }

    #[test]
    fn employee_count_matches_returned_rows() {
        let api = MockApi::new();
        api.respond(
            "upload",
            Ok(json!({
                "status": "success",
                "details": {
                    "month": "03", "year": "2025", "records_processed": 3,
                    "batch_id": "batch-0325", "salary_records": records(3)
                }
            })),
        );
        let file = SelectedFile::new("march_2025.xlsx", 2048);

        let details = block_on(vm(&api).upload(Some(&file), "03", "2025")).unwrap().unwrap();
        assert_eq!(details.employee_count(), details.salary_records.len());

        api.respond(
            "upload",
            Ok(json!({
                "status": "success",
                "details": { "month": "03", "year": "2025", "batch_id": "batch-0325", "salary_records": records(4) }
            })),
        );
        let details = block_on(vm(&api).upload(Some(&file), "03", "2025")).unwrap().unwrap();
        assert_eq!(details.employee_count(), details.salary_records.len());
        assert_eq!(details.employee_count(), 4);
    }

    #[test]
    fn failed_upload_shows_server_message() {
        let api = MockApi::new();
        api.respond("upload", Err(server_error(400, "Missing required columns: net_salary")));
        let vm = vm(&api);
        let mut store = UploadStore::new("03", "2025");
        store.set_file(SelectedFile::new("march_2025.xlsx", 1024));

        store.begin_upload();
        match block_on(vm.upload(store.file.as_ref(), &store.month, &store.year)) {
            Ok(details) => store.finish_success(details),
            Err(e) => store.finish_error(e.user_message()),
        }

        assert_eq!(store.status, UploadStatus::Error);
        assert_eq!(store.error.as_deref(), Some("Missing required columns: net_salary"));
        assert!(!store.can_preview());
    }

    #[test]
    fn generate_slips_uses_returned_batch() {
        let api = MockApi::new();
        api.respond("send_slips", Ok(json!({"status":"success","message":"Processed 5 records"})));

        let message = block_on(vm(&api).generate_slips("batch-0325")).unwrap();

        assert_eq!(message, "Processed 5 records");
        assert_eq!(api.calls_to("send_slips")[0].arg, "batch-0325");
        assert!(block_on(vm(&api).generate_slips("")).is_err());
        assert_eq!(api.calls_to("send_slips").len(), 1);
    }
}
