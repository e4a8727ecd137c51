use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Accepts `"2025"`, `2025` or `null` for fields the server stores loosely
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Numeric amounts that may come back as strings from spreadsheet parsing
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or_default(),
        serde_json::Value::String(s) => s.replace(',', "").trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Envelope shared by every endpoint: `{"status": "success" | "error", "message": ...}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET process/status/{batch_id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProcessingStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub batch_id: String,
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub status_counts: HashMap<String, u32>,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default)]
    pub errors: Vec<RecordError>,
}

impl ProcessingStatus {
    /// Status counts sorted by name so rendering is stable
    pub fn sorted_counts(&self) -> Vec<(String, u32)> {
        let mut counts: Vec<_> = self
            .status_counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        counts.sort();
        counts
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RecordError {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

/// `POST process/retry/{batch_id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RetryResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<RetryResults>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RetryResults {
    #[serde(default)]
    pub total_retried: u32,
    #[serde(default)]
    pub successful: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub errors: Vec<RecordError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_status_from_server_payload() {
        let json = r#"{
            "status": "success",
            "batch_id": "b-42",
            "total_records": 3,
            "status_counts": {"completed": 2, "email_failed": 1},
            "completion_percentage": 66.67,
            "errors": [{"employee_id": "EMP003", "name": "Robert", "status": "email_failed", "message": "SMTP timeout"}]
        }"#;
        let status: ProcessingStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.total_records, 3);
        assert_eq!(
            status.sorted_counts(),
            vec![("completed".to_string(), 2), ("email_failed".to_string(), 1)]
        );
        assert_eq!(status.errors[0].message.as_deref(), Some("SMTP timeout"));
    }

    #[test]
    fn retry_errors_use_error_field() {
        let json = r#"{"status":"success","message":"Retry processing completed",
            "results":{"total_retried":1,"successful":0,"failed":1,
            "errors":[{"employee_id":"E1","name":"A","error":"bad address"}]}}"#;
        let retry: RetryResponse = serde_json::from_str(json).unwrap();
        let results = retry.results.unwrap();
        assert_eq!(results.failed, 1);
        assert_eq!(results.errors[0].message.as_deref(), Some("bad address"));
    }
}
