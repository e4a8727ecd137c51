use serde::{Deserialize, Serialize};
use std::fmt;

use super::api::{string_or_number, ApiMessage};

/// Lifecycle of an uploaded batch: pending -> processing -> completed | failed
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BatchStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Unknown(String),
}

impl From<String> for BatchStatus {
    fn from(raw: String) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" | "uploaded" => BatchStatus::Pending,
            "processing" | "in_progress" => BatchStatus::Processing,
            "completed" | "processed" | "emailed" | "sent" => BatchStatus::Completed,
            "failed" => BatchStatus::Failed,
            s if s.ends_with("_failed") => BatchStatus::Failed,
            _ => BatchStatus::Unknown(raw),
        }
    }
}

impl From<BatchStatus> for String {
    fn from(status: BatchStatus) -> Self {
        status.as_str().to_string()
    }
}

impl BatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BatchStatus::Pending => "pending",
            BatchStatus::Processing => "processing",
            BatchStatus::Completed => "completed",
            BatchStatus::Failed => "failed",
            BatchStatus::Unknown(raw) => raw.as_str(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            BatchStatus::Pending => "Pending".to_string(),
            BatchStatus::Processing => "Processing".to_string(),
            BatchStatus::Completed => "Completed".to_string(),
            BatchStatus::Failed => "Failed".to_string(),
            BatchStatus::Unknown(raw) if raw.is_empty() => "Unknown".to_string(),
            BatchStatus::Unknown(raw) => raw.clone(),
        }
    }

    /// Position in the lifecycle; unknown statuses have none
    pub fn rank(&self) -> Option<u8> {
        match self {
            BatchStatus::Pending => Some(0),
            BatchStatus::Processing => Some(1),
            BatchStatus::Completed | BatchStatus::Failed => Some(2),
            BatchStatus::Unknown(_) => None,
        }
    }

    /// True when moving from `self` to `next` does not go backwards
    pub fn can_advance_to(&self, next: &BatchStatus) -> bool {
        match (self.rank(), next.rank()) {
            (Some(current), Some(target)) => target > current,
            _ => true,
        }
    }

    /// Slips can only be generated for a batch nobody has processed yet
    pub fn can_send_slips(&self) -> bool {
        matches!(self, BatchStatus::Pending)
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, BatchStatus::Failed)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BatchStatus::Pending => "badge badge-pending",
            BatchStatus::Processing => "badge badge-processing",
            BatchStatus::Completed => "badge badge-completed",
            BatchStatus::Failed => "badge badge-failed",
            BatchStatus::Unknown(_) => "badge",
        }
    }
}

impl Default for BatchStatus {
    fn default() -> Self {
        BatchStatus::Pending
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadBatch {
    #[serde(deserialize_with = "string_or_number")]
    pub batch_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub upload_time: String,
    #[serde(default)]
    pub record_count: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub month: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub status: BatchStatus,
}

impl UploadBatch {
    /// Text the listing search box matches against: the raw period, the
    /// label shown in the Month column and the id
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.month, self.year, self.period_label(), self.batch_id).to_lowercase()
    }

    pub fn period_label(&self) -> String {
        format!("{} {}", crate::utils::month_label(&self.month), self.year)
            .trim()
            .to_string()
    }
}

/// `GET salary/batches`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct BatchListResponse {
    #[serde(flatten)]
    pub envelope: ApiMessage,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub data: Vec<UploadBatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing() {
        assert_eq!(BatchStatus::from("pending".to_string()), BatchStatus::Pending);
        assert_eq!(BatchStatus::from("Completed".to_string()), BatchStatus::Completed);
        assert_eq!(BatchStatus::from("email_failed".to_string()), BatchStatus::Failed);
        assert_eq!(
            BatchStatus::from("archived".to_string()),
            BatchStatus::Unknown("archived".to_string())
        );
    }

    #[test]
    fn lifecycle_is_monotonic() {
        assert!(BatchStatus::Pending.can_advance_to(&BatchStatus::Processing));
        assert!(BatchStatus::Processing.can_advance_to(&BatchStatus::Completed));
        assert!(BatchStatus::Processing.can_advance_to(&BatchStatus::Failed));
        assert!(!BatchStatus::Processing.can_advance_to(&BatchStatus::Pending));
        assert!(!BatchStatus::Completed.can_advance_to(&BatchStatus::Processing));
        assert!(!BatchStatus::Failed.can_advance_to(&BatchStatus::Completed));
    }

    #[test]
    fn batch_list_from_server() {
        let json = r#"{"status":"success","count":2,"data":[
            {"batch_id":"a1b2","file_name":"march_2025.xlsx","upload_time":"Sat, 15 Mar 2025 10:30:00 GMT",
             "record_count":124,"month":"03","year":"2025","status":"pending"},
            {"batch_id":"c3d4","file_name":"feb.csv","upload_time":"2025-02-15T09:00:00",
             "record_count":122,"month":"02","year":2025,"status":"completed"}
        ]}"#;
        let list: BatchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.envelope.status, "success");
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[1].year, "2025");
        assert_eq!(list.data[1].status, BatchStatus::Completed);
        assert_eq!(list.data[0].period_label(), "March 2025");
        assert_eq!(list.data[0].search_text(), "03 2025 march 2025 a1b2");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&BatchStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
