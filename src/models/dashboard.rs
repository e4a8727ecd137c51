use serde::{Deserialize, Serialize};

use super::api::{string_or_number, ApiMessage};

/// Summary metrics shown in the home tiles
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_uploads: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub latest_upload_date: String,
    #[serde(default)]
    pub total_emails_sent: u32,
    #[serde(default)]
    pub pending_approvals: u32,
}

/// `GET auth/dashboard`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub envelope: ApiMessage,
    #[serde(default)]
    pub data: Option<DashboardStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_payload() {
        let json = r#"{"status":"success","data":{"total_uploads":12,"latest_upload_date":"2025-03-15",
            "total_emails_sent":1480,"pending_approvals":2}}"#;
        let response: DashboardResponse = serde_json::from_str(json).unwrap();
        let stats = response.data.unwrap();
        assert_eq!(stats.total_uploads, 12);
        assert_eq!(stats.pending_approvals, 2);
    }

    #[test]
    fn missing_latest_date_is_empty() {
        let json = r#"{"status":"success","data":{"total_uploads":0,"latest_upload_date":null}}"#;
        let response: DashboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.unwrap().latest_upload_date, "");
    }
}
