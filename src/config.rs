use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/api/";
const DEFAULT_TEMPLATE_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1iapUjPkoSrHXFAhv1hoCwAEYpUkP21eIqZUXcPWRXSc/export?format=xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub upload: UploadConfig,
    pub template_sheet_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size_mb: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_mb: 10,
            allowed_extensions: vec!["xlsx".to_string(), "xls".to_string(), "csv".to_string()],
        }
    }
}

impl UploadConfig {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }

    /// Value for the `accept` attribute of the file input, e.g. ".xlsx,.xls,.csv"
    pub fn accept_attr(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            upload: UploadConfig::default(),
            template_sheet_url: DEFAULT_TEMPLATE_SHEET_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            upload: UploadConfig {
                max_size_mb: option_env!("MAX_UPLOAD_SIZE_MB")
                    .unwrap_or("10")
                    .parse()
                    .unwrap_or(defaults.upload.max_size_mb),
                ..defaults.upload
            },
            template_sheet_url: option_env!("TEMPLATE_SHEET_URL")
                .unwrap_or(DEFAULT_TEMPLATE_SHEET_URL)
                .to_string(),
        }
    }

    /// API base URL, always with a trailing slash so paths can be appended
    pub fn api_base_url(&self) -> String {
        if self.backend_url.ends_with('/') {
            self.backend_url.clone()
        } else {
            format!("{}/", self.backend_url)
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = AppConfig {
            backend_url: "https://api.example.com/api".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.example.com/api/");

        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn upload_limits() {
        let upload = UploadConfig::default();
        assert_eq!(upload.max_size_bytes(), 10 * 1024 * 1024);
        assert_eq!(upload.accept_attr(), ".xlsx,.xls,.csv");
    }
}
