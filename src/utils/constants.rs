//! Storage keys and REST paths shared by services and hooks.

/// Local storage key holding the raw bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";
/// Local storage key holding the JSON-encoded user record
pub const STORAGE_KEY_USER: &str = "user";
/// Local storage key holding the selected colour theme
pub const STORAGE_KEY_THEME: &str = "vite-ui-theme";

pub const API_REGISTER: &str = "auth/register";
pub const API_LOGIN: &str = "auth/login";
pub const API_PROFILE: &str = "auth/profile";
pub const API_DASHBOARD: &str = "auth/dashboard";
pub const API_CHANGE_PASSWORD: &str = "auth/change-password";
pub const API_BATCHES: &str = "salary/batches";
pub const API_UPLOAD: &str = "salary/upload";
pub const API_SALARY_DATA: &str = "salary/salary-data";
pub const API_SEND_SLIPS: &str = "process/generate-and-send";
pub const API_PROCESS_STATUS: &str = "process/status";
pub const API_PROCESS_RETRY: &str = "process/retry";

/// Toast lifetime before auto-dismiss
pub const TOAST_DURATION_MS: u32 = 4_000;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
