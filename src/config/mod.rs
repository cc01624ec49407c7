#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::StatusEntry;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_status_entries, validate_url, Validate,
};

pub const DEFAULT_STATUS_ENDPOINT: &str = "https://httpstat.us";
pub const DEFAULT_TIMEOUT_PROBE_URL: &str = "https://this-url-will-timeout.example";
pub const DEFAULT_TIMEOUT_PROBE_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_STATUS_CODES: [StatusEntry; 7] = [
    StatusEntry::Numeric(200),
    StatusEntry::Numeric(400),
    StatusEntry::Numeric(401),
    StatusEntry::Numeric(403),
    StatusEntry::Numeric(404),
    StatusEntry::Numeric(500),
    StatusEntry::TimeoutProbe,
];

/// 合併預設值、設定檔與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSettings {
    pub status_endpoint: String,
    pub timeout_probe_url: String,
    pub timeout_probe_ms: u64,
    pub request_timeout_secs: u64,
    pub status_codes: Vec<StatusEntry>,
    pub log_json: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            timeout_probe_url: DEFAULT_TIMEOUT_PROBE_URL.to_string(),
            timeout_probe_ms: DEFAULT_TIMEOUT_PROBE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            status_codes: DEFAULT_STATUS_CODES.to_vec(),
            log_json: false,
        }
    }
}

impl ConfigProvider for ExplorerSettings {
    fn status_endpoint(&self) -> &str {
        &self.status_endpoint
    }

    fn timeout_probe_url(&self) -> &str {
        &self.timeout_probe_url
    }

    fn timeout_probe_ms(&self) -> u64 {
        self.timeout_probe_ms
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn status_codes(&self) -> &[StatusEntry] {
        &self.status_codes
    }
}

impl Validate for ExplorerSettings {
    fn validate(&self) -> Result<()> {
        validate_url("http.status_endpoint", &self.status_endpoint)?;
        validate_url("http.timeout_probe_url", &self.timeout_probe_url)?;
        validate_positive_number("http.timeout_probe_ms", self.timeout_probe_ms, 1)?;
        validate_positive_number("http.request_timeout_secs", self.request_timeout_secs, 1)?;
        validate_status_entries("http.codes", &self.status_codes)?;
        Ok(())
    }
}
