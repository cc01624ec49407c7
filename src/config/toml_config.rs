use crate::config::ExplorerSettings;
use crate::domain::model::StatusEntry;
use crate::utils::error::{Result, SandboxError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SandboxToml {
    pub http: Option<HttpSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub status_endpoint: Option<String>,
    pub timeout_probe_url: Option<String>,
    pub timeout_probe_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub codes: Option<Vec<CodeSpec>>,
}

/// 設定檔中的狀態碼可寫成數字或字串，例如 `[200, "TIMEOUT"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeSpec {
    Numeric(u16),
    Named(String),
}

impl CodeSpec {
    pub fn to_entry(&self) -> Result<StatusEntry> {
        match self {
            CodeSpec::Numeric(code) => Ok(StatusEntry::Numeric(*code)),
            CodeSpec::Named(name) => name.parse().map_err(|_| {
                SandboxError::InvalidConfigValueError {
                    field: "http.codes".to_string(),
                    value: name.clone(),
                    reason: "Expected a status code or TIMEOUT".to_string(),
                }
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
}

impl SandboxToml {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SandboxError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SandboxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STATUS_ENDPOINT})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SandboxError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將設定檔中有寫的欄位覆蓋到目前設定
    pub fn apply_to(&self, settings: &mut ExplorerSettings) -> Result<()> {
        if let Some(http) = &self.http {
            if let Some(endpoint) = &http.status_endpoint {
                settings.status_endpoint = endpoint.clone();
            }
            if let Some(url) = &http.timeout_probe_url {
                settings.timeout_probe_url = url.clone();
            }
            if let Some(ms) = http.timeout_probe_ms {
                settings.timeout_probe_ms = ms;
            }
            if let Some(secs) = http.request_timeout_secs {
                settings.request_timeout_secs = secs;
            }
            if let Some(codes) = &http.codes {
                settings.status_codes = codes
                    .iter()
                    .map(CodeSpec::to_entry)
                    .collect::<Result<Vec<_>>>()?;
            }
        }

        if let Some(json) = self.logging.as_ref().and_then(|l| l.json) {
            settings.log_json = json;
        }

        Ok(())
    }
}
