use crate::config::toml_config::SandboxToml;
use crate::config::ExplorerSettings;
use crate::domain::model::{OutputFormat, StatusEntry};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sandbox-explorer")]
#[command(about = "Browse the sandbox demo pages from the terminal")]
pub struct CliConfig {
    /// Page to open: /, /http/axios, /ternary/SimpleTernary, /ternary/ternaryOrAnd
    #[arg(default_value = "/")]
    pub path: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the status echo service")]
    pub status_endpoint: Option<String>,

    #[arg(long, help = "Unreachable URL used by the TIMEOUT probe")]
    pub timeout_probe_url: Option<String>,

    #[arg(long)]
    pub timeout_probe_ms: Option<u64>,

    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_delimiter = ',', help = "Status codes to probe, e.g. 200,404,TIMEOUT")]
    pub codes: Vec<StatusEntry>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 預設值 ← 設定檔 ← 命令列參數
    pub fn resolve_settings(&self) -> Result<ExplorerSettings> {
        let mut settings = ExplorerSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            SandboxToml::from_file(path)?.apply_to(&mut settings)?;
        }

        if let Some(endpoint) = &self.status_endpoint {
            settings.status_endpoint = endpoint.clone();
        }
        if let Some(url) = &self.timeout_probe_url {
            settings.timeout_probe_url = url.clone();
        }
        if let Some(ms) = self.timeout_probe_ms {
            settings.timeout_probe_ms = ms;
        }
        if let Some(secs) = self.request_timeout_secs {
            settings.request_timeout_secs = secs;
        }
        if !self.codes.is_empty() {
            settings.status_codes = self.codes.clone();
        }
        if self.log_json {
            settings.log_json = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}
