use crate::domain::model::{FetchError, ResponsePayload, StatusEntry};
use crate::domain::ports::{ConfigProvider, StatusProbe};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client};
use std::time::{Duration, Instant};

/// 向狀態回聲服務發出單次 GET 的探針
#[derive(Debug, Clone)]
pub struct HttpStatusProbe {
    client: Client,
    status_endpoint: String,
    timeout_probe_url: String,
    timeout_probe: Duration,
    request_timeout: Duration,
}

impl HttpStatusProbe {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sandbox-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            status_endpoint: config.status_endpoint().trim_end_matches('/').to_string(),
            timeout_probe_url: config.timeout_probe_url().to_string(),
            timeout_probe: Duration::from_millis(config.timeout_probe_ms()),
            request_timeout: Duration::from_secs(config.request_timeout_secs()),
        })
    }

    pub fn url_for(&self, entry: &StatusEntry) -> String {
        match entry {
            StatusEntry::Numeric(code) => format!("{}/{}", self.status_endpoint, code),
            StatusEntry::TimeoutProbe => self.timeout_probe_url.clone(),
        }
    }

    fn timeout_for(&self, entry: &StatusEntry) -> Duration {
        match entry {
            StatusEntry::Numeric(_) => self.request_timeout,
            StatusEntry::TimeoutProbe => self.timeout_probe,
        }
    }

    fn classify_error(url: &str, timeout: Duration, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::timeout(url, timeout.as_millis())
        } else {
            FetchError::network(url, err.to_string())
        }
    }
}

/// 回應內容不是 JSON 時保留原始文字
fn parse_body(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => serde_json::Value::String(text),
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    async fn fetch(&self, entry: StatusEntry) -> std::result::Result<ResponsePayload, FetchError> {
        let url = self.url_for(&entry);
        let timeout = self.timeout_for(&entry);
        let started = Instant::now();

        tracing::debug!("Probing {} via GET {} (timeout {:?})", entry, url, timeout);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::classify_error(&url, timeout, e))?;

        let status = response.status();
        let final_url = response.url().to_string();
        let text = response
            .text()
            .await
            .map_err(|e| Self::classify_error(&url, timeout, e))?;
        let body = parse_body(text);

        if !status.is_success() {
            return Err(FetchError::status(final_url, status.as_u16(), body));
        }

        let description = body
            .get("description")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(ResponsePayload {
            status: status.as_u16(),
            url: final_url,
            description,
            body,
            settled_at: Utc::now(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}
