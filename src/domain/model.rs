use crate::utils::error::SandboxError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 要探測的狀態項目：真實的 HTTP 狀態碼，或刻意逾時的探針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEntry {
    Numeric(u16),
    TimeoutProbe,
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEntry::Numeric(code) => write!(f, "{}", code),
            StatusEntry::TimeoutProbe => f.write_str("TIMEOUT"),
        }
    }
}

impl FromStr for StatusEntry {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("TIMEOUT") {
            return Ok(StatusEntry::TimeoutProbe);
        }

        trimmed
            .parse::<u16>()
            .map(StatusEntry::Numeric)
            .map_err(|e| SandboxError::InvalidConfigValueError {
                field: "codes".to_string(),
                value: trimmed.to_string(),
                reason: format!("Expected a status code or TIMEOUT: {}", e),
            })
    }
}

/// 狀態碼系列的分組鍵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Numeric(u16),
    Special,
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKey::Numeric(series) => write!(f, "{}", series),
            SeriesKey::Special => f.write_str("special"),
        }
    }
}

impl Serialize for SeriesKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Purple,
    Emerald,
    Blue,
    Amber,
    Rose,
    Gray,
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusColor::Purple => "purple",
            StatusColor::Emerald => "emerald",
            StatusColor::Blue => "blue",
            StatusColor::Amber => "amber",
            StatusColor::Rose => "rose",
            StatusColor::Gray => "gray",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesGroup {
    pub key: SeriesKey,
    pub title: String,
    pub entries: Vec<StatusEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePayload {
    pub status: u16,
    pub url: String,
    pub description: Option<String>,
    pub body: serde_json::Value,
    pub settled_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorKind {
    Network,
    Timeout,
    Status,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Status => "status",
        };
        f.write_str(name)
    }
}

/// 單一探測失敗；只存在於該單元的狀態中，不會往上拋
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{kind} error: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<serde_json::Value>,
    pub url: String,
}

impl FetchError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            message: message.into(),
            status: None,
            body: None,
            url: url.into(),
        }
    }

    pub fn timeout(url: impl Into<String>, timeout_ms: u128) -> Self {
        Self {
            kind: FetchErrorKind::Timeout,
            message: format!("timeout of {}ms exceeded", timeout_ms),
            status: None,
            body: None,
            url: url.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: format!("Request failed with status code {}", status),
            status: Some(status),
            body: Some(body),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "payload", rename_all = "lowercase")]
pub enum FetchState {
    Loading,
    Success(ResponsePayload),
    Error(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }
}

impl From<Result<ResponsePayload, FetchError>> for FetchState {
    fn from(outcome: Result<ResponsePayload, FetchError>) -> Self {
        match outcome {
            Ok(payload) => FetchState::Success(payload),
            Err(err) => FetchState::Error(err),
        }
    }
}

/// 模擬 JavaScript 的值，只涵蓋示範表格用得到的型別
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum JsValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<JsValue>),
    /// 已建立的 React 元素，以顯示文字代表
    Element(String),
}

impl JsValue {
    pub fn str(value: &str) -> Self {
        JsValue::Str(value.to_string())
    }

    pub fn element(label: &str) -> Self {
        JsValue::Element(label.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Ternary,
    LogicalAnd,
    DoubleNegation,
    /// `!!condition && element`
    GuardedAnd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorOutcome {
    pub kind: OperatorKind,
    pub expression: String,
    pub result: JsValue,
    pub is_good: bool,
    pub note: Option<String>,
}

/// 條件的取法：直接使用值，或取其 `.length`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Guard {
    Value,
    Length,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonScenario {
    pub label: String,
    pub declaration: String,
    pub subject: JsValue,
    pub guard: Guard,
    pub when_truthy: JsValue,
    pub when_falsy: JsValue,
    pub outcomes: [OperatorOutcome; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemoCategory {
    #[serde(rename = "HTTP")]
    Http,
    Syntax,
    Components,
}

impl fmt::Display for DemoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoCategory::Http => "HTTP",
            DemoCategory::Syntax => "Syntax",
            DemoCategory::Components => "Components",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoLink {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: DemoCategory,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
