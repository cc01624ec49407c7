use crate::domain::model::{FetchError, ResponsePayload, StatusEntry};
use async_trait::async_trait;

/// 對單一狀態項目發出一次遠端讀取；失敗以 `FetchError` 回傳，不重試
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn fetch(&self, entry: StatusEntry) -> Result<ResponsePayload, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn status_endpoint(&self) -> &str;
    fn timeout_probe_url(&self) -> &str;
    fn timeout_probe_ms(&self) -> u64;
    fn request_timeout_secs(&self) -> u64;
    fn status_codes(&self) -> &[StatusEntry];
}
