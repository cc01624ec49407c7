pub mod classifier;
pub mod engine;
pub mod explorer;
pub mod probe;
pub mod scenarios;
pub mod truthiness;

pub use crate::domain::model::{FetchError, FetchState, ResponsePayload, StatusEntry};
pub use crate::domain::ports::{ConfigProvider, StatusProbe};
pub use crate::utils::error::Result;
