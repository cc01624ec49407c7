pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::pages::{PageView, Route};
pub use config::ExplorerSettings;
pub use crate::core::{engine::SandboxEngine, probe::HttpStatusProbe};
pub use domain::model::{OutputFormat, StatusEntry};
pub use utils::error::{Result, SandboxError};
