use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SandboxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SandboxError::ApiError(_) => ErrorCategory::Network,
            SandboxError::IoError(_) => ErrorCategory::Io,
            SandboxError::SerializationError(_) => ErrorCategory::Data,
            SandboxError::ConfigError { .. }
            | SandboxError::ConfigValidationError { .. }
            | SandboxError::InvalidConfigValueError { .. }
            | SandboxError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SandboxError::SerializationError(_) => ErrorSeverity::Medium,
            SandboxError::ApiError(_)
            | SandboxError::ConfigError { .. }
            | SandboxError::ConfigValidationError { .. }
            | SandboxError::InvalidConfigValueError { .. }
            | SandboxError::MissingConfigError { .. } => ErrorSeverity::High,
            SandboxError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SandboxError::ApiError(_) => {
                "Check TLS support and proxy settings of the host".to_string()
            }
            SandboxError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SandboxError::SerializationError(_) => {
                "Retry with --format text to bypass JSON output".to_string()
            }
            SandboxError::ConfigError { .. } | SandboxError::ConfigValidationError { .. } => {
                "Fix the configuration file syntax and try again".to_string()
            }
            SandboxError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            SandboxError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SandboxError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            SandboxError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SandboxError::InvalidConfigValueError {
            field: "http.codes".to_string(),
            value: "abc".to_string(),
            reason: "not a status code".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("http.codes"));
        assert_eq!(
            err.user_friendly_message(),
            "Invalid setting http.codes: not a status code"
        );
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SandboxError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
