use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("A contact submission is already in flight")]
    SubmissionInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::ApiError(_) => ErrorCategory::Network,
            PortfolioError::SerializationError(_) => ErrorCategory::Data,
            PortfolioError::IoError(_) => ErrorCategory::System,
            PortfolioError::ConfigError { .. } | PortfolioError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PortfolioError::ValidationError { .. } | PortfolioError::SubmissionInFlight => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::SubmissionInFlight => ErrorSeverity::Low,
            PortfolioError::ApiError(_) | PortfolioError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            PortfolioError::ValidationError { .. }
            | PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PortfolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::ApiError(_) => "Could not reach the portfolio backend".to_string(),
            PortfolioError::SerializationError(_) => {
                "The portfolio backend returned an unexpected response".to_string()
            }
            PortfolioError::IoError(e) => format!("File system error: {}", e),
            PortfolioError::ConfigError { message } => format!("Invalid configuration: {}", message),
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            PortfolioError::ValidationError { field, reason } => {
                format!("Please check the '{}' field: {}", field, reason)
            }
            PortfolioError::SubmissionInFlight => {
                "Your previous message is still being sent".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend URL is correct and reachable",
            ErrorCategory::Data => "Verify the backend speaks the expected JSON format",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Fill in all required fields and try again",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
