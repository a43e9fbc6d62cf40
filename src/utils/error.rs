use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecsError {
    #[error("Card \"{query}\" was not found")]
    CardNotFound { query: String },

    #[error("No recommendations page exists for \"{slug}\"")]
    RecommendationsNotFound { slug: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Upstream,
    Configuration,
    System,
}

impl RecsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecsError::CardNotFound { .. } | RecsError::RecommendationsNotFound { .. } => {
                ErrorCategory::NotFound
            }
            RecsError::ApiError(_)
            | RecsError::UpstreamStatusError { .. }
            | RecsError::SerializationError(_) => ErrorCategory::Upstream,
            RecsError::ConfigError { .. } | RecsError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RecsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the spelling of the card name",
            ErrorCategory::Upstream => "Scryfall or EDHREC may be offline, try again later",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecsError>;
