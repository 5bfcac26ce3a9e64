use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum StatsError {
    // Transport failures: DNS, connection refused, timeouts
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // The backend answered with a non-success status
    HttpStatus {
        url: String,
        status: u16,
    },

    // The body came back but was not the expected JSON shape
    DecodeError {
        endpoint: String,
        reason: String,
    },

    // Domain outcome: the user endpoint answered 404 for this DNI
    UserNotFound {
        dni: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
}

impl StatsError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { operation, url, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg
            }
            Self::HttpStatus { status, .. } => {
                format!("HTTP error! status: {}", status)
            }
            Self::DecodeError { endpoint, reason } => {
                format!("Malformed response from {}: {}", endpoint, reason)
            }
            Self::UserNotFound { dni } => {
                format!("No responses recorded for DNI: {}", dni)
            }
            Self::ConfigurationError { message, suggestion } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for StatsError {}

impl From<reqwest::Error> for StatsError {
    fn from(error: reqwest::Error) -> Self {
        StatsError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for nutristats operations
pub type StatsResult<T> = Result<T, StatsError>;
