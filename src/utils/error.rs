use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Distance lookup failed for '{destination}': {message}")]
    ResolverError {
        destination: String,
        message: String,
    },

    #[error("Geocoding failed for '{address}': {message}")]
    GeocodeError { address: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankerError::ApiError(_)
            | RankerError::ResolverError { .. }
            | RankerError::GeocodeError { .. } => ErrorCategory::Network,
            RankerError::ConfigValidationError { .. }
            | RankerError::InvalidConfigValueError { .. }
            | RankerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RankerError::CsvError(_) => ErrorCategory::Data,
            RankerError::IoError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a single failed lookup never aborts a run
            RankerError::ResolverError { .. } | RankerError::GeocodeError { .. } => {
                ErrorSeverity::Low
            }
            RankerError::ApiError(_) => ErrorSeverity::Medium,
            RankerError::CsvError(_)
            | RankerError::ConfigValidationError { .. }
            | RankerError::InvalidConfigValueError { .. }
            | RankerError::MissingConfigError { .. } => ErrorSeverity::High,
            RankerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0, // warning only
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RankerError::ApiError(_) => {
                "Check your network connection and that the open-data endpoint is reachable, then retry"
                    .to_string()
            }
            RankerError::ResolverError { .. } => {
                "Verify the origin address and the GOOGLE_MAPS_API_KEY quota".to_string()
            }
            RankerError::GeocodeError { .. } => {
                "Check the address spelling and the GOOGLE_MAPS_API_KEY value".to_string()
            }
            RankerError::CsvError(_) => {
                "Make sure the export file is not open in another program".to_string()
            }
            RankerError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            RankerError::MissingConfigError { field } => format!(
                "Provide '{}' in the config file, on the command line or via the environment",
                field
            ),
            RankerError::ConfigValidationError { .. }
            | RankerError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach a remote service: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Could not process school data: {}", self),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_errors_are_low_severity() {
        let err = RankerError::ResolverError {
            destination: "Calle Mayor 1".to_string(),
            message: "ZERO_RESULTS".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.to_string().contains("Calle Mayor 1"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let lookup = RankerError::GeocodeError {
            address: "Calle Mayor 1".to_string(),
            message: "OVER_QUERY_LIMIT".to_string(),
        };
        let config = RankerError::MissingConfigError {
            field: "resolver.api_key".to_string(),
        };
        let io = RankerError::IoError(std::io::Error::other("disk full"));

        assert_eq!(lookup.exit_code(), 0);
        assert_eq!(config.exit_code(), 1);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_config_errors_mention_the_field() {
        let err = RankerError::MissingConfigError {
            field: "resolver.api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("resolver.api_key"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
