use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgencyError {
    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No property with id '{property_id}'")]
    NotFound { property_id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Agency lock poisoned: {message}")]
    LockPoisoned { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Configuration,
    System,
}

impl AgencyError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        AgencyError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn not_found(property_id: &str) -> Self {
        AgencyError::NotFound {
            property_id: property_id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AgencyError::ValidationError { .. } => ErrorCategory::Validation,
            AgencyError::NotFound { .. } => ErrorCategory::Lookup,
            AgencyError::ConfigError { .. } => ErrorCategory::Configuration,
            AgencyError::IoError(_) | AgencyError::LockPoisoned { .. } => ErrorCategory::System,
        }
    }

    /// Short message for terminal output, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AgencyError::ValidationError { field, reason, .. } => {
                format!("Rejected {}: {}", field, reason)
            }
            AgencyError::NotFound { property_id } => {
                format!("Property {} is not listed with this agency", property_id)
            }
            AgencyError::ConfigError { message } => format!("Catalog file is invalid: {}", message),
            AgencyError::IoError(e) => format!("Could not read catalog file: {}", e),
            AgencyError::LockPoisoned { .. } => {
                "The agency became unusable after a failed update".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AgencyError>;
