use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid record: field '{field}' {reason}")]
    InvalidRecord { field: String, reason: String },

    #[error("'{field}' must be a sequence")]
    NotASequence { field: String },

    #[error("'{field}' must not be empty")]
    EmptyCollection { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl KitError {
    pub fn invalid_record(field: &str, reason: &str) -> Self {
        Self::InvalidRecord {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_value(field: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 呼叫端輸入錯誤 (相對於讀檔/設定錯誤)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord { .. }
                | Self::NotASequence { .. }
                | Self::EmptyCollection { .. }
                | Self::InvalidValue { .. }
                | Self::MissingField { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRecord { field, reason } => {
                format!("Thali data is malformed: '{}' {}", field, reason)
            }
            Self::NotASequence { field } | Self::EmptyCollection { field } => {
                format!("Expected a non-empty list for '{}'", field)
            }
            Self::InvalidValue { field, reason, .. } => {
                format!("Please check '{}': {}", field, reason)
            }
            Self::MissingField { field } => format!("Please provide '{}'", field),
            Self::IoError(e) => format!("Could not read the menu file: {}", e),
            Self::SerializationError(e) => format!("Could not parse JSON: {}", e),
            Self::ConfigError { message } => format!("Menu configuration problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(KitError::invalid_record("price", "must be a finite number").is_invalid_input());
        assert!(KitError::EmptyCollection {
            field: "thalis".to_string()
        }
        .is_invalid_input());
        assert!(!KitError::ConfigError {
            message: "bad".to_string()
        }
        .is_invalid_input());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = KitError::invalid_value("decimal_places", 101, "must be between 0 and 100");
        assert_eq!(
            err.to_string(),
            "Invalid value for decimal_places: '101' (must be between 0 and 100)"
        );
        assert!(err.user_friendly_message().contains("decimal_places"));
    }
}
