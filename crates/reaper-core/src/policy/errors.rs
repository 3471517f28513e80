use crate::errors::ReaperError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("Creation timestamp is missing")]
    MissingCreationTime,

    #[error("Creation timestamp '{value}' is not valid RFC 3339: {message}")]
    InvalidCreationTime { value: String, message: String },
}

impl ReaperError for PolicyError {
    fn error_code(&self) -> &'static str {
        match self {
            PolicyError::MissingCreationTime => "POLICY_MISSING_CREATION_TIME",
            PolicyError::InvalidCreationTime { .. } => "POLICY_INVALID_CREATION_TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_creation_time() {
        let error = PolicyError::MissingCreationTime;
        assert_eq!(error.to_string(), "Creation timestamp is missing");
        assert_eq!(error.error_code(), "POLICY_MISSING_CREATION_TIME");
    }

    #[test]
    fn test_invalid_creation_time() {
        let error = PolicyError::InvalidCreationTime {
            value: "yesterday".to_string(),
            message: "input contains invalid characters".to_string(),
        };
        assert!(error.to_string().contains("'yesterday'"));
        assert_eq!(error.error_code(), "POLICY_INVALID_CREATION_TIME");
        assert!(!error.is_user_error());
    }
}
