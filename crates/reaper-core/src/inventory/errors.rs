use crate::errors::ReaperError;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Failed to read inventory '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse inventory '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Failed to write inventory '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

impl ReaperError for InventoryError {
    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::ReadFailed { .. } => "INVENTORY_READ_FAILED",
            InventoryError::ParseFailed { .. } => "INVENTORY_PARSE_FAILED",
            InventoryError::WriteFailed { .. } => "INVENTORY_WRITE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            InventoryError::ReadFailed { .. } | InventoryError::ParseFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failed() {
        let error = InventoryError::ParseFailed {
            path: "inventory.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse inventory 'inventory.json': expected value at line 1 column 1"
        );
        assert_eq!(error.error_code(), "INVENTORY_PARSE_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_write_failed_is_not_user_error() {
        let error = InventoryError::WriteFailed {
            path: "inventory.json".to_string(),
            message: "read-only file system".to_string(),
        };
        assert_eq!(error.error_code(), "INVENTORY_WRITE_FAILED");
        assert!(!error.is_user_error());
    }
}
