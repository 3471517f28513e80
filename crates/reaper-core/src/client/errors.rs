use crate::errors::ReaperError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Account '{account}' is not accessible: {message}")]
    ContextUnavailable { account: String, message: String },

    #[error("Failed to fetch metadata for account '{account}': {message}")]
    FetchFailed { account: String, message: String },

    #[error("Resource '{id}' not found")]
    NotFound { id: String },

    #[error("Failed to delete '{id}': {message}")]
    DeleteFailed { id: String, message: String },
}

impl ReaperError for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            ClientError::ContextUnavailable { .. } => "CLIENT_CONTEXT_UNAVAILABLE",
            ClientError::FetchFailed { .. } => "CLIENT_FETCH_FAILED",
            ClientError::NotFound { .. } => "CLIENT_NOT_FOUND",
            ClientError::DeleteFailed { .. } => "CLIENT_DELETE_FAILED",
        }
    }
}
