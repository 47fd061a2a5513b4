use thiserror::Error;

/// The four failure kinds the HTTP layer maps onto response statuses.
///
/// Every failure from the Instagram source collapses into exactly one of
/// these; deserialization and unexpected-status problems land in `Other`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("profile '{username}' not found")]
    NotFound { username: String },

    #[error("failed to reach instagram: {reason}")]
    Connection { reason: String },

    #[error("profile '{username}' requires login to access")]
    LoginRequired { username: String },

    #[error("{0}")]
    Other(String),
}
