use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiaryError>;

#[derive(Debug, Error)]
pub enum DiaryError {
    /// Missing or malformed caller input. Never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Diary not found: {0}")]
    DiaryNotFound(String),

    /// The diary exists but holds no card with that id. Externally this is
    /// the same not-found outcome as a missing diary; callers should branch
    /// on [`DiaryError::is_not_found`] rather than the variant.
    #[error("Card not found: {1} (diary {0})")]
    CardNotFound(String, String),

    /// Raised by the store when an insert collides on `public_id`. The create
    /// path consumes this and retries with a fresh candidate; it reaching an
    /// API caller means the store was driven outside that path.
    #[error("Public id already in use: {0}")]
    DuplicatePublicId(String),

    /// The allocator hit its retry ceiling. Transient; the whole creation
    /// call is safe to retry.
    #[error("Could not allocate a unique public id")]
    AllocationExhausted,

    /// The underlying storage failed or is unreachable. Transient.
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiaryError {
    /// The single external NotFound outcome: a missing diary and a missing
    /// card within an existing diary are not distinguished at the contract
    /// boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DiaryError::DiaryNotFound(_) | DiaryError::CardNotFound(_, _))
    }

    /// Transient infrastructure faults, safe for the caller to retry whole.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DiaryError::AllocationExhausted | DiaryError::Store(_) | DiaryError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_not_found_variants_collapse_externally() {
        assert!(DiaryError::DiaryNotFound("x".into()).is_not_found());
        assert!(DiaryError::CardNotFound("x".into(), "y".into()).is_not_found());
        assert!(!DiaryError::Validation("x".into()).is_not_found());
    }

    #[test]
    fn retryable_classification() {
        assert!(DiaryError::AllocationExhausted.is_retryable());
        assert!(DiaryError::Store("down".into()).is_retryable());
        assert!(!DiaryError::Validation("x".into()).is_retryable());
        assert!(!DiaryError::DiaryNotFound("x".into()).is_retryable());
    }
}
