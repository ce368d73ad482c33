use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown consultation mode: {0:?}")]
    UnknownMode(String),
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),
}
