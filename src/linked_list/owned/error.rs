use thiserror::Error;

/// Errors returned by the fallible list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element, but the list is empty.
    #[error("empty list")]
    EmptyList,
    /// No element matched the requested index or value.
    #[error("item not found")]
    NotFound,
}
