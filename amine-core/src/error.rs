use thiserror::Error;

/// Reason a draft was rejected. Checks run in declaration order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Item must not be duplicated")]
    DuplicateName,

    #[error("Please select a category")]
    MissingCategory,

    #[error("Price must not be less than 0")]
    InvalidPrice,
}
