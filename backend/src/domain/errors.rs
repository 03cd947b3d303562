use shared::Collection;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("no record with id '{id}' in {collection}")]
    NotFound { collection: Collection, id: String },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("reset requires explicit confirmation")]
    ConfirmationRequired,

    #[error("admin access required")]
    AccessDenied,
}
