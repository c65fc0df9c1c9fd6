use thiserror::Error;

use bookstore_core::{DomainError, Isbn};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to publish inventory event: {0}")]
    Publish(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("book {0} is not an electronic edition")]
    NotElectronic(Isbn),
}
