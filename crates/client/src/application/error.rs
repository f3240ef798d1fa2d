//! Application-layer error type.

use thiserror::Error;

use crate::ports::outbound::{ApiError, AuthError, StoreError};
use phantasm_domain::DomainError;

/// Failure of an application service call.
///
/// Nothing here is fatal: callers degrade (empty list, re-enabled save
/// button) rather than crash, per the error-handling design.
#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
