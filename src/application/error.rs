use crate::domain::TaskId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Invalid input shape or domain-rule violation.
    #[error("{0}")]
    Validation(String),

    /// The referenced task id does not exist.
    #[error("Task with id {0} not found")]
    NotFound(TaskId),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
