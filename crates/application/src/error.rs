use domain::{RepositoryError, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::Repository(RepositoryError::NotFound { .. })
        )
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(value: ValidationErrors) -> Self {
        ApplicationError::Validation(value)
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
