use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum NewsError {
  #[error("News not found")]
  NotFound,

  #[error("Only the author can modify this news")]
  NotOwner,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Title is required")]
  TitleRequired,

  #[error("Title must be at most {max} characters")]
  TitleTooLong { max: usize },

  #[error("Description is required")]
  DescriptionRequired,
}
