use thiserror::Error;

use super::value_objects::ValueObjectError;
use crate::domain::errors::RepositoryError;

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Email already exists")]
  EmailAlreadyExists,

  #[error("User not found")]
  UserNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Stored salt does not match the password hash")]
  SaltMismatch,
}

/// Bearer token issuance and validation errors
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Token has expired")]
  Expired,

  #[error("Invalid token: {0}")]
  Invalid(String),

  #[error("Failed to sign token: {0}")]
  SigningFailed(String),
}
