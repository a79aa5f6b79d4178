use std::sync::Arc;
use uuid::Uuid;

use super::entities::{AuthenticatedUser, IssuedToken, User};
use super::errors::{AuthError, HashError};
use super::ports::{PasswordHasher, TokenIssuer, UserRepository};
use super::value_objects::{Email, FullName, Password, PasswordHash, PasswordSalt};
use crate::domain::errors::RepositoryError;

/// Authentication service implementing core business logic
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_issuer: Arc<dyn TokenIssuer>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      token_issuer,
    }
  }

  /// Registers a new user with email and password
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` if email is already registered
  pub async fn register(
    &self,
    email: Email,
    password: Password,
    full_name: FullName,
  ) -> Result<User, AuthError> {
    if self.user_repo.find_by_email(&email).await?.is_some() {
      tracing::warn!(email = %email, "Email already exists");
      return Err(AuthError::EmailAlreadyExists);
    }

    let (password_hash, password_salt) = self.password_hasher.hash(&password).await?;

    let user = User::new(
      email.into_inner(),
      full_name.into_inner(),
      password_hash.into_inner(),
      password_salt.into_inner(),
    );

    // The unique index still guards against a concurrent registration
    match self.user_repo.create(user).await {
      Ok(user) => Ok(user),
      Err(RepositoryError::DuplicateKey(_)) => Err(AuthError::EmailAlreadyExists),
      Err(e) => {
        tracing::warn!(error = %e, "Failed to insert user");
        Err(e.into())
      }
    }
  }

  /// Verifies credentials and issues a bearer token
  ///
  /// Unknown emails and wrong passwords are indistinguishable to the caller.
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(User, IssuedToken), AuthError> {
    let Some(user) = self.user_repo.find_by_email(&email).await? else {
      // One hash at the same cost as a verification, so unknown emails take
      // as long as wrong passwords
      self.password_hasher.hash(&password).await?;
      return Err(AuthError::InvalidCredentials);
    };

    // Stored credentials that fail to parse are a server fault, not bad input
    let password_hash = PasswordHash::from_hash(user.password_hash.as_str())
      .map_err(|e| HashError::VerificationFailed(e.to_string()))?;
    let password_salt = PasswordSalt::new(user.password_salt.as_str())
      .map_err(|e| HashError::VerificationFailed(e.to_string()))?;

    let is_valid = self
      .password_hasher
      .verify(&password, &password_hash, &password_salt)
      .await?;

    if !is_valid {
      tracing::warn!(user_id = %user.id, "Invalid password");
      return Err(AuthError::InvalidCredentials);
    }

    let token = self.token_issuer.issue(&user)?;

    Ok((user, token))
  }

  /// Validates a bearer token and returns the identity it asserts
  pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
    self.token_issuer.verify(token)
  }

  /// Loads a user by id
  pub async fn get_user(&self, user_id: Uuid) -> Result<User, AuthError> {
    self
      .user_repo
      .find_by_id(user_id)
      .await?
      .ok_or(AuthError::UserNotFound)
  }

  /// Applies a partial profile update
  ///
  /// Fields left as `None` keep their current value.
  pub async fn update_profile(
    &self,
    user_id: Uuid,
    email: Option<Email>,
    full_name: Option<FullName>,
  ) -> Result<User, AuthError> {
    let mut user = self.get_user(user_id).await?;

    if let Some(email) = email {
      if email.as_str() != user.email {
        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
          if existing.id != user.id {
            tracing::warn!(user_id = %user.id, "Email already taken by another account");
            return Err(AuthError::EmailAlreadyExists);
          }
        }
        user.update_email(email.into_inner());
      }
    }

    if let Some(full_name) = full_name {
      user.update_full_name(full_name.into_inner());
    }

    match self.user_repo.update(user).await {
      Ok(user) => Ok(user),
      Err(RepositoryError::NotFound) => Err(AuthError::UserNotFound),
      Err(RepositoryError::DuplicateKey(_)) => Err(AuthError::EmailAlreadyExists),
      Err(e) => {
        tracing::warn!(error = %e, "Failed to update user");
        Err(e.into())
      }
    }
  }
}
