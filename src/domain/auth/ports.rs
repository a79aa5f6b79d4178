use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{AuthenticatedUser, IssuedToken, User};
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash, PasswordSalt};
use crate::domain::errors::RepositoryError;

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  ///
  /// Returns `RepositoryError::DuplicateKey` when the email is already taken.
  async fn create(&self, user: User) -> Result<User, RepositoryError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

  /// Updates an existing user
  ///
  /// Returns `RepositoryError::NotFound` if the user does not exist.
  async fn update(&self, user: User) -> Result<User, RepositoryError>;
}

/// Service trait for salted password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a freshly generated salt
  async fn hash(&self, password: &Password) -> Result<(PasswordHash, PasswordSalt), AuthError>;

  /// Verifies a plain text password against a stored hash and salt
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
    salt: &PasswordSalt,
  ) -> Result<bool, AuthError>;
}

/// Service trait for bearer token issuance and validation
pub trait TokenIssuer: Send + Sync {
  /// Signs a time-limited token carrying the user's claims
  fn issue(&self, user: &User) -> Result<IssuedToken, AuthError>;

  /// Checks signature and expiry, returning the asserted identity
  fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
