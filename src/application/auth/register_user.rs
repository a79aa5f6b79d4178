use std::sync::Arc;

use super::profile::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, FullName, Password};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub email: String,
  /// Plain text, hashed before it is stored
  pub password: String,
  pub full_name: String,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user registration use case
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` when the email is taken and
  /// `AuthError::ValueObject` when a field fails validation
  pub async fn execute(&self, command: RegisterUserCommand) -> Result<UserProfile, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;
    let full_name = FullName::new(command.full_name)?;

    let user = self
      .auth_service
      .register(email, password, full_name)
      .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(user.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::ValueObjectError;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};

  fn use_case() -> RegisterUserUseCase {
    RegisterUserUseCase::new(Arc::new(AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::new().unwrap()),
      Arc::new(JwtTokenIssuer::new("test-secret", 300)),
    )))
  }

  fn command(email: &str, password: &str, full_name: &str) -> RegisterUserCommand {
    RegisterUserCommand {
      email: email.to_string(),
      password: password.to_string(),
      full_name: full_name.to_string(),
    }
  }

  #[tokio::test]
  async fn test_register_returns_public_profile() {
    let profile = use_case()
      .execute(command("New@Example.com", "secret1", "New User"))
      .await
      .unwrap();

    assert_eq!(profile.email, "new@example.com");
    assert_eq!(profile.full_name, "New User");
  }

  #[tokio::test]
  async fn test_short_password_is_rejected() {
    let result = use_case()
      .execute(command("new@example.com", "12345", "New User"))
      .await;

    assert!(matches!(
      result,
      Err(AuthError::ValueObject(
        ValueObjectError::PasswordInvalidLength { .. }
      ))
    ));
  }

  #[tokio::test]
  async fn test_short_full_name_is_rejected() {
    let result = use_case()
      .execute(command("new@example.com", "secret1", "Al"))
      .await;

    assert!(matches!(
      result,
      Err(AuthError::ValueObject(
        ValueObjectError::FullNameInvalidLength { .. }
      ))
    ));
  }
}
