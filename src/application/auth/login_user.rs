use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub user_id: Uuid,
  /// Signed bearer token
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user login use case
  ///
  /// Input that cannot possibly match an account (malformed email, out of
  /// range password) is reported as a validation failure before any lookup.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let (user, token) = self.auth_service.login(email, password).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoginUserResponse {
      user_id: user.id,
      token: token.token,
      expires_at: token.expires_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::ports::TokenIssuer;
  use crate::domain::auth::value_objects::FullName;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};

  async fn setup() -> (LoginUserUseCase, Uuid) {
    let service = Arc::new(AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::new().unwrap()),
      Arc::new(JwtTokenIssuer::new("test-secret", 300)),
    ));
    let user = service
      .register(
        Email::new("login@example.com").unwrap(),
        Password::new("password123").unwrap(),
        FullName::new("Login User").unwrap(),
      )
      .await
      .unwrap();

    (LoginUserUseCase::new(service), user.id)
  }

  fn command(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
      email: email.to_string(),
      password: password.to_string(),
    }
  }

  #[tokio::test]
  async fn test_login_issues_token_for_subject() {
    let (use_case, user_id) = setup().await;

    let response = use_case
      .execute(command("login@example.com", "password123"))
      .await
      .unwrap();

    let identity = JwtTokenIssuer::new("test-secret", 300)
      .verify(&response.token)
      .unwrap();
    assert_eq!(response.user_id, user_id);
    assert_eq!(identity.id, user_id);
    assert!(response.expires_at > Utc::now());
  }

  #[tokio::test]
  async fn test_wrong_password() {
    let (use_case, _) = setup().await;

    let result = use_case
      .execute(command("login@example.com", "wrong-password"))
      .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
  }

  #[tokio::test]
  async fn test_unknown_email() {
    let (use_case, _) = setup().await;

    let result = use_case
      .execute(command("nobody@example.com", "password123"))
      .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
  }
}
