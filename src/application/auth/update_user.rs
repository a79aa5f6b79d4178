use std::sync::Arc;
use uuid::Uuid;

use super::profile::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, FullName};

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
  pub email: Option<String>,
  pub full_name: Option<String>,
}

/// Use case for updating the caller's own profile
pub struct UpdateUserUseCase {
  auth_service: Arc<AuthService>,
}

impl UpdateUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::UserNotFound` if the account is gone and
  /// `AuthError::EmailAlreadyExists` if the new email belongs to someone else
  pub async fn execute(
    &self,
    user_id: Uuid,
    command: UpdateUserCommand,
  ) -> Result<UserProfile, AuthError> {
    let email = command.email.map(Email::new).transpose()?;
    let full_name = command.full_name.map(FullName::new).transpose()?;

    let user = self
      .auth_service
      .update_profile(user_id, email, full_name)
      .await?;

    tracing::info!(user_id = %user.id, "User profile updated");

    Ok(user.into())
  }
}
