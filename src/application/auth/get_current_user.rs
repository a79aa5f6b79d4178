use std::sync::Arc;
use uuid::Uuid;

use super::profile::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for loading the account behind a validated token
pub struct GetCurrentUserUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::UserNotFound` when the token outlived its account
  pub async fn execute(&self, user_id: Uuid) -> Result<UserProfile, AuthError> {
    let user = self.auth_service.get_user(user_id).await?;
    Ok(user.into())
  }
}
