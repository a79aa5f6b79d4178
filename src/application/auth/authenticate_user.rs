use std::sync::Arc;

use crate::domain::auth::entities::AuthenticatedUser;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Resolves a bearer token into the identity it asserts
pub struct AuthenticateUserUseCase {
  auth_service: Arc<AuthService>,
}

impl AuthenticateUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  pub fn execute(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
    self.auth_service.authenticate(token)
  }
}
