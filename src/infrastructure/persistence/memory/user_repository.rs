use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::{entities::User, ports::UserRepository, value_objects::Email};
use crate::domain::errors::RepositoryError;

/// Keeps users in a map and enforces the same unique email rule as the
/// `users_email_key` index
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn email_taken(users: &HashMap<Uuid, User>, email: &str, except: Uuid) -> bool {
    users
      .values()
      .any(|existing| existing.id != except && existing.email == email)
  }
}

fn poisoned<T>(_: T) -> RepositoryError {
  RepositoryError::ConnectionFailed("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, RepositoryError> {
    let mut users = self.users.write().map_err(poisoned)?;

    if users.contains_key(&user.id) {
      return Err(RepositoryError::DuplicateKey("users_pkey".to_string()));
    }
    if Self::email_taken(&users, &user.email, user.id) {
      return Err(RepositoryError::DuplicateKey("users_email_key".to_string()));
    }

    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
    let users = self.users.read().map_err(poisoned)?;
    Ok(users.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
    let users = self.users.read().map_err(poisoned)?;
    Ok(
      users
        .values()
        .find(|user| user.email == email.as_str())
        .cloned(),
    )
  }

  async fn update(&self, user: User) -> Result<User, RepositoryError> {
    let mut users = self.users.write().map_err(poisoned)?;

    if !users.contains_key(&user.id) {
      return Err(RepositoryError::NotFound);
    }
    if Self::email_taken(&users, &user.email, user.id) {
      return Err(RepositoryError::DuplicateKey("users_email_key".to_string()));
    }

    users.insert(user.id, user.clone());
    Ok(user)
  }
}
