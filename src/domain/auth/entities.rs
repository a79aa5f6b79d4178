use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity representing an account in the system
#[derive(Debug, Clone)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's email address (unique)
  pub email: String,
  /// User's full name
  pub full_name: String,
  /// Argon2id PHC string of the salted password
  pub password_hash: String,
  /// Per-user salt the password was hashed with
  pub password_salt: String,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(
    email: String,
    full_name: String,
    password_hash: String,
    password_salt: String,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      email,
      full_name,
      password_hash,
      password_salt,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    email: String,
    full_name: String,
    password_hash: String,
    password_salt: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      email,
      full_name,
      password_hash,
      password_salt,
      created_at,
      updated_at,
    }
  }

  /// Updates the user's email
  pub fn update_email(&mut self, new_email: String) {
    self.email = new_email;
    self.updated_at = Utc::now();
  }

  /// Updates the user's full name
  pub fn update_full_name(&mut self, new_full_name: String) {
    self.full_name = new_full_name;
    self.updated_at = Utc::now();
  }
}

/// Identity asserted by a validated bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
  pub id: Uuid,
  pub email: String,
  pub full_name: String,
}

impl From<&User> for AuthenticatedUser {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      email: user.email.clone(),
      full_name: user.full_name.clone(),
    }
  }
}

/// A freshly signed bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_user() -> User {
    User::new(
      "test@example.com".to_string(),
      "Test User".to_string(),
      "hash".to_string(),
      "salt".to_string(),
    )
  }

  #[test]
  fn test_user_creation() {
    let user = sample_user();

    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.full_name, "Test User");
    assert_eq!(user.created_at, user.updated_at);
  }

  #[test]
  fn test_user_updates_touch_timestamp() {
    let mut user = sample_user();
    let created_at = user.created_at;

    user.update_full_name("Renamed User".to_string());
    user.update_email("renamed@example.com".to_string());

    assert_eq!(user.full_name, "Renamed User");
    assert_eq!(user.email, "renamed@example.com");
    assert!(user.updated_at >= created_at);
  }

  #[test]
  fn test_authenticated_user_from_user() {
    let user = sample_user();
    let identity = AuthenticatedUser::from(&user);

    assert_eq!(identity.id, user.id);
    assert_eq!(identity.email, user.email);
    assert_eq!(identity.full_name, user.full_name);
  }
}
