use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::auth::entities::User;

/// Public view of an account; never carries credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
  pub user_id: Uuid,
  pub email: String,
  pub full_name: String,
  pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
  fn from(user: User) -> Self {
    Self {
      user_id: user.id,
      email: user.email,
      full_name: user.full_name,
      created_at: user.created_at,
    }
  }
}
