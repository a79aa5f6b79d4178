use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::{LoginUserResponse, UserProfile};
use crate::application::news::NewsDetails;
use crate::domain::auth::value_objects::{Email, FullName};
use crate::domain::news::NewsTitle;

// Text fields are checked through the domain constructors so the request
// layer trims exactly like the value objects do.

fn validate_email_address(email: &str) -> Result<(), validator::ValidationError> {
  Email::new(email)
    .map(|_| ())
    .map_err(|_| validator::ValidationError::new("email"))
}

fn validate_full_name(full_name: &str) -> Result<(), validator::ValidationError> {
  FullName::new(full_name)
    .map(|_| ())
    .map_err(|_| validator::ValidationError::new("length"))
}

fn validate_news_title(title: &str) -> Result<(), validator::ValidationError> {
  NewsTitle::new(title)
    .map(|_| ())
    .map_err(|_| validator::ValidationError::new("length"))
}

/// Request for user registration
///
/// Fields are optional at the serde level so a missing field is reported
/// as a validation failure rather than a malformed body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(
    required(message = "Email is required"),
    custom(function = "validate_email_address", message = "Invalid email format")
  )]
  pub email: Option<String>,

  #[validate(
    required(message = "Full name is required"),
    custom(
      function = "validate_full_name",
      message = "Full name must be between 3 and 60 characters"
    )
  )]
  pub full_name: Option<String>,

  #[validate(
    required(message = "Password is required"),
    length(
      min = 6,
      max = 64,
      message = "Password must be between 6 and 64 characters"
    )
  )]
  pub password: Option<String>,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(
    required(message = "Email is required"),
    custom(function = "validate_email_address", message = "Invalid email format")
  )]
  pub email: Option<String>,

  #[validate(
    required(message = "Password is required"),
    length(
      min = 6,
      max = 64,
      message = "Password must be between 6 and 64 characters"
    )
  )]
  pub password: Option<String>,
}

/// Partial profile update; omitted fields keep their value
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
  #[validate(custom(function = "validate_email_address", message = "Invalid email format"))]
  pub email: Option<String>,

  #[validate(custom(
    function = "validate_full_name",
    message = "Full name must be between 3 and 60 characters"
  ))]
  pub full_name: Option<String>,
}

/// Body for both creating and replacing a news item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsRequest {
  #[validate(
    required(message = "Title is required"),
    custom(
      function = "validate_news_title",
      message = "Title must be between 1 and 255 characters"
    )
  )]
  pub title: Option<String>,

  #[validate(
    required(message = "Description is required"),
    length(min = 1, message = "Description is required")
  )]
  pub description: Option<String>,
}

/// Public user view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
  pub id: Uuid,
  pub email: String,
  pub full_name: String,
  pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
  fn from(profile: UserProfile) -> Self {
    Self {
      id: profile.user_id,
      email: profile.email,
      full_name: profile.full_name,
      created_at: profile.created_at,
    }
  }
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
  pub id: Uuid,
  /// Bearer token for the Authorization header
  pub jwt_token: String,
  pub expires_at: DateTime<Utc>,
}

impl From<LoginUserResponse> for LoginResponse {
  fn from(response: LoginUserResponse) -> Self {
    Self {
      id: response.user_id,
      jwt_token: response.token,
      expires_at: response.expires_at,
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
  pub id: Uuid,
  pub user_id: Uuid,
  pub title: String,
  pub description: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<NewsDetails> for NewsResponse {
  fn from(details: NewsDetails) -> Self {
    Self {
      id: details.news_id,
      user_id: details.author_id,
      title: details.title,
      description: details.description,
      created_at: details.created_at,
      updated_at: details.updated_at,
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_register_request_missing_fields() {
    let request: RegisterRequest = serde_json::from_str("{}").unwrap();

    let errors = request.validate().unwrap_err();
    let fields = errors.field_errors();

    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("full_name"));
    assert!(fields.contains_key("password"));
  }

  #[test]
  fn test_register_request_valid() {
    let request: RegisterRequest = serde_json::from_str(
      r#"{"email":"a@example.com","full_name":"Ann Lee","password":"secret1"}"#,
    )
    .unwrap();

    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_update_user_request_allows_empty_body() {
    let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();

    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_update_user_request_checks_present_fields() {
    let request: UpdateUserRequest =
      serde_json::from_str(r#"{"email":"nope","full_name":"Al"}"#).unwrap();

    let errors = request.validate().unwrap_err();

    assert_eq!(errors.field_errors().len(), 2);
  }

  #[test]
  fn test_text_fields_are_trimmed_before_length_checks() {
    let padded_name = format!("  {}  ", "n".repeat(60));
    let padded_title = format!(" {} ", "t".repeat(255));

    let register: RegisterRequest = serde_json::from_value(serde_json::json!({
      "email": " a@example.com ",
      "full_name": padded_name,
      "password": "secret1"
    }))
    .unwrap();
    let update: UpdateUserRequest =
      serde_json::from_value(serde_json::json!({"full_name": padded_name})).unwrap();
    let news: NewsRequest =
      serde_json::from_value(serde_json::json!({"title": padded_title, "description": "Body"}))
        .unwrap();

    assert!(register.validate().is_ok());
    assert!(update.validate().is_ok());
    assert!(news.validate().is_ok());
  }

  #[test]
  fn test_blank_padding_does_not_satisfy_minimum() {
    let request: RegisterRequest = serde_json::from_str(
      r#"{"email":"a@example.com","full_name":"  Al  ","password":"secret1"}"#,
    )
    .unwrap();

    let errors = request.validate().unwrap_err();

    assert!(errors.field_errors().contains_key("full_name"));
  }

  #[test]
  fn test_user_response_has_no_credentials() {
    let response = UserResponse {
      id: Uuid::new_v4(),
      email: "a@example.com".to_string(),
      full_name: "Ann Lee".to_string(),
      created_at: Utc::now(),
    };

    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("password_hash").is_none());
    assert!(json.get("password_salt").is_none());
    assert!(json.get("password").is_none());
  }
}
