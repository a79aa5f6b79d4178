use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::{AuthError, TokenError};
use crate::domain::errors::RepositoryError;
use crate::domain::news::errors::NewsError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Unreadable request body (400)
  BadRequest(String),

  /// Input failed validation (422)
  Validation(String),

  /// Authentication failure (401)
  Auth(AuthErrorKind),

  /// Caller may not touch the resource (403)
  Forbidden(String),

  /// Resource does not exist (404)
  NotFound(String),

  /// Unique constraint clash (409)
  Conflict(String),

  /// Anything else (500); the detail is logged, never returned
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  InvalidCredentials,
  MissingToken,
  InvalidToken,
  ExpiredToken,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error_type, message) = match self {
      ApiError::BadRequest(msg) => ("bad_request", msg.clone()),
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AuthErrorKind::MissingToken => (
          "missing_token",
          "Missing or malformed Authorization header".to_string(),
        ),
        AuthErrorKind::InvalidToken => ("invalid_token", "Invalid token".to_string()),
        AuthErrorKind::ExpiredToken => ("token_expired", "Token has expired".to_string()),
      },
      ApiError::Forbidden(msg) => ("forbidden", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Conflict(msg) => ("conflict", msg.clone()),
      ApiError::Internal(msg) => {
        tracing::error!(error = %msg, "Internal error");
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: error_type.to_string(),
        message,
      })
  }
}

fn from_repository(error: RepositoryError, what: &str) -> ApiError {
  match error {
    RepositoryError::NotFound => ApiError::NotFound(format!("{} not found", what)),
    RepositoryError::DuplicateKey(key) => ApiError::Conflict(format!("Duplicate {}", key)),
    other => ApiError::Internal(other.to_string()),
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::EmailAlreadyExists => {
        ApiError::Conflict("An account with this email already exists".to_string())
      }
      AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Token(err) => match err {
        TokenError::Expired => ApiError::Auth(AuthErrorKind::ExpiredToken),
        TokenError::Invalid(_) => ApiError::Auth(AuthErrorKind::InvalidToken),
        TokenError::SigningFailed(msg) => ApiError::Internal(msg),
      },
      AuthError::Repository(err) => from_repository(err, "User"),
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

impl From<NewsError> for ApiError {
  fn from(error: NewsError) -> Self {
    match error {
      NewsError::NotFound => ApiError::NotFound("News not found".to_string()),
      NewsError::NotOwner => {
        ApiError::Forbidden("Only the author can modify this news".to_string())
      }
      NewsError::Validation(err) => ApiError::Validation(err.to_string()),
      NewsError::Repository(err) => from_repository(err, "News"),
    }
  }
}

/// Convert validation errors from validator crate
///
/// Messages are ordered by field name so responses are stable.
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
      .into_iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
