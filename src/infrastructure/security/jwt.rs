use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::entities::{AuthenticatedUser, IssuedToken, User};
use crate::domain::auth::errors::{AuthError, TokenError};
use crate::domain::auth::ports::TokenIssuer;

/// Allowed clock skew when checking `exp`, in seconds
const LEEWAY_SECONDS: u64 = 5;

/// Claims carried by every bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  /// Subject, the user id
  pub sub: Uuid,
  pub email: String,
  pub full_name: String,
  /// Unique token id
  pub jti: Uuid,
  pub iat: i64,
  pub exp: i64,
}

/// HS256 signer and verifier for bearer tokens
pub struct JwtTokenIssuer {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  ttl: Duration,
}

impl JwtTokenIssuer {
  pub fn new(secret: &str, ttl_seconds: u32) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = LEEWAY_SECONDS;

    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      ttl: Duration::seconds(i64::from(ttl_seconds)),
    }
  }

  fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
    encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailed(e.to_string()))
  }

  fn claims_for(&self, user: &User, now: DateTime<Utc>) -> Claims {
    Claims {
      sub: user.id,
      email: user.email.clone(),
      full_name: user.full_name.clone(),
      jti: Uuid::new_v4(),
      iat: now.timestamp(),
      exp: (now + self.ttl).timestamp(),
    }
  }
}

impl TokenIssuer for JwtTokenIssuer {
  fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
    let now = Utc::now();
    let claims = self.claims_for(user, now);
    let token = self.sign(&claims)?;

    Ok(IssuedToken {
      token,
      expires_at: now + self.ttl,
    })
  }

  fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
    let token_data =
      decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
        match e.kind() {
          ErrorKind::ExpiredSignature => TokenError::Expired,
          ErrorKind::InvalidToken => TokenError::Invalid("malformed token".to_string()),
          ErrorKind::InvalidSignature => TokenError::Invalid("bad signature".to_string()),
          _ => TokenError::Invalid(e.to_string()),
        }
      })?;

    let claims = token_data.claims;
    Ok(AuthenticatedUser {
      id: claims.sub,
      email: claims.email,
      full_name: claims.full_name,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn user() -> User {
    User::new(
      "reader@example.com".to_string(),
      "Avid Reader".to_string(),
      "hash".to_string(),
      "salt".to_string(),
    )
  }

  #[test]
  fn test_issue_and_verify() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let user = user();

    let issued = issuer.issue(&user).unwrap();
    let identity = issuer.verify(&issued.token).unwrap();

    assert_eq!(identity.id, user.id);
    assert_eq!(identity.email, "reader@example.com");
    assert_eq!(identity.full_name, "Avid Reader");
  }

  #[test]
  fn test_expiry_matches_ttl() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let before = Utc::now();

    let issued = issuer.issue(&user()).unwrap();

    let lifetime = issued.expires_at - before;
    assert!(lifetime >= Duration::seconds(299));
    assert!(lifetime <= Duration::seconds(301));
  }

  #[test]
  fn test_each_token_has_unique_jti() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let user = user();
    let now = Utc::now();

    let first = issuer.claims_for(&user, now);
    let second = issuer.claims_for(&user, now);

    assert_ne!(first.jti, second.jti);
  }

  #[test]
  fn test_expired_token_is_rejected() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let issued_at = Utc::now() - Duration::seconds(600);
    let claims = issuer.claims_for(&user(), issued_at);
    let token = issuer.sign(&claims).unwrap();

    let result = issuer.verify(&token);

    assert!(matches!(
      result,
      Err(AuthError::Token(TokenError::Expired))
    ));
  }

  #[test]
  fn test_token_within_leeway_is_accepted() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let issued_at = Utc::now() - Duration::seconds(302);
    let claims = issuer.claims_for(&user(), issued_at);
    let token = issuer.sign(&claims).unwrap();

    assert!(issuer.verify(&token).is_ok());
  }

  #[test]
  fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);
    let forger = JwtTokenIssuer::new("other-secret", 300);

    let issued = forger.issue(&user()).unwrap();

    assert!(matches!(
      issuer.verify(&issued.token),
      Err(AuthError::Token(TokenError::Invalid(_)))
    ));
  }

  #[test]
  fn test_garbage_token_is_rejected() {
    let issuer = JwtTokenIssuer::new("test-secret", 300);

    assert!(matches!(
      issuer.verify("not-a-jwt"),
      Err(AuthError::Token(TokenError::Invalid(_)))
    ));
  }
}
