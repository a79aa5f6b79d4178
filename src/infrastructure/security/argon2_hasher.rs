use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash, PasswordSalt};

/// Argon2id password hasher with a random per-user salt
///
/// Parameters: 19 MiB memory, 2 iterations, 1 lane, 32 byte output.
/// The salt is returned alongside the PHC string so it can be stored
/// in its own column.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub fn new() -> Result<Self, AuthError> {
    let memory_cost = 19456;
    let time_cost = 2;
    let parallelism = 1;
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len).map_err(|e| {
      HashError::HashingFailed(format!("Failed to create Argon2 params: {}", e))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<(PasswordHash, PasswordSalt), AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| HashError::HashingFailed(format!("Failed to hash password: {}", e)))?;

    let password_hash = PasswordHash::from_hash(hash.to_string())
      .map_err(|e| HashError::HashingFailed(format!("Invalid hash format: {}", e)))?;
    let password_salt = PasswordSalt::new(salt.as_str())
      .map_err(|e| HashError::HashingFailed(format!("Invalid salt format: {}", e)))?;

    Ok((password_hash, password_salt))
  }

  /// Verification is constant time inside `verify_password`
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
    salt: &PasswordSalt,
  ) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
      .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

    let embedded_salt = parsed_hash.salt.map(|s| s.as_str());
    if embedded_salt != Some(salt.as_str()) {
      return Err(HashError::SaltMismatch.into());
    }

    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(
        HashError::VerificationFailed(format!("Password verification failed: {}", e)).into(),
      ),
    }
  }
}
