use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::http::ApiDependencies;
use crate::application::auth::{
  AuthenticateUserUseCase, GetCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase,
  UpdateUserUseCase,
};
use crate::application::news::{AddNewsUseCase, GetNewsUseCase, UpdateNewsUseCase};
use crate::domain::auth::ports::UserRepository;
use crate::domain::auth::services::AuthService;
use crate::domain::news::ports::NewsRepository;
use crate::domain::news::services::NewsService;
use crate::infrastructure::config::{Config, SecurityConfig};
use crate::infrastructure::persistence::postgres::{
  PostgresNewsRepository, PostgresUserRepository,
};
use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};

/// Wires services and use cases on top of the given repositories
pub fn build_dependencies(
  user_repo: Arc<dyn UserRepository>,
  news_repo: Arc<dyn NewsRepository>,
  security: &SecurityConfig,
  api_prefix: &str,
) -> anyhow::Result<ApiDependencies> {
  let password_hasher = Arc::new(Argon2PasswordHasher::new()?);
  let token_issuer = Arc::new(JwtTokenIssuer::new(
    &security.jwt_secret,
    security.token_ttl_seconds,
  ));

  let auth_service = Arc::new(AuthService::new(user_repo, password_hasher, token_issuer));
  let news_service = Arc::new(NewsService::new(news_repo));

  Ok(ApiDependencies {
    api_prefix: api_prefix.to_string(),
    register_user: Arc::new(RegisterUserUseCase::new(auth_service.clone())),
    login_user: Arc::new(LoginUserUseCase::new(auth_service.clone())),
    get_current_user: Arc::new(GetCurrentUserUseCase::new(auth_service.clone())),
    update_user: Arc::new(UpdateUserUseCase::new(auth_service.clone())),
    authenticate_user: Arc::new(AuthenticateUserUseCase::new(auth_service)),
    add_news: Arc::new(AddNewsUseCase::new(news_service.clone())),
    get_news: Arc::new(GetNewsUseCase::new(news_service.clone())),
    update_news: Arc::new(UpdateNewsUseCase::new(news_service)),
  })
}

/// Production wiring backed by PostgreSQL
pub fn postgres_dependencies(pool: PgPool, config: &Config) -> anyhow::Result<ApiDependencies> {
  build_dependencies(
    Arc::new(PostgresUserRepository::new(pool.clone())),
    Arc::new(PostgresNewsRepository::new(pool)),
    &config.security,
    &config.server.api_prefix,
  )
}
