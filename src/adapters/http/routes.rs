use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  AuthenticateUserUseCase, GetCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase,
  UpdateUserUseCase,
};
use crate::application::news::{AddNewsUseCase, GetNewsUseCase, UpdateNewsUseCase};

use super::errors::ApiError;
use super::handlers::health::ping_handler;
use super::handlers::news::{add_news_handler, get_news_handler, update_news_handler};
use super::handlers::user::{
  current_user_handler, login_handler, register_handler, update_user_handler,
};
use super::middleware::AuthMiddleware;
use crate::infrastructure::config::normalize_api_prefix;

/// Everything the HTTP layer needs, cloned into every worker
#[derive(Clone)]
pub struct ApiDependencies {
  pub api_prefix: String,
  pub register_user: Arc<RegisterUserUseCase>,
  pub login_user: Arc<LoginUserUseCase>,
  pub get_current_user: Arc<GetCurrentUserUseCase>,
  pub update_user: Arc<UpdateUserUseCase>,
  pub authenticate_user: Arc<AuthenticateUserUseCase>,
  pub add_news: Arc<AddNewsUseCase>,
  pub get_news: Arc<GetNewsUseCase>,
  pub update_news: Arc<UpdateNewsUseCase>,
}

/// Malformed JSON bodies become a 400 in the standard error shape
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Mounts `/ping` and every API route under `deps.api_prefix`
///
/// An empty (or `/`) prefix serves the API at the root.
pub fn configure_app(cfg: &mut web::ServiceConfig, deps: &ApiDependencies) {
  cfg
    .app_data(json_config())
    .route("/ping", web::get().to(ping_handler));

  let prefix = normalize_api_prefix(&deps.api_prefix);
  if prefix.is_empty() {
    cfg
      .configure(|cfg| configure_user_routes(cfg, deps))
      .configure(|cfg| configure_news_routes(cfg, deps));
  } else {
    cfg.service(
      web::scope(&prefix)
        .configure(|cfg| configure_user_routes(cfg, deps))
        .configure(|cfg| configure_news_routes(cfg, deps)),
    );
  }
}

/// Configure account routes
///
/// - POST /user/register
/// - POST /user/login
/// - GET /user (bearer)
/// - PUT /user (bearer)
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, deps: &ApiDependencies) {
  cfg.service(
    web::scope("/user")
      .app_data(web::Data::new(deps.register_user.clone()))
      .app_data(web::Data::new(deps.login_user.clone()))
      .app_data(web::Data::new(deps.get_current_user.clone()))
      .app_data(web::Data::new(deps.update_user.clone()))
      .route("/register", web::post().to(register_handler))
      .route("/login", web::post().to(login_handler))
      .service(
        web::resource("")
          .wrap(AuthMiddleware::new(deps.authenticate_user.clone()))
          .route(web::get().to(current_user_handler))
          .route(web::put().to(update_user_handler)),
      ),
  );
}

/// Configure news routes, all behind bearer authentication
///
/// - POST /news
/// - GET /news/{id}
/// - PUT /news/{id}
pub fn configure_news_routes(cfg: &mut web::ServiceConfig, deps: &ApiDependencies) {
  cfg.service(
    web::scope("/news")
      .wrap(AuthMiddleware::new(deps.authenticate_user.clone()))
      .app_data(web::Data::new(deps.add_news.clone()))
      .app_data(web::Data::new(deps.get_news.clone()))
      .app_data(web::Data::new(deps.update_news.clone()))
      .route("", web::post().to(add_news_handler))
      .route("/{id}", web::get().to(get_news_handler))
      .route("/{id}", web::put().to(update_news_handler)),
  );
}
