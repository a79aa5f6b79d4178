use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest, UserResponse},
  errors::ApiError,
  middleware::CurrentUser,
};
use crate::application::auth::{
  GetCurrentUserUseCase, LoginUserCommand, LoginUserUseCase, RegisterUserCommand,
  RegisterUserUseCase, UpdateUserCommand, UpdateUserUseCase,
};

/// Handler for user registration
///
/// POST {prefix}/user/register
/// Body: RegisterRequest (JSON)
/// Response: UserResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = RegisterUserCommand {
    email: request.email.unwrap_or_default(),
    password: request.password.unwrap_or_default(),
    full_name: request.full_name.unwrap_or_default(),
  };

  let profile = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(UserResponse::from(profile)))
}

/// Handler for user login
///
/// POST {prefix}/user/login
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = LoginUserCommand {
    email: request.email.unwrap_or_default(),
    password: request.password.unwrap_or_default(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(LoginResponse::from(response)))
}

/// GET {prefix}/user (bearer)
pub async fn current_user_handler(
  user: CurrentUser,
  use_case: web::Data<Arc<GetCurrentUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let profile = use_case.execute(user.0.id).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(profile)))
}

/// PUT {prefix}/user (bearer)
///
/// Updates the token subject's email and/or full name.
pub async fn update_user_handler(
  user: CurrentUser,
  request: web::Json<UpdateUserRequest>,
  use_case: web::Data<Arc<UpdateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = UpdateUserCommand {
    email: request.email,
    full_name: request.full_name,
  };

  let profile = use_case.execute(user.0.id, command).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(profile)))
}
