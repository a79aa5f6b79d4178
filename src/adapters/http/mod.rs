pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use dtos::{
  ErrorResponse, LoginRequest, LoginResponse, NewsRequest, NewsResponse, RegisterRequest,
  UpdateUserRequest, UserResponse,
};
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{AuthMiddleware, CurrentUser, RequestId, RequestIdMiddleware};
pub use routes::{ApiDependencies, configure_app, configure_news_routes, configure_user_routes};
