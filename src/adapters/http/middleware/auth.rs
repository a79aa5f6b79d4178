use actix_web::{
  Error, FromRequest, HttpMessage, HttpRequest,
  body::EitherBody,
  dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  error::ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  application::auth::AuthenticateUserUseCase,
  domain::auth::entities::AuthenticatedUser,
};

/// Bearer token middleware
///
/// Reads `Authorization: Bearer <token>`, validates the token and stores the
/// resulting `AuthenticatedUser` in request extensions. Requests without a
/// valid token are answered with 401 before reaching the handler.
pub struct AuthMiddleware {
  authenticate: Arc<AuthenticateUserUseCase>,
}

impl AuthMiddleware {
  pub fn new(authenticate: Arc<AuthenticateUserUseCase>) -> Self {
    Self { authenticate }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      authenticate: self.authenticate.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  authenticate: Arc<AuthenticateUserUseCase>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let authenticate = self.authenticate.clone();

    Box::pin(async move {
      let identity = extract_bearer_token(&req)
        .and_then(|token| authenticate.execute(&token).map_err(ApiError::from));

      let user = match identity {
        Ok(user) => user,
        Err(e) => {
          tracing::debug!(error = %e, path = %req.path(), "Rejected unauthenticated request");
          let (request, _) = req.into_parts();
          let response = e.error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(user);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

fn extract_bearer_token(req: &ServiceRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(|s| s.to_string())
    .ok_or(ApiError::Auth(AuthErrorKind::MissingToken))
}

/// Extractor for the identity stored by `AuthMiddleware`
///
/// Yields 401 instead of panicking when a route was mounted without the
/// middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequest for CurrentUser {
  type Error = ApiError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
    ready(
      req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .map(CurrentUser)
        .ok_or(ApiError::Auth(AuthErrorKind::MissingToken)),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_bearer_token_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_srv_request();

    assert_eq!(extract_bearer_token(&req).unwrap(), "test_token_123");
  }

  #[test]
  fn test_extract_bearer_token_missing() {
    let req = TestRequest::default().to_srv_request();

    assert!(extract_bearer_token(&req).is_err());
  }

  #[test]
  fn test_extract_bearer_token_wrong_scheme() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
      .to_srv_request();

    assert!(extract_bearer_token(&req).is_err());
  }

  #[test]
  fn test_extract_bearer_token_empty() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer   "))
      .to_srv_request();

    assert!(extract_bearer_token(&req).is_err());
  }

  #[actix_web::test]
  async fn test_current_user_without_middleware() {
    let (req, mut payload) = TestRequest::default().to_http_parts();

    let result = CurrentUser::from_request(&req, &mut payload).await;

    assert!(matches!(
      result,
      Err(ApiError::Auth(AuthErrorKind::MissingToken))
    ));
  }
}
