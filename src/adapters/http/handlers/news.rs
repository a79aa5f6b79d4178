use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{NewsRequest, NewsResponse},
  errors::ApiError,
  middleware::CurrentUser,
};
use crate::application::news::{
  AddNewsCommand, AddNewsUseCase, GetNewsUseCase, UpdateNewsCommand, UpdateNewsUseCase,
};

fn parse_news_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::Validation(format!("Invalid news id: {}", raw)))
}

/// POST {prefix}/news (bearer)
pub async fn add_news_handler(
  user: CurrentUser,
  request: web::Json<NewsRequest>,
  use_case: web::Data<Arc<AddNewsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = AddNewsCommand {
    title: request.title.unwrap_or_default(),
    description: request.description.unwrap_or_default(),
  };

  let details = use_case.execute(user.0.id, command).await?;

  Ok(HttpResponse::Created().json(NewsResponse::from(details)))
}

/// GET {prefix}/news/{id} (bearer)
pub async fn get_news_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetNewsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let news_id = parse_news_id(&path)?;

  let details = use_case.execute(news_id).await?;

  Ok(HttpResponse::Ok().json(NewsResponse::from(details)))
}

/// PUT {prefix}/news/{id} (bearer)
///
/// Only the author may replace the content.
pub async fn update_news_handler(
  user: CurrentUser,
  path: web::Path<String>,
  request: web::Json<NewsRequest>,
  use_case: web::Data<Arc<UpdateNewsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let news_id = parse_news_id(&path)?;
  request.validate()?;

  let request = request.into_inner();
  let command = UpdateNewsCommand {
    news_id,
    title: request.title.unwrap_or_default(),
    description: request.description.unwrap_or_default(),
  };

  let details = use_case.execute(user.0.id, command).await?;

  Ok(HttpResponse::Ok().json(NewsResponse::from(details)))
}
