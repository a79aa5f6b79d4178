use std::sync::Arc;
use uuid::Uuid;

use super::details::NewsDetails;
use crate::domain::news::errors::NewsError;
use crate::domain::news::services::NewsService;

pub struct GetNewsUseCase {
  news_service: Arc<NewsService>,
}

impl GetNewsUseCase {
  pub fn new(news_service: Arc<NewsService>) -> Self {
    Self { news_service }
  }

  pub async fn execute(&self, news_id: Uuid) -> Result<NewsDetails, NewsError> {
    let news = self.news_service.get(news_id).await?;
    Ok(news.into())
  }
}
