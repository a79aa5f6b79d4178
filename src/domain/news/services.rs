use std::sync::Arc;
use uuid::Uuid;

use super::entities::News;
use super::errors::NewsError;
use super::ports::NewsRepository;
use super::value_objects::{NewsDescription, NewsTitle};
use crate::domain::errors::RepositoryError;

pub struct NewsService {
  news_repo: Arc<dyn NewsRepository>,
}

impl NewsService {
  pub fn new(news_repo: Arc<dyn NewsRepository>) -> Self {
    Self { news_repo }
  }

  pub async fn add(
    &self,
    user_id: Uuid,
    title: NewsTitle,
    description: NewsDescription,
  ) -> Result<News, NewsError> {
    let news = News::new(user_id, title, description);

    self.news_repo.create(news).await.map_err(|e| {
      tracing::warn!(error = %e, user_id = %user_id, "Failed to insert news");
      NewsError::from(e)
    })
  }

  pub async fn get(&self, news_id: Uuid) -> Result<News, NewsError> {
    self
      .news_repo
      .find_by_id(news_id)
      .await?
      .ok_or(NewsError::NotFound)
  }

  /// Replaces title and description; only the author may do so
  pub async fn update(
    &self,
    user_id: Uuid,
    news_id: Uuid,
    title: NewsTitle,
    description: NewsDescription,
  ) -> Result<News, NewsError> {
    let mut news = self.get(news_id).await?;

    if !news.is_owned_by(user_id) {
      tracing::warn!(news_id = %news_id, user_id = %user_id, "Rejected update by non-author");
      return Err(NewsError::NotOwner);
    }

    news.update_content(title, description);

    match self.news_repo.update(news).await {
      Ok(news) => Ok(news),
      Err(RepositoryError::NotFound) => Err(NewsError::NotFound),
      Err(e) => {
        tracing::warn!(error = %e, news_id = %news_id, "Failed to update news");
        Err(e.into())
      }
    }
  }
}
