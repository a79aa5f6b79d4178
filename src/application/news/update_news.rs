use std::sync::Arc;
use uuid::Uuid;

use super::details::NewsDetails;
use crate::domain::news::errors::NewsError;
use crate::domain::news::services::NewsService;
use crate::domain::news::value_objects::{NewsDescription, NewsTitle};

/// Full replacement of a news item's content
#[derive(Debug, Clone)]
pub struct UpdateNewsCommand {
  pub news_id: Uuid,
  pub title: String,
  pub description: String,
}

pub struct UpdateNewsUseCase {
  news_service: Arc<NewsService>,
}

impl UpdateNewsUseCase {
  pub fn new(news_service: Arc<NewsService>) -> Self {
    Self { news_service }
  }

  /// # Errors
  /// Returns `NewsError::NotFound` for an unknown id and
  /// `NewsError::NotOwner` when the caller did not write the item
  pub async fn execute(
    &self,
    user_id: Uuid,
    command: UpdateNewsCommand,
  ) -> Result<NewsDetails, NewsError> {
    let title = NewsTitle::new(command.title)?;
    let description = NewsDescription::new(command.description)?;

    let news = self
      .news_service
      .update(user_id, command.news_id, title, description)
      .await?;

    tracing::info!(news_id = %news.id, "News updated");

    Ok(news.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryNewsRepository;

  #[tokio::test]
  async fn test_update_unknown_news() {
    let use_case = UpdateNewsUseCase::new(Arc::new(NewsService::new(Arc::new(
      InMemoryNewsRepository::new(),
    ))));

    let result = use_case
      .execute(
        Uuid::new_v4(),
        UpdateNewsCommand {
          news_id: Uuid::new_v4(),
          title: "Title".to_string(),
          description: "Body".to_string(),
        },
      )
      .await;

    assert!(matches!(result, Err(NewsError::NotFound)));
  }

  #[tokio::test]
  async fn test_invalid_content_is_rejected_before_lookup() {
    let use_case = UpdateNewsUseCase::new(Arc::new(NewsService::new(Arc::new(
      InMemoryNewsRepository::new(),
    ))));

    let result = use_case
      .execute(
        Uuid::new_v4(),
        UpdateNewsCommand {
          news_id: Uuid::new_v4(),
          title: "Title".to_string(),
          description: "   ".to_string(),
        },
      )
      .await;

    assert!(matches!(result, Err(NewsError::Validation(_))));
  }
}
