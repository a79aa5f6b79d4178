use std::sync::Arc;
use uuid::Uuid;

use super::details::NewsDetails;
use crate::domain::news::errors::NewsError;
use crate::domain::news::services::NewsService;
use crate::domain::news::value_objects::{NewsDescription, NewsTitle};

#[derive(Debug, Clone)]
pub struct AddNewsCommand {
  pub title: String,
  pub description: String,
}

/// Use case for publishing a news item as the authenticated user
pub struct AddNewsUseCase {
  news_service: Arc<NewsService>,
}

impl AddNewsUseCase {
  pub fn new(news_service: Arc<NewsService>) -> Self {
    Self { news_service }
  }

  pub async fn execute(
    &self,
    author_id: Uuid,
    command: AddNewsCommand,
  ) -> Result<NewsDetails, NewsError> {
    let title = NewsTitle::new(command.title)?;
    let description = NewsDescription::new(command.description)?;

    let news = self.news_service.add(author_id, title, description).await?;

    tracing::info!(news_id = %news.id, author_id = %author_id, "News added");

    Ok(news.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryNewsRepository;

  #[tokio::test]
  async fn test_add_news() {
    let use_case = AddNewsUseCase::new(Arc::new(NewsService::new(Arc::new(
      InMemoryNewsRepository::new(),
    ))));
    let author = Uuid::new_v4();

    let details = use_case
      .execute(
        author,
        AddNewsCommand {
          title: " Headline ".to_string(),
          description: "Body".to_string(),
        },
      )
      .await
      .unwrap();

    assert_eq!(details.author_id, author);
    assert_eq!(details.title, "Headline");
  }

  #[tokio::test]
  async fn test_empty_title_is_rejected() {
    let use_case = AddNewsUseCase::new(Arc::new(NewsService::new(Arc::new(
      InMemoryNewsRepository::new(),
    ))));

    let result = use_case
      .execute(
        Uuid::new_v4(),
        AddNewsCommand {
          title: "".to_string(),
          description: "Body".to_string(),
        },
      )
      .await;

    assert!(matches!(result, Err(NewsError::Validation(_))));
  }
}
