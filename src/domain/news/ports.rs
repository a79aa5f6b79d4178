use async_trait::async_trait;
use uuid::Uuid;

use super::entities::News;
use crate::domain::errors::RepositoryError;

/// Repository trait for news persistence operations
#[async_trait]
pub trait NewsRepository: Send + Sync {
  async fn create(&self, news: News) -> Result<News, RepositoryError>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<News>, RepositoryError>;

  /// Returns `RepositoryError::NotFound` if the news item does not exist
  async fn update(&self, news: News) -> Result<News, RepositoryError>;
}
