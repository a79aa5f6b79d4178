use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::news::entities::News;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDetails {
  pub news_id: Uuid,
  pub author_id: Uuid,
  pub title: String,
  pub description: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsDetails {
  fn from(news: News) -> Self {
    Self {
      news_id: news.id,
      author_id: news.user_id,
      title: news.title,
      description: news.description,
      created_at: news.created_at,
      updated_at: news.updated_at,
    }
  }
}
