use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::{NewsDescription, NewsTitle};

/// A news item owned by the user who wrote it
#[derive(Debug, Clone)]
pub struct News {
  pub id: Uuid,
  pub user_id: Uuid,
  pub title: String,
  pub description: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl News {
  pub fn new(user_id: Uuid, title: NewsTitle, description: NewsDescription) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      user_id,
      title: title.into_inner(),
      description: description.into_inner(),
      created_at: now,
      updated_at: now,
    }
  }

  pub fn from_db(
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      user_id,
      title,
      description,
      created_at,
      updated_at,
    }
  }

  pub fn is_owned_by(&self, user_id: Uuid) -> bool {
    self.user_id == user_id
  }

  pub fn update_content(&mut self, title: NewsTitle, description: NewsDescription) {
    self.title = title.into_inner();
    self.description = description.into_inner();
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_news_creation() {
    let author = Uuid::new_v4();
    let news = News::new(
      author,
      NewsTitle::new("Title").unwrap(),
      NewsDescription::new("Body").unwrap(),
    );

    assert!(news.is_owned_by(author));
    assert!(!news.is_owned_by(Uuid::new_v4()));
    assert_eq!(news.created_at, news.updated_at);
  }

  #[test]
  fn test_update_content() {
    let mut news = News::new(
      Uuid::new_v4(),
      NewsTitle::new("Old").unwrap(),
      NewsDescription::new("Old body").unwrap(),
    );
    let created_at = news.created_at;

    news.update_content(
      NewsTitle::new("New").unwrap(),
      NewsDescription::new("New body").unwrap(),
    );

    assert_eq!(news.title, "New");
    assert_eq!(news.description, "New body");
    assert!(news.updated_at >= created_at);
  }
}
