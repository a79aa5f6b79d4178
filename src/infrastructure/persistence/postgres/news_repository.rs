use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::news::{entities::News, ports::NewsRepository};

/// PostgreSQL implementation of the NewsRepository trait
pub struct PostgresNewsRepository {
  pool: PgPool,
}

impl PostgresNewsRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, sqlx::FromRow)]
struct NewsRow {
  id: Uuid,
  user_id: Uuid,
  title: String,
  description: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<NewsRow> for News {
  fn from(row: NewsRow) -> Self {
    News::from_db(
      row.id,
      row.user_id,
      row.title,
      row.description,
      row.created_at,
      row.updated_at,
    )
  }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
  async fn create(&self, news: News) -> Result<News, RepositoryError> {
    let row = sqlx::query_as::<_, NewsRow>(
      r#"
            INSERT INTO news (id, user_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, description, created_at, updated_at
            "#,
    )
    .bind(news.id)
    .bind(news.user_id)
    .bind(&news.title)
    .bind(&news.description)
    .bind(news.created_at)
    .bind(news.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<News>, RepositoryError> {
    let row = sqlx::query_as::<_, NewsRow>(
      r#"
            SELECT id, user_id, title, description, created_at, updated_at
            FROM news
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn update(&self, news: News) -> Result<News, RepositoryError> {
    let row = sqlx::query_as::<_, NewsRow>(
      r#"
            UPDATE news
            SET title = $2, description = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, user_id, title, description, created_at, updated_at
            "#,
    )
    .bind(news.id)
    .bind(&news.title)
    .bind(&news.description)
    .bind(news.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::User;
  use crate::domain::auth::ports::UserRepository;
  use crate::domain::news::value_objects::{NewsDescription, NewsTitle};
  use crate::infrastructure::persistence::postgres::PostgresUserRepository;
  use crate::infrastructure::persistence::postgres::user_repository::tests::setup_test_db;

  async fn create_author(pool: &PgPool) -> User {
    PostgresUserRepository::new(pool.clone())
      .create(User::new(
        "author@example.com".to_string(),
        "News Author".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        "c2FsdHNhbHQ".to_string(),
      ))
      .await
      .unwrap()
  }

  fn news_for(author: &User, title: &str) -> News {
    News::new(
      author.id,
      NewsTitle::new(title).unwrap(),
      NewsDescription::new("Some description").unwrap(),
    )
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_and_find_news() {
    let (pool, _container) = setup_test_db().await;
    let author = create_author(&pool).await;
    let repo = PostgresNewsRepository::new(pool);

    let created = repo.create(news_for(&author, "Launch")).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.title, "Launch");
    assert_eq!(found.user_id, author.id);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_find_missing_news() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresNewsRepository::new(pool);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_update_news() {
    let (pool, _container) = setup_test_db().await;
    let author = create_author(&pool).await;
    let repo = PostgresNewsRepository::new(pool);

    let mut news = repo.create(news_for(&author, "Draft")).await.unwrap();
    news.update_content(
      NewsTitle::new("Final").unwrap(),
      NewsDescription::new("Final description").unwrap(),
    );

    let updated = repo.update(news).await.unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "Final description");
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_news_requires_existing_author() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresNewsRepository::new(pool);

    let orphan = News::new(
      Uuid::new_v4(),
      NewsTitle::new("Orphan").unwrap(),
      NewsDescription::new("No author").unwrap(),
    );

    assert!(repo.create(orphan).await.is_err());
  }
}
