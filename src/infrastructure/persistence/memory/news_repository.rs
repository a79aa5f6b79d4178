use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::news::{entities::News, ports::NewsRepository};

#[derive(Default)]
pub struct InMemoryNewsRepository {
  news: RwLock<HashMap<Uuid, News>>,
}

impl InMemoryNewsRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

fn poisoned<T>(_: T) -> RepositoryError {
  RepositoryError::ConnectionFailed("news store lock poisoned".to_string())
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
  async fn create(&self, news: News) -> Result<News, RepositoryError> {
    let mut store = self.news.write().map_err(poisoned)?;

    if store.contains_key(&news.id) {
      return Err(RepositoryError::DuplicateKey("news_pkey".to_string()));
    }

    store.insert(news.id, news.clone());
    Ok(news)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<News>, RepositoryError> {
    let store = self.news.read().map_err(poisoned)?;
    Ok(store.get(&id).cloned())
  }

  async fn update(&self, news: News) -> Result<News, RepositoryError> {
    let mut store = self.news.write().map_err(poisoned)?;

    match store.get_mut(&news.id) {
      Some(existing) => {
        *existing = news.clone();
        Ok(news)
      }
      None => Err(RepositoryError::NotFound),
    }
  }
}
