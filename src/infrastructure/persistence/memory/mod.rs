//! In-process repositories backing tests and local experiments

mod news_repository;
mod user_repository;

pub use news_repository::InMemoryNewsRepository;
pub use user_repository::InMemoryUserRepository;
