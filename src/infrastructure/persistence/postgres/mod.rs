pub mod news_repository;
pub mod user_repository;

pub use news_repository::PostgresNewsRepository;
pub use user_repository::PostgresUserRepository;
