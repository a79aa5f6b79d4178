pub mod auth;
pub mod errors;
pub mod news;

pub use errors::RepositoryError;
