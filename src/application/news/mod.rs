//! News use cases

mod add_news;
mod details;
mod get_news;
mod update_news;

pub use add_news::{AddNewsCommand, AddNewsUseCase};
pub use details::NewsDetails;
pub use get_news::GetNewsUseCase;
pub use update_news::{UpdateNewsCommand, UpdateNewsUseCase};
