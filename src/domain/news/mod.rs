pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::News;
pub use errors::{NewsError, ValidationError};
pub use ports::NewsRepository;
pub use services::NewsService;
pub use value_objects::{NewsDescription, NewsTitle};
