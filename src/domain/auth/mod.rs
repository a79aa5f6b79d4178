pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{AuthenticatedUser, IssuedToken, User};
pub use errors::{AuthError, HashError, TokenError};
pub use value_objects::{Email, FullName, Password, PasswordHash, PasswordSalt, ValueObjectError};
