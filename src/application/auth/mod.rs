//! Account use cases

mod authenticate_user;
mod get_current_user;
mod login_user;
mod profile;
mod register_user;
mod update_user;

pub use authenticate_user::AuthenticateUserUseCase;
pub use get_current_user::GetCurrentUserUseCase;
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use profile::UserProfile;
pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};
