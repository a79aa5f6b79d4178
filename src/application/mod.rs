//! Application layer
//!
//! Use cases that turn raw request input into domain calls and shape the
//! results for the adapters.

pub mod auth;
pub mod news;
