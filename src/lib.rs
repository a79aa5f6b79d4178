pub mod adapters;
pub mod application;
pub mod container;
pub mod domain;
pub mod infrastructure;
