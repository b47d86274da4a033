// Start of file: /src/lib.rs

// Library root for the articles routing service

pub mod articles;
pub mod config;
pub mod core;
pub mod routing;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;

// End of file: /src/lib.rs
