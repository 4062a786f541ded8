//! Dreaming Flowers: REST catalog of florerias over MySQL.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
