//! HTTP handlers: florerias CRUD, productos listing, and service endpoints.

pub mod common;
pub mod florerias;
pub mod productos;
