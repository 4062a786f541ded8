//! Shared application state for all routes.

use sqlx::MySqlPool;

#[derive(Clone)]
pub struct AppState {
    /// Owned handle to the store; every request funnels through this pool.
    pub pool: MySqlPool,
}
