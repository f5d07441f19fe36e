//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use super::connection::ConnectionManager;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `ConnectionManager` shares its pool handle behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Source of live database connections.
    ///
    /// Handlers call `acquire()` once per request; the manager pings the pool and
    /// re-establishes it when it has gone away.
    pub connections: ConnectionManager,
}

impl AppState {
    /// Creates a new application state around the given connection manager.
    pub fn new(connections: ConnectionManager) -> Self {
        Self { connections }
    }
}
