//! Ownership of the database pool and its liveness.
//!
//! `ConnectionManager` replaces a process-wide database handle with an explicitly owned,
//! cheap-to-clone object held in `AppState`. Handlers call `acquire()` and get back a pool
//! handle that has just answered a ping; if the pool has died in the meantime, `acquire()`
//! transparently re-establishes it with a bounded retry.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::{sync::Arc, time::Duration};
use tokio::sync::{Mutex, RwLock};

use crate::server::{error::connection::ConnectionError, util::retry::RetryPolicy};

/// Maximum number of open connections in the pool.
pub const MAX_CONNECTIONS: u32 = 25;
/// Timeout for establishing a single connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Connections older than this are closed and replaced.
pub const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// Retry policy used at process startup.
pub const STARTUP_RETRY: RetryPolicy = RetryPolicy::new(10, Duration::from_secs(3));
/// Retry policy used when `acquire()` finds a dead pool.
pub const RECONNECT_RETRY: RetryPolicy = RetryPolicy::new(3, Duration::from_secs(3));

/// Shared handle to the database pool with ping-before-use and reconnect.
///
/// Clones share the same underlying handle, so a reconnect performed through one clone is
/// visible to all of them.
#[derive(Clone)]
pub struct ConnectionManager {
    database_url: String,
    reconnect_policy: RetryPolicy,
    handle: Arc<RwLock<Option<DatabaseConnection>>>,
    /// Serializes reconnects so concurrent acquirers wait for one reconnect instead of
    /// each starting their own.
    reconnecting: Arc<Mutex<()>>,
}

impl ConnectionManager {
    /// Creates a manager for the given database URL without connecting.
    ///
    /// Call `connect()` or `connect_with_retry()` before the first `acquire()`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            reconnect_policy: RECONNECT_RETRY,
            handle: Arc::new(RwLock::new(None)),
            reconnecting: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a manager around an already established pool.
    ///
    /// `database_url` is only used if the pool later has to be re-established.
    pub fn with_connection(database_url: impl Into<String>, db: DatabaseConnection) -> Self {
        Self {
            handle: Arc::new(RwLock::new(Some(db))),
            ..Self::new(database_url)
        }
    }

    /// Overrides the retry policy used when `acquire()` finds a dead pool.
    pub fn reconnect_policy(mut self, policy: RetryPolicy) -> Self {
        self.reconnect_policy = policy;
        self
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(MAX_CONNECTIONS)
            .min_connections(0)
            .connect_timeout(CONNECT_TIMEOUT)
            .max_lifetime(MAX_LIFETIME)
            .sqlx_logging(false);
        opt
    }

    /// Opens a new pool, pings it, and installs it as the shared handle.
    ///
    /// On failure the shared handle is left as it was. A manager that never connected
    /// stays uninitialized, and one that already had a pool keeps it so the next
    /// `acquire()` pings it and attempts another reconnect.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Freshly connected pool
    /// - `Err(ConnectionError::Connect)` - Opening the pool or the first ping failed
    pub async fn connect(&self) -> Result<DatabaseConnection, ConnectionError> {
        let result = match Database::connect(self.connect_options()).await {
            Ok(db) => match db.ping().await {
                Ok(()) => Ok(db),
                Err(err) => {
                    if let Err(close_err) = db.close().await {
                        tracing::debug!("Failed to close unreachable pool: {}", close_err);
                    }
                    Err(ConnectionError::Connect(err))
                }
            },
            Err(err) => Err(ConnectionError::Connect(err)),
        };

        let db = result?;
        *self.handle.write().await = Some(db.clone());
        tracing::info!("Database connection established");

        Ok(db)
    }

    /// Calls `connect()` until it succeeds or `policy` is exhausted.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Pool from the first successful attempt
    /// - `Err(ConnectionError::RetriesExhausted)` - Every attempt failed
    pub async fn connect_with_retry(
        &self,
        policy: &RetryPolicy,
    ) -> Result<DatabaseConnection, ConnectionError> {
        let db = policy
            .run(|_| self.connect())
            .await
            .map_err(|err| ConnectionError::RetriesExhausted {
                attempts: err.attempts,
                last: Box::new(err.last),
            })?;

        Ok(db)
    }

    /// Returns a live pool handle.
    ///
    /// Pings the current handle; if the ping fails, re-establishes the pool with the
    /// reconnect policy.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Handle that answered a ping
    /// - `Err(ConnectionError::NotInitialized)` - No connection has been established
    /// - `Err(ConnectionError::Invalid)` - Ping failed and reconnecting failed too; a later
    ///   call retries the reconnect
    pub async fn acquire(&self) -> Result<DatabaseConnection, ConnectionError> {
        let db = self.current().await?;

        match db.ping().await {
            Ok(()) => Ok(db),
            Err(err) => {
                tracing::warn!("Database ping failed, attempting to reconnect: {}", err);
                self.reconnect().await
            }
        }
    }

    async fn current(&self) -> Result<DatabaseConnection, ConnectionError> {
        self.handle
            .read()
            .await
            .clone()
            .ok_or(ConnectionError::NotInitialized)
    }

    async fn reconnect(&self) -> Result<DatabaseConnection, ConnectionError> {
        let _guard = self.reconnecting.lock().await;

        // Another task may have reconnected while we waited for the lock.
        if let Ok(db) = self.current().await {
            if db.ping().await.is_ok() {
                return Ok(db);
            }
        }

        self.connect_with_retry(&self.reconnect_policy)
            .await
            .map_err(|err| ConnectionError::Invalid(Box::new(err)))
    }
}
