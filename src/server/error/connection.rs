use thiserror::Error;

/// Failures of the connection manager.
///
/// Every variant results in a 500 Internal Server Error when it reaches a handler.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// Opening the pool or the initial ping failed.
    #[error("Error connecting to the database: {0}")]
    Connect(#[source] sea_orm::DbErr),

    /// Every attempt of a bounded retry failed; carries the last failure.
    #[error("Database connection failed after {attempts} attempt(s): {last}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Failure of the final attempt
        #[source]
        last: Box<ConnectionError>,
    },

    /// `acquire()` was called before any connection was established.
    #[error("Database connection is not initialized")]
    NotInitialized,

    /// The existing connection failed its ping and reconnecting failed too.
    #[error("Database connection is closed or invalid: {0}")]
    Invalid(#[source] Box<ConnectionError>),
}
