use thiserror::Error;

/// Failures while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The session store could not create its backing table.
    #[error("Failed to migrate session store: {0}")]
    SessionStore(String),
}
