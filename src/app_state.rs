//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }

    /// Close the database connection.
    ///
    /// If other clones of the state are still alive, e.g. a request that is
    /// still being served, the connection cannot be closed here and will be
    /// closed when the last clone is dropped instead.
    ///
    /// # Errors
    /// Returns an error if the lock is poisoned or SQLite fails to close the
    /// connection.
    pub fn close(self) -> Result<(), Error> {
        let mutex = match Arc::try_unwrap(self.db_connection) {
            Ok(mutex) => mutex,
            Err(_) => {
                tracing::warn!(
                    "Database connection is still in use, it will be closed once released."
                );
                return Ok(());
            }
        };

        let connection = mutex.into_inner().map_err(|_| Error::DatabaseLockError)?;

        connection.close().map_err(|(_, error)| Error::from(error))?;
        tracing::info!("Closed the database connection.");

        Ok(())
    }
}

/// Acquire the lock on the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub(crate) fn lock_connection(
    connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("Could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
