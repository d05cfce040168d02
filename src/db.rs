//! Opening and initializing the application's SQLite database.

use std::path::Path;

use rusqlite::Connection;

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Open a connection to the database at `path`, or to a fresh in-memory
/// database if `path` is `None`.
///
/// # Errors
/// Returns an error if SQLite cannot open the database.
pub fn open(path: Option<&Path>) -> Result<Connection, Error> {
    let connection = match path {
        Some(path) => {
            tracing::info!("Opening database at {}", path.display());
            Connection::open(path)?
        }
        None => {
            tracing::info!("Opening in-memory database");
            Connection::open_in_memory()?
        }
    };

    Ok(connection)
}

/// Create the tables for the domain models if they do not exist.
///
/// Foreign keys from transactions to categories are declared but not
/// enforced, so a transaction may name a category that does not exist and
/// deleting a category leaves its transactions untouched.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", false)?;

    create_category_table(connection)?;
    create_transaction_table(connection)?;

    Ok(())
}
