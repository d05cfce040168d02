use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use rusqlite::Connection;

use crate::{
    Error, app_state::lock_connection, database_id::TransactionId, responses::Deleted,
    transaction::TransactionState,
};

/// A route handler for deleting a transaction.
///
/// Responds with 404 if no transaction has the ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Deleted>, Error> {
    let Path(transaction_id) = transaction_id?;
    let connection = lock_connection(&state.db_connection)?;

    delete_transaction(transaction_id, &connection).inspect_err(|error| {
        tracing::debug!("Could not delete transaction {transaction_id}: {error}");
    })?;

    Ok(Json(Deleted {
        deleted_id: transaction_id,
    }))
}

/// Delete the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}
