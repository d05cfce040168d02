use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use rusqlite::{Connection, params};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    responses::Updated,
    transaction::{TransactionBuilder, TransactionState, form::TransactionForm},
};

/// A route handler for replacing every field of a transaction.
///
/// Responds with 404 if no transaction has the ID.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<Updated>, Error> {
    let Path(transaction_id) = transaction_id?;
    let Json(form) = payload?;
    let builder = form.into_builder()?;

    let connection = lock_connection(&state.db_connection)?;
    update_transaction(transaction_id, &builder, &connection).inspect_err(|error| {
        tracing::debug!("Could not update transaction {transaction_id}: {error}");
    })?;

    Ok(Json(Updated {
        updated_id: transaction_id,
    }))
}

/// Overwrite all five fields of the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - [Error::ConstraintViolation] if a column check fails,
/// - or [Error::SqlError] if there is some other SQL error.
fn update_transaction(
    id: TransactionId,
    transaction: &TransactionBuilder,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE transactions
        SET \
            type = ?1, \
            category = ?2, \
            amount = ?3, \
            date = ?4, \
            description = ?5 \
        WHERE id = ?6;",
        params![
            transaction.transaction_type,
            transaction.category,
            transaction.amount,
            transaction.date,
            transaction.description,
            id,
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}
