use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::lock_connection,
    transaction::{Transaction, TransactionState, get_all_transactions},
};

/// A route handler for listing every transaction in the order they were
/// created.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_transactions(&connection).map(Json)
}
