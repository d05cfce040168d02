use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    Error,
    app_state::lock_connection,
    responses::Created,
    transaction::{TransactionState, create_transaction, form::TransactionForm},
};

/// A route handler for creating a new transaction, responds with the new ID.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(form) = payload?;
    let builder = form.into_builder()?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = create_transaction(builder, &connection)?;
    tracing::debug!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(Created { id: transaction.id })))
}
