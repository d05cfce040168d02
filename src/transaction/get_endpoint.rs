use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    transaction::{Transaction, TransactionState, get_transaction},
};

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 if no transaction has the ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = transaction_id?;
    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};

    use crate::{
        Error,
        app_state::lock_connection,
        test_utils::must_create_test_state,
        transaction::{Transaction, TransactionState, create_transaction, get_transaction_endpoint},
        transaction_type::TransactionType,
    };

    #[tokio::test]
    async fn gets_existing_transaction() {
        let state = TransactionState {
            db_connection: must_create_test_state().db_connection,
        };
        let want = create_transaction(
            Transaction::build(TransactionType::Income, 10.0, "2024-01-01"),
            &lock_connection(&state.db_connection).unwrap(),
        )
        .unwrap();

        let got = get_transaction_endpoint(State(state), Ok(Path(want.id))).await;

        assert_eq!(got.map(|json| json.0), Ok(want));
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = TransactionState {
            db_connection: must_create_test_state().db_connection,
        };

        let got = get_transaction_endpoint(State(state), Ok(Path(7))).await;

        assert_eq!(got.map(|json| json.0), Err(Error::NotFound));
    }
}
