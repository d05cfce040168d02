//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, update_category_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(update_category_endpoint)
                .delete(delete_category_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}


#[cfg(test)]
mod summary_route_tests {
    use crate::{
        Summary, endpoints, test_utils::must_create_test_server, transaction::TransactionForm,
        transaction_type::TransactionType,
    };

    fn form(transaction_type: TransactionType, amount: f64, date: &str) -> TransactionForm {
        TransactionForm {
            transaction_type,
            category: None,
            amount,
            date: date.to_owned(),
            description: None,
        }
    }

    #[tokio::test]
    async fn empty_store_summary_is_zero() {
        let server = must_create_test_server();

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Summary>(),
            Summary {
                total_income: 0.0,
                total_expenses: 0.0,
                balance: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn summary_totals_income_and_expenses() {
        let server = must_create_test_server();
        for transaction in [
            form(TransactionType::Income, 100.0, "2024-01-01"),
            form(TransactionType::Income, 50.0, "2024-01-02"),
            form(TransactionType::Expense, 30.0, "2024-01-03"),
            form(TransactionType::Expense, 10.0, "2024-01-04"),
        ] {
            server.post(endpoints::TRANSACTIONS).json(&transaction).await;
        }

        let summary = server.get(endpoints::SUMMARY).await.json::<Summary>();

        assert_eq!(
            summary,
            Summary {
                total_income: 150.0,
                total_expenses: 40.0,
                balance: 110.0,
            }
        );
    }

    #[tokio::test]
    async fn summary_filters_by_date_range() {
        let server = must_create_test_server();
        server
            .post(endpoints::TRANSACTIONS)
            .json(&form(TransactionType::Income, 100.0, "2024-01-01"))
            .await;
        server
            .post(endpoints::TRANSACTIONS)
            .json(&form(TransactionType::Income, 7.0, "2024-02-01"))
            .await;

        let summary = server
            .get(endpoints::SUMMARY)
            .add_query_param("startDate", "2024-01-01")
            .add_query_param("endDate", "2024-01-31")
            .await
            .json::<Summary>();

        assert_eq!(summary.total_income, 100.0);
        assert_eq!(summary.balance, 100.0);
    }

    #[tokio::test]
    async fn summary_ignores_single_date() {
        let server = must_create_test_server();
        server
            .post(endpoints::TRANSACTIONS)
            .json(&form(TransactionType::Income, 100.0, "2024-01-01"))
            .await;
        server
            .post(endpoints::TRANSACTIONS)
            .json(&form(TransactionType::Income, 7.0, "2024-02-01"))
            .await;

        let summary = server
            .get(endpoints::SUMMARY)
            .add_query_param("startDate", "2024-01-15")
            .await
            .json::<Summary>();

        assert_eq!(summary.total_income, 107.0);
    }
}
