//! Aggregates transaction amounts into income and expense totals.
//!
//! The totals are computed by a single SQL statement so the summary always
//! reflects one consistent view of the table.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Total income, total expenses and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income amounts, zero if there are none.
    pub total_income: f64,
    /// The sum of all expense amounts, zero if there are none.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

impl Summary {
    fn new(total_income: f64, total_expenses: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

/// An inclusive range of transaction dates.
///
/// Dates are compared as strings, e.g. "2024-01-15" lies within
/// "2024-01-01"..="2024-01-31". Callers must use a format that sorts
/// lexicographically in date order, such as ISO 8601.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// The earliest date to include.
    pub start: String,
    /// The latest date to include.
    pub end: String,
}

const SUMMARY_SELECT: &str = "SELECT \
        COALESCE(SUM(CASE WHEN type = 'income' THEN amount END), 0.0), \
        COALESCE(SUM(CASE WHEN type = 'expense' THEN amount END), 0.0) \
    FROM transactions";

/// Sum the transactions within `date_range`, or all transactions if
/// `date_range` is `None`.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_summary(
    date_range: Option<&DateRange>,
    connection: &Connection,
) -> Result<Summary, Error> {
    let summary = match date_range {
        Some(DateRange { start, end }) => connection
            .prepare(&format!(
                "{SUMMARY_SELECT} WHERE date >= :start AND date <= :end"
            ))?
            .query_row(&[(":start", start), (":end", end)], map_summary_row)?,
        None => connection
            .prepare(SUMMARY_SELECT)?
            .query_row([], map_summary_row)?,
    };

    Ok(summary)
}

fn map_summary_row(row: &Row) -> Result<Summary, rusqlite::Error> {
    let total_income = row.get(0)?;
    let total_expenses = row.get(1)?;

    Ok(Summary::new(total_income, total_expenses))
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        summary::{DateRange, Summary, get_summary},
        transaction::{Transaction, create_transaction},
        transaction_type::TransactionType,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn insert(
        transaction_type: TransactionType,
        amount: f64,
        date: &str,
        connection: &Connection,
    ) {
        create_transaction(Transaction::build(transaction_type, amount, date), connection)
            .expect("Could not create transaction");
    }

    #[test]
    fn empty_store_sums_to_zero() {
        let connection = get_test_connection();

        let summary = get_summary(None, &connection);

        assert_eq!(
            summary,
            Ok(Summary {
                total_income: 0.0,
                total_expenses: 0.0,
                balance: 0.0
            })
        );
    }

    #[test]
    fn sums_income_and_expenses() {
        let connection = get_test_connection();
        insert(TransactionType::Income, 100.0, "2024-01-05", &connection);
        insert(TransactionType::Income, 50.0, "2024-01-10", &connection);
        insert(TransactionType::Expense, 25.0, "2024-01-11", &connection);
        insert(TransactionType::Expense, 15.0, "2024-01-12", &connection);

        let summary = get_summary(None, &connection);

        assert_eq!(
            summary,
            Ok(Summary {
                total_income: 150.0,
                total_expenses: 40.0,
                balance: 110.0
            })
        );
    }

    #[test]
    fn only_expenses_gives_negative_balance() {
        let connection = get_test_connection();
        insert(TransactionType::Expense, 12.5, "2024-01-11", &connection);

        let summary = get_summary(None, &connection).unwrap();

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.balance, -12.5);
    }

    #[test]
    fn date_range_is_inclusive_and_lexicographic() {
        let connection = get_test_connection();
        insert(TransactionType::Income, 10.0, "2024-01-01", &connection);
        insert(TransactionType::Income, 20.0, "2024-01-31", &connection);
        insert(TransactionType::Income, 40.0, "2024-02-01", &connection);
        insert(TransactionType::Expense, 5.0, "2023-12-31", &connection);
        let range = DateRange {
            start: "2024-01-01".to_owned(),
            end: "2024-01-31".to_owned(),
        };

        let summary = get_summary(Some(&range), &connection);

        assert_eq!(
            summary,
            Ok(Summary {
                total_income: 30.0,
                total_expenses: 0.0,
                balance: 30.0
            })
        );
    }
}
