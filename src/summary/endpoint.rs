use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock_connection,
    summary::{DateRange, Summary, get_summary},
};

/// The state needed to summarise the ledger.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query string accepted by the summary endpoint.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SummaryQuery {
    /// The range to filter by, only when both ends are given and non-empty.
    fn date_range(self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some(DateRange { start, end })
            }
            _ => None,
        }
    }
}

/// A route handler for the income, expense and balance totals, optionally
/// restricted to `startDate..=endDate`.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<Summary>, Error> {
    let Query(query) = query?;
    let date_range = query.date_range();

    let connection = lock_connection(&state.db_connection)?;

    get_summary(date_range.as_ref(), &connection).map(Json)
}
