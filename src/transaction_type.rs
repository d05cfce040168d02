//! Whether money was earned or spent.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The direction of a transaction or category.
///
/// Stored in the database and sent over the wire as the lowercase strings
/// `"income"` and `"expense"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The string used for this type in the database and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::MalformedRequest(format!(
                "invalid type \"{other}\", expected \"income\" or \"expense\""
            ))),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(error.to_string().into()))
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{Error, TransactionType};

    #[test]
    fn parses_known_types() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(
            "expense".parse::<TransactionType>(),
            Ok(TransactionType::Expense)
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let result = "transfer".parse::<TransactionType>();

        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();

        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn round_trips_through_sqlite() {
        let connection = Connection::open_in_memory().unwrap();

        let got: TransactionType = connection
            .query_row("SELECT ?1", [TransactionType::Income], |row| row.get(0))
            .unwrap();

        assert_eq!(got, TransactionType::Income);
    }

    #[test]
    fn reading_unknown_text_fails() {
        let connection = Connection::open_in_memory().unwrap();

        let result: rusqlite::Result<TransactionType> =
            connection.query_row("SELECT 'transfer'", [], |row| row.get(0));

        assert!(result.is_err());
    }
}
