//! The request body accepted by the create and update transaction endpoints.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::{
    Error,
    database_id::CategoryId,
    transaction::{Transaction, TransactionBuilder},
    transaction_type::TransactionType,
};

/// The JSON body for creating or replacing a transaction.
///
/// `type`, `amount` and `date` are required, `category` and `description`
/// may be omitted or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionForm {
    /// Check the fields serde cannot and convert the form into a builder.
    ///
    /// # Errors
    /// Returns [Error::MalformedRequest] if `date` is blank.
    pub fn into_builder(self) -> Result<TransactionBuilder, Error> {
        if self.date.trim().is_empty() {
            return Err(Error::MalformedRequest("date cannot be empty".to_owned()));
        }

        Ok(
            Transaction::build(self.transaction_type, self.amount, &self.date)
                .category(self.category)
                .description(self.description.as_deref()),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Accept amounts sent either as a JSON number or as a numeric string, e.g.
/// `12.5` or `"12.5"`.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => amount,
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount \"{text}\"")))?,
    };

    if !amount.is_finite() {
        return Err(D::Error::custom(format!(
            "amount must be a finite number, got {amount}"
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Error, transaction::form::TransactionForm, transaction_type::TransactionType};

    fn parse(value: serde_json::Value) -> Result<TransactionForm, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn parses_full_body() {
        let form = parse(json!({
            "type": "expense",
            "category": 3,
            "amount": 9.5,
            "date": "2024-01-01",
            "description": "Lunch"
        }))
        .expect("could not parse form");

        assert_eq!(
            form,
            TransactionForm {
                transaction_type: TransactionType::Expense,
                category: Some(3),
                amount: 9.5,
                date: "2024-01-01".to_owned(),
                description: Some("Lunch".to_owned()),
            }
        );
    }

    #[test]
    fn optional_fields_may_be_omitted_or_null() {
        let form = parse(json!({
            "type": "income",
            "category": null,
            "amount": 100,
            "date": "2024-01-01"
        }))
        .expect("could not parse form");

        assert_eq!(form.category, None);
        assert_eq!(form.description, None);
        assert_eq!(form.amount, 100.0);
    }

    #[test]
    fn amount_may_be_numeric_string() {
        let form = parse(json!({ "type": "income", "amount": " 12.25 ", "date": "2024-01-01" }))
            .expect("could not parse form");

        assert_eq!(form.amount, 12.25);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = parse(json!({ "type": "income", "amount": "lots", "date": "2024-01-01" }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_finite_amount() {
        let result = parse(json!({ "type": "income", "amount": "NaN", "date": "2024-01-01" }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let result = parse(json!({ "type": "transfer", "amount": 1.0, "date": "2024-01-01" }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(parse(json!({ "amount": 1.0, "date": "2024-01-01" })).is_err());
        assert!(parse(json!({ "type": "income", "date": "2024-01-01" })).is_err());
        assert!(parse(json!({ "type": "income", "amount": 1.0 })).is_err());
    }

    #[test]
    fn blank_date_is_malformed() {
        let form = parse(json!({ "type": "income", "amount": 1.0, "date": "  " }))
            .expect("could not parse form");

        let result = form.into_builder();

        assert_eq!(
            result,
            Err(Error::MalformedRequest("date cannot be empty".to_owned()))
        );
    }
}
