use serde::{Deserialize, Serialize};

/// Monetary amount as exchanged with the expense backend.
///
/// The backend stores amounts as SQLite `REAL`, so they normally arrive as
/// JSON numbers. Hand-edited databases and older servers may also send
/// numeric strings or `null`; those are accepted too, and anything that does
/// not parse becomes NaN so it can still be displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "RawAmount", into = "f64")]
pub struct Amount(f64);

impl Amount {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Null,
}

impl From<RawAmount> for Amount {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Number(value) => Self(value),
            RawAmount::Text(text) => Self(text.trim().parse().unwrap_or(f64::NAN)),
            RawAmount::Null => Self(f64::NAN),
        }
    }
}

pub mod expense {
    use super::*;

    /// An expense as returned by `GET /get_expenses`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        /// Server-assigned identifier.
        pub id: i64,
        pub amount: Amount,
        pub category: String,
        #[serde(default)]
        pub description: Option<String>,
        /// Calendar date, `YYYY-MM-DD`.
        pub date: String,
    }

    /// Request body for `POST /add_expense`.
    ///
    /// Fields are forwarded exactly as typed by the user; the server does the
    /// numeric conversion of `amount`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: String,
        pub category: String,
        pub description: String,
        pub date: String,
    }
}

pub mod stats {
    use std::collections::BTreeMap;

    use super::*;

    /// Aggregates returned by `GET /get_statistics`.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Statistics {
        pub total: Amount,
        /// Sum of the expenses dated in the current calendar month.
        pub monthly_total: Amount,
        /// Per-category sums. Key order carries no meaning.
        #[serde(default)]
        pub categories: BTreeMap<String, Amount>,
    }
}

/// Error payload sent by the backend on rejected writes.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Amount, expense::Expense, expense::ExpenseNew, stats::Statistics};

    #[test]
    fn amount_accepts_number_string_and_null() {
        let amounts: Vec<Amount> = serde_json::from_str(r#"[12.5, "3.25", " 7 ", null, "abc"]"#).unwrap();
        assert_eq!(amounts[0].value(), 12.5);
        assert_eq!(amounts[1].value(), 3.25);
        assert_eq!(amounts[2].value(), 7.0);
        assert!(amounts[3].value().is_nan());
        assert!(amounts[4].value().is_nan());
    }

    #[test]
    fn expense_without_description_decodes() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": 4, "amount": 9.99, "category": "Food", "description": null, "date": "2024-01-02"}"#,
        )
        .unwrap();
        assert_eq!(expense.id, 4);
        assert_eq!(expense.description, None);

        let expense: Expense = serde_json::from_str(
            r#"{"id": 5, "amount": 1, "category": "Fun", "date": "2024-01-03"}"#,
        )
        .unwrap();
        assert_eq!(expense.description, None);
    }

    #[test]
    fn expense_new_serializes_fields_verbatim() {
        let body = ExpenseNew {
            amount: "12.3".to_string(),
            category: "Food".to_string(),
            description: String::new(),
            date: "2024-01-01".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "amount": "12.3",
                "category": "Food",
                "description": "",
                "date": "2024-01-01",
            })
        );
    }

    #[test]
    fn statistics_decode_backend_payload() {
        let stats: Statistics = serde_json::from_str(
            r#"{"total": 150.5, "monthly_total": 20, "categories": {"Food": 30, "Rent": 100.0}}"#,
        )
        .unwrap();
        assert_eq!(stats.total.value(), 150.5);
        assert_eq!(stats.monthly_total.value(), 20.0);
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.categories["Rent"].value(), 100.0);
    }
}
