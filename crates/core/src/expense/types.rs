//! Expense data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendtrack_shared::types::ExpenseId;

/// An expense record as served by the backend.
///
/// `amount` and `date` are optional because the store occasionally serves
/// incomplete records; aggregation skips those instead of failing. Expenses
/// relate to schedules only by category name at evaluation time, there is
/// no persisted link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Category name, matched case-insensitively against schedule categories.
    pub category: String,
    /// Amount spent.
    pub amount: Option<Decimal>,
    /// When the expense occurred.
    pub date: Option<DateTime<Utc>>,
    /// Link to an uploaded receipt, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl Expense {
    /// Returns true if the record carries everything aggregation needs.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.amount.is_some() && self.date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let expense = Expense {
            id: ExpenseId::new(),
            category: "Food".to_string(),
            amount: Some(dec!(12.50)),
            date: Some(Utc.with_ymd_and_hms(2025, 4, 10, 9, 30, 0).unwrap()),
            receipt_url: Some("https://files.example/receipt.png".to_string()),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["category"], "Food");
        assert_eq!(json["receiptUrl"], "https://files.example/receipt.png");
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let json = r#"{"id":"0195f7a0-5f5c-7000-8000-000000000000","category":"Misc"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert!(expense.amount.is_none());
        assert!(expense.date.is_none());
        assert!(!expense.is_well_formed());
    }
}
