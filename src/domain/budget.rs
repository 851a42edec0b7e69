//! Budget domain model
//!
//! The club has at most one budget, covering a date period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{Amount, FieldError};

/// The club's spending budget for a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord")]
pub struct Budget {
    pub amount: Amount,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Budget {
    /// Creates a budget; `end` must not be before `start`
    pub fn new(amount: Amount, start: NaiveDate, end: NaiveDate) -> Result<Self, FieldError> {
        if end < start {
            return Err(FieldError::InvertedPeriod { start, end });
        }
        Ok(Self { amount, start, end })
    }

    /// Returns true if `date` is inside the budget period (inclusive)
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct BudgetRecord {
    amount: Amount,
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = FieldError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        Budget::new(record.amount, record.start, record.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_inverted_period() {
        let result = Budget::new(Amount::from_cents(100), date("2024-02-01"), date("2024-01-01"));
        assert!(matches!(result, Err(FieldError::InvertedPeriod { .. })));
    }

    #[test]
    fn single_day_period() {
        let budget = Budget::new(Amount::ZERO, date("2024-01-01"), date("2024-01-01")).unwrap();
        assert!(budget.covers(date("2024-01-01")));
        assert!(!budget.covers(date("2024-01-02")));
    }

    #[test]
    fn deserialize_rejects_inverted_period() {
        let json = r#"{"amount":"10.00","start":"2024-12-31","end":"2024-01-01"}"#;
        let err = serde_json::from_str::<Budget>(json).unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }
}
