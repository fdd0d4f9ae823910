use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::errors::InvalidInput;

/// One recorded transaction. Amounts persist as plain JSON numbers and
/// timestamps as RFC 3339 strings, the format of the `expenses` slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    /// Validating factory: the only way to construct an expense, so a record
    /// with a non-positive amount never exists. Assigns a fresh id and the
    /// current timestamp.
    pub fn new(amount: Decimal, category: Category) -> Result<Self, InvalidInput> {
        if amount <= Decimal::ZERO {
            return Err(InvalidInput::NonPositiveAmount(amount));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            category,
            timestamp: Utc::now(),
        })
    }
}
