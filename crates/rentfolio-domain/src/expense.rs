//! Domain model for property expenses.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{flexible_date, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub property_id: Uuid,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, with = "flexible_date")]
    pub date: Option<NaiveDate>,
    /// Whether the landlord may bill this expense back to the tenant.
    /// Tracked for display, never subtracted from totals.
    #[serde(default)]
    pub is_recoverable: bool,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        property_id: Uuid,
        category: ExpenseCategory,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            category,
            description: String::new(),
            amount,
            currency: None,
            date: Some(date),
            is_recoverable: false,
            created_at: Utc::now(),
        }
    }

    pub fn recoverable(mut self) -> Self {
        self.is_recoverable = true;
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Repair,
    Maintenance,
    Tax,
    Insurance,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// Every category, in the order breakdowns enumerate them.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Repair,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Tax,
        ExpenseCategory::Insurance,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Repair => "Repair",
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::Tax => "Tax",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_covers_every_variant() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
        assert_eq!(ExpenseCategory::ALL.len(), 6);
    }

    #[test]
    fn recoverable_flag_defaults_off() {
        let expense = Expense::new(
            Uuid::new_v4(),
            ExpenseCategory::Repair,
            200.0,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );
        assert!(!expense.is_recoverable);
        assert!(expense.recoverable().is_recoverable);
    }
}
