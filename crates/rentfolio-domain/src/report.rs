//! Financial report values computed by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::DateWindow;
use crate::expense::Expense;
use crate::payment::Payment;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// What a report aggregates over: the whole portfolio or one property.
pub enum ReportScope {
    Portfolio,
    Property(Uuid),
}

impl ReportScope {
    pub fn property_id(&self) -> Option<Uuid> {
        match self {
            ReportScope::Portfolio => None,
            ReportScope::Property(id) => Some(*id),
        }
    }
}

impl fmt::Display for ReportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportScope::Portfolio => f.write_str("portfolio"),
            ReportScope::Property(id) => write!(f, "property {id}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Income and expense totals for one scope and period, along with the
/// records that produced them.
pub struct FinancialReport {
    pub scope: ReportScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<DateWindow>,
    /// Display currency the figures are expressed in. Portfolio totals sum
    /// raw amounts across properties; no conversion is applied.
    pub currency: String,
    /// Sum of settled payments only.
    pub total_income: f64,
    /// Sum over every scoped payment regardless of status.
    pub expected_income: f64,
    /// Recoverable and non-recoverable expenses both count here.
    pub total_expenses: f64,
    /// Recoverable share of `total_expenses`, exposed for display.
    pub recoverable_expenses: f64,
    pub net_income: f64,
    /// Net margin in percent; 0 when there is no income.
    pub margin_pct: f64,
    /// Same ratio read as a per-property profitability figure.
    pub roi_pct: f64,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
}
