//! Presentation-ready projections derived from the report engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::YearMonth;
use crate::expense::ExpenseCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Headline figures for the dashboard screen, all for one reference month.
pub struct DashboardSnapshot {
    pub month: YearMonth,
    pub total_properties: usize,
    pub occupied_properties: usize,
    pub occupancy_rate_pct: f64,
    pub monthly_revenue: f64,
    /// What the month would bring in if every payment settled.
    pub expected_revenue: f64,
    pub late_payments: usize,
    pub monthly_expenses: f64,
    pub net_monthly: f64,
    pub yearly_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Share of the grand total in percent; 0 when nothing was spent.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Spend per expense category over the full collection. Every category is
/// present, zero-spend ones included.
pub struct CategoryBreakdown {
    pub total: f64,
    pub entries: Vec<CategoryBreakdownEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: YearMonth,
    pub label: String,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Revenue/expense series for the trailing months, plus the shared y-scale
/// bar charts divide by.
pub struct MonthlyTrend {
    pub points: Vec<TrendPoint>,
    pub scale_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One row of the profitability leaderboard.
pub struct ProfitabilityRow {
    pub property_id: Uuid,
    pub name: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub roi_pct: f64,
}
