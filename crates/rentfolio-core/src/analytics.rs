//! Dashboard and analytics projections, re-derived on every data load.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

use rentfolio_domain::{
    find_by_id, CategoryBreakdown, CategoryBreakdownEntry, DashboardSnapshot, DateWindow, Expense,
    ExpenseCategory, MonthlyTrend, Payment, PaymentStatus, ProfitabilityRow, Property, TrendPoint,
    YearMonth,
};

use crate::filters::{expenses_in_scope, payments_in_scope, payments_with_status, RecordScope};
use crate::period::{month_buckets, DEFAULT_WINDOW_MONTHS};
use crate::report::profit_margin_pct;

/// Label substituted when a record points at a deleted property.
pub const UNKNOWN_PROPERTY_LABEL: &str = "Unknown property";

/// Stateless projections built on top of the shared filters and buckets, so
/// no screen recomputes sums on its own.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Share of properties with a rent set, in percent.
    pub fn occupancy_rate(properties: &[Property]) -> f64 {
        if properties.is_empty() {
            return 0.0;
        }
        let occupied = properties.iter().filter(|p| p.is_occupied()).count();
        occupied as f64 / properties.len() as f64 * 100.0
    }

    /// Headline dashboard figures for the month containing `reference`.
    pub fn dashboard(
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
        reference: NaiveDate,
    ) -> DashboardSnapshot {
        let month = YearMonth::from_date(reference);
        let month_scope =
            RecordScope::portfolio().between(DateWindow::calendar_month(month));
        let year_scope =
            RecordScope::portfolio().between(DateWindow::calendar_year(reference.year()));

        let monthly_revenue: f64 =
            payments_with_status(payments, &month_scope, PaymentStatus::Paid)
                .iter()
                .map(|p| p.amount)
                .sum();
        let expected_revenue: f64 = payments_in_scope(payments, &month_scope)
            .iter()
            .map(|p| p.amount)
            .sum();
        let late_payments =
            payments_with_status(payments, &month_scope, PaymentStatus::Late).len();
        let monthly_expenses: f64 = expenses_in_scope(expenses, &month_scope)
            .iter()
            .map(|e| e.amount)
            .sum();
        let yearly_revenue: f64 = payments_with_status(payments, &year_scope, PaymentStatus::Paid)
            .iter()
            .map(|p| p.amount)
            .sum();

        DashboardSnapshot {
            month,
            total_properties: properties.len(),
            occupied_properties: properties.iter().filter(|p| p.is_occupied()).count(),
            occupancy_rate_pct: Self::occupancy_rate(properties),
            monthly_revenue,
            expected_revenue,
            late_payments,
            monthly_expenses,
            net_monthly: monthly_revenue - monthly_expenses,
            yearly_revenue,
        }
    }

    /// Dashboard for the month containing today.
    pub fn dashboard_today(
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
    ) -> DashboardSnapshot {
        Self::dashboard(properties, payments, expenses, Utc::now().date_naive())
    }

    /// Spend per category over the full collection, not time-windowed.
    /// Every category appears, sorted by amount descending.
    pub fn category_breakdown(expenses: &[Expense]) -> CategoryBreakdown {
        let mut by_category: HashMap<ExpenseCategory, f64> = HashMap::new();
        for expense in expenses {
            *by_category.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        let total: f64 = by_category.values().sum();

        let mut entries: Vec<CategoryBreakdownEntry> = ExpenseCategory::ALL
            .iter()
            .map(|category| {
                let amount = by_category.get(category).copied().unwrap_or(0.0);
                let share_pct = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                CategoryBreakdownEntry {
                    category: *category,
                    amount,
                    share_pct,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));

        CategoryBreakdown { total, entries }
    }

    /// Revenue/expense pairs for the trailing months, zipped by month key.
    /// `scale_max` never drops below 1 so bar heights can divide by it.
    pub fn monthly_trend(
        payments: &[Payment],
        expenses: &[Expense],
        window_months: u32,
        reference: NaiveDate,
    ) -> MonthlyTrend {
        let paid: Vec<&Payment> = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .collect();
        let revenue = month_buckets(
            &paid,
            |p| p.effective_date(),
            |p| p.amount,
            window_months,
            reference,
        );
        let spent = month_buckets(
            expenses,
            |e| e.date,
            |e| e.amount,
            window_months,
            reference,
        );

        let scale_max = revenue.values().fold(1.0_f64, |acc, v| acc.max(*v));
        let points = revenue
            .into_iter()
            .map(|(month, rev)| TrendPoint {
                month,
                label: month.short_label().to_string(),
                revenue: rev,
                expenses: spent.get(&month).copied().unwrap_or(0.0),
            })
            .collect();

        MonthlyTrend { points, scale_max }
    }

    /// Twelve-month trend ending at the current month.
    pub fn monthly_trend_today(payments: &[Payment], expenses: &[Expense]) -> MonthlyTrend {
        Self::monthly_trend(
            payments,
            expenses,
            DEFAULT_WINDOW_MONTHS,
            Utc::now().date_naive(),
        )
    }

    /// Per-property leaderboard over the full history, sorted by profit
    /// descending. Equal profits keep their input order, so a high-margin
    /// low-revenue property never outranks an equally profitable larger one.
    pub fn profitability_ranking(
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
    ) -> Vec<ProfitabilityRow> {
        let mut rows: Vec<ProfitabilityRow> = properties
            .iter()
            .map(|property| {
                let scope = RecordScope::property(property.id);
                let revenue: f64 = payments_with_status(payments, &scope, PaymentStatus::Paid)
                    .iter()
                    .map(|p| p.amount)
                    .sum();
                let spent: f64 = expenses_in_scope(expenses, &scope)
                    .iter()
                    .map(|e| e.amount)
                    .sum();
                let profit = revenue - spent;
                ProfitabilityRow {
                    property_id: property.id,
                    name: property.name.clone(),
                    revenue,
                    expenses: spent,
                    profit,
                    roi_pct: profit_margin_pct(profit, revenue),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
        rows
    }

    /// Display name for a property reference, tolerating dangling ids.
    pub fn property_label(properties: &[Property], property_id: Uuid) -> String {
        find_by_id(properties, property_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROPERTY_LABEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentfolio_domain::PropertyKind;

    #[test]
    fn occupancy_is_zero_for_an_empty_portfolio() {
        assert_eq!(AnalyticsService::occupancy_rate(&[]), 0.0);
    }

    #[test]
    fn occupancy_counts_rented_properties_only() {
        let properties = vec![
            Property::new("A", "1 rue A", 40.0, PropertyKind::Apartment).with_rent(800.0),
            Property::new("B", "2 rue B", 60.0, PropertyKind::House),
            Property::new("C", "3 rue C", 20.0, PropertyKind::Studio).with_rent(450.0),
            Property::new("D", "4 rue D", 30.0, PropertyKind::Other).with_rent(0.0),
        ];
        assert_eq!(AnalyticsService::occupancy_rate(&properties), 50.0);
    }

    #[test]
    fn dangling_property_reference_gets_a_placeholder() {
        let properties = vec![Property::new("A", "1 rue A", 40.0, PropertyKind::Apartment)];
        let label = AnalyticsService::property_label(&properties, Uuid::new_v4());
        assert_eq!(label, UNKNOWN_PROPERTY_LABEL);
        assert_eq!(
            AnalyticsService::property_label(&properties, properties[0].id),
            "A"
        );
    }
}
