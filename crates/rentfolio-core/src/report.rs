//! Financial report composition over record snapshots.

use chrono::Utc;
use tracing::debug;

use rentfolio_domain::{
    find_by_id, DateWindow, Expense, FinancialReport, Payment, PaymentStatus, Property,
    ReportScope, YearMonth,
};

use crate::currency::ReportSettings;
use crate::filters::{expenses_in_scope, payments_in_scope, RecordScope};

/// Stateless report builder operating over immutable record snapshots.
pub struct ReportService;

impl ReportService {
    /// Composes income/expense totals for a scope and optional window.
    ///
    /// Income counts settled payments only; expected income counts every
    /// scoped payment. Expense totals include recoverable expenses, whose
    /// share is reported separately for display.
    pub fn build(
        scope: ReportScope,
        window: Option<DateWindow>,
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
        settings: &ReportSettings,
    ) -> FinancialReport {
        let selection = RecordScope {
            property_id: scope.property_id(),
            window,
        };

        let scoped_payments: Vec<Payment> = payments_in_scope(payments, &selection)
            .into_iter()
            .cloned()
            .collect();
        let scoped_expenses: Vec<Expense> = expenses_in_scope(expenses, &selection)
            .into_iter()
            .cloned()
            .collect();

        let total_income: f64 = scoped_payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.amount)
            .sum();
        let expected_income: f64 = scoped_payments.iter().map(|p| p.amount).sum();
        let total_expenses: f64 = scoped_expenses.iter().map(|e| e.amount).sum();
        let recoverable_expenses: f64 = scoped_expenses
            .iter()
            .filter(|e| e.is_recoverable)
            .map(|e| e.amount)
            .sum();

        let net_income = total_income - total_expenses;
        let margin_pct = profit_margin_pct(net_income, total_income);
        let currency = resolve_currency(scope, properties, settings);

        debug!(
            scope = %scope,
            total_income,
            total_expenses,
            "financial report composed"
        );

        FinancialReport {
            scope,
            window,
            currency,
            total_income,
            expected_income,
            total_expenses,
            recoverable_expenses,
            net_income,
            margin_pct,
            roi_pct: margin_pct,
            payments: scoped_payments,
            expenses: scoped_expenses,
        }
    }

    /// Report over one calendar month.
    pub fn calendar_month(
        scope: ReportScope,
        month: YearMonth,
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
        settings: &ReportSettings,
    ) -> FinancialReport {
        Self::build(
            scope,
            Some(DateWindow::calendar_month(month)),
            properties,
            payments,
            expenses,
            settings,
        )
    }

    /// Report over one calendar year.
    pub fn calendar_year(
        scope: ReportScope,
        year: i32,
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
        settings: &ReportSettings,
    ) -> FinancialReport {
        Self::build(
            scope,
            Some(DateWindow::calendar_year(year)),
            properties,
            payments,
            expenses,
            settings,
        )
    }

    /// Report over the month containing today.
    pub fn current_month(
        scope: ReportScope,
        properties: &[Property],
        payments: &[Payment],
        expenses: &[Expense],
        settings: &ReportSettings,
    ) -> FinancialReport {
        let today = Utc::now().date_naive();
        Self::calendar_month(
            scope,
            YearMonth::from_date(today),
            properties,
            payments,
            expenses,
            settings,
        )
    }
}

/// Net margin in percent, guarded so zero income yields 0 rather than NaN.
pub fn profit_margin_pct(net_income: f64, total_income: f64) -> f64 {
    if total_income > 0.0 {
        (net_income / total_income) * 100.0
    } else {
        0.0
    }
}

/// New rent after applying an indexation rate, rounded to cents.
pub fn apply_indexation(current_rent: f64, rate_pct: f64) -> f64 {
    (current_rent * (1.0 + rate_pct / 100.0) * 100.0).round() / 100.0
}

fn resolve_currency(
    scope: ReportScope,
    properties: &[Property],
    settings: &ReportSettings,
) -> String {
    scope
        .property_id()
        .and_then(|id| find_by_id(properties, id))
        .and_then(|property| property.currency.clone())
        .unwrap_or_else(|| settings.default_currency.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_zero_without_income() {
        assert_eq!(profit_margin_pct(-200.0, 0.0), 0.0);
        assert_eq!(profit_margin_pct(0.0, 0.0), 0.0);
        assert_eq!(profit_margin_pct(800.0, 1000.0), 80.0);
    }

    #[test]
    fn indexation_rounds_to_cents() {
        assert_eq!(apply_indexation(850.0, 3.5), 879.75);
        assert_eq!(apply_indexation(733.33, 2.0), 748.0);
        assert_eq!(apply_indexation(1000.0, 0.0), 1000.0);
    }
}
