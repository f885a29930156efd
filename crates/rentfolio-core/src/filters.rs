//! Pure, order-preserving record selection.

use chrono::NaiveDate;
use uuid::Uuid;

use rentfolio_domain::{DateWindow, Expense, ExpenseCategory, Payment, PaymentStatus};

/// What a selection ranges over: one property or all of them, optionally
/// narrowed to a date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordScope {
    pub property_id: Option<Uuid>,
    pub window: Option<DateWindow>,
}

impl RecordScope {
    pub fn portfolio() -> Self {
        Self::default()
    }

    pub fn property(property_id: Uuid) -> Self {
        Self {
            property_id: Some(property_id),
            window: None,
        }
    }

    pub fn between(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    fn admits_property(&self, property_id: Uuid) -> bool {
        self.property_id.map(|id| id == property_id).unwrap_or(true)
    }

    /// A record without a parseable date never matches a window, but passes
    /// when no window is set.
    fn admits_date(&self, date: Option<NaiveDate>) -> bool {
        match self.window {
            None => true,
            Some(window) => date.map(|d| window.contains(d)).unwrap_or(false),
        }
    }
}

/// Payments inside the scope. Settled payments match the window by paid
/// date, pending or late ones by due date.
pub fn payments_in_scope<'a>(payments: &'a [Payment], scope: &RecordScope) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| scope.admits_property(p.property_id) && scope.admits_date(p.effective_date()))
        .collect()
}

pub fn payments_with_status<'a>(
    payments: &'a [Payment],
    scope: &RecordScope,
    status: PaymentStatus,
) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| {
            p.status == status
                && scope.admits_property(p.property_id)
                && scope.admits_date(p.effective_date())
        })
        .collect()
}

pub fn expenses_in_scope<'a>(expenses: &'a [Expense], scope: &RecordScope) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| scope.admits_property(e.property_id) && scope.admits_date(e.date))
        .collect()
}

pub fn expenses_in_category<'a>(
    expenses: &'a [Expense],
    scope: &RecordScope,
    category: Option<ExpenseCategory>,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| {
            category.map(|c| e.category == c).unwrap_or(true)
                && scope.admits_property(e.property_id)
                && scope.admits_date(e.date)
        })
        .collect()
}
