//! Domain model for rent payments.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{flexible_date, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Present in well-formed data; `None` when the stored string failed to
    /// parse, which keeps the record out of date-scoped aggregations.
    #[serde(default, with = "flexible_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "flexible_date")]
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(property_id: Uuid, amount: f64, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            tenant_id: None,
            amount,
            currency: None,
            due_date: Some(due_date),
            paid_date: None,
            status: PaymentStatus::Pending,
            method: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// The date a payment is bucketed under: settled payments by their paid
    /// date, pending or late ones by their due date.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.paid_date.or(self.due_date)
    }

    pub fn mark_paid(&mut self, paid_date: NaiveDate) {
        self.paid_date = Some(paid_date);
        self.status = PaymentStatus::Paid;
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of a rent payment.
pub enum PaymentStatus {
    Paid,
    Pending,
    Late,
    Partial,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Late => "Late",
            PaymentStatus::Partial => "Partial",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Check,
    Cash,
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn effective_date_prefers_paid_date() {
        let mut payment = Payment::new(Uuid::new_v4(), 850.0, date(2024, 3, 1));
        assert_eq!(payment.effective_date(), Some(date(2024, 3, 1)));
        payment.mark_paid(date(2024, 3, 5));
        assert_eq!(payment.effective_date(), Some(date(2024, 3, 5)));
        assert!(payment.is_paid());
    }

    #[test]
    fn malformed_due_date_deserializes_to_none() {
        let raw = format!(
            r#"{{"id":"{}","propertyId":"{}","amount":500.0,"dueDate":"soon","status":"pending","createdAt":"2024-01-01T00:00:00Z"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let payment: Payment = serde_json::from_str(&raw).unwrap();
        assert_eq!(payment.due_date, None);
        assert_eq!(payment.effective_date(), None);
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Late).unwrap(),
            "\"late\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
    }
}
