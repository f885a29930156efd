//! Selection rules feeding payment and reminder notifications. Scheduling
//! and delivery belong to the surrounding app; these stay pure.

use chrono::{Duration, NaiveDate};

use rentfolio_domain::{Payment, Reminder};

/// Rent reminders fire this many days before the due date.
pub const PAYMENT_REMINDER_LEAD_DAYS: i64 = 3;
/// A payment counts as overdue once a full day has passed.
pub const LATE_NOTICE_LAG_DAYS: i64 = 1;

/// Unsettled payments due within the reminder lead window.
pub fn payments_due_soon<'a>(payments: &'a [Payment], reference: NaiveDate) -> Vec<&'a Payment> {
    let horizon = reference + Duration::days(PAYMENT_REMINDER_LEAD_DAYS);
    payments
        .iter()
        .filter(|p| {
            !p.is_paid()
                && p.due_date
                    .map(|due| due >= reference && due <= horizon)
                    .unwrap_or(false)
        })
        .collect()
}

/// Unsettled payments whose due date has passed by at least the lag.
pub fn payments_overdue<'a>(payments: &'a [Payment], reference: NaiveDate) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| {
            !p.is_paid()
                && p.due_date
                    .map(|due| due + Duration::days(LATE_NOTICE_LAG_DAYS) <= reference)
                    .unwrap_or(false)
        })
        .collect()
}

/// Open reminders falling due within the horizon.
pub fn reminders_due_soon<'a>(
    reminders: &'a [Reminder],
    reference: NaiveDate,
    horizon_days: i64,
) -> Vec<&'a Reminder> {
    let horizon = reference + Duration::days(horizon_days);
    reminders
        .iter()
        .filter(|r| {
            !r.is_completed
                && r.due_date
                    .map(|due| due >= reference && due <= horizon)
                    .unwrap_or(false)
        })
        .collect()
}

/// Open reminders already past due.
pub fn reminders_overdue<'a>(reminders: &'a [Reminder], reference: NaiveDate) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|r| !r.is_completed && r.due_date.map(|due| due < reference).unwrap_or(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentfolio_domain::ReminderKind;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_soon_spans_the_three_day_lead() {
        let property = Uuid::new_v4();
        let payments = vec![
            Payment::new(property, 850.0, date(2024, 3, 10)),
            Payment::new(property, 850.0, date(2024, 3, 13)),
            Payment::new(property, 850.0, date(2024, 3, 14)),
        ];
        let soon = payments_due_soon(&payments, date(2024, 3, 10));
        let dues: Vec<NaiveDate> = soon.iter().filter_map(|p| p.due_date).collect();
        assert_eq!(dues, vec![date(2024, 3, 10), date(2024, 3, 13)]);
    }

    #[test]
    fn settled_payments_never_alert() {
        let property = Uuid::new_v4();
        let mut paid = Payment::new(property, 850.0, date(2024, 3, 1));
        paid.mark_paid(date(2024, 3, 1));
        let payments = vec![paid];
        assert!(payments_due_soon(&payments, date(2024, 3, 1)).is_empty());
        assert!(payments_overdue(&payments, date(2024, 3, 20)).is_empty());
    }

    #[test]
    fn overdue_waits_a_full_day_past_due() {
        let property = Uuid::new_v4();
        let payments = vec![Payment::new(property, 850.0, date(2024, 3, 10))];
        assert!(payments_overdue(&payments, date(2024, 3, 10)).is_empty());
        assert_eq!(payments_overdue(&payments, date(2024, 3, 11)).len(), 1);
    }

    #[test]
    fn completed_reminders_drop_out() {
        let property = Uuid::new_v4();
        let mut done = Reminder::new(
            property,
            ReminderKind::LeaseRenewal,
            "Renew lease",
            date(2024, 3, 12),
        );
        done.complete();
        let open = Reminder::new(
            property,
            ReminderKind::RentIndexation,
            "Index rent",
            date(2024, 3, 12),
        );
        let reminders = vec![done, open];
        let due = reminders_due_soon(&reminders, date(2024, 3, 10), 7);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::RentIndexation);
        assert_eq!(reminders_overdue(&reminders, date(2024, 3, 20)).len(), 1);
    }
}
