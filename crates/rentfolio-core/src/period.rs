//! Calendar bucketing for trend series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use rentfolio_domain::YearMonth;

/// Trailing window the dashboards chart by default.
pub const DEFAULT_WINDOW_MONTHS: u32 = 12;

/// Sums record amounts into one bucket per calendar month of the trailing
/// window ending at `reference`'s month. Every month of the window is
/// present, zeroed when nothing landed in it; records outside the window or
/// without a parseable date are dropped.
pub fn month_buckets<T, D, A>(
    records: &[T],
    date_of: D,
    amount_of: A,
    window_months: u32,
    reference: NaiveDate,
) -> BTreeMap<YearMonth, f64>
where
    D: Fn(&T) -> Option<NaiveDate>,
    A: Fn(&T) -> f64,
{
    let mut buckets = BTreeMap::new();
    let current = YearMonth::from_date(reference);
    for back in (0..window_months).rev() {
        buckets.insert(current.minus_months(back), 0.0);
    }
    for record in records {
        let Some(date) = date_of(record) else {
            continue;
        };
        if let Some(slot) = buckets.get_mut(&YearMonth::from_date(date)) {
            *slot += amount_of(record);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentfolio_domain::{Payment, PaymentStatus};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_still_yields_a_full_zeroed_window() {
        let buckets = month_buckets(
            &[] as &[Payment],
            |p| p.effective_date(),
            |p| p.amount,
            12,
            date(2024, 6, 15),
        );
        assert_eq!(buckets.len(), 12);
        assert!(buckets.values().all(|v| *v == 0.0));
        let keys: Vec<String> = buckets.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys.first().map(String::as_str), Some("2023-07"));
        assert_eq!(keys.last().map(String::as_str), Some("2024-06"));
    }

    #[test]
    fn amounts_accumulate_in_their_month() {
        let property = Uuid::new_v4();
        let mut a = Payment::new(property, 850.0, date(2024, 5, 1));
        a.mark_paid(date(2024, 5, 3));
        let mut b = Payment::new(property, 150.0, date(2024, 5, 15));
        b.mark_paid(date(2024, 5, 20));
        let c = Payment::new(property, 999.0, date(2022, 1, 1)); // outside window
        let payments = vec![a, b, c];

        let buckets = month_buckets(
            &payments,
            |p| p.effective_date(),
            |p| p.amount,
            12,
            date(2024, 6, 15),
        );
        let may = YearMonth::new(2024, 5).unwrap();
        assert_eq!(buckets.get(&may), Some(&1000.0));
        assert_eq!(buckets.values().sum::<f64>(), 1000.0);
    }

    #[test]
    fn dateless_records_are_skipped_not_fatal() {
        let property = Uuid::new_v4();
        let mut broken = Payment::new(property, 500.0, date(2024, 6, 1));
        broken.due_date = None;
        broken.status = PaymentStatus::Pending;
        let buckets = month_buckets(
            &[broken],
            |p| p.effective_date(),
            |p| p.amount,
            3,
            date(2024, 6, 15),
        );
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.values().sum::<f64>(), 0.0);
    }

    #[test]
    fn window_length_is_configurable() {
        let buckets = month_buckets(
            &[] as &[Payment],
            |p| p.effective_date(),
            |p| p.amount,
            6,
            date(2024, 1, 31),
        );
        assert_eq!(buckets.len(), 6);
        assert_eq!(
            buckets.keys().next().map(|k| k.to_string()),
            Some("2023-08".into())
        );
    }
}
