//! Shared traits, calendar primitives, and tolerant date parsing.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Exposes a stable identifier for entities held in stored collections.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Finds an entity by identifier, preserving nothing about order.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Parses a stored date string, tolerating the formats the app has written
/// over time. Returns `None` for anything unparseable.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Serde adapter for optional date fields stored as strings. Unparseable
/// values deserialize to `None` instead of failing the whole collection.
pub mod flexible_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_flexible_date))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A calendar month, ordered chronologically and keyed as `"YYYY-MM"`.
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn from_index(index: i32) -> Self {
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    pub fn minus_months(self, months: u32) -> Self {
        Self::from_index(self.index() - months as i32)
    }

    pub fn plus_months(self, months: u32) -> Self {
        Self::from_index(self.index() + months as i32)
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated")
    }

    pub fn last_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, days_in_month(self.year, self.month))
            .expect("month is validated")
    }

    /// Three-letter month label used by chart axes.
    pub fn short_label(self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "",
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DateWindowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value.split_once('-').ok_or(DateWindowError::InvalidMonthKey)?;
        let year: i32 = year.parse().map_err(|_| DateWindowError::InvalidMonthKey)?;
        let month: u32 = month.parse().map_err(|_| DateWindowError::InvalidMonthKey)?;
        YearMonth::new(year, month).ok_or(DateWindowError::InvalidMonthKey)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// An inclusive `[start, end]` reporting window.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn calendar_month(month: YearMonth) -> Self {
        Self {
            start: month.first_day(),
            end: month.last_day(),
        }
    }

    pub fn calendar_year(year: i32) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).expect("january 1st exists"),
            end: NaiveDate::from_ymd_opt(year, 12, 31).expect("december 31st exists"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing calendar values.
pub enum DateWindowError {
    InvalidRange,
    InvalidMonthKey,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must not precede start"),
            DateWindowError::InvalidMonthKey => f.write_str("month key must look like YYYY-MM"),
        }
    }
}

impl std::error::Error for DateWindowError {}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).expect("day 28 exists"));
    (first_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn flexible_date_accepts_iso_and_rfc3339() {
        assert_eq!(parse_flexible_date("2024-03-05"), Some(date(2024, 3, 5)));
        assert_eq!(
            parse_flexible_date("2024-03-05T10:30:00.000Z"),
            Some(date(2024, 3, 5))
        );
        assert_eq!(
            parse_flexible_date("2024-03-05T10:30:00"),
            Some(date(2024, 3, 5))
        );
    }

    #[test]
    fn flexible_date_rejects_garbage_silently() {
        assert_eq!(parse_flexible_date("not-a-date"), None);
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("2024-13-40"), None);
    }

    #[test]
    fn year_month_arithmetic_crosses_year_boundaries() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.minus_months(1), YearMonth::new(2023, 12).unwrap());
        assert_eq!(jan.minus_months(13), YearMonth::new(2022, 12).unwrap());
        assert_eq!(jan.plus_months(12), YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn year_month_renders_and_parses_its_key() {
        let key = YearMonth::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), key);
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-00".parse::<YearMonth>().is_err());
    }

    #[test]
    fn window_contains_both_endpoints() {
        let window = DateWindow::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert!(window.contains(date(2024, 3, 1)));
        assert!(window.contains(date(2024, 3, 31)));
        assert!(!window.contains(date(2024, 4, 1)));
        assert!(DateWindow::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
    }

    #[test]
    fn calendar_month_handles_leap_february() {
        let feb = DateWindow::calendar_month(YearMonth::new(2024, 2).unwrap());
        assert_eq!(feb.end, date(2024, 2, 29));
        let feb = DateWindow::calendar_month(YearMonth::new(2023, 2).unwrap());
        assert_eq!(feb.end, date(2023, 2, 28));
    }
}
