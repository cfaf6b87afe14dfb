use chrono::{Datelike, Months, NaiveDate};

/// Utilities for date formatting and calendar arithmetic
///
/// Provides consistent date handling across the application

/// Format a date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Format a date as YYYY-MM-DD
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whole days between two dates, regardless of order
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Add calendar months to a date, clamping to the end of the target month
/// Example: 2025-01-31 + 1 month -> 2025-02-28
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(date), "01/12/2024");
    }

    #[test]
    fn test_format_date_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date_iso(date), "2024-03-15");
    }

    #[test]
    fn test_days_between() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        assert_eq!(days_between(a, b), 10);
        assert_eq!(days_between(b, a), 10);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_add_months() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(add_months(date, 6), NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        // Year rollover
        assert_eq!(add_months(date, 12), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        // Clamped to the end of a shorter month
        let eom = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(add_months(eom, 1), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        // Leap year February keeps the 29th
        let eom = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(add_months(eom, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
