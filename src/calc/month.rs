use chrono::{Datelike, Days, NaiveDate};

/// Day 1 of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Number of days in `month` (1-based) of `year`. Returns 0 for an invalid
/// month or a year outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

/// Moves `date` by `months`, clamping the day to the end of the target month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.month0() as i32 + months;
    let new_year = date.year() + total.div_euclid(12);
    let new_month = total.rem_euclid(12) as u32 + 1;
    let new_day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

/// Day 1 of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    add_months(first_of_month(date), -1)
}

/// Day 1 of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    add_months(first_of_month(date), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(d(2024, 2, 29)), d(2024, 2, 1));
        assert_eq!(first_of_month(d(2024, 2, 1)), d(2024, 2, 1));
        assert_eq!(first_of_month(d(2023, 12, 31)), d(2023, 12, 1));
    }

    #[test]
    fn test_days_in_month_january() {
        assert_eq!(days_in_month(2025, 1), 31);
    }

    #[test]
    fn test_days_in_month_february_non_leap() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_month_february_leap() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_month_april() {
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn test_days_in_month_december() {
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_days_in_month_at_range_edges() {
        assert_eq!(days_in_month(262142, 12), 31);
        assert_eq!(days_in_month(NaiveDate::MAX.year(), 12), 31);
        assert_eq!(days_in_month(NaiveDate::MIN.year(), 1), 31);
        assert_eq!(days_in_month(NaiveDate::MAX.year() + 1, 1), 0);
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn test_add_months_forward() {
        assert_eq!(add_months(d(2025, 1, 15), 1), d(2025, 2, 15));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(d(2025, 11, 15), 2), d(2026, 1, 15));
    }

    #[test]
    fn test_add_months_backward_across_year() {
        assert_eq!(add_months(d(2025, 1, 10), -1), d(2024, 12, 10));
        assert_eq!(add_months(d(2025, 1, 10), -13), d(2023, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2024, 3, 31), -1), d(2024, 2, 29));
    }

    #[test]
    fn test_prev_and_next_month_land_on_day_one() {
        assert_eq!(prev_month(d(2024, 3, 31)), d(2024, 2, 1));
        assert_eq!(next_month(d(2024, 1, 31)), d(2024, 2, 1));
        assert_eq!(next_month(d(2024, 12, 5)), d(2025, 1, 1));
        assert_eq!(prev_month(d(2024, 1, 5)), d(2023, 12, 1));
    }
}
