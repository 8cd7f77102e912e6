use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Urgency bucket of a dated todo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    Overdue,
    Today,
    Tomorrow,
}

impl DueBucket {
    /// Bucket for a day offset; anything two or more days out has none
    pub fn classify(days: i64) -> Option<Self> {
        match days {
            d if d < 0 => Some(DueBucket::Overdue),
            0 => Some(DueBucket::Today),
            1 => Some(DueBucket::Tomorrow),
            _ => None,
        }
    }

    /// Bucket for a `YYYY-MM-DD` due date relative to `today`
    pub fn for_due_date(due: &str, today: NaiveDate) -> Option<Self> {
        days_until(due, today).and_then(Self::classify)
    }
}

/// Calendar days from `today` to `due`; negative when overdue.
/// Dates with an out-of-range field (e.g. `2024-13-40`) have no offset.
pub fn days_until(due: &str, today: NaiveDate) -> Option<i64> {
    let due = parse_due_date(due)?;
    Some(due.signed_duration_since(today).num_days())
}

/// Parse `YYYY-MM-DD`, rolling a day past the end of its month into the
/// next one (`2026-04-31` is May 1st). Month must be 1-12 and day 1-31.
pub fn parse_due_date(due: &str) -> Option<NaiveDate> {
    let mut fields = due.splitn(3, '-');
    let year: i32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let day: u32 = fields.next()?.parse().ok()?;

    if !(1..=31).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

pub fn is_friday(today: NaiveDate) -> bool {
    today.weekday() == Weekday::Fri
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until() {
        let today = date(2026, 10, 14);
        assert_eq!(days_until("2026-10-14", today), Some(0));
        assert_eq!(days_until("2026-10-15", today), Some(1));
        assert_eq!(days_until("2026-10-13", today), Some(-1));
        assert_eq!(days_until("2026-11-14", today), Some(31));
        assert_eq!(days_until("2025-10-14", today), Some(-365));
    }

    #[test]
    fn test_days_until_is_stable_within_a_day() {
        let today = date(2026, 3, 8);
        let first = days_until("2026-03-09", today);
        assert_eq!(first, days_until("2026-03-09", today));
        assert_eq!(first, Some(1));
    }

    #[test]
    fn test_out_of_range_fields_have_no_offset() {
        let today = date(2026, 10, 14);
        assert_eq!(days_until("2024-13-40", today), None);
        assert_eq!(days_until("2026-13-01", today), None);
        assert_eq!(days_until("2026-00-10", today), None);
        assert_eq!(days_until("2026-10-00", today), None);
        assert_eq!(days_until("2026-10-32", today), None);
        assert_eq!(DueBucket::for_due_date("2024-13-40", today), None);
    }

    #[test]
    fn test_day_past_month_end_rolls_forward() {
        assert_eq!(parse_due_date("2026-04-31"), Some(date(2026, 5, 1)));
        assert_eq!(parse_due_date("2026-02-30"), Some(date(2026, 3, 2)));
        assert_eq!(parse_due_date("2024-02-30"), Some(date(2024, 3, 1)));
        assert_eq!(parse_due_date("2026-12-31"), Some(date(2026, 12, 31)));

        let may_first = date(2026, 5, 1);
        assert_eq!(days_until("2026-04-31", may_first), Some(0));
        assert_eq!(
            DueBucket::for_due_date("2026-04-31", may_first),
            Some(DueBucket::Today)
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(DueBucket::classify(-30), Some(DueBucket::Overdue));
        assert_eq!(DueBucket::classify(-1), Some(DueBucket::Overdue));
        assert_eq!(DueBucket::classify(0), Some(DueBucket::Today));
        assert_eq!(DueBucket::classify(1), Some(DueBucket::Tomorrow));
        assert_eq!(DueBucket::classify(2), None);
    }

    #[test]
    fn test_is_friday() {
        assert!(is_friday(date(2026, 10, 16)));
        assert!(!is_friday(date(2026, 10, 14)));
        assert!(!is_friday(date(2026, 10, 18)));
    }
}
