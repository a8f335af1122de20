use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range, the unit of clinic availability and
/// booking selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::Inverted { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// True when `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Enumerate every day in the range, inclusive on both ends.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let total = (self.to - self.from).num_days();
        (0..=total).map(move |offset| self.from + Duration::days(offset))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Daily opening window. Absence on a record means the clinic is open
/// all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    #[error("date range is inverted: {from} > {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(DateRange::new(day("2024-01-31"), day("2024-01-01")).is_err());
    }

    #[test]
    fn test_containment() {
        let window = DateRange::new(day("2024-01-01"), day("2024-01-31")).unwrap();
        let inside = DateRange::new(day("2024-01-10"), day("2024-01-15")).unwrap();
        let outside = DateRange::new(day("2024-02-01"), day("2024-02-05")).unwrap();
        let straddling = DateRange::new(day("2024-01-20"), day("2024-02-02")).unwrap();

        assert!(window.contains_range(&inside));
        assert!(!window.contains_range(&outside));
        assert!(!window.contains_range(&straddling));
        assert!(window.overlaps(&straddling));
        assert!(!window.overlaps(&outside));
    }

    #[test]
    fn test_single_day_enumeration() {
        let range = DateRange::new(day("2024-03-05"), day("2024-03-05")).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![day("2024-03-05")]);
    }

    #[test]
    fn test_day_enumeration_inclusive() {
        let range = DateRange::new(day("2024-03-01"), day("2024-03-03")).unwrap();
        assert_eq!(range.days().count(), 3);
    }
}
