//! Time windows used to filter transactions
//!
//! Weekly, monthly and yearly windows are relative to a reference date
//! (normally today). A calendar-month window names one specific month and
//! ignores the reference, which is what historical browsing uses.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named time range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Window {
    /// Monday through Sunday of the reference date's week
    Weekly,
    /// The reference date's month (and year)
    Monthly,
    /// The reference date's year
    Yearly,
    /// One specific month
    CalendarMonth { year: i32, month: u32 },
}

impl Window {
    /// Create a calendar-month window, validating the month number
    pub fn calendar_month(year: i32, month: u32) -> Result<Self, WindowParseError> {
        if !(1..=12).contains(&month) {
            return Err(WindowParseError::InvalidMonth(month));
        }
        Ok(Self::CalendarMonth { year, month })
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Inclusive first and last day of the window.
    ///
    /// Returns `None` only for a calendar month that does not exist.
    pub fn bounds(&self, reference: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Weekly => {
                let offset = i64::from(reference.weekday().num_days_from_monday());
                let start = reference - Duration::days(offset);
                Some((start, start + Duration::days(6)))
            }
            Self::Monthly => month_bounds(reference.year(), reference.month()),
            Self::Yearly => Some((
                NaiveDate::from_ymd_opt(reference.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(reference.year(), 12, 31)?,
            )),
            Self::CalendarMonth { year, month } => month_bounds(*year, *month),
        }
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Monthly => date.year() == reference.year() && date.month() == reference.month(),
            Self::Yearly => date.year() == reference.year(),
            Self::CalendarMonth { year, month } => date.year() == *year && date.month() == *month,
            Self::Weekly => match self.bounds(reference) {
                Some((start, end)) => date >= start && date <= end,
                None => false,
            },
        }
    }

    /// Human-readable title, e.g. "March 2025" or "Weekly"
    pub fn title(&self) -> String {
        match self {
            Self::CalendarMonth { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .map(|d| d.format("%B %Y").to_string())
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_month - Duration::days(1)))
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
            Self::CalendarMonth { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}

impl FromStr for Window {
    type Err = WindowParseError;

    /// Parses `weekly`, `monthly`, `yearly` or a calendar month `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "weekly" | "week" => return Ok(Self::Weekly),
            "monthly" | "month" => return Ok(Self::Monthly),
            "yearly" | "year" => return Ok(Self::Yearly),
            _ => {}
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| WindowParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
        Self::calendar_month(year, month)
    }
}

/// Budget periods, each compared against the matching relative window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub const ALL: [BudgetPeriod; 3] = [
        BudgetPeriod::Weekly,
        BudgetPeriod::Monthly,
        BudgetPeriod::Yearly,
    ];

    /// The window this period's spending is measured over
    pub fn window(&self) -> Window {
        match self {
            Self::Weekly => Window::Weekly,
            Self::Monthly => Window::Monthly,
            Self::Yearly => Window::Yearly,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.window(), f)
    }
}

impl FromStr for BudgetPeriod {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Window>()? {
            Window::Weekly => Ok(Self::Weekly),
            Window::Monthly => Ok(Self::Monthly),
            Window::Yearly => Ok(Self::Yearly),
            Window::CalendarMonth { .. } => Err(WindowParseError::InvalidFormat(s.to_string())),
        }
    }
}

/// Error type for window parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(
                f,
                "Invalid window: '{}'. Use weekly, monthly, yearly or YYYY-MM",
                s
            ),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}. Must be 1-12", m),
        }
    }
}

impl std::error::Error for WindowParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_bounds_monday_to_sunday() {
        // 2025-03-13 is a Thursday
        let (start, end) = Window::Weekly.bounds(date(2025, 3, 13)).unwrap();
        assert_eq!(start, date(2025, 3, 10));
        assert_eq!(end, date(2025, 3, 16));

        // A Monday anchors its own week
        let (start, _) = Window::Weekly.bounds(date(2025, 3, 10)).unwrap();
        assert_eq!(start, date(2025, 3, 10));
    }

    #[test]
    fn test_weekly_contains() {
        let reference = date(2025, 3, 13);
        assert!(Window::Weekly.contains(date(2025, 3, 10), reference));
        assert!(Window::Weekly.contains(date(2025, 3, 16), reference));
        assert!(!Window::Weekly.contains(date(2025, 3, 9), reference));
        assert!(!Window::Weekly.contains(date(2025, 3, 17), reference));
    }

    #[test]
    fn test_monthly_requires_same_year() {
        let reference = date(2025, 3, 13);
        assert!(Window::Monthly.contains(date(2025, 3, 1), reference));
        assert!(!Window::Monthly.contains(date(2024, 3, 1), reference));
    }

    #[test]
    fn test_yearly_contains() {
        let reference = date(2025, 3, 13);
        assert!(Window::Yearly.contains(date(2025, 12, 31), reference));
        assert!(!Window::Yearly.contains(date(2026, 1, 1), reference));
    }

    #[test]
    fn test_calendar_month_boundary_belongs_to_exactly_one_month() {
        let reference = date(2030, 6, 1);
        let first_of_april = date(2025, 4, 1);
        let last_of_march = date(2025, 3, 31);

        let march = Window::calendar_month(2025, 3).unwrap();
        let april = Window::calendar_month(2025, 4).unwrap();

        assert!(april.contains(first_of_april, reference));
        assert!(!march.contains(first_of_april, reference));
        assert!(march.contains(last_of_march, reference));
        assert!(!april.contains(last_of_march, reference));
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = Window::calendar_month(2024, 2)
            .unwrap()
            .bounds(date(2000, 1, 1))
            .unwrap();
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(end, date(2024, 2, 29));

        let (_, end) = Window::Monthly.bounds(date(2025, 12, 5)).unwrap();
        assert_eq!(end, date(2025, 12, 31));
    }

    #[test]
    fn test_parse() {
        assert_eq!("weekly".parse::<Window>().unwrap(), Window::Weekly);
        assert_eq!("Yearly".parse::<Window>().unwrap(), Window::Yearly);
        assert_eq!(
            "2025-03".parse::<Window>().unwrap(),
            Window::CalendarMonth { year: 2025, month: 3 }
        );
        assert_eq!(
            "2025-13".parse::<Window>(),
            Err(WindowParseError::InvalidMonth(13))
        );
        assert!("fortnightly".parse::<Window>().is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(Window::calendar_month(2025, 3).unwrap().title(), "March 2025");
        assert_eq!(Window::Monthly.title(), "Monthly");
    }

    #[test]
    fn test_budget_period_parse() {
        assert_eq!("monthly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert!("2025-03".parse::<BudgetPeriod>().is_err());
        assert_eq!(BudgetPeriod::Weekly.window(), Window::Weekly);
    }
}
