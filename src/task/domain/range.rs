//! Calendar date ranges and the upstream query windows derived from them.

use super::TaskDomainError;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// Accepted calendar date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Inclusive range of calendar days.
///
/// Both ends cover the full day; when compared with timestamped records the
/// end boundary is `23:59:59` UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from already-parsed dates.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDate`] for the first input that is
    /// not a valid calendar date.
    pub fn parse(start: &str, end: &str) -> Result<Self, TaskDomainError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Builds the filter query for the active-task endpoint.
    ///
    /// The filter's day boundaries are exclusive and interpreted in the
    /// account's local time, so the window is padded by one day on each side.
    #[must_use]
    pub fn active_filter_query(&self) -> String {
        let before = self.start.checked_sub_days(Days::new(1)).unwrap_or(self.start);
        let after = self.end.checked_add_days(Days::new(1)).unwrap_or(self.end);
        format!(
            "created after: {} & created before: {}",
            before.format(DATE_FORMAT),
            after.format(DATE_FORMAT)
        )
    }

    /// Returns the UTC completion window covering the whole range.
    #[must_use]
    pub fn completion_window(&self) -> CompletionWindow {
        CompletionWindow {
            since: self.start.and_time(NaiveTime::MIN).and_utc(),
            until: self.end.and_time(END_OF_DAY).and_utc(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// UTC timestamp window used to query completed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompletionWindow {
    since: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl CompletionWindow {
    /// Wire format used for window boundaries.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%SZ";

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn since(&self) -> DateTime<Utc> {
        self.since
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn until(&self) -> DateTime<Utc> {
        self.until
    }

    /// Renders the lower bound in wire format.
    #[must_use]
    pub fn since_param(&self) -> String {
        self.since.format(Self::TIMESTAMP_FORMAT).to_string()
    }

    /// Renders the upper bound in wire format.
    #[must_use]
    pub fn until_param(&self) -> String {
        self.until.format(Self::TIMESTAMP_FORMAT).to_string()
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|reason| {
        TaskDomainError::InvalidDate {
            input: input.to_owned(),
            reason,
        }
    })
}
