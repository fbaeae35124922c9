use super::error::DomainError;
use chrono::{DateTime, Datelike, Days, Local, Timelike};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Due date of a task: a due instant plus a "now" snapshot captured at
/// construction, against which the relative predicates compare.
#[derive(Debug, Clone)]
pub struct DueDate {
    due: DateTime<Local>,
    now: DateTime<Local>,
}

impl DueDate {
    /// Due at the end of the current day (23:59 local)
    pub fn new() -> Self {
        let now = Local::now();
        let due = now
            .with_hour(23)
            .and_then(|d| d.with_minute(59))
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(now);
        Self { due, now }
    }

    /// Due at the given instant
    pub fn from_datetime(due: DateTime<Local>) -> Self {
        Self {
            due,
            now: Local::now(),
        }
    }

    /// The due instant
    pub fn datetime(&self) -> DateTime<Local> {
        self.due
    }

    /// Replace the due instant, keeping the "now" snapshot
    pub fn set_due_date(&mut self, due: DateTime<Local>) {
        self.due = due;
    }

    /// Change the due time to hh:mm, leaving the date untouched
    pub fn set_due_time(&mut self, hour: i32, minute: i32) -> Result<(), DomainError> {
        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(DomainError::InvalidTime { hour, minute });
        }
        self.due = self
            .due
            .with_hour(hour as u32)
            .and_then(|d| d.with_minute(minute as u32))
            .unwrap_or(self.due);
        Ok(())
    }

    /// Postpone the due date by one calendar day, keeping the time of day
    pub fn postpone_one_day(&mut self) {
        self.due = self.due.checked_add_days(Days::new(1)).unwrap_or(self.due);
    }

    /// Postpone the due date by seven calendar days, keeping the time of day
    pub fn postpone_one_week(&mut self) {
        self.due = self.due.checked_add_days(Days::new(7)).unwrap_or(self.due);
    }

    /// True if the due instant has passed
    pub fn is_overdue(&self) -> bool {
        self.now > self.due
    }

    /// True if due at any time today
    pub fn is_due_today(&self) -> bool {
        self.now.year() == self.due.year()
            && self.now.month() == self.due.month()
            && self.now.day() == self.due.day()
    }

    /// True if due at any time tomorrow.
    ///
    /// Compares day-of-month within the same month and year; a due date on
    /// the first of the next month does not count. Same field comparison in
    /// [`DueDate::is_due_within_a_week`].
    pub fn is_due_tomorrow(&self) -> bool {
        self.now.year() == self.due.year()
            && self.now.month() == self.due.month()
            && self.due.day() == self.now.day() + 1
    }

    /// True if due between the start of today and six days from now
    pub fn is_due_within_a_week(&self) -> bool {
        let days_between = self.due.day() as i64 - self.now.day() as i64;
        self.now.year() == self.due.year()
            && self.now.month() == self.due.month()
            && days_between >= 0
            && days_between < 7
    }

    pub fn year(&self) -> i32 {
        self.due.year()
    }

    /// Calendar month, 1 through 12
    pub fn month(&self) -> u32 {
        self.due.month()
    }

    pub fn day(&self) -> u32 {
        self.due.day()
    }

    /// Hour of day, 0 through 23
    pub fn hour(&self) -> u32 {
        self.due.hour()
    }

    pub fn minute(&self) -> u32 {
        self.due.minute()
    }

    #[cfg(test)]
    pub(crate) fn with_now(due: DateTime<Local>, now: DateTime<Local>) -> Self {
        Self { due, now }
    }
}

impl Default for DueDate {
    fn default() -> Self {
        Self::new()
    }
}

// Equality at minute precision over the due instant; the "now" snapshot is
// transient state and never part of the value. The persisted schema stores
// exactly these five fields, so round-tripped due dates compare equal.
impl PartialEq for DueDate {
    fn eq(&self, other: &Self) -> bool {
        self.year() == other.year()
            && self.month() == other.month()
            && self.day() == other.day()
            && self.hour() == other.hour()
            && self.minute() == other.minute()
    }
}

impl Eq for DueDate {}

impl Hash for DueDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year().hash(state);
        self.month().hash(state);
        self.day().hash(state);
        self.hour().hash(state);
        self.minute().hash(state);
    }
}

impl fmt::Display for DueDate {
    /// Formats as e.g. "Sun Jan 25 2019 10:30 AM"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.due.format("%a %b %d %Y %I:%M %p"))
    }
}
