use crate::domain::{DueDate, Priority, Status, Task};
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Persisted form of a tag. The leading `#` of the display form is never
/// written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagJson {
    pub name: String,
}

/// Persisted form of a priority, as its two flag projections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityJson {
    pub important: bool,
    pub urgent: bool,
}

/// Persisted form of a due date, to the minute.
///
/// `month` is zero-based on the wire (January = 0); existing stores were
/// written that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueDateJson {
    pub minute: u32,
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Persisted form of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskJson {
    pub description: String,
    pub tags: Vec<TagJson>,
    #[serde(rename = "due-date")]
    pub due_date: Option<DueDateJson>,
    pub priority: PriorityJson,
    pub status: String,
}

impl From<&DueDate> for DueDateJson {
    fn from(due: &DueDate) -> Self {
        let dt = due.datetime();
        Self {
            minute: dt.minute(),
            hour: dt.hour(),
            day: dt.day(),
            month: dt.month0(),
            year: dt.year(),
        }
    }
}

impl DueDateJson {
    /// Rebuild the due date; out-of-range calendar fields are an error
    pub fn into_due_date(self) -> Result<DueDate> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
            .with_context(|| {
                format!(
                    "Invalid due date: year {} month {} day {}",
                    self.year, self.month, self.day
                )
            })?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .with_context(|| format!("Invalid due time: {}:{}", self.hour, self.minute))?;
        let local = Local
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .with_context(|| format!("Due date does not exist in the local timezone: {}", date))?;
        Ok(DueDate::from_datetime(local))
    }
}

impl From<Priority> for PriorityJson {
    fn from(priority: Priority) -> Self {
        Self {
            important: priority.is_important(),
            urgent: priority.is_urgent(),
        }
    }
}

impl From<PriorityJson> for Priority {
    fn from(json: PriorityJson) -> Self {
        let mut priority = Priority::new();
        priority.set_important(json.important);
        priority.set_urgent(json.urgent);
        priority
    }
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        Self {
            description: task.description().to_string(),
            tags: task
                .tags()
                .iter()
                .map(|t| TagJson {
                    name: t.name().to_string(),
                })
                .collect(),
            due_date: task.due_date().map(DueDateJson::from),
            priority: PriorityJson::from(task.priority()),
            status: task.status().as_key().to_string(),
        }
    }
}

impl TaskJson {
    /// Rebuild the task from its persisted fields
    pub fn into_task(self) -> Result<Task> {
        let mut task = Task::new(&self.description)?;
        for tag in &self.tags {
            task.add_tag(&tag.name)?;
        }
        task.set_due_date(match self.due_date {
            Some(json) => Some(json.into_due_date()?),
            None => None,
        });
        task.set_priority(Priority::from(self.priority));
        let status = Status::from_key(&self.status)
            .ok_or_else(|| anyhow!("Invalid status: {}", self.status))?;
        task.set_status(status);
        Ok(task)
    }
}
