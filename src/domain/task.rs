use super::due_date::DueDate;
use super::enums::Status;
use super::error::DomainError;
use super::priority::Priority;
use super::tag::Tag;
use crate::parsers::TagParser;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single task: description, priority, progress, estimated hours of work,
/// optional due date, status and a set of tags.
///
/// Tags are unique by case-insensitive name; the casing of the first
/// insertion is the one stored and displayed.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    priority: Priority,
    progress: u8,
    etc_hours: u64,
    due_date: Option<DueDate>,
    status: Status,
    tags: Vec<Tag>,
}

impl Task {
    /// Create a task from a raw description.
    ///
    /// The description may carry inline tags after a `##` delimiter; they
    /// are parsed and applied immediately, so
    /// `Task::new("buy milk ## urgent")` arrives with urgency already set.
    /// A description without the delimiter is stored verbatim.
    pub fn new(description: &str) -> Result<Self, DomainError> {
        if description.is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        let mut task = Self {
            description: description.to_string(),
            priority: Priority::new(),
            progress: 0,
            etc_hours: 0,
            due_date: None,
            status: Status::Todo,
            tags: Vec::new(),
        };
        // A missing delimiter is the no-tags case here, not a failure
        let _ = TagParser::new().parse(description, &mut task);
        Ok(task)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description, re-applying the inline tag grammar.
    ///
    /// Attributes carried by tags in the new description are applied on top
    /// of the current state; attributes not re-specified keep their values.
    pub fn set_description(&mut self, input: &str) -> Result<(), DomainError> {
        if input.is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        let _ = TagParser::new().parse(input, self);
        Ok(())
    }

    /// Overwrite the description without running the tag grammar
    pub(crate) fn set_raw_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn priority_mut(&mut self) -> &mut Priority {
        &mut self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref()
    }

    pub fn set_due_date(&mut self, due_date: Option<DueDate>) {
        self.due_date = due_date;
    }

    /// Percentage of completion, 0 through 100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: i32) -> Result<(), DomainError> {
        if !(0..=100).contains(&progress) {
            return Err(DomainError::InvalidProgress(progress));
        }
        self.progress = progress as u8;
        Ok(())
    }

    /// Estimated time to complete, in whole hours of work
    pub fn estimated_time_to_complete(&self) -> u64 {
        self.etc_hours
    }

    pub fn set_estimated_time_to_complete(&mut self, hours: i64) -> Result<(), DomainError> {
        if hours < 0 {
            return Err(DomainError::NegativeEstimate(hours));
        }
        self.etc_hours = hours as u64;
        Ok(())
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Add a tag unless one with the same case-insensitive name exists
    pub fn add_tag(&mut self, name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyTagName);
        }
        if !self.contains_tag(name)? {
            self.tags.push(Tag::new(name)?);
        }
        Ok(())
    }

    /// Remove the tag matching the name case-insensitively, if present
    pub fn remove_tag(&mut self, name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyTagName);
        }
        let lowered = name.to_lowercase();
        self.tags.retain(|t| t.name().to_lowercase() != lowered);
        Ok(())
    }

    /// Case-insensitive tag membership test
    pub fn contains_tag(&self, name: &str) -> Result<bool, DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyTagName);
        }
        let lowered = name.to_lowercase();
        Ok(self.tags.iter().any(|t| t.name().to_lowercase() == lowered))
    }
}

// Composite identity: description, due date, status, priority. Tags are
// presentation metadata and stay out of the key.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.due_date == other.due_date
            && self.status == other.status
            && self.priority == other.priority
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
        self.due_date.hash(state);
        self.status.hash(state);
        self.priority.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let due = self
            .due_date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let tags = self
            .tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "{{")?;
        writeln!(f, "\tDescription: {}", self.description)?;
        writeln!(f, "\tDue date: {}", due)?;
        writeln!(f, "\tStatus: {}", self.status)?;
        writeln!(f, "\tPriority: {}", self.priority)?;
        writeln!(f, "\tTags: {}", tags)?;
        write!(f, "}}")
    }
}
