use std::fmt;

/// Workflow status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Todo,
    UpNext,
    InProgress,
    Done,
}

impl Status {
    /// Parse the persisted key, e.g. "UP_NEXT"
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_uppercase().as_str() {
            "TODO" => Some(Self::Todo),
            "UP_NEXT" => Some(Self::UpNext),
            "IN_PROGRESS" => Some(Self::InProgress),
            "DONE" => Some(Self::Done),
            _ => None,
        }
    }

    /// The persisted key: multi-word statuses use `_` instead of space
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::UpNext => "UP_NEXT",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Todo => "TODO",
            Self::UpNext => "UP NEXT",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        };
        f.write_str(label)
    }
}
