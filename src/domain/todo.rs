use super::priority::Priority;
use super::project::Project;
use super::task::Task;

/// Either a single task or a project of nested todos.
///
/// Shared behavior lives here as dispatching accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Todo {
    Task(Task),
    Project(Project),
}

impl Todo {
    pub fn description(&self) -> &str {
        match self {
            Self::Task(t) => t.description(),
            Self::Project(p) => p.description(),
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Self::Task(t) => t.priority(),
            Self::Project(p) => p.priority(),
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        match self {
            Self::Task(t) => t.set_priority(priority),
            Self::Project(p) => p.set_priority(priority),
        }
    }

    /// Percentage of completion; a project reports the mean of its children
    pub fn progress(&self) -> u8 {
        match self {
            Self::Task(t) => t.progress(),
            Self::Project(p) => p.progress(),
        }
    }

    /// Estimated hours of work; a project reports the recursive sum
    pub fn estimated_time_to_complete(&self) -> u64 {
        match self {
            Self::Task(t) => t.estimated_time_to_complete(),
            Self::Project(p) => p.estimated_time_to_complete(),
        }
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(t) => Some(t),
            Self::Project(_) => None,
        }
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            Self::Task(_) => None,
            Self::Project(p) => Some(p),
        }
    }
}

impl From<Task> for Todo {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}

impl From<Project> for Todo {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}
