use super::error::DomainError;
use super::priority::Priority;
use super::todo::Todo;
use std::hash::{Hash, Hasher};

/// A project: an ordered collection of tasks and sub-projects.
///
/// Invariants: no duplicate child (by equality) and a project never
/// contains itself. Progress and estimated time aggregate over children.
#[derive(Debug, Clone)]
pub struct Project {
    description: String,
    priority: Priority,
    children: Vec<Todo>,
}

impl Project {
    pub fn new(description: &str) -> Result<Self, DomainError> {
        if description.is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        Ok(Self {
            description: description.to_string(),
            priority: Priority::new(),
            children: Vec::new(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
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

    /// Append a child unless an equal one exists or the child is this
    /// project itself; both cases are silent no-ops.
    pub fn add(&mut self, todo: Todo) {
        if self.contains(&todo) {
            return;
        }
        if matches!(&todo, Todo::Project(p) if *p == *self) {
            return;
        }
        self.children.push(todo);
    }

    /// Remove the child equal to the given todo, if present
    pub fn remove(&mut self, todo: &Todo) {
        if let Some(pos) = self.children.iter().position(|c| c == todo) {
            self.children.remove(pos);
        }
    }

    /// Membership test by equality
    pub fn contains(&self, todo: &Todo) -> bool {
        self.children.iter().any(|c| c == todo)
    }

    /// Number of direct children (tasks and sub-projects)
    pub fn number_of_tasks(&self) -> usize {
        self.children.len()
    }

    /// Mean of the children's progress, rounded down; 0 with no children
    pub fn progress(&self) -> u8 {
        if self.children.is_empty() {
            return 0;
        }
        let total: u32 = self.children.iter().map(|c| c.progress() as u32).sum();
        (total / self.children.len() as u32) as u8
    }

    /// True if the project has at least one child and all are complete
    pub fn is_completed(&self) -> bool {
        !self.children.is_empty() && self.progress() == 100
    }

    /// Hours of work left across all children, recursively
    pub fn estimated_time_to_complete(&self) -> u64 {
        self.children
            .iter()
            .map(|c| c.estimated_time_to_complete())
            .sum()
    }

    /// Iterate the children grouped by priority quadrant 1 through 4,
    /// keeping insertion order within a quadrant
    pub fn priority_iter(&self) -> PriorityIter<'_> {
        PriorityIter::new(&self.children)
    }
}

// Projects are identified by description alone
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
    }
}

impl<'a> IntoIterator for &'a Project {
    type Item = &'a Todo;
    type IntoIter = PriorityIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.priority_iter()
    }
}

/// Priority-stratified traversal over a project's children.
///
/// Each instance carries its own cursor (current quadrant, scan position,
/// emitted count), so several iterators over one project are independent.
pub struct PriorityIter<'a> {
    children: &'a [Todo],
    quadrant: u8,
    index: usize,
    emitted: usize,
}

impl<'a> PriorityIter<'a> {
    fn new(children: &'a [Todo]) -> Self {
        Self {
            children,
            quadrant: 1,
            index: 0,
            emitted: 0,
        }
    }

    /// True while unvisited children remain. Every child has a quadrant in
    /// 1..=4, so the traversal always covers the whole list.
    pub fn has_next(&self) -> bool {
        self.emitted < self.children.len()
    }

    /// The next child in priority order, or `IteratorExhausted` once the
    /// traversal is complete
    pub fn try_next(&mut self) -> Result<&'a Todo, DomainError> {
        while self.quadrant <= 4 {
            while self.index < self.children.len() {
                let i = self.index;
                self.index += 1;
                if self.children[i].priority().quadrant() == self.quadrant {
                    self.emitted += 1;
                    return Ok(&self.children[i]);
                }
            }
            self.quadrant += 1;
            self.index = 0;
        }
        Err(DomainError::IteratorExhausted)
    }
}

impl<'a> Iterator for PriorityIter<'a> {
    type Item = &'a Todo;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}
