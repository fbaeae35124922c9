pub mod due_date;
pub mod enums;
pub mod error;
pub mod priority;
pub mod project;
pub mod tag;
pub mod task;
pub mod todo;

pub use due_date::DueDate;
pub use enums::Status;
pub use error::DomainError;
pub use priority::Priority;
pub use project::{PriorityIter, Project};
pub use tag::Tag;
pub use task::Task;
pub use todo::Todo;
