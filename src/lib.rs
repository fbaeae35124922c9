//! A personal task and project tracker.
//!
//! Tasks carry a description, an Eisenhower-matrix [`Priority`], progress,
//! an estimated time to complete, an optional [`DueDate`], a [`Status`] and
//! a set of [`Tag`]s. A description can embed attributes in an inline
//! mini-language — `"Do laundry! ## urgent; tomorrow; home"` — applied by
//! the [`TagParser`]. A [`Project`] nests tasks and sub-projects and
//! aggregates their progress; its traversal is stratified by priority
//! quadrant. The [`persistence`] module round-trips the task list through
//! a JSON store.

pub mod domain;
pub mod parsers;
pub mod persistence;

pub use domain::{DomainError, DueDate, Priority, PriorityIter, Project, Status, Tag, Task, Todo};
pub use parsers::{ParseError, TagParser};
