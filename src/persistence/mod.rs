pub mod files;
pub mod parser;
pub mod schema;
pub mod serializer;

pub use files::{atomic_write, ensure_store_dir, get_store_dir, load_tasks, save_tasks, tasks_file};
pub use parser::parse_tasks;
pub use schema::{DueDateJson, PriorityJson, TagJson, TaskJson};
pub use serializer::{serialize_task, serialize_tasks};
