use super::parser::parse_tasks;
use super::serializer::serialize_tasks;
use crate::domain::Task;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the store directory - checks for a local .quadrant first, then falls
/// back to the global ~/.quadrant
pub fn get_store_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_store(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".quadrant"))
}

/// Find a local .quadrant directory by walking up the directory tree
fn find_local_store(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let store_dir = current.join(".quadrant");
        if store_dir.exists() && store_dir.is_dir() {
            return Some(store_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the store directory exists
pub fn ensure_store_dir() -> Result<PathBuf> {
    let dir = get_store_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Path of the task store file
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_store_dir()?.join("tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Save the task list to the given path
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serialize_tasks(tasks)?;
    atomic_write(path, &json)
}

/// Load the task list from the given path; a missing file is an empty list
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_tasks(&content)
}
