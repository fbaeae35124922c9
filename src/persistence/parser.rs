use super::schema::TaskJson;
use crate::domain::Task;
use anyhow::{Context, Result};

/// Parse the persisted JSON array back into tasks.
///
/// A malformed element is skipped with a warning; a document that is not a
/// JSON array at all is an error.
pub fn parse_tasks(input: &str) -> Result<Vec<Task>> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(input).context("Task store is not a JSON array")?;

    let mut tasks = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        let parsed = serde_json::from_value::<TaskJson>(value)
            .map_err(anyhow::Error::from)
            .and_then(TaskJson::into_task);
        match parsed {
            Ok(task) => tasks.push(task),
            Err(e) => {
                eprintln!("Warning: Skipping malformed task at index {}: {}", index, e);
            }
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::persistence::serializer::serialize_tasks;
    use crate::domain::{DueDate, Priority};
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_single_task() {
        let input = r#"[
            {
                "description": "Do laundry!",
                "tags": [{"name": "home"}, {"name": "chores"}],
                "due-date": {"minute": 59, "hour": 23, "day": 8, "month": 1, "year": 2019},
                "priority": {"important": true, "urgent": false},
                "status": "UP_NEXT"
            }
        ]"#;

        let tasks = parse_tasks(input).unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.description(), "Do laundry!");
        assert_eq!(task.status(), Status::UpNext);
        assert_eq!(task.priority().quadrant(), 2);
        assert!(task.contains_tag("home").unwrap());
        assert!(task.contains_tag("chores").unwrap());

        let due = task.due_date().unwrap();
        assert_eq!(due.year(), 2019);
        assert_eq!(due.month(), 2);
        assert_eq!(due.day(), 8);
        assert_eq!(due.hour(), 23);
        assert_eq!(due.minute(), 59);
    }

    #[test]
    fn test_parse_null_due_date() {
        let input = r#"[
            {
                "description": "No deadline",
                "tags": [],
                "due-date": null,
                "priority": {"important": false, "urgent": false},
                "status": "TODO"
            }
        ]"#;

        let tasks = parse_tasks(input).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].due_date().is_none());
    }

    #[test]
    fn test_malformed_element_is_skipped() {
        let input = r#"[
            {
                "description": "good task",
                "tags": [],
                "due-date": null,
                "priority": {"important": false, "urgent": false},
                "status": "TODO"
            },
            {"description": "missing everything else"},
            {
                "description": "bad status",
                "tags": [],
                "due-date": null,
                "priority": {"important": false, "urgent": false},
                "status": "SOMEDAY"
            },
            {
                "description": "also good",
                "tags": [],
                "due-date": null,
                "priority": {"important": true, "urgent": true},
                "status": "DONE"
            }
        ]"#;

        let tasks = parse_tasks(input).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description(), "good task");
        assert_eq!(tasks[1].description(), "also good");
    }

    #[test]
    fn test_not_an_array_is_an_error() {
        assert!(parse_tasks("{}").is_err());
        assert!(parse_tasks("not json").is_err());
    }

    #[test]
    fn test_round_trip_preserves_tasks() {
        let mut with_date = Task::new("Write report").unwrap();
        with_date.add_tag("work").unwrap();
        with_date.set_status(Status::InProgress);
        with_date.set_priority(Priority::from_quadrant(1).unwrap());
        with_date.set_due_date(Some(DueDate::from_datetime(
            Local.with_ymd_and_hms(2019, 7, 31, 11, 30, 0).unwrap(),
        )));

        let mut without_date = Task::new("Sharpen pencils").unwrap();
        without_date.add_tag("Office").unwrap();
        without_date.set_status(Status::Done);
        without_date.set_priority(Priority::from_quadrant(3).unwrap());

        let originals = vec![with_date, without_date];
        let parsed = parse_tasks(&serialize_tasks(&originals).unwrap()).unwrap();

        assert_eq!(parsed, originals);
        // Tags sit outside the equality key; check them separately
        assert_eq!(parsed[0].tags(), originals[0].tags());
        assert_eq!(parsed[1].tags(), originals[1].tags());
    }

    #[test]
    fn test_round_trip_every_status_and_quadrant() {
        let mut originals = Vec::new();
        for (i, status) in [Status::Todo, Status::UpNext, Status::InProgress, Status::Done]
            .into_iter()
            .enumerate()
        {
            let mut task = Task::new(&format!("task number {}", i)).unwrap();
            task.set_status(status);
            task.set_priority(Priority::from_quadrant(i as i32 + 1).unwrap());
            originals.push(task);
        }

        let parsed = parse_tasks(&serialize_tasks(&originals).unwrap()).unwrap();
        assert_eq!(parsed, originals);
    }
}
