use super::schema::TaskJson;
use crate::domain::Task;
use anyhow::{Context, Result};

/// Serialize one task into its persisted JSON object
pub fn serialize_task(task: &Task) -> Result<serde_json::Value> {
    serde_json::to_value(TaskJson::from(task)).context("Failed to serialize task")
}

/// Serialize a task list into the persisted JSON array, pretty-printed
pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    let wire: Vec<TaskJson> = tasks.iter().map(TaskJson::from).collect();
    serde_json::to_string_pretty(&wire).context("Failed to serialize task list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DueDate, Priority, Status};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_serialize_task_fields() {
        let mut task = Task::new("Write report").unwrap();
        task.add_tag("work").unwrap();
        task.add_tag("Deep Focus").unwrap();
        task.set_status(Status::InProgress);
        task.set_priority(Priority::from_quadrant(1).unwrap());
        task.set_due_date(Some(DueDate::from_datetime(
            Local.with_ymd_and_hms(2019, 5, 15, 10, 12, 0).unwrap(),
        )));

        let json = serialize_task(&task).unwrap();
        assert_eq!(json["description"], "Write report");
        assert_eq!(json["status"], "IN_PROGRESS");
        assert_eq!(json["priority"]["important"], true);
        assert_eq!(json["priority"]["urgent"], true);
        assert_eq!(json["due-date"]["year"], 2019);
        assert_eq!(json["due-date"]["month"], 4);
        assert_eq!(json["due-date"]["day"], 15);
        assert_eq!(json["due-date"]["hour"], 10);
        assert_eq!(json["due-date"]["minute"], 12);
        // Original casing persisted, no '#' prefix
        assert_eq!(json["tags"][1]["name"], "Deep Focus");
    }

    #[test]
    fn test_serialize_task_without_due_date() {
        let task = Task::new("No deadline").unwrap();
        let json = serialize_task(&task).unwrap();
        assert!(json["due-date"].is_null());
    }

    #[test]
    fn test_serialize_tasks_is_array() {
        let tasks = vec![
            Task::new("first").unwrap(),
            Task::new("second").unwrap(),
        ];
        let output = serialize_tasks(&tasks).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["description"], "first");
        assert_eq!(value[1]["description"], "second");
    }

    #[test]
    fn test_serialize_empty_list() {
        let output = serialize_tasks(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 0);
    }
}
