//! Task domain model
//!
//! Club to-dos. A task is identified by its exact title.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{non_blank, FieldError};

/// A club task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Identity key
    pub title: String,

    pub deadline: NaiveDate,

    pub done: bool,
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct TaskRecord {
    title: String,
    deadline: NaiveDate,
    #[serde(default)]
    done: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = FieldError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task::new(&record.title, record.deadline)?;
        Ok(if record.done { task.marked_done() } else { task })
    }
}

impl Task {
    /// Creates a new, not yet done task
    pub fn new(title: &str, deadline: NaiveDate) -> Result<Self, FieldError> {
        Ok(Self {
            title: non_blank("Title", title)?,
            deadline,
            done: false,
        })
    }

    /// Returns a copy marked as done
    pub fn marked_done(&self) -> Self {
        Self {
            done: true,
            ..self.clone()
        }
    }

    /// Returns a copy marked as not done
    pub fn marked_undone(&self) -> Self {
        Self {
            done: false,
            ..self.clone()
        }
    }

    /// Returns true if this task and `other` share a title
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.title == other.title
    }

    /// Returns true if the task is still open and its deadline has passed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.deadline < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_task_is_open() {
        let task = Task::new("Book venue", date("2024-05-01")).unwrap();
        assert!(!task.done);
    }

    #[test]
    fn marking_done_keeps_identity() {
        let task = Task::new("Book venue", date("2024-05-01")).unwrap();
        let done = task.marked_done();

        assert!(done.done);
        assert!(task.is_same_task(&done));
        assert_ne!(task, done);
        assert_eq!(done.marked_undone(), task);
    }

    #[test]
    fn title_is_case_sensitive() {
        let a = Task::new("Book venue", date("2024-05-01")).unwrap();
        let b = Task::new("book venue", date("2024-05-01")).unwrap();
        assert!(!a.is_same_task(&b));
    }

    #[test]
    fn overdue_only_when_open() {
        let task = Task::new("Book venue", date("2024-05-01")).unwrap();

        assert!(task.is_overdue(date("2024-05-02")));
        assert!(!task.is_overdue(date("2024-05-01")));
        assert!(!task.marked_done().is_overdue(date("2024-06-01")));
    }
}
