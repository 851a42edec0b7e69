//! Task CLI commands

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::app::Session;
use super::output::Output;
use crate::domain::Task;
use crate::model::{Filter, ModelManager};

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    ///
    /// Example:
    ///   club task add "Book venue" --deadline 2024-07-15
    Add {
        /// Task title
        title: String,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: NaiveDate,
    },

    /// List tasks
    List {
        /// Show only finished tasks
        #[arg(long, conflicts_with = "open")]
        done: bool,

        /// Show only unfinished tasks
        #[arg(long)]
        open: bool,

        /// Show only tasks due on or before this date
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Mark a task as done
    Done {
        /// Task title
        title: String,
    },

    /// Mark a task as not done
    Undone {
        /// Task title
        title: String,
    },

    /// Delete a task
    Delete {
        /// Task title
        title: String,
    },
}

pub fn run(cmd: TaskCommands, output: &Output) -> Result<()> {
    match cmd {
        TaskCommands::Add { title, deadline } => add_task(output, Task::new(&title, deadline)?),
        TaskCommands::List { done, open, due } => list_tasks(output, done, open, due),
        TaskCommands::Done { title } => set_done(output, &title, true),
        TaskCommands::Undone { title } => set_done(output, &title, false),
        TaskCommands::Delete { title } => delete_task(output, &title),
    }
}

fn find_task(manager: &ModelManager, title: &str) -> Result<Task> {
    manager
        .data()
        .tasks()
        .iter()
        .find(|t| t.title == title)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", title))
}

fn add_task(output: &Output, task: Task) -> Result<()> {
    let mut session = Session::open(output)?;

    session.apply(output, |m| {
        m.add_task(task.clone())
            .with_context(|| format!("Cannot add task '{}'", task.title))
    })?;

    if output.is_json() {
        output.data(&task);
    } else {
        output.success(&format!("Added task: {} (due {})", task.title, task.deadline));
    }
    Ok(())
}

fn list_tasks(output: &Output, done: bool, open: bool, due: Option<NaiveDate>) -> Result<()> {
    let mut session = Session::open(output)?;

    let filter = match (done, open, due) {
        (_, _, Some(date)) => Filter::due_by(date),
        (true, _, None) => Filter::done(true),
        (_, true, None) => Filter::done(false),
        _ => Filter::all(),
    };
    output.verbose_ctx("task", &format!("Filter: {}", filter.label()));
    session.manager.set_task_filter(filter);

    let tasks = session.manager.filtered_tasks();

    if output.is_json() {
        output.data(&tasks);
    } else if tasks.is_empty() {
        println!("No tasks");
    } else {
        println!("{:<6} {:<12} TITLE", "DONE", "DEADLINE");
        println!("{}", "-".repeat(50));

        let today = Local::now().date_naive();
        for t in &tasks {
            let mark = if t.done { "[x]" } else { "[ ]" };
            let overdue = if t.is_overdue(today) { "  (overdue)" } else { "" };
            println!("{:<6} {:<12} {}{}", mark, t.deadline, t.title, overdue);
        }
    }

    Ok(())
}

fn set_done(output: &Output, title: &str, done: bool) -> Result<()> {
    let mut session = Session::open(output)?;
    let target = find_task(&session.manager, title)?;

    if target.done == done {
        output.success(&format!("Task already {}: {}", state_label(done), title));
        return Ok(());
    }

    let edited = if done {
        target.marked_done()
    } else {
        target.marked_undone()
    };
    session.apply(output, |m| {
        m.replace_task(&target, edited)
            .with_context(|| format!("Cannot update task '{}'", title))
    })?;

    output.success(&format!("Marked {}: {}", state_label(done), title));
    Ok(())
}

fn state_label(done: bool) -> &'static str {
    if done {
        "done"
    } else {
        "not done"
    }
}

fn delete_task(output: &Output, title: &str) -> Result<()> {
    let mut session = Session::open(output)?;
    let task = find_task(&session.manager, title)?;

    session.apply(output, |m| {
        m.remove_task(&task)
            .with_context(|| format!("Cannot delete task '{}'", title))
    })?;

    output.success(&format!("Deleted task: {}", task.title));
    Ok(())
}
