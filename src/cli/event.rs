//! Event CLI commands

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;

use super::app::Session;
use super::attendance;
use super::output::Output;
use crate::domain::{Amount, Event, EventId};
use crate::model::Filter;

#[derive(Subcommand)]
pub enum EventCommands {
    /// Add an event
    ///
    /// Example:
    ///   club event add FOC24 --date 2024-08-01 --desc "Freshmen camp" --expense 350.50
    Add {
        /// Event id (no spaces)
        id: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Description
        #[arg(long = "desc")]
        description: String,

        /// Amount spent
        #[arg(long, default_value = "0")]
        expense: String,
    },

    /// List events, optionally filtered
    List {
        /// Earliest date (inclusive)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Latest date (inclusive)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// Keep events whose description contains this word
        #[arg(long)]
        keyword: Option<String>,
    },

    /// Change an event's date, description or expense
    Edit {
        /// Event id
        id: String,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long)]
        expense: Option<String>,
    },

    /// Delete an event
    Delete {
        /// Event id
        id: String,
    },
}

pub fn run(cmd: EventCommands, output: &Output) -> Result<()> {
    match cmd {
        EventCommands::Add {
            id,
            date,
            description,
            expense,
        } => {
            let event = Event::new(id.parse()?, date, &description, expense.parse()?)?;
            add_event(output, event)
        }
        EventCommands::List { from, to, keyword } => list_events(output, from.zip(to), keyword),
        EventCommands::Edit {
            id,
            date,
            description,
            expense,
        } => edit_event(output, &id, date, description, expense),
        EventCommands::Delete { id } => delete_event(output, &id),
    }
}

fn add_event(output: &Output, event: Event) -> Result<()> {
    let mut session = Session::open(output)?;
    output.verbose_ctx("event", &format!("Adding {}", event.id));

    session.apply(output, |m| {
        m.add_event(event.clone())
            .with_context(|| format!("Cannot add event {}", event.id))
    })?;

    if output.is_json() {
        output.data(&event);
    } else {
        output.success(&format!("Added event: {} - {}", event.id, event.description));
    }
    Ok(())
}

fn list_events(
    output: &Output,
    range: Option<(NaiveDate, NaiveDate)>,
    keyword: Option<String>,
) -> Result<()> {
    let mut session = Session::open(output)?;

    let filter = match (range, keyword) {
        (Some((from, to)), _) => Filter::between(from, to),
        (None, Some(keyword)) => Filter::description_keyword(keyword),
        (None, None) => Filter::all(),
    };
    output.verbose_ctx("event", &format!("Filter: {}", filter.label()));
    session.manager.set_event_filter(filter);

    let events = session.manager.filtered_events();

    if output.is_json() {
        output.data(&events);
    } else if events.is_empty() {
        println!("No events");
    } else {
        println!("{:<12} {:<12} {:>10} DESCRIPTION", "ID", "DATE", "EXPENSE");
        println!("{}", "-".repeat(60));

        for e in &events {
            println!(
                "{:<12} {:<12} {:>10} {}",
                e.id,
                e.date,
                e.expense.to_string(),
                e.description
            );
        }
    }

    Ok(())
}

fn edit_event(
    output: &Output,
    id_str: &str,
    date: Option<NaiveDate>,
    description: Option<String>,
    expense: Option<String>,
) -> Result<()> {
    let id: EventId = id_str.parse()?;
    let mut session = Session::open(output)?;
    let target = session
        .manager
        .event_by_id(&id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Event not found: {}", id))?;

    let edited = Event::new(
        target.id.clone(),
        date.unwrap_or(target.date),
        description.as_deref().unwrap_or(&target.description),
        match expense {
            Some(e) => e.parse::<Amount>()?,
            None => target.expense,
        },
    )?;

    session.apply(output, |m| {
        m.replace_event(&target, edited.clone())
            .with_context(|| format!("Cannot update event {}", id))
    })?;

    if output.is_json() {
        output.data(&edited);
    } else {
        output.success(&format!("Updated event: {} - {}", edited.id, edited.description));
    }
    Ok(())
}

fn delete_event(output: &Output, id_str: &str) -> Result<()> {
    let id: EventId = id_str.parse()?;
    let mut session = Session::open(output)?;
    let event = session
        .manager
        .event_by_id(&id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Event not found: {}", id))?;

    let dropped = session.apply(output, |m| {
        m.remove_event(&event)
            .with_context(|| format!("Cannot delete event {}", id))?;
        attendance::drop_event_records(m, &event.id)
    })?;
    output.verbose_ctx("event", &format!("Dropped {} attendance record(s)", dropped));

    output.success(&format!("Deleted event: {}", event.id));
    Ok(())
}
