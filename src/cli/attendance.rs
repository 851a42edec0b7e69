//! Attendance CLI commands
//!
//! The store keeps attendance as plain values, so the checks that the event
//! and member exist happen here before anything is added. Event and member
//! commands call the `*_records` helpers below inside their own change so
//! records never outlive what they point at.

use anyhow::{Context, Result};
use clap::Subcommand;

use super::app::Session;
use super::output::Output;
use crate::domain::{Attendance, EventId};
use crate::model::ModelManager;

#[derive(Subcommand)]
pub enum AttendCommands {
    /// Mark a member present (or absent) at an event
    ///
    /// Example:
    ///   club attend mark FOC24 "Alice Tan"
    Mark {
        /// Event id
        event_id: String,

        /// Member name, as on the roster
        member_name: String,

        /// Record the member as absent instead
        #[arg(long)]
        absent: bool,
    },

    /// Show attendance for an event
    List {
        /// Event id
        event_id: String,
    },

    /// Remove an attendance record
    Remove {
        /// Event id
        event_id: String,

        /// Member name
        member_name: String,
    },
}

pub fn run(cmd: AttendCommands, output: &Output) -> Result<()> {
    match cmd {
        AttendCommands::Mark {
            event_id,
            member_name,
            absent,
        } => mark(output, &event_id, &member_name, !absent),
        AttendCommands::List { event_id } => list(output, &event_id),
        AttendCommands::Remove {
            event_id,
            member_name,
        } => remove(output, &event_id, &member_name),
    }
}

fn mark(output: &Output, event_str: &str, member_name: &str, attended: bool) -> Result<()> {
    let event_id: EventId = event_str.parse()?;
    let mut session = Session::open(output)?;

    if session.manager.event_by_id(&event_id).is_none() {
        anyhow::bail!("Event not found: {}", event_id);
    }
    let on_roster = session
        .manager
        .data()
        .members()
        .iter()
        .any(|m| m.name == member_name.trim());
    if !on_roster {
        anyhow::bail!("No member named '{}'", member_name);
    }

    let record = Attendance::new(event_id, member_name, attended)?;
    let existing = session.manager.data().attendance().find(&record).cloned();

    session.apply(output, |m| match &existing {
        Some(old) => m
            .replace_attendance(old, record.clone())
            .context("Cannot update attendance"),
        None => m
            .add_attendance(record.clone())
            .context("Cannot record attendance"),
    })?;

    let state = if attended { "present" } else { "absent" };
    output.success(&format!(
        "Marked {} {} at {}",
        record.member_name, state, record.event_id
    ));
    Ok(())
}

fn list(output: &Output, event_str: &str) -> Result<()> {
    let event_id: EventId = event_str.parse()?;
    let session = Session::open(output)?;
    let records = session.manager.attendance_for_event(&event_id);

    if output.is_json() {
        output.data(&records);
    } else if records.is_empty() {
        println!("No attendance recorded for {}", event_id);
    } else {
        let present = records.iter().filter(|r| r.attended).count();
        println!("{:<24} ATTENDED", "MEMBER");
        println!("{}", "-".repeat(34));

        for r in &records {
            println!("{:<24} {}", r.member_name, if r.attended { "yes" } else { "no" });
        }

        println!();
        println!("{} of {} present", present, records.len());
    }

    Ok(())
}

fn remove(output: &Output, event_str: &str, member_name: &str) -> Result<()> {
    let event_id: EventId = event_str.parse()?;
    let mut session = Session::open(output)?;

    // Either flag identifies the record; remove needs the stored one exactly
    let probe = Attendance::new(event_id, member_name, false)?;
    let stored = session
        .manager
        .data()
        .attendance()
        .find(&probe)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No attendance record for '{}' at {}", probe.member_name, probe.event_id))?;

    session.apply(output, |m| {
        m.remove_attendance(&stored)
            .context("Cannot remove attendance record")
    })?;

    output.success(&format!(
        "Removed attendance of {} at {}",
        stored.member_name, stored.event_id
    ));
    Ok(())
}

/// Removes every record for `event_id`, returning how many were dropped
pub(super) fn drop_event_records(manager: &mut ModelManager, event_id: &EventId) -> Result<usize> {
    let records = manager.attendance_for_event(event_id);
    for record in &records {
        manager
            .remove_attendance(record)
            .context("Cannot remove attendance record")?;
    }
    Ok(records.len())
}

/// Removes the records of `name` once no member on the roster carries it
pub(super) fn drop_member_records(manager: &mut ModelManager, name: &str) -> Result<usize> {
    if name_on_roster(manager, name) {
        return Ok(0);
    }
    let records = records_for_name(manager, name);
    for record in &records {
        manager
            .remove_attendance(record)
            .context("Cannot remove attendance record")?;
    }
    Ok(records.len())
}

/// Moves the records of `old` to `new` once no member on the roster carries `old`
pub(super) fn rename_member_records(
    manager: &mut ModelManager,
    old: &str,
    new: &str,
) -> Result<usize> {
    if old == new || name_on_roster(manager, old) {
        return Ok(0);
    }
    let records = records_for_name(manager, old);
    for record in &records {
        let moved = Attendance::new(record.event_id.clone(), new, record.attended)?;
        manager.replace_attendance(record, moved).with_context(|| {
            format!(
                "Cannot move attendance at {} from '{}' to '{}'",
                record.event_id, old, new
            )
        })?;
    }
    Ok(records.len())
}

fn name_on_roster(manager: &ModelManager, name: &str) -> bool {
    manager.data().members().iter().any(|m| m.name == name)
}

fn records_for_name(manager: &ModelManager, name: &str) -> Vec<Attendance> {
    manager
        .data()
        .attendance()
        .iter()
        .filter(|r| r.member_name == name)
        .cloned()
        .collect()
}
