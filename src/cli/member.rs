//! Member CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::app::Session;
use super::attendance;
use super::output::Output;
use crate::domain::{Member, StudentNumber, Tag, Year};
use crate::model::{Filter, ModelManager};

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member
    ///
    /// Example:
    ///   club member add "Alice Tan" A1234567X --year 2 --email alice@u.nus.edu --phone 91234567
    Add {
        /// Full name
        name: String,

        /// Student number (e.g. A1234567X)
        student_number: String,

        /// Year of study
        #[arg(long)]
        year: u8,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Dietary requirements
        #[arg(long)]
        dietary: Option<String>,

        /// Role in the club
        #[arg(long)]
        role: Option<String>,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List members, optionally filtered
    List {
        /// Keep members whose name contains any of these words
        #[arg(long, num_args = 1..)]
        name: Vec<String>,

        /// Keep members with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Keep members with this role
        #[arg(long)]
        role: Option<String>,
    },

    /// Edit a member's details
    Edit {
        /// Student number of the member to edit
        student_number: String,

        #[arg(long)]
        name: Option<String>,

        /// New student number
        #[arg(long = "number")]
        new_number: Option<String>,

        #[arg(long)]
        year: Option<u8>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        dietary: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Delete a member
    Delete {
        /// Student number
        student_number: String,
    },
}

pub fn run(cmd: MemberCommands, output: &Output) -> Result<()> {
    match cmd {
        MemberCommands::Add {
            name,
            student_number,
            year,
            email,
            phone,
            dietary,
            role,
            tags,
        } => {
            let tags = tags
                .iter()
                .map(|t| t.parse::<Tag>())
                .collect::<Result<Vec<_>, _>>()?;
            let member = Member::new(
                &name,
                student_number.parse()?,
                Year::new(year)?,
                email.parse()?,
                phone.parse()?,
            )?
            .with_dietary(dietary.unwrap_or_default())
            .with_role(role.unwrap_or_default())
            .with_tags(tags);
            add_member(output, member)
        }
        MemberCommands::List { name, tag, role } => list_members(output, name, tag, role),
        MemberCommands::Edit {
            student_number,
            name,
            new_number,
            year,
            email,
            phone,
            dietary,
            role,
        } => {
            let number: StudentNumber = student_number.parse()?;
            let mut session = Session::open(output)?;
            let target = find_member(&session.manager, &number)?;

            let mut edited = match name {
                Some(name) => target.renamed(&name)?,
                None => target.clone(),
            };
            if let Some(n) = new_number {
                edited.student_number = n.parse()?;
            }
            if let Some(y) = year {
                edited.year = Year::new(y)?;
            }
            if let Some(e) = email {
                edited.email = e.parse()?;
            }
            if let Some(p) = phone {
                edited.phone = p.parse()?;
            }
            if let Some(d) = dietary {
                edited = edited.with_dietary(d);
            }
            if let Some(r) = role {
                edited = edited.with_role(r);
            }

            let moved = session.apply(output, |m| {
                m.replace_member(&target, edited.clone())
                    .with_context(|| format!("Cannot update member {}", number))?;
                attendance::rename_member_records(m, &target.name, &edited.name)
            })?;
            output.verbose_ctx("member", &format!("Moved {} attendance record(s)", moved));

            if output.is_json() {
                output.data(&edited);
            } else {
                output.success(&format!("Updated member: {} ({})", edited.name, edited.student_number));
            }
            Ok(())
        }
        MemberCommands::Delete { student_number } => delete_member(output, &student_number),
    }
}

/// Finds the stored member with the given student number (any case)
pub(super) fn find_member(manager: &ModelManager, number: &StudentNumber) -> Result<Member> {
    manager
        .data()
        .members()
        .iter()
        .find(|m| m.student_number.matches(number))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Member not found: {}", number))
}

fn add_member(output: &Output, member: Member) -> Result<()> {
    let mut session = Session::open(output)?;
    output.verbose_ctx("member", &format!("Adding {}", member.student_number));

    session.apply(output, |m| {
        m.add_member(member.clone())
            .with_context(|| format!("Cannot add member {}", member.student_number))
    })?;

    if output.is_json() {
        output.data(&member);
    } else {
        output.success(&format!(
            "Added member: {} ({})",
            member.name, member.student_number
        ));
    }
    Ok(())
}

fn list_members(
    output: &Output,
    name: Vec<String>,
    tag: Option<String>,
    role: Option<String>,
) -> Result<()> {
    let mut session = Session::open(output)?;

    let filter = if !name.is_empty() {
        Filter::name_keywords(name)
    } else if let Some(tag) = tag {
        Filter::tag(tag)
    } else if let Some(role) = role {
        Filter::role(role)
    } else {
        Filter::all()
    };
    output.verbose_ctx("member", &format!("Filter: {}", filter.label()));
    session.manager.set_member_filter(filter);

    let members = session.manager.filtered_members();

    if output.is_json() {
        output.data(&members);
    } else if members.is_empty() {
        println!("No members");
    } else {
        if let Some(club) = &session.project.config().project.club_name {
            println!("{}", club);
            println!();
        }
        println!("{:<12} {:<24} {:<5} {:<12} ROLE", "NUMBER", "NAME", "YEAR", "PHONE");
        println!("{}", "-".repeat(70));

        for m in &members {
            println!(
                "{:<12} {:<24} {:<5} {:<12} {}",
                m.student_number, m.name, m.year, m.phone, m.role
            );
        }
    }

    Ok(())
}

fn delete_member(output: &Output, number_str: &str) -> Result<()> {
    let number: StudentNumber = number_str.parse()?;
    let mut session = Session::open(output)?;
    let member = find_member(&session.manager, &number)?;

    let dropped = session.apply(output, |m| {
        m.remove_member(&member)
            .with_context(|| format!("Cannot delete member {}", number))?;
        attendance::drop_member_records(m, &member.name)
    })?;
    output.verbose_ctx("member", &format!("Dropped {} attendance record(s)", dropped));

    output.success(&format!(
        "Deleted member: {} ({})",
        member.name, member.student_number
    ));
    Ok(())
}
