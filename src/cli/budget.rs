//! Budget CLI commands

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;

use super::app::Session;
use super::output::Output;
use crate::domain::Budget;

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the budget
    ///
    /// Example:
    ///   club budget set 1500 --start 2024-08-01 --end 2025-07-31
    Set {
        /// Amount available
        amount: String,

        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Remove the budget
    Clear,

    /// Show spending against the budget
    Show,
}

pub fn run(cmd: BudgetCommands, output: &Output) -> Result<()> {
    match cmd {
        BudgetCommands::Set { amount, start, end } => {
            let budget = Budget::new(amount.parse()?, start, end)?;
            let mut session = Session::open(output)?;
            session.apply(output, |m| {
                m.set_budget(budget.clone());
                Ok(())
            })?;
            output.success(&format!(
                "Budget set: {} from {} to {}",
                budget.amount, budget.start, budget.end
            ));
            Ok(())
        }
        BudgetCommands::Clear => {
            let mut session = Session::open(output)?;
            if session.manager.budget().is_none() {
                output.success("No budget set");
                return Ok(());
            }
            session.apply(output, |m| {
                m.clear_budget();
                Ok(())
            })?;
            output.success("Budget cleared");
            Ok(())
        }
        BudgetCommands::Show => show(output),
    }
}

fn show(output: &Output) -> Result<()> {
    let session = Session::open(output)?;

    let Some(summary) = session.manager.budget_summary() else {
        if output.is_json() {
            output.data(&serde_json::Value::Null);
        } else {
            println!("No budget set");
        }
        return Ok(());
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "amount": summary.budget.amount,
            "start": summary.budget.start,
            "end": summary.budget.end,
            "spent": summary.spent,
            "remaining": summary.remaining(),
            "overspent": summary.is_overspent(),
            "events": summary.event_count,
        }));
    } else {
        println!(
            "Budget {} for {} to {}",
            summary.budget.amount, summary.budget.start, summary.budget.end
        );
        println!("Spent     {} across {} event(s)", summary.spent, summary.event_count);
        if summary.is_overspent() {
            println!("Overspent by {}", summary.overspent_by());
        } else {
            println!("Remaining {}", summary.remaining());
        }
    }

    Ok(())
}
