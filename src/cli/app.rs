//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{attendance, budget, event, member, task};
use crate::model::ModelManager;
use crate::storage::{Config, Project};

#[derive(Parser)]
#[command(name = "club")]
#[command(author, version, about = "Local-first administration for student clubs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new club project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage members
    #[command(subcommand)]
    Member(member::MemberCommands),

    /// Manage events
    #[command(subcommand)]
    Event(event::EventCommands),

    /// Manage tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Record event attendance
    #[command(subcommand)]
    Attend(attendance::AttendCommands),

    /// Manage the club budget
    #[command(subcommand)]
    Budget(budget::BudgetCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.format {
        Some(format) => format,
        None => Config::load()
            .map(|config| OutputFormat::from(config.global.default_format))
            .unwrap_or_default(),
    };
    let output = Output::new(format, cli.verbose);
    output.install_logger();

    output.verbose("Clubroll starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Data file: {}", project.data_file().path().display()),
            );
            output.success(&format!(
                "Initialized club project at {}",
                project.root().display()
            ));
        }

        Commands::Member(cmd) => member::run(cmd, &output)?,
        Commands::Event(cmd) => event::run(cmd, &output)?,
        Commands::Task(cmd) => task::run(cmd, &output)?,
        Commands::Attend(cmd) => attendance::run(cmd, &output)?,
        Commands::Budget(cmd) => budget::run(cmd, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// An open project together with its loaded session
pub(super) struct Session {
    pub project: Project,
    pub manager: ModelManager,
}

impl Session {
    /// Opens the project in the current directory and loads its data
    pub fn open(output: &Output) -> Result<Self> {
        let project = Project::open_current()?;
        output.verbose_ctx(
            "session",
            &format!("Loading {}", project.data_file().path().display()),
        );
        let manager = project.open_session()?;
        Ok(Self { project, manager })
    }

    /// Runs `change` as one undoable step and saves on success
    ///
    /// Commits before the change; if the change fails the commit is rolled
    /// back and nothing is written.
    pub fn apply<T>(
        &mut self,
        output: &Output,
        change: impl FnOnce(&mut ModelManager) -> Result<T>,
    ) -> Result<T> {
        self.manager.commit();
        match change(&mut self.manager) {
            Ok(value) => {
                self.project.save_session(&self.manager)?;
                output.verbose_ctx("session", "Saved changes");
                Ok(value)
            }
            Err(e) => {
                self.manager.rollback_last_commit()?;
                output.verbose_ctx("session", "Change failed, rolled back commit");
                Err(e)
            }
        }
    }
}
