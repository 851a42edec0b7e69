//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Project setup | `init` |
//! | Member | Roster | `member add`, `member list --name alice`, `member edit` |
//! | Event | Calendar and spending | `event add`, `event list --from 2024-01-01` |
//! | Task | Club to-dos | `task add`, `task done`, `task list --open` |
//! | Attendance | Who came | `attend mark E1 "Alice Tan"`, `attend list E1` |
//! | Budget | Spending limit | `budget set 500 --start ... --end ...`, `budget show` |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod member;
mod event;
mod task;
mod attendance;
mod budget;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
