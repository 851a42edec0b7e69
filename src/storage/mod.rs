//! # Storage Layer
//!
//! Persistence for club data with plain, diff-friendly file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Members, events, tasks, attendance, budget | JSON (one object) | `.club/club.json` |
//! | Project config | TOML | `.club/config.toml` |
//! | Global config | TOML | `~/.config/clubroll/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`DataFile`] takes a shared lock to read and an exclusive lock to write (`fs2`)
//! - All writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a club project
//! - [`DataFile`] - Load/save a whole [`ClubData`](crate::model::ClubData)
//! - [`Config`] - Project and global configuration

mod json;
mod config;
mod project;

pub use json::DataFile;
pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig};
pub use project::{Project, ProjectError};
