//! Project management
//!
//! Handles project initialization and provides access to the data file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::CLUB_DIR;
use super::{Config, DataFile};
use crate::model::ModelManager;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a club project. Run 'club init' first.")]
    NotInProject,
}

/// A club project rooted at a directory containing `.club/`
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(CLUB_DIR).is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let club_dir = root.join(CLUB_DIR);

        fs::create_dir_all(&club_dir).with_context(|| {
            format!("Failed to create {} directory: {}", CLUB_DIR, club_dir.display())
        })?;

        // Create default config
        let config_path = club_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Clubroll configuration

# Name shown in listings
# club_name = "My Club"

# Data file, relative to this directory
data_file = "club.json"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let project = Self::open(root)?;

        // Seed an empty data file so the layout is complete
        let data_file = project.data_file();
        if !data_file.path().exists() {
            data_file.save(&Default::default())?;
        }

        Ok(project)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .club directory path
    pub fn club_dir(&self) -> PathBuf {
        self.root.join(CLUB_DIR)
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the data file
    pub fn data_file(&self) -> DataFile {
        DataFile::new(self.club_dir().join(&self.config.project.data_file))
    }

    /// Loads the data file into a fresh session
    pub fn open_session(&self) -> Result<ModelManager> {
        let data = self.data_file().load()?;
        Ok(ModelManager::new(&data))
    }

    /// Writes the session's live data back to the data file
    pub fn save_session(&self, manager: &ModelManager) -> Result<()> {
        self.data_file().save(manager.data())
    }
}
