//! JSON storage for club data
//!
//! The whole club lives in `.club/club.json` as a single object with one
//! array per entity kind and an optional budget. Uses file locking for
//! concurrent access safety.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::{Attendance, Budget, Event, Member, Task};
use crate::model::ClubData;

/// On-disk shape of the data file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SerializedClub {
    #[serde(default)]
    members: Vec<Member>,

    #[serde(default)]
    events: Vec<Event>,

    #[serde(default)]
    tasks: Vec<Task>,

    #[serde(default)]
    attendance: Vec<Attendance>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<Budget>,
}

impl SerializedClub {
    fn from_data(data: &ClubData) -> Self {
        Self {
            members: data.members().snapshot(),
            events: data.events().snapshot(),
            tasks: data.tasks().snapshot(),
            attendance: data.attendance().snapshot(),
            budget: data.budget().cloned(),
        }
    }

    fn into_data(self) -> Result<ClubData> {
        let mut data = ClubData::new();
        data.set_members(self.members)
            .context("Data file contains duplicate members")?;
        data.set_events(self.events)
            .context("Data file contains duplicate events")?;
        data.set_tasks(self.tasks)
            .context("Data file contains duplicate tasks")?;
        data.set_attendance(self.attendance)
            .context("Data file contains duplicate attendance records")?;
        if let Some(budget) = self.budget {
            data.set_budget(budget);
        }
        Ok(data)
    }
}

/// Store for club data in a single JSON file
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Creates a data file handle at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole club; a missing file reads as an empty club
    pub fn load(&self) -> Result<ClubData> {
        if !self.path.exists() {
            return Ok(ClubData::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open data file: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on data file")?;

        let reader = BufReader::new(&file);
        let serialized: SerializedClub = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse data file: {}", self.path.display()))?;

        log::debug!(
            "loaded {} members, {} events, {} tasks, {} attendance records from {}",
            serialized.members.len(),
            serialized.events.len(),
            serialized.tasks.len(),
            serialized.attendance.len(),
            self.path.display()
        );

        // Lock is released when file is dropped
        serialized.into_data()
    }

    /// Writes the whole club (full rewrite)
    pub fn save(&self, data: &ClubData) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            // Acquire exclusive lock
            file.lock_exclusive()
                .context("Failed to acquire write lock on data file")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, &SerializedClub::from_data(data))
                .context("Failed to serialize club data")?;
            writeln!(writer).context("Failed to write data file")?;

            writer.flush().context("Failed to flush data file")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        log::debug!("saved club data to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Year};
    use tempfile::TempDir;

    fn sample() -> ClubData {
        let mut data = ClubData::new();
        data.add_member(
            Member::new(
                "Alice",
                "A1234567X".parse().unwrap(),
                Year::new(2).unwrap(),
                "alice@u.nus.edu".parse().unwrap(),
                "91234567".parse().unwrap(),
            )
            .unwrap()
            .with_role("President"),
        )
        .unwrap();
        data.add_event(
            Event::new(
                "E1".parse().unwrap(),
                "2024-03-01".parse().unwrap(),
                "Camp",
                Amount::from_cents(12_050),
            )
            .unwrap(),
        )
        .unwrap();
        data.add_task(Task::new("Book venue", "2024-02-01".parse().unwrap()).unwrap())
            .unwrap();
        data.add_attendance(Attendance::new("E1".parse().unwrap(), "Alice", true).unwrap())
            .unwrap();
        data.set_budget(
            Budget::new(
                Amount::from_cents(50_000),
                "2024-01-01".parse().unwrap(),
                "2024-12-31".parse().unwrap(),
            )
            .unwrap(),
        );
        data
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("club.json"));

        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("club.json"));
        let data = sample();

        file.save(&data).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn load_rejects_duplicate_identities() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("club.json");
        fs::write(
            &path,
            r#"{"events":[
                {"id":"E1","date":"2024-01-01","description":"X"},
                {"id":"E1","date":"2024-01-02","description":"Y"}
            ]}"#,
        )
        .unwrap();

        let err = DataFile::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate events"));
    }

    #[test]
    fn load_rejects_invalid_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("club.json");
        fs::write(&path, r#"{"tasks":[{"title":"T","deadline":"not a date"}]}"#).unwrap();

        assert!(DataFile::new(&path).load().is_err());
    }

    #[test]
    fn load_rejects_inverted_budget() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("club.json");
        fs::write(
            &path,
            r#"{"budget":{"amount":"10.00","start":"2024-12-31","end":"2024-01-01"}}"#,
        )
        .unwrap();

        let err = DataFile::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("before start date"));
    }

    #[test]
    fn load_rejects_blank_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("club.json");
        fs::write(
            &path,
            r#"{"members":[{"name":"   ","student_number":"A1234567X","year":1,
                "email":"a@u.nus.edu","phone":"91234567"}]}"#,
        )
        .unwrap();

        let err = DataFile::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("Name must not be blank"));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("nested").join("club.json"));

        file.save(&ClubData::new()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn atomic_write() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("club.json"));

        file.save(&sample()).unwrap();

        // Temp file should not exist after write
        let temp_path = file.path().with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn order_survives_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("club.json"));

        let mut data = ClubData::new();
        for title in ["Zeta", "Alpha", "Mu"] {
            data.add_task(Task::new(title, "2024-01-01".parse().unwrap()).unwrap())
                .unwrap();
        }
        file.save(&data).unwrap();

        let titles: Vec<_> = file
            .load()
            .unwrap()
            .tasks()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mu"]);
    }
}
