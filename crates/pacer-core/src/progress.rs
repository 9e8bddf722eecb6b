//! Progress logs: which sessions of a plan have been done.
//!
//! A log is a CSV file with at least `week`, `day` and `completed` columns.
//! The tabular artifact with a `completed` column appended is a valid log;
//! its `date` and `rest_day` columns are read when present, and rest rows are
//! not counted as sessions.

use std::{fs, path::Path};

use jiff::civil::Date;
use log::debug;
use serde::Deserialize;

use crate::error::{PacerError, Result};

/// Columns every log must have.
pub const REQUIRED_COLUMNS: [&str; 3] = ["week", "day", "completed"];

/// One logged session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    pub week: u32,
    pub day: u32,
    pub date: Option<Date>,
    pub rest_day: bool,
    pub completed: bool,
}

/// Where a runner stands, derived from a [`ProgressLog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Completed training sessions
    pub completed: usize,
    /// Logged training sessions
    pub total: usize,
    /// Consecutive completed sessions up to the latest completed one
    pub streak: usize,
    /// First training session not yet completed
    pub next: Option<ProgressEntry>,
}

impl ProgressSummary {
    /// Share of completed sessions, 0 for an empty log.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }
}

/// Rows as read from the file; every cell is text until checked.
#[derive(Debug, Deserialize)]
struct RawEntry {
    week: String,
    day: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    rest_day: String,
    completed: String,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "x" | "done" => Some(true),
        "no" | "n" | "false" | "0" | "" => Some(false),
        _ => None,
    }
}

impl RawEntry {
    fn into_entry(self) -> std::result::Result<ProgressEntry, String> {
        let number = |name: &str, value: &str| {
            value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("{name} must be a positive number, got '{value}'"))
        };
        let flag = |name: &str, value: &str| {
            parse_flag(value).ok_or_else(|| format!("{name} must be yes or no, got '{value}'"))
        };
        let date = if self.date.is_empty() {
            None
        } else {
            let date = self
                .date
                .parse::<Date>()
                .map_err(|_| format!("date must be YYYY-MM-DD, got '{}'", self.date))?;
            Some(date)
        };
        Ok(ProgressEntry {
            week: number("week", &self.week)?,
            day: number("day", &self.day)?,
            date,
            rest_day: flag("rest_day", &self.rest_day)?,
            completed: flag("completed", &self.completed)?,
        })
    }
}

fn invalid(row: usize, reason: impl ToString) -> PacerError {
    PacerError::InvalidProgress {
        row,
        reason: reason.to_string(),
    }
}

/// The rows of a progress log in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressLog {
    pub entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    /// Read a log from CSV bytes. Extra columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidProgress` naming the row (the header is
    /// row 1) of a missing column or an unreadable cell.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);
        let headers = reader.headers().map_err(|e| invalid(1, e))?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(invalid(1, format!("missing column '{missing}'")));
        }

        let mut entries = Vec::new();
        for (index, record) in reader.deserialize::<RawEntry>().enumerate() {
            let row = index + 2;
            let raw = record.map_err(|e| invalid(row, e))?;
            entries.push(raw.into_entry().map_err(|reason| invalid(row, reason))?);
        }
        Ok(Self { entries })
    }

    /// Read a log file.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::FileSystem` when the file cannot be read and
    /// `PacerError::InvalidProgress` when its content is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| PacerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        let log = Self::parse(&bytes)?;
        debug!("Read {} progress row(s) from {}", log.entries.len(), path.display());
        Ok(log)
    }

    /// Logged training sessions in plan order.
    pub fn training(&self) -> Vec<&ProgressEntry> {
        let mut sessions: Vec<_> = self.entries.iter().filter(|e| !e.rest_day).collect();
        sessions.sort_by_key(|e| (e.week, e.day));
        sessions
    }

    pub fn summary(&self) -> ProgressSummary {
        let sessions = self.training();
        ProgressSummary {
            completed: sessions.iter().filter(|e| e.completed).count(),
            total: sessions.len(),
            streak: sessions
                .iter()
                .rev()
                .skip_while(|e| !e.completed)
                .take_while(|e| e.completed)
                .count(),
            next: sessions.iter().find(|e| !e.completed).map(|e| (*e).clone()),
        }
    }
}
