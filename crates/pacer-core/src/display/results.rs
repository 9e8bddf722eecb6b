//! Markdown rendering of export runs.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    progress::ProgressSummary,
    runner::{ExportReport, StoredArtifact},
};

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Export report")?;
        writeln!(f)?;
        if let Some(generated_at) = &self.generated_at {
            writeln!(f, "Generated: {}", LocalDateTime(generated_at))?;
            writeln!(f)?;
        }
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(artifacts) => {
                    let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
                    writeln!(f, "- **{}**: ok ({})", outcome.format, names.join(", "))?;
                }
                Err(e) => writeln!(f, "- **{}**: failed: {e}", outcome.format)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No progress data found.");
        }
        writeln!(
            f,
            "Progress: {}/{} sessions completed ({:.1}%).",
            self.completed,
            self.total,
            self.percent()
        )?;
        if self.streak > 0 {
            writeln!(f, "- Current streak: {} session(s)", self.streak)?;
        }
        match &self.next {
            Some(next) => {
                write!(f, "- Next: Week {}, Day {}", next.week, next.day)?;
                if let Some(date) = next.date {
                    write!(f, " ({date})")?;
                }
                writeln!(f)
            }
            None => writeln!(f, "- All sessions completed."),
        }
    }
}

/// Where each artifact of a run was written.
pub struct StoredArtifacts<'a>(pub &'a [StoredArtifact]);

impl fmt::Display for StoredArtifacts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No artifacts written.");
        }
        for stored in self.0 {
            match &stored.location {
                Ok(location) => writeln!(f, "- `{}` → {location}", stored.name)?,
                Err(e) => writeln!(f, "- `{}`: not written: {e}", stored.name)?,
            }
        }
        Ok(())
    }
}
