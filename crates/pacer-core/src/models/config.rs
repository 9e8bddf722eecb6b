//! Plan configuration: length, cadence and weekday layout.

use std::collections::BTreeSet;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PacerError, Result},
    planner::PlanTemplate,
};

/// Longest supported plan.
pub const MAX_WEEKS: u32 = 52;

/// Shortest session the duration adjuster may produce, in seconds.
pub const DEFAULT_MIN_SESSION_SECS: u32 = 600;

/// Weekday offsets counted from Monday (0) to Sunday (6).
pub type WeekdayOffset = u8;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Short English name of a weekday offset.
pub fn weekday_name(offset: WeekdayOffset) -> &'static str {
    WEEKDAY_NAMES[usize::from(offset % 7)]
}

/// Parse a weekday name such as `mon` or `Monday`.
pub fn parse_weekday(s: &str) -> Option<WeekdayOffset> {
    let lower = s.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|name| lower.starts_with(&name.to_lowercase()) && lower.len() >= 3)
        .and_then(|i| u8::try_from(i).ok())
}

/// Offset of a jiff weekday.
pub fn weekday_offset(weekday: Weekday) -> WeekdayOffset {
    // to_monday_zero_offset is always within 0..=6
    weekday.to_monday_zero_offset().unsigned_abs()
}

/// Structure of the plan independent of who follows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanConfig {
    /// Number of weeks in the plan
    pub weeks: u32,

    /// Training sessions per week; must equal the pattern length
    pub sessions_per_week: u32,

    /// Training weekdays in week order
    pub weekday_pattern: Vec<WeekdayOffset>,

    /// Weekdays emitted as explicit rest records
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub rest_days: BTreeSet<WeekdayOffset>,

    /// Floor for adjusted session durations, in seconds
    #[serde(default = "default_min_session")]
    pub min_session_secs: u32,
}

fn default_min_session() -> u32 {
    DEFAULT_MIN_SESSION_SECS
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weeks: 10,
            sessions_per_week: 3,
            weekday_pattern: vec![0, 2, 4],
            rest_days: BTreeSet::new(),
            min_session_secs: DEFAULT_MIN_SESSION_SECS,
        }
    }
}

impl PlanConfig {
    /// Check the configuration for consistency.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidConfig` for zero or too many weeks, an
    /// empty or repeating weekday pattern, offsets outside Monday..Sunday,
    /// a session count that does not match the pattern, or a minimum
    /// session longer than the shortest session of the plan.
    pub fn validate(&self) -> Result<()> {
        if self.weeks == 0 || self.weeks > MAX_WEEKS {
            return Err(PacerError::invalid_config("weeks")
                .with_reason(format!("must be between 1 and {MAX_WEEKS}, got {}", self.weeks)));
        }
        if self.weekday_pattern.is_empty() {
            return Err(
                PacerError::invalid_config("weekday_pattern").with_reason("must not be empty")
            );
        }
        if let Some(bad) = self
            .weekday_pattern
            .iter()
            .chain(self.rest_days.iter())
            .find(|offset| **offset > 6)
        {
            return Err(PacerError::invalid_config("weekday_pattern")
                .with_reason(format!("weekday offset {bad} is outside Mon(0)..Sun(6)")));
        }
        let unique: BTreeSet<_> = self.weekday_pattern.iter().collect();
        if unique.len() != self.weekday_pattern.len() {
            return Err(PacerError::invalid_config("weekday_pattern")
                .with_reason("must not repeat a weekday"));
        }
        if self.sessions_per_week as usize != self.weekday_pattern.len() {
            return Err(PacerError::invalid_config("sessions_per_week").with_reason(format!(
                "{} sessions per week do not match a pattern of {} weekday(s)",
                self.sessions_per_week,
                self.weekday_pattern.len()
            )));
        }
        let shortest = PlanTemplate::shortest_nominal_seconds(self.weeks);
        if self.min_session_secs > shortest {
            return Err(PacerError::invalid_config("min_session").with_reason(format!(
                "{} s exceeds the shortest session of the plan ({shortest} s)",
                self.min_session_secs
            )));
        }
        Ok(())
    }

    /// All weekly slots in calendar order, each flagged as rest or training.
    pub fn weekly_slots(&self) -> Vec<(WeekdayOffset, bool)> {
        let all: BTreeSet<WeekdayOffset> = self
            .weekday_pattern
            .iter()
            .chain(self.rest_days.iter())
            .copied()
            .collect();
        all.into_iter()
            .map(|offset| (offset, self.rest_days.contains(&offset)))
            .collect()
    }
}
