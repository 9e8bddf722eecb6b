//! The canonical in-memory schedule consumed by every exporter.

use std::fmt;

use jiff::{
    civil::{Date, DateTime, Time},
    ToSpan,
};
use serde::{Deserialize, Serialize};

use super::{config::WeekdayOffset, PlanConfig, Profile};

/// What the user does during one interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Run,
    Walk,
}

impl Activity {
    /// Single-letter code used by the compact interval notation.
    pub fn code(&self) -> char {
        match self {
            Activity::Run => 'R',
            Activity::Walk => 'W',
        }
    }
}

/// One run or walk block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    pub activity: Activity,
    pub seconds: u32,
}

impl Interval {
    pub const fn run(seconds: u32) -> Self {
        Self {
            activity: Activity::Run,
            seconds,
        }
    }

    pub const fn walk(seconds: u32) -> Self {
        Self {
            activity: Activity::Walk,
            seconds,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.activity.code(), self.seconds)
    }
}

/// Render intervals in the compact `W300 R60 W90` notation.
pub fn format_intervals(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the compact interval notation produced by [`format_intervals`].
pub fn parse_intervals(s: &str) -> Option<Vec<Interval>> {
    s.split_whitespace()
        .map(|token| {
            let code = token.chars().next()?;
            let seconds = token[code.len_utf8()..].parse().ok()?;
            match code {
                'R' => Some(Interval::run(seconds)),
                'W' => Some(Interval::walk(seconds)),
                _ => None,
            }
        })
        .collect()
}

/// One scheduled occurrence, training or rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPlan {
    /// Week number, 1-based
    pub week: u32,

    /// Slot position within the week, 1-based
    pub day: u32,

    pub date: Date,

    pub start_time: Time,

    /// Duration before profile adjustment, in seconds
    pub nominal_seconds: u32,

    /// Duration after profile adjustment, in seconds
    pub adjusted_seconds: u32,

    /// Ordered run/walk blocks; empty for rest days and continuous runs
    #[serde(default)]
    pub intervals: Vec<Interval>,

    pub rest_day: bool,

    pub tip: String,

    pub instruction: String,

    /// Hydration and safety note
    pub note: String,
}

impl SessionPlan {
    /// Start of the session as a civil date-time.
    pub fn start(&self) -> DateTime {
        self.date.to_datetime(self.start_time)
    }

    /// End of the session: start plus the adjusted duration.
    pub fn end(&self) -> DateTime {
        let start = self.start();
        start
            .checked_add(i64::from(self.adjusted_seconds).seconds())
            .unwrap_or(start)
    }

    /// Weekday offset (Mon = 0) of the session date.
    pub fn weekday(&self) -> WeekdayOffset {
        super::config::weekday_offset(self.date.weekday())
    }

    /// True when the session is an actionable workout.
    pub fn is_training(&self) -> bool {
        !self.rest_day
    }
}

/// All sessions of one calendar week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    /// Week number, 1-based
    pub week: u32,
    pub sessions: Vec<SessionPlan>,
}

/// Localized labels used by document-style artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlanLabels {
    pub title: String,
    pub name: String,
    pub start_date: String,
    pub goal: String,
    pub week: String,
    pub day: String,
    pub rest_day: String,
    pub run: String,
    pub walk: String,
    pub warm_up: String,
    pub notes: String,
    pub resources: String,
    pub disclaimer: String,
    pub voice_intro: String,
    pub voice_outro: String,
}

/// The complete schedule. Immutable once the builder returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub profile: Profile,
    pub config: PlanConfig,
    pub labels: PlanLabels,
    pub weeks: Vec<WeekPlan>,
}

impl Plan {
    /// Every session in schedule order.
    pub fn sessions(&self) -> impl Iterator<Item = &SessionPlan> {
        self.weeks.iter().flat_map(|week| week.sessions.iter())
    }

    /// Sessions that are not rest days.
    pub fn training_sessions(&self) -> impl Iterator<Item = &SessionPlan> {
        self.sessions().filter(|session| session.is_training())
    }

    pub fn total_sessions(&self) -> usize {
        self.weeks.iter().map(|week| week.sessions.len()).sum()
    }

    /// Date of the last scheduled session.
    pub fn end_date(&self) -> Option<Date> {
        self.sessions().last().map(|session| session.date)
    }

    /// Locate a session by week and day number.
    pub fn session(&self, week: u32, day: u32) -> Option<&SessionPlan> {
        self.sessions()
            .find(|session| session.week == week && session.day == day)
    }
}
