//! Parameter structures for Pacer operations
//!
//! These structures carry raw, unvalidated input from whatever interface
//! collected it (CLI flags, a settings file, a future GUI) without any
//! framework-specific derives. Validation into the typed models happens here,
//! in one place, so every interface rejects the same inputs with the same
//! errors.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Typed Models   │
//! │  (clap derives) │───▶│ (raw strings)   │───▶│ Profile/Config  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers convert their own argument types into these params with
//! `From` impls and call [`ProfileParams::into_profile`] /
//! [`PlanParams::into_config`].

use std::collections::BTreeSet;

use jiff::{
    civil::{Date, Time},
    ToSpan,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{PacerError, Result},
    models::{
        config::{parse_weekday, weekday_offset, DEFAULT_MIN_SESSION_SECS},
        Gender, Language, PlanConfig, Profile, UnitSystem, Weight, WeekdayOffset,
    },
};

/// Raw profile input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    /// Weight in the unit implied by `units`
    pub weight: Option<f64>,
    /// `metric` or `imperial`
    pub units: Option<String>,
    pub gender: Option<String>,
    pub language: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `HH:MM`, 24-hour clock
    pub session_time: Option<String>,
    pub goal: Option<String>,
    #[serde(default)]
    pub anonymize: bool,
}

/// Raw plan configuration input. Unset fields take the defaults of
/// [`PlanConfig::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanParams {
    pub weeks: Option<u32>,
    pub sessions_per_week: Option<u32>,
    /// Weekday names such as `mon`, `wed`, `fri`
    pub weekdays: Option<Vec<String>>,
    #[serde(default)]
    pub rest_days: Vec<String>,
    pub min_session_minutes: Option<u32>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| PacerError::invalid_profile(field).with_reason("is required"))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `PacerError::InvalidProfile` for the `start_date` field.
pub fn parse_date(s: &str) -> Result<Date> {
    s.trim().parse::<Date>().map_err(|e| {
        PacerError::invalid_profile("start_date")
            .with_reason(format!("expected YYYY-MM-DD, got '{s}': {e}"))
    })
}

/// Parse an `HH:MM` 24-hour time of day.
///
/// # Errors
///
/// Returns `PacerError::InvalidProfile` for the `session_time` field.
pub fn parse_time(s: &str) -> Result<Time> {
    let invalid = || {
        PacerError::invalid_profile("session_time")
            .with_reason(format!("expected HH:MM (24h), got '{s}'"))
    };
    let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// The Monday strictly after `today`.
pub fn next_monday(today: Date) -> Date {
    let days_ahead = 7 - i64::from(weekday_offset(today.weekday()));
    today.checked_add(days_ahead.days()).unwrap_or(today)
}

/// Training weekdays spread evenly over the week, starting on Monday.
pub fn spread_pattern(sessions_per_week: u32) -> Vec<WeekdayOffset> {
    let n = sessions_per_week.clamp(1, 7);
    let step = 7 / n;
    (0..n)
        .filter_map(|i| WeekdayOffset::try_from(i * step).ok())
        .collect()
}

impl ProfileParams {
    /// Validate the raw input into a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidProfile` for missing, unparsable or
    /// out-of-range values.
    pub fn into_profile(self) -> Result<Profile> {
        let units: UnitSystem = match self.units.as_deref() {
            Some(units) => units
                .parse()
                .map_err(|e: String| PacerError::invalid_profile("units").with_reason(e))?,
            None => UnitSystem::default(),
        };
        let gender: Gender = required(self.gender, "gender")?
            .parse()
            .map_err(|e: String| PacerError::invalid_profile("gender").with_reason(e))?;
        let language: Language = required(self.language, "language")?
            .parse()
            .map_err(|e: String| PacerError::invalid_profile("language").with_reason(e))?;
        let age = required(self.age, "age")?;
        let weight = required(self.weight, "weight")?;
        let start_date = parse_date(&required(self.start_date, "start_date")?)?;
        let session_time = parse_time(&required(self.session_time, "session_time")?)?;

        let profile = Profile {
            name: non_blank(self.name),
            email: non_blank(self.email),
            age,
            weight: Weight {
                value: weight,
                unit: units.weight_unit(),
            },
            gender,
            language,
            units,
            start_date,
            session_time,
            goal: non_blank(self.goal),
            anonymize: self.anonymize,
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn parse_weekdays(names: &[String], field: &str) -> Result<Vec<WeekdayOffset>> {
    names
        .iter()
        .map(|name| {
            parse_weekday(name).ok_or_else(|| {
                PacerError::invalid_config(field)
                    .with_reason(format!("unknown weekday '{name}'"))
            })
        })
        .collect()
}

impl PlanParams {
    /// Validate the raw input into a [`PlanConfig`].
    ///
    /// When only a session count is given the weekdays are spread evenly
    /// from Monday; when only weekdays are given the count follows them.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidConfig` for unknown weekday names and for
    /// anything [`PlanConfig::validate`] rejects.
    pub fn into_config(self) -> Result<PlanConfig> {
        let defaults = PlanConfig::default();
        let pattern = match &self.weekdays {
            Some(names) => Some(parse_weekdays(names, "weekday_pattern")?),
            None => None,
        };
        let (sessions_per_week, weekday_pattern) = match (self.sessions_per_week, pattern) {
            (Some(n), Some(pattern)) => (n, pattern),
            (Some(n), None) => (n, spread_pattern(n)),
            (None, Some(pattern)) => (u32::try_from(pattern.len()).unwrap_or(0), pattern),
            (None, None) => (defaults.sessions_per_week, defaults.weekday_pattern),
        };
        let rest_days: BTreeSet<WeekdayOffset> = parse_weekdays(&self.rest_days, "rest_days")?
            .into_iter()
            .collect();
        let config = PlanConfig {
            weeks: self.weeks.unwrap_or(defaults.weeks),
            sessions_per_week,
            weekday_pattern,
            rest_days,
            min_session_secs: self
                .min_session_minutes
                .map_or(DEFAULT_MIN_SESSION_SECS, |minutes| minutes.saturating_mul(60)),
        };
        config.validate()?;
        Ok(config)
    }
}
