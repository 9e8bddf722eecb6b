//! Profile model: the personal parameters a plan is built for.

use std::{fmt, str::FromStr};

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{PacerError, Result};

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Accepted age range in years.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 5..=120;

/// Accepted weight range, in the weight's own unit.
pub const WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 30.0..=500.0;

/// Supported output languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Language {
    /// ISO 639-1 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es]
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "e" | "english" => Ok(Language::En),
            "es" | "s" | "spanish" | "español" => Ok(Language::Es),
            _ => Err(format!("Invalid language: {s}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as given by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "" | "u" | "other" | "unspecified" => Ok(Gender::Unspecified),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }
}

/// Measurement system used for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "metric" => Ok(UnitSystem::Metric),
            "i" | "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Invalid unit system: {s}")),
        }
    }
}

impl UnitSystem {
    /// Unit a weight entered in this system is expressed in.
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lb,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// A body weight together with the unit it was entered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    pub fn lb(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lb,
        }
    }

    /// The weight converted to kilograms.
    pub fn in_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.value,
            WeightUnit::Lb => self.value * KG_PER_LB,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            WeightUnit::Kg => write!(f, "{:.1} kg", self.value),
            WeightUnit::Lb => write!(f, "{:.1} lb", self.value),
        }
    }
}

/// Validated user parameters.
///
/// Construct through [`crate::params::ProfileParams`]; the plan builder
/// re-checks [`Profile::validate`] so a hand-assembled profile with
/// out-of-range values never reaches a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Display name, absent for anonymous plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact address, absent for anonymous plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Age in whole years
    pub age: u32,

    pub weight: Weight,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub units: UnitSystem,

    /// First day the plan may schedule a session
    pub start_date: Date,

    /// Time of day every session starts
    pub session_time: Time,

    /// Free-text personal goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    /// Strip name and email from every artifact
    #[serde(default)]
    pub anonymize: bool,
}

impl Profile {
    /// Check every range constraint on the profile.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidProfile` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(PacerError::invalid_profile("age").with_reason(format!(
                "must be between {} and {} years, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                self.age
            )));
        }
        if !self.weight.value.is_finite() || !WEIGHT_RANGE.contains(&self.weight.value) {
            return Err(PacerError::invalid_profile("weight").with_reason(format!(
                "must be between {} and {}, got {}",
                WEIGHT_RANGE.start(),
                WEIGHT_RANGE.end(),
                self.weight.value
            )));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(
                    PacerError::invalid_profile("email").with_reason("must contain '@'")
                );
            }
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(PacerError::invalid_profile("name").with_reason("must not be blank"));
        }
        Ok(())
    }

    /// Body weight in kilograms regardless of the entry unit.
    pub fn weight_kg(&self) -> f64 {
        self.weight.in_kg()
    }
}
