//! Safety reduction of session durations.

use crate::models::Profile;

/// Age at which sessions are shortened.
pub const AGE_THRESHOLD: u32 = 60;

/// Body weight in kilograms at which sessions are shortened.
pub const WEIGHT_THRESHOLD_KG: f64 = 100.0;

/// Adjusted sessions keep this fraction of their nominal length.
const SCALE_NUMERATOR: u32 = 5;
const SCALE_DENOMINATOR: u32 = 6;

/// Shortens sessions for older or heavier profiles.
///
/// The result depends only on the nominal duration and the profile, so
/// feeding it the same nominal value twice never compounds the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationAdjuster {
    min_session_secs: u32,
}

impl DurationAdjuster {
    pub fn new(min_session_secs: u32) -> Self {
        Self { min_session_secs }
    }

    pub fn min_session_secs(&self) -> u32 {
        self.min_session_secs
    }

    /// True when the reduction rule applies to `profile`.
    pub fn applies_to(profile: &Profile) -> bool {
        profile.age >= AGE_THRESHOLD || profile.weight_kg() >= WEIGHT_THRESHOLD_KG
    }

    /// Duration after the safety rule, in seconds.
    ///
    /// Reduced sessions keep five sixths of the nominal length, floored at
    /// the configured minimum but never longer than nominal.
    pub fn adjust(&self, nominal_secs: u32, profile: &Profile) -> u32 {
        if !Self::applies_to(profile) {
            return nominal_secs;
        }
        let scaled = u64::from(nominal_secs) * u64::from(SCALE_NUMERATOR)
            / u64::from(SCALE_DENOMINATOR);
        let scaled = u32::try_from(scaled).unwrap_or(nominal_secs);
        scaled.max(self.min_session_secs).min(nominal_secs)
    }
}
