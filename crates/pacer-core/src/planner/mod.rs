//! Plan generation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Profile +       │    │  PlanBuilder    │    │      Plan       │
//! │ PlanConfig      │───▶│ template, adjust│───▶│ (immutable, fed │
//! │                 │    │ localizer text  │    │  to exporters)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`template`]: the fixed week-indexed interval table
//! - [`adjust`]: age/weight based duration reduction
//! - [`builder`]: [`PlanBuilder`], turning inputs into a dated schedule
//! - [`anonymize`]: placeholder substitution for name and email
//!
//! # Examples
//!
//! ```rust
//! use pacer_core::{models::PlanConfig, params::ProfileParams, PlanBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ProfileParams {
//!     age: Some(35),
//!     weight: Some(70.0),
//!     gender: Some("female".into()),
//!     language: Some("en".into()),
//!     start_date: Some("2025-07-15".into()),
//!     session_time: Some("07:30".into()),
//!     ..Default::default()
//! }
//! .into_profile()?;
//!
//! let plan = PlanBuilder::default().build(&profile, &PlanConfig::default())?;
//! assert_eq!(plan.weeks.len(), 10);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod adjust;
pub mod anonymize;
pub mod builder;
pub mod template;


pub use adjust::DurationAdjuster;
pub use anonymize::{anonymize, AnonymizeFilter};
pub use builder::PlanBuilder;
pub use template::{PlanTemplate, WeekTemplate};

use builder::SessionText;

use crate::{
    error::Result,
    i18n::Localizer,
    models::{Language, Plan},
};

impl Plan {
    /// Copy of the plan with every localized string rendered in `language`.
    ///
    /// Used for an output-locale override; dates, durations and interval
    /// structures are untouched.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::MissingTranslation` when `language` lacks a
    /// required key and `localizer` has no fallback for it.
    pub fn relocalize(&self, localizer: &Localizer, language: Language) -> Result<Plan> {
        let slots = self.config.weekly_slots();
        let text = SessionText::new(localizer, language, &slots);
        let mut plan = self.clone();
        plan.labels = localizer.labels(language)?;
        plan.profile.language = language;
        for week in &mut plan.weeks {
            for session in &mut week.sessions {
                session.tip = text.tip(session.week, session.day)?;
                session.instruction = text.instruction(session.week, session.rest_day)?;
                session.note = text.note(session.adjusted_seconds < session.nominal_seconds)?;
            }
        }
        Ok(plan)
    }
}
