//! Core library for the Pacer Couch-to-5K plan generator.
//!
//! Pacer turns a runner profile and a weekly schedule into a dated plan of
//! run/walk sessions, then renders that one plan into calendar, tabular,
//! spreadsheet, document, QR, voice and fitness-platform artifacts that all
//! agree on every date, duration and interval.
//!
//! ```text
//! ProfileParams ─┐                      ┌─▶ ics, csv, json, tracker, markdown
//!                ├─▶ PlanBuilder ─▶ Plan ┼─▶ pdf, qr, voice
//! PlanParams ────┘                      └─▶ google-fit, apple-health
//! ```
//!
//! # Display Architecture
//!
//! Domain models ([`models`]) implement [`std::fmt::Display`] as markdown in
//! [`display`], which the CLI renders in the terminal. Export artifacts are
//! produced separately by [`export`] and never depend on `Display`.
//!
//! # Quick Start
//!
//! ```rust
//! use pacer_core::{
//!     export::Format,
//!     models::ExportOptions,
//!     params::{PlanParams, ProfileParams},
//!     ExportRunner, PlanBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ProfileParams {
//!     name: Some("Alex Runner".into()),
//!     age: Some(35),
//!     weight: Some(70.0),
//!     gender: Some("female".into()),
//!     language: Some("en".into()),
//!     start_date: Some("2025-07-15".into()),
//!     session_time: Some("07:30".into()),
//!     ..Default::default()
//! }
//! .into_profile()?;
//! let config = PlanParams::default().into_config()?;
//!
//! let plan = PlanBuilder::default().build(&profile, &config)?;
//! let first = plan.sessions().next().expect("plan has sessions");
//! assert_eq!(first.date.to_string(), "2025-07-16");
//!
//! let report = ExportRunner::new([Format::Ics, Format::Csv]).run(&plan, &ExportOptions::default())?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod runner;
pub mod settings;

#[cfg(test)]
mod test_fixtures;

// Re-export commonly used types
pub use display::{LocalDateTime, OperationStatus, StoredArtifacts};
pub use error::{PacerError, Result};
pub use export::{export, Artifact, Exporter, Format};
pub use i18n::{Localizer, TextKey};
pub use models::{ExportOptions, Plan, PlanConfig, Profile, SessionPlan, WeekPlan};
pub use params::{PlanParams, ProfileParams};
pub use planner::{anonymize, DurationAdjuster, PlanBuilder, PlanTemplate};
pub use progress::{ProgressLog, ProgressSummary};
pub use runner::{ArtifactSink, DirectorySink, ExportReport, ExportRunner, FormatOutcome};
pub use settings::Settings;
