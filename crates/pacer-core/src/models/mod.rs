//! Data models for profiles, plan configuration and the generated plan.
//!
//! The models are plain serde-enabled structs. Markdown `Display`
//! implementations live in [`crate::display::models`] so presentation stays
//! separate from the data.
//!
//! - [`Profile`]: who the plan is for
//! - [`PlanConfig`]: how many weeks and which weekdays
//! - [`Plan`] / [`WeekPlan`] / [`SessionPlan`]: the canonical schedule
//! - [`ExportOptions`]: per-export presentation settings
//!
//! # Examples
//!
//! ```rust
//! use pacer_core::models::{Interval, format_intervals, parse_intervals};
//!
//! let intervals = vec![Interval::walk(300), Interval::run(60), Interval::walk(90)];
//! let compact = format_intervals(&intervals);
//! assert_eq!(compact, "W300 R60 W90");
//! assert_eq!(parse_intervals(&compact), Some(intervals));
//! ```

pub mod config;
pub mod options;
pub mod plan;
pub mod profile;

#[cfg(test)]
mod tests;

pub use config::{PlanConfig, WeekdayOffset};
pub use options::{Accessibility, ExportOptions};
pub use plan::{
    format_intervals, parse_intervals, Activity, Interval, Plan, PlanLabels, SessionPlan,
    WeekPlan,
};
pub use profile::{Gender, Language, Profile, UnitSystem, Weight, WeightUnit};
