//! Workout import files for Google Fit and Apple Health.
//!
//! Both platforms import workouts only, so rest days are left out.

use super::{Artifact, Exporter, Format};
use crate::{
    error::{PacerError, Result, ResultExt},
    models::{ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "text/csv";

const GOOGLE_FIT_COLUMNS: [&str; 6] = [
    "Activity Type",
    "Start Date",
    "End Date",
    "Duration (min)",
    "Description",
    "Tip",
];

const APPLE_HEALTH_COLUMNS: [&str; 7] = [
    "workoutActivityType",
    "startDate",
    "endDate",
    "duration",
    "durationUnit",
    "sourceName",
    "notes",
];

const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

pub struct GoogleFitExporter;

impl Exporter for GoogleFitExporter {
    fn format(&self) -> Format {
        Format::GoogleFit
    }

    fn render(&self, plan: &Plan, _options: &ExportOptions) -> Result<Vec<Artifact>> {
        let format = Format::GoogleFit;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(GOOGLE_FIT_COLUMNS)
            .export_context(format)?;
        for session in plan.training_sessions() {
            writer
                .write_record([
                    "Running".to_string(),
                    session.start().strftime(DATE_TIME).to_string(),
                    session.end().strftime(DATE_TIME).to_string(),
                    format!("{:.2}", f64::from(session.adjusted_seconds) / 60.0),
                    session.instruction.clone(),
                    session.tip.clone(),
                ])
                .export_context(format)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| PacerError::export(format).with_reason(e.error()))?;
        Ok(vec![Artifact::new(
            format.artifact_names()[0],
            MEDIA_TYPE,
            bytes,
        )])
    }
}

pub struct AppleHealthExporter;

impl Exporter for AppleHealthExporter {
    fn format(&self) -> Format {
        Format::AppleHealth
    }

    fn render(&self, plan: &Plan, _options: &ExportOptions) -> Result<Vec<Artifact>> {
        let format = Format::AppleHealth;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(APPLE_HEALTH_COLUMNS)
            .export_context(format)?;
        for session in plan.training_sessions() {
            writer
                .write_record([
                    "HKWorkoutActivityTypeRunning".to_string(),
                    session.start().strftime(DATE_TIME).to_string(),
                    session.end().strftime(DATE_TIME).to_string(),
                    session.adjusted_seconds.to_string(),
                    "s".to_string(),
                    "Pacer".to_string(),
                    format!("{} {}", session.instruction, session.note),
                ])
                .export_context(format)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| PacerError::export(format).with_reason(e.error()))?;
        Ok(vec![Artifact::new(
            format.artifact_names()[0],
            MEDIA_TYPE,
            bytes,
        )])
    }
}
