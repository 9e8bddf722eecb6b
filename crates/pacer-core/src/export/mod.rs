//! Rendering one [`Plan`] into many artifact formats.
//!
//! Every serializer implements [`Exporter`], a pure function of
//! `(Plan, ExportOptions)` returning named byte payloads. Callers go through
//! [`export`], which applies anonymization before any serializer sees the
//! plan, so no format can leak the profile name or email.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Plan + Options │    │    export()     │    │   Artifacts     │
//! │   (read-only)   │───▶│ anonymize, then │───▶│ name + media    │
//! │                 │    │ Exporter::render│    │ type + bytes    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`ics`]: iCalendar events with reminders
//! - [`tabular`]: CSV rows, plus [`tabular::parse_tabular`] to read them back
//! - [`json`]: structured document, plus [`json::parse_structured`]
//! - [`tracker`]: SpreadsheetML workbook with formula columns
//! - [`markdown`]: printable checklist
//! - [`pdf`]: paginated PDF document
//! - [`qr`]: plan summary as QR code SVGs
//! - [`voice`]: narrated script
//! - [`fitness`]: Google Fit and Apple Health workout imports

pub mod fitness;
pub mod ics;
pub mod json;
pub mod markdown;
pub mod pdf;
pub mod qr;
pub mod tabular;
pub mod tracker;
pub mod voice;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    display::MinutesSeconds,
    error::Result,
    models::{ExportOptions, Plan, PlanLabels, SessionPlan},
    planner::AnonymizeFilter,
};

/// Every artifact format Pacer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Ics,
    Csv,
    Json,
    Tracker,
    Markdown,
    Pdf,
    Qr,
    Voice,
    GoogleFit,
    AppleHealth,
}

impl Format {
    /// All formats in their canonical order.
    pub fn all() -> &'static [Format] {
        &[
            Format::Ics,
            Format::Csv,
            Format::Json,
            Format::Tracker,
            Format::Markdown,
            Format::Pdf,
            Format::Qr,
            Format::Voice,
            Format::GoogleFit,
            Format::AppleHealth,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Ics => "ics",
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Tracker => "tracker",
            Format::Markdown => "markdown",
            Format::Pdf => "pdf",
            Format::Qr => "qr",
            Format::Voice => "voice",
            Format::GoogleFit => "google-fit",
            Format::AppleHealth => "apple-health",
        }
    }

    /// File names of the artifacts this format produces.
    pub fn artifact_names(&self) -> &'static [&'static str] {
        match self {
            Format::Ics => &["c25k-plan.ics"],
            Format::Csv => &["c25k-plan.csv"],
            Format::Json => &["c25k-plan.json"],
            Format::Tracker => &["c25k-tracker.xml"],
            Format::Markdown => &["c25k-checklist.md"],
            Format::Pdf => &["c25k-plan.pdf"],
            Format::Qr => &["c25k-plan-qr.svg", "c25k-plan-qr-accessible.svg"],
            Format::Voice => &["c25k-voice-script.txt"],
            Format::GoogleFit => &["c25k-google-fit.csv"],
            Format::AppleHealth => &["c25k-apple-health.csv"],
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace('_', "-");
        match lower.as_str() {
            "ical" | "calendar" => return Ok(Format::Ics),
            "xlsx" | "excel" | "spreadsheet" => return Ok(Format::Tracker),
            "md" | "checklist" => return Ok(Format::Markdown),
            "qrcode" => return Ok(Format::Qr),
            "script" => return Ok(Format::Voice),
            _ => {}
        }
        Format::all()
            .iter()
            .copied()
            .find(|format| format.as_str() == lower)
            .ok_or_else(|| format!("Invalid format: {s}"))
    }
}

/// One named output payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name, unique across all formats
    pub name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(name: &str, media_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            media_type,
            bytes,
        }
    }

    /// The payload as UTF-8 text, if it is text.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// A serializer for one format.
///
/// Implementations must be deterministic and must not keep state between
/// calls; the runner may invoke several exporters on one plan in parallel.
pub trait Exporter: Send + Sync {
    fn format(&self) -> Format;

    /// Serialize an already anonymized plan.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::Export` when the artifact cannot be produced.
    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>>;
}

/// The serializer for `format`.
pub fn exporter_for(format: Format) -> Box<dyn Exporter> {
    match format {
        Format::Ics => Box::new(ics::IcsExporter),
        Format::Csv => Box::new(tabular::TabularExporter),
        Format::Json => Box::new(json::JsonExporter),
        Format::Tracker => Box::new(tracker::TrackerExporter),
        Format::Markdown => Box::new(markdown::MarkdownExporter),
        Format::Pdf => Box::new(pdf::PdfExporter),
        Format::Qr => Box::new(qr::QrExporter),
        Format::Voice => Box::new(voice::VoiceExporter),
        Format::GoogleFit => Box::new(fitness::GoogleFitExporter),
        Format::AppleHealth => Box::new(fitness::AppleHealthExporter),
    }
}

/// Render `plan` as `format`, anonymizing first when requested.
///
/// Anonymization applies when either the options or the profile ask for it.
/// Free text in the options (share link, advisory) is scrubbed with the same
/// filter.
///
/// # Errors
///
/// Returns `PacerError::Export` for the failing format.
pub fn export(format: Format, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
    let exporter = exporter_for(format);
    debug!("Rendering {format}");
    if options.anonymize || plan.profile.anonymize {
        let filter = AnonymizeFilter::for_profile(&plan.profile);
        let plan = filter.apply(plan);
        let options = ExportOptions {
            anonymize: true,
            share_link: options.share_link.as_deref().map(|s| filter.scrub(s)),
            advisory: options.advisory.as_deref().map(|s| filter.scrub(s)),
            ..options.clone()
        };
        exporter.render(&plan, &options)
    } else {
        exporter.render(plan, options)
    }
}

/// `Week 1, Day 2` in the plan's language.
pub(crate) fn session_heading(labels: &PlanLabels, session: &SessionPlan) -> String {
    format!(
        "{} {}, {} {}",
        labels.week, session.week, labels.day, session.day
    )
}

/// Date, start time and adjusted duration: the facts every format repeats.
pub(crate) fn session_timing(session: &SessionPlan) -> String {
    format!(
        "{} {} {}",
        session.date,
        session.start_time.strftime("%H:%M"),
        MinutesSeconds(session.adjusted_seconds)
    )
}
