//! CSV export with one row per session, rest days included.
//!
//! The column set is shared with the tracker's schedule sheet, and
//! [`parse_tabular`] reads it back so the schedule can be rebuilt from the
//! file alone.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::{Artifact, Exporter, Format};
use crate::{
    display::{format_duration, parse_duration},
    error::{PacerError, Result, ResultExt},
    models::{
        config::weekday_name, format_intervals, parse_intervals, ExportOptions, Plan,
        SessionPlan, WeekPlan,
    },
};

const MEDIA_TYPE: &str = "text/csv";

/// Header of the tabular artifact, in column order.
pub const COLUMNS: [&str; 13] = [
    "week",
    "day",
    "date",
    "weekday",
    "start_time",
    "rest_day",
    "intervals",
    "nominal_seconds",
    "adjusted_seconds",
    "duration",
    "instruction",
    "tip",
    "note",
];

/// One session as a flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularRow {
    pub week: u32,
    pub day: u32,
    pub date: Date,
    pub weekday: String,
    /// `HH:MM`
    pub start_time: String,
    pub rest_day: bool,
    /// Compact `W300 R60 W90` notation
    pub intervals: String,
    pub nominal_seconds: u32,
    pub adjusted_seconds: u32,
    /// Adjusted duration as `MM:SS`
    pub duration: String,
    pub instruction: String,
    pub tip: String,
    pub note: String,
}

impl From<&SessionPlan> for TabularRow {
    fn from(session: &SessionPlan) -> Self {
        Self {
            week: session.week,
            day: session.day,
            date: session.date,
            weekday: weekday_name(session.weekday()).to_string(),
            start_time: session.start_time.strftime("%H:%M").to_string(),
            rest_day: session.rest_day,
            intervals: format_intervals(&session.intervals),
            nominal_seconds: session.nominal_seconds,
            adjusted_seconds: session.adjusted_seconds,
            duration: format_duration(session.adjusted_seconds),
            instruction: session.instruction.clone(),
            tip: session.tip.clone(),
            note: session.note.clone(),
        }
    }
}

impl TabularRow {
    /// Rebuild the session this row was written from.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::Export` when a cell is malformed or the `duration`
    /// column disagrees with `adjusted_seconds`.
    pub fn into_session(self) -> Result<SessionPlan> {
        let invalid = |what: &str| {
            PacerError::export(Format::Csv).with_reason(format!(
                "week {} day {}: invalid {what}",
                self.week, self.day
            ))
        };
        let start_time: Time = self
            .start_time
            .parse()
            .map_err(|_| invalid("start_time"))?;
        let intervals = parse_intervals(&self.intervals).ok_or_else(|| invalid("intervals"))?;
        if parse_duration(&self.duration) != Some(self.adjusted_seconds) {
            return Err(invalid("duration"));
        }
        Ok(SessionPlan {
            week: self.week,
            day: self.day,
            date: self.date,
            start_time,
            nominal_seconds: self.nominal_seconds,
            adjusted_seconds: self.adjusted_seconds,
            intervals,
            rest_day: self.rest_day,
            tip: self.tip,
            instruction: self.instruction,
            note: self.note,
        })
    }
}

pub struct TabularExporter;

impl Exporter for TabularExporter {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn render(&self, plan: &Plan, _options: &ExportOptions) -> Result<Vec<Artifact>> {
        Ok(vec![Artifact::new(
            Format::Csv.artifact_names()[0],
            MEDIA_TYPE,
            write_rows(plan)?,
        )])
    }
}

/// Serialize every session of `plan` as CSV.
///
/// # Errors
///
/// Returns `PacerError::Export` if the CSV writer fails.
pub fn write_rows(plan: &Plan) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for session in plan.sessions() {
        writer
            .serialize(TabularRow::from(session))
            .export_context(Format::Csv)?;
    }
    // an empty plan still gets its header
    if plan.total_sessions() == 0 {
        writer.write_record(COLUMNS).export_context(Format::Csv)?;
    }
    writer
        .into_inner()
        .map_err(|e| PacerError::export(Format::Csv).with_reason(e.error()))
}

/// Read the tabular artifact back into weeks of sessions.
///
/// # Errors
///
/// Returns `PacerError::Export` for a missing or reordered header, malformed
/// rows, or rows out of schedule order.
pub fn parse_tabular(bytes: &[u8]) -> Result<Vec<WeekPlan>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers().export_context(Format::Csv)?;
    if headers.iter().ne(COLUMNS) {
        return Err(PacerError::export(Format::Csv)
            .with_reason(format!("unexpected header: {}", headers.iter().collect::<Vec<_>>().join(","))));
    }

    let mut weeks: Vec<WeekPlan> = Vec::new();
    for row in reader.deserialize::<TabularRow>() {
        let session = row.export_context(Format::Csv)?.into_session()?;
        match weeks.last_mut() {
            Some(week) if week.week == session.week => week.sessions.push(session),
            Some(week) if week.week > session.week => {
                return Err(PacerError::export(Format::Csv)
                    .with_reason(format!("week {} follows week {}", session.week, week.week)));
            }
            _ => weeks.push(WeekPlan {
                week: session.week,
                sessions: vec![session],
            }),
        }
    }
    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_short_plan;

    #[test]
    fn test_header_and_row_count() {
        let plan = create_short_plan(2);
        let bytes = write_rows(&plan).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        assert_eq!(lines.count(), plan.total_sessions());
    }

    #[test]
    fn test_row_cells() {
        let plan = create_short_plan(1);
        let row = TabularRow::from(plan.session(1, 2).unwrap());
        assert_eq!(row.weekday, "Wed");
        assert_eq!(row.start_time, "07:30");
        assert_eq!(row.duration, "25:00");
        assert!(row.intervals.starts_with("W300 R60 W90"));
    }

    #[test]
    fn test_parse_restores_weeks() {
        let plan = create_short_plan(3);
        let weeks = parse_tabular(&write_rows(&plan).unwrap()).unwrap();
        assert_eq!(weeks, plan.weeks);
    }

    #[test]
    fn test_parse_rejects_foreign_header() {
        let err = parse_tabular(b"a,b,c\n1,2,3\n").unwrap_err();
        assert!(matches!(err, PacerError::Export { format: Format::Csv, .. }));
    }

    #[test]
    fn test_parse_rejects_inconsistent_duration() {
        let plan = create_short_plan(1);
        let text = String::from_utf8(write_rows(&plan).unwrap()).unwrap();
        let tampered = text.replacen(",25:00,", ",24:00,", 1);
        assert!(parse_tabular(tampered.as_bytes()).is_err());
    }
}
