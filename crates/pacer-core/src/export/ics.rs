//! iCalendar (RFC 5545) export: one event per training session.
//!
//! Times are floating local times, so a 07:30 session stays at 07:30 in
//! whatever zone the calendar app runs in. `DTSTAMP` is derived from the
//! plan start rather than the clock so the file is reproducible.

use std::fmt::Write as _;

use super::{session_heading, Artifact, Exporter, Format};
use crate::{
    error::{PacerError, Result},
    models::{options::MAX_ALERT_MINUTES, ExportOptions, Plan, SessionPlan},
};

const MEDIA_TYPE: &str = "text/calendar";

/// Longest content line in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

pub struct IcsExporter;

impl Exporter for IcsExporter {
    fn format(&self) -> Format {
        Format::Ics
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        if options.alert_minutes > MAX_ALERT_MINUTES {
            return Err(PacerError::export(Format::Ics).with_reason(format!(
                "alert lead time {} min exceeds {MAX_ALERT_MINUTES} min",
                options.alert_minutes
            )));
        }
        if let Some(link) = &options.share_link {
            if link.chars().any(char::is_control) {
                return Err(PacerError::export(Format::Ics)
                    .with_reason("share link contains control characters"));
            }
        }
        let calendar = render_calendar(plan, options);
        Ok(vec![Artifact::new(
            Format::Ics.artifact_names()[0],
            MEDIA_TYPE,
            calendar.into_bytes(),
        )])
    }
}

/// Event UID for a session, stable across runs.
pub fn event_uid(session: &SessionPlan) -> String {
    format!("c25k-w{:02}-d{}@pacer", session.week, session.day)
}

/// `PT25M`, `PT1H5M`, `PT20M50S`.
pub fn ics_duration(seconds: u32) -> String {
    let (hours, minutes, secs) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);
    let mut out = String::from("PT");
    if hours > 0 {
        let _ = write!(out, "{hours}H");
    }
    if minutes > 0 {
        let _ = write!(out, "{minutes}M");
    }
    if secs > 0 || (hours == 0 && minutes == 0) {
        let _ = write!(out, "{secs}S");
    }
    out
}

/// Escape a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// Fold a content line at 75 octets without splitting a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            // the leading space counts toward the next line
            used = 1;
        }
        out.push(c);
        used += width;
    }
    out
}

struct Lines(String);

impl Lines {
    fn push(&mut self, line: &str) {
        self.0.push_str(&fold_line(line));
        self.0.push_str("\r\n");
    }
}

fn render_calendar(plan: &Plan, options: &ExportOptions) -> String {
    let labels = &plan.labels;
    let stamp = format!("{}T000000Z", plan.profile.start_date.strftime("%Y%m%d"));
    let mut lines = Lines(String::new());

    lines.push("BEGIN:VCALENDAR");
    lines.push("VERSION:2.0");
    lines.push(&format!(
        "PRODID:-//Pacer//Couch to 5K//{}",
        plan.profile.language.as_str().to_uppercase()
    ));
    lines.push("CALSCALE:GREGORIAN");
    lines.push("METHOD:PUBLISH");
    lines.push(&format!("X-WR-CALNAME:{}", escape_text(&labels.title)));
    if let Some(generated_at) = &options.generated_at {
        lines.push(&format!("X-PACER-GENERATED-AT:{generated_at}"));
    }

    for session in plan.training_sessions() {
        let summary = format!("{}: {}", labels.title, session_heading(labels, session));
        let mut description = vec![
            session.instruction.clone(),
            session.tip.clone(),
            session.note.clone(),
        ];
        if let Some(advisory) = &options.advisory {
            description.push(advisory.clone());
        }

        lines.push("BEGIN:VEVENT");
        lines.push(&format!("UID:{}", event_uid(session)));
        lines.push(&format!("DTSTAMP:{stamp}"));
        lines.push(&format!(
            "DTSTART:{}",
            session.start().strftime("%Y%m%dT%H%M%S")
        ));
        lines.push(&format!("DURATION:{}", ics_duration(session.adjusted_seconds)));
        lines.push(&format!("SUMMARY:{}", escape_text(&summary)));
        lines.push(&format!(
            "DESCRIPTION:{}",
            escape_text(&description.join("\n"))
        ));
        if let Some(link) = &options.share_link {
            lines.push(&format!("URL:{link}"));
        }
        if options.alert_minutes > 0 {
            lines.push("BEGIN:VALARM");
            lines.push("ACTION:DISPLAY");
            lines.push(&format!("DESCRIPTION:{}", escape_text(&summary)));
            lines.push(&format!("TRIGGER:-PT{}M", options.alert_minutes));
            lines.push("END:VALARM");
        }
        lines.push("END:VEVENT");
    }

    lines.push("END:VCALENDAR");
    lines.0
}
