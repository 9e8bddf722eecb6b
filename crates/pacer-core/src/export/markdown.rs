//! Printable markdown checklist.

use std::fmt::Write as _;

use super::{session_heading, session_timing, Artifact, Exporter, Format};
use crate::{
    error::Result,
    models::{format_intervals, ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "text/markdown";

const NOTE_LINE: &str = "____________________________________";

pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn format(&self) -> Format {
        Format::Markdown
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        Ok(vec![Artifact::new(
            Format::Markdown.artifact_names()[0],
            MEDIA_TYPE,
            render_checklist(plan, options).into_bytes(),
        )])
    }
}

fn render_checklist(plan: &Plan, options: &ExportOptions) -> String {
    let labels = &plan.labels;
    let profile = &plan.profile;
    let mut out = String::new();

    if options.accessibility.any() {
        let _ = writeln!(out, "<!-- accessibility: {} -->", options.accessibility.describe());
    }
    let _ = writeln!(out, "# {}\n", labels.title);
    if let Some(name) = &profile.name {
        let _ = writeln!(out, "**{}:** {name}  ", labels.name);
    }
    let _ = writeln!(out, "**{}:** {}  ", labels.start_date, profile.start_date);
    if let Some(goal) = &profile.goal {
        let _ = writeln!(out, "**{}:** {goal}  ", labels.goal);
    }
    if let Some(link) = &options.share_link {
        let _ = writeln!(out, "<{link}>  ");
    }
    if let Some(advisory) = &options.advisory {
        let _ = writeln!(out, "\n> {advisory}");
    }

    for week in &plan.weeks {
        let _ = writeln!(out, "\n## {} {}\n", labels.week, week.week);
        for session in &week.sessions {
            let heading = session_heading(labels, session);
            if session.rest_day {
                let _ = writeln!(
                    out,
                    "- [ ] {heading}: {} ({})",
                    labels.rest_day, session.date
                );
                let _ = writeln!(out, "  - {}", session.instruction);
                let _ = writeln!(out, "  - {}", session.tip);
                continue;
            }
            let _ = writeln!(out, "- [ ] {heading}: {}", session_timing(session));
            let _ = writeln!(out, "  - {}", session.instruction);
            if !session.intervals.is_empty() {
                let _ = writeln!(out, "  - `{}`", format_intervals(&session.intervals));
            }
            let _ = writeln!(out, "  - {}", session.tip);
            let _ = writeln!(out, "  - {}", session.note);
            let _ = writeln!(out, "  - {}: {NOTE_LINE}", labels.notes);
        }
    }

    let _ = writeln!(out, "\n---\n");
    let _ = writeln!(out, "{}\n", labels.resources);
    let _ = writeln!(out, "*{}*", labels.disclaimer);
    if let Some(generated_at) = &options.generated_at {
        let _ = writeln!(out, "\nGenerated: {generated_at}");
    }
    out
}
