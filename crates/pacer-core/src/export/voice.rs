//! Narrated script: one text block per session, in plan order.

use super::{session_heading, Artifact, Exporter, Format};
use crate::{
    display::MinutesSeconds,
    error::Result,
    models::{Activity, ExportOptions, Interval, Plan, PlanLabels, SessionPlan},
};

const MEDIA_TYPE: &str = "text/plain";

pub struct VoiceExporter;

impl Exporter for VoiceExporter {
    fn format(&self) -> Format {
        Format::Voice
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        let mut blocks: Vec<String> = plan
            .sessions()
            .map(|session| session_block(&plan.labels, session))
            .collect();
        if let Some(advisory) = &options.advisory {
            blocks.insert(0, advisory.clone());
        }
        let mut script = blocks.join("\n\n");
        script.push('\n');
        Ok(vec![Artifact::new(
            Format::Voice.artifact_names()[0],
            MEDIA_TYPE,
            script.into_bytes(),
        )])
    }
}

fn cue(labels: &PlanLabels, interval: &Interval) -> String {
    let activity = match interval.activity {
        Activity::Run => &labels.run,
        Activity::Walk => &labels.walk,
    };
    format!("{activity} {}", MinutesSeconds(interval.seconds))
}

fn session_block(labels: &PlanLabels, session: &SessionPlan) -> String {
    let heading = format!(
        "{} ({} {})",
        session_heading(labels, session),
        session.date,
        session.start_time.strftime("%H:%M")
    );
    if session.rest_day {
        return format!("{heading}\n{}. {}\n{}", labels.rest_day, session.instruction, session.tip);
    }

    let mut lines = vec![
        heading,
        labels.voice_intro.clone(),
        session.instruction.clone(),
    ];
    if let Some((warm_up, rest)) = session.intervals.split_first() {
        lines.push(format!("{}: {}.", labels.warm_up, cue(labels, warm_up)));
        for (n, interval) in rest.iter().enumerate() {
            lines.push(format!("{}. {}.", n + 1, cue(labels, interval)));
        }
    }
    lines.push(format!("{} ({})", session.tip, MinutesSeconds(session.adjusted_seconds)));
    lines.push(labels.voice_outro.clone());
    lines.join("\n")
}
