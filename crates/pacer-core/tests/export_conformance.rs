mod common;

use std::sync::Arc;

use common::{create_plan_with_rest_day, create_test_profile};
use pacer_core::{
    display::format_duration,
    export::{json::parse_structured, qr, tabular::parse_tabular},
    export, Artifact, ExportOptions, ExportRunner, Format, Plan, SessionPlan,
};

fn render(format: Format, plan: &Plan, options: &ExportOptions) -> Vec<Artifact> {
    export(format, plan, options).unwrap_or_else(|e| panic!("{format} failed: {e}"))
}

/// Artifact bytes as text; binary bytes map one-to-one onto Latin-1.
fn text(artifact: &Artifact) -> String {
    artifact.bytes.iter().map(|b| char::from(*b)).collect()
}

fn timing(session: &SessionPlan) -> String {
    format!(
        "{} {} {}",
        session.date,
        session.start_time.strftime("%H:%M"),
        format_duration(session.adjusted_seconds)
    )
}

#[test]
fn test_every_format_agrees_on_each_training_session() {
    let plan = create_plan_with_rest_day();
    let options = ExportOptions::default();

    let ics = text(&render(Format::Ics, &plan, &options)[0]);
    let markdown = text(&render(Format::Markdown, &plan, &options)[0]);
    let pdf = text(&render(Format::Pdf, &plan, &options)[0]);
    let voice = text(&render(Format::Voice, &plan, &options)[0]);
    let tracker = text(&render(Format::Tracker, &plan, &options)[0]);
    let google = text(&render(Format::GoogleFit, &plan, &options)[0]);
    let apple = text(&render(Format::AppleHealth, &plan, &options)[0]);
    let summary = qr::summary(&plan, &options);

    for session in plan.training_sessions() {
        let start = session.start();
        let dtstart = format!("DTSTART:{}", start.strftime("%Y%m%dT%H%M%S"));
        assert!(ics.contains(&dtstart), "ics misses {dtstart}");
        assert!(markdown.contains(&timing(session)), "markdown misses {}", timing(session));
        assert!(pdf.contains(&timing(session)), "pdf misses {}", timing(session));
        assert!(voice.contains(&format!(
            "Week {}, Day {} ({} {})",
            session.week,
            session.day,
            session.date,
            session.start_time.strftime("%H:%M")
        )));
        assert!(tracker.contains(&format!("{}T00:00:00.000", session.date)));

        let wall = start.strftime("%Y-%m-%d %H:%M:%S").to_string();
        assert!(google.contains(&wall), "google fit misses {wall}");
        assert!(apple.contains(&wall), "apple health misses {wall}");
        assert!(summary.contains(&session.date.strftime("%m-%d").to_string()));
    }

    let json = render(Format::Json, &plan, &options);
    assert_eq!(parse_structured(&json[0].bytes).unwrap(), plan);
    let csv = render(Format::Csv, &plan, &options);
    assert_eq!(parse_tabular(&csv[0].bytes).unwrap(), plan.weeks);
}

#[test]
fn test_rest_days_are_not_workouts() {
    let plan = create_plan_with_rest_day();
    let options = ExportOptions::default();
    let training = plan.training_sessions().count();
    let rest: Vec<_> = plan.sessions().filter(|s| s.rest_day).collect();
    assert!(!rest.is_empty());

    let ics = text(&render(Format::Ics, &plan, &options)[0]);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), training);
    for session in &rest {
        assert!(!ics.contains(&format!("DTSTART:{}", session.start().strftime("%Y%m%dT%H%M%S"))));
    }

    for format in [Format::GoogleFit, Format::AppleHealth] {
        let rows = text(&render(format, &plan, &options)[0]).lines().count();
        assert_eq!(rows, training + 1, "{format}");
    }

    // document formats list rest days as dated records
    let markdown = text(&render(Format::Markdown, &plan, &options)[0]);
    let csv = text(&render(Format::Csv, &plan, &options)[0]);
    for session in &rest {
        assert!(markdown.contains(&format!("Rest day ({})", session.date)));
        assert!(csv.contains(&session.date.to_string()));
    }
}

#[test]
fn test_output_is_deterministic() {
    let plan = create_plan_with_rest_day();
    let options = ExportOptions {
        share_link: Some("https://example.com/plan".to_string()),
        advisory: Some("Heat warning: run early".to_string()),
        ..ExportOptions::default()
    };
    for format in Format::all() {
        assert_eq!(
            render(*format, &plan, &options),
            render(*format, &plan, &options),
            "{format}"
        );
    }
}

#[test]
fn test_generation_time_only_in_labelled_fields() {
    let plan = create_plan_with_rest_day();
    let plain = ExportOptions::default();
    let stamped = ExportOptions {
        generated_at: Some("2025-07-01T12:00:00Z".parse().unwrap()),
        ..ExportOptions::default()
    };
    let labels = ["X-PACER-GENERATED-AT", "Generated:", "\"generated_at\"", "<Created>"];

    for format in [Format::Ics, Format::Markdown, Format::Json, Format::Tracker] {
        let a = text(&render(format, &plan, &plain)[0]);
        let b = text(&render(format, &plan, &stamped)[0]);
        assert_ne!(a, b, "{format}");
        let extra: Vec<_> = b.lines().filter(|line| !a.lines().any(|l| l == *line)).collect();
        assert!(!extra.is_empty());
        for line in extra {
            assert!(
                labels.iter().any(|label| line.contains(label)) || line.trim().is_empty(),
                "{format}: unlabelled change {line}"
            );
        }
    }

    for format in [Format::Csv, Format::Voice, Format::GoogleFit, Format::AppleHealth, Format::Qr] {
        assert_eq!(render(format, &plan, &plain), render(format, &plan, &stamped), "{format}");
    }
}

#[test]
fn test_anonymized_artifacts_leak_nothing() {
    let plan = create_plan_with_rest_day();
    let profile = create_test_profile();
    let name = profile.name.unwrap();
    let email = profile.email.unwrap();
    let options = ExportOptions {
        anonymize: true,
        share_link: Some(format!("https://example.com/share?user={email}")),
        advisory: Some(format!("{name}, expect rain on Friday")),
        ..ExportOptions::default()
    };

    for format in Format::all() {
        for artifact in render(*format, &plan, &options) {
            let content = text(&artifact);
            assert!(!content.contains(&name), "{} leaks the name", artifact.name);
            assert!(!content.contains(&email), "{} leaks the email", artifact.name);
        }
    }
}

#[test]
fn test_accessibility_changes_presentation_only() {
    let plan = create_plan_with_rest_day();
    let plain = ExportOptions::default();
    let mut accessible = ExportOptions::default();
    accessible.accessibility.high_contrast = true;
    accessible.accessibility.large_font = true;

    for format in [Format::Ics, Format::Csv, Format::Json, Format::Voice, Format::GoogleFit] {
        assert_eq!(render(format, &plan, &plain), render(format, &plan, &accessible), "{format}");
    }
    for format in [Format::Tracker, Format::Pdf, Format::Markdown] {
        assert_ne!(render(format, &plan, &plain), render(format, &plan, &accessible), "{format}");
    }
}

#[tokio::test]
async fn test_concurrent_runner_matches_sequential() {
    let plan = create_plan_with_rest_day();
    let options = ExportOptions {
        alert_minutes: 5000,
        ..ExportOptions::default()
    };
    let runner = ExportRunner::default();

    let sequential = runner.run(&plan, &options).unwrap();
    let concurrent = runner
        .run_concurrent(Arc::new(plan), options)
        .await
        .unwrap();

    let formats: Vec<_> = concurrent.outcomes.iter().map(|o| o.format).collect();
    assert_eq!(formats, Format::all());
    assert_eq!(
        sequential.artifacts().collect::<Vec<_>>(),
        concurrent.artifacts().collect::<Vec<_>>()
    );
    let failed: Vec<_> = concurrent.failures().map(|(format, _)| format).collect();
    assert_eq!(failed, vec![Format::Ics]);
}
