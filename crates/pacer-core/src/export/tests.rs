#[cfg(test)]
mod export_tests {
    use std::collections::HashSet;

    use crate::{
        error::PacerError,
        export::{export, exporter_for, Format},
        i18n::Localizer,
        models::{ExportOptions, PlanConfig},
        planner::PlanBuilder,
        test_fixtures::{create_short_plan, create_test_plan, create_test_profile},
    };

    #[test]
    fn test_format_parsing() {
        for format in Format::all() {
            assert_eq!(format.as_str().parse::<Format>().unwrap(), *format);
        }
        assert_eq!("ical".parse::<Format>().unwrap(), Format::Ics);
        assert_eq!("Google_Fit".parse::<Format>().unwrap(), Format::GoogleFit);
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert!("docx".parse::<Format>().is_err());
    }

    #[test]
    fn test_artifact_names_are_unique() {
        let names: Vec<_> = Format::all()
            .iter()
            .flat_map(|format| format.artifact_names().iter())
            .collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_exporter_matches_format() {
        for format in Format::all() {
            assert_eq!(exporter_for(*format).format(), *format);
        }
    }

    #[test]
    fn test_every_format_emits_its_named_artifacts() {
        let plan = create_short_plan(2);
        let options = ExportOptions::default();
        for format in Format::all() {
            let artifacts = export(*format, &plan, &options).unwrap();
            let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, format.artifact_names(), "{format}");
            assert!(artifacts.iter().all(|a| !a.bytes.is_empty()), "{format}");
        }
    }

    #[test]
    fn test_calendar_alarm_lead_time() {
        let config = PlanConfig {
            weeks: 2,
            rest_days: [5].into_iter().collect(),
            ..PlanConfig::default()
        };
        let plan = PlanBuilder::new(Localizer::builtin())
            .build(&create_test_profile(), &config)
            .unwrap();
        let options = ExportOptions {
            alert_minutes: 30,
            ..ExportOptions::default()
        };
        let artifacts = export(Format::Ics, &plan, &options).unwrap();
        let ics = artifacts[0].text().unwrap();

        let events = ics.matches("BEGIN:VEVENT").count();
        assert_eq!(events, plan.training_sessions().count());
        assert!(plan.sessions().any(|s| s.rest_day));
        assert_eq!(ics.matches("TRIGGER:-PT30M\r\n").count(), events);
    }

    #[test]
    fn test_zero_alert_disables_alarm() {
        let plan = create_short_plan(1);
        let options = ExportOptions {
            alert_minutes: 0,
            ..ExportOptions::default()
        };
        let artifacts = export(Format::Ics, &plan, &options).unwrap();
        assert!(!artifacts[0].text().unwrap().contains("VALARM"));
    }

    #[test]
    fn test_excessive_alert_fails_only_calendar() {
        let plan = create_short_plan(1);
        let options = ExportOptions {
            alert_minutes: 5000,
            ..ExportOptions::default()
        };
        let err = export(Format::Ics, &plan, &options).unwrap_err();
        assert!(matches!(err, PacerError::Export { format: Format::Ics, .. }));
        assert!(!err.is_build_failure());
        assert!(export(Format::Csv, &plan, &options).is_ok());
    }

    #[test]
    fn test_anonymize_option_scrubs_text_artifacts() {
        let plan = create_test_plan();
        let options = ExportOptions {
            anonymize: true,
            share_link: Some("https://example.com/plans?owner=alex@example.com".to_string()),
            advisory: Some("Hot day ahead, Alex Runner".to_string()),
            ..ExportOptions::default()
        };
        for format in [Format::Ics, Format::Json, Format::Markdown, Format::Voice, Format::Tracker] {
            let artifacts = export(format, &plan, &options).unwrap();
            let text = artifacts[0].text().unwrap();
            assert!(!text.contains("Alex Runner"), "{format}");
            assert!(!text.contains("alex@example.com"), "{format}");
        }
    }

    #[test]
    fn test_profile_flag_triggers_anonymization() {
        let mut plan = create_short_plan(1);
        plan.profile.anonymize = true;
        let artifacts = export(Format::Markdown, &plan, &ExportOptions::default()).unwrap();
        let text = artifacts[0].text().unwrap();
        assert!(!text.contains("Alex Runner"));
        assert!(text.contains("Anonymous"));
    }

    #[test]
    fn test_export_does_not_mutate_plan() {
        let plan = create_short_plan(1);
        let before = plan.clone();
        let options = ExportOptions {
            anonymize: true,
            ..ExportOptions::default()
        };
        export(Format::Json, &plan, &options).unwrap();
        assert_eq!(plan, before);
    }
}
