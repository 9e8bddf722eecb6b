#[cfg(test)]
mod model_tests {
    use jiff::civil::{date, time};

    use crate::{
        error::PacerError,
        models::{
            config::{parse_weekday, weekday_name},
            format_intervals, parse_intervals, Accessibility, ExportOptions, Interval, Language,
            PlanConfig, SessionPlan, UnitSystem, Weight,
        },
        test_fixtures::{create_short_plan, create_test_profile},
    };

    fn create_test_session() -> SessionPlan {
        SessionPlan {
            week: 1,
            day: 2,
            date: date(2025, 7, 16),
            start_time: time(23, 50, 0, 0),
            nominal_seconds: 1500,
            adjusted_seconds: 1500,
            intervals: vec![Interval::walk(300), Interval::run(60)],
            rest_day: false,
            tip: "tip".to_string(),
            instruction: "instruction".to_string(),
            note: "note".to_string(),
        }
    }

    #[test]
    fn test_weight_conversion() {
        assert!((Weight::lb(100.0).in_kg() - 45.3592).abs() < 1e-9);
        assert_eq!(Weight::kg(82.5).in_kg(), 82.5);
        assert_eq!(Weight::lb(180.0).to_string(), "180.0 lb");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!("spanish".parse::<Language>(), Ok(Language::Es));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Es.to_string(), "es");
    }

    #[test]
    fn test_unit_system_weight_unit() {
        assert_eq!(
            UnitSystem::Imperial.weight_unit(),
            crate::models::WeightUnit::Lb
        );
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = create_test_profile();
        assert!(profile.validate().is_ok());

        profile.email = Some("not-an-address".to_string());
        assert!(matches!(
            profile.validate(),
            Err(PacerError::InvalidProfile { ref field, .. }) if field == "email"
        ));

        let mut profile = create_test_profile();
        profile.weight = Weight::kg(f64::NAN);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(parse_weekday("Wednesday"), Some(2));
        assert_eq!(parse_weekday("sun"), Some(6));
        assert_eq!(parse_weekday("mo"), None);
        assert_eq!(weekday_name(4), "Fri");
    }

    #[test]
    fn test_config_validation() {
        assert!(PlanConfig::default().validate().is_ok());

        let empty = PlanConfig {
            sessions_per_week: 0,
            weekday_pattern: vec![],
            ..PlanConfig::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(PacerError::InvalidConfig { ref field, .. }) if field == "weekday_pattern"
        ));

        let repeated = PlanConfig {
            weekday_pattern: vec![0, 0, 4],
            ..PlanConfig::default()
        };
        assert!(repeated.validate().is_err());

        let out_of_range = PlanConfig {
            rest_days: [9].into_iter().collect(),
            ..PlanConfig::default()
        };
        assert!(out_of_range.validate().is_err());

        let too_long = PlanConfig {
            weeks: 53,
            ..PlanConfig::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_min_session_bounded_by_shortest_session() {
        let at_limit = PlanConfig {
            min_session_secs: 1380,
            ..PlanConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let above = PlanConfig {
            min_session_secs: 2400,
            ..PlanConfig::default()
        };
        assert!(matches!(
            above.validate(),
            Err(PacerError::InvalidConfig { ref field, .. }) if field == "min_session"
        ));

        // a two-week plan never reaches the shorter week 3 sessions
        let short_plan = PlanConfig {
            weeks: 2,
            min_session_secs: 1500,
            ..PlanConfig::default()
        };
        assert!(short_plan.validate().is_ok());
    }

    #[test]
    fn test_weekly_slots_merge_rest_days() {
        let config = PlanConfig {
            weekday_pattern: vec![4, 0, 2],
            rest_days: [2, 6].into_iter().collect(),
            ..PlanConfig::default()
        };
        assert_eq!(
            config.weekly_slots(),
            vec![(0, false), (2, true), (4, false), (6, true)]
        );
    }

    #[test]
    fn test_interval_notation() {
        let intervals = vec![Interval::walk(300), Interval::run(90), Interval::walk(120)];
        assert_eq!(format_intervals(&intervals), "W300 R90 W120");
        assert_eq!(parse_intervals("W300 R90 W120"), Some(intervals));
        assert_eq!(parse_intervals(""), Some(vec![]));
        assert_eq!(parse_intervals("X10"), None);
        assert_eq!(parse_intervals("R"), None);
        assert_eq!(parse_intervals("Ré5"), None);
    }

    #[test]
    fn test_session_end_crosses_midnight() {
        let session = create_test_session();
        assert_eq!(session.start(), date(2025, 7, 16).at(23, 50, 0, 0));
        assert_eq!(session.end(), date(2025, 7, 17).at(0, 15, 0, 0));
        assert_eq!(session.weekday(), 2);
        assert!(session.is_training());
    }

    #[test]
    fn test_plan_lookup_helpers() {
        let plan = create_short_plan(2);
        assert_eq!(plan.total_sessions(), 5);
        assert_eq!(plan.training_sessions().count(), 5);
        assert!(plan.session(1, 1).is_none(), "Monday before start is skipped");
        assert_eq!(plan.session(2, 3).unwrap().date, date(2025, 7, 25));
    }

    #[test]
    fn test_accessibility_describe() {
        assert_eq!(Accessibility::default().describe(), "standard");
        let flags = Accessibility {
            high_contrast: true,
            large_font: false,
            dyslexia_friendly: true,
        };
        assert!(flags.any());
        assert_eq!(flags.describe(), "high-contrast, dyslexia-friendly font");
    }

    #[test]
    fn test_export_options_defaults_from_json() {
        let options: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ExportOptions::default());
        assert_eq!(options.alert_minutes, 30);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = create_short_plan(1);
        let json = serde_json::to_string(&plan).unwrap();
        let back: crate::models::Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
