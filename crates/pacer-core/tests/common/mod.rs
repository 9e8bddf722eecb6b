#![allow(dead_code)]

use jiff::civil::{date, time, Date};
use pacer_core::{
    models::{Gender, Language, PlanConfig, Profile, UnitSystem, Weight},
    Plan, PlanBuilder,
};

/// The reference profile: 35 years, 70 kg, starting Tuesday 2025-07-15.
pub fn create_test_profile() -> Profile {
    Profile {
        name: Some("Alex Runner".to_string()),
        email: Some("alex@example.com".to_string()),
        age: 35,
        weight: Weight::kg(70.0),
        gender: Gender::Female,
        language: Language::En,
        units: UnitSystem::Metric,
        start_date: date(2025, 7, 15),
        session_time: time(7, 30, 0, 0),
        goal: Some("Finish my first parkrun".to_string()),
        anonymize: false,
    }
}

pub fn profile_starting(start_date: Date) -> Profile {
    Profile {
        start_date,
        ..create_test_profile()
    }
}

/// Build with the built-in tables, panicking on invalid input.
pub fn build_plan(profile: &Profile, config: &PlanConfig) -> Plan {
    PlanBuilder::default()
        .build(profile, config)
        .expect("Failed to build plan")
}

/// Ten weeks on Mon/Wed/Fri with Saturday as an explicit rest day.
pub fn create_plan_with_rest_day() -> Plan {
    let config = PlanConfig {
        rest_days: [5].into_iter().collect(),
        ..PlanConfig::default()
    };
    build_plan(&create_test_profile(), &config)
}
