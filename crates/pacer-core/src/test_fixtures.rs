//! Shared fixtures for unit tests.

use jiff::civil::{date, time};

use crate::{
    i18n::Localizer,
    models::{Gender, Language, Plan, PlanConfig, Profile, UnitSystem, Weight, WeightUnit},
    planner::PlanBuilder,
};

pub(crate) fn create_test_profile() -> Profile {
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

pub(crate) fn profile_with(age: u32, weight: Weight) -> Profile {
    let units = match weight.unit {
        WeightUnit::Kg => UnitSystem::Metric,
        WeightUnit::Lb => UnitSystem::Imperial,
    };
    Profile {
        age,
        weight,
        units,
        ..create_test_profile()
    }
}

pub(crate) fn create_test_plan() -> Plan {
    PlanBuilder::new(Localizer::builtin())
        .build(&create_test_profile(), &PlanConfig::default())
        .expect("fixture plan builds")
}

pub(crate) fn create_short_plan(weeks: u32) -> Plan {
    let config = PlanConfig {
        weeks,
        ..PlanConfig::default()
    };
    PlanBuilder::new(Localizer::builtin())
        .build(&create_test_profile(), &config)
        .expect("fixture plan builds")
}
