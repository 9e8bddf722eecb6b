//! Replaces personally identifying profile fields with fixed placeholders.

use crate::models::{Plan, Profile};

/// Stands in for the profile name in every artifact.
pub const PLACEHOLDER_NAME: &str = "Anonymous";

/// Stands in for the profile email in every artifact.
pub const PLACEHOLDER_EMAIL: &str = "anonymous@example.invalid";

/// Identifiers shorter than this are not searched for inside free text.
const MIN_SCRUB_LEN: usize = 2;

/// Scrubs one profile's name and email.
///
/// Built from the profile before anonymization, so it can also clean free
/// text supplied alongside the plan (share links, advisories).
#[derive(Debug, Clone, Default)]
pub struct AnonymizeFilter {
    replacements: Vec<(String, &'static str)>,
}

impl AnonymizeFilter {
    pub fn for_profile(profile: &Profile) -> Self {
        let mut replacements = Vec::new();
        // email first: it may contain the name
        if let Some(email) = profile.email.as_deref().map(str::trim) {
            if email != PLACEHOLDER_EMAIL && email.len() >= MIN_SCRUB_LEN {
                replacements.push((email.to_string(), PLACEHOLDER_EMAIL));
            }
        }
        if let Some(name) = profile.name.as_deref().map(str::trim) {
            if name != PLACEHOLDER_NAME && name.len() >= MIN_SCRUB_LEN {
                replacements.push((name.to_string(), PLACEHOLDER_NAME));
            }
        }
        Self { replacements }
    }

    /// Replace every occurrence of the identifiers in `text`.
    pub fn scrub(&self, text: &str) -> String {
        self.replacements
            .iter()
            .fold(text.to_string(), |acc, (needle, placeholder)| {
                acc.replace(needle.as_str(), placeholder)
            })
    }

    /// Anonymized copy of `plan`. Session content is left untouched.
    pub fn apply(&self, plan: &Plan) -> Plan {
        let mut plan = plan.clone();
        let profile = &mut plan.profile;
        if profile.name.is_some() {
            profile.name = Some(PLACEHOLDER_NAME.to_string());
        }
        if profile.email.is_some() {
            profile.email = Some(PLACEHOLDER_EMAIL.to_string());
        }
        profile.goal = profile.goal.as_deref().map(|goal| self.scrub(goal));
        profile.anonymize = true;
        plan
    }
}

/// Anonymized copy of `plan`. Applying it twice equals applying it once.
pub fn anonymize(plan: &Plan) -> Plan {
    AnonymizeFilter::for_profile(&plan.profile).apply(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_short_plan;

    #[test]
    fn test_anonymize_replaces_name_and_email() {
        let plan = create_short_plan(1);
        let anonymous = anonymize(&plan);
        assert_eq!(anonymous.profile.name.as_deref(), Some(PLACEHOLDER_NAME));
        assert_eq!(anonymous.profile.email.as_deref(), Some(PLACEHOLDER_EMAIL));
        assert!(anonymous.profile.anonymize);
        assert_eq!(anonymous.weeks, plan.weeks);
    }

    #[test]
    fn test_anonymize_is_idempotent() {
        let mut plan = create_short_plan(2);
        plan.profile.goal = Some("Alex Runner runs a 5K, mail alex@example.com".to_string());
        let once = anonymize(&plan);
        let twice = anonymize(&once);
        assert_eq!(once, twice);
        assert_eq!(
            once.profile.goal.as_deref(),
            Some("Anonymous runs a 5K, mail anonymous@example.invalid")
        );
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let mut plan = create_short_plan(1);
        plan.profile.name = None;
        plan.profile.email = None;
        let anonymous = anonymize(&plan);
        assert_eq!(anonymous.profile.name, None);
        assert_eq!(anonymous.profile.email, None);
    }

    #[test]
    fn test_scrub_free_text() {
        let plan = create_short_plan(1);
        let filter = AnonymizeFilter::for_profile(&plan.profile);
        assert_eq!(
            filter.scrub("https://example.com/share?who=alex@example.com"),
            "https://example.com/share?who=anonymous@example.invalid"
        );
    }
}
