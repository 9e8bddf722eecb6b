//! Builds the canonical [`Plan`] from a profile and a plan configuration.

use jiff::{civil::Date, ToSpan};
use log::{debug, info, warn};

use super::{adjust::DurationAdjuster, template::PlanTemplate};
use crate::{
    error::{PacerError, Result},
    i18n::{Localizer, TextKey, TIP_COUNT},
    models::{
        config::{weekday_name, weekday_offset},
        Language, Plan, PlanConfig, Profile, SessionPlan, WeekPlan, WeekdayOffset,
    },
};

/// Deterministic plan builder.
///
/// Holds only the text tables; every input that shapes the schedule is passed
/// to [`PlanBuilder::build`], so equal inputs always give equal plans.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    localizer: Localizer,
}

impl PlanBuilder {
    /// Creates a builder that resolves text through `localizer`.
    pub fn new(localizer: Localizer) -> Self {
        Self { localizer }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Builds the full schedule.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidProfile` or `PacerError::InvalidConfig`
    /// when validation fails, and `PacerError::MissingTranslation` when the
    /// profile language has no text for a required key. No partial plan is
    /// ever returned.
    pub fn build(&self, profile: &Profile, config: &PlanConfig) -> Result<Plan> {
        profile.validate()?;
        config.validate()?;

        let language = profile.language;
        let labels = self.localizer.labels(language)?;
        let slots = config.weekly_slots();
        let text = SessionText::new(&self.localizer, language, &slots);
        let adjuster = DurationAdjuster::new(config.min_session_secs);
        let anchor = first_monday(profile.start_date, &slots)?;

        let mut weeks = Vec::with_capacity(config.weeks as usize);
        for week in 1..=config.weeks {
            let monday = shift(anchor, i64::from(week - 1) * 7)?;
            let template = PlanTemplate::for_week(week);
            let mut sessions = Vec::with_capacity(slots.len());

            for (day, &(offset, rest_day)) in (1u32..).zip(slots.iter()) {
                let date = shift(monday, i64::from(offset))?;
                if date < profile.start_date {
                    warn!(
                        "Skipping week {week} {} slot dated {date}, before the start date {}",
                        weekday_name(offset),
                        profile.start_date
                    );
                    continue;
                }

                let session = if rest_day {
                    SessionPlan {
                        week,
                        day,
                        date,
                        start_time: profile.session_time,
                        nominal_seconds: 0,
                        adjusted_seconds: 0,
                        intervals: Vec::new(),
                        rest_day: true,
                        tip: text.tip(week, day)?,
                        instruction: text.instruction(week, true)?,
                        note: text.note(false)?,
                    }
                } else {
                    let nominal_seconds = template.nominal_seconds();
                    let adjusted_seconds = adjuster.adjust(nominal_seconds, profile);
                    SessionPlan {
                        week,
                        day,
                        date,
                        start_time: profile.session_time,
                        nominal_seconds,
                        adjusted_seconds,
                        intervals: template.intervals(),
                        rest_day: false,
                        tip: text.tip(week, day)?,
                        instruction: text.instruction(week, false)?,
                        note: text.note(adjusted_seconds < nominal_seconds)?,
                    }
                };
                debug!(
                    "Week {week} day {day}: {date} rest={rest_day} adjusted={}s",
                    session.adjusted_seconds
                );
                sessions.push(session);
            }
            weeks.push(WeekPlan { week, sessions });
        }

        let plan = Plan {
            profile: profile.clone(),
            config: config.clone(),
            labels,
            weeks,
        };
        info!(
            "Built {}-week plan in '{language}' with {} sessions ({} training)",
            config.weeks,
            plan.total_sessions(),
            plan.training_sessions().count()
        );
        Ok(plan)
    }

    /// Re-renders every localized string of `plan` in `language`.
    ///
    /// Dates, durations and interval structures are copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::MissingTranslation` when `language` lacks a
    /// required key and no fallback is configured.
    pub fn relocalize(&self, plan: &Plan, language: Language) -> Result<Plan> {
        plan.relocalize(&self.localizer, language)
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new(Localizer::builtin())
    }
}

/// Resolves the per-session text of one plan.
pub(super) struct SessionText<'a> {
    localizer: &'a Localizer,
    language: Language,
    slot_count: u32,
}

impl<'a> SessionText<'a> {
    pub(super) fn new(
        localizer: &'a Localizer,
        language: Language,
        slots: &[(WeekdayOffset, bool)],
    ) -> Self {
        Self {
            localizer,
            language,
            slot_count: u32::try_from(slots.len()).unwrap_or(u32::MAX),
        }
    }

    fn text(&self, key: TextKey) -> Result<String> {
        self.localizer
            .text(key, self.language)
            .map(str::to_string)
    }

    /// Rotating tip: sessions cycle through the tips in schedule order.
    pub(super) fn tip(&self, week: u32, day: u32) -> Result<String> {
        let position = (week - 1)
            .saturating_mul(self.slot_count)
            .saturating_add(day - 1);
        self.text(TextKey::Tip(position % TIP_COUNT + 1))
    }

    pub(super) fn instruction(&self, week: u32, rest_day: bool) -> Result<String> {
        if rest_day {
            self.text(TextKey::RestInstruction)
        } else {
            self.text(TextKey::Instruction(PlanTemplate::for_week(week).week))
        }
    }

    pub(super) fn note(&self, reduced: bool) -> Result<String> {
        let hydration = self.text(TextKey::HydrationNote)?;
        if reduced {
            Ok(format!("{hydration} {}", self.text(TextKey::ReducedNote)?))
        } else {
            Ok(hydration)
        }
    }
}

fn shift(date: Date, days: i64) -> Result<Date> {
    date.checked_add(days.days()).map_err(|e| {
        PacerError::invalid_profile("start_date")
            .with_reason(format!("schedule leaves the supported calendar range: {e}"))
    })
}

/// Monday of the first plan week.
///
/// Normally the Monday of the start date's week; when every slot of that week
/// falls before the start date the plan begins the following Monday instead,
/// so week 1 is never empty.
fn first_monday(start: Date, slots: &[(WeekdayOffset, bool)]) -> Result<Date> {
    let start_offset = weekday_offset(start.weekday());
    let monday = shift(start, -i64::from(start_offset))?;
    if slots.iter().any(|(offset, _)| *offset >= start_offset) {
        Ok(monday)
    } else {
        info!("No slot left in the week of {start}; plan begins the following Monday");
        shift(monday, 7)
    }
}
