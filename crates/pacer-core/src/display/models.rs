//! Display implementations for domain models.
//!
//! Plans render as markdown for the terminal renderer: a metadata list, then
//! one section per week with one line per session.

use std::fmt;

use super::datetime::MinutesSeconds;
use crate::models::{
    config::weekday_name, format_intervals, Activity, Gender, Plan, SessionPlan, UnitSystem,
};

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Run => f.write_str("run"),
            Activity::Walk => f.write_str("walk"),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = &self.labels;
        writeln!(f, "# {}", labels.title)?;
        writeln!(f)?;

        if let Some(name) = &self.profile.name {
            writeln!(f, "- {}: {name}", labels.name)?;
        }
        writeln!(f, "- {}: {}", labels.start_date, self.profile.start_date)?;
        if let Some(goal) = &self.profile.goal {
            writeln!(f, "- {}: {goal}", labels.goal)?;
        }
        writeln!(
            f,
            "- Sessions: {} ({} training), {} weeks",
            self.total_sessions(),
            self.training_sessions().count(),
            self.weeks.len()
        )?;

        for week in &self.weeks {
            writeln!(f, "\n## {} {}", labels.week, week.week)?;
            writeln!(f)?;
            for session in &week.sessions {
                write!(f, "{}", SessionLine { plan: self, session })?;
            }
        }
        Ok(())
    }
}

/// One session as a markdown list item, using the plan's labels.
struct SessionLine<'a> {
    plan: &'a Plan,
    session: &'a SessionPlan,
}

impl fmt::Display for SessionLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = &self.plan.labels;
        let s = self.session;
        if s.rest_day {
            return writeln!(
                f,
                "- {} {} ({} {}): *{}*",
                labels.day,
                s.day,
                weekday_name(s.weekday()),
                s.date,
                labels.rest_day
            );
        }
        write!(
            f,
            "- {} {} ({} {} {}): **{}**",
            labels.day,
            s.day,
            weekday_name(s.weekday()),
            s.date,
            s.start_time.strftime("%H:%M"),
            MinutesSeconds(s.adjusted_seconds)
        )?;
        if s.adjusted_seconds < s.nominal_seconds {
            write!(f, " (from {})", MinutesSeconds(s.nominal_seconds))?;
        }
        if !s.intervals.is_empty() {
            write!(f, " `{}`", format_intervals(&s.intervals))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SessionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Week {}, day {}", self.week, self.day)?;
        writeln!(f)?;
        writeln!(f, "- Date: {} {}", self.date, self.start_time.strftime("%H:%M"))?;
        if self.rest_day {
            writeln!(f, "- Rest day")?;
        } else {
            writeln!(
                f,
                "- Duration: {} (nominal {})",
                MinutesSeconds(self.adjusted_seconds),
                MinutesSeconds(self.nominal_seconds)
            )?;
            if !self.intervals.is_empty() {
                writeln!(f, "- Intervals: `{}`", format_intervals(&self.intervals))?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.instruction)?;
        writeln!(f)?;
        writeln!(f, "> {}", self.tip)?;
        writeln!(f)?;
        writeln!(f, "{}", self.note)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::create_short_plan;

    #[test]
    fn test_plan_display_lists_weeks_and_sessions() {
        let plan = create_short_plan(2);
        let output = plan.to_string();
        assert!(output.starts_with("# Couch to 5K Plan"));
        assert!(output.contains("- Name: Alex Runner"));
        assert!(output.contains("## Week 2"));
        assert!(output.contains("- Day 2 (Wed 2025-07-16 07:30): **25:00**"));
        assert!(output.contains("`W300 R60 W90"));
    }

    #[test]
    fn test_session_display() {
        let plan = create_short_plan(1);
        let output = plan.session(1, 2).unwrap().to_string();
        assert!(output.contains("### Week 1, day 2"));
        assert!(output.contains("- Duration: 25:00 (nominal 25:00)"));
        assert!(output.contains("> Wear comfortable shoes and clothing."));
    }
}
