//! Fixed week-indexed interval templates (NHS Couch to 5K).

use crate::models::{Activity, Interval};

/// Brisk walk that opens every training session, in seconds.
pub const WARM_UP_SECS: u32 = 300;

/// The main set of a template week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainSet {
    /// `block` repeated `times` times
    Repeat {
        block: &'static [Interval],
        times: u32,
    },
    /// One uninterrupted run of the given length
    Continuous { run_secs: u32 },
}

/// Workout structure for one template week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTemplate {
    /// Template week number, 1-based
    pub week: u32,
    pub main_set: MainSet,
}

static WEEK_1: [Interval; 2] = [Interval::run(60), Interval::walk(90)];
static WEEK_2: [Interval; 2] = [Interval::run(90), Interval::walk(120)];
static WEEK_3: [Interval; 4] = [
    Interval::run(90),
    Interval::walk(90),
    Interval::run(180),
    Interval::walk(180),
];
static WEEK_4: [Interval; 7] = [
    Interval::run(180),
    Interval::walk(90),
    Interval::run(300),
    Interval::walk(150),
    Interval::run(180),
    Interval::walk(90),
    Interval::run(300),
];
static WEEK_5: [Interval; 5] = [
    Interval::run(300),
    Interval::walk(180),
    Interval::run(300),
    Interval::walk(180),
    Interval::run(300),
];
static WEEK_6: [Interval; 3] = [Interval::run(480), Interval::walk(300), Interval::run(480)];

static TEMPLATE: [WeekTemplate; 10] = [
    WeekTemplate {
        week: 1,
        main_set: MainSet::Repeat {
            block: &WEEK_1,
            times: 8,
        },
    },
    WeekTemplate {
        week: 2,
        main_set: MainSet::Repeat {
            block: &WEEK_2,
            times: 6,
        },
    },
    WeekTemplate {
        week: 3,
        main_set: MainSet::Repeat {
            block: &WEEK_3,
            times: 2,
        },
    },
    WeekTemplate {
        week: 4,
        main_set: MainSet::Repeat {
            block: &WEEK_4,
            times: 1,
        },
    },
    WeekTemplate {
        week: 5,
        main_set: MainSet::Repeat {
            block: &WEEK_5,
            times: 1,
        },
    },
    WeekTemplate {
        week: 6,
        main_set: MainSet::Repeat {
            block: &WEEK_6,
            times: 1,
        },
    },
    WeekTemplate {
        week: 7,
        main_set: MainSet::Continuous { run_secs: 1500 },
    },
    WeekTemplate {
        week: 8,
        main_set: MainSet::Continuous { run_secs: 1680 },
    },
    WeekTemplate {
        week: 9,
        main_set: MainSet::Continuous { run_secs: 1800 },
    },
    WeekTemplate {
        week: 10,
        main_set: MainSet::Continuous { run_secs: 1800 },
    },
];

/// Lookup over the fixed template table.
pub struct PlanTemplate;

impl PlanTemplate {
    /// Highest week the table defines.
    pub fn max_week() -> u32 {
        TEMPLATE.len() as u32
    }

    /// Shortest nominal session among the first `weeks` weeks of a plan.
    pub fn shortest_nominal_seconds(weeks: u32) -> u32 {
        (1..=weeks.clamp(1, Self::max_week()))
            .map(|week| Self::for_week(week).nominal_seconds())
            .min()
            .unwrap_or(WARM_UP_SECS)
    }

    /// Template for `week`; weeks past the table reuse its final entry.
    pub fn for_week(week: u32) -> &'static WeekTemplate {
        let index = week.clamp(1, Self::max_week()) as usize - 1;
        &TEMPLATE[index]
    }
}

impl WeekTemplate {
    /// Ordered interval structure including the warm-up walk.
    ///
    /// Continuous weeks return an empty structure; the run is described by
    /// the instruction text and counted in [`WeekTemplate::nominal_seconds`].
    pub fn intervals(&self) -> Vec<Interval> {
        match self.main_set {
            MainSet::Repeat { block, times } => {
                let mut intervals = Vec::with_capacity(1 + block.len() * times as usize);
                intervals.push(Interval::walk(WARM_UP_SECS));
                for _ in 0..times {
                    intervals.extend_from_slice(block);
                }
                intervals
            }
            MainSet::Continuous { .. } => Vec::new(),
        }
    }

    /// Session length before any profile adjustment.
    pub fn nominal_seconds(&self) -> u32 {
        match self.main_set {
            MainSet::Repeat { .. } => self.intervals().iter().map(|i| i.seconds).sum(),
            MainSet::Continuous { run_secs } => WARM_UP_SECS + run_secs,
        }
    }

    /// Total running time in the session.
    pub fn run_seconds(&self) -> u32 {
        match self.main_set {
            MainSet::Repeat { block, times } => {
                let per_block: u32 = block
                    .iter()
                    .filter(|i| i.activity == Activity::Run)
                    .map(|i| i.seconds)
                    .sum();
                times * per_block
            }
            MainSet::Continuous { run_secs } => run_secs,
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self.main_set, MainSet::Continuous { .. })
    }
}
