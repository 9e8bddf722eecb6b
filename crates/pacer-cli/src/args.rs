//! Command line arguments.
//!
//! Argument structs carry clap derives only; each converts into the
//! framework-free params of `pacer-core` with a `From` impl, and the core
//! does all validation:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanBuilder / ExportRunner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use pacer_core::{
    models::{Accessibility, Language},
    Format, PlanParams, ProfileParams,
};

/// Generate a personalised Couch-to-5K training plan
///
/// Pacer builds a dated run/walk schedule from your profile and writes it as
/// calendar, spreadsheet, document, QR, voice and fitness-app files.
#[derive(Parser)]
#[command(version, about, name = "pacer")]
pub struct Args {
    /// Settings file with persisted defaults. Defaults to
    /// $XDG_CONFIG_HOME/pacer/settings.json
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Run the exporters in parallel
    #[arg(long, global = true)]
    pub concurrent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a plan and write the requested artifacts
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the plan overview
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Summarise a progress log: the csv artifact with a `completed` column
    #[command(alias = "p")]
    Progress(ProgressArgs),
    /// Inspect or create the settings file
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,
    /// Write the current defaults to the settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Who the plan is for.
#[derive(ClapArgs, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,
    /// Body weight in the unit of --units
    #[arg(long)]
    pub weight: Option<f64>,
    /// metric (kg) or imperial (lb)
    #[arg(long)]
    pub units: Option<String>,
    /// male, female or unspecified
    #[arg(long, default_value = "unspecified")]
    pub gender: String,
    /// Plan language: en or es
    #[arg(long)]
    pub language: Option<String>,
    /// First day of the plan, YYYY-MM-DD. Defaults to next Monday
    #[arg(long)]
    pub start_date: Option<String>,
    /// Session start time, HH:MM
    #[arg(long = "time")]
    pub session_time: Option<String>,
    /// A personal goal printed on the documents
    #[arg(long)]
    pub goal: Option<String>,
    /// Replace name and email with placeholders in every artifact
    #[arg(long)]
    pub anonymize: bool,
}

impl From<ProfileArgs> for ProfileParams {
    fn from(val: ProfileArgs) -> Self {
        ProfileParams {
            name: val.name,
            email: val.email,
            age: val.age,
            weight: val.weight,
            units: val.units,
            gender: Some(val.gender),
            language: val.language,
            start_date: val.start_date,
            session_time: val.session_time,
            goal: val.goal,
            anonymize: val.anonymize,
        }
    }
}

/// How the weeks are laid out.
#[derive(ClapArgs, Debug, Clone)]
pub struct ScheduleArgs {
    /// Number of weeks
    #[arg(long)]
    pub weeks: Option<u32>,
    /// Training sessions per week; spreads them from Monday when --weekdays
    /// is not given
    #[arg(long)]
    pub sessions_per_week: Option<u32>,
    /// Training weekdays, e.g. mon,wed,fri
    #[arg(long, value_delimiter = ',')]
    pub weekdays: Option<Vec<String>>,
    /// Weekdays listed as explicit rest days, e.g. sat
    #[arg(long, value_delimiter = ',')]
    pub rest_days: Vec<String>,
    /// Shortest adjusted session, in minutes
    #[arg(long)]
    pub min_session: Option<u32>,
}

impl From<ScheduleArgs> for PlanParams {
    fn from(val: ScheduleArgs) -> Self {
        PlanParams {
            weeks: val.weeks,
            sessions_per_week: val.sessions_per_week,
            weekdays: val.weekdays,
            rest_days: val.rest_days,
            min_session_minutes: val.min_session,
        }
    }
}

/// Presentation flags; each one only switches a setting on.
#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct AccessibilityArgs {
    #[arg(long)]
    pub high_contrast: bool,
    #[arg(long)]
    pub large_font: bool,
    #[arg(long)]
    pub dyslexia_friendly: bool,
}

impl AccessibilityArgs {
    /// Merge over persisted flags.
    pub fn apply(self, base: Accessibility) -> Accessibility {
        Accessibility {
            high_contrast: base.high_contrast || self.high_contrast,
            large_font: base.large_font || self.large_font,
            dyslexia_friendly: base.dyslexia_friendly || self.dyslexia_friendly,
        }
    }
}

#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    #[command(flatten)]
    pub accessibility: AccessibilityArgs,

    /// Formats to export, comma separated. Defaults to all
    #[arg(long = "format", short = 'f', value_delimiter = ',')]
    pub formats: Vec<Format>,

    /// Output directory. Defaults to the settings value, then the current
    /// directory
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Minutes before each session the calendar reminder fires; 0 disables
    #[arg(long)]
    pub alert_minutes: Option<u32>,

    /// Write the documents in another language than the plan's
    #[arg(long)]
    pub locale: Option<Language>,

    /// Link printed on the documents
    #[arg(long)]
    pub share_link: Option<String>,

    /// Extra advisory text, e.g. a weather warning
    #[arg(long)]
    pub advisory: Option<String>,

    /// Record the generation time in the artifacts
    #[arg(long)]
    pub stamp: bool,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Show the plan in another language than the profile's
    #[arg(long)]
    pub locale: Option<Language>,
}

#[derive(ClapArgs)]
pub struct ProgressArgs {
    /// CSV log with week, day and completed (yes/no) columns
    pub file: PathBuf,
}
