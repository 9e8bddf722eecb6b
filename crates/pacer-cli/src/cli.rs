//! Command handlers.
//!
//! Each handler merges command line values over the persisted settings,
//! hands the result to `pacer-core`, and renders the outcome as markdown.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use jiff::{Timestamp, Zoned};
use log::{debug, info};
use pacer_core::{
    display::StoredArtifacts,
    params::next_monday,
    DirectorySink, ExportOptions, ExportRunner, Localizer, OperationStatus, Plan, PlanBuilder,
    PlanParams, ProfileParams, ProgressLog, Settings,
};

use crate::{
    args::{GenerateArgs, ProfileArgs, ProgressArgs, ScheduleArgs, SettingsCommands, ShowArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    settings: Settings,
    /// Explicit `--settings` path, if any
    settings_path: Option<PathBuf>,
    renderer: TerminalRenderer,
    concurrent: bool,
}

impl Cli {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            settings,
            settings_path,
            renderer,
            concurrent: false,
        }
    }

    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    fn localizer(&self) -> Result<Localizer> {
        self.settings
            .localizer()
            .context("Failed to load translation catalogs")
    }

    /// Validate the merged input and build the plan.
    fn build_plan(
        &self,
        localizer: &Localizer,
        profile: ProfileArgs,
        schedule: ScheduleArgs,
    ) -> Result<Plan> {
        let mut profile_params = self.settings.profile_params(ProfileParams::from(profile));
        if profile_params.start_date.is_none() {
            let start = next_monday(Zoned::now().date());
            debug!("No start date given, using {start}");
            profile_params.start_date = Some(start.to_string());
        }
        let profile = profile_params.into_profile()?;
        let config = self
            .settings
            .plan_params(PlanParams::from(schedule))
            .into_config()?;
        let plan = PlanBuilder::new(localizer.clone()).build(&profile, &config)?;
        Ok(plan)
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let localizer = self.localizer()?;
        let plan = self.build_plan(&localizer, args.profile, args.schedule)?;

        let mut options: ExportOptions = self.settings.export_options();
        options.accessibility = args.accessibility.apply(options.accessibility);
        if let Some(minutes) = args.alert_minutes {
            options.alert_minutes = minutes;
        }
        options.locale = args.locale;
        options.share_link = args.share_link;
        options.advisory = args.advisory;
        if args.stamp {
            options.generated_at = Some(Timestamp::now());
        }

        let runner = ExportRunner::new(args.formats).with_localizer(localizer);
        let report = if self.concurrent {
            info!("Running {} exporters concurrently", runner.formats().len());
            runner.run_concurrent(Arc::new(plan), options).await?
        } else {
            runner.run(&plan, &options)?
        };

        let out = args
            .out
            .or_else(|| self.settings.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        let sink = DirectorySink::new(&out)
            .with_context(|| format!("Failed to create output directory {}", out.display()))?;
        let stored = report.store(&sink);

        self.renderer.render(&report.to_string())?;
        self.renderer.render("\n")?;
        self.renderer.render(&StoredArtifacts(&stored).to_string())?;

        let written = stored.iter().filter(|s| s.location.is_ok()).count();
        let failed_formats = report.failures().count();
        let failed_writes = stored.len() - written;
        if failed_formats == 0 && failed_writes == 0 {
            let status = OperationStatus::success(format!(
                "wrote {written} artifact(s) to {}",
                sink.dir().display()
            ));
            self.renderer.render(&format!("\n{status}"))?;
            Ok(())
        } else {
            let status = OperationStatus::partial(format!(
                "wrote {written} artifact(s); {failed_formats} format(s) and {failed_writes} file(s) failed"
            ));
            self.renderer.render(&format!("\n{status}"))?;
            bail!("{failed_formats} format(s) and {failed_writes} file(s) failed")
        }
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let localizer = self.localizer()?;
        let mut plan = self.build_plan(&localizer, args.profile, args.schedule)?;
        if let Some(language) = args.locale {
            plan = plan.relocalize(&localizer, language)?;
        }
        self.renderer.render(&plan.to_string())
    }

    pub fn progress(&self, args: ProgressArgs) -> Result<()> {
        let log = ProgressLog::load(&args.file)
            .with_context(|| format!("Failed to read progress log {}", args.file.display()))?;
        let summary = log.summary();
        info!("{} of {} sessions completed", summary.completed, summary.total);
        self.renderer.render(&format!("# Progress\n\n{summary}"))
    }

    pub fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => self.show_settings(),
            SettingsCommands::Init { force } => self.init_settings(force),
        }
    }

    fn settings_path(&self) -> Result<PathBuf> {
        match &self.settings_path {
            Some(path) => Ok(path.clone()),
            None => Settings::default_path().context("Failed to locate settings file"),
        }
    }

    fn show_settings(&self) -> Result<()> {
        let json = self
            .settings
            .to_json()
            .context("Failed to serialize settings")?;
        let location = match &self.settings_path {
            Some(path) => path.display().to_string(),
            None => Settings::default_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(no settings directory)".to_string()),
        };
        if self.renderer.is_rich() {
            self.renderer
                .render(&format!("# Settings\n\nFile: {location}\n\n```\n{json}\n```\n"))
        } else {
            // plain output stays valid JSON apart from the location line
            self.renderer.render(&format!("File: {location}\n{json}\n"))
        }
    }

    fn init_settings(&self, force: bool) -> Result<()> {
        let path = self.settings_path()?;
        if path.exists() && !force {
            let status = OperationStatus::failure(format!(
                "{} already exists; use --force to overwrite",
                path.display()
            ));
            self.renderer.render(&status.to_string())?;
            bail!("settings file {} already exists", path.display());
        }
        write_settings(&self.settings, &path)?;
        let status = OperationStatus::success(format!("wrote settings to {}", path.display()));
        self.renderer.render(&status.to_string())
    }
}

fn write_settings(settings: &Settings, path: &Path) -> Result<()> {
    settings
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
