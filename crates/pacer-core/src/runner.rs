//! Orchestrates a set of exporters over one plan.
//!
//! The runner owns the steps every interface repeats: an output-locale
//! override, one [`export`] call per requested format, and a report that keeps
//! each format's outcome apart from its siblings. A failing or panicking
//! exporter never cancels the others.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Plan+Options │───▶│ relocalize (opt) │───▶│ export() per │───▶│ ExportReport │
//! └──────────────┘    └──────────────────┘    │    format    │    └──────┬───────┘
//!                                             └──────────────┘           ▼
//!                                                                ArtifactSink
//! ```

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::Timestamp;
use log::{debug, error, info};
use tokio::task;

use crate::{
    error::{PacerError, Result},
    export::{export, Artifact, Format},
    i18n::Localizer,
    models::{ExportOptions, Plan},
};

/// Result of one requested format.
#[derive(Debug)]
pub struct FormatOutcome {
    pub format: Format,
    pub result: Result<Vec<Artifact>>,
}

impl FormatOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a run, in requested order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<FormatOutcome>,
    /// Copied from the options so reports can show it
    pub generated_at: Option<Timestamp>,
}

impl ExportReport {
    /// True when every requested format produced its artifacts.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(FormatOutcome::is_success)
    }

    /// All produced artifacts, format by format.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .flatten()
    }

    /// Failed formats with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (Format, &PacerError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (outcome.format, e)))
    }

    /// Store every produced artifact. Each artifact is attempted even when an
    /// earlier one fails.
    pub fn store(&self, sink: &dyn ArtifactSink) -> Vec<StoredArtifact> {
        self.artifacts()
            .map(|artifact| {
                let location = sink.store(artifact);
                match &location {
                    Ok(location) => info!("Wrote {} to {location}", artifact.name),
                    Err(e) => error!("Could not write {}: {e}", artifact.name),
                }
                StoredArtifact {
                    name: artifact.name.clone(),
                    location,
                }
            })
            .collect()
    }
}

/// Where one artifact ended up.
#[derive(Debug)]
pub struct StoredArtifact {
    pub name: String,
    pub location: Result<String>,
}

/// Destination for finished artifacts.
pub trait ArtifactSink: Send + Sync {
    /// Persist `artifact` and describe where it went.
    ///
    /// # Errors
    ///
    /// Returns an error when the artifact cannot be stored.
    fn store(&self, artifact: &Artifact) -> Result<String>;
}

/// Writes artifacts as files named after them into one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating `dir` when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::FileSystem` when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PacerError::FileSystem {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn store(&self, artifact: &Artifact) -> Result<String> {
        let path = self.dir.join(&artifact.name);
        fs::write(&path, &artifact.bytes).map_err(|source| PacerError::FileSystem {
            path: path.clone(),
            source,
        })?;
        Ok(path.display().to_string())
    }
}

/// Runs the exporters for a fixed list of formats.
#[derive(Debug, Clone)]
pub struct ExportRunner {
    formats: Vec<Format>,
    localizer: Localizer,
}

impl Default for ExportRunner {
    fn default() -> Self {
        Self::new(Format::all().iter().copied())
    }
}

impl ExportRunner {
    /// Runner for `formats`, deduplicated in first-seen order. An empty list
    /// means every format.
    pub fn new(formats: impl IntoIterator<Item = Format>) -> Self {
        let mut unique: Vec<Format> = Vec::new();
        for format in formats {
            if !unique.contains(&format) {
                unique.push(format);
            }
        }
        if unique.is_empty() {
            unique = Format::all().to_vec();
        }
        Self {
            formats: unique,
            localizer: Localizer::builtin(),
        }
    }

    /// Localizer used for an output-locale override.
    pub fn with_localizer(mut self, localizer: Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// The plan as exporters should see it: re-rendered when the options
    /// request a different output language.
    fn prepare<'a>(&self, plan: &'a Plan, options: &ExportOptions) -> Result<Cow<'a, Plan>> {
        match options.locale {
            Some(language) if language != plan.profile.language => {
                info!("Re-rendering plan text in {language}");
                Ok(Cow::Owned(plan.relocalize(&self.localizer, language)?))
            }
            _ => Ok(Cow::Borrowed(plan)),
        }
    }

    fn outcome(format: Format, result: Result<Vec<Artifact>>) -> FormatOutcome {
        match &result {
            Ok(artifacts) => debug!("{format}: {} artifact(s)", artifacts.len()),
            Err(e) => error!("{format}: {e}"),
        }
        FormatOutcome { format, result }
    }

    /// Export every format one after another.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::MissingTranslation` when the locale override
    /// cannot be rendered; no artifact is produced in that case. Per-format
    /// failures are reported in the [`ExportReport`].
    pub fn run(&self, plan: &Plan, options: &ExportOptions) -> Result<ExportReport> {
        let plan = self.prepare(plan, options)?;
        let outcomes = self
            .formats
            .iter()
            .map(|&format| Self::outcome(format, export(format, &plan, options)))
            .collect();
        let report = ExportReport {
            outcomes,
            generated_at: options.generated_at,
        };
        info!(
            "Exported {} artifact(s), {} format(s) failed",
            report.artifacts().count(),
            report.failures().count()
        );
        Ok(report)
    }

    /// Export every format on the blocking thread pool at once.
    ///
    /// Produces the same report as [`ExportRunner::run`]. A panicking
    /// exporter is reported as that format's failure.
    ///
    /// # Errors
    ///
    /// Same as [`ExportRunner::run`].
    pub async fn run_concurrent(
        &self,
        plan: Arc<Plan>,
        options: ExportOptions,
    ) -> Result<ExportReport> {
        let relocalized = match self.prepare(&plan, &options)? {
            Cow::Owned(relocalized) => Some(relocalized),
            Cow::Borrowed(_) => None,
        };
        let plan = relocalized.map_or(plan, Arc::new);
        let options = Arc::new(options);

        let handles: Vec<_> = self
            .formats
            .iter()
            .map(|&format| {
                let plan = Arc::clone(&plan);
                let options = Arc::clone(&options);
                (
                    format,
                    task::spawn_blocking(move || export(format, &plan, &options)),
                )
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (format, handle) in handles {
            let result = handle.await.unwrap_or_else(|e| {
                Err(PacerError::export(format).with_reason(format!("exporter task failed: {e}")))
            });
            outcomes.push(Self::outcome(format, result));
        }

        Ok(ExportReport {
            outcomes,
            generated_at: options.generated_at,
        })
    }
}
