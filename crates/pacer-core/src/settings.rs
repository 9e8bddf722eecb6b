//! Persisted defaults for plan generation.
//!
//! Settings live in `$XDG_CONFIG_HOME/pacer/settings.json` unless a path is
//! given explicitly. They only fill in values the caller left unset; the core
//! never reads them on its own, so interfaces pass the merged params in.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{PacerError, Result},
    i18n::{load_catalog, Localizer},
    models::{options::DEFAULT_ALERT_MINUTES, Accessibility, ExportOptions, Language, UnitSystem},
    params::{PlanParams, ProfileParams},
};

/// File name inside the XDG config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Defaults applied beneath command line values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub units: UnitSystem,
    pub weeks: u32,
    /// Training weekday names, e.g. `["mon", "wed", "fri"]`
    pub weekdays: Vec<String>,
    pub rest_days: Vec<String>,
    /// `HH:MM`
    pub session_time: String,
    pub min_session_minutes: u32,
    pub alert_minutes: u32,
    pub accessibility: Accessibility,
    /// Language used for keys missing from the requested one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_language: Option<Language>,
    /// Translation files merged over the built-in tables
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub catalogs: BTreeMap<Language, PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            units: UnitSystem::Metric,
            weeks: 10,
            weekdays: vec!["mon".to_string(), "wed".to_string(), "fri".to_string()],
            rest_days: Vec::new(),
            session_time: "07:00".to_string(),
            min_session_minutes: 10,
            alert_minutes: DEFAULT_ALERT_MINUTES,
            accessibility: Accessibility::default(),
            fallback_language: None,
            catalogs: BTreeMap::new(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// The default settings location, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::XdgDirectory` if the directory cannot be
    /// determined or created.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pacer")
            .place_config_file(SETTINGS_FILE)
            .map_err(|e| PacerError::XdgDirectory(e.to_string()))
    }

    /// Load settings from `path`, or from the XDG location when `None`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::FileSystem` if the file exists but cannot be
    /// read and `PacerError::Serialization` if it is not valid settings JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match xdg::BaseDirectories::with_prefix("pacer").find_config_file(SETTINGS_FILE)
            {
                Some(path) => path,
                None => {
                    debug!("No settings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        match fs::read_to_string(&path) {
            Ok(json) => {
                debug!("Loading settings from {}", path.display());
                Ok(serde_json::from_str(&json)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(PacerError::FileSystem { path, source }),
        }
    }

    /// Write the settings as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::FileSystem` when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let fs_error = |source| PacerError::FileSystem {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(fs_error)?;
        }
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json).map_err(fs_error)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// The settings as pretty JSON, as written by [`Settings::save`].
    ///
    /// # Errors
    ///
    /// Returns `PacerError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fill unset profile fields from the settings.
    pub fn profile_params(&self, mut params: ProfileParams) -> ProfileParams {
        params
            .language
            .get_or_insert_with(|| self.language.as_str().to_string());
        params
            .units
            .get_or_insert_with(|| self.units.to_string());
        params
            .session_time
            .get_or_insert_with(|| self.session_time.clone());
        params
    }

    /// Fill unset plan fields from the settings.
    pub fn plan_params(&self, mut params: PlanParams) -> PlanParams {
        params.weeks.get_or_insert(self.weeks);
        if params.weekdays.is_none() && params.sessions_per_week.is_none() {
            params.weekdays = Some(self.weekdays.clone());
        }
        if params.rest_days.is_empty() {
            params.rest_days = self.rest_days.clone();
        }
        params.min_session_minutes.get_or_insert(self.min_session_minutes);
        params
    }

    /// Export options seeded with the persisted alert and accessibility.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            accessibility: self.accessibility,
            alert_minutes: self.alert_minutes,
            ..ExportOptions::default()
        }
    }

    /// Built-in tables with the configured catalogs merged in.
    ///
    /// # Errors
    ///
    /// Returns the error of the first catalog that cannot be loaded.
    pub fn localizer(&self) -> Result<Localizer> {
        let mut localizer = Localizer::builtin().with_fallback(self.fallback_language);
        for (language, path) in &self.catalogs {
            debug!("Loading {language} catalog from {}", path.display());
            localizer = localizer.with_overrides(*language, load_catalog(path)?);
        }
        Ok(localizer)
    }
}
