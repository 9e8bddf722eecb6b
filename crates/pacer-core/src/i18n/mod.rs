//! Localized text lookup.
//!
//! Text is addressed by a closed set of [`TextKey`]s and stored per
//! [`Language`] in flat string tables. A lookup either finds the key in the
//! requested language, or, only when a fallback language is configured,
//! finds it there and logs the substitution. Anything else is a
//! `MissingTranslation` error; blank text is never emitted silently.

mod catalog;

use std::{collections::BTreeMap, fmt, path::Path, str::FromStr};

use log::warn;

use crate::{
    error::{PacerError, Result},
    models::{Language, PlanLabels},
};

/// Number of rotating tips in every catalog.
pub const TIP_COUNT: u32 = 10;

/// Number of week-specific instructions in every catalog.
pub const INSTRUCTION_COUNT: u32 = 10;

/// One language's key → text table.
pub type Catalog = BTreeMap<String, String>;

/// Keys the plan builder and exporters can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Workout instruction for a template week (1-based)
    Instruction(u32),
    /// Rotating beginner tip (1-based)
    Tip(u32),
    RestInstruction,
    HydrationNote,
    ReducedNote,
    Title,
    Name,
    StartDate,
    Goal,
    Week,
    Day,
    RestDay,
    Run,
    Walk,
    WarmUp,
    Notes,
    Resources,
    Disclaimer,
    VoiceIntro,
    VoiceOutro,
}

impl TextKey {
    /// Every key a complete catalog must define.
    pub fn all() -> Vec<TextKey> {
        let mut keys: Vec<TextKey> = (1..=INSTRUCTION_COUNT).map(TextKey::Instruction).collect();
        keys.extend((1..=TIP_COUNT).map(TextKey::Tip));
        keys.extend([
            TextKey::RestInstruction,
            TextKey::HydrationNote,
            TextKey::ReducedNote,
            TextKey::Title,
            TextKey::Name,
            TextKey::StartDate,
            TextKey::Goal,
            TextKey::Week,
            TextKey::Day,
            TextKey::RestDay,
            TextKey::Run,
            TextKey::Walk,
            TextKey::WarmUp,
            TextKey::Notes,
            TextKey::Resources,
            TextKey::Disclaimer,
            TextKey::VoiceIntro,
            TextKey::VoiceOutro,
        ]);
        keys
    }

    fn static_name(&self) -> Option<&'static str> {
        Some(match self {
            TextKey::Instruction(_) | TextKey::Tip(_) => return None,
            TextKey::RestInstruction => "rest.instruction",
            TextKey::HydrationNote => "note.hydration",
            TextKey::ReducedNote => "note.reduced",
            TextKey::Title => "label.title",
            TextKey::Name => "label.name",
            TextKey::StartDate => "label.start_date",
            TextKey::Goal => "label.goal",
            TextKey::Week => "label.week",
            TextKey::Day => "label.day",
            TextKey::RestDay => "label.rest_day",
            TextKey::Run => "label.run",
            TextKey::Walk => "label.walk",
            TextKey::WarmUp => "label.warm_up",
            TextKey::Notes => "label.notes",
            TextKey::Resources => "label.resources",
            TextKey::Disclaimer => "label.disclaimer",
            TextKey::VoiceIntro => "voice.intro",
            TextKey::VoiceOutro => "voice.outro",
        })
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextKey::Instruction(week) => write!(f, "instruction.{week}"),
            TextKey::Tip(n) => write!(f, "tip.{n}"),
            other => f.write_str(other.static_name().unwrap_or_default()),
        }
    }
}

impl FromStr for TextKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(n) = s.strip_prefix("instruction.") {
            return n
                .parse()
                .map(TextKey::Instruction)
                .map_err(|_| format!("Invalid text key: {s}"));
        }
        if let Some(n) = s.strip_prefix("tip.") {
            return n
                .parse()
                .map(TextKey::Tip)
                .map_err(|_| format!("Invalid text key: {s}"));
        }
        TextKey::all()
            .into_iter()
            .find(|key| key.static_name() == Some(s))
            .ok_or_else(|| format!("Invalid text key: {s}"))
    }
}

/// Keyed text tables for every available language.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    catalogs: BTreeMap<Language, Catalog>,
    fallback: Option<Language>,
}

fn to_catalog(entries: &[(&str, &str)]) -> Catalog {
    entries
        .iter()
        .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
        .collect()
}

impl Localizer {
    /// A localizer with no tables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// English and Spanish built-in tables, no fallback.
    pub fn builtin() -> Self {
        Self::empty()
            .with_catalog(Language::En, to_catalog(catalog::ENGLISH))
            .with_catalog(Language::Es, to_catalog(catalog::SPANISH))
    }

    /// Replace the table for `language`.
    pub fn with_catalog(mut self, language: Language, catalog: Catalog) -> Self {
        self.catalogs.insert(language, catalog);
        self
    }

    /// Merge entries over the table for `language`, creating it if needed.
    pub fn with_overrides(mut self, language: Language, overrides: Catalog) -> Self {
        self.catalogs.entry(language).or_default().extend(overrides);
        self
    }

    /// Drop the table for `language`.
    pub fn without(mut self, language: Language) -> Self {
        self.catalogs.remove(&language);
        self
    }

    /// Use `language` when a key is missing from the requested table.
    pub fn with_fallback(mut self, language: Option<Language>) -> Self {
        self.fallback = language;
        self
    }

    pub fn fallback(&self) -> Option<Language> {
        self.fallback
    }

    /// True when a table exists for `language`.
    pub fn supports(&self, language: Language) -> bool {
        self.catalogs.contains_key(&language)
    }

    /// Look up the text for `key` in `language`.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::MissingTranslation` when neither the requested
    /// language nor the configured fallback defines the key.
    pub fn text(&self, key: TextKey, language: Language) -> Result<&str> {
        let name = key.to_string();
        if let Some(text) = self.lookup(&name, language) {
            return Ok(text);
        }
        if let Some(fallback) = self.fallback.filter(|fallback| *fallback != language) {
            if let Some(text) = self.lookup(&name, fallback) {
                warn!("No '{name}' text for language '{language}', using '{fallback}' fallback");
                return Ok(text);
            }
        }
        Err(PacerError::MissingTranslation {
            key: name,
            language,
        })
    }

    fn lookup(&self, name: &str, language: Language) -> Option<&str> {
        self.catalogs
            .get(&language)
            .and_then(|catalog| catalog.get(name))
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Keys from [`TextKey::all`] missing from the table for `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<TextKey> {
        TextKey::all()
            .into_iter()
            .filter(|key| self.lookup(&key.to_string(), language).is_none())
            .collect()
    }

    /// Resolve every document label for `language`.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::MissingTranslation` for the first missing label.
    pub fn labels(&self, language: Language) -> Result<PlanLabels> {
        let text = |key| self.text(key, language).map(str::to_string);
        Ok(PlanLabels {
            title: text(TextKey::Title)?,
            name: text(TextKey::Name)?,
            start_date: text(TextKey::StartDate)?,
            goal: text(TextKey::Goal)?,
            week: text(TextKey::Week)?,
            day: text(TextKey::Day)?,
            rest_day: text(TextKey::RestDay)?,
            run: text(TextKey::Run)?,
            walk: text(TextKey::Walk)?,
            warm_up: text(TextKey::WarmUp)?,
            notes: text(TextKey::Notes)?,
            resources: text(TextKey::Resources)?,
            disclaimer: text(TextKey::Disclaimer)?,
            voice_intro: text(TextKey::VoiceIntro)?,
            voice_outro: text(TextKey::VoiceOutro)?,
        })
    }
}

/// Parse a JSON object of `key: text` pairs into a catalog.
///
/// # Errors
///
/// Returns `PacerError::Serialization` for malformed JSON and
/// `PacerError::Configuration` for keys outside the known key space.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json)?;
    if let Some(bad) = catalog.keys().find(|key| key.parse::<TextKey>().is_err()) {
        return Err(PacerError::Configuration {
            message: format!("Unknown translation key '{bad}'"),
        });
    }
    Ok(catalog)
}

/// Read a JSON catalog from disk.
///
/// # Errors
///
/// Returns `PacerError::FileSystem` if the file cannot be read, or any error
/// from [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|e| PacerError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_are_complete() {
        let localizer = Localizer::builtin();
        for language in Language::all() {
            assert!(
                localizer.missing_keys(*language).is_empty(),
                "{language} is missing {:?}",
                localizer.missing_keys(*language)
            );
        }
    }

    #[test]
    fn test_text_key_round_trips_through_name() {
        for key in TextKey::all() {
            assert_eq!(key.to_string().parse::<TextKey>(), Ok(key));
        }
    }

    #[test]
    fn test_text_in_requested_language() {
        let localizer = Localizer::builtin();
        assert_eq!(localizer.text(TextKey::Week, Language::En).unwrap(), "Week");
        assert_eq!(localizer.text(TextKey::Week, Language::Es).unwrap(), "Semana");
    }

    #[test]
    fn test_missing_language_without_fallback_fails() {
        let localizer = Localizer::builtin().without(Language::Es);
        let err = localizer.text(TextKey::Tip(1), Language::Es).unwrap_err();
        assert!(matches!(
            err,
            PacerError::MissingTranslation { ref key, language: Language::Es } if key == "tip.1"
        ));
    }

    #[test]
    fn test_missing_language_with_fallback_uses_fallback() {
        let localizer = Localizer::builtin()
            .without(Language::Es)
            .with_fallback(Some(Language::En));
        assert_eq!(
            localizer.text(TextKey::Tip(2), Language::Es).unwrap(),
            "Wear comfortable shoes and clothing."
        );
    }

    #[test]
    fn test_blank_entry_counts_as_missing() {
        let mut overrides = Catalog::new();
        overrides.insert("label.week".to_string(), "  ".to_string());
        let localizer = Localizer::builtin().with_overrides(Language::En, overrides);
        assert!(localizer.text(TextKey::Week, Language::En).is_err());
    }

    #[test]
    fn test_parse_catalog_rejects_unknown_keys() {
        assert!(parse_catalog(r#"{"tip.1": "Hola"}"#).is_ok());
        assert!(matches!(
            parse_catalog(r#"{"tipp.1": "Hola"}"#),
            Err(PacerError::Configuration { .. })
        ));
        assert!(matches!(
            parse_catalog("not json"),
            Err(PacerError::Serialization { .. })
        ));
    }

    #[test]
    fn test_labels_resolve_for_builtin_languages() {
        let labels = Localizer::builtin().labels(Language::Es).unwrap();
        assert_eq!(labels.rest_day, "Día de descanso");
    }
}
