//! Per-export configuration passed by value to each exporter.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Language;

/// Default reminder lead time for calendar events, in minutes.
pub const DEFAULT_ALERT_MINUTES: u32 = 30;

/// Longest accepted reminder lead time (one day).
pub const MAX_ALERT_MINUTES: u32 = 1440;

/// Presentation toggles. They change styling metadata, never data values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Accessibility {
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub large_font: bool,
    #[serde(default)]
    pub dyslexia_friendly: bool,
}

impl Accessibility {
    pub fn any(&self) -> bool {
        self.high_contrast || self.large_font || self.dyslexia_friendly
    }

    /// Human-readable list of enabled toggles.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.high_contrast {
            parts.push("high-contrast");
        }
        if self.large_font {
            parts.push("large font");
        }
        if self.dyslexia_friendly {
            parts.push("dyslexia-friendly font");
        }
        if parts.is_empty() {
            "standard".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Options shared by all exporters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportOptions {
    #[serde(default)]
    pub accessibility: Accessibility,

    /// Minutes before a session the calendar reminder fires; 0 disables it
    #[serde(default = "default_alert_minutes")]
    pub alert_minutes: u32,

    /// Output language override; the profile language when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Language>,

    /// Replace name and email with a placeholder in every artifact
    #[serde(default)]
    pub anonymize: bool,

    /// Optional link printed in document-style artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,

    /// Opaque advisory text supplied by a collaborator (e.g. weather)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,

    /// Generation time, emitted only in fields labelled as such
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<Timestamp>,
}

fn default_alert_minutes() -> u32 {
    DEFAULT_ALERT_MINUTES
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            accessibility: Accessibility::default(),
            alert_minutes: DEFAULT_ALERT_MINUTES,
            locale: None,
            anonymize: false,
            share_link: None,
            advisory: None,
            generated_at: None,
        }
    }
}
