//! Structured JSON document: the whole plan nested by week.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Artifact, Exporter, Format};
use crate::{
    error::{PacerError, Result},
    models::{ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "application/json";

/// Identifies the document kind for readers.
pub const DOCUMENT_KIND: &str = "pacer-plan";

/// Bumped on incompatible layout changes.
pub const DOCUMENT_VERSION: u32 = 1;

/// Top-level JSON layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub kind: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<Timestamp>,
    pub plan: Plan,
}

pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        let document = StructuredDocument {
            kind: DOCUMENT_KIND.to_string(),
            version: DOCUMENT_VERSION,
            generated_at: options.generated_at,
            plan: plan.clone(),
        };
        let mut bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| PacerError::export(Format::Json).with_reason(e))?;
        bytes.push(b'\n');
        Ok(vec![Artifact::new(
            Format::Json.artifact_names()[0],
            MEDIA_TYPE,
            bytes,
        )])
    }
}

/// Read the structured artifact back into a [`Plan`].
///
/// # Errors
///
/// Returns `PacerError::Serialization` for malformed JSON and
/// `PacerError::Export` for a document of another kind or version.
pub fn parse_structured(bytes: &[u8]) -> Result<Plan> {
    let document: StructuredDocument = serde_json::from_slice(bytes)?;
    if document.kind != DOCUMENT_KIND || document.version != DOCUMENT_VERSION {
        return Err(PacerError::export(Format::Json).with_reason(format!(
            "unsupported document {} v{}",
            document.kind, document.version
        )));
    }
    Ok(document.plan)
}
