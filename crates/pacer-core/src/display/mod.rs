//! Display formatting for plans, reports and status lines.
//!
//! Domain models implement [`std::fmt::Display`] directly and render
//! markdown, which the CLI passes to its terminal renderer. Results that need
//! extra context go through small wrapper types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (Plan, Report)  │───▶│    wrappers     │───▶│    (terminal)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: `MM:SS` durations and local timestamps
//! - [`models`]: `Display` for plans and sessions
//! - [`results`]: `Display` for export reports and written artifacts
//! - [`status`]: one-line status messages ([`OperationStatus`])
//!
//! ```rust
//! use pacer_core::display::{format_duration, parse_duration, OperationStatus};
//!
//! assert_eq!(format_duration(1590), "26:30");
//! assert_eq!(parse_duration("26:30"), Some(1590));
//!
//! let status = OperationStatus::success("wrote 11 artifacts");
//! assert_eq!(status.to_string(), "Success: wrote 11 artifacts\n");
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::{format_duration, parse_duration, LocalDateTime, MinutesSeconds};
pub use results::StoredArtifacts;
pub use status::{OperationStatus, StatusLevel};
