//! One-line status messages for command feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// Finished, but some parts failed
    Partial,
    Failure,
}

/// A status line such as `Success: wrote 11 artifacts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn partial(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Partial,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Partial => "Partial:",
            StatusLevel::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        assert_eq!(
            OperationStatus::success("wrote 3 artifacts").to_string(),
            "Success: wrote 3 artifacts\n"
        );
        assert!(OperationStatus::partial("1 format failed")
            .to_string()
            .starts_with("Partial:"));
        assert!(OperationStatus::failure("no plan").to_string().starts_with("Error:"));
    }
}
