//! User-facing notification content.
//!
//! The message text lives here; how a notice is shown (toast, console)
//! belongs to the view layer.

use std::fmt;

/// Weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A message to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn demo_mode() -> Self {
        Self::new(
            Severity::Info,
            "Demo mode: using local records. Configure the backend URL to sync.",
        )
    }

    pub fn offline_fallback() -> Self {
        Self::new(Severity::Warning, "Using offline mode. Data saved locally.")
    }

    pub fn record_saved() -> Self {
        Self::new(Severity::Success, "Patient record saved successfully.")
    }

    pub fn record_updated() -> Self {
        Self::new(Severity::Success, "Patient record updated successfully.")
    }

    pub fn save_failed() -> Self {
        Self::new(Severity::Error, "Error saving record. Please try again.")
    }

    pub fn update_failed(reason: &str) -> Self {
        Self::new(Severity::Error, format!("Update failed: {reason}"))
    }

    pub fn required_fields() -> Self {
        Self::new(Severity::Error, "Please fill in all required fields.")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.label(), self.message)
    }
}
