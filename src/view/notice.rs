//! Operation-outcome notifications
//!
//! Every storage or validation failure becomes one of these: a short-lived,
//! auto-dismissing banner. Errors never crash the application; they are
//! logged and shown, and the working set stays at its last known-good state.

use serde::Serialize;

use crate::config;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A transient user-visible notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub auto_dismiss_ms: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            auto_dismiss_ms: config::NOTICE_AUTO_DISMISS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            auto_dismiss_ms: config::NOTICE_AUTO_DISMISS_MS,
        }
    }

    /// Convert a failed operation into its user-visible form, logging the
    /// underlying error for diagnostics.
    pub fn from_error(error: &AppError) -> Self {
        tracing::error!("Operation failed: {}", error);
        Self::error(error.to_string())
    }
}
