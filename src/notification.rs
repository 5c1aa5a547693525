//! Non-fatal diagnostics.
//!
//! Issues that should reach the user without aborting the current action
//! (most importantly: an assembled name exceeding the fixed width and being
//! cut) are collected as `Notification` items rather than being silently
//! dropped or raised as hard errors.
//!
//! After composing or finalizing names the caller can inspect
//! [`Session::notifications`](crate::session::Session::notifications) to see
//! what was encountered.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An assembled name exceeded the fixed width and was cut.
    Truncation,
    /// Other non-fatal warning.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncation => write!(f, "Truncation"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced while assembling or storing layer names.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }

    /// Shorthand for a truncation notification.
    pub fn truncation(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Truncation, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}
