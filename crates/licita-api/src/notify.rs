//! Notification and navigation collaborators.
//!
//! The adapter reports global conditions (connectivity loss, session expiry,
//! authorization denials, server errors) through [`Notifier`] and requests
//! redirects through [`Navigator`]. Both are fire-and-forget from the
//! adapter's point of view.

use std::fmt;

/// Kind of global notification raised by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Connectivity,
    SessionExpired,
    AccessDenied,
    ServerError,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connectivity => "connectivity",
            Self::SessionExpired => "session_expired",
            Self::AccessDenied => "access_denied",
            Self::ServerError => "server_error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives global notifications. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Performs client-side navigation (or the CLI equivalent).
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

/// Default notifier: routes notifications to the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Connectivity | NotificationKind::ServerError => {
                tracing::error!(kind = %kind, "{message}");
            }
            NotificationKind::SessionExpired | NotificationKind::AccessDenied => {
                tracing::warn!(kind = %kind, "{message}");
            }
        }
    }
}

/// Default navigator: records the requested route in the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, route: &str) {
        tracing::info!(route, "navigation requested");
    }
}
