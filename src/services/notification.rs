//! User-visible notices
//!
//! Alerts are transient messages shown above the main content; they expire
//! after a configurable time to live. The loading indicator is driven by a
//! count of in-flight requests, so it stays visible until the last one
//! finishes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

/// Kind of alert, mapped to its styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Alerts and loading state shared by every service
#[derive(Debug, Clone)]
pub struct Notifier {
    alerts: Arc<Mutex<Vec<Alert>>>,
    in_flight: Arc<AtomicUsize>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            alerts: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Alert>> {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raise an alert
    pub fn alert(&self, kind: AlertKind, message: impl Into<String>) {
        let message = message.into();
        debug!(kind = ?kind, message = %message, "Alert raised");
        self.lock().push(Alert {
            kind,
            message,
            raised_at: Utc::now(),
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.alert(AlertKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.alert(AlertKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.alert(AlertKind::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.alert(AlertKind::Info, message);
    }

    /// Alerts still within their time to live at `now`; expired ones are dropped
    pub fn active_alerts_at(&self, now: DateTime<Utc>) -> Vec<Alert> {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or_else(|_| chrono::Duration::seconds(3));
        let mut alerts = self.lock();
        alerts.retain(|alert| now - alert.raised_at < ttl);
        alerts.clone()
    }

    pub fn active_alerts(&self) -> Vec<Alert> {
        self.active_alerts_at(Utc::now())
    }

    /// Remove and return every pending alert
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.lock())
    }

    /// Mark a request as in flight until the guard is dropped
    pub fn begin_loading(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

/// Keeps the loading indicator on while alive
#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
