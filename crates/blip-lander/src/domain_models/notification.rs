//! Notification banner model

use super::OperationKind;
use std::fmt;

/// Error reported by the API for a failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ApiFailure {
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{:#}", err))
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Severity of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

/// The single banner shown above the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub is_dismissable: bool,
    pub body: String,
    /// Operation whose failure raised this banner
    pub source: Option<OperationKind>,
}

impl Notification {
    pub fn from_failure(kind: OperationKind, failure: &ApiFailure) -> Self {
        Self {
            kind: NotificationKind::Error,
            is_dismissable: true,
            body: format!("Sorry! Could not {}: {}", kind.description(), failure),
            source: Some(kind),
        }
    }

    pub fn info(body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            is_dismissable: true,
            body: body.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_banner_names_operation() {
        let banner = Notification::from_failure(
            OperationKind::FetchingPatient,
            &ApiFailure::new("timeout"),
        );
        assert_eq!(banner.kind, NotificationKind::Error);
        assert!(banner.is_dismissable);
        assert_eq!(banner.body, "Sorry! Could not load the patient: timeout");
        assert_eq!(banner.source, Some(OperationKind::FetchingPatient));
    }

    #[test]
    fn test_api_failure_keeps_context_chain() {
        let err = anyhow::anyhow!("connection refused").context("fetch patient 7");
        let failure = ApiFailure::from(err);
        assert_eq!(failure.message, "fetch patient 7: connection refused");
    }
}
